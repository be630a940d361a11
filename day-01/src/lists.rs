use aoc_utils::ParseError;
use miette::Diagnostic;
use nom::{
    character::complete::{i64, line_ending, space0, space1},
    combinator::all_consuming,
    multi::separated_list1,
    sequence::{preceded, separated_pair, terminated},
    IResult,
};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ListError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error("location lists differ in length: {left} left, {right} right")]
    #[diagnostic(
        code(day01::length_mismatch),
        help("every line must hold one location ID for each list")
    )]
    LengthMismatch { left: usize, right: usize },

    #[error("{0} does not fit in a 64-bit integer")]
    #[diagnostic(
        code(day01::overflow),
        help("location IDs this far apart cannot be combined into a single answer")
    )]
    Overflow(&'static str),
}

/// The two columns of location IDs, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationLists {
    pub left: Vec<i64>,
    pub right: Vec<i64>,
}

fn location_pair(input: &str) -> IResult<&str, (i64, i64)> {
    preceded(space0, terminated(separated_pair(i64, space1, i64), space0))(input)
}

fn location_pairs(input: &str) -> IResult<&str, Vec<(i64, i64)>> {
    separated_list1(line_ending, location_pair)(input)
}

/// Splits every `a   b` line into the left and right lists
#[tracing::instrument(skip(input))]
pub fn parse_lists(input: &str) -> Result<LocationLists, ListError> {
    let trimmed = input.trim_end();
    let (_, pairs) = all_consuming(location_pairs)(trimmed).map_err(|e| {
        ParseError::from_nom(input, trimmed, e, "two whitespace-separated integers")
    })?;

    let (left, right): (Vec<_>, Vec<_>) = pairs.into_iter().unzip();
    tracing::debug!("parsed {} location pairs", left.len());

    Ok(LocationLists { left, right })
}
