use aoc_utils::ParseError;
use miette::Diagnostic;
use nom::{
    character::complete::{i64, line_ending, space0, space1},
    combinator::{all_consuming, map},
    multi::separated_list1,
    sequence::{preceded, terminated},
    IResult,
};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ReportError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}

/// One line of reactor levels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report(pub Vec<i64>);

impl Report {
    pub fn levels(&self) -> &[i64] {
        &self.0
    }
}

fn report(input: &str) -> IResult<&str, Report> {
    map(
        preceded(space0, terminated(separated_list1(space1, i64), space0)),
        Report,
    )(input)
}

fn reports(input: &str) -> IResult<&str, Vec<Report>> {
    separated_list1(line_ending, report)(input)
}

#[tracing::instrument(skip(input))]
pub fn parse_reports(input: &str) -> Result<Vec<Report>, ReportError> {
    let trimmed = input.trim_end();
    let (_, reports) = all_consuming(reports)(trimmed)
        .map_err(|e| ParseError::from_nom(input, trimmed, e, "space-separated integers"))?;

    tracing::debug!("parsed {} reports", reports.len());
    Ok(reports)
}
