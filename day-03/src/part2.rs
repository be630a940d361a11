use nom::{branch::alt, bytes::complete::tag, combinator::value, IResult};

use crate::part1::sum_multiplications;

/// A piece of memory between control tokens, or the token itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Do,
    Dont,
    Memory(&'a str),
}

/// Tracks whether the next multiplications count
#[derive(Debug)]
struct ParserState {
    enabled: bool,
    total: u64,
}

impl ParserState {
    fn new() -> Self {
        Self {
            enabled: true,
            total: 0,
        }
    }

    fn apply(&mut self, segment: Segment) {
        match segment {
            Segment::Do => self.enabled = true,
            Segment::Dont => self.enabled = false,
            Segment::Memory(text) if self.enabled => self.total += sum_multiplications(text),
            Segment::Memory(_) => {}
        }
    }
}

fn control(input: &str) -> IResult<&str, Segment> {
    alt((
        value(Segment::Dont, tag("don't()")),
        value(Segment::Do, tag("do()")),
    ))(input)
}

/// Splits memory on `do()` / `don't()`, keeping the tokens as their own segments.
/// Empty memory between adjacent tokens is dropped.
pub fn split_segments(input: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    while offset < input.len() {
        match control(&input[offset..]) {
            Ok((rest, token)) => {
                if start < offset {
                    segments.push(Segment::Memory(&input[start..offset]));
                }
                segments.push(token);
                offset = input.len() - rest.len();
                start = offset;
            }
            Err(_) => {
                offset += input[offset..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    if start < input.len() {
        segments.push(Segment::Memory(&input[start..]));
    }

    segments
}

/// Sums multiplications in the segments reached while enabled; memory before
/// the first control token is enabled
pub fn sum_enabled_multiplications(input: &str) -> u64 {
    let mut state = ParserState::new();
    for segment in split_segments(input) {
        state.apply(segment);
    }
    state.total
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let result = sum_enabled_multiplications(input);
    Ok(result.to_string())
}
