use nom::{
    bytes::complete::tag,
    character::complete::{char, digit1},
    combinator::{map, map_res, verify},
    sequence::{delimited, preceded, separated_pair},
    IResult,
};

const MAX_NUMBER_LENGTH: usize = 3;

/// A well-formed `mul(x,y)` instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Multiplication {
    pub x: u32,
    pub y: u32,
}

impl Multiplication {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    pub fn evaluate(&self) -> u64 {
        u64::from(self.x) * u64::from(self.y)
    }
}

/// One to three decimal digits, no sign
fn valid_number(input: &str) -> IResult<&str, u32> {
    map_res(
        verify(digit1, |num: &str| num.len() <= MAX_NUMBER_LENGTH),
        |num: &str| num.parse::<u32>(),
    )(input)
}

/// Parses `mul(x,y)` with nothing else between the tokens
fn mul_expression(input: &str) -> IResult<&str, Multiplication> {
    map(
        preceded(
            tag("mul"),
            delimited(
                char('('),
                separated_pair(valid_number, char(','), valid_number),
                char(')'),
            ),
        ),
        |(x, y)| Multiplication::new(x, y),
    )(input)
}

/// Finds every instruction left to right, skipping one character after each miss
pub fn parse_multiplications(input: &str) -> Vec<Multiplication> {
    let mut results = Vec::new();
    let mut remaining = input;

    while !remaining.is_empty() {
        match mul_expression(remaining) {
            Ok((rest, mul)) => {
                results.push(mul);
                remaining = rest;
            }
            Err(_) => {
                let mut chars = remaining.chars();
                chars.next();
                remaining = chars.as_str();
            }
        }
    }

    results
}

pub fn sum_multiplications(input: &str) -> u64 {
    parse_multiplications(input)
        .iter()
        .map(Multiplication::evaluate)
        .sum()
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    tracing::debug!("found {} mul instructions", parse_multiplications(input).len());

    let result = sum_multiplications(input);
    Ok(result.to_string())
}
