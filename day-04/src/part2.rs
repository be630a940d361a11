use aoc_utils::{count_if, counter};

use crate::grid::{Grid, WordMatch};

pub const MAS_PATTERN: [char; 3] = ['M', 'A', 'S'];

/// Counts centers shared by at least two diagonal matches, i.e. two `MAS`
/// arms crossing on the same `A`
pub fn count_x_shapes(matches: &[WordMatch]) -> usize {
    let centers = counter(
        matches
            .iter()
            .filter(|m| m.is_diagonal())
            .filter_map(WordMatch::center)
            .map(|point| point.position),
    );

    tracing::debug!("{} distinct diagonal centers", centers.len());
    count_if(centers.values(), |&&count| count > 1)
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let grid = Grid::parse(input)?;
    let matches = grid.find_all_matches(&MAS_PATTERN);

    Ok(count_x_shapes(&matches).to_string())
}
