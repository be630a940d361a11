use crate::grid::Grid;

pub const XMAS_PATTERN: [char; 4] = ['X', 'M', 'A', 'S'];

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let grid = Grid::parse(input)?;
    let matches = grid.find_all_matches(&XMAS_PATTERN);

    Ok(matches.len().to_string())
}
