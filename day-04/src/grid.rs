use aoc_utils::ParseError;
use glam::IVec2;
use itertools::iproduct;
use miette::{Diagnostic, SourceSpan};
use nom::{
    character::complete::{line_ending, satisfy},
    combinator::all_consuming,
    multi::{many1, separated_list1},
    IResult, Parser,
};
use nom_locate::LocatedSpan;
use thiserror::Error;

/// Every unit step a word can run along, x to the right and y down
pub const DIRECTIONS: [IVec2; 8] = [
    IVec2::new(-1, -1),
    IVec2::new(0, -1),
    IVec2::new(1, -1),
    IVec2::new(-1, 0),
    IVec2::new(1, 0),
    IVec2::new(-1, 1),
    IVec2::new(0, 1),
    IVec2::new(1, 1),
];

#[derive(Debug, Error, Diagnostic)]
pub enum GridError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error("grid row {line} has {found} cells, expected {expected}")]
    #[diagnostic(
        code(day04::ragged_grid),
        help("every row of the word search must have the same width")
    )]
    Ragged {
        #[source_code]
        src: String,
        #[label("this row")]
        span: SourceSpan,
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// A letter visited by a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub letter: char,
    pub position: IVec2,
}

/// The cells that spell a pattern, in pattern order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMatch {
    pub points: Vec<Point>,
}

impl WordMatch {
    /// True when the word runs along a diagonal
    pub fn is_diagonal(&self) -> bool {
        match self.points.as_slice() {
            [first, second, ..] => {
                first.position.x != second.position.x && first.position.y != second.position.y
            }
            _ => false,
        }
    }

    /// The middle point of the word, e.g. the `A` of `MAS`
    pub fn center(&self) -> Option<&Point> {
        self.points.get(self.points.len() / 2)
    }
}

/// Row-major character grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
    width: usize,
    height: usize,
}

impl Grid {
    #[tracing::instrument(skip(input))]
    pub fn parse(input: &str) -> Result<Self, GridError> {
        let trimmed = input.trim_end();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let (_, rows) = all_consuming(parser::parse_rows)(Span::new(trimmed))
            .map_err(|e| parser::to_parse_error(input, trimmed, e))?;

        let width = rows[0].len();
        if let Some(row) = rows.iter().find(|row| row.len() != width) {
            let start = row[0].position;
            return Err(GridError::Ragged {
                src: input.to_string(),
                span: (
                    start.location_offset(),
                    row.iter().map(|cell| cell.letter.len_utf8()).sum::<usize>(),
                )
                    .into(),
                line: start.location_line() as usize,
                expected: width,
                found: row.len(),
            });
        }

        let height = rows.len();
        let cells = rows.into_iter().flatten().map(|cell| cell.letter).collect();
        tracing::debug!("parsed {width}x{height} grid");

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The letter at `position`, or `None` outside the grid
    pub fn letter_at(&self, position: IVec2) -> Option<char> {
        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x).copied()
    }

    /// Walks `pattern` from `start`, one `step` per letter
    pub fn match_in_direction(
        &self,
        start: IVec2,
        step: IVec2,
        pattern: &[char],
    ) -> Option<WordMatch> {
        if pattern.is_empty() {
            return None;
        }

        let points = pattern
            .iter()
            .enumerate()
            .map(|(i, &letter)| {
                let position = start + step * i as i32;
                (self.letter_at(position)? == letter).then_some(Point { letter, position })
            })
            .collect::<Option<Vec<_>>>()?;

        Some(WordMatch { points })
    }

    /// Every cell and direction where `pattern` can be read. A word that reads
    /// the same from both ends is reported once per end.
    pub fn find_all_matches(&self, pattern: &[char]) -> Vec<WordMatch> {
        iproduct!(0..self.height, 0..self.width)
            .map(|(y, x)| IVec2::new(x as i32, y as i32))
            .flat_map(move |start| {
                DIRECTIONS
                    .iter()
                    .filter_map(move |&step| self.match_in_direction(start, step, pattern))
            })
            .collect()
    }
}

type Span<'a> = LocatedSpan<&'a str>;

// region: nom parser
mod parser {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct LocatedCell<'a> {
        pub letter: char,
        pub position: Span<'a>,
    }

    pub(crate) fn parse_cell(input: Span) -> IResult<Span, LocatedCell> {
        satisfy(|c: char| !c.is_whitespace())
            .map(|letter| LocatedCell {
                letter,
                position: input,
            })
            .parse(input)
    }

    pub(crate) fn parse_rows(input: Span) -> IResult<Span, Vec<Vec<LocatedCell>>> {
        separated_list1(line_ending, many1(parse_cell))(input)
    }

    pub(crate) fn to_parse_error(
        src: &str,
        parsed: &str,
        err: nom::Err<nom::error::Error<Span>>,
    ) -> ParseError {
        let (offset, rest) = match err {
            nom::Err::Error(e) | nom::Err::Failure(e) => {
                (e.input.location_offset(), *e.input.fragment())
            }
            nom::Err::Incomplete(_) => (parsed.len(), ""),
        };
        let skip = if rest.starts_with("\r\n") {
            2
        } else if rest.starts_with('\n') {
            1
        } else {
            0
        };
        ParseError::new(src, offset + skip, "rows of letters without spaces or blank lines")
    }
}
// endregion

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SAMPLE: &str = "MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

    #[test_log::test]
    fn test_parse_sample() -> miette::Result<()> {
        let grid = Grid::parse(SAMPLE)?;
        assert_eq!((grid.width(), grid.height()), (10, 10));
        assert_eq!(grid.letter_at(IVec2::new(0, 0)), Some('M'));
        assert_eq!(grid.letter_at(IVec2::new(4, 0)), Some('X'));
        assert_eq!(grid.letter_at(IVec2::new(9, 9)), Some('X'));
        Ok(())
    }

    #[rstest]
    #[case(IVec2::new(-1, 0))]
    #[case(IVec2::new(0, -1))]
    #[case(IVec2::new(3, 0))]
    #[case(IVec2::new(0, 2))]
    fn test_letter_out_of_bounds(#[case] position: IVec2) -> miette::Result<()> {
        let grid = Grid::parse("ABC\nDEF")?;
        assert_eq!(grid.letter_at(position), None);
        Ok(())
    }

    #[test]
    fn test_empty_grid() -> miette::Result<()> {
        let grid = Grid::parse("\n\n")?;
        assert_eq!(grid, Grid::default());
        assert!(grid.find_all_matches(&['X']).is_empty());
        Ok(())
    }

    #[test]
    fn test_ragged_grid() {
        match Grid::parse("XMAS\nXMA\nXMAS") {
            Err(GridError::Ragged {
                line,
                expected,
                found,
                ..
            }) => assert_eq!((line, expected, found), (2, 4, 3)),
            other => panic!("expected a ragged grid error, got {other:?}"),
        }
    }

    #[rstest]
    #[case("XM AS", 1)]
    #[case("XMAS\n\nXMAS", 2)]
    #[case("XMAS\n XMA", 2)]
    fn test_parse_rejects_malformed(#[case] input: &str, #[case] line: usize) {
        match Grid::parse(input) {
            Err(GridError::Parse(err)) => assert_eq!(err.line(), line),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_match_records_points() -> miette::Result<()> {
        let grid = Grid::parse("SAMX\n....\n....")?;
        let found = grid
            .match_in_direction(IVec2::new(3, 0), IVec2::new(-1, 0), &['X', 'M', 'A', 'S'])
            .expect("XMAS read right to left");
        let positions: Vec<_> = found.points.iter().map(|p| (p.letter, p.position)).collect();
        assert_eq!(
            positions,
            vec![
                ('X', IVec2::new(3, 0)),
                ('M', IVec2::new(2, 0)),
                ('A', IVec2::new(1, 0)),
                ('S', IVec2::new(0, 0)),
            ]
        );
        assert!(!found.is_diagonal());
        assert_eq!(found.center().map(|p| p.letter), Some('A'));
        Ok(())
    }

    #[test]
    fn test_match_stops_at_edge() -> miette::Result<()> {
        let grid = Grid::parse("XMA")?;
        assert!(grid
            .match_in_direction(IVec2::ZERO, IVec2::X, &['X', 'M', 'A', 'S'])
            .is_none());
        assert!(grid.match_in_direction(IVec2::ZERO, IVec2::X, &[]).is_none());
        Ok(())
    }

    #[test]
    fn test_symmetric_word_found_from_both_ends() -> miette::Result<()> {
        let grid = Grid::parse("ABA")?;
        let matches = grid.find_all_matches(&['A', 'B', 'A']);
        assert_eq!(matches.len(), 2);
        assert_ne!(matches[0].points[0], matches[1].points[0]);
        Ok(())
    }

    #[test]
    fn test_all_eight_directions() -> miette::Result<()> {
        let grid = Grid::parse("SSS\nSAS\nSSS")?;
        let matches = grid.find_all_matches(&['A', 'S']);
        assert_eq!(matches.len(), 8);
        assert_eq!(matches.iter().filter(|m| m.is_diagonal()).count(), 4);
        Ok(())
    }
}
