use day_04::*;

fn main() {
    divan::main();
}

const SAMPLE_INPUT: &str = "MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX";

#[divan::bench]
fn part1() {
    part1::process(divan::black_box(SAMPLE_INPUT)).unwrap();
}

#[divan::bench]
fn part2() {
    part2::process(divan::black_box(SAMPLE_INPUT)).unwrap();
}

#[divan::bench]
fn parse_sample() {
    grid::Grid::parse(divan::black_box(SAMPLE_INPUT)).unwrap();
}

#[divan::bench]
fn find_mas_matches() -> usize {
    let grid = grid::Grid::parse(SAMPLE_INPUT).unwrap();
    divan::black_box(&grid)
        .find_all_matches(&part2::MAS_PATTERN)
        .len()
}
