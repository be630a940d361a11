pub mod part1;
pub mod part2;
pub mod report;

use miette::Context;

/// Both answers, labelled the way the binary prints them
pub fn run(input: &str) -> miette::Result<[String; 2]> {
    let safe = part1::process(input).context("process part 1")?;
    let dampened = part2::process(input).context("process part 2")?;

    Ok([
        format!("Part 1 - Safe Reports: {safe}"),
        format!("Part 2 - Safe Reports with Dampener: {dampened}"),
    ])
}
