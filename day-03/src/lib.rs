pub mod part1;
pub mod part2;

use miette::Context;

/// Both answers, labelled the way the binary prints them
pub fn run(input: &str) -> miette::Result<[String; 2]> {
    let all = part1::process(input).context("process part 1")?;
    let enabled = part2::process(input).context("process part 2")?;

    Ok([
        format!("Part 1 - Total of all multiplications: {all}"),
        format!("Part 2 - Total of enabled multiplications: {enabled}"),
    ])
}
