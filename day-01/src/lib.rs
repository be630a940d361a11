pub mod lists;
pub mod part1;
pub mod part2;

use miette::Context;

/// Both answers, labelled the way the binary prints them
pub fn run(input: &str) -> miette::Result<[String; 2]> {
    let distance = part1::process(input).context("process part 1")?;
    let similarity = part2::process(input).context("process part 2")?;

    Ok([
        format!("Part 1 - Total Distance: {distance}"),
        format!("Part 2 - Similarity Score: {similarity}"),
    ])
}
