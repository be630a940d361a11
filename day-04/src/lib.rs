pub mod grid;
pub mod part1;
pub mod part2;

use miette::Context;

/// Both answers, labelled the way the binary prints them
pub fn run(input: &str) -> miette::Result<[String; 2]> {
    let xmas = part1::process(input).context("process part 1")?;
    let x_mas = part2::process(input).context("process part 2")?;

    Ok([
        format!("Part 1 - XMAS occurrences: {xmas}"),
        format!("Part 2 - X-MAS shapes: {x_mas}"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run() -> miette::Result<()> {
        let input = "MMMSXXMASM\nMSAMXMSMSA\nAMXSXMAAMM\nMSAMASMSMX\nXMASAMXAMM\nXXAMMXXAMA\nSMSMSASXSS\nSAXAMASAAA\nMAMMMXMMMM\nMXMXAXMASX\n";
        assert_eq!(
            run(input)?,
            [
                "Part 1 - XMAS occurrences: 18".to_string(),
                "Part 2 - X-MAS shapes: 9".to_string(),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_run_rejects_malformed_input() {
        assert!(run("XMAS\nXMA\n").is_err());
    }
}
