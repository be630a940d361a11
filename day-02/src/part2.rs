use aoc_utils::count_if;

use crate::part1::{count_safe, is_safe};
use crate::report::parse_reports;

/// Checks whether dropping any single level leaves a safe sequence
pub fn can_be_made_safe(levels: &[i64]) -> bool {
    (0..levels.len()).any(|skip_idx| {
        let mut modified = levels.to_vec();
        modified.remove(skip_idx);
        is_safe(&modified)
    })
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let reports = parse_reports(input)?;

    let naturally_safe = count_safe(&reports);
    let dampened = count_if(
        reports.iter().filter(|report| !is_safe(report.levels())),
        |report| can_be_made_safe(report.levels()),
    );

    tracing::debug!("{naturally_safe} safe reports, {dampened} more with the dampener");
    Ok((naturally_safe + dampened).to_string())
}
