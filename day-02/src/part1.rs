use aoc_utils::count_if;

use crate::report::{parse_reports, Report};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Slope {
    Increasing,
    Decreasing,
    Unsafe,
}

/// Classifies the step between two adjacent levels
pub fn evaluate_slope(start: i64, end: i64) -> Slope {
    match end.checked_sub(start) {
        Some(1..=3) => Slope::Increasing,
        Some(-3..=-1) => Slope::Decreasing,
        _ => Slope::Unsafe,
    }
}

/// A sequence is safe when every step has the same direction and a size of 1 to 3.
/// Fewer than two levels have no steps and are trivially safe.
pub fn is_safe(levels: &[i64]) -> bool {
    let Some(first) = levels.get(..2) else {
        return true;
    };

    let initial_slope = evaluate_slope(first[0], first[1]);
    if initial_slope == Slope::Unsafe {
        return false;
    }

    levels
        .windows(2)
        .all(|window| evaluate_slope(window[0], window[1]) == initial_slope)
}

pub fn count_safe(reports: &[Report]) -> usize {
    count_if(reports, |report| is_safe(report.levels()))
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let reports = parse_reports(input)?;
    let safe_count = count_safe(&reports);

    tracing::debug!("{safe_count} of {} reports are safe", reports.len());
    Ok(safe_count.to_string())
}
