use aoc_utils::counter;

use crate::lists::{parse_lists, ListError};

/// `value` weighted by its count in each list, `None` past `i64`
fn similarity_term(value: i64, count: usize, matches: usize) -> Option<i64> {
    let weight = i64::try_from(count.checked_mul(matches)?).ok()?;
    value.checked_mul(weight)
}

/// Sums each distinct left value times how often it shows up in both lists
pub fn similarity_score(left: &[i64], right: &[i64]) -> Result<i64, ListError> {
    let left_counts = counter(left);
    let right_counts = counter(right);

    // i128 keeps the running total independent of map iteration order
    let total = left_counts
        .iter()
        .map(|(&&value, &count)| {
            let matches = right_counts.get(&value).copied().unwrap_or(0);
            similarity_term(value, count, matches).map(i128::from)
        })
        .sum::<Option<i128>>()
        .ok_or(ListError::Overflow("similarity term"))?;

    i64::try_from(total).map_err(|_| ListError::Overflow("similarity score"))
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let lists = parse_lists(input)?;
    let result = similarity_score(&lists.left, &lists.right)?;

    tracing::debug!(
        "{} of {} left IDs appear in the right list",
        lists.left.iter().filter(|id| lists.right.contains(id)).count(),
        lists.left.len()
    );

    Ok(result.to_string())
}
