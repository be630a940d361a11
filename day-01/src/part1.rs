use itertools::Itertools;

use crate::lists::{parse_lists, ListError};

/// Pairs the lists smallest-to-smallest and sums how far apart each pair is
pub fn total_distance(left: &[i64], right: &[i64]) -> Result<u64, ListError> {
    if left.len() != right.len() {
        return Err(ListError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    left.iter()
        .sorted_unstable()
        .zip(right.iter().sorted_unstable())
        .try_fold(0u64, |total, (a, b)| total.checked_add(a.abs_diff(*b)))
        .ok_or(ListError::Overflow("total distance"))
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let lists = parse_lists(input)?;
    let result = total_distance(&lists.left, &lists.right)?;

    Ok(result.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process() -> miette::Result<()> {
        let input = "3   4
4   3
2   5
1   3
3   9
3   3";
        assert_eq!("11", process(input)?);
        Ok(())
    }

    #[test]
    fn test_total_distance_ignores_input_order() -> miette::Result<()> {
        assert_eq!(11, total_distance(&[3, 4, 2, 1, 3, 3], &[4, 3, 5, 3, 9, 3])?);
        assert_eq!(11, total_distance(&[1, 2, 3, 3, 3, 4], &[9, 5, 4, 3, 3, 3])?);
        assert_eq!(0, total_distance(&[], &[])?);
        Ok(())
    }

    #[test]
    fn test_total_distance_negative_ids() -> miette::Result<()> {
        assert_eq!(2, total_distance(&[-5, 0], &[1, -4])?);
        assert_eq!(7, total_distance(&[-5, 0], &[1, 1])?);
        Ok(())
    }

    #[test]
    fn test_extreme_ids() -> miette::Result<()> {
        let input = "-9223372036854775808 9223372036854775807";
        assert_eq!("18446744073709551615", process(input)?);
        Ok(())
    }

    #[test]
    fn test_total_distance_overflow() {
        let err = total_distance(&[i64::MIN, i64::MIN], &[i64::MAX, i64::MAX]).unwrap_err();
        assert!(matches!(err, ListError::Overflow(_)));
    }

    #[test]
    fn test_length_mismatch() {
        let err = total_distance(&[1, 2, 3], &[1, 2]).unwrap_err();
        assert!(matches!(
            err,
            ListError::LengthMismatch { left: 3, right: 2 }
        ));
    }
}
