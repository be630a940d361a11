use std::collections::HashMap;
use std::hash::Hash;

/// Counts the items that satisfy `predicate`
pub fn count_if<I, F>(items: I, mut predicate: F) -> usize
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    items.into_iter().filter(|item| predicate(item)).count()
}

/// Builds a map from each distinct item to the number of times it occurs
pub fn counter<I>(items: I) -> HashMap<I::Item, usize>
where
    I: IntoIterator,
    I::Item: Hash + Eq,
{
    items.into_iter().fold(HashMap::new(), |mut acc, item| {
        *acc.entry(item).or_insert(0) += 1;
        acc
    })
}
