//! Case-folding and set helpers shared by the lexicon-based stages.

use std::collections::BTreeSet;

/// Lowercase text for phrase matching.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Does `folded` contain any of `phrases` as a substring?
pub fn contains_any(folded: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| folded.contains(p))
}

/// Number of distinct `phrases` present in `folded` (presence, not frequency).
pub fn count_present(folded: &str, phrases: &[&str]) -> usize {
    phrases.iter().filter(|p| folded.contains(*p)).count()
}

/// Sort, deduplicate and join with `", "`. Empty input yields `None`.
pub fn join_sorted<'a, I>(items: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let set: BTreeSet<&str> = items.into_iter().collect();
    if set.is_empty() {
        return None;
    }
    Some(set.into_iter().collect::<Vec<_>>().join(", "))
}
