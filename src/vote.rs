//! Majority voting over neighbor labels.

/// Returns the majority label among `neighbors`, ordered nearest first.
///
/// Counts accumulate in first-occurrence order in an explicit side table, so
/// a count tie resolves to the label seen earliest in the scan — the label
/// whose nearest representative is closest to the query. An unordered map
/// would make ties nondeterministic; the side table keeps them exact.
///
/// Callers guarantee `neighbors` is non-empty.
///
/// # Panics
///
/// Debug-asserts that `neighbors` is non-empty.
pub(crate) fn majority_label<L: Clone + PartialEq>(neighbors: &[L]) -> L {
    debug_assert!(!neighbors.is_empty());

    let mut tally: Vec<(&L, usize)> = Vec::with_capacity(neighbors.len());
    for label in neighbors {
        match tally.iter().position(|(seen, _)| *seen == label) {
            Some(i) => tally[i].1 += 1,
            None => tally.push((label, 1)),
        }
    }

    // Strict inequality keeps the earliest first occurrence on count ties.
    let mut best = 0;
    for i in 1..tally.len() {
        if tally[i].1 > tally[best].1 {
            best = i;
        }
    }
    tally[best].0.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_majority() {
        assert_eq!(majority_label(&["a", "b", "a", "c"]), "a");
    }

    #[test]
    fn test_unanimous() {
        assert_eq!(majority_label(&[7, 7, 7]), 7);
    }

    #[test]
    fn test_single_neighbor() {
        assert_eq!(majority_label(&["only"]), "only");
    }

    #[test]
    fn test_tie_goes_to_first_occurrence() {
        // One vote each: the nearest neighbor's label wins.
        assert_eq!(majority_label(&["a", "b"]), "a");
        assert_eq!(majority_label(&["b", "a"]), "b");
    }

    #[test]
    fn test_two_way_count_tie() {
        // Two votes each; "x" first appears at position 0, "y" at position 1.
        assert_eq!(majority_label(&["x", "y", "y", "x"]), "x");
        // Swapped first occurrences flip the winner.
        assert_eq!(majority_label(&["y", "x", "x", "y"]), "y");
    }

    #[test]
    fn test_majority_beats_nearer_minority() {
        // The single nearest label loses to a farther majority.
        assert_eq!(majority_label(&["a", "b", "b", "b"]), "b");
    }

    #[test]
    fn test_works_without_hash_or_ord() {
        // Labels only need Clone + PartialEq.
        #[derive(Clone, PartialEq, Debug)]
        struct Tag(f64);
        assert_eq!(majority_label(&[Tag(1.0), Tag(2.0), Tag(1.0)]), Tag(1.0));
    }
}
