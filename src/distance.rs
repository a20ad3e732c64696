//! Levenshtein edit distance between character sequences
//!
//! Every feature metric compares recognized text against a corrected
//! reference with this primitive, so it operates on Unicode scalar values
//! (`char`), not bytes.

/// Compute the Levenshtein edit distance between two strings.
///
/// Single-row dynamic programming: the operands are swapped so the row is
/// sized by the shorter input, bounding memory to O(min(len(a), len(b))).
///
/// # Examples
///
/// ```
/// use dyslexia_screening::distance::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("abc", ""), 3);
/// ```
#[must_use = "distance is computed but not used"]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // Keep the longer sequence on the outer loop so the DP row stays short
    let (longer, shorter) = if a_chars.len() >= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    if shorter.is_empty() {
        return longer.len();
    }

    let mut previous_row: Vec<usize> = (0..=shorter.len()).collect();

    for (i, c1) in longer.iter().enumerate() {
        let mut current_row = Vec::with_capacity(shorter.len() + 1);
        current_row.push(i + 1);

        for (j, c2) in shorter.iter().enumerate() {
            let insertions = previous_row[j + 1] + 1;
            let deletions = current_row[j] + 1;
            let substitutions = previous_row[j] + usize::from(c1 != c2);
            current_row.push(insertions.min(deletions).min(substitutions));
        }

        previous_row = current_row;
    }

    previous_row[shorter.len()]
}
