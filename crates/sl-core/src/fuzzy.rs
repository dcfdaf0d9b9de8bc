//! Typo-tolerant substring matching for search-as-you-type
//!
//! The edit distance is the classic Levenshtein DP over the full matrix,
//! O(|a|·|b|) in time and space. Callers are responsible for keeping inputs
//! short (labels and domains, not documents).

/// Default typo tolerance for interactive search.
pub const DEFAULT_TYPO_TOLERANCE: usize = 1;

/// Levenshtein distance between two strings: the minimum number of
/// single-character insertions, deletions, or substitutions to turn `a`
/// into `b`.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    edit_distance_chars(&a, &b)
}

fn edit_distance_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // matrix[i][j] = distance between b[0..i) and a[0..j)
    let mut matrix = vec![vec![0usize; a.len() + 1]; b.len() + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=b.len() {
        for j in 1..=a.len() {
            if b[i - 1] == a[j - 1] {
                matrix[i][j] = matrix[i - 1][j - 1];
            } else {
                let substitution = matrix[i - 1][j - 1] + 1;
                let insertion = matrix[i][j - 1] + 1;
                let deletion = matrix[i - 1][j] + 1;
                matrix[i][j] = substitution.min(insertion).min(deletion);
            }
        }
    }

    matrix[b.len()][a.len()]
}

/// Check if `query` matches anywhere within `target`, tolerating up to
/// `max_distance` typos. Case-insensitive.
///
/// An exact substring match always succeeds. Queries of length <= 2 require
/// an exact substring match to keep false positives down on short tokens.
/// Otherwise every window of `target` sized within `max_distance` of the
/// query length is scored; the first window within tolerance wins. This is
/// a deliberate brute-force scan: inputs are short interactive-search
/// strings, not documents.
pub fn fuzzy_match(query: &str, target: &str, max_distance: usize) -> bool {
    if query.is_empty() || target.is_empty() {
        return false;
    }

    let q_lower = query.to_lowercase();
    let t_lower = target.to_lowercase();

    if t_lower.contains(&q_lower) {
        return true;
    }

    let q: Vec<char> = q_lower.chars().collect();
    if q.len() <= 2 {
        return false;
    }
    let t: Vec<char> = t_lower.chars().collect();

    let min_window = q.len().saturating_sub(max_distance).max(1);
    let max_window = q.len() + max_distance;

    for window in min_window..=max_window {
        if window > t.len() {
            break;
        }
        for start in 0..=t.len() - window {
            if edit_distance_chars(&q, &t[start..start + window]) <= max_distance {
                return true;
            }
        }
    }

    false
}

/// Alias of [`fuzzy_match`] under the name the search UI uses.
pub fn fuzzy_includes(query: &str, target: &str, typo_tolerance: usize) -> bool {
    fuzzy_match(query, target, typo_tolerance)
}
