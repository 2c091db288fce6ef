//! Best-effort problem titles from links such as
//! `https://leetcode.com/problems/two-sum/description/`.

/// Returned whenever a title cannot be derived from the link.
pub const UNKNOWN_PROBLEM: &str = "Unknown Problem";

const PROBLEMS_SEGMENT: &str = "problems";

/// Derive a display title from a problem link.
///
/// The segment following the first `problems` path segment is taken as the
/// slug; hyphens become spaces and every word is title-cased, so
/// `.../problems/two-sum/` becomes `Two Sum`. Never fails: any link that
/// does not follow the pattern yields [`UNKNOWN_PROBLEM`].
pub fn extract_name(url: &str) -> String {
    slug_after_problems(url)
        .map(|slug| title_case(&slug.replace('-', " ")))
        .filter(|title| !title.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_PROBLEM.to_string())
}

fn slug_after_problems(url: &str) -> Option<&str> {
    // query string and fragment are not part of the path
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let path = path.strip_suffix('/').unwrap_or(path);

    let mut segments = path.split('/');
    segments.find(|s| *s == PROBLEMS_SEGMENT)?;

    segments.next().filter(|slug| !slug.is_empty())
}

/// Upper-case the first letter of every alphabetic run and lower-case the
/// rest (`"3sum closest"` → `"3Sum Closest"`).
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}
