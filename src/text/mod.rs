mod rules;
mod variants;
pub mod matcher;

//
// A note on fn names:
// - Functions that operate on Strings should be prefixed with `str_`
// - Functions that generate name variants should be prefixed with `syn_`
//

pub use self::rules::{GrammaticalCase, SuffixRule, VariantRule, default_rules};
pub use self::variants::{Variants, generate_variants};
pub use self::matcher::{MatchConfig, MatchResult, Matcher, UniqueStreets};

use regex::Regex;

///
/// Canonical form used for every comparison: lowercased, trimmed and
/// with every run of whitespace collapsed to a single space
///
/// Absent or empty input normalizes to the empty string
///
pub fn normalize(text: Option<&str>) -> String {
    match text {
        None => String::new(),
        Some(text) => str_normalize(text)
    }
}

pub fn str_normalize(text: &str) -> String {
    lazy_static! {
        static ref SPACE: Regex = Regex::new(r"\s+").unwrap();
    }

    if text.is_empty() {
        return String::new();
    }

    let text = text.to_lowercase();

    SPACE.replace_all(text.trim(), " ").to_string()
}

///
/// Return the similarity ratio of two strings in the range [0, 1]
///
/// The ratio is twice the length of the longest common subsequence divided by
/// the combined length of both strings, measured in chars
///
pub fn similarity(a: &str, b: &str) -> f64 {
    let v1: Vec<char> = a.chars().collect();
    let v2: Vec<char> = b.chars().collect();

    let total = v1.len() + v2.len();

    if total == 0 { return 1.0; }
    if v1.is_empty() || v2.is_empty() { return 0.0; }

    (2 * lcs(&v1, &v2)) as f64 / total as f64
}

///
/// Length of the longest common subsequence using two rolling rows
///
fn lcs(v1: &[char], v2: &[char]) -> usize {
    let mut prev: Vec<usize> = vec![0; v2.len() + 1];
    let mut curr: Vec<usize> = vec![0; v2.len() + 1];

    for x in v1 {
        for (j, y) in v2.iter().enumerate() {
            curr[j + 1] = if x == y {
                prev[j] + 1
            } else {
                std::cmp::max(curr[j], prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[v2.len()]
}
