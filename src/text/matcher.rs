use std::collections::BTreeSet;
use crate::text::{normalize, similarity, Variants};

pub const DEFAULT_THRESHOLD: f64 = 0.85;
pub const DEFAULT_MIN_WORD_LEN: usize = 3;

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct MatchConfig {
    /// Minimum similarity ratio (inclusive) for a fuzzy match
    pub threshold: f64,

    /// Street words must be strictly longer than this (in chars) to be
    /// compared against a variant on their own
    pub min_word_len: usize
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            threshold: DEFAULT_THRESHOLD,
            min_word_len: DEFAULT_MIN_WORD_LEN
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct MatchResult {
    /// Normalized street name
    pub street: String,
    pub is_match: bool
}

#[derive(Debug, Clone, Default)]
pub struct Matcher {
    pub config: MatchConfig
}

impl Matcher {
    pub fn new(config: MatchConfig) -> Self {
        Matcher {
            config
        }
    }

    ///
    /// Determines if a street name honors the person the variants were generated for
    ///
    /// For every variant, in order of decreasing strength:
    ///
    /// 1. The normalized variant is contained in the normalized street name
    ///
    ///    Zoya Kosmodemyanskaya Street contains kosmodemyanskaya
    ///
    /// 2. The whole street name is similar enough to the variant
    ///
    /// 3. A single street word longer than `min_word_len` is similar enough to the variant
    ///
    ///    Ulitsa Kosmodem'yanskoy => kosmodem'yanskoy ~ kosmodemyanskaya
    ///
    /// Any variant passing any check is a match. Absent names never match.
    ///
    pub fn is_hero_street(&self, street: Option<&str>, variants: &Variants) -> bool {
        let street = normalize(street);

        self.is_normalized_match(&street, variants)
    }

    pub fn evaluate(&self, street: Option<&str>, variants: &Variants) -> MatchResult {
        let street = normalize(street);
        let is_match = self.is_normalized_match(&street, variants);

        MatchResult {
            street,
            is_match
        }
    }

    fn is_normalized_match(&self, street: &str, variants: &Variants) -> bool {
        if street.is_empty() {
            return false;
        }

        let words: Vec<&str> = street
            .split(' ')
            .filter(|word| word.chars().count() > self.config.min_word_len)
            .collect();

        for variant in variants.iter() {
            let variant = normalize(Some(variant));

            // An empty variant is a substring of everything
            if variant.is_empty() {
                continue;
            }

            if street.contains(variant.as_str()) {
                return true;
            }

            if similarity(street, &variant) >= self.config.threshold {
                return true;
            }

            for word in &words {
                if similarity(word, &variant) >= self.config.threshold {
                    return true;
                }
            }
        }

        false
    }
}

///
/// Matching street names collected for a single region pass
///
/// Streets are keyed purely on their normalized name: "Zoe Street" and
/// "zoe   street" count once, as do two different streets sharing a name
///
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UniqueStreets {
    streets: BTreeSet<String>
}

impl UniqueStreets {
    pub fn new() -> Self {
        UniqueStreets::default()
    }

    ///
    /// Evaluate a street and keep its normalized name if it matches
    ///
    /// Returns whether the street matched, whether or not it was already present
    ///
    pub fn insert(&mut self, matcher: &Matcher, street: Option<&str>, variants: &Variants) -> bool {
        let result = matcher.evaluate(street, variants);

        if result.is_match {
            self.streets.insert(result.street);
        }

        result.is_match
    }

    pub fn count(&self) -> usize {
        self.streets.len()
    }

    pub fn into_streets(self) -> BTreeSet<String> {
        self.streets
    }
}
