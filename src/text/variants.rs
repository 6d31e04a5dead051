use std::collections::BTreeSet;
use std::iter::FromIterator;
use unicode_segmentation::UnicodeSegmentation;
use super::rules::{VariantRule, default_rules};

///
/// The set of forms a person's name might take inside a street name
///
/// Built once per person and only read afterwards
///
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Variants {
    variants: BTreeSet<String>
}

impl Variants {
    ///
    /// Generate variants using the default Russian suffix rules
    ///
    pub fn generate(full_name: &str) -> Self {
        Variants::with_rules(full_name, &default_rules())
    }

    ///
    /// Generate variants for a full name ("Given Family", "Given Middle Family", ...)
    ///
    /// A name with fewer than two tokens yields no variants at all, meaning
    /// nothing will ever match for that person
    ///
    pub fn with_rules(full_name: &str, rules: &[Box<dyn VariantRule>]) -> Self {
        let mut variants = BTreeSet::new();

        let parts: Vec<&str> = full_name.split_whitespace().collect();

        if parts.len() < 2 {
            return Variants { variants };
        }

        let given = parts[0];
        let surname = parts[parts.len() - 1];

        variants.insert(String::from(surname));
        variants.insert(String::from(full_name));
        variants.insert(syn_initial(given, surname));
        variants.insert(syn_given_surname(given, surname));

        for rule in rules {
            if let Some(inflected) = rule.apply(surname) {
                variants.insert(inflected);
            }
        }

        Variants { variants }
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.variants.iter()
    }

    pub fn contains(&self, variant: &str) -> bool {
        self.variants.contains(variant)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

impl<S: ToString> FromIterator<S> for Variants {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Variants {
            variants: iter.into_iter().map(|v| v.to_string()).collect()
        }
    }
}

///
/// Shorthand for Variants::generate
///
pub fn generate_variants(full_name: &str) -> Variants {
    Variants::generate(full_name)
}

///
/// Abbreviated given name, ie: Зоя Космодемьянская => З. Космодемьянская
///
fn syn_initial(given: &str, surname: &str) -> String {
    let initial = given.graphemes(true).next().unwrap_or("");

    format!("{}. {}", initial, surname)
}

///
/// Given name + family name, dropping middle names
///
/// ie: Александр Матвеевич Матросов => Александр Матросов
///
fn syn_given_surname(given: &str, surname: &str) -> String {
    format!("{} {}", given, surname)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{GrammaticalCase, SuffixRule};

    #[test]
    fn test_generate() {
        let variants = generate_variants("Зоя Космодемьянская");

        assert!(variants.contains("Космодемьянская"));
        assert!(variants.contains("Зоя Космодемьянская"));
        assert!(variants.contains("З. Космодемьянская"));
        assert!(variants.contains("Космодемьянской"));

        // the given + surname form equals the full name here and collapses
        assert_eq!(variants.len(), 4);
    }

    #[test]
    fn test_generate_middle_name() {
        let variants = generate_variants("Александр Матвеевич Матросов");

        assert_eq!(variants, vec![
            "Матросов",
            "Александр Матвеевич Матросов",
            "А. Матросов",
            "Александр Матросов"
        ].into_iter().collect::<Variants>());
    }

    #[test]
    fn test_generate_genitive() {
        let variants = generate_variants("Максим Горький");

        assert!(variants.contains("Горький"));
        assert!(variants.contains("М. Горький"));
        assert!(variants.contains("Горького"));
        assert!(!variants.contains("Горькой"));
    }

    #[test]
    fn test_generate_degenerate() {
        assert!(generate_variants("SingleToken").is_empty());
        assert!(generate_variants("").is_empty());
        assert!(generate_variants("   \t\n").is_empty());
        assert!(generate_variants("  Гастелло  ").is_empty());
    }

    #[test]
    fn test_generate_keeps_original() {
        let variants = generate_variants("  Zoya   Kosmodemyanskaya ");

        assert!(variants.contains("  Zoya   Kosmodemyanskaya "));
        assert!(variants.contains("Zoya Kosmodemyanskaya"));
        assert!(variants.contains("Z. Kosmodemyanskaya"));
        assert!(variants.contains("Kosmodemyanskaya"));
    }

    #[test]
    fn test_custom_rules() {
        let rules: Vec<Box<dyn VariantRule>> = vec![
            Box::new(SuffixRule::new(GrammaticalCase::Genitive, "ov", "ova"))
        ];

        let variants = Variants::with_rules("Alexander Matrosov", &rules);
        assert!(variants.contains("Matrosova"));

        let variants = Variants::with_rules("Зоя Космодемьянская", &[]);
        assert!(!variants.contains("Космодемьянской"));
        assert_eq!(variants.len(), 3);
    }
}
