use std::fmt;

///
/// Grammatical case a variant rule inflects a family name into
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GrammaticalCase {
    Genitive,
    Instrumental
}

impl fmt::Display for GrammaticalCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammaticalCase::Genitive => write!(f, "genitive"),
            GrammaticalCase::Instrumental => write!(f, "instrumental")
        }
    }
}

///
/// A rule that may derive one extra variant from a family name
///
/// Rules are independent of each other: every rule in a list is checked
/// against the family name and each one contributes at most one variant
///
pub trait VariantRule: fmt::Debug {
    fn apply(&self, surname: &str) -> Option<String>;
}

///
/// Fixed suffix substitution, ie: Космодемьянская => Космодемьянской
///
/// This is a heuristic approximation of declension, not morphology
///
#[derive(Debug, PartialEq, Clone)]
pub struct SuffixRule {
    pub case: GrammaticalCase,
    pub suffix: String,
    pub replacement: String
}

impl SuffixRule {
    pub fn new(case: GrammaticalCase, suffix: impl ToString, replacement: impl ToString) -> Self {
        SuffixRule {
            case,
            suffix: suffix.to_string(),
            replacement: replacement.to_string()
        }
    }
}

impl VariantRule for SuffixRule {
    fn apply(&self, surname: &str) -> Option<String> {
        if self.suffix.is_empty() {
            return None;
        }

        match surname.strip_suffix(self.suffix.as_str()) {
            Some(stem) => Some(format!("{}{}", stem, self.replacement)),
            None => None
        }
    }
}

///
/// Russian adjectival family names
///
/// - feminine -ая takes -ой (Космодемьянская => Космодемьянской)
/// - masculine -ий takes -ого (Горький => Горького)
///
pub fn default_rules() -> Vec<Box<dyn VariantRule>> {
    vec![
        Box::new(SuffixRule::new(GrammaticalCase::Instrumental, "ая", "ой")),
        Box::new(SuffixRule::new(GrammaticalCase::Genitive, "ий", "ого"))
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_rule() {
        let rule = SuffixRule::new(GrammaticalCase::Instrumental, "ая", "ой");

        assert_eq!(rule.apply("Космодемьянская"), Some(String::from("Космодемьянской")));
        assert_eq!(rule.apply("Горький"), None);
        assert_eq!(rule.apply("ая"), Some(String::from("ой")));
        assert_eq!(rule.apply(""), None);

        let rule = SuffixRule::new(GrammaticalCase::Genitive, "ий", "ого");
        assert_eq!(rule.apply("Горький"), Some(String::from("Горького")));
        assert_eq!(rule.apply("Космодемьянская"), None);
    }

    #[test]
    fn test_empty_suffix() {
        let rule = SuffixRule::new(GrammaticalCase::Genitive, "", "у");
        assert_eq!(rule.apply("Иванов"), None);
    }

    #[test]
    fn test_default_rules() {
        let rules = default_rules();
        assert_eq!(rules.len(), 2);

        let fired: Vec<String> = rules.iter().filter_map(|rule| rule.apply("Космодемьянская")).collect();
        assert_eq!(fired, vec![String::from("Космодемьянской")]);

        let fired: Vec<String> = rules.iter().filter_map(|rule| rule.apply("Гастелло")).collect();
        assert!(fired.is_empty());
    }

    #[test]
    fn test_case_display() {
        assert_eq!(GrammaticalCase::Instrumental.to_string(), String::from("instrumental"));
        assert_eq!(GrammaticalCase::Genitive.to_string(), String::from("genitive"));
    }
}
