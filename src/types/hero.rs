use crate::text::Variants;

///
/// A person streets may be named after, together with the name variants
/// searched for in street names
///
#[derive(Debug, PartialEq, Clone)]
pub struct Hero {
    /// Full display name, ie: Зоя Космодемьянская
    pub name: String,

    pub variants: Variants
}

impl Hero {
    pub fn new(name: impl ToString) -> Self {
        let name = name.to_string();
        let variants = Variants::generate(&name);

        Hero {
            name,
            variants
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero() {
        let hero = Hero::new("Зоя Космодемьянская");

        assert_eq!(hero.name, String::from("Зоя Космодемьянская"));
        assert!(hero.variants.contains("Космодемьянской"));
        assert!(hero.variants.contains("З. Космодемьянская"));
    }

    #[test]
    fn test_hero_degenerate() {
        assert!(Hero::new("Гастелло").variants.is_empty());
    }
}
