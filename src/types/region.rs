use std::fmt;
use std::str::FromStr;
use serde::Serialize;

///
/// An administrative region and its resolved Overpass area, if any
///
#[derive(Debug, PartialEq, Clone)]
pub struct Region {
    pub name: String,
    pub area: Option<i64>
}

impl Region {
    pub fn new(name: impl ToString, area: Option<i64>) -> Self {
        Region {
            name: name.to_string(),
            area
        }
    }
}

///
/// How matching streets are counted within a region pass
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MatchMode {
    /// Every matching element counts, duplicates included
    All,

    /// Matching streets count once per normalized name
    Unique
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::All => write!(f, "all"),
            MatchMode::Unique => write!(f, "unique")
        }
    }
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(MatchMode::All),
            "unique" => Ok(MatchMode::Unique),
            other => Err(format!("unknown match mode: {} (expected all or unique)", other))
        }
    }
}

/// Number of matching streets for a region x hero
#[derive(Debug, PartialEq, Clone)]
pub struct RegionCount {
    pub region: String,
    pub hero: String,
    pub streets: usize
}

impl RegionCount {
    pub fn new(region: impl ToString, hero: impl ToString, streets: usize) -> Self {
        RegionCount {
            region: region.to_string(),
            hero: hero.to_string(),
            streets
        }
    }
}

///
/// A single matching street
///
/// In unique mode `street` is the normalized name and `osm_id` is never set
///
#[derive(Serialize, Debug, PartialEq, Clone)]
pub struct StreetDetail {
    pub region: String,
    pub hero: String,
    pub street: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osm_id: Option<i64>
}

impl StreetDetail {
    pub fn new(region: impl ToString, hero: impl ToString, street: impl ToString, osm_id: Option<i64>) -> Self {
        StreetDetail {
            region: region.to_string(),
            hero: hero.to_string(),
            street: street.to_string(),
            osm_id
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_mode() {
        assert_eq!("all".parse::<MatchMode>(), Ok(MatchMode::All));
        assert_eq!(" Unique ".parse::<MatchMode>(), Ok(MatchMode::Unique));
        assert!("some".parse::<MatchMode>().is_err());

        assert_eq!(MatchMode::Unique.to_string(), String::from("unique"));
    }
}
