use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use crate::error::Error;
use crate::types::{MatchMode, RegionCount, StreetDetail};

/// Leading byte order mark so spreadsheet tools pick up UTF-8
const BOM: &str = "\u{feff}";

pub const TOP_REGIONS: usize = 10;

pub fn write_counts(path: &Path, counts: &[RegionCount]) -> Result<(), Error> {
    let mut writer = writer(path)?;

    writer.write_record(&["region", "hero", "streets"])?;
    for count in counts {
        writer.write_record(&[count.region.as_str(), count.hero.as_str(), count.streets.to_string().as_str()])?;
    }

    writer.flush()?;

    Ok(())
}

///
/// Unique mode rows carry the normalized street name only; all mode rows
/// also carry the OSM id of the matching element
///
pub fn write_details(path: &Path, details: &[StreetDetail], mode: MatchMode) -> Result<(), Error> {
    let mut writer = writer(path)?;

    match mode {
        MatchMode::All => writer.write_record(&["region", "hero", "street", "osm_id"])?,
        MatchMode::Unique => writer.write_record(&["region", "hero", "street"])?
    };

    for detail in details {
        match mode {
            MatchMode::All => {
                let osm_id = detail.osm_id.map(|id| id.to_string()).unwrap_or_default();
                writer.write_record(&[detail.region.as_str(), detail.hero.as_str(), detail.street.as_str(), osm_id.as_str()])?;
            },
            MatchMode::Unique => {
                writer.write_record(&[detail.region.as_str(), detail.hero.as_str(), detail.street.as_str()])?;
            }
        }
    }

    writer.flush()?;

    Ok(())
}

fn writer(path: &Path) -> Result<csv::Writer<File>, Error> {
    let mut file = File::create(path)?;
    file.write_all(BOM.as_bytes())?;

    Ok(csv::Writer::from_writer(file))
}

///
/// Survey totals over the region x hero rows of the counts file
///
/// With several heroes a region appears once per hero, both in `regions`
/// and in `top`
///
#[derive(Debug, PartialEq)]
pub struct Summary {
    pub total: usize,

    /// Region x hero rows with at least one matching street
    pub regions: usize,

    /// Highest rows by street count, largest first
    pub top: Vec<RegionCount>,

    heroes: usize
}

impl Summary {
    pub fn new(counts: &[RegionCount]) -> Self {
        let mut top: Vec<RegionCount> = counts
            .iter()
            .filter(|count| count.streets > 0)
            .cloned()
            .collect();

        let regions = top.len();

        // stable sort keeps equal counts in survey order
        top.sort_by(|a, b| b.streets.cmp(&a.streets));
        top.truncate(TOP_REGIONS);

        let heroes: BTreeSet<&str> = counts.iter().map(|count| count.hero.as_str()).collect();

        Summary {
            total: counts.iter().map(|count| count.streets).sum(),
            regions,
            top,
            heroes: heroes.len()
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Streets found: {}", self.total)?;
        writeln!(f, "Regions with streets: {}", self.regions)?;

        if !self.top.is_empty() {
            writeln!(f)?;
            writeln!(f, "Top {} regions:", self.top.len())?;
            for count in &self.top {
                if self.heroes > 1 {
                    writeln!(f, "  {} ({}): {}", count.region, count.hero, count.streets)?;
                } else {
                    writeln!(f, "  {}: {}", count.region, count.streets)?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts() -> Vec<RegionCount> {
        vec![
            RegionCount::new("Tula Oblast", "Зоя Космодемьянская", 3),
            RegionCount::new("Tver Oblast", "Зоя Космодемьянская", 0),
            RegionCount::new("Moscow", "Зоя Космодемьянская", 5),
            RegionCount::new("Kursk Oblast", "Зоя Космодемьянская", 3),
            RegionCount::new("Kursk Oblast", "Максим Горький", 1)
        ]
    }

    #[test]
    fn test_summary() {
        let summary = Summary::new(&counts());

        assert_eq!(summary.total, 12);
        assert_eq!(summary.regions, 4);
        assert_eq!(summary.top, vec![
            RegionCount::new("Moscow", "Зоя Космодемьянская", 5),
            RegionCount::new("Tula Oblast", "Зоя Космодемьянская", 3),
            RegionCount::new("Kursk Oblast", "Зоя Космодемьянская", 3),
            RegionCount::new("Kursk Oblast", "Максим Горький", 1)
        ]);

        let empty = Summary::new(&[]);
        assert_eq!(empty.total, 0);
        assert_eq!(empty.regions, 0);
        assert!(empty.top.is_empty());
    }

    #[test]
    fn test_summary_top() {
        let counts: Vec<RegionCount> = (1..=12)
            .map(|streets| RegionCount::new(format!("Region {}", streets), "Зоя Космодемьянская", streets))
            .collect();

        let summary = Summary::new(&counts);
        assert_eq!(summary.top.len(), TOP_REGIONS);
        assert_eq!(summary.top[0].streets, 12);
        assert_eq!(summary.top[9].streets, 3);
    }

    #[test]
    fn test_summary_display() {
        let output = Summary::new(&counts()).to_string();

        assert!(output.contains("Streets found: 12"));
        assert!(output.contains("Regions with streets: 4"));
        assert!(output.contains("  Moscow (Зоя Космодемьянская): 5\n"));
        assert!(output.contains("  Kursk Oblast (Максим Горький): 1\n"));

        let output = Summary::new(&counts()[0..3]).to_string();
        assert!(output.contains("  Moscow: 5\n"));
    }

    #[test]
    fn test_write_counts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counts.csv");

        write_counts(&path, &counts()[0..2]).unwrap();

        let output = std::fs::read_to_string(&path).unwrap();
        assert_eq!(output, "\u{feff}region,hero,streets\nTula Oblast,Зоя Космодемьянская,3\nTver Oblast,Зоя Космодемьянская,0\n");
    }

    #[test]
    fn test_write_details() {
        let dir = tempfile::tempdir().unwrap();

        let path = dir.path().join("all.csv");
        write_details(&path, &[
            StreetDetail::new("Tula Oblast", "Зоя Космодемьянская", "Улица Зои Космодемьянской, 1", Some(10))
        ], MatchMode::All).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(),
            "\u{feff}region,hero,street,osm_id\nTula Oblast,Зоя Космодемьянская,\"Улица Зои Космодемьянской, 1\",10\n");

        let path = dir.path().join("unique.csv");
        write_details(&path, &[
            StreetDetail::new("Tula Oblast", "Зоя Космодемьянская", "улица зои космодемьянской", None)
        ], MatchMode::Unique).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(),
            "\u{feff}region,hero,street\nTula Oblast,Зоя Космодемьянская,улица зои космодемьянской\n");
    }
}
