use std::borrow::Borrow;
use std::path::PathBuf;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use crate::config::Config;
use crate::error::Error;
use crate::osm::{BoundaryResolver, StreetSource, Throttle, Nominatim, Overpass};
use crate::report::{self, Summary};
use crate::text::{Matcher, UniqueStreets};
use crate::types::{Context, Hero, Kind, MatchMode, Region, RegionCount, StreetDetail, StreetRecord};

pub const DEFAULT_HERO: &str = "Зоя Космодемьянская";

///
/// Outcome of a single region x hero pass
///
#[derive(Debug, PartialEq, Default)]
pub struct Pass {
    pub count: usize,
    pub details: Vec<StreetDetail>,

    /// Records that could not be read and were treated as non matching
    pub malformed: usize
}

#[derive(Debug, PartialEq, Default)]
pub struct Survey {
    pub counts: Vec<RegionCount>,
    pub details: Vec<StreetDetail>
}

///
/// Drives name matching over every region and hero
///
/// Collaborator failures never abort the survey: a region that cannot be
/// resolved or fetched reports zero streets for every hero
///
/// Highway relations are counted alongside ways unless `ways_only` is set
///
pub struct Aggregator<'a> {
    resolver: &'a dyn BoundaryResolver,
    source: &'a dyn StreetSource,
    matcher: Matcher,
    mode: MatchMode,
    throttle: Throttle,
    ways_only: bool,
    progress: ProgressBar
}

impl<'a> Aggregator<'a> {
    pub fn new(
        resolver: &'a dyn BoundaryResolver,
        source: &'a dyn StreetSource,
        matcher: Matcher,
        mode: MatchMode,
        throttle: Throttle
    ) -> Self {
        Aggregator {
            resolver,
            source,
            matcher,
            mode,
            throttle,
            ways_only: false,
            progress: ProgressBar::hidden()
        }
    }

    pub fn progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    pub fn ways_only(mut self, ways_only: bool) -> Self {
        self.ways_only = ways_only;
        self
    }

    fn counted(&self, record: &Result<StreetRecord, Error>) -> bool {
        match record {
            Ok(record) => !(self.ways_only && record.kind == Kind::Relation),
            Err(_) => true
        }
    }

    ///
    /// Resolve region names to areas; unresolved regions keep a None area
    ///
    pub fn resolve(&self, context: &Context, names: &[String]) -> Vec<Region> {
        self.progress.set_length(names.len() as u64);
        self.progress.set_position(0);
        self.progress.set_message("resolving areas");

        let mut regions = Vec::with_capacity(names.len());

        for name in names {
            let query = context.query(name);

            let resolved = self.resolver.resolve(&query);

            // a failed lookup may still have reached the service
            self.throttle.wait();

            let area = match resolved {
                Ok(area) => {
                    debug!("{} => area {}", query, area);
                    Some(area)
                },
                Err(err) => {
                    warn!("unable to resolve {}: {}", query, err);
                    None
                }
            };

            regions.push(Region::new(name, area));
            self.progress.inc(1);
        }

        regions
    }

    ///
    /// Fetch the streets of every region once and match them against every hero
    ///
    pub fn run(&self, regions: &[Region], heroes: &[Hero]) -> Survey {
        let mut survey = Survey::default();

        self.progress.set_length(regions.len() as u64);
        self.progress.set_position(0);

        for region in regions {
            self.progress.set_message(region.name.clone());

            let records = match region.area {
                None => None,
                Some(area) => {
                    let fetched = self.source.streets(area);
                    self.throttle.wait();

                    match fetched {
                        Ok(records) => Some(records),
                        Err(err) => {
                            warn!("unable to fetch streets for {} (area {}): {}", region.name, area, err);
                            None
                        }
                    }
                }
            };

            for hero in heroes {
                let pass = match records {
                    None => Pass::default(),
                    Some(ref records) => {
                        self.pass(&region.name, hero, records.iter().filter(|record| self.counted(record)))
                    }
                };

                debug!("{} / {}: {} streets", region.name, hero.name, pass.count);

                survey.counts.push(RegionCount::new(&region.name, &hero.name, pass.count));
                survey.details.extend(pass.details);
            }

            self.progress.inc(1);
        }

        self.progress.finish_and_clear();

        survey
    }

    pub fn pass<I, R>(&self, region: &str, hero: &Hero, records: I) -> Pass
        where I: IntoIterator<Item = R>, R: Borrow<Result<StreetRecord, Error>>
    {
        pass(&self.matcher, self.mode, region, hero, records)
    }
}

///
/// Match every record of a region against a hero
///
/// A record that failed to parse is logged and counted as non matching
///
pub fn pass<I, R>(matcher: &Matcher, mode: MatchMode, region: &str, hero: &Hero, records: I) -> Pass
    where I: IntoIterator<Item = R>, R: Borrow<Result<StreetRecord, Error>>
{
    let mut pass = Pass::default();
    let mut unique = UniqueStreets::new();

    for record in records {
        let record: &Result<StreetRecord, Error> = record.borrow();

        let record = match record {
            Ok(record) => record,
            Err(err) => {
                warn!("{} / {}: skipping record: {}", region, hero.name, err);
                pass.malformed += 1;
                continue;
            }
        };

        match mode {
            MatchMode::All => {
                if matcher.is_hero_street(record.name(), &hero.variants) {
                    pass.details.push(StreetDetail::new(region, &hero.name, record.name().unwrap_or(""), Some(record.id)));
                }
            },
            MatchMode::Unique => {
                unique.insert(matcher, record.name(), &hero.variants);
            }
        }
    }

    if mode == MatchMode::Unique {
        pass.details = unique
            .into_streets()
            .into_iter()
            .map(|street| StreetDetail::new(region, &hero.name, street, None))
            .collect();
    }

    pass.count = pass.details.len();

    if pass.malformed > 0 {
        warn!("{} / {}: {} malformed records skipped", region, hero.name, pass.malformed);
    }

    pass
}

#[derive(Debug, Clone)]
pub struct SurveyArgs {
    pub heroes: Vec<String>,
    pub country: String,
    pub regions: Vec<String>,
    pub mode: MatchMode,
    pub output: PathBuf,
    pub quiet: bool,

    /// Skip highway relations and count ways only
    pub ways_only: bool
}

pub fn main(config: &Config, args: SurveyArgs) -> Result<(), Error> {
    let context = Context::new(&args.country);

    let heroes: Vec<Hero> = if args.heroes.is_empty() {
        vec![Hero::new(DEFAULT_HERO)]
    } else {
        args.heroes.iter().map(Hero::new).collect()
    };

    for hero in &heroes {
        let variants: Vec<&str> = hero.variants.iter().map(|v| v.as_str()).collect();

        if variants.is_empty() {
            warn!("{} has fewer than two name tokens, no street can match", hero.name);
        } else {
            info!("variants for {}: {}", hero.name, variants.join(" | "));
        }
    }

    let names = if args.regions.is_empty() {
        context.regions()
    } else {
        args.regions.clone()
    };

    if names.is_empty() {
        return Err(Error::Config(format!("no built in regions for {}, pass --region", context.country)));
    }

    let nominatim = Nominatim::new(config)?;
    let overpass = Overpass::new(config)?;

    let progress = if args.quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(names.len() as u64);
        bar.set_style(ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .map_err(|err| Error::Config(err.to_string()))?);
        bar
    };

    let aggregator = Aggregator::new(
        &nominatim,
        &overpass,
        Matcher::new(config.matching),
        args.mode,
        Throttle::new(config.delay())
    )
        .progress(progress)
        .ways_only(args.ways_only);

    info!("resolving {} regions of {}", names.len(), context.country);
    let regions = aggregator.resolve(&context, &names);

    info!("collecting streets ({} mode)", args.mode);
    let survey = aggregator.run(&regions, &heroes);

    std::fs::create_dir_all(&args.output)?;

    let counts_path = args.output.join(format!("streets_by_heroes_{}.csv", args.mode));
    report::write_counts(&counts_path, &survey.counts)?;
    info!("counts written to {}", counts_path.display());

    if !survey.details.is_empty() {
        let details_path = args.output.join(format!("streets_detailed_{}.csv", args.mode));
        report::write_details(&details_path, &survey.details, args.mode)?;
        info!("details written to {}", details_path.display());
    }

    println!("{}", Summary::new(&survey.counts));

    Ok(())
}
