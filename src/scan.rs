use std::io::Write;
use log::info;
use crate::config::Config;
use crate::error::Error;
use crate::stream::StreetStream;
use crate::survey;
use crate::text::Matcher;
use crate::types::{Hero, MatchMode};

#[derive(Debug, Clone)]
pub struct ScanArgs {
    pub hero: String,
    pub region: String,
    pub mode: MatchMode,

    /// Line delimited Overpass elements, stdin if None
    pub input: Option<String>,

    /// File rejected lines are appended to
    pub errors: Option<String>
}

///
/// Match a local street dump against one hero, printing every matching
/// street as a JSON line
///
pub fn main(config: &Config, args: ScanArgs) -> Result<(), Error> {
    let hero = Hero::new(&args.hero);

    let mut stream = StreetStream::new(args.input)?;
    if let Some(ref path) = args.errors {
        stream = stream.errors(path)?;
    }

    let pass = survey::pass(&Matcher::new(config.matching), args.mode, &args.region, &hero, stream);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for detail in &pass.details {
        writeln!(out, "{}", serde_json::to_string(detail)?)?;
    }

    info!("{} matching streets for {} ({} mode, {} malformed records)", pass.count, hero.name, args.mode, pass.malformed);

    Ok(())
}
