#[macro_use] extern crate lazy_static;

pub mod config;
pub mod error;
pub mod list;
pub mod osm;
pub mod report;
pub mod scan;
pub mod stream;
pub mod survey;
pub mod text;
pub mod types;

pub use config::Config;
pub use error::Error;
pub use text::{normalize, similarity, generate_variants};
pub use text::{Matcher, MatchConfig, MatchResult, UniqueStreets, Variants};
pub use types::{Context, Hero, MatchMode, StreetRecord};
