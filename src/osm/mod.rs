use std::thread;
use std::time::Duration;
use crate::error::Error;
use crate::types::StreetRecord;

pub mod nominatim;
pub mod overpass;

pub use self::nominatim::Nominatim;
pub use self::overpass::Overpass;

///
/// Resolves a free text region name to an Overpass area id
///
pub trait BoundaryResolver {
    fn resolve(&self, query: &str) -> Result<i64, Error>;
}

///
/// Fetches the highway elements within an Overpass area
///
/// A request level failure is an Err; a single unreadable element is an Err
/// item within an otherwise successful response
///
pub trait StreetSource {
    fn streets(&self, area: i64) -> Result<Vec<Result<StreetRecord, Error>>, Error>;
}

///
/// Fixed pause between calls to public OSM services
///
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    delay: Duration
}

impl Throttle {
    pub fn new(delay: Duration) -> Self {
        Throttle {
            delay
        }
    }

    pub fn wait(&self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

pub(crate) fn client(user_agent: &str, timeout: Duration) -> Result<reqwest::blocking::Client, Error> {
    Ok(reqwest::blocking::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()?)
}
