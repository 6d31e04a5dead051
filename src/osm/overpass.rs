use log::debug;
use crate::config::Config;
use crate::error::Error;
use crate::types::StreetRecord;
use super::StreetSource;

pub struct Overpass {
    url: String,
    timeout_secs: u64,
    client: reqwest::blocking::Client
}

impl Overpass {
    pub fn new(config: &Config) -> Result<Self, Error> {
        Ok(Overpass {
            url: config.overpass_url.clone(),
            timeout_secs: config.timeout_secs,
            client: super::client(&config.user_agent, config.http_timeout())?
        })
    }
}

impl StreetSource for Overpass {
    fn streets(&self, area: i64) -> Result<Vec<Result<StreetRecord, Error>>, Error> {
        let query = query(area, self.timeout_secs);

        debug!("overpass query for area {}", area);

        let response: serde_json::Value = self.client
            .post(self.url.as_str())
            .form(&[("data", query.as_str())])
            .send()?
            .error_for_status()?
            .json()?;

        elements(&response)
    }
}

///
/// Every named highway way and relation within an area, tags only
///
pub fn query(area: i64, timeout_secs: u64) -> String {
    format!(r#"[out:json][timeout:{timeout}];
area({area})->.searchArea;
(
  way["highway"]["name"~".", i](area.searchArea);
  relation["highway"]["name"~".", i](area.searchArea);
);
out tags;"#, timeout = timeout_secs, area = area)
}

///
/// Split an Overpass JSON response into per element results
///
pub fn elements(response: &serde_json::Value) -> Result<Vec<Result<StreetRecord, Error>>, Error> {
    if let Some(remark) = response.get("remark").and_then(|remark| remark.as_str()) {
        // Overpass reports server side timeouts/OOM as a remark with partial data
        if remark.contains("error") {
            return Err(Error::Response(format!("overpass: {}", remark)));
        }
    }

    match response.get("elements").and_then(|elements| elements.as_array()) {
        Some(elements) => Ok(elements.iter().map(StreetRecord::from_element).collect()),
        None => Err(Error::Response(String::from("overpass response has no elements array")))
    }
}
