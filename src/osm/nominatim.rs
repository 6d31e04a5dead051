use log::debug;
use crate::config::Config;
use crate::error::Error;
use super::BoundaryResolver;

/// Overpass derives area ids from the OSM id of the boundary element
pub const RELATION_AREA_OFFSET: i64 = 3_600_000_000;
pub const WAY_AREA_OFFSET: i64 = 2_400_000_000;

pub struct Nominatim {
    url: String,
    client: reqwest::blocking::Client
}

impl Nominatim {
    pub fn new(config: &Config) -> Result<Self, Error> {
        Ok(Nominatim {
            url: config.nominatim_url.trim_end_matches('/').to_string(),
            client: super::client(&config.user_agent, config.http_timeout())?
        })
    }
}

impl BoundaryResolver for Nominatim {
    fn resolve(&self, query: &str) -> Result<i64, Error> {
        debug!("nominatim search: {}", query);

        let response: serde_json::Value = self.client
            .get(format!("{}/search", self.url).as_str())
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()?
            .error_for_status()?
            .json()?;

        match area_id(&response) {
            Some(area) => Ok(area),
            None => Err(Error::NoBoundary(query.to_string()))
        }
    }
}

///
/// Area id of the first search result
///
/// Only relations and closed ways describe an area; nodes have none
///
pub fn area_id(response: &serde_json::Value) -> Option<i64> {
    let place = response.as_array()?.first()?;

    let osm_id = match place.get("osm_id")? {
        serde_json::Value::Number(id) => id.as_i64()?,
        serde_json::Value::String(id) => id.parse::<i64>().ok()?,
        _ => { return None; }
    };

    match place.get("osm_type")?.as_str()? {
        "relation" => Some(osm_id + RELATION_AREA_OFFSET),
        "way" => Some(osm_id + WAY_AREA_OFFSET),
        _ => None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_area_id() {
        assert_eq!(area_id(&json!([{
            "place_id": 1,
            "osm_type": "relation",
            "osm_id": 81993,
            "display_name": "Tula Oblast, Central Federal District, Russia"
        }])), Some(3600081993));

        assert_eq!(area_id(&json!([{
            "osm_type": "way",
            "osm_id": "12"
        }])), Some(2400000012));
    }

    #[test]
    fn test_area_id_missing() {
        assert_eq!(area_id(&json!([])), None);
        assert_eq!(area_id(&json!({})), None);
        assert_eq!(area_id(&json!([{ "osm_type": "node", "osm_id": 5 }])), None);
        assert_eq!(area_id(&json!([{ "osm_type": "relation" }])), None);
        assert_eq!(area_id(&json!([{ "osm_type": "relation", "osm_id": true }])), None);
    }
}
