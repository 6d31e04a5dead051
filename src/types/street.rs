use std::fmt;
use crate::error::Error;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Kind {
    Way,
    Relation
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Way => write!(f, "way"),
            Kind::Relation => write!(f, "relation")
        }
    }
}

///
/// A named (or unnamed) highway element as returned by Overpass
///
#[derive(Debug, PartialEq, Clone)]
pub struct StreetRecord {
    pub id: i64,
    pub kind: Kind,
    pub name: Option<String>
}

impl StreetRecord {
    pub fn new(id: i64, kind: Kind, name: Option<String>) -> Self {
        StreetRecord {
            id,
            kind,
            name
        }
    }

    ///
    /// Parse an Overpass JSON element, ie:
    ///
    /// { "type": "way", "id": 4242, "tags": { "highway": "residential", "name": "..." } }
    ///
    pub fn from_element(element: &serde_json::Value) -> Result<Self, Error> {
        let element = match element.as_object() {
            Some(element) => element,
            None => { return Err(Error::InvalidRecord(String::from("element is not an object"))); }
        };

        let kind = match element.get("type").and_then(|kind| kind.as_str()) {
            Some("way") => Kind::Way,
            Some("relation") => Kind::Relation,
            Some(other) => { return Err(Error::InvalidRecord(format!("unsupported element type: {}", other))); },
            None => { return Err(Error::InvalidRecord(String::from("element has no type"))); }
        };

        let id = match element.get("id").and_then(|id| id.as_i64()) {
            Some(id) => id,
            None => { return Err(Error::InvalidRecord(format!("{} has no numeric id", kind))); }
        };

        let name = match element.get("tags").and_then(|tags| tags.get("name")) {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(name)) => Some(name.to_owned()),
            Some(other) => {
                return Err(Error::InvalidRecord(format!("{} {} has a non string name: {}", kind, id, other)));
            }
        };

        Ok(StreetRecord::new(id, kind, name))
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
