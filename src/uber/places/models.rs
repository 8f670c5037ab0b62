//! Place data models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A saved place of the rider
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlaceName {
    Home,
    Work,
}

impl PlaceName {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceName::Home => "home",
            PlaceName::Work => "work",
        }
    }
}

impl fmt::Display for PlaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaceName {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(PlaceName::Home),
            "work" => Ok(PlaceName::Work),
            other => Err(format!(
                "invalid place '{}'; can only be either \"home\" or \"work\"",
                other
            )),
        }
    }
}

/// A place as returned by the API (saved place or trip city)
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Place {
    #[serde(rename = "display_name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Place {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn address(&self) -> &str {
        self.address.as_deref().unwrap_or("")
    }
}

/// Body of a place update
#[derive(Serialize, Debug)]
pub(crate) struct PlaceUpdate<'a> {
    pub address: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_name_parse() {
        assert_eq!("home".parse::<PlaceName>().unwrap(), PlaceName::Home);
        assert_eq!(" Work ".parse::<PlaceName>().unwrap(), PlaceName::Work);
        assert!("gym".parse::<PlaceName>().is_err());
    }

    #[test]
    fn test_place_name_serde() {
        assert_eq!(serde_json::to_string(&PlaceName::Home).unwrap(), "\"home\"");
        let parsed: PlaceName = serde_json::from_str("\"work\"").unwrap();
        assert_eq!(parsed, PlaceName::Work);
    }

    #[test]
    fn test_place_deserialize() {
        let place: Place = serde_json::from_value(serde_json::json!({
            "address": "685 Market St, San Francisco, CA 94103, USA"
        }))
        .unwrap();
        assert_eq!(place.address(), "685 Market St, San Francisco, CA 94103, USA");
        assert_eq!(place.name(), "");
    }
}
