//! SWAPI starship payload types

use serde::{Deserialize, Serialize};

/// One decoded starship entry.
///
/// Numeric-looking fields stay as text because the API emits sentinel values
/// such as `"unknown"` and `"n/a"` in place of numbers. Fields absent from a
/// payload element decode as `None`; unrecognized wire keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Starship {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost_in_credits: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crew: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passengers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_atmosphering_speed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cargo_capacity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumables: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyperdrive_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starship_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One page of the `starships` collection as returned by the API.
///
/// Only `results` is consumed; the pagination metadata is decoded but
/// pagination itself is not implemented (the viewer shows page one).
#[derive(Debug, Clone, Deserialize)]
pub struct StarshipPage {
    pub results: Vec<Starship>,
    pub count: Option<u64>,
    pub next: Option<String>,
    pub previous: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEATH_STAR: &str = r#"{
        "name": "Death Star",
        "model": "DS-1 Orbital Battle Station",
        "manufacturer": "Imperial Department of Military Research, Sienar Fleet Systems",
        "cost_in_credits": "1000000000000",
        "length": "120000",
        "max_atmosphering_speed": "n/a",
        "crew": "342953",
        "passengers": "843342",
        "cargo_capacity": "1000000000000",
        "consumables": "3 years",
        "hyperdrive_rating": "4.0",
        "MGLT": "10",
        "starship_class": "Deep Space Mobile Battlestation",
        "pilots": [],
        "films": ["https://swapi.dev/api/films/1/"],
        "created": "2014-12-10T16:36:50.509000Z",
        "edited": "2014-12-22T17:35:44.452589Z",
        "url": "https://swapi.dev/api/starships/9/"
    }"#;

    #[test]
    fn decode_full_element() {
        let ship: Starship = serde_json::from_str(DEATH_STAR).unwrap();
        assert_eq!(ship.name, "Death Star");
        assert_eq!(ship.model, "DS-1 Orbital Battle Station");
        assert_eq!(ship.cost_in_credits, "1000000000000");
        assert_eq!(ship.length.as_deref(), Some("120000"));
        assert_eq!(ship.crew.as_deref(), Some("342953"));
        assert_eq!(ship.passengers.as_deref(), Some("843342"));
        assert_eq!(ship.max_atmosphering_speed.as_deref(), Some("n/a"));
        assert_eq!(ship.hyperdrive_rating.as_deref(), Some("4.0"));
        assert_eq!(
            ship.starship_class.as_deref(),
            Some("Deep Space Mobile Battlestation")
        );
    }

    #[test]
    fn decode_minimal_element() {
        let json = r#"{
            "name": "X-wing",
            "model": "T-65 X-wing",
            "manufacturer": "Incom Corporation",
            "cost_in_credits": "149999"
        }"#;
        let ship: Starship = serde_json::from_str(json).unwrap();
        assert_eq!(ship.name, "X-wing");
        assert_eq!(ship.length, None);
        assert_eq!(ship.crew, None);
        assert_eq!(ship.passengers, None);
    }

    #[test]
    fn decode_missing_required_key_fails() {
        let json = r#"{
            "model": "T-65 X-wing",
            "manufacturer": "Incom Corporation",
            "cost_in_credits": "149999"
        }"#;
        let result: std::result::Result<Starship, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn serde_round_trip_is_lossless() {
        let ship: Starship = serde_json::from_str(DEATH_STAR).unwrap();
        let json = serde_json::to_string(&ship).unwrap();
        let back: Starship = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ship);
    }

    #[test]
    fn decode_page_envelope() {
        let json = format!(
            r#"{{"count": 36, "next": "https://swapi.dev/api/starships/?page=2", "previous": null, "results": [{DEATH_STAR}]}}"#
        );
        let page: StarshipPage = serde_json::from_str(&json).unwrap();
        assert_eq!(page.count, Some(36));
        assert!(page.next.is_some());
        assert_eq!(page.previous, None);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].name, "Death Star");
    }

    #[test]
    fn decode_empty_results() {
        let page: StarshipPage = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(page.results.is_empty());
        assert_eq!(page.count, None);
    }
}
