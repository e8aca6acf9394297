//! Beer record, style enumeration, and request bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Fixed beer style categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeerStyle {
    Lager,
    Pilsner,
    Stout,
    Gose,
    Porter,
    Ale,
    Wheat,
    Ipa,
    PaleAle,
    Saison,
}

impl BeerStyle {
    /// Wire/storage form, e.g. `PALE_ALE`.
    pub fn as_str(self) -> &'static str {
        match self {
            BeerStyle::Lager => "LAGER",
            BeerStyle::Pilsner => "PILSNER",
            BeerStyle::Stout => "STOUT",
            BeerStyle::Gose => "GOSE",
            BeerStyle::Porter => "PORTER",
            BeerStyle::Ale => "ALE",
            BeerStyle::Wheat => "WHEAT",
            BeerStyle::Ipa => "IPA",
            BeerStyle::PaleAle => "PALE_ALE",
            BeerStyle::Saison => "SAISON",
        }
    }
}

impl fmt::Display for BeerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BeerStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LAGER" => Ok(BeerStyle::Lager),
            "PILSNER" => Ok(BeerStyle::Pilsner),
            "STOUT" => Ok(BeerStyle::Stout),
            "GOSE" => Ok(BeerStyle::Gose),
            "PORTER" => Ok(BeerStyle::Porter),
            "ALE" => Ok(BeerStyle::Ale),
            "WHEAT" => Ok(BeerStyle::Wheat),
            "IPA" => Ok(BeerStyle::Ipa),
            "PALE_ALE" => Ok(BeerStyle::PaleAle),
            "SAISON" => Ok(BeerStyle::Saison),
            other => Err(format!("unknown beer style: {other}")),
        }
    }
}

/// A stored beer record. `id` is immutable once assigned; `version` starts at
/// 1 and increments by exactly 1 on every update or patch.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beer {
    pub id: Uuid,
    pub version: i32,
    pub beer_name: String,
    pub beer_style: Option<BeerStyle>,
    pub upc: Option<String>,
    pub price: Option<f64>,
    pub quantity_on_hand: Option<i32>,
    pub created_date: DateTime<Utc>,
    pub update_date: DateTime<Utc>,
}

/// Full body for POST/PUT. Every field is optional at the serde level so a
/// missing `beerName` reaches the validator instead of failing
/// deserialization; any client-supplied id or version is ignored.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerUpsert {
    pub beer_name: Option<String>,
    pub beer_style: Option<BeerStyle>,
    pub upc: Option<String>,
    pub price: Option<f64>,
    pub quantity_on_hand: Option<i32>,
}

/// Partial body for PATCH. Only present, non-blank fields overwrite.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerPatch {
    pub beer_name: Option<String>,
    pub beer_style: Option<BeerStyle>,
    pub upc: Option<String>,
    pub price: Option<f64>,
    pub quantity_on_hand: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beer_serializes_with_camel_case_keys() {
        let beer = Beer {
            id: Uuid::new_v4(),
            version: 1,
            beer_name: "Galaxy Cat".into(),
            beer_style: Some(BeerStyle::PaleAle),
            upc: Some("12356".into()),
            price: Some(12.99),
            quantity_on_hand: Some(122),
            created_date: Utc::now(),
            update_date: Utc::now(),
        };
        let json = serde_json::to_value(&beer).unwrap();
        assert_eq!(json["beerName"], "Galaxy Cat");
        assert_eq!(json["beerStyle"], "PALE_ALE");
        assert_eq!(json["quantityOnHand"], 122);
        assert!(json.get("beer_name").is_none());
    }

    #[test]
    fn style_round_trips_through_storage_form() {
        assert_eq!("PALE_ALE".parse::<BeerStyle>().unwrap(), BeerStyle::PaleAle);
        assert_eq!(BeerStyle::Ipa.as_str(), "IPA");
        assert!("TRAPPIST".parse::<BeerStyle>().is_err());
    }

    #[test]
    fn upsert_tolerates_missing_fields() {
        let body: BeerUpsert = serde_json::from_str(r#"{"beerName": "New Beer"}"#).unwrap();
        assert_eq!(body.beer_name.as_deref(), Some("New Beer"));
        assert!(body.beer_style.is_none());
        assert!(body.price.is_none());
    }
}
