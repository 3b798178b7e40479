use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::StoreError;
use crate::scoring;

pub const DEFAULT_MAP: &str = "Erangel";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub date: NaiveDate,
    pub map: String,
    pub kills: u32,
    pub place: u32,
    #[serde(rename = "total")]
    pub total_points: u32,
}

impl MatchRecord {
    /// Scores a finished match. A blank or missing map falls back to Erangel.
    pub fn new(
        date: NaiveDate,
        map: Option<String>,
        kills: u32,
        place: u32,
    ) -> Result<MatchRecord, StoreError> {
        if place == 0 {
            return Err(StoreError::Validation(
                "Place must be 1 or higher.".to_string(),
            ));
        }
        let total_points = scoring::match_points(kills, place)
            .ok_or_else(|| StoreError::Validation("Kills value is too large.".to_string()))?;
        let map = map
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MAP.to_string());

        Ok(MatchRecord {
            date,
            map,
            kills,
            place,
            total_points,
        })
    }

    pub fn placement_points(&self) -> u32 {
        scoring::placement_points(self.place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn test_new_computes_total() {
        let m = MatchRecord::new(date(), Some("Miramar".to_string()), 10, 1).unwrap();
        assert_eq!(m.total_points, 20);
        assert_eq!(m.placement_points(), 10);
        assert_eq!(m.map, "Miramar");
    }

    #[test]
    fn test_new_defaults_map() {
        assert_eq!(MatchRecord::new(date(), None, 0, 3).unwrap().map, "Erangel");
        assert_eq!(
            MatchRecord::new(date(), Some("   ".to_string()), 0, 3).unwrap().map,
            "Erangel"
        );
    }

    #[test]
    fn test_new_rejects_place_zero() {
        let err = MatchRecord::new(date(), None, 4, 0).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_new_rejects_kills_that_overflow_total() {
        let err = MatchRecord::new(date(), None, u32::MAX, 1).unwrap_err();
        assert_eq!(err.to_string(), "Kills value is too large.");
        // no placement points, so the total still fits
        assert_eq!(MatchRecord::new(date(), None, u32::MAX, 9).unwrap().total_points, u32::MAX);
    }

    #[test]
    fn test_json_uses_total_key() {
        let m = MatchRecord::new(date(), None, 3, 4).unwrap();
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["total"], 7);
        assert_eq!(json["date"], "2024-05-01");
        assert!(json.get("total_points").is_none());
    }
}
