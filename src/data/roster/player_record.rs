use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::errors::StoreError;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub ign: String,
    pub uid: String,
    pub rank: String,
    pub role: String,
    pub joined_at: NaiveDate,
}

/// Profile fields a player may change after registering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerField {
    Ign,
    Uid,
    Rank,
    Role,
}

impl PlayerField {
    pub const ALLOWED: [PlayerField; 4] = [
        PlayerField::Ign,
        PlayerField::Uid,
        PlayerField::Rank,
        PlayerField::Role,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerField::Ign => "ign",
            PlayerField::Uid => "uid",
            PlayerField::Rank => "rank",
            PlayerField::Role => "role",
        }
    }

    pub fn allowed_list() -> String {
        Self::ALLOWED
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for PlayerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerField {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALLOWED
            .iter()
            .copied()
            .find(|f| f.as_str() == key)
            .ok_or_else(|| {
                StoreError::Validation(format!(
                    "You can only update: {}",
                    Self::allowed_list()
                ))
            })
    }
}

/// A partial set of profile fields. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerPatch {
    pub ign: Option<String>,
    pub uid: Option<String>,
    pub rank: Option<String>,
    pub role: Option<String>,
}

impl PlayerPatch {
    pub fn full(ign: String, uid: String, rank: String, role: String) -> Self {
        Self {
            ign: Some(ign),
            uid: Some(uid),
            rank: Some(rank),
            role: Some(role),
        }
    }

    pub fn single(field: PlayerField, value: String) -> Self {
        let mut patch = Self::default();
        match field {
            PlayerField::Ign => patch.ign = Some(value),
            PlayerField::Uid => patch.uid = Some(value),
            PlayerField::Rank => patch.rank = Some(value),
            PlayerField::Role => patch.role = Some(value),
        }
        patch
    }

    pub fn apply(self, record: &mut PlayerRecord) {
        if let Some(v) = self.ign {
            record.ign = v;
        }
        if let Some(v) = self.uid {
            record.uid = v;
        }
        if let Some(v) = self.rank {
            record.rank = v;
        }
        if let Some(v) = self.role {
            record.role = v;
        }
    }

    /// Builds a fresh record; every field has to be present.
    pub fn into_record(self, joined_at: NaiveDate) -> Result<PlayerRecord, StoreError> {
        let missing: Vec<&str> = [
            (PlayerField::Ign, self.ign.is_none()),
            (PlayerField::Uid, self.uid.is_none()),
            (PlayerField::Rank, self.rank.is_none()),
            (PlayerField::Role, self.role.is_none()),
        ]
        .iter()
        .filter(|(_, absent)| *absent)
        .map(|(f, _)| f.as_str())
        .collect();

        match (self.ign, self.uid, self.rank, self.role) {
            (Some(ign), Some(uid), Some(rank), Some(role)) => Ok(PlayerRecord {
                ign,
                uid,
                rank,
                role,
                joined_at,
            }),
            _ => Err(StoreError::Validation(format!(
                "new player is missing: {}",
                missing.join(", ")
            ))),
        }
    }
}

/// Player id -> record, kept in insertion order so the JSON document and the
/// roster listing read the same way every time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<(String, PlayerRecord)>,
}

impl Roster {
    pub fn get(&self, id: &str) -> Option<&PlayerRecord> {
        self.entries.iter().find(|(k, _)| k == id).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut PlayerRecord> {
        self.entries.iter_mut().find(|(k, _)| k == id).map(|(_, v)| v)
    }

    /// Replaces in place when the id exists, otherwise appends.
    pub fn insert(&mut self, id: String, record: PlayerRecord) -> Option<PlayerRecord> {
        match self.get_mut(&id) {
            Some(existing) => Some(std::mem::replace(existing, record)),
            None => {
                self.entries.push((id, record));
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlayerRecord)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn into_entries(self) -> Vec<(String, PlayerRecord)> {
        self.entries
    }

    pub fn into_records(self) -> impl Iterator<Item = PlayerRecord> {
        self.entries.into_iter().map(|(_, v)| v)
    }
}

impl Serialize for Roster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, record) in &self.entries {
            map.serialize_entry(id, record)?;
        }
        map.end()
    }
}

struct RosterVisitor;

impl<'de> Visitor<'de> for RosterVisitor {
    type Value = Roster;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of player ids to player records")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Roster, A::Error> {
        let mut roster = Roster::default();
        while let Some((id, record)) = access.next_entry::<String, PlayerRecord>()? {
            roster.insert(id, record);
        }
        Ok(roster)
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RosterVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    fn record(ign: &str) -> PlayerRecord {
        PlayerRecord {
            ign: ign.to_string(),
            uid: "5123456789".to_string(),
            rank: "Crown II".to_string(),
            role: "IGL".to_string(),
            joined_at: date(),
        }
    }

    #[test]
    fn test_field_parse_is_case_insensitive() {
        assert_eq!("RANK".parse::<PlayerField>().unwrap(), PlayerField::Rank);
        assert_eq!(" Ign ".parse::<PlayerField>().unwrap(), PlayerField::Ign);
    }

    #[test]
    fn test_unknown_field_names_allowed_fields() {
        let err = "joined_at".parse::<PlayerField>().unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(err.to_string(), "You can only update: ign, uid, rank, role");
    }

    #[test]
    fn test_patch_into_record_requires_every_field() {
        let patch = PlayerPatch {
            ign: Some("Scout".to_string()),
            role: Some("Sniper".to_string()),
            ..Default::default()
        };
        let err = patch.into_record(date()).unwrap_err();
        assert_eq!(err.to_string(), "new player is missing: uid, rank");
    }

    #[test]
    fn test_patch_apply_touches_only_given_fields() {
        let mut rec = record("Mortal");
        PlayerPatch::single(PlayerField::Role, "Support".to_string()).apply(&mut rec);
        assert_eq!(rec.role, "Support");
        assert_eq!(rec.ign, "Mortal");
        assert_eq!(rec.rank, "Crown II");
    }

    #[test]
    fn test_record_json_keys() {
        let json = serde_json::to_value(record("Jonathan")).unwrap();
        assert_eq!(json["ign"], "Jonathan");
        assert_eq!(json["uid"], "5123456789");
        assert_eq!(json["joined_at"], "2024-03-09");
    }

    #[test]
    fn test_roster_keeps_document_order() {
        let raw = r#"{"30": {"ign":"c","uid":"3","rank":"Ace","role":"x","joined_at":"2024-03-09"},
                      "10": {"ign":"a","uid":"1","rank":"Ace","role":"x","joined_at":"2024-03-09"},
                      "20": {"ign":"b","uid":"2","rank":"Ace","role":"x","joined_at":"2024-03-09"}}"#;
        let roster: Roster = serde_json::from_str(raw).unwrap();
        let ids: Vec<&str> = roster.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["30", "10", "20"]);

        let out = serde_json::to_string(&roster).unwrap();
        assert!(out.find("\"30\"").unwrap() < out.find("\"10\"").unwrap());
    }

    #[test]
    fn test_roster_insert_replaces_in_place() {
        let mut roster = Roster::default();
        roster.insert("1".to_string(), record("one"));
        roster.insert("2".to_string(), record("two"));
        let old = roster.insert("1".to_string(), record("uno"));

        assert_eq!(old.map(|r| r.ign), Some("one".to_string()));
        assert_eq!(roster.len(), 2);
        let igns: Vec<&str> = roster.iter().map(|(_, r)| r.ign.as_str()).collect();
        assert_eq!(igns, vec!["uno", "two"]);
    }

    #[test]
    fn test_roster_rejects_non_map() {
        assert!(serde_json::from_str::<Roster>("[]").is_err());
    }
}
