use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::backend::{Document, DocumentBackend, FileBackend, MemoryBackend};
use super::errors::StoreError;
use super::match_record::MatchRecord;
use super::player_record::{PlayerField, PlayerPatch, PlayerRecord, Roster};
use crate::scoring;

/// Result of changing one profile field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The stored record after the change
    Updated(PlayerRecord),
    /// No record exists for the caller
    NotRegistered,
}

/// Players and matches documents behind a pluggable backend.
///
/// Every operation loads the whole document, changes it in memory and writes
/// it back. Reads never fail: a missing, unreadable or malformed document is
/// treated as empty.
pub struct RecordStore {
    backend: Arc<dyn DocumentBackend>,
}

impl RecordStore {
    pub fn new(backend: Arc<dyn DocumentBackend>) -> Self {
        Self { backend }
    }

    pub fn from_files(players_path: impl Into<PathBuf>, matches_path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileBackend::new(players_path, matches_path)))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    pub async fn load_players(&self) -> Roster {
        self.load_document(Document::Players).await
    }

    pub async fn load_matches(&self) -> Vec<MatchRecord> {
        self.load_document(Document::Matches).await
    }

    pub async fn save_players(&self, roster: &Roster) -> Result<(), StoreError> {
        self.save_document(Document::Players, roster).await
    }

    pub async fn save_matches(&self, matches: &[MatchRecord]) -> Result<(), StoreError> {
        self.save_document(Document::Matches, matches).await
    }

    /// Merges `patch` into the record for `id`. A new id needs every field and
    /// gets `today` as its join date; an existing id keeps its join date.
    #[instrument(skip(self, patch))]
    pub async fn upsert_player(
        &self,
        id: &str,
        patch: PlayerPatch,
        today: NaiveDate,
    ) -> Result<PlayerRecord, StoreError> {
        let mut roster = self.load_players().await;
        let record = if let Some(existing) = roster.get_mut(id) {
            patch.apply(existing);
            existing.clone()
        } else {
            let record = patch.into_record(today)?;
            roster.insert(id.to_string(), record.clone());
            info!(player_id = %id, ign = %record.ign, "Registered new player");
            record
        };
        self.save_players(&roster).await?;
        Ok(record)
    }

    pub async fn register(
        &self,
        id: &str,
        ign: String,
        uid: String,
        rank: String,
        role: String,
        today: NaiveDate,
    ) -> Result<PlayerRecord, StoreError> {
        self.upsert_player(id, PlayerPatch::full(ign, uid, rank, role), today)
            .await
    }

    /// Changes one allow-listed field. Registration is checked before the field
    /// name so an unregistered caller always hears about that first.
    #[instrument(skip(self, value))]
    pub async fn update_field(
        &self,
        id: &str,
        field_name: &str,
        value: String,
    ) -> Result<UpdateOutcome, StoreError> {
        let mut roster = self.load_players().await;
        let Some(record) = roster.get_mut(id) else {
            return Ok(UpdateOutcome::NotRegistered);
        };
        let field: PlayerField = field_name.parse()?;
        PlayerPatch::single(field, value).apply(record);
        let updated = record.clone();
        self.save_players(&roster).await?;
        debug!(player_id = %id, field = %field, "Updated player field");
        Ok(UpdateOutcome::Updated(updated))
    }

    pub async fn profile(&self, id: &str) -> Option<PlayerRecord> {
        self.load_players().await.get(id).cloned()
    }

    pub async fn team(&self) -> Vec<(String, PlayerRecord)> {
        self.load_players().await.into_entries()
    }

    pub async fn leaderboard(&self) -> Vec<PlayerRecord> {
        scoring::rank_leaderboard(self.load_players().await.into_records())
    }

    /// Appends to the match history and returns its new length.
    pub async fn append_match(&self, record: MatchRecord) -> Result<usize, StoreError> {
        let mut matches = self.load_matches().await;
        matches.push(record);
        self.save_matches(&matches).await?;
        Ok(matches.len())
    }

    #[instrument(skip(self))]
    pub async fn log_match(
        &self,
        kills: u32,
        place: u32,
        map: Option<String>,
        today: NaiveDate,
    ) -> Result<MatchRecord, StoreError> {
        let record = MatchRecord::new(today, map, kills, place)?;
        let total = self.append_match(record.clone()).await?;
        info!(
            map = %record.map,
            points = record.total_points,
            history = total,
            "Logged match"
        );
        Ok(record)
    }

    async fn load_document<T>(&self, doc: Document) -> T
    where
        T: DeserializeOwned + Default,
    {
        let bytes = match self.backend.read(doc).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return T::default(),
            Err(e) => {
                warn!(document = doc.name(), error = %e, "Failed to read document, using empty default");
                return T::default();
            }
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return T::default();
        }
        match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(e) => {
                warn!(document = doc.name(), error = %e, "Malformed document, using empty default");
                T::default()
            }
        }
    }

    async fn save_document<T>(&self, doc: Document, value: &T) -> Result<(), StoreError>
    where
        T: Serialize + ?Sized,
    {
        let bytes = to_pretty_json(value)?;
        self.backend.write(doc, &bytes).await
    }
}

fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}
