//! Star Entity Store
//!
//! The ordered list of every star in the jar. Insertion order is creation
//! order; display code sorts a copy when it wants newest-first.
//!
//! The whole list lives in one storage slot as a JSON array. It is read once
//! at startup and rewritten in full after every mutation. A slot that fails
//! to parse is discarded and the jar starts empty.

use std::collections::HashSet;

use chrono::{DateTime, FixedOffset, NaiveDate};
use macroquad::logging::{info, warn};
use thiserror::Error;

use super::record::{is_submittable, PlacementHint, StarColor, StarId, StarRecord, MAX_MESSAGE_LENGTH};
use crate::storage::{KeyValueStore, StorageError};

/// Store-level errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("wish is empty")]
    EmptyMessage,
    #[error("wish is {len} characters long (max {max})")]
    MessageTooLong { len: usize, max: usize },
    #[error("duplicate star id {0} in stored jar")]
    DuplicateId(StarId),
    #[error("storage: {0}")]
    Storage(#[from] StorageError),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a stored slot into records.
///
/// Rejects anything that isn't an array of records with unique ids.
pub fn parse_records(json: &str) -> Result<Vec<StarRecord>, StoreError> {
    let records: Vec<StarRecord> = serde_json::from_str(json)?;
    let mut seen = HashSet::with_capacity(records.len());
    for record in &records {
        if !seen.insert(record.id) {
            return Err(StoreError::DuplicateId(record.id));
        }
    }
    Ok(records)
}

/// Ordered star collection bound to a storage slot
pub struct StarStore {
    records: Vec<StarRecord>,
    backend: Box<dyn KeyValueStore>,
    key: String,
}

impl StarStore {
    /// Load the jar from `key`, falling back to an empty jar on any problem
    pub fn load(backend: Box<dyn KeyValueStore>, key: &str) -> Self {
        let records = match backend.get(key) {
            Ok(Some(json)) => match parse_records(&json) {
                Ok(records) => {
                    info!("Store: loaded {} stars from {}", records.len(), backend.label());
                    records
                }
                Err(e) => {
                    warn!("Store: discarding unreadable slot '{}': {}", key, e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Store: could not read slot '{}': {}", key, e);
                Vec::new()
            }
        };

        Self {
            records,
            backend,
            key: key.to_string(),
        }
    }

    pub fn records(&self) -> &[StarRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: StarId) -> Option<&StarRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: StarId) -> bool {
        self.get(id).is_some()
    }

    /// Pick an id for a star created at `now_ms`.
    ///
    /// Normally the clock reading itself; bumped past the newest id when the
    /// clock hasn't moved (two stars in one millisecond) or went backwards.
    fn next_id(&self, now_ms: i64) -> StarId {
        match self.records.iter().map(|r| r.id).max() {
            Some(newest) if newest >= now_ms => newest + 1,
            _ => now_ms,
        }
    }

    /// Create a star and append it to the end of the jar.
    ///
    /// The message must be non-blank and at most 50 characters.
    pub fn append(
        &mut self,
        message: &str,
        color: StarColor,
        hint: PlacementHint,
        now_ms: i64,
    ) -> Result<StarId, StoreError> {
        if message.trim().is_empty() {
            return Err(StoreError::EmptyMessage);
        }
        let len = message.chars().count();
        if !is_submittable(message) {
            return Err(StoreError::MessageTooLong { len, max: MAX_MESSAGE_LENGTH });
        }

        let id = self.next_id(now_ms);
        // Later stars sit a little higher on the strip, leveling off after ten
        let count = self.records.len() as f32;
        let y = 5.0 + (count / (count + 1.0).max(10.0)) * 20.0;

        self.records.push(StarRecord {
            id,
            message: message.to_string(),
            color: color.hex().to_string(),
            timestamp: now_ms,
            rotation: hint.rotation,
            x: hint.x_percent,
            y,
        });
        self.persist();
        Ok(id)
    }

    /// Remove one star. Returns false if no star has that id.
    pub fn delete(&mut self, id: StarId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = self.records.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Empty the jar. Callers confirm with the user first; there is no undo.
    pub fn clear(&mut self) {
        self.records.clear();
        self.persist();
    }

    /// Newest first, for the wish list
    pub fn sorted_newest_first(&self) -> Vec<&StarRecord> {
        let mut sorted: Vec<&StarRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        sorted
    }

    /// Stars created on the same local calendar day as `now_ms`
    pub fn count_on_day(&self, now_ms: i64, utc_offset_minutes: i32) -> usize {
        let Some(today) = local_date(now_ms, utc_offset_minutes) else {
            return 0;
        };
        self.records
            .iter()
            .filter(|r| local_date(r.timestamp, utc_offset_minutes) == Some(today))
            .count()
    }

    /// Serialize the whole jar into its slot
    pub fn save(&mut self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.records)?;
        self.backend.set(&self.key, &json)?;
        Ok(())
    }

    /// Fire-and-forget save; failures are logged, the in-memory jar stays authoritative
    fn persist(&mut self) {
        if let Err(e) = self.save() {
            warn!("Store: failed to write slot '{}': {}", self.key, e);
        }
    }
}

fn offset(utc_offset_minutes: i32) -> Option<FixedOffset> {
    FixedOffset::east_opt(utc_offset_minutes.saturating_mul(60))
}

/// Calendar date of an epoch-millisecond timestamp in a fixed UTC offset
pub fn local_date(timestamp_ms: i64, utc_offset_minutes: i32) -> Option<NaiveDate> {
    let utc = DateTime::from_timestamp_millis(timestamp_ms)?;
    Some(utc.with_timezone(&offset(utc_offset_minutes)?).date_naive())
}

/// `YYYY-MM-DD HH:MM` in a fixed UTC offset, for the wish list and star card
pub fn format_timestamp(timestamp_ms: i64, utc_offset_minutes: i32) -> String {
    DateTime::from_timestamp_millis(timestamp_ms)
        .zip(offset(utc_offset_minutes))
        .map(|(utc, tz)| utc.with_timezone(&tz).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}
