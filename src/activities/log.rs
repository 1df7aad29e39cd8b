//! Activity log persisted as a single JSON document.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{Activity, ActivityError};

/// File format version
const FORMAT_VERSION: u32 = 1;

/// On-disk layout of the log.
#[derive(Debug, Serialize, Deserialize)]
struct LogFile {
    version: u32,
    activities: Vec<Activity>,
}

/// Logged runs backed by a JSON file. The whole file is rewritten on save.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    path: PathBuf,
    activities: Vec<Activity>,
}

impl ActivityLog {
    /// Open the log at `path`. A missing file is an empty log.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ActivityError> {
        let path = path.into();

        if !path.exists() {
            tracing::debug!("No activity log at {}, starting empty", path.display());
            return Ok(Self {
                path,
                activities: Vec::new(),
            });
        }

        let mut file =
            std::fs::File::open(&path).map_err(|e| ActivityError::Io(e.to_string()))?;
        let activities = load_json(&mut file)?;
        tracing::debug!("Loaded {} activities from {}", activities.len(), path.display());

        Ok(Self { path, activities })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append an activity and return its id.
    pub fn add(&mut self, activity: Activity) -> Uuid {
        let id = activity.id;
        tracing::info!(%id, date = %activity.date, distance_km = activity.distance_km, "Added activity");
        self.activities.push(activity);
        id
    }

    /// Remove an activity. Returns false when no activity has that id.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.activities.len();
        self.activities.retain(|activity| activity.id != id);
        let removed = self.activities.len() != before;
        if removed {
            tracing::info!(%id, "Deleted activity");
        }
        removed
    }

    /// Look up an activity by id.
    pub fn get(&self, id: Uuid) -> Option<&Activity> {
        self.activities.iter().find(|activity| activity.id == id)
    }

    /// Find the single activity whose id starts with `prefix`.
    pub fn find_by_prefix(&self, prefix: &str) -> Option<&Activity> {
        let prefix = prefix.to_lowercase();
        let mut matches = self
            .activities
            .iter()
            .filter(|activity| activity.id.to_string().starts_with(&prefix));
        match (matches.next(), matches.next()) {
            (Some(activity), None) => Some(activity),
            _ => None,
        }
    }

    /// Activities in insertion order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Activities sorted by date, oldest first.
    pub fn list(&self) -> Vec<&Activity> {
        let mut sorted: Vec<&Activity> = self.activities.iter().collect();
        sorted.sort_by_key(|activity| activity.date);
        sorted
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Write the log to its file, creating parent directories.
    pub fn save(&self) -> Result<(), ActivityError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ActivityError::Io(e.to_string()))?;
        }

        let mut file =
            std::fs::File::create(&self.path).map_err(|e| ActivityError::Io(e.to_string()))?;
        save_json(&self.activities, &mut file)?;
        tracing::info!(
            "Saved {} activities to {}",
            self.activities.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Write activities as pretty JSON.
pub fn save_json<W: Write>(activities: &[Activity], writer: &mut W) -> Result<(), ActivityError> {
    let document = LogFile {
        version: FORMAT_VERSION,
        activities: activities.to_vec(),
    };
    serde_json::to_writer_pretty(writer, &document)
        .map_err(|e| ActivityError::Serialization(e.to_string()))
}

/// Read activities from JSON.
pub fn load_json<R: Read>(reader: &mut R) -> Result<Vec<Activity>, ActivityError> {
    let document: LogFile = serde_json::from_reader(reader)
        .map_err(|e| ActivityError::Serialization(e.to_string()))?;
    if document.version > FORMAT_VERSION {
        return Err(ActivityError::UnsupportedVersion(document.version));
    }
    Ok(document.activities)
}
