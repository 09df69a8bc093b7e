//! JSON-file-backed schedule store.
//!
//! Serves schedule records and station metadata from a data directory,
//! standing in for the database-backed storage service boards poll in
//! production. Board files are named `<station>.json` and hold the raw
//! rows for every schedule touching that station; an optional
//! `stations.json` carries the station directory with categories.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::RwLock;

use crate::domain::StationCategory;

use super::error::StoreError;
use super::types::RawSchedule;

/// Name of the optional station-directory file inside the data directory.
const STATIONS_FILE: &str = "stations.json";

/// One entry of the station directory file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StationEntry {
    name: String,
    #[serde(default)]
    location_type: Option<String>,
}

/// Schedule and station data loaded from a directory of JSON files.
#[derive(Clone, Debug)]
pub struct JsonStore {
    inner: Arc<RwLock<StoreData>>,
}

#[derive(Debug)]
struct StoreData {
    /// Raw schedule rows keyed by station name.
    boards: HashMap<String, Vec<RawSchedule>>,
    /// Station category per station name.
    categories: HashMap<String, StationCategory>,
}

impl JsonStore {
    /// Load all board files (and `stations.json` if present) from a directory.
    pub fn load(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let data = Self::read_dir(data_dir.as_ref())?;
        Ok(Self {
            inner: Arc::new(RwLock::new(data)),
        })
    }

    fn read_dir(data_dir: &Path) -> Result<StoreData, StoreError> {
        let mut boards = HashMap::new();
        let mut categories = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| StoreError::Io {
            path: data_dir.display().to_string(),
            source: e,
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| StoreError::Io {
                path: data_dir.display().to_string(),
                source: e,
            })?;
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let text = std::fs::read_to_string(&path).map_err(|e| StoreError::Io {
                path: path.display().to_string(),
                source: e,
            })?;

            let file_name = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
            if file_name == STATIONS_FILE {
                let stations: Vec<StationEntry> =
                    serde_json::from_str(&text).map_err(|e| StoreError::Parse {
                        path: path.display().to_string(),
                        source: e,
                    })?;
                for station in stations {
                    let category = station
                        .location_type
                        .as_deref()
                        .and_then(StationCategory::parse)
                        .unwrap_or_default();
                    categories.insert(station.name, category);
                }
                continue;
            }

            let Some(station) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let rows: Vec<RawSchedule> =
                serde_json::from_str(&text).map_err(|e| StoreError::Parse {
                    path: path.display().to_string(),
                    source: e,
                })?;
            boards.insert(station.to_string(), rows);
        }

        tracing::info!(
            stations = boards.len(),
            directory_entries = categories.len(),
            "loaded schedule store"
        );

        Ok(StoreData { boards, categories })
    }

    /// Raw schedule rows for a station.
    pub async fn schedules_for(&self, station: &str) -> Result<Vec<RawSchedule>, StoreError> {
        let data = self.inner.read().await;
        data.boards
            .get(station)
            .cloned()
            .ok_or_else(|| StoreError::UnknownStation {
                station: station.to_string(),
            })
    }

    /// Category of a station, if it appears in the directory.
    ///
    /// Callers default to [`StationCategory::Ville`] when absent.
    pub async fn category_of(&self, station: &str) -> Option<StationCategory> {
        let data = self.inner.read().await;
        data.categories.get(station).copied()
    }

    /// Station names with board data, sorted.
    pub async fn stations(&self) -> Vec<String> {
        let data = self.inner.read().await;
        let mut names: Vec<String> = data.boards.keys().cloned().collect();
        names.sort();
        names
    }

    /// Reload all data from disk.
    pub async fn reload(&self, data_dir: impl AsRef<Path>) -> Result<(), StoreError> {
        let fresh = Self::read_dir(data_dir.as_ref())?;
        let mut data = self.inner.write().await;
        *data = fresh;
        Ok(())
    }
}
