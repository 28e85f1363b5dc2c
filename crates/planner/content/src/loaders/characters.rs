//! Character catalog loader.

use std::collections::BTreeMap;
use std::path::Path;

use planner_core::Character;
use tracing::{debug, info, warn};

use crate::loaders::records::CharacterRecord;
use crate::loaders::{LoadResult, read_json};

/// Loader for characters from `character_filtered.json` and `<id>.json` files.
pub struct CharacterLoader;

impl CharacterLoader {
    pub const INDEX_FILE: &'static str = "character_filtered.json";

    /// Load character ids from the index file, in ascending order.
    ///
    /// The index is an object keyed by character id; values are ignored.
    pub fn load_index(path: &Path) -> LoadResult<Vec<String>> {
        let index: BTreeMap<String, serde_json::Value> = read_json(path)?;
        Ok(index.into_keys().collect())
    }

    /// Load one character record.
    pub fn load_record(path: &Path, id: &str) -> LoadResult<Character> {
        let record: CharacterRecord = read_json(path)?;
        Ok(record.into_character(id))
    }

    /// Load every character listed in the index under `data_dir`.
    ///
    /// A record that cannot be read or parsed is skipped with a warning. A
    /// record without base stats is kept for browsing. A missing or malformed
    /// index is an error.
    pub fn load_all(data_dir: &Path) -> LoadResult<Vec<Character>> {
        let ids = Self::load_index(&data_dir.join(Self::INDEX_FILE))?;
        let mut characters = Vec::with_capacity(ids.len());

        for id in &ids {
            let path = data_dir.join(format!("{id}.json"));
            match Self::load_record(&path, id) {
                Ok(character) => {
                    if character.stats.is_none() {
                        debug!(id = %id, "character has no base stats");
                    }
                    characters.push(character);
                }
                Err(err) => warn!(id = %id, error = %format!("{err:#}"), "skipping character"),
            }
        }

        info!(
            loaded = characters.len(),
            listed = ids.len(),
            "loaded character catalog"
        );
        Ok(characters)
    }
}
