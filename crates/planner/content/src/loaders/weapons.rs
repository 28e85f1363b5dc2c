//! Weapon catalog loader.

use std::path::Path;

use planner_core::Weapon;
use tracing::{info, warn};

use crate::loaders::records::{WeaponIndexEntry, WeaponRecord};
use crate::loaders::{LoadResult, read_json};

/// Loader for weapons from `weapons.json` and `<id>.json` files.
pub struct WeaponLoader;

impl WeaponLoader {
    pub const INDEX_FILE: &'static str = "weapons.json";

    /// Load weapon ids from the index file, in file order.
    pub fn load_index(path: &Path) -> LoadResult<Vec<String>> {
        let entries: Vec<WeaponIndexEntry> = read_json(path)?;
        Ok(entries.into_iter().map(|e| e.id.into_string()).collect())
    }

    /// Load one weapon record.
    pub fn load_record(path: &Path, id: &str) -> LoadResult<Weapon> {
        let record: WeaponRecord = read_json(path)?;
        Ok(record.into_weapon(id))
    }

    /// Load every weapon listed in the index under `data_dir`.
    ///
    /// A record that cannot be read or parsed is skipped with a warning.
    /// Weapons with incomplete tables are kept; they simply contribute no
    /// stats. A missing or malformed index is an error.
    pub fn load_all(data_dir: &Path) -> LoadResult<Vec<Weapon>> {
        let ids = Self::load_index(&data_dir.join(Self::INDEX_FILE))?;
        let mut weapons = Vec::with_capacity(ids.len());

        for id in &ids {
            let path = data_dir.join(format!("{id}.json"));
            match Self::load_record(&path, id) {
                Ok(weapon) => weapons.push(weapon),
                Err(err) => warn!(id = %id, error = %format!("{err:#}"), "skipping weapon"),
            }
        }

        info!(
            loaded = weapons.len(),
            listed = ids.len(),
            "loaded weapon catalog"
        );
        Ok(weapons)
    }
}
