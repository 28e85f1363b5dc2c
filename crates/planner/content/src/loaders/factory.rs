//! Content factory for loading the catalog from a data directory.

use std::path::{Path, PathBuf};

use planner_core::{Character, PlannerConfig, Team, Weapon};

use crate::loaders::{CharacterLoader, LoadResult, TeamLoader, WeaponLoader};
use crate::repository::ContentRepository;

/// Content factory that loads all planner content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── character_filtered.json   # object keyed by character id
/// ├── weapons.json              # array of { "id": ... }
/// ├── <character_id>.json
/// └── <weapon_id>.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load every character listed in `character_filtered.json`.
    pub fn load_characters(&self) -> LoadResult<Vec<Character>> {
        CharacterLoader::load_all(&self.data_dir)
    }

    /// Load every weapon listed in `weapons.json`.
    pub fn load_weapons(&self) -> LoadResult<Vec<Weapon>> {
        WeaponLoader::load_all(&self.data_dir)
    }

    /// Load both catalogs into a repository.
    pub fn load_repository(&self) -> LoadResult<ContentRepository> {
        let characters = self.load_characters()?;
        let weapons = self.load_weapons()?;
        Ok(ContentRepository::new(characters, weapons))
    }

    /// Load a team file. Relative paths resolve against the working directory.
    pub fn load_team(&self, path: &Path, config: &PlannerConfig) -> LoadResult<Team> {
        TeamLoader::load(path, config)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
