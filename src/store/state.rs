//! In-memory store of profiles with write-through persistence
//!
//! Every mutating operation runs against a staged copy of the profile map.
//! The copy replaces the live map only after the operation succeeded and,
//! when the store has a default path, after the full document was written.
//! A failed call therefore never leaves a partial change behind.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::{debug, info};

use super::error::{StoreError, StoreResult};
use super::model::{normalize_seed, Coordinate, Profile};

/// Profile name → profile, in insertion order
pub type ProfileMap = IndexMap<String, Profile>;

/// How an imported document is combined with the current profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// Imported profiles overwrite same-named ones, the rest are kept
    Merge,
    /// The imported document becomes the whole store
    Replace,
}

#[derive(Debug, Clone, Default)]
pub struct Store {
    profiles: ProfileMap,
    path: Option<PathBuf>,
}

impl Store {
    /// Empty store that never touches the disk
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load the default data file, starting empty if it does not exist yet
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        match Self::load_from(&path) {
            Ok(store) => Ok(store),
            Err(StoreError::FileNotFound(_)) => {
                info!(path = %path.display(), "Data file not found, starting with an empty store");
                Ok(Self {
                    profiles: ProfileMap::new(),
                    path: Some(path),
                })
            }
            Err(err) => Err(err),
        }
    }

    /// Load a store from `path` and keep `path` as its default location
    pub fn load_from(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let profiles = read_document(path)?;
        info!(path = %path.display(), profiles = profiles.len(), "Loaded store");
        Ok(Self {
            profiles,
            path: Some(path.to_path_buf()),
        })
    }

    /// Write the full store to `path`, overwriting it
    pub fn save_to(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        write_document(path.as_ref(), &self.profiles)
    }

    /// Write to the default path, if the store has one
    pub fn save(&self) -> StoreResult<()> {
        match &self.path {
            Some(path) => self.save_to(path),
            None => Ok(()),
        }
    }

    /// Write a copy to a user-chosen file without changing the default path
    pub fn export_to(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();
        self.save_to(path)?;
        info!(path = %path.display(), profiles = self.profiles.len(), "Exported store");
        Ok(())
    }

    /// Read a user-chosen file and fold it into this store
    ///
    /// Returns the number of profiles found in the imported document.
    pub fn import_from(&mut self, path: impl AsRef<Path>, mode: ImportMode) -> StoreResult<usize> {
        let path = path.as_ref();
        let imported = read_document(path)?;
        let count = imported.len();

        self.commit(|profiles| {
            match mode {
                ImportMode::Replace => *profiles = imported,
                ImportMode::Merge => {
                    for (name, profile) in imported {
                        profiles.insert(name, profile);
                    }
                }
            }
            Ok(())
        })?;

        info!(path = %path.display(), count, mode = ?mode, "Imported profiles");
        Ok(count)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn profiles(&self) -> &ProfileMap {
        &self.profiles
    }

    pub fn profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn create_profile(&mut self, name: &str) -> StoreResult<()> {
        let name = validate_profile_name(name)?;
        self.commit(|profiles| {
            if profiles.contains_key(&name) {
                return Err(StoreError::DuplicateName(name.clone()));
            }
            profiles.insert(name.clone(), Profile::new());
            Ok(())
        })?;
        info!(profile = %name, "Created profile");
        Ok(())
    }

    /// Re-key a profile, keeping its seed, coordinates and list position
    pub fn rename_profile(&mut self, old: &str, new: &str) -> StoreResult<()> {
        let new = validate_profile_name(new)?;
        if old == new {
            if !self.profiles.contains_key(old) {
                return Err(StoreError::ProfileNotFound(old.to_string()));
            }
            return Ok(());
        }

        self.commit(|profiles| {
            let index = profiles
                .get_index_of(old)
                .ok_or_else(|| StoreError::ProfileNotFound(old.to_string()))?;
            if profiles.contains_key(&new) {
                return Err(StoreError::DuplicateName(new.clone()));
            }
            let (_, profile) = profiles
                .shift_remove_index(index)
                .ok_or_else(|| StoreError::ProfileNotFound(old.to_string()))?;
            let (appended, _) = profiles.insert_full(new.clone(), profile);
            profiles.move_index(appended, index);
            Ok(())
        })?;
        info!(from = %old, to = %new, "Renamed profile");
        Ok(())
    }

    /// Remove a profile together with all of its coordinates
    pub fn delete_profile(&mut self, name: &str) -> StoreResult<Profile> {
        let removed = self.commit(|profiles| {
            profiles
                .shift_remove(name)
                .ok_or_else(|| StoreError::ProfileNotFound(name.to_string()))
        })?;
        info!(profile = %name, coordinates = removed.coordinates.len(), "Deleted profile");
        Ok(removed)
    }

    /// Set the seed; `None` or a blank string clears it
    pub fn set_seed(&mut self, profile: &str, seed: Option<&str>) -> StoreResult<()> {
        let seed = normalize_seed(seed.map(str::to_string));
        self.commit(|profiles| {
            profile_mut(profiles, profile)?.seed = seed.clone();
            Ok(())
        })?;
        debug!(profile = %profile, seed = ?seed, "Updated seed");
        Ok(())
    }

    pub fn add_coordinate(&mut self, profile: &str, coord: Coordinate) -> StoreResult<()> {
        let name = coord.name.clone();
        self.commit(|profiles| {
            let entry = profile_mut(profiles, profile)?;
            coord.validate()?;
            entry.coordinates.push(coord);
            Ok(())
        })?;
        debug!(profile = %profile, coordinate = %name, "Added coordinate");
        Ok(())
    }

    /// Remove the first coordinate called `name`
    pub fn remove_coordinate(&mut self, profile: &str, name: &str) -> StoreResult<Coordinate> {
        let removed = self.commit(|profiles| {
            let entry = profile_mut(profiles, profile)?;
            let index = entry
                .position_of(name)
                .ok_or_else(|| coordinate_not_found(profile, name))?;
            Ok(entry.coordinates.remove(index))
        })?;
        debug!(profile = %profile, coordinate = %name, "Removed coordinate");
        Ok(removed)
    }

    pub fn remove_coordinate_at(&mut self, profile: &str, index: usize) -> StoreResult<Coordinate> {
        let removed = self.commit(|profiles| {
            let entry = profile_mut(profiles, profile)?;
            if index >= entry.coordinates.len() {
                return Err(index_out_of_range(profile, index));
            }
            Ok(entry.coordinates.remove(index))
        })?;
        debug!(profile = %profile, coordinate = %removed.name, index, "Removed coordinate");
        Ok(removed)
    }

    /// Replace the first coordinate called `old_name`, keeping its position
    pub fn update_coordinate(
        &mut self,
        profile: &str,
        old_name: &str,
        coord: Coordinate,
    ) -> StoreResult<()> {
        self.commit(|profiles| {
            let entry = profile_mut(profiles, profile)?;
            let index = entry
                .position_of(old_name)
                .ok_or_else(|| coordinate_not_found(profile, old_name))?;
            coord.validate()?;
            entry.coordinates[index] = coord;
            Ok(())
        })?;
        debug!(profile = %profile, coordinate = %old_name, "Updated coordinate");
        Ok(())
    }

    pub fn update_coordinate_at(
        &mut self,
        profile: &str,
        index: usize,
        coord: Coordinate,
    ) -> StoreResult<()> {
        self.commit(|profiles| {
            let entry = profile_mut(profiles, profile)?;
            coord.validate()?;
            let slot = entry
                .coordinates
                .get_mut(index)
                .ok_or_else(|| index_out_of_range(profile, index))?;
            *slot = coord;
            Ok(())
        })?;
        debug!(profile = %profile, index, "Updated coordinate");
        Ok(())
    }

    /// Apply `op` to a staged copy, persist it, then swap it in
    fn commit<T>(&mut self, op: impl FnOnce(&mut ProfileMap) -> StoreResult<T>) -> StoreResult<T> {
        let mut staged = self.profiles.clone();
        let output = op(&mut staged)?;
        if let Some(path) = &self.path {
            write_document(path, &staged)?;
        }
        self.profiles = staged;
        Ok(output)
    }
}

fn validate_profile_name(name: &str) -> StoreResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StoreError::validation("profile name", "must not be empty"));
    }
    Ok(name.to_string())
}

fn profile_mut<'a>(profiles: &'a mut ProfileMap, name: &str) -> StoreResult<&'a mut Profile> {
    profiles
        .get_mut(name)
        .ok_or_else(|| StoreError::ProfileNotFound(name.to_string()))
}

fn coordinate_not_found(profile: &str, name: &str) -> StoreError {
    StoreError::CoordinateNotFound {
        profile: profile.to_string(),
        coordinate: name.to_string(),
    }
}

fn index_out_of_range(profile: &str, index: usize) -> StoreError {
    StoreError::CoordinateIndexOutOfRange {
        profile: profile.to_string(),
        index,
    }
}

/// Read and validate a data document
///
/// Profile names are trimmed the same way `create_profile` trims them, so
/// two keys differing only in surrounding whitespace are a duplicate.
pub fn read_document(path: &Path) -> StoreResult<ProfileMap> {
    let contents = fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            StoreError::FileNotFound(path.to_path_buf())
        } else {
            StoreError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    // Invalid UTF-8 is a syntax error here, not an I/O failure
    let raw: ProfileMap = serde_json::from_slice(&contents)
        .map_err(|source| StoreError::from_json(path.to_path_buf(), source))?;

    let mut profiles = ProfileMap::with_capacity(raw.len());
    for (name, profile) in raw {
        let name = validate_profile_name(&name)?;
        for coord in &profile.coordinates {
            coord.validate().map_err(|err| match err {
                StoreError::Validation { field, reason } => StoreError::Validation {
                    field: format!("profile '{name}', {field}"),
                    reason,
                },
                other => other,
            })?;
        }
        if profiles.contains_key(&name) {
            return Err(StoreError::DuplicateName(name));
        }
        profiles.insert(name, profile);
    }

    Ok(profiles)
}

/// Serialize `profiles` as pretty JSON and overwrite `path`
pub fn write_document(path: &Path, profiles: &ProfileMap) -> StoreResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| StoreError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut json = serde_json::to_string_pretty(profiles).map_err(StoreError::Serialize)?;
    json.push('\n');

    fs::write(path, json).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), profiles = profiles.len(), "Wrote data file");
    Ok(())
}
