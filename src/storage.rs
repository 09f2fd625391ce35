//! Durable user preferences: favorites, recents and saved palettes.
//!
//! Values are stored as JSON strings under fixed keys in a
//! [`KeyValueStore`]. Missing keys read as empty collections. A value that
//! no longer decodes is logged and also read as empty, so a corrupt entry
//! never locks the user out; backend I/O failures are reported as
//! [`StorageError`].

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::error::StorageError;

pub const FAVORITES_KEY: &str = "icony_favorites";
pub const RECENT_ICONS_KEY: &str = "icony_recent_icons";
pub const RECENT_COLORS_KEY: &str = "icony_recent_colors";
pub const PALETTES_KEY: &str = "icony_palettes";

pub const RECENT_ICONS_CAPACITY: usize = 10;
pub const RECENT_COLORS_CAPACITY: usize = 8;

// ============================================================================
// KeyValueStore
// ============================================================================

/// A string key to string value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Volatile store, mostly for tests and one-shot sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Stores each key as `{key}.json` in a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let io_error = |source| StorageError::Io {
            key: key.to_string(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(io_error)?;
        fs::write(self.path_for(key), value).map_err(io_error)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }
}

// ============================================================================
// RecentList
// ============================================================================

/// Bounded most-recent-first list without duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentList<T> {
    capacity: usize,
    items: Vec<T>,
}

impl<T: PartialEq> RecentList<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::with_capacity(capacity),
        }
    }

    /// Restores a list, dropping duplicates and anything past capacity.
    pub fn from_vec(capacity: usize, items: Vec<T>) -> Self {
        let mut list = Self::new(capacity);
        for item in items {
            if list.items.len() == capacity {
                break;
            }
            if !list.items.contains(&item) {
                list.items.push(item);
            }
        }
        list
    }

    /// Moves `item` to the front, evicting the oldest entry when full.
    pub fn push(&mut self, item: T) {
        self.items.retain(|existing| *existing != item);
        self.items.insert(0, item);
        self.items.truncate(self.capacity);
    }

    pub fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|existing| existing == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

// ============================================================================
// Preferences
// ============================================================================

/// A named, ordered set of colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPalette {
    pub name: String,
    pub colors: Vec<HexColor>,
}

impl SavedPalette {
    pub fn new(name: impl Into<String>, colors: Vec<HexColor>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }
}

/// Typed access to the preference keys of a [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct Preferences<S> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // ------------------------------------------------------------------------
    // Favorites
    // ------------------------------------------------------------------------

    /// Favorite icon ids in the order they were added.
    pub fn favorites(&self) -> Result<Vec<String>, StorageError> {
        self.load(FAVORITES_KEY)
    }

    pub fn is_favorite(&self, id: &str) -> Result<bool, StorageError> {
        Ok(self.favorites()?.iter().any(|favorite| favorite == id))
    }

    /// Adds a favorite; returns false if it was already present.
    pub fn add_favorite(&mut self, id: &str) -> Result<bool, StorageError> {
        let mut favorites = self.favorites()?;
        if favorites.iter().any(|favorite| favorite == id) {
            return Ok(false);
        }
        favorites.push(id.to_string());
        self.save(FAVORITES_KEY, &favorites)?;
        Ok(true)
    }

    /// Removes a favorite; returns false if it was not present.
    pub fn remove_favorite(&mut self, id: &str) -> Result<bool, StorageError> {
        let mut favorites = self.favorites()?;
        let before = favorites.len();
        favorites.retain(|favorite| favorite != id);
        if favorites.len() == before {
            return Ok(false);
        }
        self.save(FAVORITES_KEY, &favorites)?;
        Ok(true)
    }

    /// Flips membership and returns whether `id` is now a favorite.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool, StorageError> {
        if self.remove_favorite(id)? {
            Ok(false)
        } else {
            self.add_favorite(id)
        }
    }

    // ------------------------------------------------------------------------
    // Recents
    // ------------------------------------------------------------------------

    pub fn recent_icons(&self) -> Result<RecentList<String>, StorageError> {
        let items = self.load(RECENT_ICONS_KEY)?;
        Ok(RecentList::from_vec(RECENT_ICONS_CAPACITY, items))
    }

    pub fn push_recent_icon(&mut self, id: &str) -> Result<(), StorageError> {
        let mut recent = self.recent_icons()?;
        recent.push(id.to_string());
        self.save(RECENT_ICONS_KEY, recent.as_slice())
    }

    pub fn recent_colors(&self) -> Result<RecentList<HexColor>, StorageError> {
        let items = self.load(RECENT_COLORS_KEY)?;
        Ok(RecentList::from_vec(RECENT_COLORS_CAPACITY, items))
    }

    pub fn push_recent_color(&mut self, color: HexColor) -> Result<(), StorageError> {
        let mut recent = self.recent_colors()?;
        recent.push(color);
        self.save(RECENT_COLORS_KEY, recent.as_slice())
    }

    // ------------------------------------------------------------------------
    // Palettes
    // ------------------------------------------------------------------------

    pub fn palettes(&self) -> Result<Vec<SavedPalette>, StorageError> {
        self.load(PALETTES_KEY)
    }

    pub fn palette(&self, name: &str) -> Result<Option<SavedPalette>, StorageError> {
        Ok(self
            .palettes()?
            .into_iter()
            .find(|palette| palette.name == name))
    }

    /// Saves a palette, replacing one with the same name in place.
    pub fn save_palette(&mut self, palette: SavedPalette) -> Result<(), StorageError> {
        let mut palettes = self.palettes()?;
        match palettes.iter_mut().find(|existing| existing.name == palette.name) {
            Some(existing) => *existing = palette,
            None => palettes.push(palette),
        }
        self.save(PALETTES_KEY, &palettes)
    }

    /// Deletes a palette by name; returns false if none matched.
    pub fn delete_palette(&mut self, name: &str) -> Result<bool, StorageError> {
        let mut palettes = self.palettes()?;
        let before = palettes.len();
        palettes.retain(|palette| palette.name != name);
        if palettes.len() == before {
            return Ok(false);
        }
        self.save(PALETTES_KEY, &palettes)?;
        Ok(true)
    }

    // ------------------------------------------------------------------------
    // Encoding
    // ------------------------------------------------------------------------

    fn load<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T, StorageError> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(T::default());
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "discarding unreadable preference");
                Ok(T::default())
            }
        }
    }

    fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, &json)
    }
}
