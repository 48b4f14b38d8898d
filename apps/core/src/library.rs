//! Saved idea library: a small JSON file of analyzed idea cards.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::IdeaCard;
use crate::error::{AppError, Result};

/// File name of the library inside the data directory.
pub const LIBRARY_FILE: &str = "ideas.json";

/// Idea cards persisted as a JSON array, oldest first.
#[derive(Debug)]
pub struct IdeaLibrary {
    path: PathBuf,
    capacity: usize,
    ideas: Vec<IdeaCard>,
}

impl IdeaLibrary {
    /// Opens the library at `path`. A missing file is an empty library.
    pub fn open(path: impl Into<PathBuf>, capacity: usize) -> Result<Self> {
        let path = path.into();
        if capacity == 0 {
            return Err(AppError::Validation(
                "Library capacity must be at least 1".to_string(),
            ));
        }

        let ideas = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            Vec::new()
        };

        debug!(path = %path.display(), count = ideas.len(), "Opened idea library");
        Ok(Self {
            path,
            capacity,
            ideas,
        })
    }

    /// Opens `<data_dir>/ideas.json`.
    pub fn open_in(data_dir: &Path, capacity: usize) -> Result<Self> {
        Self::open(data_dir.join(LIBRARY_FILE), capacity)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn list(&self) -> &[IdeaCard] {
        &self.ideas
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    /// Appends a card, drops the oldest beyond capacity, and writes the file.
    pub fn save(&mut self, card: IdeaCard) -> Result<()> {
        self.ideas.push(card);
        if self.ideas.len() > self.capacity {
            let overflow = self.ideas.len() - self.capacity;
            self.ideas.drain(..overflow);
            debug!(dropped = overflow, "Trimmed idea library to capacity");
        }
        self.persist()
    }

    /// Removes the card with the given id and returns it.
    pub fn remove(&mut self, id: &str) -> Result<IdeaCard> {
        let id = Uuid::parse_str(id.trim())?;
        let position = self
            .ideas
            .iter()
            .position(|card| card.id == id)
            .ok_or_else(|| AppError::NotFound(format!("No saved idea with id {}", id)))?;

        let removed = self.ideas.remove(position);
        self.persist()?;
        info!(%id, "Removed saved idea");
        Ok(removed)
    }

    /// Removes every card and returns how many there were.
    pub fn clear(&mut self) -> Result<usize> {
        let count = self.ideas.len();
        self.ideas.clear();
        self.persist()?;
        info!(count, "Cleared idea library");
        Ok(count)
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&self.ideas)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
