use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{info, warn};

/// Where the high score lives between sessions.
pub trait HighScoreStore {
    fn load(&mut self) -> anyhow::Result<u32>;

    fn save(&mut self, value: u32) -> anyhow::Result<()>;
}

/// A text file holding a single decimal number.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        FileStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileStore {
    fn load(&mut self) -> anyhow::Result<u32> {
        if !self.path.exists() {
            info!("No high score at {:?}, creating it", self.path);
            std::fs::write(&self.path, "0")
                .with_context(|| format!("Creating {:?}", self.path))?;
            return Ok(0);
        }

        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Reading {:?}", self.path))?;
        let value = text
            .trim()
            .parse()
            .with_context(|| format!("Parsing high score {:?}", text.trim()))?;

        Ok(value)
    }

    fn save(&mut self, value: u32) -> anyhow::Result<()> {
        std::fs::write(&self.path, value.to_string())
            .with_context(|| format!("Writing {:?}", self.path))
    }
}

/// Keeps the value in memory only. Used where there is no filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<u32>,
    save_count: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: u32) -> Self {
        MemoryStore {
            value: Some(value),
            save_count: 0,
        }
    }

    pub fn value(&self) -> Option<u32> {
        self.value
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&mut self) -> anyhow::Result<u32> {
        Ok(self.value.unwrap_or(0))
    }

    fn save(&mut self, value: u32) -> anyhow::Result<()> {
        self.value = Some(value);
        self.save_count += 1;
        Ok(())
    }
}

/// Current score and the best one seen so far, backed by a store.
#[derive(Debug)]
pub struct Scoreboard<S> {
    store: S,
    score: u32,
    high_score: u32,
}

impl<S: HighScoreStore> Scoreboard<S> {
    /// Loads the high score. A broken store counts as a high score of 0.
    pub fn open(mut store: S) -> Self {
        let high_score = match store.load() {
            Ok(x) => x,
            Err(e) => {
                warn!("Failed to load the high score, starting from 0: {e:#}");
                0
            }
        };
        info!("High score: {high_score}");

        Scoreboard {
            store,
            score: 0,
            high_score,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Adds a point. The store is written only when the high score is beaten.
    pub fn score_point(&mut self) {
        self.score += 1;
        if self.score <= self.high_score {
            return;
        }

        self.high_score = self.score;
        info!("New high score: {}", self.high_score);
        if let Err(e) = self.store.save(self.high_score) {
            warn!("Failed to save the high score: {e:#}");
        }
    }

    pub fn reset(&mut self) {
        self.score = 0;
    }
}
