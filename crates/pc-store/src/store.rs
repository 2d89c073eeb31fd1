//! The interval store: whole-history reads and writes per timer.

use pc_core::{Timeline, TimerName};

use crate::backend::Backend;
use crate::codec::{decode, encode};
use crate::error::StoreError;

/// Named timer histories on top of a [`Backend`].
#[derive(Debug, Clone)]
pub struct IntervalStore<B> {
    backend: B,
}

impl<B: Backend> IntervalStore<B> {
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Loads a timer's full history.
    pub fn load(&self, name: &TimerName) -> Result<Timeline, StoreError> {
        let bytes = self.backend.read(name.as_str())?;
        let timeline = decode(name.as_str(), &bytes)?;
        tracing::debug!(%name, entries = timeline.entries().len(), "loaded history");
        Ok(timeline)
    }

    /// Replaces a timer's full history.
    pub fn save(&mut self, name: &TimerName, timeline: &Timeline) -> Result<(), StoreError> {
        let bytes = encode(timeline.entries())?;
        self.backend.write(name.as_str(), &bytes)
    }

    /// Stores a history for a timer that must not exist yet.
    pub fn create(&mut self, name: &TimerName, timeline: &Timeline) -> Result<(), StoreError> {
        if self.exists(name)? {
            return Err(StoreError::AlreadyExists {
                name: name.to_string(),
            });
        }
        self.save(name, timeline)
    }

    pub fn exists(&self, name: &TimerName) -> Result<bool, StoreError> {
        self.backend.contains(name.as_str())
    }

    /// All timer names in lexicographic order.
    ///
    /// Stored keys that are not valid names are skipped.
    pub fn list_names(&self) -> Result<Vec<TimerName>, StoreError> {
        let keys = self.backend.list_keys()?;
        Ok(keys
            .into_iter()
            .filter_map(|key| match TimerName::new(key) {
                Ok(name) => Some(name),
                Err(err) => {
                    tracing::warn!(%err, "skipping stored key");
                    None
                }
            })
            .collect())
    }

    /// Deletes a timer and its whole history.
    pub fn delete(&mut self, name: &TimerName) -> Result<(), StoreError> {
        self.backend.remove(name.as_str())?;
        tracing::debug!(%name, "deleted timer");
        Ok(())
    }
}
