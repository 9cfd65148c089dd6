pub mod models;

use std::collections::BTreeMap;

use dashmap::{mapref::entry::Entry, DashMap};
use tracing::{debug, warn};

use crate::{
    error::{LinkError, Result},
    generator::{Generator, RandomGenerator},
    utils::valid_url,
};

pub use models::LinkRecord;

/// Collision retries before `create` gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// In-memory mapping from identifier to target URL.
///
/// The map is sharded, so lookups and listings proceed alongside inserts.
/// Uniqueness is checked and claimed through a single entry operation,
/// which keeps concurrent `create` calls from sharing an identifier.
pub struct LinkStore {
    links: DashMap<String, String>,
    generator: Box<dyn Generator>,
    max_attempts: usize,
}

impl LinkStore {
    pub fn new() -> Self {
        Self::with_generator(RandomGenerator::default(), DEFAULT_MAX_ATTEMPTS)
    }

    pub fn with_generator(generator: impl Generator, max_attempts: usize) -> Self {
        Self {
            links: DashMap::new(),
            generator: Box::new(generator),
            max_attempts: max_attempts.max(1),
        }
    }

    /// Validates `target_url`, claims a fresh identifier for it and stores
    /// the mapping.
    pub fn create(&self, target_url: &str) -> Result<LinkRecord> {
        if !valid_url(target_url) {
            return Err(LinkError::Validation(target_url.to_string()));
        }

        for attempt in 1..=self.max_attempts {
            let url_id = self.generator.generate();
            match self.links.entry(url_id.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(target_url.to_string());
                    debug!(url_id = %url_id, attempt, "Stored short url");
                    return Ok(LinkRecord {
                        url_id,
                        url: target_url.to_string(),
                    });
                }
                Entry::Occupied(_) => {
                    warn!(url_id = %url_id, attempt, "Identifier collision, retrying");
                }
            }
        }

        Err(LinkError::Capacity {
            attempts: self.max_attempts,
        })
    }

    /// Identifiers are single-case, so the lookup ignores case.
    pub fn get(&self, url_id: &str) -> Result<String> {
        let key = url_id.to_ascii_uppercase();
        self.links
            .get(&key)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| LinkError::NotFound(url_id.to_string()))
    }

    pub fn list_all(&self) -> BTreeMap<String, String> {
        self.links
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl Default for LinkStore {
    fn default() -> Self {
        Self::new()
    }
}
