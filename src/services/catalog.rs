use crate::models::{Destination, DestinationId};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading the destination catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Duplicate destination id: {0}")]
    DuplicateId(DestinationId),
}

/// Read-only catalog of destinations, loaded once at start-up
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    destinations: Vec<Destination>,
    index: HashMap<DestinationId, usize>,
}

/// Result of resolving a list of ids against the catalog
#[derive(Debug, Clone)]
pub struct Selection {
    pub destinations: Vec<Destination>,
    pub missing: Vec<DestinationId>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(destinations: Vec<Destination>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(destinations.len());

        for (position, destination) in destinations.iter().enumerate() {
            if index.insert(destination.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(destination.id.clone()));
            }
        }

        Ok(Self { destinations, index })
    }

    /// Load a JSON array of destinations from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;

        tracing::info!(
            "Loaded {} destinations from {}",
            catalog.len(),
            path.display()
        );

        Ok(catalog)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let destinations: Vec<Destination> = serde_json::from_str(raw)?;
        Self::new(destinations)
    }

    pub fn all(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn get(&self, id: &DestinationId) -> Option<&Destination> {
        self.index.get(id).map(|&position| &self.destinations[position])
    }

    /// Resolve ids in the requested order; repeated ids are kept once
    pub fn select(&self, ids: &[DestinationId]) -> Selection {
        let mut seen = HashSet::with_capacity(ids.len());
        let mut destinations = Vec::with_capacity(ids.len());
        let mut missing = Vec::new();

        for id in ids {
            if !seen.insert(id) {
                continue;
            }
            match self.get(id) {
                Some(destination) => destinations.push(destination.clone()),
                None => missing.push(id.clone()),
            }
        }

        Selection { destinations, missing }
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}
