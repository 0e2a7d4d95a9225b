use crate::error::Result;
use crate::models::Location;
use std::collections::HashMap;
use uuid::Uuid;

/// Read-only lookup of named locations. Built once at startup; the engine
/// never mutates it, so it can be shared freely across threads.
///
/// Iteration order is insertion order, which keeps candidate generation
/// deterministic for a fixed catalog.
#[derive(Debug, Default)]
pub struct LocationCatalog {
    locations: Vec<Location>,
    by_name: HashMap<String, usize>,
    by_id: HashMap<Uuid, usize>,
}

impl LocationCatalog {
    /// Build a catalog, skipping malformed entries (invalid coordinates,
    /// duplicate names) rather than failing the whole load.
    pub fn new(locations: Vec<Location>) -> Self {
        let mut catalog = LocationCatalog {
            locations: Vec::with_capacity(locations.len()),
            by_name: HashMap::new(),
            by_id: HashMap::new(),
        };

        for location in locations {
            if !location.coordinates.is_valid() {
                tracing::warn!(
                    name = %location.name,
                    "Skipping catalog entry with invalid coordinates"
                );
                continue;
            }

            let key = Self::normalize(&location.name);
            if key.is_empty() {
                tracing::warn!("Skipping catalog entry with empty name");
                continue;
            }
            if catalog.by_name.contains_key(&key) {
                tracing::warn!(name = %location.name, "Skipping duplicate catalog entry");
                continue;
            }

            let index = catalog.locations.len();
            catalog.by_name.insert(key, index);
            catalog.by_id.insert(location.id, index);
            catalog.locations.push(location);
        }

        tracing::info!(count = catalog.locations.len(), "Location catalog loaded");
        catalog
    }

    /// Load a catalog from a JSON array of locations.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let locations: Vec<Location> = serde_json::from_str(json)?;
        Ok(Self::new(locations))
    }

    /// Resolve a location by name, case-insensitively.
    pub fn resolve(&self, name: &str) -> Option<&Location> {
        self.by_name
            .get(&Self::normalize(name))
            .map(|&index| &self.locations[index])
    }

    pub fn get_by_id(&self, id: &Uuid) -> Option<&Location> {
        self.by_id.get(id).map(|&index| &self.locations[index])
    }

    /// Locations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    fn normalize(name: &str) -> String {
        name.trim().to_lowercase()
    }
}
