// Library exports for the route recommendation engine

pub mod catalog;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use catalog::LocationCatalog;
pub use config::EngineConfig;
pub use engine::{NeutralPredictor, RouteEngine, RouteFeatures, ScorePredictor};
pub use error::{EngineError, Result};
pub use store::{MemoryPreferenceStore, PreferenceStore};
