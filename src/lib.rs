pub mod config;
pub mod error;
pub mod names;
pub mod resource;

pub use config::Config;
pub use error::Error;
pub use names::{apply_prefix, ensure_non_deterministic, generate, generate_with_prefix, Corpus, NameGenerator};
pub use resource::{ShipPlan, ShipResource, ShipState};
