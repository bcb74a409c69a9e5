pub mod error;
pub mod features;
pub mod models;
pub mod render;

pub use error::ManifestError;
pub use features::FeatureManager;
