pub mod error;
pub mod load;
pub mod settings;

pub use error::ConfigError;
pub use load::load_settings;
pub use settings::{FixtureSettings, DEFAULT_FIXTURE_PREFIX};
