pub mod config;
pub mod fixture;
pub mod shared;

pub use config::FixtureSettings;
pub use fixture::{run, setup_for, DiskFixture, MaybeDiskTest};
pub use shared::errors::{FixtureError, FixturePhase};
