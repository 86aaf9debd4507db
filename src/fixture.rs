pub mod case;
pub mod name;
pub mod state;

pub use case::{run, setup_for, MaybeDiskTest};
pub use name::{short_type_name, validate_fixture_name};
pub use state::DiskFixture;
