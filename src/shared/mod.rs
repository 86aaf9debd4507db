pub mod errors;
pub mod fs_sweep;
pub mod logging;
