use super::name::short_type_name;
use super::state::DiskFixture;
use crate::config::FixtureSettings;
use crate::shared::errors::FixtureError;
use std::panic::{self, AssertUnwindSafe};

/// Opt-in marker for test types that may need a scratch root on disk.
///
/// ```ignore
/// struct FooTest;
/// impl MaybeDiskTest for FooTest {
///     const DISK: bool = true;
/// }
/// ```
pub trait MaybeDiskTest {
    const DISK: bool = false;

    fn fixture_name() -> &'static str {
        short_type_name::<Self>()
    }
}

pub fn setup_for<T: MaybeDiskTest>(
    settings: &FixtureSettings,
) -> Result<DiskFixture, FixtureError> {
    DiskFixture::setup(T::fixture_name(), T::DISK, settings)
}

/// Runs `body` between setup and teardown of a fixture for `T`.
///
/// Teardown runs even when `body` panics; the panic is resumed afterwards and
/// a teardown failure in that case is reported on stderr and in the
/// fixture log.
pub fn run<T, F, R>(settings: &FixtureSettings, body: F) -> Result<R, FixtureError>
where
    T: MaybeDiskTest,
    F: FnOnce(&DiskFixture) -> R,
{
    let fixture = setup_for::<T>(settings)?;
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| body(&fixture)));
    let cleanup = fixture.teardown();

    match outcome {
        Ok(value) => {
            cleanup?;
            Ok(value)
        }
        Err(payload) => {
            if let Err(err) = cleanup {
                eprintln!("{} teardown failed after panic: {err}", fixture.name());
            }
            panic::resume_unwind(payload)
        }
    }
}
