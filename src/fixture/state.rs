use super::name::validate_fixture_name;
use crate::config::FixtureSettings;
use crate::shared::errors::FixtureError;
use crate::shared::fs_sweep::sweep_prefixed;
use crate::shared::logging::append_fixture_log;
use std::fs;
use std::path::{Path, PathBuf};

/// Per-test fixture state.
///
/// `root_path` is `Some` exactly when the fixture was set up in disk mode.
/// Outside disk mode setup neither checks the settings nor touches the
/// filesystem.
/// The path never exists right after setup; the test creates it if it needs
/// it, and [`DiskFixture::teardown`] removes it along with every sibling
/// sharing its name as a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskFixture {
    name: String,
    disk_mode: bool,
    root_path: Option<PathBuf>,
    log_path: Option<PathBuf>,
}

impl DiskFixture {
    pub fn setup(
        name: &str,
        disk_mode: bool,
        settings: &FixtureSettings,
    ) -> Result<Self, FixtureError> {
        if !disk_mode {
            return Ok(Self {
                name: name.to_string(),
                disk_mode,
                root_path: None,
                log_path: None,
            });
        }

        validate_fixture_name(name)?;
        settings.validate()?;

        let prefix = format!("{}{}", settings.prefix, name);
        let root_path = allocate_root_path(&settings.allocation_root(), &prefix)?;
        append_fixture_log(
            settings.log_path.as_deref(),
            "info",
            "fixture.setup",
            &format!("{name} allocated root {}", root_path.display()),
        );

        Ok(Self {
            name: name.to_string(),
            disk_mode,
            root_path: Some(root_path),
            log_path: settings.log_path.clone(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn disk_mode(&self) -> bool {
        self.disk_mode
    }

    pub fn root_path(&self) -> Option<&Path> {
        self.root_path.as_deref()
    }

    /// `root_path` joined with `relative`, or `None` outside disk mode.
    pub fn root_join(&self, relative: impl AsRef<Path>) -> Option<PathBuf> {
        self.root_path.as_ref().map(|root| root.join(relative))
    }

    /// Removes everything the test left under the root prefix and returns the
    /// removed top-level paths. Safe to call more than once.
    pub fn teardown(&self) -> Result<Vec<PathBuf>, FixtureError> {
        let Some(root) = &self.root_path else {
            return Ok(Vec::new());
        };

        let removed = match sweep_prefixed(root) {
            Ok(removed) => removed,
            Err(err) => {
                append_fixture_log(
                    self.log_path(),
                    "error",
                    "fixture.teardown",
                    &format!("{} cleanup failed: {err}", self.name),
                );
                return Err(err);
            }
        };
        for path in &removed {
            append_fixture_log(
                self.log_path(),
                "debug",
                "fixture.sweep.remove",
                &path.display().to_string(),
            );
        }
        append_fixture_log(
            self.log_path(),
            "info",
            "fixture.teardown",
            &format!("{} removed {} entries", self.name, removed.len()),
        );
        Ok(removed)
    }

    fn log_path(&self) -> Option<&Path> {
        self.log_path.as_deref()
    }
}

/// Reserves a unique name under `root` and leaves it absent on disk.
fn allocate_root_path(root: &Path, prefix: &str) -> Result<PathBuf, FixtureError> {
    let dir = tempfile::Builder::new()
        .prefix(prefix)
        .tempdir_in(root)
        .map_err(|source| FixtureError::Allocate {
            prefix: prefix.to_string(),
            root: root.display().to_string(),
            source,
        })?;
    let path = dir.keep();
    fs::remove_dir(&path).map_err(|source| FixtureError::ClearAllocated {
        path: path.display().to_string(),
        source,
    })?;
    Ok(path)
}
