use super::{ConfigError, FixtureSettings};
use std::path::Path;

pub fn load_settings(path: &Path) -> Result<FixtureSettings, ConfigError> {
    let settings = FixtureSettings::from_path(path)?;
    settings.validate()?;
    Ok(settings)
}
