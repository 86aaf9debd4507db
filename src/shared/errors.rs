use crate::config::ConfigError;

/// Lifecycle phase an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixturePhase {
    Setup,
    Teardown,
}

impl FixturePhase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Teardown => "teardown",
        }
    }
}

impl std::fmt::Display for FixturePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("invalid fixture name `{name}`: {reason}")]
    InvalidName { name: String, reason: String },
    #[error("invalid fixture settings: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to allocate temp directory with prefix {prefix} under {root}: {source}")]
    Allocate {
        prefix: String,
        root: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to clear freshly allocated directory {path}: {source}")]
    ClearAllocated {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("root path {path} has no parent directory")]
    RootWithoutParent { path: String },
    #[error("failed to list directory {path}: {source}")]
    ListParent {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to remove {path}: {source}")]
    Remove {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FixtureError {
    pub fn phase(&self) -> FixturePhase {
        match self {
            Self::InvalidName { .. }
            | Self::Config(_)
            | Self::Allocate { .. }
            | Self::ClearAllocated { .. } => FixturePhase::Setup,
            Self::RootWithoutParent { .. } | Self::ListParent { .. } | Self::Remove { .. } => {
                FixturePhase::Teardown
            }
        }
    }
}
