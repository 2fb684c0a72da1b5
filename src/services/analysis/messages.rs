//! Advisory Messages
//!
//! Non-fatal conditions the session reports as text lines on the output
//! surface instead of failing.

use std::fmt;

/// An advisory line written during a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// A platform marked invalid still has a selected version.
    InvalidPlatformSelected { platform: String },
    /// No target was selected; the engine will use its defaults.
    UsingDefaultTargets,
    /// Follows `UsingDefaultTargets` with a hint on how to pick targets.
    TargetSelectionGuidance,
    /// An issue relayed from the diagnostics log.
    Issue(String),
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::InvalidPlatformSelected { platform } => write!(
                f,
                "The platform '{}' is not a valid target and will be ignored by the analysis.",
                platform
            ),
            Advisory::UsingDefaultTargets => write!(
                f,
                "No target platforms were selected. The default targets will be used."
            ),
            Advisory::TargetSelectionGuidance => write!(
                f,
                "To analyze against specific platforms, select them in the analysis options."
            ),
            Advisory::Issue(issue) => write!(f, "  - {}", issue),
        }
    }
}
