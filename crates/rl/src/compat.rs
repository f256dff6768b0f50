//! Known incompatibilities that are downgraded to warnings instead of errors.

use crate::render_mode::{RenderMode, Variant};
use physics::Aircraft;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advisory {
    /// The aircraft has no remote 3-D model, so the remote part of the mode was dropped.
    RenderModeDowngraded {
        aircraft: &'static str,
        requested: RenderMode,
        effective: RenderMode,
    },
    /// A remote render mode is active on the standard variant.
    PreferNoRemoteVariant { mode: RenderMode },
    /// The variant's metadata does not list the configured mode.
    ModeNotAdvertised { mode: RenderMode, variant: Variant },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RenderModeDowngraded { aircraft, requested, effective } => write!(
                f,
                "{aircraft} has no remote 3-D model; \
                 render mode `{requested}` downgraded to `{effective}`"
            ),
            Self::PreferNoRemoteVariant { mode } => write!(
                f,
                "render mode `{mode}` opens a remote output channel on every reset; \
                 use the no-remote-visual variant for training"
            ),
            Self::ModeNotAdvertised { mode, variant } => {
                write!(f, "render mode `{mode}` is not advertised by the {variant} variant")
            }
        }
    }
}

impl Advisory {
    pub fn log(&self) {
        tracing::warn!("{self}");
    }
}

/// Drops the remote part of `mode` when `aircraft` cannot be shown remotely.
#[must_use]
pub fn resolve_render_mode(
    aircraft: &Aircraft,
    mode: Option<RenderMode>,
) -> (Option<RenderMode>, Option<Advisory>) {
    match mode {
        Some(requested) if requested.uses_remote() && !aircraft.remote_visual_supported => {
            let effective = requested.without_remote();
            let advisory = Advisory::RenderModeDowngraded {
                aircraft: aircraft.name,
                requested,
                effective,
            };
            (Some(effective), Some(advisory))
        }
        other => (other, None),
    }
}

#[must_use]
pub fn training_advisory(variant: Variant, mode: Option<RenderMode>) -> Option<Advisory> {
    match mode {
        Some(mode) if mode.uses_remote() && variant.remote_enabled() => {
            Some(Advisory::PreferNoRemoteVariant { mode })
        }
        _ => None,
    }
}

#[must_use]
pub fn metadata_advisory(variant: Variant, mode: Option<RenderMode>) -> Option<Advisory> {
    match mode {
        Some(mode) if !variant.metadata().permits(mode) => {
            Some(Advisory::ModeNotAdvertised { mode, variant })
        }
        _ => None,
    }
}

/// Runs the reset-time checks in order and returns the effective mode with
/// every advisory raised. Advisories are also logged.
///
/// The aircraft downgrade only applies to variants with remote output; on the
/// other variant a remote mode is kept so that rendering rejects it.
#[must_use]
pub fn check_at_reset(
    aircraft: &Aircraft,
    variant: Variant,
    mode: Option<RenderMode>,
) -> (Option<RenderMode>, Vec<Advisory>) {
    let (effective, downgrade) = if variant.remote_enabled() {
        resolve_render_mode(aircraft, mode)
    } else {
        (mode, None)
    };
    let advisories: Vec<Advisory> = downgrade
        .into_iter()
        .chain(training_advisory(variant, effective))
        .collect();
    for advisory in &advisories {
        advisory.log();
    }
    (effective, advisories)
}
