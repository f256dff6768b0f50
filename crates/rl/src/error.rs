use crate::render_mode::{RenderMode, Variant};
use physics::PhysicsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error(
        "mismatch between action and action space shape: \
         expected {expected:?}, got {actual:?}"
    )]
    ShapeMismatch { expected: Vec<usize>, actual: Vec<usize> },
    #[error("render mode `{mode}` is not supported by the {variant} variant")]
    UnsupportedRenderMode { mode: RenderMode, variant: Variant },
    #[error("environment must be reset before use")]
    NotReset,
    #[error("episode has terminated; call reset before stepping again")]
    EpisodeTerminated,
    #[error(transparent)]
    Physics(#[from] PhysicsError),
    #[error(transparent)]
    Render(anyhow::Error),
}
