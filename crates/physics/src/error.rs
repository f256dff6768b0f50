use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhysicsError {
    #[error("integration frequency must be at least 1 Hz")]
    InvalidFrequency,
    #[error("unknown property `{0}`")]
    UnknownProperty(String),
    #[error("property `{0}` is read-only")]
    ReadOnlyProperty(&'static str),
    #[error("aircraft state diverged at t = {sim_time_s:.3} s")]
    Diverged { sim_time_s: f64 },
    #[error("remote output is disabled for this simulation")]
    RemoteOutputDisabled,
    #[error("remote output has not been configured")]
    RemoteOutputNotConfigured,
    #[error("simulation has been closed")]
    Closed,
    #[error("remote output i/o failed")]
    Io(#[from] std::io::Error),
}
