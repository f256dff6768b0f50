use crate::error::EnvError;

/// Auxiliary per-step information. Opaque to the environment; tasks fill it.
pub type Info = serde_json::Map<String, serde_json::Value>;

/// Result of one agent step.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub observation: Vec<f32>,
    pub reward: f32,
    pub terminated: bool,
    pub truncated: bool,
    pub info: Info,
}

impl Step {
    #[must_use]
    pub fn new(
        observation: Vec<f32>,
        reward: f32,
        terminated: bool,
        truncated: bool,
        info: Info,
    ) -> Self {
        Self { observation, reward, terminated, truncated, info }
    }

    #[must_use]
    pub fn done(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// Reinforcement learning environment trait.
///
/// Inspired by classic frameworks like OpenAI Gym, this trait defines the core
/// interface an environment must provide. Each call to [`step`] advances the
/// simulation by one action and returns a [`Step`] with the new observation,
/// the reward, the termination and truncation flags and auxiliary info.
///
/// [`step`]: Env::step
pub trait Env {
    /// Advance the environment by one action.
    ///
    /// # Errors
    ///
    /// Fails when the environment has not been reset, the episode has ended,
    /// the action has the wrong shape, or the simulation fails.
    fn step(&mut self, action: &[f32]) -> Result<Step, EnvError>;

    /// Reset the environment to a fresh episode and return the initial
    /// observation with auxiliary info.
    ///
    /// # Errors
    ///
    /// Propagates failures to build the simulation or observe its first state.
    fn reset(
        &mut self,
        seed: Option<u64>,
        options: Option<&Info>,
    ) -> Result<(Vec<f32>, Info), EnvError>;

    /// # Errors
    ///
    /// Fails when the configured render mode is unsupported or drawing fails.
    fn render(&mut self) -> Result<(), EnvError>;

    fn close(&mut self);

    /// Size of the observation vector.
    fn obs_size(&self) -> usize;

    /// Size of the action vector.
    fn action_size(&self) -> usize;
}

/// Four-tuple view of a [`Step`]: `(observation, reward, done, info)`.
pub type LegacyStep = (Vec<f32>, f32, bool, Info);

/// Adapter exposing the older step/reset shapes on top of any [`Env`].
pub struct LegacyEnv<E> {
    inner: E,
}

impl<E: Env> LegacyEnv<E> {
    pub fn new(inner: E) -> Self {
        Self { inner }
    }

    /// # Errors
    ///
    /// Same as [`Env::step`].
    pub fn step(&mut self, action: &[f32]) -> Result<LegacyStep, EnvError> {
        let step = self.inner.step(action)?;
        let done = step.done();
        Ok((step.observation, step.reward, done, step.info))
    }

    /// # Errors
    ///
    /// Same as [`Env::reset`].
    pub fn reset(&mut self, seed: Option<u64>) -> Result<Vec<f32>, EnvError> {
        self.inner.reset(seed, None).map(|(obs, _)| obs)
    }

    /// # Errors
    ///
    /// Same as [`Env::render`].
    pub fn render(&mut self) -> Result<(), EnvError> {
        self.inner.render()
    }

    pub fn close(&mut self) {
        self.inner.close();
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    pub fn into_inner(self) -> E {
        self.inner
    }
}
