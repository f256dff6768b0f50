mod common;

use common::stub_env;
use rl::{Env, EnvConfig, LegacyEnv};

#[test]
fn legacy_step_folds_termination_into_done() {
    let (env, _) = stub_env(EnvConfig::default(), 2);
    let mut legacy = LegacyEnv::new(env);
    let obs = legacy.reset(Some(0)).unwrap();
    assert_eq!(obs, vec![0.0]);

    let (_, reward, done, info) = legacy.step(&[0.0, 0.0]).unwrap();
    assert_eq!(reward, 1.0);
    assert!(!done);
    assert_eq!(info["steps"], 1);

    let (_, _, done, _) = legacy.step(&[0.0, 0.0]).unwrap();
    assert!(done);
    legacy.close();
}

#[test]
fn legacy_wrapper_exposes_inner_sizes() {
    let (env, _) = stub_env(EnvConfig::default(), 2);
    let legacy = LegacyEnv::new(env);
    assert_eq!(legacy.inner().obs_size(), 1);
    assert_eq!(legacy.inner().action_size(), 2);
    let env = legacy.into_inner();
    assert_eq!(env.steps_per_agent_step(), 12);
}
