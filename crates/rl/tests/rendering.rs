mod common;

use common::{stub_env, Counters};
use physics::aircraft;
use rl::{Advisory, EnvConfig, EnvError, RenderMode, Variant};

fn config(mode: Option<RenderMode>, variant: Variant) -> EnvConfig {
    EnvConfig {
        render_mode: mode,
        variant,
        ..EnvConfig::default()
    }
}

#[test]
fn human_mode_draws_once_per_step() {
    let (mut env, _) = stub_env(config(Some(RenderMode::Human), Variant::Standard), 100);
    env.reset(None, None).unwrap();
    for _ in 0..3 {
        env.step(&[0.0, 0.0]).unwrap();
    }
    let figure = env.dispatcher().figure().unwrap();
    assert_eq!(figure.frames_drawn(), 3);
    assert!(env.dispatcher().graph().is_none());
    assert!(env.dispatcher().flightgear().is_none());
}

#[test]
fn remote_mode_is_not_drawn_by_step() {
    let (mut env, counters) =
        stub_env(config(Some(RenderMode::FlightGear), Variant::Standard), 100);
    env.reset(None, None).unwrap();
    env.step(&[0.0, 0.0]).unwrap();
    assert!(env.dispatcher().flightgear().is_none());
    env.render().unwrap();
    assert_eq!(env.dispatcher().flightgear().unwrap().frames_sent(), 1);
    assert_eq!(Counters::get(&counters.remote_frames), 1);
}

#[test]
fn no_remote_variant_refuses_remote_mode_on_first_render() {
    let (mut env, counters) =
        stub_env(config(Some(RenderMode::FlightGear), Variant::NoRemoteVisual), 100);
    assert!(env.advisories().contains(&Advisory::ModeNotAdvertised {
        mode: RenderMode::FlightGear,
        variant: Variant::NoRemoteVisual,
    }));
    env.reset(None, None).unwrap();
    let err = env.render().unwrap_err();
    assert!(matches!(
        err,
        EnvError::UnsupportedRenderMode {
            mode: RenderMode::FlightGear,
            variant: Variant::NoRemoteVisual,
        }
    ));
    assert!(env.dispatcher().flightgear().is_none());
    assert_eq!(Counters::get(&counters.remote_configured), 0);
}

#[test]
fn no_remote_variant_fails_step_synchronous_combined_mode_before_drawing() {
    let (mut env, counters) =
        stub_env(config(Some(RenderMode::GraphFlightGear), Variant::NoRemoteVisual), 100);
    env.reset(None, None).unwrap();
    assert!(matches!(env.step(&[0.0, 0.0]), Err(EnvError::UnsupportedRenderMode { .. })));
    assert!(env.dispatcher().graph().is_none());
    assert_eq!(Counters::get(&counters.integrator_steps), 0);
}

#[test]
fn no_remote_variant_refuses_remote_mode_even_without_remote_model() {
    for mode in [RenderMode::FlightGear, RenderMode::GraphFlightGear] {
        let mut cfg = config(Some(mode), Variant::NoRemoteVisual);
        cfg.aircraft = aircraft::A320;
        let (mut env, counters) = stub_env(cfg, 100);
        env.reset(None, None).unwrap();
        assert_eq!(env.render_mode(), Some(mode));
        assert!(matches!(
            env.render(),
            Err(EnvError::UnsupportedRenderMode { variant: Variant::NoRemoteVisual, .. })
        ));
        assert!(env.dispatcher().figure().is_none());
        assert!(env.dispatcher().graph().is_none());
        assert_eq!(Counters::get(&counters.remote_configured), 0);
    }
}

#[test]
fn aircraft_without_remote_model_is_downgraded_on_reset() {
    let mut cfg = config(Some(RenderMode::GraphFlightGear), Variant::Standard);
    cfg.aircraft = aircraft::A320;
    let (mut env, counters) = stub_env(cfg, 100);
    env.reset(None, None).unwrap();

    assert_eq!(env.render_mode(), Some(RenderMode::Graph));
    assert_eq!(
        env.advisories(),
        &[Advisory::RenderModeDowngraded {
            aircraft: "A320",
            requested: RenderMode::GraphFlightGear,
            effective: RenderMode::Graph,
        }]
    );
    env.step(&[0.0, 0.0]).unwrap();
    env.render().unwrap();
    assert_eq!(env.dispatcher().graph().unwrap().frames_drawn(), 2);
    assert!(env.dispatcher().flightgear().is_none());
    assert_eq!(Counters::get(&counters.remote_configured), 0);
}

#[test]
fn remote_mode_on_standard_variant_warns_but_works() {
    let (mut env, counters) =
        stub_env(config(Some(RenderMode::GraphFlightGear), Variant::Standard), 100);
    env.reset(None, None).unwrap();
    assert_eq!(
        env.advisories(),
        &[Advisory::PreferNoRemoteVariant { mode: RenderMode::GraphFlightGear }]
    );
    env.step(&[0.0, 0.0]).unwrap();
    env.step(&[0.0, 0.0]).unwrap();
    assert_eq!(env.dispatcher().graph().unwrap().frames_drawn(), 2);
    assert_eq!(Counters::get(&counters.remote_frames), 2);
}

#[test]
fn remote_viewer_is_kept_and_repointed_across_resets() {
    let (mut env, counters) =
        stub_env(config(Some(RenderMode::FlightGear), Variant::Standard), 100);
    env.reset(None, None).unwrap();
    env.render().unwrap();
    assert_eq!(Counters::get(&counters.remote_configured), 1);

    env.reset(None, None).unwrap();
    assert_eq!(Counters::get(&counters.remote_configured), 2);
    env.render().unwrap();
    assert_eq!(env.dispatcher().flightgear().unwrap().frames_sent(), 2);
}

#[test]
fn render_without_mode_draws_nothing() {
    let (mut env, _) = stub_env(config(None, Variant::Standard), 100);
    env.render().unwrap();
    env.reset(None, None).unwrap();
    env.render().unwrap();
    assert!(env.dispatcher().figure().is_none());
    assert!(env.dispatcher().graph().is_none());
}

#[test]
fn render_with_mode_before_reset_is_refused() {
    let (mut env, _) = stub_env(config(Some(RenderMode::Human), Variant::Standard), 100);
    assert!(matches!(env.render(), Err(EnvError::NotReset)));
}

#[test]
fn close_releases_visualisers() {
    let (mut env, _) = stub_env(config(Some(RenderMode::Human), Variant::Standard), 100);
    env.reset(None, None).unwrap();
    env.render().unwrap();
    assert!(env.dispatcher().figure().is_some());
    env.close();
    assert!(env.dispatcher().figure().is_none());
    env.close();
}

#[test]
fn metadata_lists_modes_per_variant() {
    let (env, _) = stub_env(config(None, Variant::NoRemoteVisual), 10);
    let metadata = env.metadata();
    assert_eq!(metadata.render_fps, 30);
    assert_eq!(metadata.render_modes, &[RenderMode::Human, RenderMode::Graph]);
}
