use criterion::{criterion_group, criterion_main, Criterion};
use rl::{EnvConfig, FlightEnv, RenderMode};

fn bench_agent_step(c: &mut Criterion) {
    let mut env = FlightEnv::new(EnvConfig::default()).unwrap();
    env.reset(Some(0), None).unwrap();
    let action = [0.05, -0.02, 0.0];
    c.bench_function("agent_step_5hz", |b| {
        b.iter(|| {
            if env.step(&action).unwrap().terminated {
                env.reset(None, None).unwrap();
            }
        })
    });
}

fn bench_agent_step_with_figure(c: &mut Criterion) {
    let config = EnvConfig {
        render_mode: Some(RenderMode::Human),
        ..EnvConfig::default()
    };
    let mut env = FlightEnv::new(config).unwrap();
    env.reset(Some(0), None).unwrap();
    let action = [0.05, -0.02, 0.0];
    c.bench_function("agent_step_5hz_human", |b| {
        b.iter(|| {
            if env.step(&action).unwrap().terminated {
                env.reset(None, None).unwrap();
            }
        })
    });
}

criterion_group!(benches, bench_agent_step, bench_agent_step_with_figure);
criterion_main!(benches);
