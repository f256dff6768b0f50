use physics::{
    aircraft, prp, FlightDynamics, FlightSim, FlightSimFactory, InitialConditions, PhysicsError,
    SimConfig, SimulationFactory,
};

fn config(seed: Option<u64>) -> SimConfig {
    SimConfig {
        frequency_hz: 60,
        aircraft: aircraft::C172,
        initial_conditions: InitialConditions::new()
            .with(&prp::ALTITUDE_SL_FT, 3000.0)
            .with(&prp::HEADING_DEG, 90.0),
        seed,
        allow_remote_output: false,
    }
}

#[test]
fn initial_conditions_are_applied() {
    let sim = FlightSim::new(&config(Some(1))).unwrap();
    assert_eq!(sim.get(&prp::ALTITUDE_SL_FT).unwrap(), 3000.0);
    assert!((sim.get(&prp::HEADING_DEG).unwrap() - 90.0).abs() < 1e-9);
    assert_eq!(sim.get(&prp::SIM_TIME_S).unwrap(), 0.0);
    assert!((sim.get(&prp::U_FPS).unwrap() - aircraft::C172.cruise_speed_fps()).abs() < 1e-9);
}

#[test]
fn one_step_advances_time_by_one_tick() {
    let mut sim = FlightSim::new(&config(Some(1))).unwrap();
    sim.run_one_step().unwrap();
    assert!((sim.sim_time_s() - 1.0 / 60.0).abs() < 1e-12);
    assert_eq!(sim.steps(), 1);
}

#[test]
fn zero_frequency_is_rejected() {
    let mut cfg = config(None);
    cfg.frequency_hz = 0;
    assert!(matches!(FlightSim::new(&cfg), Err(PhysicsError::InvalidFrequency)));
}

#[test]
fn unknown_initial_condition_is_rejected() {
    let mut cfg = config(None);
    let bogus = physics::Property::new("ic/not-a-thing", "", 0.0, 1.0);
    cfg.initial_conditions.insert(&bogus, 1.0);
    assert!(matches!(FlightSim::new(&cfg), Err(PhysicsError::UnknownProperty(_))));
}

#[test]
fn read_only_properties_cannot_be_set() {
    let mut sim = FlightSim::new(&config(None)).unwrap();
    assert!(matches!(
        sim.set(&prp::SIM_TIME_S, 10.0),
        Err(PhysicsError::ReadOnlyProperty(_))
    ));
}

#[test]
fn same_seed_gives_same_trajectory() {
    let shared = config(Some(42));
    let mut a = FlightSim::new(&shared).unwrap();
    let mut b = FlightSim::new(&shared).unwrap();
    for _ in 0..120 {
        a.run_one_step().unwrap();
        b.run_one_step().unwrap();
    }
    assert_eq!(a.state(), b.state());
}

#[test]
fn reinitialise_restores_fresh_state() {
    let mut sim = FlightSim::new(&config(Some(3))).unwrap();
    sim.set(&prp::AILERON_CMD, 0.5).unwrap();
    for _ in 0..60 {
        sim.run_one_step().unwrap();
    }
    let ic = InitialConditions::new().with(&prp::ALTITUDE_SL_FT, 1000.0);
    sim.reinitialise(&ic, Some(3)).unwrap();
    assert_eq!(sim.steps(), 0);
    assert_eq!(sim.get(&prp::ALTITUDE_SL_FT).unwrap(), 1000.0);
    assert_eq!(sim.get(&prp::AILERON_CMD).unwrap(), 0.0);
    assert_eq!(sim.get(&prp::SIM_TIME_S).unwrap(), 0.0);
}

#[test]
fn closed_simulation_refuses_to_step() {
    let mut sim = FlightSimFactory.create(config(None)).unwrap();
    sim.close();
    assert!(matches!(sim.run_one_step(), Err(PhysicsError::Closed)));
}

#[test]
fn commands_are_clamped() {
    let mut sim = FlightSim::new(&config(None)).unwrap();
    sim.set(&prp::ELEVATOR_CMD, -4.0).unwrap();
    sim.set(&prp::THROTTLE_CMD, -1.0).unwrap();
    assert_eq!(sim.get(&prp::ELEVATOR_CMD).unwrap(), -1.0);
    assert_eq!(sim.get(&prp::THROTTLE_CMD).unwrap(), 0.0);
}
