use std::ops::{Add, AddAssign, Mul, Sub};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Normalised control-surface and throttle values.
///
/// Surfaces are in `[-1, 1]`, throttle in `[0, 1]`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Controls {
    pub aileron: f64,
    pub elevator: f64,
    pub rudder: f64,
    pub throttle: f64,
}

/// Full state of the point-mass aircraft.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct AircraftState {
    /// North, east and altitude above sea level, all in feet.
    pub position: Vec3,
    /// Roll, pitch and heading in radians. Heading is kept in `[0, 2π)`.
    pub attitude: Vec3,
    /// Body rates p, q, r in radians per second.
    pub rates: Vec3,
    pub airspeed_fps: f64,
    pub climb_rate_fps: f64,
    pub commands: Controls,
    pub positions: Controls,
    pub sim_time_s: f64,
}

impl AircraftState {
    /// Straight and level flight at `altitude_ft` and `airspeed_fps`, heading north.
    #[must_use]
    pub fn level(altitude_ft: f64, airspeed_fps: f64) -> Self {
        let throttle = Controls {
            throttle: 0.8,
            ..Controls::default()
        };
        Self {
            position: Vec3::new(0.0, 0.0, altitude_ft),
            airspeed_fps,
            commands: throttle,
            positions: throttle,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.attitude.is_finite()
            && self.rates.is_finite()
            && self.airspeed_fps.is_finite()
            && self.climb_rate_fps.is_finite()
    }
}

/// Wire representation of the aircraft state sent to a remote 3-D viewer.
///
/// Twelve little-endian `f32`s, 48 bytes, no header.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RemoteFrame {
    pub sim_time_s: f32,
    pub north_ft: f32,
    pub east_ft: f32,
    pub altitude_ft: f32,
    pub roll_rad: f32,
    pub pitch_rad: f32,
    pub heading_rad: f32,
    pub airspeed_fps: f32,
    pub aileron: f32,
    pub elevator: f32,
    pub rudder: f32,
    pub throttle: f32,
}

impl RemoteFrame {
    pub const SIZE: usize = std::mem::size_of::<Self>();
}

#[allow(clippy::cast_possible_truncation)]
impl From<&AircraftState> for RemoteFrame {
    fn from(state: &AircraftState) -> Self {
        Self {
            sim_time_s: state.sim_time_s as f32,
            north_ft: state.position.x as f32,
            east_ft: state.position.y as f32,
            altitude_ft: state.position.z as f32,
            roll_rad: state.attitude.x as f32,
            pitch_rad: state.attitude.y as f32,
            heading_rad: state.attitude.z as f32,
            airspeed_fps: state.airspeed_fps as f32,
            aileron: state.positions.aileron as f32,
            elevator: state.positions.elevator as f32,
            rudder: state.positions.rudder as f32,
            throttle: state.positions.throttle as f32,
        }
    }
}
