//! Aircraft profiles.
//!
//! A profile carries only what the environment layer needs: an identifier for
//! the flight model, an identifier for the remote 3-D viewer's model, a short
//! display name and the nominal cruise speed.

const KTS_TO_M_PER_S: f64 = 0.51444;
const KTS_TO_FT_PER_S: f64 = 1.6878;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aircraft {
    pub fdm_id: &'static str,
    pub remote_model_id: &'static str,
    pub name: &'static str,
    pub cruise_speed_kts: f64,
    /// Whether the remote 3-D viewer ships a usable model for this airframe.
    pub remote_visual_supported: bool,
}

impl Aircraft {
    #[must_use]
    pub const fn new(
        fdm_id: &'static str,
        remote_model_id: &'static str,
        name: &'static str,
        cruise_speed_kts: f64,
    ) -> Self {
        Self {
            fdm_id,
            remote_model_id,
            name,
            cruise_speed_kts,
            remote_visual_supported: true,
        }
    }

    #[must_use]
    pub const fn without_remote_visual(mut self) -> Self {
        self.remote_visual_supported = false;
        self
    }

    /// Estimates the maximum distance this aircraft can travel in an episode,
    /// with a 10 % margin on top of cruise speed.
    #[must_use]
    pub fn max_distance_m(&self, episode_time_s: f64) -> f64 {
        let margin = 0.1;
        self.cruise_speed_kts * KTS_TO_M_PER_S * episode_time_s * (1.0 + margin)
    }

    #[must_use]
    pub fn cruise_speed_fps(&self) -> f64 {
        self.cruise_speed_kts * KTS_TO_FT_PER_S
    }

    /// Looks a built-in profile up by its display name, case-insensitively.
    #[must_use]
    pub fn by_name(name: &str) -> Option<&'static Aircraft> {
        ALL.iter().find(|a| a.name.eq_ignore_ascii_case(name))
    }
}

pub const C172: Aircraft = Aircraft::new("c172p", "c172p", "C172", 120.0);
pub const PA28: Aircraft = Aircraft::new("pa28", "PA28-161-180", "PA28", 130.0);
pub const J3: Aircraft = Aircraft::new("J3Cub", "J3Cub", "J3", 70.0);
pub const F15: Aircraft = Aircraft::new("f15", "f15c", "F15", 500.0);
pub const F16: Aircraft = Aircraft::new("f16", "f16-block-52", "F16", 550.0);
pub const OV10: Aircraft = Aircraft::new("OV10", "OV10_USAFE", "OV10", 200.0);
pub const PC7: Aircraft = Aircraft::new("pc7", "pc7", "PC7", 170.0);
pub const A320: Aircraft =
    Aircraft::new("A320", "A320-200-CFM", "A320", 250.0).without_remote_visual();
pub const B747: Aircraft = Aircraft::new("B747", "747-400", "B747", 250.0).without_remote_visual();
pub const MD11: Aircraft = Aircraft::new("MD11", "MD-11", "MD11", 250.0).without_remote_visual();
pub const DHC6: Aircraft = Aircraft::new("DHC6", "dhc6jsb", "DHC6", 170.0);

pub const ALL: &[Aircraft] = &[C172, PA28, J3, F15, F16, OV10, PC7, A320, B747, MD11, DHC6];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_distance_includes_margin() {
        let expected = 120.0 * KTS_TO_M_PER_S * 60.0 * 1.1;
        assert!((C172.max_distance_m(60.0) - expected).abs() < 1e-9);
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(Aircraft::by_name("pa28"), Some(&PA28));
        assert!(Aircraft::by_name("concorde").is_none());
    }
}
