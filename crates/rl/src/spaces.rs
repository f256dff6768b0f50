/// Continuous box space with per-dimension bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxSpace {
    low: Vec<f32>,
    high: Vec<f32>,
    shape: Vec<usize>,
}

impl BoxSpace {
    /// # Panics
    ///
    /// Panics if `low` and `high` differ in length.
    #[must_use]
    pub fn new(low: Vec<f32>, high: Vec<f32>) -> Self {
        assert_eq!(low.len(), high.len(), "low and high bounds must have equal length");
        let shape = vec![low.len()];
        Self { low, high, shape }
    }

    /// Builds a space from per-dimension `(min, max)` pairs.
    #[must_use]
    pub fn from_bounds(bounds: impl IntoIterator<Item = (f32, f32)>) -> Self {
        let (low, high) = bounds.into_iter().unzip();
        Self::new(low, high)
    }

    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.low.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.low.is_empty()
    }

    #[must_use]
    pub fn low(&self) -> &[f32] {
        &self.low
    }

    #[must_use]
    pub fn high(&self) -> &[f32] {
        &self.high
    }

    #[must_use]
    pub fn contains(&self, x: &[f32]) -> bool {
        x.len() == self.len()
            && x.iter()
                .zip(self.low.iter().zip(&self.high))
                .all(|(v, (lo, hi))| (lo..=hi).contains(&v))
    }

    /// Uniform sample. Unbounded dimensions are sampled from `[-1, 1]`.
    #[must_use]
    pub fn sample(&self, rng: &mut fastrand::Rng) -> Vec<f32> {
        self.low
            .iter()
            .zip(&self.high)
            .map(|(&lo, &hi)| {
                if lo.is_finite() && hi.is_finite() {
                    lo + rng.f32() * (hi - lo)
                } else {
                    rng.f32() * 2.0 - 1.0
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_inside_bounds() {
        let space = BoxSpace::new(vec![-1.0, 0.0], vec![1.0, 0.5]);
        let mut rng = fastrand::Rng::with_seed(9);
        for _ in 0..100 {
            assert!(space.contains(&space.sample(&mut rng)));
        }
    }

    #[test]
    fn shape_is_one_dimensional() {
        let space = BoxSpace::from_bounds([(-1.0, 1.0); 3]);
        assert_eq!(space.shape(), &[3]);
    }
}
