use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};

/// Where per-request randomness comes from.
///
/// `Seeded` makes every response reproducible (same seed, same payload).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RngSource {
    Entropy,
    Seeded(u64),
}

impl RngSource {
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(Self::Entropy, Self::Seeded)
    }

    pub fn rng(&self) -> StdRng {
        match self {
            Self::Entropy => StdRng::from_os_rng(),
            Self::Seeded(seed) => StdRng::seed_from_u64(*seed),
        }
    }
}

/// Sample from N(0, std_dev).
///
/// A negative or non-finite `std_dev` yields no noise.
pub fn gaussian<R: Rng + ?Sized>(rng: &mut R, std_dev: f64) -> f64 {
    Normal::new(0.0, std_dev)
        .map(|normal| normal.sample(rng))
        .unwrap_or(0.0)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
