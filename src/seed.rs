use crate::{BitGrid, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Initial pattern of a freshly built engine.
///
/// Deserializes from `{"pattern": "fixed"}` or
/// `{"pattern": "random", "density": 0.3, "seed": 42}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "pattern", rename_all = "lowercase")]
pub enum Seed {
    /// Every cell dead.
    Blank,
    /// Cell `i` is alive iff `i % 2 == 0 || i % 7 == 0`.
    #[default]
    Fixed,
    /// Every cell alive with probability `density`.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    Random {
        density: f64,
        #[serde(default)]
        seed: Option<u64>,
    },
}

impl Seed {
    pub fn random(density: f64, seed: Option<u64>) -> Self {
        Self::Random { density, seed }
    }

    pub fn from_json(data: &str) -> Result<Self> {
        let seed: Self = serde_json::from_str(data)?;
        seed.validate()?;
        Ok(seed)
    }

    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Random { density, .. } if !(0.0..=1.0).contains(&density) => {
                Err(Error::InvalidDensity(density))
            }
            _ => Ok(()),
        }
    }

    pub(crate) fn apply(&self, grid: &mut BitGrid) -> Result<()> {
        self.validate()?;
        debug!(seed = ?self, grid.width = grid.width(), grid.height = grid.height(), "seeding field");
        match *self {
            Self::Blank => grid.clear(),
            Self::Fixed => grid.fill_with(|i| i % 2 == 0 || i % 7 == 0),
            Self::Random { density, seed } => {
                use rand::{Rng, SeedableRng};

                let mut rng = if let Some(x) = seed {
                    rand_chacha::ChaCha8Rng::seed_from_u64(x)
                } else {
                    rand_chacha::ChaCha8Rng::from_entropy()
                };
                grid.fill_with(|_| rng.gen_bool(density));
            }
        }
        Ok(())
    }
}
