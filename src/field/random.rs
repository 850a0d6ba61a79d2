use rand::{Rng as _, SeedableRng as _, rngs::StdRng};

/// Source of independent dot states.
///
/// Every randomized cell, whether drawn for a fresh field or for the refill step of a
/// disparity shift, is pulled from one of these. Production code uses [`DotRng`]; tests can
/// plug in fixed patterns.
pub trait DotSource {
    /// Draw the next dot (`true` = dot present).
    fn next_dot(&mut self) -> bool;
}

impl<S: DotSource + ?Sized> DotSource for &mut S {
    fn next_dot(&mut self) -> bool {
        (**self).next_dot()
    }
}

/// Uniform Bernoulli(0.5) dot generator backed by a seedable PRNG.
#[derive(Clone, Debug)]
pub struct DotRng {
    inner: StdRng,
}

impl DotRng {
    /// Deterministic stream for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Stream seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_os_rng(),
        }
    }

    /// [`DotRng::seeded`] when a seed is given, otherwise [`DotRng::from_entropy`].
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl DotSource for DotRng {
    fn next_dot(&mut self) -> bool {
        self.inner.random::<bool>()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/random.rs"]
mod tests;
