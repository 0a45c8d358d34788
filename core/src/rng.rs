use crate::constants::{
    LCG_INCREMENT, LCG_MULTIPLIER, LCG_OUTPUT_MASK, LCG_OUTPUT_RANGE, LCG_OUTPUT_SHIFT,
    SEED_MASK, SEED_MODULUS,
};

/// Fold an arbitrary `f64` seed into the 31-bit generator domain.
///
/// Uses the Euclidean remainder, so negative seeds land in `[0, 2^31)` as
/// well (`-1.0` folds to `2^31 - 1`). Fractional parts are dropped. NaN and
/// infinities fold to 0.
pub fn fold_seed(seed: f64) -> u32 {
    let mut folded = seed % SEED_MODULUS;
    if folded < 0.0 {
        folded += SEED_MODULUS;
        // tiny negatives round up to exactly 2^31; their floor is 2^31 - 1
        if folded >= SEED_MODULUS {
            return SEED_MASK;
        }
    }
    // `as` saturates (NaN -> 0) and truncates toward zero, which is floor for
    // the non-negative values left here.
    folded as u32
}

/// Linear congruential generator with 15-bit output.
/// 32-bit wrapping arithmetic only, so every host computes the same sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct LcgRng {
    state: u32,
}

impl LcgRng {
    /// Create a generator with a raw state. Zero is a valid state.
    pub fn new(state: u32) -> Self {
        LcgRng { state }
    }

    /// Create a generator from a floating-point seed
    pub fn from_seed(seed: f64) -> Self {
        Self::new(fold_seed(seed))
    }

    /// Overwrite the state from a floating-point seed
    pub fn reseed(&mut self, seed: f64) {
        self.state = fold_seed(seed);
    }

    /// Get current state
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance once and return a draw in [0, 32767]
    pub fn next(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        (self.state >> LCG_OUTPUT_SHIFT) & LCG_OUTPUT_MASK
    }

    /// Advance once and return a draw normalized to [0, 1)
    pub fn next_unit(&mut self) -> f64 {
        f64::from(self.next()) / LCG_OUTPUT_RANGE
    }
}
