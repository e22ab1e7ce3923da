//! Random number generators.

/// A purely functional source of random `i32`s.
///
/// Drawing never mutates the generator: it returns the value together with
/// the generator to draw from next. Drawing twice from the same generator
/// gives the same value.
pub trait Rng: Clone + 'static {
    /// Draws one `i32` and returns it with the next generator.
    #[must_use]
    fn next_int(&self) -> (i32, Self);
}

/// Constants of a 48-bit linear congruential generator.
///
/// Each step computes `(seed * multiplier + increment) & mask` with wrapping
/// 64-bit arithmetic. The [`Default`] constants are the ones used by
/// `java.util.Random` and `drand48`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LcgParameters {
    /// Multiplier applied to the seed.
    pub multiplier: i64,
    /// Increment added after multiplying.
    pub increment: i64,
    /// Mask applied to the result; also applied to the initial seed.
    pub mask: i64,
}

impl LcgParameters {
    /// The standard 48-bit constants.
    pub const STANDARD: Self = Self {
        multiplier: 0x5_DEEC_E66D,
        increment: 0xB,
        mask: 0xFFFF_FFFF_FFFF,
    };

    const fn step(&self, seed: i64) -> i64 {
        seed.wrapping_mul(self.multiplier)
            .wrapping_add(self.increment)
            & self.mask
    }
}

impl Default for LcgParameters {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// A seeded linear congruential generator.
///
/// # Examples
///
/// ```rust
/// use lazystate::random::{Rng, SimpleRng};
///
/// let rng = SimpleRng::new(42);
/// let (value, next) = rng.next_int();
/// assert_eq!(value, 16_159_453);
/// assert_eq!(next.seed(), 1_059_025_964_525);
///
/// // The generator is a value: drawing again from `rng` repeats the draw.
/// assert_eq!(rng.next_int().0, value);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleRng {
    seed: i64,
    parameters: LcgParameters,
}

impl SimpleRng {
    /// Creates a generator with the standard constants. Only the low 48 bits
    /// of `seed` are kept.
    #[must_use]
    pub const fn new(seed: i64) -> Self {
        Self::with_parameters(seed, LcgParameters::STANDARD)
    }

    /// Creates a generator with custom constants. The seed is masked with
    /// `parameters.mask`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazystate::random::{LcgParameters, Rng, SimpleRng};
    ///
    /// let parameters = LcgParameters { multiplier: 1, increment: 1 << 16, ..LcgParameters::default() };
    /// let rng = SimpleRng::with_parameters(0, parameters);
    /// assert_eq!(rng.next_int().0, 1);
    /// ```
    #[must_use]
    pub const fn with_parameters(seed: i64, parameters: LcgParameters) -> Self {
        Self {
            seed: seed & parameters.mask,
            parameters,
        }
    }

    /// The current seed.
    #[must_use]
    pub const fn seed(&self) -> i64 {
        self.seed
    }

    /// The constants this generator steps with.
    #[must_use]
    pub const fn parameters(&self) -> LcgParameters {
        self.parameters
    }
}

impl Rng for SimpleRng {
    #[allow(clippy::cast_possible_truncation)]
    fn next_int(&self) -> (i32, Self) {
        let new_seed = self.parameters.step(self.seed);
        let next = Self::with_parameters(new_seed, self.parameters);
        ((new_seed >> 16) as i32, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_masks_seed_to_48_bits() {
        assert_eq!(SimpleRng::new(-1).seed(), 0xFFFF_FFFF_FFFF);
        assert_eq!(SimpleRng::new(1 << 48).seed(), 0);
    }

    #[rstest]
    fn seed_42_draws() {
        let (first, rng) = SimpleRng::new(42).next_int();
        let (second, rng) = rng.next_int();
        assert_eq!(first, 16_159_453);
        assert_eq!(second, -1_281_479_697);
        assert_eq!(rng.seed(), 197_491_923_327_988);
    }

    #[rstest]
    fn draws_do_not_mutate_generator() {
        let rng = SimpleRng::new(7);
        assert_eq!(rng.next_int(), rng.next_int());
        assert_eq!(rng.seed(), 7);
    }

    #[rstest]
    fn default_parameters_are_standard() {
        assert_eq!(LcgParameters::default(), LcgParameters::STANDARD);
        assert_eq!(SimpleRng::new(3).parameters(), LcgParameters::STANDARD);
    }
}
