//! Random sources for the initial spin velocity.
//!
//! The session only ever asks for a unit float, so tests can script exact
//! draws and replays can use the seeded xorshift32 generator.

/// Uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Xorshift32. Seed 0 is remapped, the generator would otherwise stay at 0.
#[derive(Clone, Copy, Debug)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0xDEAD_BEEF } else { seed },
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    pub fn next(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        self.state
    }
}

impl RandomSource for SeededRng {
    fn next_unit(&mut self) -> f64 {
        f64::from(self.next()) / 4_294_967_296.0
    }
}

/// Thread-local OS-seeded generator for interactive use.
#[cfg(feature = "entropy")]
#[derive(Debug, Default)]
pub struct EntropySource;

#[cfg(feature = "entropy")]
impl RandomSource for EntropySource {
    fn next_unit(&mut self) -> f64 {
        use rand::Rng;
        rand::thread_rng().gen::<f64>()
    }
}
