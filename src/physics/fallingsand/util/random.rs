//! Randomness used by the simulation.
//! The grid owns one of these and nothing else in the engine reaches for a global generator,
//! so a seeded or scripted source makes a whole run reproducible.

use rand::Rng;

/// A uniform random source
pub trait RandomSource {
    /// A fair coin flip, `true` picks the left hand option
    fn coin_flip(&mut self) -> bool;
    /// A uniformly distributed offset in `[-variation, variation]`
    fn offset(&mut self, variation: u8) -> i16;
}

impl<R: Rng> RandomSource for R {
    fn coin_flip(&mut self) -> bool {
        self.gen_bool(0.5)
    }

    fn offset(&mut self, variation: u8) -> i16 {
        let variation = i16::from(variation);
        self.gen_range(-variation..=variation)
    }
}

/// A random source that replays a fixed script, for forcing specific branches in tests
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct ScriptedSource {
    flips: std::collections::VecDeque<bool>,
    offsets: std::collections::VecDeque<i16>,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn with_flips(flips: impl IntoIterator<Item = bool>) -> Self {
        Self {
            flips: flips.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn with_offsets(offsets: impl IntoIterator<Item = i16>) -> Self {
        Self {
            offsets: offsets.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn flips_remaining(&self) -> usize {
        self.flips.len()
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    /// Panics when the script runs out, so a test fails loudly if a flip it did not expect is drawn
    fn coin_flip(&mut self) -> bool {
        self.flips.pop_front().expect("coin flip was not scripted")
    }

    /// Unscripted offsets are zero
    fn offset(&mut self, variation: u8) -> i16 {
        let variation = i16::from(variation);
        self.offsets
            .pop_front()
            .unwrap_or(0)
            .clamp(-variation, variation)
    }
}
