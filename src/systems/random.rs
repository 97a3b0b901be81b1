//! Random sources for the update rules
//!
//! The engine owns exactly one source, handed to it at construction, so a
//! given seed replays the same simulation.

/// Xorshift32 step
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// True with probability 1/n. `n <= 1` is always true.
    #[inline]
    fn one_in(&mut self, n: u32) -> bool {
        if n <= 1 {
            return true;
        }
        self.next_u32() % n == 0
    }

    /// Fair coin
    #[inline]
    fn coin(&mut self) -> bool {
        self.next_u32() & 1 == 0
    }
}

/// Default generator
#[derive(Clone, Debug)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    pub fn new(seed: u32) -> Self {
        // Zero is a fixed point of xorshift
        let state = if seed == 0 { 0x9E37_79B9 } else { seed };
        Self { state }
    }
}

impl RandomSource for Xorshift32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        xorshift32(&mut self.state)
    }
}

/// Replays a fixed list of values in a loop. Used to pin down random
/// branches in tests and tooling.
#[derive(Clone, Debug)]
pub struct SequenceRandom {
    values: Vec<u32>,
    pos: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<u32>) -> Self {
        let values = if values.is_empty() { vec![0] } else { values };
        Self { values, pos: 0 }
    }

    /// Every `one_in` and `coin` call comes out true
    pub fn always() -> Self {
        Self::new(vec![0])
    }

    /// Every `one_in(n)` with n > 1 and every `coin` comes out false
    pub fn never() -> Self {
        // Odd and not a multiple of any small odds used by the rules
        Self::new(vec![1])
    }
}

impl RandomSource for SequenceRandom {
    fn next_u32(&mut self) -> u32 {
        let v = self.values[self.pos % self.values.len()];
        self.pos = self.pos.wrapping_add(1);
        v
    }
}
