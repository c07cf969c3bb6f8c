use rand::{seq::IteratorRandom, SeedableRng};
use rand_xorshift::XorShiftRng;

/// Seeded source of uniform choices, so a game can be replayed from its seed.
#[derive(Clone)]
pub struct PolicyRng {
    rng: XorShiftRng,
}

impl PolicyRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let rng = SeedableRng::seed_from_u64(seed);
        Self { rng }
    }

    pub fn select_random<T, Iter>(&mut self, elts: Iter) -> Option<(usize, T)>
    where
        Iter: Iterator<Item = T>,
    {
        elts.enumerate().choose(&mut self.rng)
    }
}

impl Default for PolicyRng {
    fn default() -> Self {
        Self::new(1337)
    }
}
