//!
//! Seeded random source shared by every random draw of a render.
//!

use rand::{Error as RandError, Rng, RngCore, SeedableRng};
use rand_pcg::Pcg64;

/// Random source of a single render.
///
/// The seed is chosen lazily on first access and the generator is built lazily from it, so
/// `set_seed` only has an effect if it is called before the first random draw.
#[derive(Debug, Clone, Default)]
pub struct MosaicRng {
    seed: Option<u64>,
    rng: Option<Pcg64>,
}

impl MosaicRng {
    pub fn new() -> Self {
        MosaicRng::default()
    }

    pub fn with_seed(seed: u64) -> Self {
        MosaicRng {
            seed: Some(seed),
            rng: None,
        }
    }

    pub fn set_seed(&mut self, seed: u64) {
        if self.rng.is_some() {
            log::warn!("seed set to {} after the first random draw, ignoring it", seed);
        }
        self.seed = Some(seed);
    }

    pub fn seed(&mut self) -> u64 {
        *self
            .seed
            .get_or_insert_with(|| rand::thread_rng().gen_range(0..=i64::MAX as u64))
    }

    fn rng(&mut self) -> &mut Pcg64 {
        let seed = self.seed();
        self.rng.get_or_insert_with(|| {
            log::debug!("seeding random generator with {}", seed);
            Pcg64::seed_from_u64(seed)
        })
    }
}

impl RngCore for MosaicRng {
    fn next_u32(&mut self) -> u32 {
        self.rng().next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng().next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng().fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        self.rng().try_fill_bytes(dest)
    }
}
