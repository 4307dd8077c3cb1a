//! 32-bit linear congruential generator.
//!
//! Same recurrence and seeding as the browser generator the layouts were first
//! tuned with, so integer seeds reproduce those layouts point for point:
//! `state ← state · 0x19660D + 0x3C6EF35F (mod 2³²)`, seeded with `|seed| mod 2³²`.

use rand::{Error, RngCore, SeedableRng};

const MUL: u32 = 0x0019_660D;
const INC: u32 = 0x3C6E_F35F;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg32 {
    state: u32,
}

impl Lcg32 {
    /// Seed from a signed integer; the sign is dropped and the magnitude wraps to 32 bits.
    pub fn from_seed_i64(seed: i64) -> Self {
        Self {
            state: seed.unsigned_abs() as u32,
        }
    }
}

impl RngCore for Lcg32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MUL).wrapping_add(INC);
        self.state
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.next_u32());
        let hi = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let word = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Lcg32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            state: u32::from_le_bytes(seed),
        }
    }

    fn seed_from_u64(state: u64) -> Self {
        Self {
            state: state as u32,
        }
    }
}
