use std::time::{Duration, Instant};

use rand::Rng;
use rand::rngs::SmallRng;

pub const MAX_HP: u32 = 9999;
pub const MAX_MP: u32 = 680;
pub const BASE_HP: u32 = 7890;
pub const BASE_MP: u32 = 543;

const FLUX_MIN_PCT: f64 = 0.05;
const FLUX_MAX_PCT: f64 = 0.10;
const FLUX_DELAY_BASE_MS: u64 = 2500;
const FLUX_DELAY_JITTER_MS: u64 = 1500;

/// Move `current` by 5-10% of `base` in a random direction, clamped to
/// `[0, max]`.
pub fn fluctuate(current: u32, base: u32, max: u32, rng: &mut SmallRng) -> u32 {
    let pct = rng.gen_range(FLUX_MIN_PCT..FLUX_MAX_PCT);
    let step = (base as f64 * pct).round() as i64;
    let delta = if rng.gen_bool(0.5) { step } else { -step };
    (current as i64 + delta).clamp(0, max as i64) as u32
}

/// The fluctuating HP/MP gauges. Both move together on a shared 2.5-4s
/// timer, as a living-character effect.
pub struct Vitals {
    pub hp: u32,
    pub mp: u32,
    next_flux_at: Instant,
}

impl Vitals {
    pub fn new(now: Instant, rng: &mut SmallRng) -> Self {
        Self {
            hp: BASE_HP,
            mp: BASE_MP,
            next_flux_at: now + next_flux_delay(rng),
        }
    }

    pub fn tick(&mut self, now: Instant, rng: &mut SmallRng) {
        if now >= self.next_flux_at {
            self.hp = fluctuate(self.hp, BASE_HP, MAX_HP, rng);
            self.mp = fluctuate(self.mp, BASE_MP, MAX_MP, rng);
            self.next_flux_at = now + next_flux_delay(rng);
        }
    }
}

fn next_flux_delay(rng: &mut SmallRng) -> Duration {
    Duration::from_millis(FLUX_DELAY_BASE_MS + rng.gen_range(0..FLUX_DELAY_JITTER_MS))
}

/// 7890 -> "7,890", for the tabular HP/MP readout.
pub fn group_digits(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
