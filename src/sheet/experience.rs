use std::time::{Duration, Instant};

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use rand::rngs::SmallRng;

pub const BIRTH_YEAR: i32 = 1986;
pub const BIRTH_MONTH: u32 = 6;
pub const BIRTH_DAY: u32 = 27;

/// Largest single experience pulse. Gains are quadratically weighted so
/// small numbers dominate.
pub const MAX_GAIN: u32 = 5043;

const GAIN_DELAY_BASE_MS: u64 = 3000;
const GAIN_DELAY_JITTER_MS: u64 = 2000;
const GAIN_FADE: Duration = Duration::from_millis(1500);

/// Progress through the current year of life: 0.0 on the birthday, just
/// under 1.0 the day before the next one.
pub fn year_progress(today: NaiveDate) -> f64 {
    let year = today.year();
    let birthday_this_year =
        NaiveDate::from_ymd_opt(year, BIRTH_MONTH, BIRTH_DAY).unwrap_or(today);

    let last_birthday = if today < birthday_this_year {
        NaiveDate::from_ymd_opt(year - 1, BIRTH_MONTH, BIRTH_DAY).unwrap_or(today)
    } else {
        birthday_this_year
    };
    let next_birthday = NaiveDate::from_ymd_opt(last_birthday.year() + 1, BIRTH_MONTH, BIRTH_DAY)
        .unwrap_or(today);

    let elapsed = (today - last_birthday).num_days() as f64;
    let year_length = (next_birthday - last_birthday).num_days() as f64;
    if year_length <= 0.0 {
        return 0.0;
    }
    (elapsed / year_length).clamp(0.0, 1.0)
}

pub fn current_age(today: NaiveDate) -> i32 {
    let mut age = today.year() - BIRTH_YEAR;
    if (today.month(), today.day()) < (BIRTH_MONTH, BIRTH_DAY) {
        age -= 1;
    }
    age
}

/// Random experience gain in 1..=MAX_GAIN, squared so smaller numbers are
/// more common.
pub fn random_gain(rng: &mut SmallRng) -> u32 {
    let r: f64 = rng.gen_range(0.0..1.0);
    (r * r * MAX_GAIN as f64) as u32 + 1
}

#[derive(Clone, Copy, Debug)]
pub struct GainPulse {
    pub value: u32,
    shown_at: Instant,
}

/// Animated experience-bar state: year progress plus the periodic `+N`
/// pulse. Driven from the app tick.
pub struct ExperienceState {
    pub progress: f64,
    gain: Option<GainPulse>,
    next_gain_at: Instant,
}

impl ExperienceState {
    pub fn new(now: Instant, today: NaiveDate, rng: &mut SmallRng) -> Self {
        Self {
            progress: year_progress(today),
            gain: None,
            next_gain_at: now + next_gain_delay(rng),
        }
    }

    pub fn tick(&mut self, now: Instant, today: NaiveDate, rng: &mut SmallRng) {
        if now >= self.next_gain_at {
            self.progress = year_progress(today);
            self.gain = Some(GainPulse {
                value: random_gain(rng),
                shown_at: now,
            });
            self.next_gain_at = now + next_gain_delay(rng);
        } else if let Some(gain) = self.gain {
            if now.duration_since(gain.shown_at) >= GAIN_FADE {
                self.gain = None;
            }
        }
    }

    pub fn gain_value(&self) -> Option<u32> {
        self.gain.map(|g| g.value)
    }
}

fn next_gain_delay(rng: &mut SmallRng) -> Duration {
    Duration::from_millis(GAIN_DELAY_BASE_MS + rng.gen_range(0..GAIN_DELAY_JITTER_MS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn progress_is_zero_on_birthday() {
        assert_eq!(year_progress(date(2026, 6, 27)), 0.0);
    }

    #[test]
    fn progress_is_half_about_six_months_in() {
        let progress = year_progress(date(2026, 12, 27));
        assert!((progress - 0.5).abs() < 0.01, "got {progress}");
    }

    #[test]
    fn progress_stays_in_unit_interval_across_a_year() {
        let mut day = date(2025, 6, 27);
        let end = date(2026, 6, 27);
        while day < end {
            let p = year_progress(day);
            assert!((0.0..=1.0).contains(&p), "{day}: {p}");
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn age_increments_on_birthday() {
        assert_eq!(current_age(date(2026, 6, 26)), 39);
        assert_eq!(current_age(date(2026, 6, 27)), 40);
        assert_eq!(current_age(date(2026, 12, 31)), 40);
        assert_eq!(current_age(date(2027, 1, 1)), 40);
    }

    #[test]
    fn gain_is_within_bounds() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1000 {
            let gain = random_gain(&mut rng);
            assert!((1..=MAX_GAIN).contains(&gain), "gain {gain}");
        }
    }

    #[test]
    fn gain_skews_small() {
        // Quadratic weighting: well over half of the draws land in the
        // bottom half of the range.
        let mut rng = SmallRng::seed_from_u64(42);
        let draws = 2000;
        let small = (0..draws)
            .filter(|_| random_gain(&mut rng) <= MAX_GAIN / 2)
            .count();
        assert!(small > draws * 6 / 10, "only {small}/{draws} small gains");
    }

    #[test]
    fn pulse_fires_and_fades() {
        let mut rng = SmallRng::seed_from_u64(1);
        let now = Instant::now();
        let today = date(2026, 8, 6);
        let mut state = ExperienceState::new(now, today, &mut rng);
        assert!(state.gain_value().is_none());

        // Past the maximum scheduling delay the pulse must have fired
        let later = now + Duration::from_millis(GAIN_DELAY_BASE_MS + GAIN_DELAY_JITTER_MS);
        state.tick(later, today, &mut rng);
        let value = state.gain_value().expect("pulse fired");
        assert!((1..=MAX_GAIN).contains(&value));

        // And it fades after the display window
        state.tick(later + GAIN_FADE, today, &mut rng);
        assert!(state.gain_value().is_none());
    }
}
