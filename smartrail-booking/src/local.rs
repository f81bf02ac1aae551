//! Local ticket flows: platform entry and season passes, priced and issued
//! entirely without the external parsing service.
//!
//! Base rates are drawn once per quote instance, so two bookings with
//! identical inputs can legitimately price differently. That fabricated
//! pricing behavior is intentional and preserved.

use rand::Rng;
use smartrail_core::booking::Booking;

/// Quote for a platform-entry ticket. Flat rate of 10 or 20, drawn uniformly
/// when the quote is created, times headcount.
#[derive(Debug, Clone, Copy)]
pub struct PlatformQuote {
    base_rate: f64,
}

impl PlatformQuote {
    pub fn sample() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            base_rate: if rng.gen_bool(0.5) { 10.0 } else { 20.0 },
        }
    }

    pub fn base_rate(&self) -> f64 {
        self.base_rate
    }

    pub fn price(&self, people_count: u32) -> f64 {
        self.base_rate * f64::from(people_count.max(1))
    }

    pub fn confirm(
        &self,
        station_name: String,
        platform_number: String,
        people_count: u32,
    ) -> Booking {
        let people_count = people_count.max(1);
        let price = self.price(people_count);
        Booking::platform(station_name, platform_number, people_count, price)
    }
}

/// Quote for a season pass. Per-day rate drawn uniformly from {4, 5, 6} when
/// the quote is created, times duration in days, times headcount. Duration is
/// floored at 7 days.
#[derive(Debug, Clone, Copy)]
pub struct SeasonQuote {
    daily_rate: f64,
}

impl SeasonQuote {
    pub fn sample() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            daily_rate: f64::from(rng.gen_range(4..=6)),
        }
    }

    pub fn daily_rate(&self) -> f64 {
        self.daily_rate
    }

    pub fn price(&self, duration_days: i64, people_count: u32) -> f64 {
        self.daily_rate * duration_days.max(7) as f64 * f64::from(people_count.max(1))
    }

    pub fn confirm(
        &self,
        from_station: String,
        to_station: String,
        people_count: u32,
        duration_days: i64,
    ) -> Booking {
        let people_count = people_count.max(1);
        let duration_days = duration_days.max(7);
        let price = self.price(duration_days, people_count);
        Booking::season(from_station, to_station, people_count, duration_days, price)
    }
}
