use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::NationalSeries;

/// Seconds in an average (Julian) year.
pub const SECONDS_PER_YEAR: f64 = 365.25 * 86_400.0;

/// Running estimate of national GDP within a calendar year.
///
/// GDP accrues linearly from the previous year's value toward the current
/// year's value as the year elapses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GdpClock {
    pub year: i32,
    /// Whether `year` lies inside the timeline. Outside it, the clock is static.
    pub is_live: bool,
    /// Table GDP for the (clamped) year, billions USD
    pub gdp: f64,
    pub previous_gdp: Option<f64>,
    /// Fraction of the calendar year elapsed, 0..=1
    pub elapsed_fraction: f64,
    /// Live estimate, billions USD
    pub live_gdp: f64,
    /// Increment per second, billions USD
    pub per_second: f64,
    /// Increment per day, USD. `None` without a prior year.
    pub per_day_usd: Option<f64>,
}

impl GdpClock {
    /// Clock reading for the calendar year containing `instant`.
    pub fn at(national: &NationalSeries, instant: DateTime<Utc>) -> Self {
        Self::for_year(national, instant.year(), year_fraction(instant))
    }

    /// Clock reading for `year` with `elapsed_fraction` of it gone.
    pub fn for_year(national: &NationalSeries, year: i32, elapsed_fraction: f64) -> Self {
        let elapsed_fraction = elapsed_fraction.clamp(0.0, 1.0);
        let in_timeline = year >= national.min_year() && year <= national.max_year();

        if !in_timeline {
            let gdp = national.gdp(year as f64);
            return GdpClock {
                year,
                is_live: false,
                gdp,
                previous_gdp: None,
                elapsed_fraction,
                live_gdp: gdp,
                per_second: 0.0,
                per_day_usd: None,
            };
        }

        let gdp = national.gdp(year as f64);
        let previous_gdp = national.gdp_at(year - 1);
        let (live_gdp, per_second, per_day_usd) = match previous_gdp {
            Some(prev) => {
                let increment = gdp - prev;
                (
                    prev + increment * elapsed_fraction,
                    increment / SECONDS_PER_YEAR,
                    Some(increment / 365.25 * 1e9),
                )
            }
            None => (gdp, 0.0, None),
        };

        GdpClock {
            year,
            is_live: true,
            gdp,
            previous_gdp,
            elapsed_fraction,
            live_gdp,
            per_second,
            per_day_usd,
        }
    }

    /// Estimate `seconds` after this reading.
    pub fn tick(&self, seconds: f64) -> f64 {
        self.live_gdp + self.per_second * seconds
    }

    /// Live estimate in whole US dollars.
    pub fn live_dollars(&self) -> f64 {
        (self.live_gdp * 1e9).floor()
    }

    /// Live estimate in billions of rupees.
    pub fn live_gdp_inr(&self, rate: f64) -> f64 {
        self.live_gdp * rate
    }

    /// Daily increment in rupees.
    pub fn per_day_inr(&self, rate: f64) -> Option<f64> {
        self.per_day_usd.map(|usd| usd * rate)
    }
}

fn year_start(year: i32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, 1, 1)?
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
}

/// Fraction of `instant`'s calendar year that has elapsed.
pub fn year_fraction(instant: DateTime<Utc>) -> f64 {
    let year = instant.year();
    match (year_start(year), year_start(year + 1)) {
        (Some(start), Some(end)) => {
            let total = (end - start).num_milliseconds() as f64;
            let done = (instant - start).num_milliseconds() as f64;
            (done / total).clamp(0.0, 1.0)
        }
        _ => 0.0,
    }
}
