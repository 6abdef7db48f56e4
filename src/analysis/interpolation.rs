use serde::{Deserialize, Serialize};

use crate::models::{Entity, NationalSeries};

/// Which rule produced an entity's GDP for a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectionMode {
    /// At or before the first anchor: constant share of national GDP.
    NationalShare,
    /// Between two anchors: compound growth at the pair's CAGR.
    Interpolated,
    /// At or after the last anchor: the last pair's CAGR continued forward.
    Extrapolated,
}

impl std::fmt::Display for ProjectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectionMode::NationalShare => write!(f, "National share"),
            ProjectionMode::Interpolated => write!(f, "Interpolated"),
            ProjectionMode::Extrapolated => write!(f, "Extrapolated"),
        }
    }
}

/// Compound annual growth rate that turns `start` into `end` over `years`.
///
/// ```
/// use india_gdp_engine::analysis::cagr;
///
/// let rate = cagr(100.0, 121.0, 2.0);
/// assert!((rate - 0.10).abs() < 1e-12);
/// ```
pub fn cagr(start: f64, end: f64, years: f64) -> f64 {
    (end / start).powf(1.0 / years) - 1.0
}

/// Grow `value` at `rate` per year for `years` (fractional years allowed).
pub fn compound(value: f64, rate: f64, years: f64) -> f64 {
    value * (1.0 + rate).powf(years)
}

enum Segment {
    BeforeFirst,
    Between(usize),
    AfterLast,
}

/// Find the anchor pair that governs `year`.
///
/// An exact anchor year always resolves to the segment that starts at that
/// anchor, so the compounding exponent is zero and the anchor is reproduced.
fn locate(anchors: &[(i32, f64)], year: f64) -> Segment {
    let first = anchors[0].0 as f64;
    let last = anchors[anchors.len() - 1].0 as f64;
    if year <= first {
        return Segment::BeforeFirst;
    }
    if year >= last {
        return Segment::AfterLast;
    }
    let idx = anchors.partition_point(|(y, _)| (*y as f64) <= year);
    Segment::Between(idx.saturating_sub(1))
}

/// Which rule applies to `entity` at `year`.
pub fn projection_mode(entity: &Entity, year: f64) -> ProjectionMode {
    match locate(entity.anchors(), year) {
        Segment::BeforeFirst => ProjectionMode::NationalShare,
        Segment::Between(_) => ProjectionMode::Interpolated,
        Segment::AfterLast => ProjectionMode::Extrapolated,
    }
}

/// Projected GDP of `entity` in billions USD for any real-valued year.
///
/// Passes exactly through every anchor, follows piecewise CAGR between
/// anchors, continues the last pair's CAGR after the final anchor, and
/// holds the first anchor's national share before it.
pub fn entity_gdp(national: &NationalSeries, entity: &Entity, year: f64) -> f64 {
    if year.is_nan() {
        return f64::NAN;
    }
    let anchors = entity.anchors();

    match locate(anchors, year) {
        Segment::BeforeFirst => {
            let (y0, v0) = anchors[0];
            let base = national.gdp(y0 as f64);
            v0 * (national.gdp(year) / base)
        }
        Segment::AfterLast => {
            let (y_prev, v_prev) = anchors[anchors.len() - 2];
            let (y_last, v_last) = anchors[anchors.len() - 1];
            let rate = cagr(v_prev, v_last, (y_last - y_prev) as f64);
            compound(v_last, rate, year - y_last as f64)
        }
        Segment::Between(i) => {
            let (y0, v0) = anchors[i];
            let (y1, v1) = anchors[i + 1];
            let rate = cagr(v0, v1, (y1 - y0) as f64);
            compound(v0, rate, year - y0 as f64)
        }
    }
}
