use proptest::prelude::*;

use india_gdp_engine::{
    analysis::{cagr, compound, entity_gdp},
    models::{Dataset, Entity},
};

/// Strictly increasing anchor years in the timeline with increasing values.
fn increasing_anchors() -> impl Strategy<Value = Vec<(i32, f64)>> {
    (
        prop::collection::btree_set(2010i32..=2047, 2..8),
        0.1f64..500.0,
        prop::collection::vec(0.01f64..200.0, 8),
    )
        .prop_map(|(years, start, steps)| {
            let mut value = start;
            years
                .into_iter()
                .zip(steps)
                .map(|(y, step)| {
                    value += step;
                    (y, value)
                })
                .collect()
        })
}

proptest! {
    #[test]
    fn cagr_compound_round_trip(start in 0.1f64..1e4, end in 0.1f64..1e4, years in 1u32..40) {
        let rate = cagr(start, end, years as f64);
        let back = compound(start, rate, years as f64);
        prop_assert!(((back - end) / end).abs() < 1e-9);
    }

    #[test]
    fn anchors_are_reproduced_exactly(anchors in increasing_anchors()) {
        let data = Dataset::builtin().unwrap();
        let e = Entity::new("PT", "Prop", 1.0, anchors.clone()).unwrap();
        for (y, v) in anchors {
            prop_assert_eq!(entity_gdp(data.national(), &e, y as f64), v);
        }
    }

    #[test]
    fn increasing_anchors_give_monotonic_series_from_2020(anchors in increasing_anchors()) {
        let data = Dataset::builtin().unwrap();
        let e = Entity::new("PT", "Prop", 1.0, anchors).unwrap();
        let mut prev = entity_gdp(data.national(), &e, 2020.0);
        for year in 2021..=2047 {
            let now = entity_gdp(data.national(), &e, year as f64);
            prop_assert!(now >= prev * (1.0 - 1e-12), "dip at {}: {} < {}", year, now, prev);
            prev = now;
        }
    }

    #[test]
    fn interpolation_is_idempotent(anchors in increasing_anchors(), year in 2000.0f64..2060.0) {
        let data = Dataset::builtin().unwrap();
        let e = Entity::new("PT", "Prop", 1.0, anchors).unwrap();
        let a = entity_gdp(data.national(), &e, year);
        let b = entity_gdp(data.national(), &e, year);
        prop_assert_eq!(a.to_bits(), b.to_bits());
        prop_assert!(a.is_finite() && a > 0.0);
    }

    #[test]
    fn national_gdp_stays_between_neighbours(year in 2010.0f64..2047.0) {
        let data = Dataset::builtin().unwrap();
        let n = data.national();
        let lo = n.gdp_at(year.floor() as i32).unwrap();
        let hi = n.gdp_at(year.ceil() as i32).unwrap();
        let v = n.gdp(year);
        prop_assert!(v >= lo.min(hi) - 1e-9 && v <= lo.max(hi) + 1e-9);
    }
}
