#![no_main]

use libfuzzer_sys::fuzz_target;

use india_gdp_engine::{analysis::entity_gdp, models::Entity, Dataset};

fuzz_target!(|input: (Vec<(i16, f32)>, f32)| {
    let (raw, year) = input;
    let anchors: Vec<(i32, f64)> = raw
        .into_iter()
        .take(64)
        .map(|(y, v)| (2000 + i32::from(y) % 100, f64::from(v)))
        .collect();

    // Malformed anchor sets must be rejected, never panic.
    let Ok(entity) = Entity::new("FZ", "Fuzz", 1.0, anchors) else {
        return;
    };
    let Ok(data) = Dataset::builtin() else {
        return;
    };
    let _ = entity_gdp(data.national(), &entity, f64::from(year));
});
