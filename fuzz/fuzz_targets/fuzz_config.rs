#![no_main]

use libfuzzer_sys::fuzz_target;

use india_gdp_engine::EngineConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = EngineConfig::from_toml_str(s);
    }
});
