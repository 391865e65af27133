//! Fuzzes vehicle parameter parsing and validation.
//!
//! Arbitrary text is parsed as YAML and JSON. Anything accepted must build
//! a control loop.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_vehicle_params
#![no_main]
use drivecore_config::VehicleParams;
use drivecore_engine::ControlLoop;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let parsed = [VehicleParams::from_yaml_str(text), VehicleParams::from_json_str(text)];
    for params in parsed.into_iter().flatten() {
        assert!(ControlLoop::new(params).is_ok());
    }
});
