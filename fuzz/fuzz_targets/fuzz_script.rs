#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(script) = std::str::from_utf8(data) else {
        return;
    };
    // Should not panic; unknown characters are rejected as a whole
    let _ = schedcalc_core::run_script(script);
});
