#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and resolving must report errors, never panic
        if let Ok(raw) = toml::from_str::<cutover::RawConfig>(content) {
            if let Ok(config) = raw.resolve() {
                let _ = config.current_parent();
                let _ = config.release_path("fuzz");
            }
        }
    }
});
