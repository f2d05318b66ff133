#![no_main]

use libfuzzer_sys::fuzz_target;

use cutover::domain::ports::Identity;
use cutover::domain::services::format_deployer;
use cutover::RevisionData;

fuzz_target!(|data: &[u8]| {
    if let Ok(template) = std::str::from_utf8(data) {
        let revision = RevisionData::new("abc123", "2026-01-01T00:00:00Z", "d34db33f");
        let identity = Identity::new("alice").with_display_name("Alice");
        let _ = format_deployer(template, Some(&revision), &identity);
        let _ = format_deployer(template, None, &identity);
    }
});
