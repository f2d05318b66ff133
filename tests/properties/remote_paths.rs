//! Property tests for remote path arithmetic.

use proptest::prelude::*;

use cutover::domain::value_objects::remote_path::{join, normalize, relative};

fn absolute_path() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[a-z0-9_-]{1,8}").unwrap();
    proptest::collection::vec(segment, 0..=5).prop_map(|segments| format!("/{}", segments.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Following `relative(from, to)` from `from` arrives at `to`.
    #[test]
    fn property_relative_resolves_back(from in absolute_path(), to in absolute_path()) {
        let rel = relative(&from, &to);
        prop_assert_eq!(join(&from, &rel), normalize(&to));
    }

    /// PROPERTY: Relative link targets never start with `/`.
    #[test]
    fn property_relative_is_relative(from in absolute_path(), to in absolute_path()) {
        prop_assert!(!relative(&from, &to).starts_with('/'));
    }

    /// PROPERTY: `normalize` is idempotent.
    #[test]
    fn property_normalize_idempotent(path in "[a-z./]{0,30}") {
        let once = normalize(&path);
        prop_assert_eq!(normalize(&once), once);
    }
}
