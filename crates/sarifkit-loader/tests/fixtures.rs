//! Every fixture under tests/fixtures loads, or fails with the kind its name claims.

use sarifkit_loader::load_path;
use sarifkit_test_util::{expected_kind, list_fixtures, prune_nulls};

#[test]
fn valid_fixtures_load_and_reserialize_without_nulls() {
    let fixtures = list_fixtures("valid");
    assert!(!fixtures.is_empty());

    for path in fixtures {
        let log = load_path(&path).unwrap_or_else(|err| panic!("{path}: {err}"));
        let mut value = serde_json::to_value(&log).expect("serialize");
        let before = value.clone();
        prune_nulls(&mut value);
        assert_eq!(value, before, "{path} re-serialized with null members");
    }
}

#[test]
fn invalid_fixtures_fail_with_named_kind() {
    let fixtures = list_fixtures("invalid");
    assert!(!fixtures.is_empty());

    for path in fixtures {
        let want = expected_kind(&path).unwrap_or_else(|| panic!("{path}: no kind prefix"));
        let err = match load_path(&path) {
            Ok(_) => panic!("{path}: unexpectedly loaded"),
            Err(err) => err,
        };
        assert_eq!(err.kind(), want, "{path}: {err}");
    }
}
