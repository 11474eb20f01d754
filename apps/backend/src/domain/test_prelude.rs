// Shared proptest configuration for domain unit tests.
// Case count comes from PROPTEST_CASES (see backend-test-support).

pub fn proptest_config() -> proptest::prelude::ProptestConfig {
    backend_test_support::proptest_config::proptest_prelude_config()
}
