// Proptest configuration shared by domain property tests.
//
// Env knobs:
// - PROPTEST_CASES: number of cases per property (default 64 here).

pub fn proptest_config() -> proptest::prelude::ProptestConfig {
    let base = proptest::prelude::ProptestConfig::default();

    let cases: u32 = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(64)
        .max(1);

    proptest::prelude::ProptestConfig {
        // Unit tests run from src/, keep regression files out of the tree
        failure_persistence: None,
        cases,
        ..base
    }
}
