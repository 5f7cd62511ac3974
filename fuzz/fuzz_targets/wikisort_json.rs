#![no_main]

use libfuzzer_sys::fuzz_target;
use serde_json::Value;

use wikisort::adapter::read_sequence;
use wikisort_fuzz::assert_sorted_permutation;

fuzz_target!(|data: &[u8]| {
    let Ok(mut value) = serde_json::from_slice::<Value>(data) else {
        return;
    };
    let original = value.clone();

    if wikisort::wikisort(&mut value).is_err() {
        // Rejected input must come back untouched.
        assert_eq!(value, original);
        return;
    }

    let sorted = read_sequence(&value).unwrap();
    let original = read_sequence(&original).unwrap();
    assert_sorted_permutation(&original, &sorted);
});
