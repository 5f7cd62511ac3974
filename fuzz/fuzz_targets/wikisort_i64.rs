#![no_main]

use libfuzzer_sys::fuzz_target;

use wikisort_fuzz::{assert_sorted_permutation, bytes_as_i64};

fuzz_target!(|data: &[u8]| {
    let original = bytes_as_i64(data);

    let mut v = original.clone();
    wikisort::sort(&mut v).unwrap();

    assert_sorted_permutation(&original, &v);
});
