/// Reinterprets the fuzzer input as little-endian `i64`s, ignoring trailing bytes.
pub fn bytes_as_i64(data: &[u8]) -> Vec<i64> {
    data.chunks_exact(8)
        .map(|chunk| {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            i64::from_le_bytes(bytes)
        })
        .collect()
}

pub fn assert_sorted_permutation(original: &[i64], sorted: &[i64]) {
    let mut expected = original.to_vec();
    expected.sort();

    assert_eq!(expected, sorted);
}
