#![no_main]
use combrank::Spec;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<u8>, u8)| {
    let (raw, radix_raw) = data;
    if raw.len() > 256 {
        return;
    }

    // Word: any byte string is a member of the spec inferred from it.
    let word: Vec<usize> = raw.iter().map(|&b| (b % 8) as usize).collect();
    let spec = Spec::word_from_array(&word).unwrap();
    let rank = spec.rank(&word).unwrap();
    assert!(&rank < spec.cardinality());
    assert_eq!(spec.unrank(&rank).unwrap(), word);

    // Radix over the same bytes.
    let radix = radix_raw as usize + 1;
    let digits: Vec<usize> = raw.iter().map(|&b| b as usize % radix).collect();
    let spec = Spec::radix_from_array(&digits, radix).unwrap();
    let rank = spec.rank(&digits).unwrap();
    assert_eq!(spec.unrank(&rank).unwrap(), digits);

    // Combination from the low bit of each byte.
    let bits: Vec<usize> = raw.iter().map(|&b| (b & 1) as usize).collect();
    let spec = Spec::combination_from_array(&bits).unwrap();
    let rank = spec.rank(&bits).unwrap();
    assert_eq!(spec.unrank(&rank).unwrap(), bits);

    // Permutation: rank an arbitrary object only if it is a member.
    let perm: Vec<usize> = raw.iter().map(|&b| b as usize).collect();
    let spec = Spec::permutation(perm.len());
    match spec.rank(&perm) {
        Ok(rank) => {
            assert!(spec.contains(&perm));
            assert_eq!(spec.unrank(&rank).unwrap(), perm);
        }
        Err(_) => assert!(!spec.contains(&perm)),
    }
});
