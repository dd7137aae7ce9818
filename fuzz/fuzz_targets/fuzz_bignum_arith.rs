#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use fibdev_core::constants::BASE;
use fibdev_core::FixedBigNumber;

fn limbs_from(bytes: &[u8]) -> [u64; 8] {
    let mut limbs = [0u64; 8];
    for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        *limb = u64::from_le_bytes(word) % BASE;
    }
    limbs
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 128 {
        return;
    }
    let a: FixedBigNumber = FixedBigNumber::from_limbs(limbs_from(&data[..64]));
    let b: FixedBigNumber = FixedBigNumber::from_limbs(limbs_from(&data[64..128]));
    let modulus = BigUint::from(10u32).pow(64);
    let (ba, bb) = (a.to_biguint(), b.to_biguint());

    assert_eq!((a + b).to_biguint(), (&ba + &bb) % &modulus, "add {a} {b}");
    assert_eq!((a * b).to_biguint(), (&ba * &bb) % &modulus, "mul {a} {b}");
    assert_eq!(
        (a - b).to_biguint(),
        (&ba + &modulus - &bb) % &modulus,
        "sub {a} {b}"
    );
    assert!((a * b).limbs().iter().all(|&l| l < BASE));
});
