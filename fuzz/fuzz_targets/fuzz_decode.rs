#![no_main]

use libfuzzer_sys::fuzz_target;

use fibdev_core::constants::BASE;
use fibdev_core::FixedBigNumber;

fuzz_target!(|data: &[u8]| {
    let Some(value) = <FixedBigNumber>::decode(data) else {
        return;
    };
    assert!(value.limbs().iter().all(|&l| l < BASE));

    let mut buf = [0u8; 64];
    let written = value.encode_into(&mut buf).expect("buffer holds one value");
    assert_eq!(<FixedBigNumber>::decode(&buf[..written]), Some(value));
});
