#![no_main]

use libfuzzer_sys::fuzz_target;

use fibdev_core::calculator::Calculator;
use fibdev_core::fastdoubling::FastDoubling;
use fibdev_core::iterative::Iterative;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // Iteration is linear in n, so keep it bounded.
    let n = u64::from(u32::from_le_bytes([data[0], data[1], data[2], data[3]])) % 50_000;

    let fast = FastDoubling::new().compute(n);
    let slow = Iterative::new().compute(n);
    assert_eq!(fast, slow, "FastDoubling != Iterative at n={n}");

    // F(n) + F(n+1) wraps the same way F(n+2) does.
    let next = FastDoubling::new().compute(n + 1);
    assert_eq!(fast + next, FastDoubling::new().compute(n + 2), "recurrence at n={n}");
});
