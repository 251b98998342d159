// SPDX-License-Identifier: CC0-1.0

//! Useful comparison functions.

/// Compares two slices for equality in fixed time.
///
/// Works by XOR'ing each byte pair together and OR'ing the results into an
/// accumulator. The accumulator is spilled to memory with volatile writes and
/// re-read with volatile reads so the compiler cannot turn the loop into an
/// early-exit comparison.
///
/// # Panics
///
/// Panics if the slices have different lengths.
pub fn fixed_time_eq(a: &[u8], b: &[u8]) -> bool {
    assert!(a.len() == b.len());
    let count = a.len();
    let lhs = &a[..count];
    let rhs = &b[..count];

    let mut r: u8 = 0;
    for i in 0..count {
        let mut rs = unsafe { core::ptr::read_volatile(&r) };
        rs |= lhs[i] ^ rhs[i];
        unsafe {
            core::ptr::write_volatile(&mut r, rs);
        }
    }

    // Fold any set bit down into the lowest position.
    for shift in [4, 2, 1] {
        let mut t = unsafe { core::ptr::read_volatile(&r) };
        t |= t >> shift;
        unsafe {
            core::ptr::write_volatile(&mut r, t);
        }
    }

    unsafe { (core::ptr::read_volatile(&r) & 1) == 0 }
}
