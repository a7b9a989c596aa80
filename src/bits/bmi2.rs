//! BMI2 Morton primitives: parallel bit deposit/extract.

use std::arch::x86_64::{_pdep_u64, _pext_u64};

const EVEN: u64 = 0x5555_5555_5555_5555;
const ODD: u64 = 0xAAAA_AAAA_AAAA_AAAA;

/// Deposit source when the coordinate sits exactly on the upper bound of its
/// range: all 42 low bits set, of which `pdep` consumes the low 32.
const SATURATED: u64 = 0x3FF_FFFF_FFFF;

/// The fraction of `x` scaled by 2^32, for `x` in `[1, 2)`: shifting the bit
/// representation right by 20 leaves the top 32 mantissa bits in the low
/// word, where `pdep` picks them up.
#[inline]
fn fraction32(x: f64) -> u64 {
    x.to_bits() >> 20
}

/// Morton-encode a position; latitude at even bit levels, longitude at odd.
///
/// # Safety
///
/// Requires BMI2 support on the running CPU.
#[target_feature(enable = "bmi2")]
pub(crate) unsafe fn encode(lat: f64, lng: f64) -> u64 {
    let y = _pdep_u64(
        if lat == 90.0 {
            SATURATED
        } else {
            fraction32(1.5 + lat * (1.0 / 180.0))
        },
        EVEN,
    );
    let x = _pdep_u64(
        if lng == 180.0 {
            SATURATED
        } else {
            fraction32(1.5 + lng * (1.0 / 360.0))
        },
        EVEN,
    );
    (x << 1) | y
}

/// Split `x` into the 32-bit words stored at its even and odd bit levels.
///
/// # Safety
///
/// Requires BMI2 support on the running CPU.
#[target_feature(enable = "bmi2")]
pub(crate) unsafe fn deinterleave(x: u64) -> (u32, u32) {
    (_pext_u64(x, EVEN) as u32, _pext_u64(x, ODD) as u32)
}
