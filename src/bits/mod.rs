//! Morton codec primitives with a CPU-dispatched fast path.
//!
//! Two equivalent implementations: a portable shift-mask chain and, on
//! `x86_64` CPUs with BMI2, a `pdep`/`pext` path. The choice is made once at
//! first use and is thereafter read-only; both paths produce bit-identical
//! results for coordinates in the closed lng/lat domain.

#[cfg(target_arch = "x86_64")]
mod bmi2;
mod portable;

use once_cell::sync::Lazy;

pub(crate) use portable::decode_range;

type Encoder = fn(f64, f64) -> u64;
type Deinterleaver = fn(u64) -> (u32, u32);

/// Encoder and deinterleaver selected for this CPU.
static DISPATCH: Lazy<(Encoder, Deinterleaver)> = Lazy::new(|| {
    #[cfg(target_arch = "x86_64")]
    if std::arch::is_x86_feature_detected!("bmi2") {
        return (encode_bmi2, deinterleave_bmi2);
    }
    (portable::encode, portable::deinterleave)
});

#[cfg(target_arch = "x86_64")]
fn encode_bmi2(lat: f64, lng: f64) -> u64 {
    // SAFETY: selected only after runtime detection of BMI2.
    unsafe { bmi2::encode(lat, lng) }
}

#[cfg(target_arch = "x86_64")]
fn deinterleave_bmi2(x: u64) -> (u32, u32) {
    // SAFETY: selected only after runtime detection of BMI2.
    unsafe { bmi2::deinterleave(x) }
}

/// Morton-encode a position; latitude at even bit levels, longitude at odd.
/// Coordinates must already be clamped to the closed domain.
#[inline]
pub(crate) fn encode_position(lat: f64, lng: f64) -> u64 {
    (DISPATCH.0)(lat, lng)
}

/// Split a full 64-bit code into the latitude (even bit levels) and
/// longitude (odd bit levels) words.
#[inline]
pub(crate) fn deinterleave(x: u64) -> (u32, u32) {
    (DISPATCH.1)(x)
}
