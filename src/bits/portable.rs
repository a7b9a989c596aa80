//! Portable Morton primitives: classical shift-mask chains.

/// 2^32.
pub(crate) const EXP2_32: f64 = 4294967296.0;
const INV_EXP2_32: f64 = 1.0 / EXP2_32;

/// Spread out the 32 bits of `x` into 64 bits so bit `i` of `x` lands at bit
/// `2i` of the result.
#[inline]
pub(crate) const fn spread(x: u32) -> u64 {
    let mut result = x as u64;
    result = (result | (result << 16)) & 0x0000_FFFF_0000_FFFF;
    result = (result | (result << 8)) & 0x00FF_00FF_00FF_00FF;
    result = (result | (result << 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    result = (result | (result << 2)) & 0x3333_3333_3333_3333;
    result = (result | (result << 1)) & 0x5555_5555_5555_5555;
    result
}

/// Squash the even bit levels of `x` into a 32-bit word. Odd bit levels are
/// ignored and may take any value.
#[inline]
pub(crate) const fn squash(x: u64) -> u32 {
    let mut x = x & 0x5555_5555_5555_5555;
    x = (x | (x >> 1)) & 0x3333_3333_3333_3333;
    x = (x | (x >> 2)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x >> 4)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x >> 8)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x >> 16)) & 0x0000_0000_FFFF_FFFF;
    x as u32
}

/// Interleave the bits of `x` and `y`; `x` occupies the even bit levels of
/// the result, `y` the odd ones.
#[inline]
pub(crate) const fn interleave(x: u32, y: u32) -> u64 {
    spread(x) | (spread(y) << 1)
}

/// Split `x` into the 32-bit words stored at its even and odd bit levels.
#[inline]
pub(crate) fn deinterleave(x: u64) -> (u32, u32) {
    (squash(x), squash(x >> 1))
}

/// Encode the position of `v` within `[-r, r]` as a 32-bit integer,
/// saturating at both ends of the range.
#[inline]
pub(crate) fn encode_range(v: f64, r: f64) -> u32 {
    if v >= r {
        return u32::MAX;
    }
    let p = (v + r) / (2.0 * r);
    (p * EXP2_32) as u32
}

/// Decode the 32-bit range encoding `u` back to a value in `[-r, r]`.
#[inline]
pub(crate) fn decode_range(u: u32, r: f64) -> f64 {
    if u == u32::MAX {
        return r;
    }
    2.0 * r * (u as f64 * INV_EXP2_32) - r
}

/// Morton-encode a position; latitude occupies the even bit levels,
/// longitude the odd ones.
#[inline]
pub(crate) fn encode(lat: f64, lng: f64) -> u64 {
    interleave(encode_range(lat, 90.0), encode_range(lng, 180.0))
}
