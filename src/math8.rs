use embassy_time::Duration;

/// Scale an 8-bit value by a fraction `scale / 255`
///
/// The denominator is 255, not 256: `scale8(v, 255) == v` and
/// `scale8(v, 0) == 0` for every `v`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * scale as u16) / 255) as u8
}

/// "Video" version of [`scale8`]
///
/// Computes `value * scale / 256` and adds one when both inputs are
/// nonzero, so the output is zero only if one of the inputs is zero.
/// Keeps dim pixels visible instead of collapsing them to black.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale8_video(value: u8, scale: u8) -> u8 {
    let scaled = ((value as u16 * scale as u16) >> 8) as u8;
    if value != 0 && scale != 0 {
        scaled + 1
    } else {
        scaled
    }
}

/// Add two channels, rolling over at 255
///
/// `(a + b) mod 255`, so `add8_mod255(250, 10) == 5`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn add8_mod255(a: u8, b: u8) -> u8 {
    ((a as u16 + b as u16) % 255) as u8
}

/// Linearly map `x` from `[in_min, in_max]` onto `[out_min, out_max]`
///
/// Integer mapping with floor division (rounds toward negative infinity),
/// so descending output ranges step down exactly like the Arduino `map`
/// helper evaluated with a flooring division.
#[inline]
pub const fn map_range(x: i64, in_min: i64, in_max: i64, out_min: i64, out_max: i64) -> i64 {
    let span = in_max - in_min;
    if span == 0 {
        return out_min;
    }
    ((x - in_min) * (out_max - out_min)).div_euclid(span) + out_min
}

/// Map an elapsed time within `duration` onto `[from, to]`
///
/// Elapsed times past the end keep extrapolating; callers clamp when they
/// need a byte.
#[allow(clippy::cast_possible_wrap)]
pub const fn map_elapsed(elapsed: Duration, duration: Duration, from: i64, to: i64) -> i64 {
    map_range(
        elapsed.as_millis() as i64,
        0,
        duration.as_millis() as i64,
        from,
        to,
    )
}

/// Clamp a signed value into a byte
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn clamp_u8(value: i64) -> u8 {
    if value < 0 {
        0
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}
