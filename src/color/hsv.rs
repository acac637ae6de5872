//! Fixed-point HSV to RGB conversions (ported from `FastLED`)
//!
//! Two hue wheels are provided and they are not interchangeable:
//! - [`hsv_rainbow`]: eight sections with a yellow boost, perceptually even
//! - [`hsv_spectrum`]: three equal sections, flat and mathematically even
//!
//! The same hue byte lands on different colors in each wheel.

use crate::{
    color::{Hsv, Rgb},
    math8::{scale8, scale8_video},
};

/// Width of one section of the three-section wheel (hue range 0..=191)
const HSV_SECTION_3: u8 = 0x40;

/// Top of the hue range used by the spectrum wheel
const SPECTRUM_HUE_MAX: u8 = 191;

/// Convert hue, saturation and value to RGB using the rainbow wheel
///
/// Hue is split into eight 32-step sections (red, orange, yellow, green,
/// aqua, blue, purple, pink). Sections 1 and 2 get a moderate boost because
/// yellow looks dimmer than white at equal energy.
#[allow(clippy::many_single_char_names)]
pub const fn hsv_rainbow(hue: u8, sat: u8, val: u8) -> Rgb {
    let offset = hue & 0x1F;
    let offset8 = offset << 3;
    let third = scale8(offset8, 85); // max 82
    let twothirds = scale8(offset8, 170); // max 165

    let (mut r, mut g, mut b) = match (hue & 0xE0) >> 5 {
        // Red -> Orange
        0 => (255 - third, third, 0),
        // Orange -> Yellow
        1 => (171, 85 + third, 0),
        // Yellow -> Green
        2 => (171 - twothirds, 170 + third, 0),
        // Green -> Aqua
        3 => (0, 255 - third, third),
        // Aqua -> Blue
        4 => (0, 171 - twothirds, 85 + twothirds),
        // Blue -> Purple
        5 => (third, 0, 255 - third),
        // Purple -> Pink
        6 => (85 + third, 0, 171 - third),
        // Pink -> Red
        _ => (170 + third, 0, 85 - third),
    };

    if sat != 255 {
        if sat == 0 {
            r = 255;
            g = 255;
            b = 255;
        } else {
            let desat = 255 - sat;
            let brightness_floor = scale8(desat, desat);
            r = desaturate(r, sat, brightness_floor);
            g = desaturate(g, sat, brightness_floor);
            b = desaturate(b, sat, brightness_floor);
        }
    }

    if val != 255 {
        let val = scale8_video(val, val);
        if val == 0 {
            r = 0;
            g = 0;
            b = 0;
        } else {
            r = scale_nonzero(r, val);
            g = scale_nonzero(g, val);
            b = scale_nonzero(b, val);
        }
    }

    Rgb { r, g, b }
}

/// Convert hue, saturation and value to RGB using the spectrum wheel
///
/// The hue byte is first compressed into 0..=191 and then handed to
/// [`hsv_raw`].
pub const fn hsv_spectrum(hue: u8, sat: u8, val: u8) -> Rgb {
    hsv_raw(scale8(hue, SPECTRUM_HUE_MAX), sat, val)
}

/// Three-section HSV conversion with hue in 0..=191
///
/// Every channel starts from a brightness floor derived from saturation;
/// the remaining amplitude ramps up on one channel and down on another,
/// rotating which channel sits on the floor per section.
#[allow(clippy::cast_possible_truncation)]
pub const fn hsv_raw(hue: u8, sat: u8, val: u8) -> Rgb {
    let invsat = 255 - sat;
    let brightness_floor = ((val as u16 * invsat as u16) / 256) as u8;
    let color_amplitude = val - brightness_floor;

    let section = hue / HSV_SECTION_3;
    let offset = hue % HSV_SECTION_3;

    let rampup = offset;
    let rampdown = (HSV_SECTION_3 - 1) - offset;

    // rampup/rampdown are 0..=63; the *4 to reach 0..=255 is folded into
    // the division below.
    let rampup_amp_adj = ((rampup as u16 * color_amplitude as u16) / (256 / 4)) as u8;
    let rampdown_amp_adj = ((rampdown as u16 * color_amplitude as u16) / (256 / 4)) as u8;

    let up = rampup_amp_adj + brightness_floor;
    let down = rampdown_amp_adj + brightness_floor;

    match section {
        0 => Rgb {
            r: down,
            g: up,
            b: brightness_floor,
        },
        1 => Rgb {
            r: brightness_floor,
            g: down,
            b: up,
        },
        _ => Rgb {
            r: up,
            g: brightness_floor,
            b: down,
        },
    }
}

/// Rainbow conversion for a [`Hsv`] triple
pub const fn hsv2rgb_rainbow(hsv: Hsv) -> Rgb {
    hsv_rainbow(hsv.hue, hsv.sat, hsv.val)
}

/// Spectrum conversion for a [`Hsv`] triple
pub const fn hsv2rgb_spectrum(hsv: Hsv) -> Rgb {
    hsv_spectrum(hsv.hue, hsv.sat, hsv.val)
}

#[inline]
const fn desaturate(channel: u8, sat: u8, brightness_floor: u8) -> u8 {
    scale_nonzero(channel, sat) + brightness_floor
}

#[inline]
const fn scale_nonzero(channel: u8, scale: u8) -> u8 {
    if channel == 0 {
        0
    } else {
        scale8(channel, scale)
    }
}
