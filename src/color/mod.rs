mod hsv;

use smart_leds::RGB8;
use smart_leds::hsv::Hsv as HSV;

pub use hsv::{hsv_rainbow, hsv_raw, hsv_spectrum, hsv2rgb_rainbow, hsv2rgb_spectrum};

use crate::math8::{add8_mod255, scale8};

pub type Rgb = RGB8;
pub type Hsv = HSV;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
/// Neutral gray used by the sparkle and scroll patterns
pub const GRAY: Rgb = Rgb {
    r: 100,
    g: 100,
    b: 100,
};

/// Darken a color by `scale / 255` on every channel
#[inline]
pub const fn nscale8(color: Rgb, scale: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, scale),
        g: scale8(color.g, scale),
        b: scale8(color.b, scale),
    }
}

/// Add two colors channel by channel, rolling over at 255
#[inline]
pub const fn add_colors(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: add8_mod255(a.r, b.r),
        g: add8_mod255(a.g, b.g),
        b: add8_mod255(a.b, b.b),
    }
}
