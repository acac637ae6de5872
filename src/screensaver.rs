//! Ambient patterns shown while nobody is playing
//!
//! The pattern is picked from the time alone. Apart from the strip itself
//! nothing carries over between frames: the fading patterns rely on what the
//! previous frame left in the pixels. Randomness is injected so callers
//! decide how deterministic the flashes and sparkles are.

use core::f64::consts::PI;

use embassy_time::{Duration, Instant};
use rand::Rng;

use crate::{
    color::{BLACK, GRAY, hsv_rainbow},
    config::ScreensaverConfig,
    strip::PixelStrip,
};

const PATTERN_COUNT: u64 = 5;

// Marching bicolor
const MARCH_FADE: u8 = 250;
const MARCH_STEP_MS: u64 = 250;
const MARCH_SPACING: usize = 10;
const MARCH_VALUE: u8 = 150;

// Random flashes
const FLASH_FADE: u8 = 250;
const FLASH_ODDS: u32 = 20;
const FLASH_HUE: u8 = 25;
const FLASH_VALUE: u8 = 100;

// Dots in bowl
const DOT_COUNT: u64 = 3;
const DOT_SPEED: u64 = 22;
const DOT_DISTANCE: u64 = 65_535 / DOT_COUNT;
const DOT_BRIGHTNESS: u8 = 255;
const DOT_MARGIN: i32 = 2;

// Sparkles
const SPARKLE_FADE: u8 = 128;
const SPARKLE_CYCLE_MS: u64 = 800;
const SPARKLE_BURST_MS: u64 = 240;
const SPARKLE_BURST_PEAK: u64 = 121;
const SPARKLE_IDLE_CHANCE: u8 = 1;

// Scroll dots
const SCROLL_STEP_MS: u64 = 100;
const SCROLL_SPACING: u64 = 5;

/// One of the five ambient patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Fading trail with every tenth pixel marching, hue breathing slowly
    MarchingBicolor,
    /// Fading trail with random warm flashes
    RandomFlashes,
    /// Three dots swinging in a bowl, blended additively
    DotsInBowl,
    /// Bursts of gray sparkles
    Sparkles,
    /// Every fifth pixel lit, scrolling
    ScrollDots,
}

impl Pattern {
    pub const fn from_index(index: u64) -> Self {
        match index % PATTERN_COUNT {
            0 => Self::MarchingBicolor,
            1 => Self::RandomFlashes,
            2 => Self::DotsInBowl,
            3 => Self::Sparkles,
            _ => Self::ScrollDots,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Screensaver {
    mode_period: Duration,
}

impl Default for Screensaver {
    fn default() -> Self {
        Self::new(&ScreensaverConfig::default())
    }
}

impl Screensaver {
    pub const fn new(config: &ScreensaverConfig) -> Self {
        Self {
            mode_period: config.mode_period,
        }
    }

    /// Pattern on screen at `now`
    pub const fn pattern(&self, now: Instant) -> Pattern {
        let period = if self.mode_period.as_millis() == 0 {
            1
        } else {
            self.mode_period.as_millis()
        };
        Pattern::from_index(now.as_millis() / period)
    }

    /// Render one frame of the current pattern into `strip`
    pub fn tick<const MAX_LEDS: usize>(
        &self,
        now: Instant,
        strip: &mut PixelStrip<MAX_LEDS>,
        rng: &mut impl Rng,
    ) {
        let time_ms = now.as_millis();
        match self.pattern(now) {
            Pattern::MarchingBicolor => marching_bicolor(time_ms, strip),
            Pattern::RandomFlashes => random_flashes(strip, rng),
            Pattern::DotsInBowl => dots_in_bowl(time_ms, strip),
            Pattern::Sparkles => sparkles(time_ms, strip, rng),
            Pattern::ScrollDots => scroll_dots(time_ms, strip),
        }
    }
}

/// Hue for the marching dots, drifting along a very slow sine
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn marching_hue(time_ms: u64) -> u8 {
    let angle = (time_ms as f64 / 5000.0) * PI / 180.0;
    let hue = (20.0 + (libm::sin(angle) * 255.0 + 1.0) * 33.0) as i32;
    hue.rem_euclid(256) as u8
}

#[allow(clippy::cast_possible_truncation)]
fn marching_bicolor<const MAX_LEDS: usize>(time_ms: u64, strip: &mut PixelStrip<MAX_LEDS>) {
    strip.nscale8_all(MARCH_FADE);

    let lead = ((time_ms / MARCH_STEP_MS) % MARCH_SPACING as u64) as usize;
    let color = hsv_rainbow(marching_hue(time_ms), 255, MARCH_VALUE);
    for pixel in strip.as_mut_slice().iter_mut().skip(lead).step_by(MARCH_SPACING) {
        *pixel = color;
    }
}

fn random_flashes<const MAX_LEDS: usize>(strip: &mut PixelStrip<MAX_LEDS>, rng: &mut impl Rng) {
    strip.nscale8_all(FLASH_FADE);

    let color = hsv_rainbow(FLASH_HUE, 255, FLASH_VALUE);
    for pixel in strip.as_mut_slice() {
        if rng.gen_range(0..FLASH_ODDS) == 0 {
            *pixel = color;
        }
    }
}

/// Center of dot `dot` and its hue at `time_ms`
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]
fn dot_in_bowl(dot: u64, time_ms: u64, strip_len: usize) -> (i32, u8) {
    let phase = (dot * DOT_DISTANCE + (time_ms % (1 << 32)) * DOT_SPEED) % (1 << 16);
    // 0.0..2.0, one full swing per 2^16 steps
    let swing = phase as f64 / f64::from(1u32 << 15);
    let depth = (strip_len as i32 - 5) as f64;
    let center = (((libm::sin(swing * PI) + 1.0) / 2.0) * depth) as i32 + DOT_MARGIN;
    let hue = (swing * 128.0) as u8;
    (center, hue)
}

fn dots_in_bowl<const MAX_LEDS: usize>(time_ms: u64, strip: &mut PixelStrip<MAX_LEDS>) {
    strip.clear();

    for dot in 0..DOT_COUNT {
        let (center, hue) = dot_in_bowl(dot, time_ms, strip.len());
        let outer = hsv_rainbow(hue, 255, DOT_BRIGHTNESS / 4);
        let inner = hsv_rainbow(hue, 255, DOT_BRIGHTNESS / 2);
        let core = hsv_rainbow(hue, 255, DOT_BRIGHTNESS);

        strip.add_clipped(center - 2, outer);
        strip.add_clipped(center - 1, inner);
        strip.add_clipped(center, core);
        strip.add_clipped(center + 1, inner);
        strip.add_clipped(center + 2, outer);
    }
}

/// Per-pixel sparkle chance out of 256 at `time_ms`
#[allow(clippy::cast_possible_truncation)]
pub fn sparkle_chance(time_ms: u64) -> u8 {
    let cycle = time_ms % SPARKLE_CYCLE_MS;
    if cycle < SPARKLE_BURST_MS {
        (SPARKLE_BURST_PEAK - cycle / 2) as u8
    } else {
        SPARKLE_IDLE_CHANCE
    }
}

fn sparkles<const MAX_LEDS: usize>(
    time_ms: u64,
    strip: &mut PixelStrip<MAX_LEDS>,
    rng: &mut impl Rng,
) {
    strip.nscale8_all(SPARKLE_FADE);

    let chance = sparkle_chance(time_ms);
    for pixel in strip.as_mut_slice() {
        if rng.r#gen::<u8>() < chance {
            *pixel = GRAY;
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn scroll_dots<const MAX_LEDS: usize>(time_ms: u64, strip: &mut PixelStrip<MAX_LEDS>) {
    let shift = time_ms / SCROLL_STEP_MS;
    for (i, pixel) in strip.as_mut_slice().iter_mut().enumerate() {
        let lit = (i as u64 + shift) % SCROLL_SPACING == 0;
        *pixel = if lit { GRAY } else { BLACK };
    }
}
