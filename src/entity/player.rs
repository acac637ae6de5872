//! Player token
//!
//! Two states: moving (the default) and attacking. While attacking the
//! player is frozen in place and exposes a wider hit radius for
//! `attack_duration`.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::Direction;
use crate::{
    color::{BLUE, GREEN, Rgb, WHITE},
    config::PlayerConfig,
    math8::{clamp_u8, map_elapsed},
    strip::PixelStrip,
};

/// Blue level at the very start of an attack
const ATTACK_GLOW_START: i64 = 100;
/// Blue level at the very end of an attack
const ATTACK_GLOW_END: i64 = 5;
/// Above this glow the attack edges and center flash white
const ATTACK_FLASH_THRESHOLD: i64 = 90;

#[derive(Debug, Clone)]
pub struct Player {
    /// Pixels moved per tick; driven by input
    pub speed: i32,
    /// Sign applied to `speed`
    pub direction: Direction,
    position: i32,
    last: i32,
    attacking: bool,
    attack_start: Instant,
    attack_duration: Duration,
    attack_width: i32,
}

impl Player {
    /// Create a player at pixel 0 of `strip`
    pub fn new<const MAX_LEDS: usize>(
        strip: &PixelStrip<MAX_LEDS>,
        config: &PlayerConfig,
    ) -> Self {
        Self {
            speed: 0,
            direction: config.direction,
            position: 0,
            last: strip.last_position(),
            attacking: false,
            attack_start: Instant::from_millis(0),
            attack_duration: config.attack_duration,
            attack_width: i32::from(config.attack_width),
        }
    }

    pub const fn position(&self) -> i32 {
        self.position
    }

    /// Move the player, clamped onto the strip
    pub fn set_position(&mut self, position: i32) {
        self.position = position.min(self.last).max(0);
    }

    pub const fn is_attacking(&self) -> bool {
        self.attacking
    }

    pub const fn attack_width(&self) -> i32 {
        self.attack_width
    }

    pub const fn attack_duration(&self) -> Duration {
        self.attack_duration
    }

    /// Half of the attack width, the reach on each side
    pub const fn attack_reach(&self) -> i32 {
        self.attack_width / 2
    }

    /// Start an attack window at `now`
    pub fn attack(&mut self, now: Instant) {
        self.attack_start = now;
        self.attacking = true;
    }

    /// Advance one frame
    ///
    /// An attacking player only checks whether the window is over, and does
    /// not move on the tick that ends it.
    pub fn tick(&mut self, now: Instant) {
        if self.attacking {
            if now >= self.attack_start + self.attack_duration {
                self.attacking = false;
                #[cfg(feature = "esp32-log")]
                println!("[Player.tick] attack over at {:?}", self.position);
            }
            return;
        }

        let moved = self.position + self.speed * self.direction.sign();
        self.set_position(moved);
    }

    /// Draw the player into `strip`
    pub fn draw<const MAX_LEDS: usize>(&self, now: Instant, strip: &mut PixelStrip<MAX_LEDS>) {
        if self.attacking {
            self.draw_attack(now, strip);
        } else {
            let index = strip.clamp_position(self.position);
            strip[index] = GREEN;
        }
    }

    /// Blue glow fading over the window, with white edges early on
    fn draw_attack<const MAX_LEDS: usize>(&self, now: Instant, strip: &mut PixelStrip<MAX_LEDS>) {
        let elapsed = now.saturating_duration_since(self.attack_start);
        let glow = map_elapsed(
            elapsed,
            self.attack_duration,
            ATTACK_GLOW_START,
            ATTACK_GLOW_END,
        );

        let reach = self.attack_reach();
        let fill = Rgb {
            r: 0,
            g: 0,
            b: clamp_u8(glow),
        };
        for position in (self.position - reach + 1)..(self.position + reach - 1) {
            strip.paint_clipped(position, fill);
        }

        let flashing = glow > ATTACK_FLASH_THRESHOLD;
        let (center, edge) = if flashing {
            (WHITE, WHITE)
        } else {
            (GREEN, BLUE)
        };
        strip.paint_clipped(self.position, center);
        strip.paint_clipped(self.position - reach, edge);
        strip.paint_clipped(self.position + reach, edge);
    }
}
