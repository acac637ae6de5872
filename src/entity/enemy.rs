use embassy_time::Instant;

use super::{Player, Side};
use crate::{color::RED, strip::PixelStrip};

/// Wobble phase advances by `speed` radians every this many milliseconds
const WOBBLE_PERIOD_MS: f64 = 3000.0;

/// Enemy token
///
/// Built dormant; [`Enemy::spawn`] brings it to life. A dead enemy stays in
/// the world and can be spawned again.
#[derive(Debug, Clone)]
pub struct Enemy {
    position: i32,
    origin: i32,
    speed: i32,
    wobble: i32,
    alive: bool,
    player_side: Side,
    last: i32,
}

impl Enemy {
    /// Create a dormant enemy living on `strip`
    pub const fn new<const MAX_LEDS: usize>(strip: &PixelStrip<MAX_LEDS>) -> Self {
        Self {
            position: 0,
            origin: 0,
            speed: 0,
            wobble: 0,
            alive: false,
            player_side: Side::Left,
            last: strip.last_position(),
        }
    }

    pub const fn position(&self) -> i32 {
        self.position
    }

    pub const fn origin(&self) -> i32 {
        self.origin
    }

    pub const fn speed(&self) -> i32 {
        self.speed
    }

    pub const fn wobble(&self) -> i32 {
        self.wobble
    }

    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Side of the player this enemy spawned on
    pub const fn player_side(&self) -> Side {
        self.player_side
    }

    /// Bring the enemy to life at `position`
    ///
    /// A zero `wobble` moves linearly by `speed` pixels per tick; otherwise
    /// the enemy patrols sinusoidally around `position` with amplitude
    /// `wobble`.
    pub fn spawn(&mut self, player: &Player, position: i32, speed: i32, wobble: i32) {
        self.alive = true;
        self.position = position;
        self.origin = position;
        self.speed = speed;
        self.wobble = wobble;
        self.player_side = if position > player.position() {
            Side::Right
        } else {
            Side::Left
        };
    }

    /// Advance one frame
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn tick(&mut self, now: Instant) {
        if !self.alive {
            return;
        }

        if self.wobble != 0 {
            let phase = (now.as_millis() as f64 / WOBBLE_PERIOD_MS) * f64::from(self.speed);
            let offset = libm::round(libm::sin(phase) * f64::from(self.wobble));
            self.position = self.origin.saturating_add(offset as i32);
        } else {
            self.position = self.position.saturating_add(self.speed);
            if self.position < 0 || self.position > self.last {
                self.alive = false;
            }
        }
    }

    /// Die if caught inside the player's attack
    ///
    /// The hit zone is the open interval `(p - w/2, p + w/2)`; an enemy on
    /// the exact edge survives. Returns `true` when this call killed the
    /// enemy.
    pub fn collide(&mut self, player: &Player) -> bool {
        if !self.alive || !player.is_attacking() {
            return false;
        }

        let reach = player.attack_reach();
        let hit = self.position > player.position() - reach
            && self.position < player.position() + reach;
        if hit {
            self.alive = false;
        }
        hit
    }

    /// Draw the enemy, clamped onto the strip
    pub fn draw<const MAX_LEDS: usize>(&self, strip: &mut PixelStrip<MAX_LEDS>) {
        if !self.alive {
            return;
        }
        let index = strip.clamp_position(self.position);
        strip[index] = RED;
    }
}
