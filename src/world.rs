//! Shared game world: one player and a growing list of enemies
//!
//! Enemies are appended explicitly with [`World::register`] and never
//! removed; a dead enemy stays in its slot until it is spawned again.

use embassy_time::Instant;
use heapless::Vec;

use crate::{
    entity::{Enemy, Player},
    error::WorldError,
    strip::PixelStrip,
};

#[derive(Debug, Clone)]
pub struct World<const MAX_ENEMIES: usize> {
    player: Player,
    enemies: Vec<Enemy, MAX_ENEMIES>,
}

impl<const MAX_ENEMIES: usize> World<MAX_ENEMIES> {
    /// Create a world around `player` with no enemies
    pub const fn new(player: Player) -> Self {
        Self {
            player,
            enemies: Vec::new(),
        }
    }

    pub const fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut [Enemy] {
        &mut self.enemies
    }

    /// Append an enemy; returns its slot index
    pub fn register(&mut self, enemy: Enemy) -> Result<usize, WorldError> {
        self.enemies.push(enemy).map_err(|_| WorldError::Full {
            capacity: MAX_ENEMIES,
        })?;
        Ok(self.enemies.len() - 1)
    }

    /// Spawn an enemy into the first dormant slot, registering a new one
    /// built by `make` if every slot is taken
    pub fn spawn_enemy(
        &mut self,
        position: i32,
        speed: i32,
        wobble: i32,
        make: impl FnOnce() -> Enemy,
    ) -> Result<usize, WorldError> {
        let slot = match self.enemies.iter().position(|enemy| !enemy.is_alive()) {
            Some(slot) => slot,
            None => self.register(make())?,
        };
        self.enemies[slot].spawn(&self.player, position, speed, wobble);
        Ok(slot)
    }

    /// True while any enemy is alive
    pub fn has_live_enemies(&self) -> bool {
        self.enemies.iter().any(Enemy::is_alive)
    }

    /// Advance the player, then every enemy
    pub fn tick(&mut self, now: Instant) {
        self.player.tick(now);
        for enemy in &mut self.enemies {
            enemy.tick(now);
        }
    }

    /// Resolve the player's attack against every enemy
    ///
    /// Returns the number of enemies struck this frame.
    pub fn collide(&mut self) -> usize {
        let player = &self.player;
        self.enemies
            .iter_mut()
            .map(|enemy| enemy.collide(player))
            .filter(|&hit| hit)
            .count()
    }

    /// Draw the player, then every enemy, on top of whatever is in `strip`
    pub fn draw<const MAX_LEDS: usize>(&self, now: Instant, strip: &mut PixelStrip<MAX_LEDS>) {
        self.player.draw(now, strip);
        for enemy in &self.enemies {
            enemy.draw(strip);
        }
    }
}
