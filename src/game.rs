use embassy_time::{Duration, Instant};
use rand::{SeedableRng, rngs::SmallRng};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::color::{BLACK, Rgb};
use crate::config::GameConfig;
use crate::entity::{Enemy, Player};
use crate::error::StripError;
use crate::input::{InputIntent, InputReceiver};
use crate::screensaver::Screensaver;
use crate::strip::PixelStrip;
use crate::world::World;

/// Game loop - the main orchestrator
///
/// Every [`Game::tick`] runs the whole frame in a fixed order: input,
/// movement, collisions, then either the play field or the screensaver is
/// drawn into the strip.
pub struct Game<'a, const MAX_LEDS: usize, const MAX_ENEMIES: usize, const INPUT_SIZE: usize> {
    // External dependencies and configuration
    input: InputReceiver<'a, INPUT_SIZE>,
    idle_after: Duration,

    // Internal state
    strip: PixelStrip<MAX_LEDS>,
    world: World<MAX_ENEMIES>,
    last_activity: Instant,
    idle: bool,

    // Internal dependencies
    screensaver: Screensaver,
    rng: SmallRng,
}

impl<'a, const MAX_LEDS: usize, const MAX_ENEMIES: usize, const INPUT_SIZE: usize>
    Game<'a, MAX_LEDS, MAX_ENEMIES, INPUT_SIZE>
{
    /// Create a new game reading intents from `input`
    pub fn new(
        input: InputReceiver<'a, INPUT_SIZE>,
        config: &GameConfig,
    ) -> Result<Self, StripError> {
        let strip = PixelStrip::new(config.strip_len, BLACK)?;
        let player = Player::new(&strip, &config.player);
        Ok(Self {
            input,
            idle_after: config.idle_after,
            strip,
            world: World::new(player),
            last_activity: Instant::from_millis(0),
            idle: false,
            screensaver: Screensaver::new(&config.screensaver),
            rng: SmallRng::seed_from_u64(config.seed),
        })
    }

    pub const fn strip(&self) -> &PixelStrip<MAX_LEDS> {
        &self.strip
    }

    pub const fn world(&self) -> &World<MAX_ENEMIES> {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World<MAX_ENEMIES> {
        &mut self.world
    }

    /// True while the screensaver owns the strip
    pub const fn is_idle(&self) -> bool {
        self.idle
    }

    /// Build a dormant enemy sized for this strip
    pub fn dormant_enemy(&self) -> Enemy {
        Enemy::new(&self.strip)
    }

    /// Process one frame
    ///
    /// This is the main loop step. Call it once per frame with the current
    /// time and hand the returned pixels to the display.
    pub fn tick(&mut self, now: Instant) -> &[Rgb] {
        self.process_input(now);

        self.world.tick(now);
        let _struck = self.world.collide();
        #[cfg(feature = "esp32-log")]
        if _struck > 0 {
            println!("[Game.tick] {:?} enemies struck", _struck);
        }

        self.update_idle(now);

        if self.idle {
            self.screensaver.tick(now, &mut self.strip, &mut self.rng);
        } else {
            self.strip.clear();
            self.world.draw(now, &mut self.strip);
        }

        self.strip.as_slice()
    }

    /// Process one frame and push it to `driver`
    pub fn tick_into(&mut self, now: Instant, driver: &mut impl OutputDriver) {
        let frame = self.tick(now);
        driver.write(frame);
    }

    /// Apply pending intents from the channel (non-blocking)
    fn process_input(&mut self, now: Instant) {
        let input = self.input;
        for intent in input.drain() {
            self.last_activity = now;
            self.apply_intent(intent, now);
        }
    }

    fn apply_intent(&mut self, intent: InputIntent, now: Instant) {
        match intent {
            InputIntent::MoveBy(delta) => {
                self.world.player_mut().speed += delta;
            }
            InputIntent::Attack => {
                self.world.player_mut().attack(now);
            }
            InputIntent::SpawnEnemy {
                position,
                speed,
                wobble,
            } => {
                let strip = &self.strip;
                let spawned = self
                    .world
                    .spawn_enemy(position, speed, wobble, || Enemy::new(strip));
                if let Err(_error) = spawned {
                    #[cfg(feature = "esp32-log")]
                    println!("[Game.apply_intent] spawn rejected: {}", _error);
                }
            }
        }
    }

    /// Switch between play and screensaver
    fn update_idle(&mut self, now: Instant) {
        let player = self.world.player();
        let busy = player.is_attacking() || player.speed != 0 || self.world.has_live_enemies();
        if busy {
            self.last_activity = now;
        }

        let idle = now >= self.last_activity + self.idle_after;
        if idle != self.idle {
            #[cfg(feature = "esp32-log")]
            println!("[Game.update_idle] idle: {:?}", idle);
            self.idle = idle;
        }
    }
}
