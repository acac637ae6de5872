use embassy_time::Duration;

use crate::entity::Direction;

/// Length of a standard 144-pixel strip
pub const DEFAULT_STRIP_LEN: usize = 144;

/// Default attack radius, in pixels
pub const DEFAULT_ATTACK_WIDTH: u16 = 8;

/// Default attack window
pub const DEFAULT_ATTACK_DURATION: Duration = Duration::from_millis(500);

/// Time each screensaver pattern stays on the strip
pub const DEFAULT_SCREENSAVER_PERIOD: Duration = Duration::from_millis(3000);

/// How long the game must be quiet before the screensaver takes over
pub const DEFAULT_IDLE_AFTER: Duration = Duration::from_millis(5000);

/// Player tuning
#[derive(Debug, Clone, Copy)]
pub struct PlayerConfig {
    /// Initial movement direction
    pub direction: Direction,
    /// Attack radius in pixels
    pub attack_width: u16,
    /// Attack window
    pub attack_duration: Duration,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Forward,
            attack_width: DEFAULT_ATTACK_WIDTH,
            attack_duration: DEFAULT_ATTACK_DURATION,
        }
    }
}

/// Screensaver tuning
#[derive(Debug, Clone, Copy)]
pub struct ScreensaverConfig {
    /// Time each pattern stays on before the next one
    pub mode_period: Duration,
}

impl Default for ScreensaverConfig {
    fn default() -> Self {
        Self {
            mode_period: DEFAULT_SCREENSAVER_PERIOD,
        }
    }
}

/// Configuration for the game loop
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    /// Number of visible pixels
    pub strip_len: usize,
    pub player: PlayerConfig,
    pub screensaver: ScreensaverConfig,
    /// Quiet time before the screensaver takes over
    pub idle_after: Duration,
    /// Seed for the screensaver's random patterns
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            strip_len: DEFAULT_STRIP_LEN,
            player: PlayerConfig::default(),
            screensaver: ScreensaverConfig::default(),
            idle_after: DEFAULT_IDLE_AFTER,
            seed: 0x7741_4e47,
        }
    }
}
