#![no_std]

pub mod color;
pub mod config;
pub mod entity;
pub mod error;
pub mod game;
pub mod input;
pub mod math8;
pub mod screensaver;
pub mod strip;
pub mod world;

pub use config::{GameConfig, PlayerConfig, ScreensaverConfig};
pub use entity::{Direction, Enemy, Player, Side};
pub use error::{StripError, WorldError};
pub use game::Game;
pub use input::{InputChannel, InputIntent, InputReceiver, InputSender, TrySendError};
pub use screensaver::{Pattern, Screensaver};
pub use strip::PixelStrip;
pub use world::World;

pub use color::{Hsv, Rgb, hsv_rainbow, hsv_spectrum};
pub use math8::{scale8, scale8_video};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to push frames to real hardware or a window.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
