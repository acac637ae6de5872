//! Desktop preview for twang-strip
//!
//! Plays the game in a window: the strip is drawn as a row of squares and the
//! keyboard is mapped to input intents.
//!
//! Keys: Left/Right move, Up/Down attack, S spawns a patrolling enemy,
//! Shift+S spawns a runner from the far end, Q quits.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use twang_strip::{
    Game, GameConfig, InputChannel, InputIntent, InputSender, Instant, Rgb,
    config::DEFAULT_STRIP_LEN,
};

/// Maximum number of LEDs the game supports
const MAX_LEDS: usize = 300;

/// Enemy slots in the world
const MAX_ENEMIES: usize = 16;

/// Size of each LED square in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 1.0;

/// Gamma applied when drawing so dim pixels stay visible on a monitor
const DISPLAY_GAMMA: f32 = 0.5;

/// Input channel size
const INPUT_CHANNEL_SIZE: usize = 16;

/// Static input channel between UI and game loop
static INPUT_CHANNEL: InputChannel<INPUT_CHANNEL_SIZE> =
    InputChannel::<INPUT_CHANNEL_SIZE>::new();

type PreviewGame = Game<'static, MAX_LEDS, MAX_ENEMIES, INPUT_CHANNEL_SIZE>;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 260.0])
            .with_title("Twang Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "twang-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

fn build_game(strip_len: usize) -> PreviewGame {
    let config = GameConfig {
        strip_len,
        ..GameConfig::default()
    };
    match Game::new(INPUT_CHANNEL.receiver(), &config) {
        Ok(game) => game,
        Err(error) => {
            println!("[PreviewApp] {error}, falling back to {DEFAULT_STRIP_LEN} LEDs");
            let config = GameConfig::default();
            // DEFAULT_STRIP_LEN always fits in MAX_LEDS
            Game::new(INPUT_CHANNEL.receiver(), &config)
                .unwrap_or_else(|error| panic!("default strip rejected: {error}"))
        }
    }
}

/// Same curve as a monitor-side gamma correction: `255 * (c / 255) ^ gamma`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn display_channel(value: u8) -> u8 {
    let normalized = f32::from(value) / 255.0;
    (normalized.powf(DISPLAY_GAMMA) * 255.0).round() as u8
}

fn display_color(pixel: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(
        display_channel(pixel.r),
        display_channel(pixel.g),
        display_channel(pixel.b),
    )
}

struct PreviewApp {
    game: PreviewGame,
    input: InputSender<'static, INPUT_CHANNEL_SIZE>,

    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether the game clock is running
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// Whether to apply the display gamma
    apply_gamma: bool,
    /// LED pixel size for display
    led_size: f32,
    /// Number of LEDs in the simulated strip
    led_count: usize,
    /// Net speed requested by held arrow keys, for the status line
    held_speed: i32,
}

impl PreviewApp {
    fn new() -> Self {
        let app = Self {
            game: build_game(DEFAULT_STRIP_LEN),
            input: INPUT_CHANNEL.sender(),
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            apply_gamma: true,
            led_size: LED_SIZE,
            led_count: DEFAULT_STRIP_LEN,
            held_speed: 0,
        };
        app.spawn_patroller();
        app
    }

    fn send(&self, intent: InputIntent) {
        if let Err(error) = self.input.try_send(intent) {
            println!("[PreviewApp] input dropped: {:?}", error.0);
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn spawn_patroller(&self) {
        self.send(InputIntent::SpawnEnemy {
            position: (self.led_count * 2 / 3) as i32,
            speed: -10,
            wobble: 20,
        });
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn spawn_runner(&self) {
        self.send(InputIntent::SpawnEnemy {
            position: self.led_count as i32 - 1,
            speed: -1,
            wobble: 0,
        });
    }

    /// Rebuild the game for a new strip length
    fn resize(&mut self, led_count: usize) {
        self.led_count = led_count;
        self.game = build_game(led_count);
        self.held_speed = 0;
    }

    /// Map key events to intents; returns false when the user asked to quit
    fn handle_keys(&mut self, ctx: &egui::Context) -> bool {
        let events = ctx.input(|i| i.events.clone());
        for event in events {
            let egui::Event::Key {
                key,
                pressed,
                repeat: false,
                modifiers,
                ..
            } = event
            else {
                continue;
            };

            let delta = match key {
                egui::Key::ArrowLeft => -1,
                egui::Key::ArrowRight => 1,
                _ => 0,
            };
            if delta != 0 {
                let delta = if pressed { delta } else { -delta };
                self.held_speed += delta;
                self.send(InputIntent::MoveBy(delta));
                continue;
            }

            if !pressed {
                continue;
            }
            match key {
                egui::Key::ArrowUp | egui::Key::ArrowDown => self.send(InputIntent::Attack),
                egui::Key::S if modifiers.shift => self.spawn_runner(),
                egui::Key::S => self.spawn_patroller(),
                egui::Key::Q => return false,
                _ => {}
            }
        }
        true
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.handle_keys(ctx) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        self.update_time();

        let now = Instant::from_millis(self.t_ms);
        let frame = self.game.tick(now).to_vec();

        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                    .clicked()
                {
                    self.playing = !self.playing;
                }

                ui.add_space(8.0);
                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));

                ui.add_space(8.0);
                ui.label("Size:");
                ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));

                ui.add_space(8.0);
                ui.label("LEDs:");
                let mut led_count = self.led_count;
                ui.add(egui::Slider::new(&mut led_count, 1usize..=MAX_LEDS));
                if led_count != self.led_count {
                    self.resize(led_count);
                }

                ui.add_space(8.0);
                ui.checkbox(&mut self.apply_gamma, "Gamma");
            });

            ui.add_space(12.0);

            // === LED Display ===
            let available_width = ui.available_width();
            let led_pitch = self.led_size + LED_GAP;

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = frame.len().div_ceil(leds_per_row);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) = ui.allocate_painter(
                egui::vec2(available_width, height),
                egui::Sense::hover(),
            );
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in frame.iter().enumerate() {
                let row = i / leds_per_row;
                let col = i % leds_per_row;
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(self.led_size, self.led_size),
                );
                let color = if self.apply_gamma {
                    display_color(*pixel)
                } else {
                    egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b)
                };
                painter.rect_filled(rect, 2.0, color);
            }

            ui.add_space(8.0);

            // === Status line ===
            let player = self.game.world().player();
            let live = self
                .game
                .world()
                .enemies()
                .iter()
                .filter(|enemy| enemy.is_alive())
                .count();
            ui.label(format!(
                "t: {}s  keys: {:+}  speed: {}  pos: {}  enemies: {}{}",
                self.t_ms / 1000,
                self.held_speed,
                player.speed,
                player.position(),
                live,
                if self.game.is_idle() { "  (screensaver)" } else { "" },
            ));
        });
    }
}
