mod tests {
    use embassy_time::{Duration, Instant};
    use twang_strip::{
        Game, GameConfig, InputChannel, InputIntent, OutputDriver, Rgb, StripError,
        color::{BLACK, GREEN, RED},
        hsv_rainbow,
    };

    const STRIP_LEN: usize = 50;

    type TestGame<'a> = Game<'a, 64, 2, 8>;

    fn config() -> GameConfig {
        GameConfig {
            strip_len: STRIP_LEN,
            ..GameConfig::default()
        }
    }

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[derive(Default)]
    struct RecordingDriver {
        frames: usize,
        last: Vec<Rgb>,
    }

    impl OutputDriver for RecordingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames += 1;
            self.last = colors.to_vec();
        }
    }

    #[test]
    fn test_new_rejects_bad_strip() {
        let channel = InputChannel::<8>::new();
        let result = TestGame::new(
            channel.receiver(),
            &GameConfig {
                strip_len: 0,
                ..GameConfig::default()
            },
        );
        assert!(matches!(result, Err(StripError::ZeroLength)));

        let result = TestGame::new(
            channel.receiver(),
            &GameConfig {
                strip_len: 65,
                ..GameConfig::default()
            },
        );
        assert!(matches!(
            result,
            Err(StripError::TooLong {
                len: 65,
                capacity: 64
            })
        ));
    }

    #[test]
    fn test_first_frame_shows_player() {
        let channel = InputChannel::<8>::new();
        let mut game = TestGame::new(channel.receiver(), &config()).unwrap();

        let frame = game.tick(at(0));
        assert_eq!(frame.len(), STRIP_LEN);
        assert_eq!(frame[0], GREEN);
        assert!(frame[1..].iter().all(|&p| p == BLACK));
        assert!(!game.is_idle());
    }

    #[test]
    fn test_move_intents_change_speed() {
        let channel = InputChannel::<8>::new();
        let sender = channel.sender();
        let mut game = TestGame::new(channel.receiver(), &config()).unwrap();

        sender.try_send(InputIntent::MoveBy(1)).unwrap();
        game.tick(at(16));
        game.tick(at(32));
        assert_eq!(game.world().player().position(), 2);
        assert_eq!(game.strip()[2], GREEN);

        // Key released
        sender.try_send(InputIntent::MoveBy(-1)).unwrap();
        game.tick(at(48));
        assert_eq!(game.world().player().speed, 0);
        assert_eq!(game.world().player().position(), 2);
    }

    #[test]
    fn test_attack_kills_enemy_in_reach() {
        let channel = InputChannel::<8>::new();
        let sender = channel.sender();
        let mut game = TestGame::new(channel.receiver(), &config()).unwrap();

        sender
            .try_send(InputIntent::SpawnEnemy {
                position: 20,
                speed: 0,
                wobble: 0,
            })
            .unwrap();
        game.tick(at(0));
        assert!(game.world().has_live_enemies());
        assert_eq!(game.strip()[20], RED);

        game.world_mut().player_mut().set_position(18);
        sender.try_send(InputIntent::Attack).unwrap();
        game.tick(at(16));
        assert!(game.world().player().is_attacking());
        assert!(!game.world().has_live_enemies());
        assert_ne!(game.strip()[20], RED);
    }

    #[test]
    fn test_enemy_out_of_reach_survives() {
        let channel = InputChannel::<8>::new();
        let sender = channel.sender();
        let mut game = TestGame::new(channel.receiver(), &config()).unwrap();

        sender
            .try_send(InputIntent::SpawnEnemy {
                position: 30,
                speed: 0,
                wobble: 0,
            })
            .unwrap();
        sender.try_send(InputIntent::Attack).unwrap();
        game.tick(at(0));
        assert!(game.world().has_live_enemies());
    }

    #[test]
    fn test_spawns_fill_then_reuse_slots() {
        let channel = InputChannel::<8>::new();
        let sender = channel.sender();
        let mut game = TestGame::new(channel.receiver(), &config()).unwrap();

        for position in [10, 20, 30] {
            sender
                .try_send(InputIntent::SpawnEnemy {
                    position,
                    speed: 0,
                    wobble: 0,
                })
                .unwrap();
        }
        game.tick(at(0));
        // Only two slots; the third spawn is rejected
        assert_eq!(game.world().enemies().len(), 2);
        assert_eq!(game.world().enemies()[1].position(), 20);

        // Runs off the far end on the next tick
        sender
            .try_send(InputIntent::SpawnEnemy {
                position: 48,
                speed: 5,
                wobble: 0,
            })
            .unwrap();
        let dormant = game.dormant_enemy();
        for enemy in game.world_mut().enemies_mut() {
            *enemy = dormant.clone();
        }
        game.tick(at(16));
        assert_eq!(game.world().enemies()[0].position(), 53);
        assert!(!game.world().has_live_enemies());

        sender
            .try_send(InputIntent::SpawnEnemy {
                position: 5,
                speed: 0,
                wobble: 0,
            })
            .unwrap();
        game.tick(at(32));
        assert_eq!(game.world().enemies().len(), 2);
        assert_eq!(game.world().enemies()[0].position(), 5);
    }

    #[test]
    fn test_goes_idle_after_inactivity() {
        let channel = InputChannel::<8>::new();
        let sender = channel.sender();
        let mut game = TestGame::new(channel.receiver(), &config()).unwrap();

        game.tick(at(4_999));
        assert!(!game.is_idle());

        let warm = hsv_rainbow(25, 255, 100);
        let frame = game.tick(at(5_000));
        // Random flashes start from the last play frame
        assert!(frame[1..].iter().all(|&p| p == BLACK || p == warm));
        assert_ne!(frame[0], GREEN);
        assert!(game.is_idle());

        // Any input wakes the game up
        sender.try_send(InputIntent::Attack).unwrap();
        game.tick(at(5_100));
        assert!(!game.is_idle());
    }

    #[test]
    fn test_activity_keeps_game_awake() {
        let channel = InputChannel::<8>::new();
        let sender = channel.sender();
        let mut game = TestGame::new(channel.receiver(), &config()).unwrap();

        sender
            .try_send(InputIntent::SpawnEnemy {
                position: 30,
                speed: 0,
                wobble: 0,
            })
            .unwrap();
        game.tick(at(0));
        game.tick(at(20_000));
        assert!(!game.is_idle());

        // Once the enemy is gone the idle timer starts counting again
        let dormant = game.dormant_enemy();
        game.world_mut().enemies_mut()[0] = dormant;
        game.tick(at(24_000));
        assert!(!game.is_idle());
        game.tick(at(25_000));
        assert!(game.is_idle());
    }

    #[test]
    fn test_custom_idle_timeout() {
        let channel = InputChannel::<8>::new();
        let mut game = TestGame::new(
            channel.receiver(),
            &GameConfig {
                idle_after: Duration::from_millis(100),
                ..config()
            },
        )
        .unwrap();
        game.tick(at(99));
        assert!(!game.is_idle());
        game.tick(at(100));
        assert!(game.is_idle());
    }

    #[test]
    fn test_tick_into_pushes_frame() {
        let channel = InputChannel::<8>::new();
        let mut game = TestGame::new(channel.receiver(), &config()).unwrap();
        let mut driver = RecordingDriver::default();

        game.tick_into(at(0), &mut driver);
        game.tick_into(at(16), &mut driver);
        assert_eq!(driver.frames, 2);
        assert_eq!(driver.last.len(), STRIP_LEN);
        assert_eq!(driver.last[0], GREEN);
    }
}
