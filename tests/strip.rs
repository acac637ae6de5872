mod tests {
    use twang_strip::{
        PixelStrip, Rgb, StripError,
        color::{BLACK, GREEN, RED, WHITE},
    };

    const fn rgb(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    #[test]
    fn test_new_fills_and_sizes() {
        let strip = PixelStrip::<16>::new(10, RED).unwrap();
        assert_eq!(strip.len(), 10);
        assert!(!strip.is_empty());
        assert_eq!(strip.last_position(), 9);
        assert_eq!(strip.as_slice(), &[RED; 10]);
    }

    #[test]
    fn test_new_rejects_bad_lengths() {
        assert_eq!(
            PixelStrip::<16>::new(0, BLACK).unwrap_err(),
            StripError::ZeroLength
        );
        assert_eq!(
            PixelStrip::<16>::new(17, BLACK).unwrap_err(),
            StripError::TooLong {
                len: 17,
                capacity: 16
            }
        );
    }

    #[test]
    fn test_get_set_are_bounds_checked() {
        let mut strip = PixelStrip::<16>::new(4, BLACK).unwrap();
        strip.set(3, GREEN).unwrap();
        assert_eq!(strip.get(3), Ok(GREEN));
        assert_eq!(
            strip.set(4, GREEN),
            Err(StripError::OutOfRange { index: 4, len: 4 })
        );
        // Capacity beyond the visible length is still out of range
        assert_eq!(
            strip.get(10),
            Err(StripError::OutOfRange { index: 10, len: 4 })
        );
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let strip = PixelStrip::<16>::new(4, BLACK).unwrap();
        let _ = strip[4];
    }

    #[test]
    fn test_add_wraps_at_255() {
        let mut strip = PixelStrip::<4>::new(2, rgb(250, 250, 250)).unwrap();
        strip.add(0, rgb(10, 10, 10)).unwrap();
        assert_eq!(strip[0], rgb(5, 5, 5));
        assert!(strip.add(2, WHITE).is_err());
    }

    #[test]
    fn test_add_pixel() {
        let mut strip = PixelStrip::<4>::new(2, BLACK).unwrap();
        strip.set(0, rgb(1, 2, 3)).unwrap();
        strip.set(1, rgb(10, 20, 30)).unwrap();
        strip.add_pixel(1, 0).unwrap();
        assert_eq!(strip[1], rgb(11, 22, 33));
    }

    #[test]
    fn test_nscale8() {
        let mut strip = PixelStrip::<4>::new(3, WHITE).unwrap();
        strip.nscale8(0, 128).unwrap();
        assert_eq!(strip[0], rgb(128, 128, 128));
        assert_eq!(strip[1], WHITE);

        strip.nscale8_all(250);
        assert_eq!(strip[0], rgb(125, 125, 125));
        assert_eq!(strip[2], rgb(250, 250, 250));
    }

    #[test]
    fn test_clear_and_fill() {
        let mut strip = PixelStrip::<8>::new(8, WHITE).unwrap();
        strip.clear();
        assert!(strip.as_slice().iter().all(|&pixel| pixel == BLACK));
        strip.fill(RED);
        assert!(strip.as_slice().iter().all(|&pixel| pixel == RED));
    }

    #[test]
    fn test_clipped_writes_skip_off_strip_positions() {
        let mut strip = PixelStrip::<8>::new(5, BLACK).unwrap();
        strip.paint_clipped(-1, RED);
        strip.paint_clipped(5, RED);
        assert!(strip.as_slice().iter().all(|&pixel| pixel == BLACK));

        strip.paint_clipped(0, RED);
        strip.add_clipped(4, rgb(1, 1, 1));
        strip.add_clipped(4, rgb(1, 1, 1));
        strip.add_clipped(-3, WHITE);
        assert_eq!(strip[0], RED);
        assert_eq!(strip[4], rgb(2, 2, 2));
    }

    #[test]
    fn test_position_helpers() {
        let strip = PixelStrip::<8>::new(5, BLACK).unwrap();
        assert_eq!(strip.clamp_position(-7), 0);
        assert_eq!(strip.clamp_position(2), 2);
        assert_eq!(strip.clamp_position(99), 4);
        assert_eq!(strip.index_of(-1), None);
        assert_eq!(strip.index_of(4), Some(4));
        assert_eq!(strip.index_of(5), None);
    }
}
