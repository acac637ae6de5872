mod tests {
    use twang_strip::color::{
        BLACK, Hsv, Rgb, WHITE, add_colors, hsv_rainbow, hsv_raw, hsv_spectrum, hsv2rgb_rainbow,
        hsv2rgb_spectrum, nscale8,
    };

    const fn rgb(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    #[test]
    fn test_rainbow_section_starts() {
        let expected = [
            (0, rgb(255, 0, 0)),
            (32, rgb(171, 85, 0)),
            (64, rgb(171, 170, 0)),
            (96, rgb(0, 255, 0)),
            (128, rgb(0, 171, 85)),
            (160, rgb(0, 0, 255)),
            (192, rgb(85, 0, 171)),
            (224, rgb(170, 0, 85)),
        ];
        for (hue, color) in expected {
            assert_eq!(hsv_rainbow(hue, 255, 255), color, "hue {hue}");
        }
    }

    #[test]
    fn test_rainbow_inside_sections() {
        assert_eq!(hsv_rainbow(16, 255, 255), rgb(213, 42, 0));
        assert_eq!(hsv_rainbow(31, 255, 255), rgb(173, 82, 0));
        assert_eq!(hsv_rainbow(48, 255, 255), rgb(171, 127, 0));
        assert_eq!(hsv_rainbow(80, 255, 255), rgb(86, 212, 0));
        assert_eq!(hsv_rainbow(255, 255, 255), rgb(252, 0, 3));
    }

    #[test]
    fn test_rainbow_saturation_and_value() {
        assert_eq!(hsv_rainbow(25, 255, 100), rgb(29, 10, 0));
        assert_eq!(hsv_rainbow(100, 128, 200), rgb(38, 113, 41));
        assert_eq!(hsv_rainbow(0, 255, 150), rgb(88, 0, 0));
    }

    #[test]
    fn test_rainbow_zero_saturation_is_white() {
        for hue in 0..=255u8 {
            assert_eq!(hsv_rainbow(hue, 0, 255), WHITE);
        }
    }

    #[test]
    fn test_rainbow_zero_value_is_black() {
        for hue in 0..=255u8 {
            for sat in [0, 1, 128, 254, 255] {
                assert_eq!(hsv_rainbow(hue, sat, 0), BLACK);
            }
        }
    }

    #[test]
    fn test_spectrum() {
        assert_eq!(hsv_spectrum(0, 255, 255), rgb(251, 0, 0));
        assert_eq!(hsv_spectrum(85, 255, 255), rgb(0, 251, 0));
        assert_eq!(hsv_spectrum(128, 255, 255), rgb(0, 127, 123));
        assert_eq!(hsv_spectrum(170, 255, 255), rgb(0, 0, 251));
        assert_eq!(hsv_spectrum(255, 255, 128), rgb(126, 0, 0));
        assert_eq!(hsv_spectrum(128, 0, 255), rgb(254, 254, 254));
    }

    #[test]
    fn test_spectrum_and_rainbow_differ() {
        assert_ne!(hsv_spectrum(64, 255, 255), hsv_rainbow(64, 255, 255));
    }

    #[test]
    fn test_hsv_raw_floor() {
        // Zero saturation: every channel sits on the floor
        assert_eq!(hsv_raw(10, 0, 200), rgb(199, 199, 199));
    }

    #[test]
    fn test_hsv_struct_wrappers() {
        let hsv = Hsv {
            hue: 100,
            sat: 128,
            val: 200,
        };
        assert_eq!(hsv2rgb_rainbow(hsv), hsv_rainbow(100, 128, 200));
        assert_eq!(hsv2rgb_spectrum(hsv), hsv_spectrum(100, 128, 200));
    }

    #[test]
    fn test_add_colors_wraps_at_255() {
        let a = rgb(250, 250, 250);
        let b = rgb(10, 10, 10);
        assert_eq!(add_colors(a, b), rgb(5, 5, 5));
        assert_eq!(add_colors(b, a), rgb(5, 5, 5));
        assert_eq!(add_colors(rgb(1, 2, 3), BLACK), rgb(1, 2, 3));
    }

    #[test]
    fn test_nscale8() {
        assert_eq!(nscale8(WHITE, 128), rgb(128, 128, 128));
        assert_eq!(nscale8(rgb(200, 100, 0), 250), rgb(196, 98, 0));
        assert_eq!(nscale8(WHITE, 0), BLACK);
    }
}
