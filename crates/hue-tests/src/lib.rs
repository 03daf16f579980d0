//! Integration tests for the hue color crates.
//!
//! This crate contains end-to-end tests that exercise `hue-color` together
//! with the gamut, math and transfer crates underneath it.

/// Installs a test-writer subscriber so conversion events show up in
/// `cargo test -- --nocapture` output. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}

/// Angular distance between two hues in degrees, 0-180.
pub fn hue_distance(a: u16, b: u16) -> u16 {
    let d = a.abs_diff(b) % 360;
    d.min(360 - d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use hue_color::hex::rgb_to_hex;
    use hue_color::prelude::*;
    use hue_gamut::{BLUE_VERTEX, LIME_VERTEX, RED_VERTEX};
    use std::sync::Arc;
    use std::thread;

    /// rgb -> cie -> rgb keeps chromatic colors in the same hue family.
    #[test]
    fn test_rgb_cie_roundtrip_keeps_hue() {
        init_tracing();

        let colors = [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(255, 127, 0),
            Rgb::new(200, 100, 50),
            Rgb::new(255, 0, 255),
            Rgb::new(16, 64, 255),
            Rgb::new(255, 200, 150),
            Rgb::new(60, 60, 200),
            Rgb::new(180, 120, 40),
        ];

        for rgb in colors {
            let cie = Color::from(rgb).to_cie();
            assert!(is_in_gamut(cie.xy()), "{rgb:?} -> {cie:?}");

            let back = Color::from_cie(cie.x, cie.y, cie.brightness).to_rgb();
            let before = rgb_to_hsb(rgb).hue.unwrap();
            let after = rgb_to_hsb(back).hue.unwrap();
            assert!(
                hue_distance(before, after) <= 25,
                "{} -> {} drifted from {before} to {after} degrees",
                rgb_to_hex(rgb),
                rgb_to_hex(back),
            );
        }
    }

    /// Grays do not come back as the same gray (the luma is used as linear
    /// Y), but a lighter gray always comes back lighter.
    #[test]
    fn test_gray_roundtrip_keeps_brightness_order() {
        let mut previous = Rgb::BLACK;
        for level in [16, 32, 64, 128, 192, 255] {
            let cie = Color::from_rgb(level, level, level).to_cie();
            let back = Color::from_cie(cie.x, cie.y, cie.brightness).to_rgb();

            assert!(back.red > previous.red, "gray {level} -> {back:?}");
            assert!(back.green > previous.green, "gray {level} -> {back:?}");
            assert!(back.blue > previous.blue, "gray {level} -> {back:?}");
            previous = back;
        }
        assert_eq!(previous.red, 255);
    }

    #[test]
    fn test_cie_brightness_orders_output() {
        let dim = Color::from_cie(0.4, 0.4, 50).to_rgb();
        let bright = Color::from_cie(0.4, 0.4, 200).to_rgb();
        assert!(dim.red < bright.red);
        assert!(dim.green < bright.green);
        assert_eq!(Color::from_cie(0.4, 0.4, 0).to_rgb(), Rgb::BLACK);
    }

    #[test]
    fn test_gamut_properties() {
        for vertex in [RED_VERTEX, LIME_VERTEX, BLUE_VERTEX] {
            assert!(is_in_gamut(vertex));
        }
        for far in [Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)] {
            assert!(!is_in_gamut(far));
            assert!(is_in_gamut(closest_in_gamut_point(far)));
        }
        assert_eq!(HUE_GAMUT.clamp(RED_VERTEX), RED_VERTEX);
    }

    #[test]
    fn test_out_of_gamut_cie_is_clamped() {
        // (0.1, 0.8) is a saturated green well outside the lamp triangle;
        // it renders like the lime vertex
        let outside = Color::from_cie(0.1, 0.8, 254).to_rgb();
        let vertex = Color::from_cie(LIME_VERTEX.x, LIME_VERTEX.y, 254).to_rgb();
        assert_eq!(outside, vertex);
    }

    #[test]
    fn test_documented_examples() {
        assert_eq!(hsb_to_rgb(30.0, 100.0, 255.0), Rgb::new(255, 127, 0));
        assert_eq!(rgb_to_hsb(Rgb::new(255, 127, 0)), Hsb::new(Some(30), 100, 255));
        assert_eq!(rgb_to_hsb(Rgb::BLACK), Hsb::new(None, 0, 0));
        assert_eq!(rgb_to_hsb(Rgb::gray(160)), Hsb::new(None, 0, 160));

        assert_eq!(Color::from_rgb(16, 64, 255).to_hex(), "1040ff");
        assert_eq!(Color::from_hex("ff00ff").unwrap().to_rgb(), Rgb::new(255, 0, 255));

        assert_eq!(Color::from_rgb(0, 255, 255).to_ct(), None);
        assert_eq!(Color::from_ct(200, 180).to_ct(), Some(200));

        assert_eq!(fit_into_range(-10.0, 360.0), 350.0);
        assert_eq!(fit_into_range(370.0, 360.0), 10.0);
    }

    #[test]
    fn test_every_origin_reaches_every_representation() {
        let colors = [
            Color::from_rgb(200, 100, 50),
            Color::from_cie(0.45, 0.4, 180),
            Color::from_hsb(200, 80, 220),
            Color::from_ct(370, 254),
        ];

        for color in &colors {
            let rgb = color.to_rgb();
            let cie = color.to_cie();
            let hsb = color.to_hsb();

            assert!(is_in_gamut(cie.xy()), "{:?}", color.original_kind());
            assert!(cie.brightness <= MAX_BRIGHTNESS);
            assert_eq!(color.to_hex(), rgb_to_hex(rgb));
            // Second round comes from the caches
            assert_eq!(color.to_rgb(), rgb);
            assert_eq!(color.to_cie(), cie);
            assert_eq!(color.to_hsb(), hsb);
        }

        let cts: Vec<_> = colors.iter().map(Color::to_ct).collect();
        assert_eq!(cts, [None, None, None, Some(370)]);
    }

    #[test]
    fn test_warm_white_is_warm() {
        let warm = Color::from_ct(500, 254).to_cie();
        let cool = Color::from_ct(153, 254).to_cie();
        assert!(warm.x > cool.x);
        assert_eq!(mired_to_kelvin(500), 2000);
        assert_eq!(kelvin_to_mired(6500), 153);
    }

    #[test]
    fn test_shared_color_across_threads() {
        init_tracing();

        let color = Arc::new(Color::from_cie(0.3, 0.2, 150));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let color = Arc::clone(&color);
                thread::spawn(move || (color.to_rgb(), color.to_hsb()))
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for result in &results {
            assert_eq!(*result, results[0]);
        }
        assert_eq!(color.to_rgb(), results[0].0);
    }

    #[test]
    fn test_serde_value_types() {
        let rgb = Rgb::new(16, 64, 255);
        let json = serde_json::to_string(&rgb).unwrap();
        assert_eq!(json, r#"{"red":16,"green":64,"blue":255}"#);
        assert_eq!(serde_json::from_str::<Rgb>(&json).unwrap(), rgb);

        let gray = Color::from_rgb(9, 9, 9).to_hsb();
        let json = serde_json::to_string(&gray).unwrap();
        assert_eq!(json, r#"{"hue":null,"saturation":0,"brightness":9}"#);

        let kind: ColorKind = serde_json::from_str(r#""ct""#).unwrap();
        assert_eq!(kind, ColorKind::Ct);
        assert_eq!(serde_json::to_string(&ColorKind::Cie).unwrap(), r#""cie""#);

        let cie = Cie::new(0.25, 0.5, 100);
        let back: Cie = serde_json::from_str(&serde_json::to_string(&cie).unwrap()).unwrap();
        assert_eq!(back, cie);

        let p: Point2 = serde_json::from_str(r#"{"x":0.5,"y":0.25}"#).unwrap();
        assert_abs_diff_eq!(p.x, 0.5);

        let device = DeviceHsb::from(Hsb::new(Some(30), 100, 255));
        let value = serde_json::to_value(device).unwrap();
        assert_eq!(value["hue"], 5461);
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            Color::from_hex("#12").unwrap_err(),
            ColorError::InvalidHex("#12".into())
        );
        assert!(matches!(
            "xyz".parse::<ColorKind>(),
            Err(ColorError::InvalidColorKind(tag)) if tag == "xyz"
        ));
    }

    #[test]
    fn test_grays_share_white_point() {
        init_tracing();
        let _span = tracing::info_span!("grays").entered();

        assert_abs_diff_eq!(hue_transfer::srgb_eotf(0.5), 0.21404114048223255, epsilon = 1e-12);

        let white = rgb_to_xy(1.0, 1.0, 1.0);
        for level in [0.05, 0.25, 0.5, 0.9] {
            let gray = rgb_to_xy(level, level, level);
            assert_abs_diff_eq!(gray.x, white.x, epsilon = 1e-9);
            assert_abs_diff_eq!(gray.y, white.y, epsilon = 1e-9);
        }
        tracing::debug!(x = white.x, y = white.y, "white point");
    }

    #[test]
    fn test_hue_distance() {
        assert_eq!(hue_distance(350, 10), 20);
        assert_eq!(hue_distance(10, 350), 20);
        assert_eq!(hue_distance(0, 180), 180);
        assert_eq!(hue_distance(42, 42), 0);
    }
}
