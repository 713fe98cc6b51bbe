#![cfg(feature = "png")]

use image::RgbImage;
use memoicon::{render_icon, Color, Palette, Size};

fn decode(size: u32) -> RgbImage {
    let icon = render_icon(Size::new(size).unwrap(), &Palette::default()).expect("render");
    image::load_from_memory_with_format(&icon.png_data, image::ImageFormat::Png)
        .expect("decode")
        .to_rgb8()
}

fn at(img: &RgbImage, x: u32, y: u32) -> Color {
    (*img.get_pixel(x, y)).into()
}

#[test]
fn detailed_sizes_have_both_colors_and_exact_dimensions() {
    for size in [48u32, 64, 100, 128, 256] {
        let img = decode(size);
        assert_eq!(img.dimensions(), (size, size), "size {size}");
        let colors: Vec<Color> = img.pixels().map(|p| Color::from(*p)).collect();
        assert!(colors.contains(&Color::WHITE), "no foreground at {size}");
        assert!(colors.contains(&Color::BLUE), "no background at {size}");
        assert!(
            colors.iter().all(|c| *c == Color::WHITE || *c == Color::BLUE),
            "unexpected color at {size}"
        );
    }
}

#[test]
fn minimal_sizes_only_draw_near_center() {
    for size in [1u32, 7, 16, 32, 47] {
        let img = decode(size);
        assert_eq!(img.dimensions(), (size, size));
        let c = i64::from(size / 2);
        let mut found = false;
        for (x, y, p) in img.enumerate_pixels() {
            if Color::from(*p) == Color::WHITE {
                found = true;
                assert!(
                    (i64::from(x) - c).abs() <= 3 && (i64::from(y) - c).abs() <= 3,
                    "foreground pixel ({x}, {y}) too far from center at size {size}"
                );
            }
        }
        assert!(found, "no foreground dot at size {size}");
    }
}

#[test]
fn icon128_scenario() {
    let img = decode(128);
    assert_eq!(at(&img, 0, 0), Color::rgb(26, 115, 232));
    assert_eq!(at(&img, 127, 127), Color::BLUE);

    // circle of diameter 32 centered at (64, 64)
    assert_eq!(at(&img, 64, 64), Color::WHITE);
    assert_eq!(at(&img, 64, 49), Color::WHITE);
    assert_eq!(at(&img, 49, 64), Color::WHITE);
    assert_eq!(at(&img, 50, 50), Color::BLUE);

    // memo strokes: 4 rows each, x from 42 to 86
    for y in [63u32, 79, 95] {
        for row in y - 2..=y + 1 {
            assert_eq!(at(&img, 42, row), Color::WHITE, "row {row}");
            assert_eq!(at(&img, 86, row), Color::WHITE, "row {row}");
        }
        assert_eq!(at(&img, 41, y), Color::BLUE);
        assert_eq!(at(&img, 87, y), Color::BLUE);
        assert_eq!(at(&img, 42, y - 3), Color::BLUE);
        assert_eq!(at(&img, 42, y + 2), Color::BLUE);
    }
}

#[test]
fn icon16_scenario() {
    let img = decode(16);
    assert_eq!(img.dimensions(), (16, 16));
    assert_eq!(at(&img, 8, 8), Color::WHITE);
    assert_eq!(at(&img, 5, 8), Color::WHITE);
    assert_eq!(at(&img, 11, 8), Color::WHITE);
    assert_eq!(at(&img, 8, 5), Color::WHITE);
    assert_eq!(at(&img, 5, 5), Color::BLUE);
    assert_eq!(at(&img, 4, 8), Color::BLUE);

    // no memo strokes on minimal icons
    let white = img.pixels().filter(|p| Color::from(**p) == Color::WHITE).count();
    assert!(white < 49, "dot covers {white} pixels");
}

#[test]
fn custom_palette_is_honoured() {
    let palette = Palette {
        background: Color::rgb(0, 0, 0),
        foreground: Color::rgb(255, 0, 0),
    };
    let icon = render_icon(Size::new(64).unwrap(), &palette).unwrap();
    let img = image::load_from_memory(&icon.png_data).unwrap().to_rgb8();
    assert_eq!(at(&img, 0, 0), palette.background);
    assert_eq!(at(&img, 32, 32), palette.foreground);
}
