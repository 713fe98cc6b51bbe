#![cfg(feature = "png")]

use std::fs;
use std::path::PathBuf;

use memoicon::{render_icon, IconTarget, Palette};
use sha2::{Digest, Sha256};

// Goldens hash the decoded RGB pixels rather than the PNG bytes, so a change
// in the encoder's compression settings does not invalidate them.
fn golden_path(target: &IconTarget) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(format!("icon{}.pixels.sha256", target.size.get()));
    p
}

fn pixel_digest(png: &[u8]) -> String {
    let img = image::load_from_memory_with_format(png, image::ImageFormat::Png)
        .expect("decode")
        .to_rgb8();
    hex::encode(Sha256::digest(img.as_raw()))
}

#[test]
fn golden_icons_match_fixtures() {
    for target in IconTarget::standard_set() {
        let icon = render_icon(target.size, &Palette::default()).expect("render");
        let digest = pixel_digest(&icon.png_data);
        let expected_path = golden_path(&target);

        if std::env::var("UPDATE_GOLDENS").is_ok() {
            fs::create_dir_all("tests/goldens/expected").ok();
            fs::write(&expected_path, format!("{digest}\n")).expect("write golden");
            println!("Updated golden: {:?}", expected_path);
            continue;
        }

        let exp = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
            panic!(
                "missing golden {:?} ({e}); run with UPDATE_GOLDENS=1 to create it",
                expected_path
            )
        });
        assert_eq!(digest, exp.trim(), "{} drifted from its golden", target.file_name);
    }
}

#[test]
fn rendering_is_byte_identical_across_runs() {
    for target in IconTarget::standard_set() {
        let a = render_icon(target.size, &Palette::default()).unwrap();
        let b = render_icon(target.size, &Palette::default()).unwrap();
        assert_eq!(a.png_data, b.png_data, "{}", target.file_name);
        assert_eq!(a.digest(), b.digest());
    }
}
