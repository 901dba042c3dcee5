//! End-to-end rendering scenarios.
//!
//! These tests use tempfile to give every render its own output directory.

use std::path::{Path, PathBuf};

use ttb::layout::{wrap, DrawRegion};
use ttb::{text_to_image, Config, ErrorKind, FaceOptions, FontFace, TextFace};

const FONT_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/DejaVuSans.ttf");

fn config(width: i64, height: i64, out: &Path) -> Config {
    Config::new(width, height)
        .expect("positive dimensions")
        .with_font_path(FONT_PATH)
        .with_output_dir(out)
}

fn files_in(dir: &Path) -> Vec<PathBuf> {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries.map(|e| e.expect("readable entry").path()).collect(),
        Err(_) => Vec::new(),
    }
}

fn is_black(p: &image::Rgba<u8>) -> bool {
    p.0 == [0, 0, 0, 255]
}

#[test]
fn hello_world() {
    let out = tempfile::tempdir().expect("can create temp dir");
    let path = text_to_image("Hello world", &config(400, 400, out.path())).expect("can render");

    assert!(path.is_absolute());
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("png"));
    assert_eq!(files_in(out.path()).len(), 1);

    let img = image::open(&path).expect("can decode png").to_rgba8();
    assert_eq!(img.dimensions(), (400, 400));

    // background
    for (x, y) in [(0, 0), (399, 0), (0, 399), (399, 399), (200, 300)] {
        assert!(is_black(img.get_pixel(x, y)), "pixel ({x}, {y}) should be black");
    }

    // white ink near the top-left of the draw region
    let inked = (0..80)
        .flat_map(|y| (40..360).map(move |x| (x, y)))
        .filter(|&(x, y)| !is_black(img.get_pixel(x, y)))
        .count();
    assert!(inked > 50, "expected glyph ink, found {inked} pixels");

    // glyphs are white over black, so every inked pixel is grey
    for p in img.pixels() {
        assert!(p.0[0] == p.0[1] && p.0[1] == p.0[2] && p.0[3] == 255);
    }
}

#[test]
fn empty_text_is_a_black_image() {
    let face = FontFace::load(FONT_PATH, FaceOptions::default()).expect("can load font");
    let lines = wrap("", &face, DrawRegion::for_canvas(100, 100).extent.0);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].is_empty());

    let out = tempfile::tempdir().expect("can create temp dir");
    let path = text_to_image("", &config(100, 100, out.path())).expect("can render");
    let img = image::open(&path).expect("can decode png").to_rgba8();
    assert_eq!(img.dimensions(), (100, 100));
    assert!(img.pixels().all(is_black));
}

#[test]
fn missing_font_leaves_no_file() {
    let out = tempfile::tempdir().expect("can create temp dir");
    let fonts = tempfile::tempdir().expect("can create temp dir");
    let config = config(400, 400, out.path()).with_font_path(fonts.path().join("missing.ttf"));

    let err = text_to_image("Hello world", &config).expect_err("font is missing");
    assert_eq!(err.kind(), ErrorKind::BadFont);
    assert!(files_in(out.path()).is_empty());
}

#[test]
fn corrupt_font_is_bad_font() {
    let out = tempfile::tempdir().expect("can create temp dir");
    let fonts = tempfile::tempdir().expect("can create temp dir");
    let corrupt = fonts.path().join("corrupt.ttf");
    std::fs::write(&corrupt, b"\x00\x01\x00\x00 definitely not glyf data").expect("can write font");

    let err = text_to_image("Hello world", &config(400, 400, out.path()).with_font_path(corrupt))
        .expect_err("font is corrupt");
    assert_eq!(err.kind(), ErrorKind::BadFont);
    assert!(files_in(out.path()).is_empty());
}

#[test]
fn overflowing_text_is_cut_off() {
    let text = lipsum::lipsum(200);
    let face = FontFace::load(FONT_PATH, FaceOptions::default()).expect("can load font");
    let region = DrawRegion::for_canvas(50, 50);
    let lines = wrap(&text, &face, region.extent.0);
    assert!(lines.len() > 100);
    // "Lorem" alone overflows the two-character estimate, so an empty line leads
    assert!(lines[0].is_empty());

    // only lines whose baseline stays inside the region are drawn
    let baselines: Vec<f32> = (0..)
        .map(|k| region.origin.1 as f32 + k as f32 * face.line_height())
        .take_while(|&y| region.fits_baseline(y))
        .collect();
    assert_eq!(baselines, [5.0, 43.0]);
    assert!(baselines.len() < lines.len());

    let out = tempfile::tempdir().expect("can create temp dir");
    let path = text_to_image(&text, &config(50, 50, out.path())).expect("can render");
    let img = image::open(&path).expect("can decode png").to_rgba8();
    assert_eq!(img.dimensions(), (50, 50));

    let inked: Vec<u32> = (0..50)
        .filter(|&y| (0..50).any(|x| !is_black(img.get_pixel(x, y))))
        .collect();
    assert!(!inked.is_empty());

    // every inked row belongs to the one non-empty line that fits
    let top = (baselines[1] - face.ascent().ceil()) as u32;
    let bottom = (baselines[1] - face.descent().floor()) as u32;
    for y in inked {
        assert!(y >= top && y <= bottom, "row {y} outside the drawn line at {top}..={bottom}");
    }
}

#[test]
fn long_paragraph_fills_a_large_canvas() {
    let text = lipsum::lipsum(300);
    let out = tempfile::tempdir().expect("can create temp dir");
    let path = text_to_image(&text, &config(800, 600, out.path())).expect("can render");
    let img = image::open(&path).expect("can decode png").to_rgba8();

    // ink reaches well below the first line but never the bottom margin's last rows
    let lowest_ink = (0..600)
        .rev()
        .find(|&y| (0..800).any(|x| !is_black(img.get_pixel(x, y))))
        .expect("some ink");
    assert!(lowest_ink > 300);
    assert!(lowest_ink < 600 - 10);
}

#[test]
fn single_pixel_canvas() {
    let out = tempfile::tempdir().expect("can create temp dir");
    let path = text_to_image("Hello world", &config(1, 1, out.path())).expect("can render");
    let img = image::open(&path).expect("can decode png").to_rgba8();
    assert_eq!(img.dimensions(), (1, 1));
}

#[test]
fn repeated_renders_get_distinct_files() {
    let out = tempfile::tempdir().expect("can create temp dir");
    let config = config(64, 64, out.path());
    let a = text_to_image("same", &config).expect("can render");
    let b = text_to_image("same", &config).expect("can render");
    assert_ne!(a, b);
    assert_eq!(std::fs::read(&a).expect("readable"), std::fs::read(&b).expect("readable"));
}
