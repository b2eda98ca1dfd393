//! End-to-end tests for the render and extract pipelines
//!
//! These drive the library batches against a temp directory and check the
//! artifact tree the game loads at runtime.

use image::Rgba;
use retrosprite::batch::{Artifacts, ExtractBatch, RenderBatch};
use retrosprite::character::{self, Source, EXTRACT_TABLE};
use retrosprite::compositor::Canvas;
use retrosprite::config::{default_config, RspriteConfig};
use retrosprite::output::save_png;
use retrosprite::recolor::{LinearShift, Recolor, SaturationSplit};
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

fn config(out: &Path, source: Source) -> RspriteConfig {
    let mut config = default_config();
    config.project.out = out.to_path_buf();
    config.render.source = source;
    config.render.jobs = 2;
    config
}

fn open(path: &Path) -> Canvas {
    image::open(path).unwrap_or_else(|e| panic!("{}: {}", path.display(), e)).to_rgba8()
}

#[test]
fn test_dense_render_writes_full_tree() {
    let out = TempDir::new().unwrap();
    let result = RenderBatch::from_config(&config(out.path(), Source::Rows)).unwrap().run().unwrap();
    assert!(result.is_success(), "{}", result.summary());

    // 26 frames + 7 strips + 1 sheet per skin, plus the projectile
    assert_eq!(result.success_count(), 3 * 34 + 1);

    for variant in ["white", "pink", "rainbow"] {
        let dir = out.path().join(variant);
        assert!(dir.join("idle_0.png").exists());
        assert!(dir.join("death_2.png").exists());
        assert!(!dir.join("death_3.png").exists());
        assert!(dir.join("strips/run.png").exists());
        assert!(dir.join(format!("{}_sheet.png", variant)).exists());
        assert!(dir.join(format!("{}_sheet.json", variant)).exists());
    }
    assert!(out.path().join("projectile.png").exists());
}

#[test]
fn test_white_idle_horn_is_gold_at_every_size() {
    let out = TempDir::new().unwrap();
    let config = config(out.path(), Source::Rows);
    RenderBatch::from_config(&config)
        .unwrap()
        .with_artifacts(Artifacts { projectile: false, ..Default::default() })
        .run()
        .unwrap();

    let gold = Rgba([255, 215, 0, 255]);

    // per-frame PNGs are scaled x4
    let frame = open(&out.path().join("white/idle_0.png"));
    assert_eq!(frame.dimensions(), (128, 128));
    for dy in 0..4 {
        for dx in 0..4 {
            assert_eq!(*frame.get_pixel(48 + dx, 16 + dy), gold);
        }
    }

    // sheets stay at native size
    let sheet = open(&out.path().join("white/white_sheet.png"));
    assert_eq!(sheet.dimensions(), (6 * 32, 7 * 32));
    assert_eq!(*sheet.get_pixel(12, 4), gold);

    let strip = open(&out.path().join("white/strips/idle.png"));
    assert_eq!(strip.dimensions(), (4 * 32, 32));
    assert_eq!(*strip.get_pixel(12, 4), gold);
}

#[test]
fn test_sparse_sheet_index_matches_layout() {
    let out = TempDir::new().unwrap();
    let mut config = config(out.path(), Source::Sparse);
    config.render.variants = vec!["rainbow".to_string()];
    RenderBatch::from_config(&config)
        .unwrap()
        .with_artifacts(Artifacts { frames: false, strips: false, sheet: true, projectile: false })
        .run()
        .unwrap();

    let json = std::fs::read_to_string(out.path().join("rainbow/rainbow_sheet.json")).unwrap();
    let index: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(index["image"], "rainbow_sheet.png");
    assert_eq!(index["frame_size"], serde_json::json!([32, 32]));
    assert_eq!(index["size"], serde_json::json!([6 * 32, 8 * 32]));

    let animations = index["animations"].as_array().unwrap();
    let names: Vec<&str> = animations.iter().map(|a| a["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["idle", "run", "jump", "fall", "attack", "shoot", "hit", "death"]);

    let death = &animations[7];
    assert_eq!(death["row"], 7);
    assert_eq!(death["frames"].as_array().unwrap().len(), 5);
    assert_eq!(death["frames"][4]["x"], 128);
    assert_eq!(death["frames"][4]["y"], 224);
}

#[test]
fn test_sparse_derived_sheets_are_recolored_master() {
    let out = TempDir::new().unwrap();
    let mut config = config(out.path(), Source::Sparse);
    config.render.variants = vec!["rainbow".to_string(), "pink".to_string(), "white".to_string()];
    RenderBatch::from_config(&config)
        .unwrap()
        .with_artifacts(Artifacts { frames: false, strips: false, sheet: true, projectile: false })
        .run()
        .unwrap();

    let master = open(&out.path().join("rainbow/rainbow_sheet.png"));
    let mut opaque = 0;
    for (name, transform) in [
        ("pink", Recolor::Linear(LinearShift::PINK)),
        ("white", Recolor::Saturation(SaturationSplit::WHITE)),
    ] {
        let sheet = open(&out.path().join(format!("{0}/{0}_sheet.png", name)));
        assert_eq!(master.dimensions(), sheet.dimensions());
        for (x, y, pixel) in master.enumerate_pixels() {
            let expected = transform.apply_pixel(*pixel);
            assert_eq!(*sheet.get_pixel(x, y), expected, "{} pixel ({}, {})", name, x, y);
            if pixel[3] > 0 {
                opaque += 1;
            }
        }
    }
    assert!(opaque > 0);
}

#[test]
fn test_palette_override_from_config() {
    let out = TempDir::new().unwrap();
    let mut config = config(out.path(), Source::Rows);
    config.render.variants = vec!["white".to_string()];
    let toml = r##"
[variants.white.palette]
h = "#00FF00"
"##;
    let overrides: RspriteConfig =
        toml::from_str(&format!("[project]\nname = \"t\"\n{}", toml)).unwrap();
    config.variants = overrides.variants;

    RenderBatch::from_config(&config)
        .unwrap()
        .with_artifacts(Artifacts { frames: false, strips: false, sheet: true, projectile: false })
        .run()
        .unwrap();

    let sheet = open(&out.path().join("white/white_sheet.png"));
    assert_eq!(*sheet.get_pixel(12, 4), Rgba([0, 255, 0, 255]));
}

#[test]
fn test_extract_full_table_with_missing_strip() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    // every strip but "jump"
    for spec in EXTRACT_TABLE.iter().filter(|s| s.stem != "jump") {
        let width = spec.frames as u32 * 8;
        let strip = Canvas::from_fn(width, 8, |x, y| {
            if x % 8 == 1 && y == 2 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        });
        save_png(&strip, &src.path().join(spec.file_name())).unwrap();
    }

    let result = ExtractBatch::new(src.path(), out.path()).run().unwrap();
    assert!(result.is_success(), "{}", result.summary());
    assert_eq!(result.skipped_count(), 1);

    let jump = EXTRACT_TABLE.iter().find(|s| s.stem == "jump").unwrap();
    let written: usize = EXTRACT_TABLE.iter().map(|s| s.frames).sum::<usize>() - jump.frames;
    assert_eq!(result.success_count(), written * character::VARIANT_NAMES.len());

    // hurt is read from unicorn_hit.png, scaled x3
    let hurt = open(&out.path().join("rainbow/hurt_0.png"));
    assert_eq!(hurt.dimensions(), (24, 24));
    assert_eq!(*hurt.get_pixel(3, 6), Rgba([255, 0, 0, 255]));
    assert_eq!(*hurt.get_pixel(0, 0), Rgba([0, 0, 0, 0]));

    let pink = open(&out.path().join("pink/hurt_0.png"));
    assert_eq!(*pink.get_pixel(3, 6), Recolor::Linear(LinearShift::PINK).apply_pixel(Rgba([255, 0, 0, 255])));
    assert!(!out.path().join("white/jump_0.png").exists());
}
