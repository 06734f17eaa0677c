//! End-to-end tests for the organize pipeline.

use std::fs;
use std::path::Path;

use mediseg::organize::{OrganizeConfig, Organizer};
use tempfile::tempdir;

fn quiet_organizer() -> Organizer {
    Organizer::new(OrganizeConfig {
        quiet: true,
        ..OrganizeConfig::default()
    })
}

fn dir_entries(path: &Path) -> Vec<String> {
    if !path.exists() {
        return Vec::new();
    }
    let mut names: Vec<String> = fs::read_dir(path)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_basic_routing_by_extension() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    fs::write(src.path().join("photo.jpg"), b"image bytes").unwrap();
    fs::write(src.path().join("clip.mp4"), b"video bytes!").unwrap();
    fs::write(src.path().join("notes.txt"), b"text bytes!!").unwrap();

    let summary = quiet_organizer()
        .organize(src.path(), dest.path())
        .unwrap();

    assert_eq!(summary.processed, 3);
    assert_eq!(summary.duplicates, 0);
    assert_eq!(dir_entries(&dest.path().join("images")), vec!["photo.jpg"]);
    assert_eq!(dir_entries(&dest.path().join("videos")), vec!["clip.mp4"]);
    assert_eq!(dir_entries(&dest.path().join("others")), vec!["notes.txt"]);
}

#[test]
fn test_uppercase_extension_routes_to_images() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    fs::write(src.path().join("IMG.JPG"), b"shouty image").unwrap();

    quiet_organizer().organize(src.path(), dest.path()).unwrap();

    assert_eq!(dir_entries(&dest.path().join("images")), vec!["IMG.JPG"]);
}

#[test]
fn test_flattens_source_structure() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    let nested = src.path().join("2024").join("summer");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("beach.png"), b"pixels").unwrap();

    quiet_organizer().organize(src.path(), dest.path()).unwrap();

    // The copy lands flat in images/, not under 2024/summer/.
    assert_eq!(dir_entries(&dest.path().join("images")), vec!["beach.png"]);
}

#[test]
fn test_duplicate_content_copied_once() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    // Same size, same content, different names and even different buckets:
    // dedup is content-based regardless of category.
    fs::write(src.path().join("a.jpg"), b"identical 500b stand-in").unwrap();
    fs::write(src.path().join("b.png"), b"identical 500b stand-in").unwrap();

    let summary = quiet_organizer()
        .organize(src.path(), dest.path())
        .unwrap();

    assert_eq!(summary.processed, 1);
    assert_eq!(summary.duplicates, 1);
    // First-seen order is alphabetical (sorted walk), so a.jpg wins.
    assert_eq!(dir_entries(&dest.path().join("images")), vec!["a.jpg"]);
}

#[test]
fn test_same_size_different_content_both_copied() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    fs::write(src.path().join("a.jpg"), b"content X pad").unwrap();
    fs::write(src.path().join("b.png"), b"content X pad").unwrap();
    fs::write(src.path().join("c.mp4"), b"content Y pad").unwrap();

    let summary = quiet_organizer()
        .organize(src.path(), dest.path())
        .unwrap();

    // b.png duplicates a.jpg; c.mp4 shares their size but not their
    // content, so it is copied to videos/.
    assert_eq!(summary.processed, 2);
    assert_eq!(summary.duplicates, 1);
    assert_eq!(dir_entries(&dest.path().join("images")), vec!["a.jpg"]);
    assert_eq!(dir_entries(&dest.path().join("videos")), vec!["c.mp4"]);
}

#[test]
fn test_distinct_sizes_never_deduplicated() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    fs::write(src.path().join("one.txt"), b"a").unwrap();
    fs::write(src.path().join("two.txt"), b"aa").unwrap();
    fs::write(src.path().join("three.txt"), b"aaa").unwrap();

    let summary = quiet_organizer()
        .organize(src.path(), dest.path())
        .unwrap();

    assert_eq!(summary.processed, 3);
    assert_eq!(summary.duplicates, 0);
}

#[test]
fn test_zero_byte_files_deduplicate() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    fs::write(src.path().join("empty1.jpg"), b"").unwrap();
    fs::write(src.path().join("empty2.txt"), b"").unwrap();

    let summary = quiet_organizer()
        .organize(src.path(), dest.path())
        .unwrap();

    assert_eq!(summary.processed, 1);
    assert_eq!(summary.duplicates, 1);
    assert_eq!(dir_entries(&dest.path().join("images")), vec!["empty1.jpg"]);
    assert!(dir_entries(&dest.path().join("others")).is_empty());
}

#[test]
fn test_sentinel_files_ignored() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    let empty_dir = src.path().join("placeholder");
    fs::create_dir_all(&empty_dir).unwrap();
    fs::write(empty_dir.join(".gitkeep"), b"").unwrap();
    fs::write(src.path().join("real.jpg"), b"pixels").unwrap();

    let summary = quiet_organizer()
        .organize(src.path(), dest.path())
        .unwrap();

    assert_eq!(summary.processed, 1);
    assert_eq!(dir_entries(&dest.path().join("others")), Vec::<String>::new());
}

#[test]
fn test_existing_destination_file_gets_suffix() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    let images = dest.path().join("images");
    fs::create_dir_all(&images).unwrap();
    fs::write(images.join("photo.jpg"), b"previous run leftovers").unwrap();
    fs::write(src.path().join("photo.jpg"), b"new shot").unwrap();

    quiet_organizer().organize(src.path(), dest.path()).unwrap();

    assert_eq!(
        dir_entries(&images),
        vec!["photo.jpg", "photo_1.jpg"]
    );
    assert_eq!(fs::read(images.join("photo_1.jpg")).unwrap(), b"new shot");
}

#[test]
fn test_rerun_never_overwrites() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    fs::write(src.path().join("photo.jpg"), b"shot one").unwrap();
    fs::write(src.path().join("clip.mp4"), b"clip bytes").unwrap();

    let organizer = quiet_organizer();
    organizer.organize(src.path(), dest.path()).unwrap();
    // The index is per run, so the second run copies everything again,
    // landing as suffixed names instead of overwriting.
    organizer.organize(src.path(), dest.path()).unwrap();

    assert_eq!(
        dir_entries(&dest.path().join("images")),
        vec!["photo.jpg", "photo_1.jpg"]
    );
    assert_eq!(
        dir_entries(&dest.path().join("videos")),
        vec!["clip.mp4", "clip_1.mp4"]
    );
}

#[test]
fn test_file_without_extension_goes_to_others() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    fs::write(src.path().join("README"), b"plain").unwrap();

    quiet_organizer().organize(src.path(), dest.path()).unwrap();

    assert_eq!(dir_entries(&dest.path().join("others")), vec!["README"]);
}

#[test]
fn test_empty_source_tree() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();

    let summary = quiet_organizer()
        .organize(src.path(), dest.path())
        .unwrap();

    assert_eq!(summary.processed, 0);
    // No buckets are created until a file is routed into them.
    assert!(!dest.path().join("images").exists());
    assert!(!dest.path().join("videos").exists());
    assert!(!dest.path().join("others").exists());
}
