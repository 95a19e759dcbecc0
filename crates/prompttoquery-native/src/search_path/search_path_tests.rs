#![allow(non_snake_case)]

use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn SearchPath___existing___filters_missing_directories() {
    let temp = TempDir::new().unwrap();
    let present = temp.path().join("build");
    fs::create_dir(&present).unwrap();
    let missing = temp.path().join("pkg").join("lib");

    let search = SearchPath::from_dirs([missing, present.clone()]);

    assert_eq!(search.existing(), vec![present]);
}

#[test]
fn SearchPath___existing___preserves_priority_order() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("first");
    let second = temp.path().join("second");
    fs::create_dir(&first).unwrap();
    fs::create_dir(&second).unwrap();

    let search = SearchPath::from_dirs([second.clone(), first.clone()]);

    assert_eq!(search.existing(), vec![second, first]);
}

#[test]
fn SearchPath___existing___reevaluated_on_every_call() {
    let temp = TempDir::new().unwrap();
    let late = temp.path().join("late");
    let search = SearchPath::from_dirs([late.clone()]);

    assert!(search.existing().is_empty());

    fs::create_dir(&late).unwrap();

    assert_eq!(search.existing(), vec![late]);
}

#[test]
fn SearchPath___existing___regular_file_is_not_a_directory() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("not-a-dir");
    fs::write(&file, b"").unwrap();

    let search = SearchPath::from_dirs([file]);

    assert!(search.existing().is_empty());
}

#[test]
fn SearchPath___standard___ends_with_working_directory() {
    let search = SearchPath::standard();

    let candidates = search.candidates();

    assert_eq!(candidates.len(), 3);
    assert_eq!(candidates.last(), std::env::current_dir().ok().as_ref());
    assert!(candidates[0].ends_with("lib"));
    assert!(candidates[1].ends_with("core/build"));
}
