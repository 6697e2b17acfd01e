#![allow(deprecated)] // cargo_bin deprecation - still works fine

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::fs::File;

fn cmd() -> Command {
    Command::cargo_bin("academic-dashboard").expect("binary should exist")
}

fn json_for(view: &str) -> Value {
    let output = cmd()
        .args(["--json", "--view", view])
        .output()
        .expect("run binary");
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).expect("valid JSON on stdout")
}

#[test]
fn json_radar_view() {
    let json = json_for("radar");
    assert_eq!(json["view"], "radar");
    assert_eq!(json["chart"]["kind"], "radar-comparison");

    let dataset = json["dataset"].as_array().unwrap();
    assert_eq!(dataset.len(), 4);
    assert!(dataset.iter().all(|p| p["fullMark"] == 140.0));
    assert_eq!(dataset[2]["subject"], "Mathematics");
}

#[test]
fn json_gap_view() {
    let json = json_for("gap");
    let dataset = json["dataset"].as_array().unwrap();
    assert_eq!(dataset.len(), 12);
    let y7 = dataset
        .iter()
        .find(|p| p["subject"] == "Cognitive (Y7)")
        .unwrap();
    assert_eq!(y7["gap"], -2.7);
    assert_eq!(json["chart"]["domain"]["min"], -5.0);
}

#[test]
fn json_maths_view() {
    let json = json_for("maths");
    let first = &json["dataset"][0];
    assert_eq!(first["year"], "Year 3");
    assert_eq!(first["isj"], 96.7);
    assert_eq!(first["isjExpected"], 103.7);
    assert_eq!(json["chart"]["series"][1]["name"], "ISJ Expected");
}

#[test]
fn unknown_view_prints_cognitive() {
    let fallback = json_for("histogram");
    let cognitive = json_for("cognitive");
    assert_eq!(fallback, cognitive);
    assert_eq!(fallback["title"], "Cognitive Ability (CAT4) Comparison");
}

#[test]
fn view_key_is_case_sensitive() {
    let upper = json_for("MATHS");
    assert_eq!(upper["view"], "cognitive");
    assert_eq!(upper, json_for("cognitive"));
}

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

#[test]
fn export_dir_writes_one_png_per_view() {
    let dir = tempfile::tempdir().unwrap();
    cmd()
        .args(["--width", "600", "--height", "400", "--export-dir"])
        .arg(dir.path())
        .assert()
        .success();

    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        ["cognitive.png", "gap.png", "maths.png", "radar.png", "reading.png", "science.png"]
    );

    for name in &names {
        let bytes = fs::read(dir.path().join(name)).unwrap();
        assert!(bytes.starts_with(PNG_SIGNATURE), "{} is not a PNG", name);
    }
}

#[test]
fn report_writes_deck_with_slide_per_view() {
    let dir = tempfile::tempdir().unwrap();
    let deck = dir.path().join("deck.pptx");
    cmd()
        .args(["--width", "600", "--height", "400", "--report"])
        .arg(&deck)
        .assert()
        .success();

    let archive = zip::ZipArchive::new(File::open(&deck).unwrap()).unwrap();
    let names: Vec<&str> = archive.file_names().collect();
    let slides = names
        .iter()
        .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
        .count();
    let images = names
        .iter()
        .filter(|n| n.starts_with("ppt/media/image") && n.ends_with(".png"))
        .count();
    assert_eq!(slides, 7);
    assert_eq!(images, 6);
}

#[test]
fn help_lists_headless_flags() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--export-dir"))
        .stdout(predicate::str::contains("--report"));
}
