use assert_cmd::Command;
use geotrip_test_utils::{json_equivalent, samples, DocumentGenerator, FeatureBuilder};
use predicates::prelude::*;
use serde_json::{json, Value};
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

struct SampleFile {
    _dir: TempDir,
    path: PathBuf,
}

fn write_sample(contents: &str) -> Result<SampleFile, Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("input.geojson");
    fs::write(&path, contents)?;
    Ok(SampleFile { _dir: dir, path })
}

fn geotrip() -> Result<Command, Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("geotrip")?;
    cmd.env_remove("GEOTRIP_LOG");
    Ok(cmd)
}

#[test]
fn point_from_stdin_minified() -> Result<(), Box<dyn Error>> {
    geotrip()?
        .arg("-")
        .write_stdin(r#"{ "type": "Point", "coordinates": [1, 2] }"#)
        .assert()
        .success()
        .stdout("{\"type\":\"Point\",\"coordinates\":[1,2]}\n")
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn file_input_round_trips() -> Result<(), Box<dyn Error>> {
    let sample = write_sample(samples::FEATURE_COLLECTION)?;
    let output = geotrip()?
        .arg(sample.path.to_str().unwrap())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let reparsed: Value = serde_json::from_slice(&output)?;
    let original: Value = serde_json::from_str(samples::FEATURE_COLLECTION)?;
    assert!(json_equivalent(&reparsed, &original));
    assert_eq!(String::from_utf8(output)?.lines().count(), 1);
    Ok(())
}

#[test]
fn indent_format() -> Result<(), Box<dyn Error>> {
    geotrip()?
        .args(["-", "--format", "indent"])
        .write_stdin(r#"{"type":"Point","coordinates":[1,2]}"#)
        .assert()
        .success()
        .stdout("{\n  \"type\": \"Point\",\n  \"coordinates\": [\n    1,\n    2\n  ]\n}\n");

    geotrip()?
        .args(["-f", "minify", "-"])
        .write_stdin(r#"{"type":"Point","coordinates":[1,2]}"#)
        .assert()
        .success()
        .stdout("{\"type\":\"Point\",\"coordinates\":[1,2]}\n");
    Ok(())
}

#[test]
fn invalid_format_is_a_usage_error() -> Result<(), Box<dyn Error>> {
    geotrip()?
        .args(["-", "--format", "pretty"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn unknown_type_fails_with_single_line() -> Result<(), Box<dyn Error>> {
    geotrip()?
        .arg("-")
        .write_stdin(r#"{"type":"Blob","coordinates":[0,0]}"#)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("Error: unknown GeoJSON type \"Blob\"\n");
    Ok(())
}

#[test]
fn locs_adds_paths() -> Result<(), Box<dyn Error>> {
    let input = DocumentGenerator::collection(vec![FeatureBuilder::new()
        .geometry(json!({"type": "Point", "coordinates": [1, "2"]}))
        .build()])
    .to_string();

    geotrip()?
        .arg("-")
        .write_stdin(input.clone())
        .assert()
        .code(1)
        .stderr("Error: expected a number, found string\n");

    geotrip()?
        .args(["-", "--locs"])
        .write_stdin(input)
        .assert()
        .code(1)
        .stderr("Error: expected a number, found string at /features/0/geometry/coordinates/1\n");
    Ok(())
}

#[test]
fn malformed_json_reports_location_with_locs() -> Result<(), Box<dyn Error>> {
    geotrip()?
        .args(["-", "-l"])
        .write_stdin("{\"type\": \"Point\",\n \"coordinates\": [1, 2,]}")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: malformed JSON: "))
        .stderr(predicate::str::contains("line 2, column"));
    Ok(())
}

#[test]
fn missing_file_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let missing = dir.path().join("absent.geojson");
    geotrip()?
        .arg(missing.to_str().unwrap())
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: I/O error:"))
        .stderr(predicate::str::contains("absent.geojson"));
    Ok(())
}

#[test]
fn unknown_members_survive_the_trip() -> Result<(), Box<dyn Error>> {
    let input = json!({
        "type": "Feature",
        "id": 7,
        "geometry": null,
        "properties": {"name": "x"},
        "links": [{"rel": "self"}]
    });
    let output = geotrip()?
        .arg("-")
        .write_stdin(input.to_string())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let reparsed: Value = serde_json::from_slice(&output)?;
    assert_eq!(reparsed, input);
    Ok(())
}

#[test]
fn length_checks_are_opt_in() -> Result<(), Box<dyn Error>> {
    let short = r#"{"type":"Point","coordinates":[1]}"#;
    geotrip()?.arg("-").write_stdin(short).assert().success();
    geotrip()?
        .args(["-", "--check-lengths"])
        .write_stdin(short)
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: "));
    Ok(())
}

#[test]
fn debug_logging_goes_to_stderr() -> Result<(), Box<dyn Error>> {
    geotrip()?
        .arg("-")
        .env("GEOTRIP_LOG", "debug")
        .write_stdin(r#"{"type":"Point","coordinates":[1,2]}"#)
        .assert()
        .success()
        .stdout("{\"type\":\"Point\",\"coordinates\":[1,2]}\n")
        .stderr(predicate::str::contains("trip complete"));
    Ok(())
}
