//! End-to-end runs of the fixture builder against local source files.

use std::fs;
use std::path::{Path, PathBuf};

use iris_fixture::data::loader::Source;
use iris_fixture::{build, FixtureConfig, FixtureError};
use rstest::rstest;
use tempfile::{tempdir, TempDir};

const SCENARIO: &str = "\
5.1,3.5,1.4,0.2,Iris-setosa
6.3,3.3,6.0,2.5,Iris-virginica
5.0,3.6,1.4,0.2,Iris-setosa
6.1,2.6,5.6,1.4,Iris-virginica
4.9,3.0,1.4,0.2,Iris-setosa

";

fn config_for(dir: &TempDir, source_text: &str) -> FixtureConfig {
    let source = dir.path().join("iris.data");
    fs::write(&source, source_text).unwrap();
    FixtureConfig {
        source: Source::Path(source),
        output_path: dir.path().join("fixture.csv"),
        ..FixtureConfig::default()
    }
}

fn data_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .skip(1)
        .map(str::to_string)
        .collect()
}

#[test]
fn scenario_orders_class_a_before_class_b() {
    let dir = tempdir().unwrap();
    let config = config_for(&dir, SCENARIO);

    let summary = build(&config).unwrap();
    assert_eq!(summary.total_rows(), 5);
    assert_eq!(
        summary.per_class,
        vec![
            ("Iris-setosa".to_string(), 0, 3),
            ("Iris-virginica".to_string(), 1, 2)
        ]
    );

    let text = fs::read_to_string(&config.output_path).unwrap();
    assert_eq!(
        text,
        "sepal-length,sepal-width,class\n\
         5.1,3.5,0\n\
         5.0,3.6,0\n\
         4.9,3.0,0\n\
         6.3,3.3,1\n\
         6.1,2.6,1\n"
    );
}

#[test]
fn drops_third_class_and_counts_match() {
    let dir = tempdir().unwrap();
    let source = format!(
        "{SCENARIO}7.0,3.2,4.7,1.4,Iris-versicolor\n6.4,3.2,4.5,1.5,Iris-versicolor\n"
    );
    let config = config_for(&dir, &source);

    build(&config).unwrap();
    let lines = data_lines(&config.output_path);
    assert_eq!(lines.len(), 5);
    for line in &lines {
        let class = line.rsplit(',').next().unwrap();
        assert!(class == "0" || class == "1", "unexpected class in {line}");
    }
}

#[test]
fn header_has_no_index_column() {
    let dir = tempdir().unwrap();
    let config = config_for(&dir, SCENARIO);
    build(&config).unwrap();

    let text = fs::read_to_string(&config.output_path).unwrap();
    assert_eq!(text.lines().next(), Some("sepal-length,sepal-width,class"));
    assert!(text.lines().all(|l| l.split(',').count() == 3));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = tempdir().unwrap();
    let config = config_for(&dir, SCENARIO);

    build(&config).unwrap();
    let first = fs::read(&config.output_path).unwrap();
    build(&config).unwrap();
    let second = fs::read(&config.output_path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn existing_output_is_overwritten() {
    let dir = tempdir().unwrap();
    let config = config_for(&dir, SCENARIO);
    fs::write(&config.output_path, "stale contents that are longer than the fixture itself\n".repeat(20)).unwrap();

    build(&config).unwrap();
    assert_eq!(data_lines(&config.output_path).len(), 5);
}

#[rstest]
#[case::four_fields("5.1,3.5,1.4,Iris-setosa\n")]
#[case::six_fields("5.1,3.5,1.4,0.2,0.1,Iris-setosa\n")]
#[case::text_measurement("5.1,n/a,1.4,0.2,Iris-setosa\n")]
fn malformed_source_is_a_parse_error(#[case] source: &str) {
    let dir = tempdir().unwrap();
    let config = config_for(&dir, source);

    let err = build(&config).unwrap_err();
    assert!(matches!(err, FixtureError::Parse { .. }), "{err:?}");
    assert!(!config.output_path.exists());
}

#[test]
fn missing_source_is_unavailable() {
    let dir = tempdir().unwrap();
    let config = FixtureConfig {
        source: Source::Path(dir.path().join("absent.data")),
        output_path: dir.path().join("fixture.csv"),
        ..FixtureConfig::default()
    };

    let err = build(&config).unwrap_err();
    assert!(matches!(err, FixtureError::SourceUnavailable { .. }), "{err:?}");
}

#[test]
fn unwritable_output_is_a_write_error() {
    let dir = tempdir().unwrap();
    let config = FixtureConfig {
        output_path: PathBuf::from(dir.path()).join("no-such-dir").join("fixture.csv"),
        ..config_for(&dir, SCENARIO)
    };

    let err = build(&config).unwrap_err();
    assert!(matches!(err, FixtureError::Write { .. }), "{err:?}");
}
