use assert_cmd::Command;
use std::f64::consts::PI;
use std::fs;
use std::io::Write;

fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".dat").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Two-column table: time, cos(2π·3·t/16) sampled at step 0.5.
fn cosine_table(len: usize) -> String {
    let mut text = String::from("# t value\n");
    for i in 0..len {
        let v = (2.0 * PI * 3.0 * i as f64 / 16.0).cos();
        text.push_str(&format!("{} {}\n", i as f64 * 0.5, v));
    }
    text
}

fn parse_rows(text: &str) -> Vec<Vec<f64>> {
    text.lines()
        .filter(|l| !l.starts_with('#'))
        .map(|l| l.split_whitespace().map(|f| f.parse().unwrap()).collect())
        .collect()
}

#[test]
fn transform_writes_half_spectrum() {
    let input = write_fixture(&cosine_table(16));
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("spectrum.dat");
    Command::cargo_bin("dftkit")
        .unwrap()
        .args(["transform", "--col", "2", "--step", "0.5", "--infile"])
        .arg(input.path())
        .arg("--outfile")
        .arg(&out)
        .assert()
        .success();

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("# Format: freq x.real x.imag y.real y.imag"));
    let rows = parse_rows(&text);
    assert_eq!(rows.len(), 7);
    let peak = rows
        .iter()
        .max_by(|a, b| a[3].partial_cmp(&b[3]).unwrap())
        .unwrap();
    // bin 3 of 16 at step 0.5
    assert!((peak[0] - 3.0 / 8.0).abs() < 1e-12);
    assert!((peak[3] - 0.5).abs() < 1e-9);
}

#[test]
fn algorithms_agree_on_output() {
    let input = write_fixture(&cosine_table(32));
    let mut outputs = Vec::new();
    for alg in ["fast", "single-stage", "discrete"] {
        let assert = Command::cargo_bin("dftkit")
            .unwrap()
            .args(["transform", "--col", "2", "--alg", alg, "--infile"])
            .arg(input.path())
            .assert()
            .success();
        outputs.push(parse_rows(&String::from_utf8_lossy(
            &assert.get_output().stdout,
        )));
    }
    for other in &outputs[1..] {
        assert_eq!(other.len(), outputs[0].len());
        for (a, b) in other.iter().zip(outputs[0].iter()) {
            for (x, y) in a.iter().zip(b.iter()) {
                assert!((x - y).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn non_power_of_two_target_warns_and_pads() {
    let input = write_fixture(&cosine_table(40));
    let assert = Command::cargo_bin("dftkit")
        .unwrap()
        .env("RUST_LOG", "warn")
        .args(["transform", "--col", "2", "-n", "20", "--infile"])
        .arg(input.path())
        .assert()
        .success();
    let output = assert.get_output();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not a power of 2"), "stderr: {}", stderr);
    // padded to 32 -> bins 1..16
    assert_eq!(parse_rows(&String::from_utf8_lossy(&output.stdout)).len(), 15);
}

#[test]
fn round_down_ignores_size() {
    let input = write_fixture(&cosine_table(40));
    let assert = Command::cargo_bin("dftkit")
        .unwrap()
        .env("RUST_LOG", "warn")
        .args(["transform", "--col", "2", "--round-size", "down", "-n", "8", "--infile"])
        .arg(input.path())
        .assert()
        .success();
    let output = assert.get_output();
    assert!(String::from_utf8_lossy(&output.stderr).contains("ignored"));
    assert_eq!(parse_rows(&String::from_utf8_lossy(&output.stdout)).len(), 15);
}

#[test]
fn missing_input_fails() {
    Command::cargo_bin("dftkit")
        .unwrap()
        .args(["transform", "--infile", "/nonexistent/input.dat"])
        .assert()
        .failure();
}

#[test]
fn empty_input_fails() {
    let input = write_fixture("# nothing here\n");
    Command::cargo_bin("dftkit")
        .unwrap()
        .args(["transform", "--infile"])
        .arg(input.path())
        .assert()
        .failure();
}

#[test]
fn smooth_prints_table() {
    let input = write_fixture("0 0\n1 3\n2 6\n3 9\n");
    let assert = Command::cargo_bin("dftkit")
        .unwrap()
        .args(["smooth", "--points", "3", "--column", "1"])
        .arg(input.path())
        .assert()
        .success();
    assert_eq!(
        String::from_utf8_lossy(&assert.get_output().stdout),
        "0 1.5\n1 3\n2 6\n3 7.5\n"
    );
}

#[test]
fn smooth_rejects_even_window() {
    let input = write_fixture("0 0\n1 3\n");
    Command::cargo_bin("dftkit")
        .unwrap()
        .args(["smooth", "--points", "4", "--column", "1"])
        .arg(input.path())
        .assert()
        .failure();
}
