use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_vanilla(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vanilla"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to launch vanilla")
}

/// Default run: two 4-decimal price lines on stdout, then both sweep charts
#[test]
fn test_default_run_prints_prices_and_writes_charts() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().to_str().unwrap();

    let output = run_vanilla(&["-o", out_dir]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "Call price: 22.9654\nPut price: 6.2048\n");

    for name in ["call_price.svg", "put_price.svg"] {
        let path = dir.path().join(name);
        assert!(path.is_file(), "{} was not written", name);
        assert!(fs::read_to_string(&path).unwrap().contains("<svg"));
    }
}

#[test]
fn test_csv_format_writes_tables() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().to_str().unwrap();

    let output = run_vanilla(&["-o", out_dir, "-f", "csv", "-p", "11"]);

    assert!(output.status.success());
    let table = fs::read_to_string(dir.path().join("put_price.csv")).unwrap();
    // Header plus one row per grid point
    assert_eq!(table.lines().count(), 12);
    assert!(dir.path().join("call_price.csv").is_file());
    assert!(!dir.path().join("call_price.svg").exists());
}

#[test]
fn test_format_none_only_prints() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("charts");

    let output = run_vanilla(&["-o", out_dir.to_str().unwrap(), "-f", "none"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 2);
    assert!(!Path::new(&out_dir).exists());
}

#[test]
fn test_single_point_sweep_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().to_str().unwrap();

    let output = run_vanilla(&["-o", out_dir, "-p", "1"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("points"));
}

#[test]
fn test_invalid_config_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bad.toml");
    fs::write(&config, "[market]\nvolatility = -0.1\n").unwrap();

    let output = run_vanilla(&["-c", config.to_str().unwrap(), "-f", "none"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("volatility"));
}
