// main.rsとエントリーポイントのテスト
use std::path::PathBuf;
use std::process::Command;

fn get_binary_path() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    if path.ends_with("deps") {
        path.pop(); // remove deps directory
    }
    path.join("dispatch_bench")
}

#[test]
fn test_cli_list() {
    let binary_path = get_binary_path();
    if !binary_path.exists() {
        println!("Skipping CLI test - binary not found");
        return;
    }

    let output = Command::new(&binary_path)
        .arg("--list")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 14);
    assert!(lines[0].starts_with("baseline/primitive_arithmetic"));
    assert!(stdout.contains("erased/field_misleading (MISLEADING)"));
}

#[test]
fn test_cli_small_run() {
    let binary_path = get_binary_path();
    if !binary_path.exists() {
        println!("Skipping CLI test - binary not found");
        return;
    }

    let output = Command::new(&binary_path)
        .args(["--inner-loop", "10", "--samples", "1", "--filter", "split", "--log-level", "error"])
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("split/erased_vs_direct"));
}

#[test]
fn test_cli_rejects_zero_pool() {
    let binary_path = get_binary_path();
    if !binary_path.exists() {
        println!("Skipping CLI test - binary not found");
        return;
    }

    let output = Command::new(&binary_path)
        .args(["--pool-len", "0", "--log-level", "error"])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
}
