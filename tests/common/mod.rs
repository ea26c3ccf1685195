use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub fn setup_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let base_path = temp_dir.path().to_path_buf();

    fs::create_dir_all(base_path.join("lists")).unwrap();
    fs::write(
        base_path.join("lists").join("ships.txt"),
        "Sleeper Service\nGrey Area\nZealot\n",
    )
    .unwrap();
    fs::write(base_path.join("lists").join("empty.txt"), "\n\n").unwrap();

    (temp_dir, base_path)
}

pub fn write_config(base_path: &Path, content: &str) -> PathBuf {
    let path = base_path.join("config.yml");
    fs::write(&path, content).unwrap();
    path
}

pub fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_culture-ship"))
        .args(args)
        .output()
        .expect("failed to launch culture-ship")
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(String::from)
        .collect()
}
