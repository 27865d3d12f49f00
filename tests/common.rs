#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rslotboard::config::Config;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsb() -> Command {
    cargo_bin_cmd!("rslotboard")
}

/// Plain config used by library-level tests.
pub fn plain_config() -> Config {
    Config {
        color: false,
        ..Config::default()
    }
}

/// Create a temporary file path inside the system temp dir and ensure it's removed
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rslotboard.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// Write a script file for `run --script` and return its path
pub fn write_script(name: &str, lines: &[&str]) -> PathBuf {
    let path = temp_path(name, "slots");
    fs::write(&path, lines.join("\n")).expect("write script");
    path
}
