#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// `bn` with its state directory pointed at `home`.
pub fn bn(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bn"));
    cmd.env("BN_HOME", home);
    cmd
}

pub fn write_config(home: &Path, toml: &str) {
    fs::create_dir_all(home).unwrap();
    fs::write(home.join("config.toml"), toml).unwrap();
}

#[cfg(unix)]
pub fn write_executable(dir: &Path, name: &str, script: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, script).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}
