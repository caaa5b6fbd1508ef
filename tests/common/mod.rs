use assert_cmd::Command;
use std::path::Path;

pub fn places_cmd() -> Command {
    let mut cmd = Command::cargo_bin("places").unwrap();
    cmd.env_remove("PLACES_ROOT");
    cmd.env_remove("PLACES_LOG");
    cmd
}

/// `places init` into `root`
#[allow(dead_code)]
pub fn init_places(root: &Path) {
    places_cmd().arg("init").arg(root).assert().success();
}

/// `places add` run inside `root`
#[allow(dead_code)]
pub fn add_pin(root: &Path, title: &str, subtitle: &str, lat: &str, lon: &str) {
    places_cmd()
        .current_dir(root)
        .args(["add", title, subtitle, "--lat", lat, "--lon", lon])
        .assert()
        .success();
}
