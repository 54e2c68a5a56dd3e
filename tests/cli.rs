use assert_cmd::Command;
use cairo::ImageSurface;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn sdn_diagrams_cmd(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sdn-diagrams").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd
}

fn png_size(path: &Path) -> (i32, i32) {
    let mut file = std::fs::File::open(path).unwrap();
    let image = ImageSurface::create_from_png(&mut file).expect("valid PNG");
    (image.width(), image.height())
}

#[test]
fn help_prints_usage() {
    let temp = TempDir::new().unwrap();
    sdn_diagrams_cmd(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Renders the SDN architecture and mobile agent framework figures to PNG",
        ));
}

#[test]
fn renders_both_figures_into_output_dir() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("diagrams");
    std::fs::create_dir(&out).unwrap();

    sdn_diagrams_cmd(temp.path())
        .arg("--output-dir")
        .arg(&out)
        .args(["--dpi", "40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mobile_agent_framework.png"))
        .stdout(predicate::str::contains("sdn_architecture.png"));

    for name in ["mobile_agent_framework.png", "sdn_architecture.png"] {
        let (width, height) = png_size(&out.join(name));
        assert!(width > 0 && height > 0, "{name}");
    }
}

#[test]
fn figure_flag_selects_a_single_figure() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("diagrams");
    std::fs::create_dir(&out).unwrap();

    sdn_diagrams_cmd(temp.path())
        .arg("--output-dir")
        .arg(&out)
        .args(["--dpi", "40", "--no-tight", "--figure", "sdn-architecture"])
        .assert()
        .success();

    assert_eq!(png_size(&out.join("sdn_architecture.png")), (400, 320));
    assert!(!out.join("mobile_agent_framework.png").exists());
}

#[test]
fn config_file_controls_output() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("figures");
    std::fs::create_dir(&out).unwrap();
    let config = temp.path().join("custom.toml");
    std::fs::write(
        &config,
        format!(
            "[output]\ndirectory = {:?}\ndpi = 60.0\nbbox = \"figure\"\n",
            out.display().to_string()
        ),
    )
    .unwrap();

    sdn_diagrams_cmd(temp.path())
        .arg("--config")
        .arg(&config)
        .args(["--figure", "mobile-agent-framework"])
        .assert()
        .success();

    assert_eq!(png_size(&out.join("mobile_agent_framework.png")), (720, 540));
}

#[test]
fn missing_output_dir_fails_with_io_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing");

    sdn_diagrams_cmd(temp.path())
        .arg("--output-dir")
        .arg(&missing)
        .args(["--dpi", "36"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write"));

    assert!(!missing.exists());
}

#[test]
fn malformed_config_is_reported() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("broken.toml");
    std::fs::write(&config, "[output\n").unwrap();

    sdn_diagrams_cmd(temp.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}
