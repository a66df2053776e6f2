mod common;

use assert_fs::prelude::*;
use common::{MISSING_PACKAGE_MANAGER, TestContext};
use predicates::prelude::*;

#[test]
fn init_yes_writes_default_config() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["init", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Virtual UI!"))
        .stdout(predicate::str::contains("Virtual UI initialized successfully!"));

    let config = ctx.read_config();
    assert_eq!(config["style"], "default");
    assert_eq!(config["tsx"], true);
    assert_eq!(config["aliases"]["components"], "@/components");
    assert_eq!(config["aliases"]["utils"], "@/lib/utils");
    assert_eq!(config["tailwind"]["css"], "app/globals.css");

    ctx.child("lib/utils.ts").assert(predicate::str::contains("export function cn"));
    ctx.child("components/ui").assert(predicate::path::is_dir());
}

#[test]
fn init_reports_failed_installs_with_manual_command() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["init", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Please install manually: {} install clsx",
            MISSING_PACKAGE_MANAGER
        )))
        .stdout(predicate::str::contains(format!(
            "{} install --save-dev tailwindcss postcss autoprefixer",
            MISSING_PACKAGE_MANAGER
        )))
        .stdout(predicate::str::contains("https://tailwindcss.com/docs/installation"));

    ctx.child("tailwind.config.js").assert(predicate::path::missing());
}

#[test]
fn init_skips_installs_already_declared() {
    let ctx = TestContext::new();
    ctx.child("package.json")
        .write_str(
            r#"{"dependencies":{"clsx":"^2.1.0"},"devDependencies":{"tailwindcss":"^3.4.0"}}"#,
        )
        .unwrap();

    ctx.cli()
        .args(["init", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to install").not());
}

#[test]
fn init_without_package_json_fails() {
    let ctx = TestContext::without_package_json();

    ctx.cli()
        .args(["init", "--yes"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: No package.json found"));

    ctx.child("virtual-ui.json").assert(predicate::path::missing());
}

#[test]
fn init_respects_cwd() {
    let ctx = TestContext::new();

    ctx.cli_in(ctx.root()).args(["init", "--yes", "--cwd", "work"]).assert().success();

    ctx.child("virtual-ui.json").assert(predicate::path::exists());
}

#[test]
fn init_yes_replaces_existing_config_without_prompting() {
    let ctx = TestContext::new();
    ctx.child("virtual-ui.json").write_str(r#"{"aliases":{"components":"@/mine"}}"#).unwrap();

    ctx.cli().args(["init", "--yes"]).assert().success();

    assert_eq!(ctx.read_config()["aliases"]["components"], "@/components");
}

#[test]
fn init_yes_replaces_malformed_config() {
    let ctx = TestContext::new();
    ctx.child("virtual-ui.json").write_str("{ broken").unwrap();

    ctx.cli().args(["init", "--yes"]).assert().success();

    assert_eq!(ctx.read_config()["aliases"]["components"], "@/components");
}
