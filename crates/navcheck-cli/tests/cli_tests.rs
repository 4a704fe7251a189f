//! Exit-status tests for the navcheck binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn navcheck(project: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_navcheck"))
        .arg("--project")
        .arg(project)
        .env("NO_COLOR", "1")
        .output()
        .unwrap()
}

fn site(menu: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/config.yaml", menu);
    write(dir.path(), "src/pages/index.astro", "");
    write(dir.path(), "src/pages/blog/index.astro", "");
    write(dir.path(), "src/pages/blog/[slug].astro", "");
    dir
}

#[test]
fn test_clean_menu_exits_zero() {
    let dir = site("site:\n  menu:\n    - text: Home\n      href: /\n    - text: Post\n      href: /blog/hello\n");
    let output = navcheck(dir.path());

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("All 2 internal menu links resolve"));
}

#[test]
fn test_dangling_link_exits_one() {
    let dir = site("site:\n  menu:\n    - text: Blog\n      href: /blog\n    - text: Missing\n      href: /missing\n");
    let output = navcheck(dir.path());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Missing → /missing"));
    assert!(!String::from_utf8_lossy(&output.stderr).contains("/missing"));
    assert!(stdout.contains("Known routes:"));
    assert!(stdout.contains("[slug].astro"));
}

#[test]
fn test_setup_error_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/pages/index.astro", "");
    let output = navcheck(dir.path());

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("menu configuration not found"));
}
