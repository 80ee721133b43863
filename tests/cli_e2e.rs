use assert_cmd::Command;
use predicates::prelude::*;
use prodz::model::Product;
use std::path::Path;

fn prodz(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("prodz").unwrap();
    cmd.current_dir(dir);
    cmd
}

fn add_product(dir: &Path, title: &str, code: &str) {
    let description = format!("{} description", title);
    prodz(dir)
        .args([
            "add",
            "--title",
            title,
            "--description",
            description.as_str(),
            "--price",
            "10",
            "--thumbnail",
            "t",
            "--code",
            code,
            "--stock",
            "5",
        ])
        .assert()
        .success();
}

fn read_catalog(dir: &Path) -> Vec<Product> {
    let content = std::fs::read_to_string(dir.join(".prodz").join("products.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_init_creates_empty_store() {
    let temp_dir = tempfile::tempdir().unwrap();

    prodz(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized product store"));

    assert!(read_catalog(temp_dir.path()).is_empty());
}

#[test]
fn test_add_list_delete_roundtrip() {
    let temp_dir = tempfile::tempdir().unwrap();

    // A fresh store starts out empty
    prodz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found."));

    prodz(temp_dir.path())
        .args([
            "add",
            "--title",
            "p1",
            "--description",
            "d1",
            "--price",
            "10",
            "--thumbnail",
            "t",
            "--code",
            "c1",
            "--stock",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product added (1): p1"));

    let catalog = read_catalog(temp_dir.path());
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].id, 1);
    assert_eq!(catalog[0].title, "p1");
    assert_eq!(catalog[0].description, "d1");
    assert_eq!(catalog[0].price, 10.0);
    assert_eq!(catalog[0].code, "c1");
    assert_eq!(catalog[0].stock, 5);

    prodz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. p1"));

    prodz(temp_dir.path())
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product deleted (1): p1"));

    assert!(read_catalog(temp_dir.path()).is_empty());
}

#[test]
fn test_add_with_missing_field_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    prodz(temp_dir.path())
        .args([
            "add",
            "--title",
            "",
            "--description",
            "d",
            "--price",
            "10",
            "--thumbnail",
            "t",
            "--code",
            "c1",
            "--stock",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "All fields are required; missing: title",
        ));

    assert!(read_catalog(temp_dir.path()).is_empty());
}

#[test]
fn test_duplicate_code_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_product(temp_dir.path(), "First", "c1");

    prodz(temp_dir.path())
        .args([
            "add",
            "--title",
            "Second",
            "--description",
            "d",
            "--price",
            "20",
            "--thumbnail",
            "t",
            "--code",
            "c1",
            "--stock",
            "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Code already exists: c1"));

    assert_eq!(read_catalog(temp_dir.path()).len(), 1);
}

#[test]
fn test_limit_slices_the_catalog() {
    let temp_dir = tempfile::tempdir().unwrap();
    for i in 1..=4 {
        add_product(temp_dir.path(), &format!("Product {}", i), &format!("c{}", i));
    }

    prodz(temp_dir.path())
        .args(["list", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product 1"))
        .stdout(predicate::str::contains("Product 2"))
        .stdout(predicate::str::contains("Product 3").not());

    prodz(temp_dir.path())
        .args(["list", "--limit", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid limit: 0"));

    prodz(temp_dir.path())
        .args(["list", "--limit=-5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid limit: -5"));
}

#[test]
fn test_update_changes_stock_and_keeps_id() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_product(temp_dir.path(), "Widget", "c1");

    prodz(temp_dir.path())
        .args(["update", "1", "--stock", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product updated (1): Widget"));

    let catalog = read_catalog(temp_dir.path());
    assert_eq!(catalog[0].id, 1);
    assert_eq!(catalog[0].stock, 200);
    assert_eq!(catalog[0].title, "Widget");
}

#[test]
fn test_get_unknown_id_reports_not_found() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_product(temp_dir.path(), "Widget", "c1");

    prodz(temp_dir.path())
        .args(["get", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product not found: 99"));
}

#[test]
fn test_export_writes_archive() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_product(temp_dir.path(), "Widget", "c1");

    prodz(temp_dir.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to prodz-"));

    let archives: Vec<_> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name().to_string_lossy().to_string();
            name.starts_with("prodz-") && name.ends_with(".tar.gz")
        })
        .collect();
    assert_eq!(archives.len(), 1);
}
