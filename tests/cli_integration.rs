use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};

fn dataset() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/countries.json")
}

/// A command bound to an isolated home directory and the fixture dataset.
fn atlas(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("atlas").unwrap();
    cmd.env("ATLAS_HOME", home)
        .env("NO_COLOR", "1")
        .arg("--dataset")
        .arg(dataset());
    cmd
}

#[test]
fn list_shows_the_whole_catalog() {
    let home = tempfile::tempdir().unwrap();
    atlas(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Japan"))
        .stdout(predicates::str::contains("France"))
        .stdout(predicates::str::contains("Kenya"))
        .stdout(predicates::str::contains("Brazil"))
        // population comes out digit-grouped
        .stdout(predicates::str::contains("125,836,021"))
        // record with no population falls back to the placeholder
        .stdout(predicates::str::contains("Bouvet Island"))
        .stdout(predicates::str::contains("N/A"));
}

#[test]
fn list_filters_are_conjunctive() {
    let home = tempfile::tempdir().unwrap();
    atlas(home.path())
        .arg("list")
        .arg("--region")
        .arg("Europe")
        .arg("--language")
        .arg("French")
        .assert()
        .success()
        .stdout(predicates::str::contains("France"))
        .stdout(predicates::str::contains("Japan").not());
}

#[test]
fn search_matches_case_insensitive_substrings() {
    let home = tempfile::tempdir().unwrap();
    atlas(home.path())
        .arg("list")
        .arg("--search")
        .arg("JAP")
        .assert()
        .success()
        .stdout(predicates::str::contains("Japan"))
        .stdout(predicates::str::contains("France").not());
}

#[test]
fn filters_do_not_leak_across_invocations() {
    let home = tempfile::tempdir().unwrap();
    atlas(home.path())
        .arg("list")
        .arg("--search")
        .arg("jap")
        .assert()
        .success()
        .stdout(predicates::str::contains("France").not());

    // The search term lives in session scope, so a fresh process starts clean.
    atlas(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("France"));
}

#[test]
fn unknown_region_flag_is_rejected() {
    let home = tempfile::tempdir().unwrap();
    atlas(home.path())
        .arg("list")
        .arg("--region")
        .arg("Atlantis")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Unknown region: Atlantis"));
}

#[test]
fn unknown_language_flag_is_rejected() {
    let home = tempfile::tempdir().unwrap();
    atlas(home.path())
        .arg("list")
        .arg("--language")
        .arg("Klingon")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Unknown language: Klingon"));
}

#[test]
fn favoriting_requires_login() {
    let home = tempfile::tempdir().unwrap();
    atlas(home.path())
        .arg("favorite")
        .arg("Japan")
        .assert()
        .success()
        .stdout(predicates::str::contains("Please log in to add to favorites."));

    atlas(home.path())
        .arg("favorites")
        .assert()
        .success()
        .stdout(predicates::str::contains("No countries found."));
}

#[test]
fn favorites_survive_a_restart() {
    let home = tempfile::tempdir().unwrap();
    atlas(home.path())
        .arg("login")
        .assert()
        .success()
        .stdout(predicates::str::contains("Logged in"));

    atlas(home.path())
        .arg("fav")
        .arg("Japan")
        .assert()
        .success()
        .stdout(predicates::str::contains("Japan added to favorites"));

    // A fresh process hydrates the set from disk.
    atlas(home.path())
        .arg("favorites")
        .assert()
        .success()
        .stdout(predicates::str::contains("Japan"));

    // Toggling again removes it.
    atlas(home.path())
        .arg("fav")
        .arg("Japan")
        .assert()
        .success()
        .stdout(predicates::str::contains("Japan removed from favorites"));

    atlas(home.path())
        .arg("favorites")
        .assert()
        .success()
        .stdout(predicates::str::contains("No countries found."));
}

#[test]
fn favorites_only_listing_needs_membership() {
    let home = tempfile::tempdir().unwrap();
    atlas(home.path()).arg("login").assert().success();
    atlas(home.path()).arg("fav").arg("Kenya").assert().success();

    atlas(home.path())
        .arg("list")
        .arg("--favorites")
        .assert()
        .success()
        .stdout(predicates::str::contains("Kenya"))
        .stdout(predicates::str::contains("Japan").not());
}

#[test]
fn document_list_is_ungated_and_numbered() {
    let home = tempfile::tempdir().unwrap();
    atlas(home.path())
        .arg("doc")
        .arg("France")
        .assert()
        .success()
        .stdout(predicates::str::contains("France added to document list"));
    atlas(home.path()).arg("doc").arg("Japan").assert().success();

    atlas(home.path())
        .arg("docs")
        .assert()
        .success()
        .stdout(predicates::str::contains("1."))
        .stdout(predicates::str::contains("2."))
        .stdout(predicates::str::contains("France"))
        .stdout(predicates::str::contains("Japan"));
}

#[test]
fn document_removal_is_positional() {
    let home = tempfile::tempdir().unwrap();
    atlas(home.path()).arg("doc").arg("France").assert().success();
    atlas(home.path()).arg("doc").arg("Japan").assert().success();

    atlas(home.path())
        .arg("documents")
        .arg("--remove")
        .arg("1")
        .assert()
        .success()
        .stdout(predicates::str::contains("France removed from document list"));

    atlas(home.path())
        .arg("docs")
        .assert()
        .success()
        .stdout(predicates::str::contains("Japan"))
        .stdout(predicates::str::contains("France").not());

    atlas(home.path())
        .arg("documents")
        .arg("--remove")
        .arg("9")
        .assert()
        .success()
        .stdout(predicates::str::contains("No document list entry at position 9"));
}

#[test]
fn unknown_country_name_is_an_error() {
    let home = tempfile::tempdir().unwrap();
    atlas(home.path())
        .arg("doc")
        .arg("Atlantis")
        .assert()
        .failure()
        .stderr(predicates::str::contains("No such country: Atlantis"));
}

#[test]
fn show_prints_the_detail_block() {
    let home = tempfile::tempdir().unwrap();
    atlas(home.path())
        .arg("show")
        .arg("France")
        .assert()
        .success()
        .stdout(predicates::str::contains("Capital: Paris"))
        .stdout(predicates::str::contains("Country Code: FRA"))
        .stdout(predicates::str::contains("Population: 67,391,582"))
        .stdout(predicates::str::contains("Languages: French"))
        .stdout(predicates::str::contains(
            "Borders: AND, BEL, DEU, ITA, LUX, MCO, ESP, CHE",
        ));
}

#[test]
fn show_omits_missing_borders_as_none() {
    let home = tempfile::tempdir().unwrap();
    atlas(home.path())
        .arg("show")
        .arg("Japan")
        .assert()
        .success()
        .stdout(predicates::str::contains("Timezones: UTC+09:00"))
        .stdout(predicates::str::contains("Borders: None"));
}

#[test]
fn export_writes_a_pdf_report() {
    let home = tempfile::tempdir().unwrap();
    atlas(home.path()).arg("doc").arg("Japan").assert().success();
    atlas(home.path()).arg("doc").arg("Brazil").assert().success();

    let out = home.path().join("report.pdf");
    atlas(home.path())
        .arg("export")
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicates::str::contains("Exported to"));

    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.4"));
    assert!(bytes.ends_with(b"%%EOF\n"));
}

#[test]
fn export_of_an_empty_list_still_succeeds() {
    let home = tempfile::tempdir().unwrap();
    let out = home.path().join("empty.pdf");
    atlas(home.path())
        .arg("export")
        .arg("--output")
        .arg(&out)
        .assert()
        .success();
    assert!(out.exists());
}

#[test]
fn missing_dataset_warns_but_does_not_fail() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("atlas").unwrap();
    cmd.env("ATLAS_HOME", home.path())
        .env("NO_COLOR", "1")
        .arg("--dataset")
        .arg(home.path().join("absent.json"))
        .arg("list")
        .assert()
        .success()
        .stderr(predicates::str::contains("Could not load the country catalog"))
        .stdout(predicates::str::contains("No countries found."));
}

#[test]
fn languages_lists_the_derived_index() {
    let home = tempfile::tempdir().unwrap();
    atlas(home.path())
        .arg("languages")
        .assert()
        .success()
        .stdout(predicates::str::contains("English"))
        .stdout(predicates::str::contains("French"))
        .stdout(predicates::str::contains("Japanese"))
        .stdout(predicates::str::contains("Portuguese"))
        .stdout(predicates::str::contains("Swahili"));
}

#[test]
fn regions_lists_the_fixed_set() {
    let home = tempfile::tempdir().unwrap();
    atlas(home.path())
        .arg("regions")
        .assert()
        .success()
        .stdout(predicates::str::contains("Africa"))
        .stdout(predicates::str::contains("Americas"))
        .stdout(predicates::str::contains("Oceania"));
}

#[test]
fn status_reports_catalog_and_login_state() {
    let home = tempfile::tempdir().unwrap();
    atlas(home.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicates::str::contains("5 countries"))
        .stdout(predicates::str::contains("logged out"))
        .stdout(predicates::str::contains("Filters: none"));

    atlas(home.path()).arg("login").assert().success();
    atlas(home.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicates::str::contains("logged in"));
}

#[test]
fn config_round_trips_the_dataset_key() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("atlas").unwrap();
    cmd.env("ATLAS_HOME", home.path())
        .env("NO_COLOR", "1")
        .arg("config")
        .arg("dataset")
        .arg(dataset())
        .assert()
        .success()
        .stdout(predicates::str::contains("dataset set to"));

    // With the dataset configured, no --dataset flag is needed.
    let mut cmd = Command::cargo_bin("atlas").unwrap();
    cmd.env("ATLAS_HOME", home.path())
        .env("NO_COLOR", "1")
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Japan"));

    let mut cmd = Command::cargo_bin("atlas").unwrap();
    cmd.env("ATLAS_HOME", home.path())
        .env("NO_COLOR", "1")
        .arg("config")
        .arg("dataset")
        .assert()
        .success()
        .stdout(predicates::str::contains("countries.json"));
}

#[test]
fn browse_loop_quits_on_eof_and_quit() {
    let home = tempfile::tempdir().unwrap();
    atlas(home.path())
        .arg("browse")
        .write_stdin("help\nquit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Explore the World"))
        .stdout(predicates::str::contains("toggle the login state"));
}

#[test]
fn browse_loop_runs_filter_commands() {
    let home = tempfile::tempdir().unwrap();
    atlas(home.path())
        .arg("browse")
        .write_stdin("search jap\nfilters\nclear\nquit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Searching for \"jap\""))
        .stdout(predicates::str::contains("search: jap"))
        .stdout(predicates::str::contains("Filters cleared"));
}

#[test]
fn browse_loop_surfaces_the_login_notice() {
    let home = tempfile::tempdir().unwrap();
    atlas(home.path())
        .arg("browse")
        .write_stdin("fav Japan\nquit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Please log in to add to favorites."));
}
