#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Sample sheet with fixed ids, as produced by a previous export.
pub const SAMPLE_CSV: &str = "\
id,chain,subChain,venueName,venueCity,visitDate,needsFollowUp,followUp,staffsEngagement,problems,status,assignedTo,checkins
\"v-athens\",\"Μασούτης\",\"Attica\",\"Masoutis Kifisias\",\"Athens\",\"2025-03-02\",\"Yes\",\"call manager\",\"4\",\"printer offline\",\"planned\",\"eleni\",\"[]\"
\"v-thess\",\"Σκλαβενίτης\",\"North\",\"Sklavenitis Kalamaria\",\"Thessaloniki\",\"2025-03-10\",\"No\",\"\",\"3\",\"\",\"completed\",\"member2\",\"[]\"
\"v-patra\",\"Μασούτης\",\"West\",\"Masoutis Patras\",\"Patras\",\"2025-02-20\",\"No\",\"\",\"2\",\"\",\"planned\",\"member3\",\"[]\"";

/// The binary with its config directory pointed at a scratch location,
/// so the user's real configuration is never read.
pub fn fv() -> Command {
    let mut cmd = cargo_bin_cmd!("fieldvisits");
    let mut home: PathBuf = env::temp_dir();
    home.push("fieldvisits_test_home");
    cmd.env("FIELDVISITS_HOME", home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fieldvisits.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB and import the sample sheet
pub fn init_db_with_data(db_path: &str, name: &str) {
    fv().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    let csv = temp_out(name, "csv");
    fs::write(&csv, SAMPLE_CSV).expect("write sample csv");

    fv().args(["--db", db_path, "import", "--file", &csv, "--yes"])
        .assert()
        .success();
}
