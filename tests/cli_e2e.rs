//! End-to-end CLI tests for vmgpack.
//!
//! These tests verify the complete CLI workflow by running the actual binary
//! against temporary directories of `.vmg` files.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

fn vmg(tel: &str, dt: &str, body: &str) -> Vec<u8> {
    let text = format!(
        "BEGIN:VMSG\r\nVERSION:1.1\r\nX-NOK-DT:{dt}\r\nBEGIN:VCARD\r\nTEL:{tel}\r\nEND:VCARD\r\nBEGIN:VBODY\r\nDate:26.05.2008 12:42:32\r\n{body}\r\nEND:VBODY\r\nEND:VMSG\r\n"
    );
    // Phones export UTF-16LE
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

/// Creates `inbox/` and `sent/` with a few messages each.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    let inbox = dir.path().join("inbox");
    fs::create_dir(&inbox).unwrap();
    fs::write(inbox.join("1.vmg"), vmg("+19995550123", "20080526T124232Z", "Hello there!")).unwrap();
    fs::write(inbox.join("2.vmg"), vmg("+19995550123", "20080525T080000Z", "Earlier, with a comma")).unwrap();
    fs::write(inbox.join("3.vmg"), vmg("", "20080527T080000Z", "No contact here")).unwrap();
    fs::write(inbox.join("4.vmg"), vmg("Mum", "notadate", "Undated <script>")).unwrap();

    let sent = dir.path().join("sent");
    fs::create_dir(&sent).unwrap();
    fs::write(sent.join("1.vmg"), vmg("5550100", "20080101T000000Z", "Sent early")).unwrap();

    dir
}

fn vmgpack_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_vmgpack"));
    Command::from_std(cmd)
}

fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

// ============================================================================
// Output Formats
// ============================================================================

mod output_formats {
    use super::*;

    #[test]
    fn test_text_output() {
        let fixtures = setup_fixtures();
        let inbox = fixtures.path().join("inbox");
        let output = output_path(&fixtures, "out.txt");

        vmgpack_cmd()
            .args(["--in_dir", arg(&inbox), "--out_filename", arg(&output)])
            .assert()
            .success()
            .stdout(predicate::str::contains("Done"))
            .stdout(predicate::str::contains("TXT"));

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("Contact     : +19995550123"));
        assert!(content.contains("Date        : 2008-05-26 12:42:32"));
        assert!(content.contains("Date        : 1970-01-01 00:00:00"));
        assert!(!content.contains("No contact here"));

        // Epoch placeholder first, then chronological
        let undated = content.find("Undated").unwrap();
        let earlier = content.find("Earlier").unwrap();
        let hello = content.find("Hello there!").unwrap();
        assert!(undated < earlier && earlier < hello);
    }

    #[test]
    fn test_csv_output() {
        let fixtures = setup_fixtures();
        let inbox = fixtures.path().join("inbox");
        let output = output_path(&fixtures, "out.csv");

        vmgpack_cmd()
            .args(["--in_dir", arg(&inbox), "--out_filename", arg(&output)])
            .assert()
            .success();

        let mut reader = csv::Reader::from_path(&output).unwrap();
        assert_eq!(reader.headers().unwrap(), vec!["contact", "date", "body"]);

        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[1][0], "+19995550123");
        assert_eq!(&rows[1][1], "2008-05-25 08:00:00");
        assert_eq!(&rows[1][2], "Earlier, with a comma\n");
    }

    #[test]
    fn test_xml_output() {
        let fixtures = setup_fixtures();
        let inbox = fixtures.path().join("inbox");
        let output = output_path(&fixtures, "out.xml");

        vmgpack_cmd()
            .args(["--in_dir", arg(&inbox), "--out_filename", arg(&output)])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("<messages>"));
        assert!(content.ends_with("</messages>"));
        assert!(content.contains("Undated &lt;script&gt;"));
        assert!(!content.contains("<script>"));
        assert_eq!(content.matches("<message>").count(), 3);
    }

    #[test]
    fn test_default_output_filename() {
        let fixtures = setup_fixtures();
        let inbox = fixtures.path().join("inbox");

        vmgpack_cmd()
            .current_dir(fixtures.path())
            .args(["--in_dir", arg(&inbox)])
            .assert()
            .success();

        assert!(fixtures.path().join("vmg.txt").exists());
    }
}

// ============================================================================
// Multiple Directories
// ============================================================================

mod multiple_directories {
    use super::*;

    #[test]
    fn test_directories_are_not_merged() {
        let fixtures = setup_fixtures();
        let inbox = fixtures.path().join("inbox");
        let sent = fixtures.path().join("sent");
        let output = output_path(&fixtures, "out.txt");

        vmgpack_cmd()
            .args([
                "--in_dir",
                arg(&inbox),
                arg(&sent),
                "--out_filename",
                arg(&output),
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        // "Sent early" predates every inbox message but comes after them
        let hello = content.find("Hello there!").unwrap();
        let sent_early = content.find("Sent early").unwrap();
        assert!(hello < sent_early);
    }

    #[test]
    fn test_csv_header_per_directory() {
        let fixtures = setup_fixtures();
        let inbox = fixtures.path().join("inbox");
        let sent = fixtures.path().join("sent");
        let output = output_path(&fixtures, "out.csv");

        vmgpack_cmd()
            .args([
                "--in_dir",
                arg(&inbox),
                arg(&sent),
                "--out_filename",
                arg(&output),
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content.matches("contact,date,body").count(), 2);
    }

    #[test]
    fn test_summary_lists_each_directory() {
        let fixtures = setup_fixtures();
        let inbox = fixtures.path().join("inbox");
        let sent = fixtures.path().join("sent");
        let output = output_path(&fixtures, "out.txt");

        vmgpack_cmd()
            .args([
                "--in_dir",
                arg(&inbox),
                arg(&sent),
                "--out_filename",
                arg(&output),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Summary"))
            .stdout(predicate::str::contains("3 written, 1 skipped"))
            .stdout(predicate::str::contains("1 written, 0 skipped"));
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod error_handling {
    use super::*;

    #[test]
    fn test_unsupported_extension() {
        let fixtures = setup_fixtures();
        let inbox = fixtures.path().join("inbox");
        let output = output_path(&fixtures, "out.json");

        vmgpack_cmd()
            .args(["--in_dir", arg(&inbox), "--out_filename", arg(&output)])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unsupported output extension"));

        assert!(!output.exists());
    }

    #[test]
    fn test_nonexistent_directory() {
        let fixtures = setup_fixtures();
        let missing = fixtures.path().join("missing");
        let output = output_path(&fixtures, "out.txt");

        vmgpack_cmd()
            .args(["--in_dir", arg(&missing), "--out_filename", arg(&output)])
            .assert()
            .failure()
            .stderr(predicate::str::contains("not a directory"));

        assert!(!output.exists());
    }

    #[test]
    fn test_missing_in_dir_argument() {
        vmgpack_cmd().assert().failure();
    }

    #[test]
    fn test_skipped_file_is_reported() {
        let fixtures = setup_fixtures();
        let inbox = fixtures.path().join("inbox");
        let output = output_path(&fixtures, "out.txt");

        vmgpack_cmd()
            .env("RUST_LOG", "info")
            .args(["--in_dir", arg(&inbox), "--out_filename", arg(&output)])
            .assert()
            .success()
            .stderr(predicate::str::contains("missing information"))
            .stderr(predicate::str::contains("Processing file"));
    }
}

// ============================================================================
// Help and Version
// ============================================================================

mod help_and_version {
    use super::*;

    #[test]
    fn test_help_flag() {
        vmgpack_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--in_dir"))
            .stdout(predicate::str::contains("--out_filename"));
    }

    #[test]
    fn test_version_flag() {
        vmgpack_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("vmgpack"));
    }
}
