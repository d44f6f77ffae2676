//! CLI contract tests
//!
//! Drives the built binary against a temporary data file and checks the
//! recorded file contents and the printed condition.

use std::path::PathBuf;
use std::process::Command;

const FULL_BAR: &str = "■■■■■■■■■■■■■■■■■■■■";

fn periodic_bin() -> String {
    env!("CARGO_BIN_EXE_periodic").to_string()
}

struct Sandbox {
    dir: tempfile::TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn data_file(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    fn write_data(&self, content: &str) {
        std::fs::write(self.data_file(), content).unwrap();
    }

    fn read_data(&self) -> String {
        std::fs::read_to_string(self.data_file()).unwrap()
    }

    /// Run with an isolated config dir so a user config cannot leak in
    fn run(&self, args: &[&str]) -> (i32, String, String) {
        let output = Command::new(periodic_bin())
            .arg("--data-file")
            .arg(self.data_file())
            .args(args)
            .env("XDG_CONFIG_HOME", self.dir.path().join("config"))
            .env("HOME", self.dir.path())
            .env_remove("RUST_LOG")
            .env_remove("PERIODIC_DATA_FILE")
            .output()
            .expect("Failed to run periodic");
        (
            output.status.code().unwrap_or(-1),
            String::from_utf8_lossy(&output.stdout).to_string(),
            String::from_utf8_lossy(&output.stderr).to_string(),
        )
    }
}

/// Four cycles, 28 days apart, the last one ending on 2024-01-01
fn regular_history() -> &'static str {
    "\
# regular 28-day gaps
s 2023-09-19
e 2023-09-24
s 2023-10-22
e 2023-10-27
s 2023-11-24
e 2023-11-29
s 2023-12-27
e 2024-01-01
"
}

// ============================================================================
// Recording
// ============================================================================

#[test]
fn test_start_and_end_are_saved() {
    let sb = Sandbox::new();
    let (code, stdout, _) = sb.run(&["start", "2024-01-01"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Period started on 2024-01-01."));

    let (code, stdout, _) = sb.run(&["end", "2024", "1", "6"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Period ended on 2024-01-06."));

    assert_eq!(sb.read_data(), "s 2024-01-01\ne 2024-01-06\n");
}

#[test]
fn test_single_letter_aliases() {
    let sb = Sandbox::new();
    assert_eq!(sb.run(&["s", "2024-01-01"]).0, 0);
    assert_eq!(sb.run(&["e", "2024-01-05"]).0, 0);

    let (code, stdout, _) = sb.run(&["l"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "2024-01-01 start\n2024-01-05 end\n");
}

#[test]
fn test_out_of_order_entries_listed_sorted() {
    let sb = Sandbox::new();
    sb.run(&["end", "2024-02-06"]);
    sb.run(&["start", "2024-02-01"]);
    let (_, stdout, _) = sb.run(&["list"]);
    assert_eq!(stdout, "2024-02-01 start\n2024-02-06 end\n");
}

#[test]
fn test_start_without_date_uses_today() {
    let sb = Sandbox::new();
    let (code, stdout, _) = sb.run(&["start"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("Period started on "));
    assert!(sb.read_data().starts_with("s "));
}

#[test]
fn test_invalid_date_fails_without_writing() {
    let sb = Sandbox::new();
    let (code, _, stderr) = sb.run(&["start", "2024-13"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("3 numbers"), "stderr: {}", stderr);
    assert!(!sb.data_file().exists());
}

// ============================================================================
// Deleting
// ============================================================================

#[test]
fn test_delete_reports_outcome() {
    let sb = Sandbox::new();
    sb.write_data("s 2024-01-01\ne 2024-01-06\n");

    let (code, stdout, _) = sb.run(&["delete", "2024-01-06"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "Entry deleted");
    assert_eq!(sb.read_data(), "s 2024-01-01\n");

    let (code, stdout, _) = sb.run(&["d", "2024-01-06"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "No entry was deleted");
}

// ============================================================================
// Condition / forecast
// ============================================================================

#[test]
fn test_condition_without_data() {
    let sb = Sandbox::new();
    let (code, stdout, _) = sb.run(&[]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Not enough data was collected"));
}

#[test]
fn test_condition_with_regular_history() {
    let sb = Sandbox::new();
    sb.write_data(regular_history());

    let (code, stdout, _) = sb.run(&["condition"]);
    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        format!(
            "Period is not active\nThe start of period can be expected on:\n\n2024-01-29 100.0% {}\n",
            FULL_BAR
        )
    );
}

#[test]
fn test_start_shows_end_forecast() {
    let sb = Sandbox::new();
    sb.write_data(regular_history());

    let (code, stdout, _) = sb.run(&["start", "2024-01-29"]);
    assert_eq!(code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Period started on 2024-01-29.");
    assert_eq!(lines[1], "Period is active");
    assert_eq!(lines[2], "The end of period can be expected on:");
    assert_eq!(lines[4], format!("2024-02-03 100.0% {}", FULL_BAR));
}

#[test]
fn test_condition_with_varied_history() {
    let sb = Sandbox::new();
    sb.write_data(
        "s 2023-09-01\ne 2023-09-06\n\
         s 2023-09-30\ne 2023-10-05\n\
         s 2023-10-31\ne 2023-11-05\n\
         s 2023-11-30\ne 2023-12-05\n",
    );

    let (code, stdout, _) = sb.run(&["c"]);
    assert_eq!(code, 0);
    let rows: Vec<&str> = stdout.lines().skip(3).collect();
    assert!(rows.len() > 1, "expected a multi-day window:\n{}", stdout);
    assert!(rows.iter().any(|r| r.ends_with(FULL_BAR)));
    let mut dates: Vec<&str> = rows.iter().map(|r| &r[..10]).collect();
    let sorted = {
        let mut s = dates.clone();
        s.sort();
        s
    };
    assert_eq!(dates, sorted);
    dates.dedup();
    assert_eq!(dates.len(), rows.len());
}

#[test]
fn test_malformed_data_file_is_an_error() {
    let sb = Sandbox::new();
    sb.write_data("s 2024-01-01\nbogus line here\n");
    let (code, _, stderr) = sb.run(&["list"]);
    assert_ne!(code, 0);
    assert!(stderr.contains(":2:"), "stderr: {}", stderr);
}

// ============================================================================
// Misc
// ============================================================================

#[test]
fn test_version_flag() {
    let sb = Sandbox::new();
    let (code, stdout, _) = sb.run(&["--version"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), format!("periodic {}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_version_is_not_a_subcommand() {
    let sb = Sandbox::new();
    let (code, _, _) = sb.run(&["version"]);
    assert_ne!(code, 0);
}

#[test]
fn test_config_show_lists_data_file() {
    let sb = Sandbox::new();
    let (code, stdout, _) = sb.run(&["config", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains(&sb.data_file().display().to_string()));
    assert!(stdout.contains("decay            = 0.9"));
}
