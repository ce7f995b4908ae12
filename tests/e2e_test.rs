/// End-to-end tests for the CLI
///
/// These run the real binary but never reach the network: every
/// scenario either fails configuration, fails argument parsing, or
/// short-circuits before the first upstream call.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

const DUMMY_ENV: [(&str, &str); 3] = [
    ("BLINKER_API_BASE_URL", "https://carapi.invalid"),
    ("BLINKER_RAPIDAPI_KEY", "test-key"),
    ("BLINKER_RAPIDAPI_HOST", "carapi.invalid"),
];

fn cmd_with_dummy_env() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("blinker");
    for (name, value) in DUMMY_ENV {
        cmd.env(name, value);
    }
    cmd
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("blinker").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("blinker").arg("--version").assert().code(0);
    }

    /// Exit code 2: unknown subcommand (the 404 of the CLI surface)
    #[test]
    fn test_exit_code_unknown_subcommand() {
        cargo_bin_cmd!("blinker").arg("garage").assert().code(2);
    }

    /// Exit code 2: unknown flag
    #[test]
    fn test_exit_code_unknown_flag() {
        cargo_bin_cmd!("blinker")
            .args(["search", "--invalid-option"])
            .assert()
            .code(2);
    }

    /// Exit code 2: invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cmd_with_dummy_env()
            .args(["search", "-q", "toyota", "-f", "yaml"])
            .assert()
            .code(2);
    }

    /// Exit code 3: missing configuration is fatal at startup
    #[test]
    fn test_exit_code_missing_config() {
        let mut cmd = cargo_bin_cmd!("blinker");
        for (name, _) in DUMMY_ENV {
            cmd.env_remove(name);
        }

        cmd.args(["search", "-q", "toyota"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains(
                "Missing required environment variable",
            ))
            .stderr(predicate::str::contains("BLINKER_API_BASE_URL"));
    }

    /// Exit code 3: malformed id fails before any network call
    #[test]
    fn test_exit_code_malformed_vehicle_id() {
        cmd_with_dummy_env()
            .args(["vehicle", "definitely-not-an-id"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Malformed vehicle id"));
    }
}

/// A blank query renders an empty grid without touching upstream, so
/// this passes with an unreachable base URL.
#[test]
fn test_blank_query_renders_empty_grid() {
    cmd_with_dummy_env()
        .args(["search", "-q", "   "])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Results in HI"))
        .stdout(predicate::str::contains("No vehicles matched your search."));
}

#[test]
fn test_blank_query_json_output() {
    cmd_with_dummy_env()
        .args(["search", "-q", "", "-f", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"cards\": []"));
}

#[test]
fn test_blank_query_respects_state_flag() {
    cmd_with_dummy_env()
        .args(["search", "-q", "", "-s", "CA"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Results in CA"));
}

#[test]
fn test_output_flag_writes_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let output_path = temp_dir.path().join("results.txt");

    cmd_with_dummy_env()
        .args(["search", "-q", ""])
        .args(["-o", output_path.to_str().unwrap()])
        .assert()
        .code(0);

    let written = std::fs::read_to_string(&output_path).unwrap();
    assert!(written.contains("No vehicles matched your search."));
}
