use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use rrecall::db::ProblemStore;
use rrecall::utils::date;
use std::fs;

mod common;
use common::TestEnv;

const BINARY_SEARCH: &str = "https://x.com/problems/binary-search";
const TWO_SUM: &str = "https://leetcode.com/problems/two-sum/";

#[test]
fn test_init_creates_database() {
    let env = TestEnv::new("cli_init");

    env.rr()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(fs::metadata(&env.db).is_ok());
    // test mode never writes the config file
    assert!(!env.home.join("rrecall.conf").exists());
}

#[test]
fn test_add_reports_derived_name() {
    let env = TestEnv::new("cli_add");
    env.init();

    env.rr()
        .args(["add", TWO_SUM])
        .assert()
        .success()
        .stdout(contains("📅 Added #1 'Two Sum'"))
        .stdout(contains("3 repetitions to go"));

    env.rr()
        .args(["add", "https://example.com/foo/bar", "--reps", "5"])
        .assert()
        .success()
        .stdout(contains("'Unknown Problem'"))
        .stdout(contains("5 repetitions to go"));
}

#[test]
fn test_add_rejects_empty_link() {
    let env = TestEnv::new("cli_add_empty");
    env.init();

    env.rr()
        .args(["add", "  "])
        .assert()
        .failure()
        .stderr(contains("Invalid input"));
}

#[test]
fn test_list_json_shape() {
    let env = TestEnv::new("cli_list_json");
    env.init();
    env.add(TWO_SUM);
    env.add(BINARY_SEARCH);

    let out = env.stdout_of(&["list", "--json"]);
    let rows: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    let rows = rows.as_array().expect("array");

    assert_eq!(rows.len(), 2);
    let first = &rows[0];
    assert_eq!(first["id"], 1);
    assert_eq!(first["name"], "Two Sum");
    assert_eq!(first["link"], TWO_SUM);
    assert_eq!(first["is_due"], false);
    assert_eq!(first["repetitions_left"], 3);

    let due = first["due_date"].as_str().unwrap();
    assert_eq!(due.len(), 10, "due_date is a calendar date: {}", due);
}

#[test]
fn test_list_splits_due_and_upcoming() {
    let env = TestEnv::new("cli_list_sections");
    env.init();
    env.add(TWO_SUM);
    env.add(BINARY_SEARCH);

    // make "Two Sum" overdue directly through the library
    {
        let mut store = ProblemStore::open(&env.db).unwrap();
        let mut p = store.get(1).unwrap();
        p.due_date = date::add_days(date::now(), -2);
        store.update(&p).unwrap();
    }

    env.rr()
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("Due for review (1)"))
        .stdout(contains("Upcoming (1)"))
        .stdout(contains("2 days overdue"));

    env.rr()
        .args(["list", "--due"])
        .assert()
        .success()
        .stdout(contains("Two Sum"))
        .stdout(contains("Binary Search").not());

    let out = env.stdout_of(&["list", "--due", "--json"]);
    let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["is_due"], true);
}

#[test]
fn test_list_empty_store() {
    let env = TestEnv::new("cli_list_empty");
    env.init();

    env.rr()
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("No problems tracked yet"));

    assert_eq!(env.stdout_of(&["list", "--json"]).trim(), "[]");
}

#[test]
fn test_review_lifecycle_end_to_end() {
    let env = TestEnv::new("cli_review_e2e");
    env.init();
    env.add(BINARY_SEARCH);

    env.rr()
        .args(["review", "1", "success"])
        .assert()
        .success()
        .stdout(contains("Updated 'Binary Search'"))
        .stdout(contains("interval 28 days"))
        .stdout(contains("2 repetitions left"));

    env.rr()
        .args(["review", "1", "success"])
        .assert()
        .success()
        .stdout(contains("interval 56 days"))
        .stdout(contains("1 repetitions left"));

    env.rr()
        .args(["show", "1", "--json"])
        .assert()
        .success()
        .stdout(contains("\"repetitions_left\": 1"));

    env.rr()
        .args(["review", "1", "success"])
        .assert()
        .success()
        .stdout(contains("🎉 'Binary Search' completed and removed"))
        .stdout(contains("\x1b[").not());

    env.rr()
        .args(["show", "1"])
        .assert()
        .failure()
        .stderr(contains("Problem #1 not found"));
}

#[test]
fn test_review_fail_resets_to_tomorrow() {
    let env = TestEnv::new("cli_review_fail");
    env.init();
    env.add(TWO_SUM);

    let tomorrow = date::add_days(date::now(), 1).format("%Y-%m-%d").to_string();

    env.rr()
        .args(["review", "1", "fail"])
        .assert()
        .success()
        .stdout(contains("interval 1 days"))
        .stdout(contains("3 repetitions left"));

    let out = env.stdout_of(&["show", "1", "--json"]);
    let p: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(p["current_interval"], 1);
    // allow a midnight rollover between the two clock reads
    let due = p["due_date"].as_str().unwrap().to_string();
    let day_after = date::add_days(date::now(), 1).format("%Y-%m-%d").to_string();
    assert!(due == tomorrow || due == day_after, "due {}", due);
}

#[test]
fn test_review_rejects_unknown_result() {
    let env = TestEnv::new("cli_review_bad");
    env.init();
    env.add(TWO_SUM);

    env.rr()
        .args(["review", "1", "maybe"])
        .assert()
        .failure()
        .stderr(contains("unknown review result"));

    // the record is untouched
    env.rr()
        .args(["show", "1", "--json"])
        .assert()
        .success()
        .stdout(contains("\"current_interval\": 14"));
}

#[test]
fn test_review_unknown_id() {
    let env = TestEnv::new("cli_review_missing");
    env.init();

    env.rr()
        .args(["review", "99", "success"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn test_reset_option_from_config_file() {
    let env = TestEnv::new("cli_reset_option");
    fs::write(
        env.home.join("rrecall.conf"),
        "default_repetitions: 4\nreset_repetitions_on_fail: true\n",
    )
    .unwrap();
    env.init();

    env.rr()
        .args(["add", TWO_SUM, "--reps", "5"])
        .assert()
        .success()
        .stdout(contains("5 repetitions to go"));

    env.rr()
        .args(["review", "1", "success"])
        .assert()
        .success()
        .stdout(contains("4 repetitions left"));

    // a failure restores the problem's own starting count, not the default
    env.rr()
        .args(["review", "1", "fail"])
        .assert()
        .success()
        .stdout(contains("5 repetitions left"));

    env.rr()
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(contains("Reps left:   5 of 5"));

    // default from config applies when --reps is omitted
    env.rr()
        .args(["add", BINARY_SEARCH])
        .assert()
        .success()
        .stdout(contains("4 repetitions to go"));
}

#[test]
fn test_del_with_yes_and_repeated_delete() {
    let env = TestEnv::new("cli_del");
    env.init();
    env.add(TWO_SUM);

    env.rr()
        .args(["del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("'Two Sum' has been deleted"));

    env.rr()
        .args(["del", "1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn test_del_asks_for_confirmation() {
    let env = TestEnv::new("cli_del_prompt");
    env.init();
    env.add(TWO_SUM);

    env.rr()
        .args(["del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    env.rr().args(["show", "1"]).assert().success();

    env.rr()
        .args(["del", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    env.rr().args(["show", "1"]).assert().failure();
}

#[test]
fn test_del_nonexistent_id() {
    let env = TestEnv::new("cli_del_missing");
    env.init();

    env.rr()
        .args(["del", "7", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Problem #7 not found"));
}

#[test]
fn test_export_json_and_csv() {
    let env = TestEnv::new("cli_export");
    env.init();
    env.add(TWO_SUM);
    env.add(BINARY_SEARCH);

    let json_path = env.out("problems.json");
    env.rr()
        .args(["export", "--format", "json", "--file", &json_path])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let rows: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 2);
    assert_eq!(rows[1]["name"], "Binary Search");

    let csv_path = env.out("problems.csv");
    env.rr()
        .args(["export", "--format", "csv", "--file", &csv_path])
        .assert()
        .success();

    let csv = fs::read_to_string(&csv_path).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("id,name,link,due_date,is_due,repetitions_left,current_interval")
    );
    assert_eq!(lines.count(), 2);

    // existing file: declined without --force, written with it
    env.rr()
        .args(["export", "--format", "csv", "--file", &csv_path])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Export cancelled"));

    env.rr()
        .args(["export", "--format", "csv", "--file", &csv_path, "--force"])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));
}

#[test]
fn test_backup_plain_and_compressed() {
    let env = TestEnv::new("cli_backup");
    env.init();
    env.add(TWO_SUM);

    let plain = env.out("backup/copy.sqlite");
    env.rr()
        .args(["backup", "--file", &plain])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(fs::metadata(&plain).unwrap().len() > 0);

    let copy = ProblemStore::open(&plain).unwrap();
    assert_eq!(copy.get(1).unwrap().name, "Two Sum");

    let zipped = env.out("backup/copy2.sqlite");
    env.rr()
        .args(["backup", "--file", &zipped, "--compress"])
        .assert()
        .success();
    assert!(env.home.join("backup").join("copy2.zip").exists());
    assert!(!env.home.join("backup").join("copy2.sqlite").exists());

    env.rr()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("backup"));
}

#[test]
fn test_log_print_shows_audit_trail() {
    let env = TestEnv::new("cli_log");
    env.init();
    env.add(TWO_SUM);
    env.rr().args(["review", "1", "fail"]).assert().success();

    env.rr()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("migration_applied"))
        .stdout(contains("init"))
        .stdout(contains("Two Sum"))
        .stdout(contains("review"));
}

#[test]
fn test_db_info_and_check() {
    let env = TestEnv::new("cli_db");
    env.init();
    env.add(TWO_SUM);

    env.rr()
        .args(["db", "--info", "--check", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Tracked problems"))
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Schema already up to date"));
}

#[test]
fn test_config_print() {
    let env = TestEnv::new("cli_config");

    env.rr()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("default_repetitions: 3"))
        .stdout(contains("reset_repetitions_on_fail: false"));
}

#[test]
fn test_init_writes_config_outside_test_mode() {
    let env = TestEnv::new("cli_init_config");

    env.rr().args(["init"]).assert().success();

    let conf = fs::read_to_string(env.home.join("rrecall.conf")).unwrap();
    assert!(conf.contains(&env.db));
}
