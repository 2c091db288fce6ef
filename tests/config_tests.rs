use rrecall::config::Config;
use rrecall::core::scheduler::ReviewPolicy;
use rrecall::errors::AppError;
use std::fs;

mod common;
use common::TestEnv;

#[test]
fn test_missing_file_yields_defaults() {
    let env = TestEnv::new("config_missing");
    let cfg = Config::load_from(&env.home.join("nope.conf")).unwrap();

    assert_eq!(cfg.default_repetitions, 3);
    assert!(!cfg.reset_repetitions_on_fail);
    assert_eq!(ReviewPolicy::from_config(&cfg), ReviewPolicy::default());
}

#[test]
fn test_missing_fields_use_defaults() {
    let env = TestEnv::new("config_partial");
    let path = env.home.join("rrecall.conf");
    fs::write(&path, "database: /tmp/custom.sqlite\n").unwrap();

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.database, "/tmp/custom.sqlite");
    assert_eq!(cfg.default_repetitions, 3);
    assert!(!cfg.reset_repetitions_on_fail);
}

#[test]
fn test_reset_option_feeds_the_policy() {
    let env = TestEnv::new("config_reset");
    let path = env.home.join("rrecall.conf");
    fs::write(
        &path,
        "database: db.sqlite\ndefault_repetitions: 4\nreset_repetitions_on_fail: true\n",
    )
    .unwrap();

    let cfg = Config::load_from(&path).unwrap();
    assert!(ReviewPolicy::from_config(&cfg).reset_repetitions_on_fail);
    assert!(!ReviewPolicy::from_config(&Config::default()).reset_repetitions_on_fail);
}

#[test]
fn test_invalid_values_are_rejected() {
    let env = TestEnv::new("config_invalid");
    let path = env.home.join("rrecall.conf");

    fs::write(&path, "default_repetitions: 0\n").unwrap();
    assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));

    fs::write(&path, "default_repetitions: [not, a, number]\n").unwrap();
    assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));
}

#[test]
fn test_save_and_reload() {
    let env = TestEnv::new("config_save");
    let path = env.home.join("sub").join("rrecall.conf");

    let cfg = Config {
        database: "~/problems.sqlite".into(),
        default_repetitions: 5,
        reset_repetitions_on_fail: true,
    };
    cfg.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), cfg);
    assert!(!cfg.database_path().to_string_lossy().starts_with('~'));
}
