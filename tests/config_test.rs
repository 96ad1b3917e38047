use assert_fs::prelude::*;
use predicates::prelude::*;
use task_manager::commands::utils::build_messenger;
use task_manager::config::{load_config, resolve_config, EXAMPLE_CONFIG};

#[test]
fn explicit_config_file_sets_channel_name() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("config.yaml");
    file.write_str("channel:\n  name: platform_info\n").unwrap();

    let config = resolve_config(Some(file.path())).unwrap();
    assert_eq!(config.channel.name, "platform_info");

    let messenger = build_messenger(&config);
    let reply = messenger
        .send("platform_info", br#"{"method":"getPlatformVersion"}"#)
        .unwrap();
    let reply = String::from_utf8(reply).unwrap();
    assert!(predicate::str::starts_with("[\"").eval(&reply));
}

#[test]
fn invalid_log_level_is_reported_with_file_context() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("config.yaml");
    file.write_str("logging:\n  level: loud\n").unwrap();

    let err = load_config(file.path()).unwrap_err();
    assert!(predicate::str::contains("loud").eval(&format!("{:#}", err)));
}

#[test]
fn example_config_documents_every_setting() {
    let documented = predicate::str::contains("channel:")
        .and(predicate::str::contains("name: task_manager"))
        .and(predicate::str::contains("level: info"));
    assert!(documented.eval(EXAMPLE_CONFIG));
}
