use std::fs;

use tableview_term::logging::{LogDir, DEFAULT_KEEP};

#[test]
fn test_open_archives_previous_run() {
    let dir = tempfile::tempdir().unwrap();
    let logs = LogDir::new(dir.path());
    fs::write(logs.current(), "old run").unwrap();

    logs.open().unwrap();

    assert_eq!(fs::read_to_string(logs.current()).unwrap(), "");
    let archives = logs.archives().unwrap();
    assert_eq!(archives.len(), 1);
    assert_eq!(fs::read_to_string(&archives[0]).unwrap(), "old run");
}

#[test]
fn test_open_creates_missing_dir() {
    let dir = tempfile::tempdir().unwrap();
    let logs = LogDir::new(dir.path().join("nested").join("logs"));
    logs.open().unwrap();
    assert!(logs.current().exists());
    assert!(logs.archives().unwrap().is_empty());
}

#[test]
fn test_archive_without_current_log() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(LogDir::new(dir.path()).archive_current().unwrap(), None);
}

#[test]
fn test_same_second_archives_do_not_collide() {
    let dir = tempfile::tempdir().unwrap();
    let logs = LogDir::new(dir.path());
    fs::write(logs.current(), "first").unwrap();
    let first = logs.archive_current().unwrap().unwrap();
    fs::write(logs.current(), "second").unwrap();
    let second = logs.archive_current().unwrap().unwrap();

    assert_ne!(first, second);
    assert_eq!(logs.archives().unwrap().len(), 2);
}

#[test]
fn test_prune_keeps_newest_archives() {
    let dir = tempfile::tempdir().unwrap();
    let logs = LogDir::new(dir.path());
    for i in 0..(DEFAULT_KEEP + 5) {
        fs::write(dir.path().join(format!("20200101_0000{:02}.log", i)), "").unwrap();
    }
    fs::write(dir.path().join("notes.txt"), "").unwrap();

    assert_eq!(logs.prune().unwrap(), 5);

    let archives = logs.archives().unwrap();
    assert_eq!(archives.len(), DEFAULT_KEEP);
    assert!(archives[0].ends_with("20200101_000005.log"));
    assert!(dir.path().join("notes.txt").exists());
}

#[test]
fn test_prune_with_custom_keep() {
    let dir = tempfile::tempdir().unwrap();
    let logs = LogDir::new(dir.path()).keep(1);
    fs::write(dir.path().join("20200101_000000.log"), "").unwrap();
    fs::write(dir.path().join("20200102_000000.log"), "").unwrap();

    logs.prune().unwrap();

    let archives = logs.archives().unwrap();
    assert_eq!(archives.len(), 1);
    assert!(archives[0].ends_with("20200102_000000.log"));
}
