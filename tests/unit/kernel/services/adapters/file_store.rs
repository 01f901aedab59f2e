use super::*;
use tempfile::tempdir;

#[test]
fn missing_file_opens_empty() {
    let dir = tempdir().unwrap();
    let store = FileStore::open(dir.path().join("session.json"));
    assert_eq!(store.get("swipeDecisions"), None);
}

#[test]
fn values_survive_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("session.json");

    let mut store = FileStore::open(&path);
    store.set("swipeDecisions", "[]".to_string());
    assert!(path.exists());

    let reopened = FileStore::open(&path);
    assert_eq!(reopened.get("swipeDecisions").as_deref(), Some("[]"));
}

#[test]
fn remove_deletes_key_on_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");

    let mut store = FileStore::open(&path);
    store.set("a", "1".to_string());
    store.set("b", "2".to_string());
    store.remove("a");

    let reopened = FileStore::open(&path);
    assert_eq!(reopened.get("a"), None);
    assert_eq!(reopened.get("b").as_deref(), Some("2"));
}

#[test]
fn corrupt_file_is_discarded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{not json").unwrap();

    let store = FileStore::open(&path);
    assert_eq!(store.get("swipeDecisions"), None);
}

#[test]
fn write_failure_is_reported_by_try_set() {
    let dir = tempdir().unwrap();
    let parent = dir.path().join("sub");

    let mut store = FileStore::open(parent.join("session.json"));
    std::fs::write(&parent, "").unwrap();

    assert!(matches!(
        store.try_set("k", "v".to_string()),
        Err(StoreError::Write { .. })
    ));
    store.set("k", "v".to_string());
    assert_eq!(store.get("k").as_deref(), Some("v"));
}

#[test]
fn unreadable_path_opens_empty_and_still_accepts_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::create_dir(&path).unwrap();

    let mut store = FileStore::open(&path);
    assert_eq!(store.get("swipeDecisions"), None);

    store.set("swipeDecisions", "[]".to_string());
    assert_eq!(store.get("swipeDecisions").as_deref(), Some("[]"));
}
