// Copyright (c) 2025 Makai Trie Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Integration tests for the persistence boundary: writing a trie out as a
//! flat JSON string array and rebuilding an equal trie from it.

use std::fs;
use std::io::Write;

use makai_trie::persist::{read_trie, write_trie, PersistError};
use makai_trie::{MakaiTrie, MutableMakaiTrie, TrieQuery};

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.json");

    let original = MakaiTrie::from_strings(&["cat", "catalog", "dog", ""]);
    write_trie(&path, &original).unwrap();

    let rebuilt = read_trie(&path).unwrap();
    assert_eq!(original, rebuilt);
    assert_eq!(rebuilt.len(), 4);
}

#[test]
fn test_written_file_is_a_plain_string_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.json");

    let trie = MakaiTrie::from_strings(&["b", "a"]);
    write_trie(&path, &trie).unwrap();

    // The on-disk format carries no trie structure, only the strings.
    let raw = fs::read_to_string(&path).unwrap();
    assert_eq!(raw, r#"["a","b"]"#);
}

#[test]
fn test_mutable_view_writes_identically() {
    let dir = tempfile::tempdir().unwrap();
    let frozen_path = dir.path().join("frozen.json");
    let mutable_path = dir.path().join("mutable.json");

    let builder = MutableMakaiTrie::from_strings(&["x", "y"]);
    let frozen = MakaiTrie::from_strings(&["y", "x"]);
    write_trie(&mutable_path, &builder).unwrap();
    write_trie(&frozen_path, &frozen).unwrap();

    assert_eq!(
        fs::read_to_string(&frozen_path).unwrap(),
        fs::read_to_string(&mutable_path).unwrap()
    );
}

#[test]
#[cfg(target_os = "linux")]
fn test_write_to_full_device_is_io_error() {
    // /dev/full accepts the open but fails every write with ENOSPC; the
    // error must come back to the caller, not vanish in a buffered drop.
    let trie = MakaiTrie::from_strings(&["cat", "dog"]);
    let err = write_trie("/dev/full", &trie).unwrap_err();
    assert!(matches!(err, PersistError::Io(_)));
}

#[test]
fn test_read_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_trie(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, PersistError::Io(_)));
}

#[test]
fn test_read_malformed_file_is_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");

    let mut file = fs::File::create(&path).unwrap();
    file.write_all(br#"{"not": "an array"}"#).unwrap();
    drop(file);

    let err = read_trie(&path).unwrap_err();
    assert!(matches!(err, PersistError::Format(_)));
}

#[test]
fn test_read_rejects_non_string_element() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mixed.json");
    fs::write(&path, r#"["cat", 7, "dog"]"#).unwrap();

    let err = read_trie(&path).unwrap_err();
    assert!(matches!(err, PersistError::Format(_)));
}

#[test]
fn test_duplicates_in_file_collapse() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dup.json");
    fs::write(&path, r#"["cat", "cat", "dog"]"#).unwrap();

    let trie = read_trie(&path).unwrap();
    assert_eq!(trie.len(), 2);
    assert_eq!(trie.every_string(), vec!["cat", "dog"]);
}
