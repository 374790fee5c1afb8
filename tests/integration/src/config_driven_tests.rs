//! Stores built from on-disk configuration files.

use files::{
    Error, FolderStore, Format, NormalizedPath, SaveError, StoreConfig, WellKnownDirectory,
};
use files_test_utils::Sandbox;
use predicates::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Entry {
    title: String,
    pinned: bool,
}

fn entry() -> Entry {
    Entry {
        title: "release notes".into(),
        pinned: true,
    }
}

fn load_config(sandbox: &Sandbox, name: &str, content: &str) -> StoreConfig {
    sandbox.write_file(name, content);
    StoreConfig::load(&NormalizedPath::new(sandbox.root().join(name))).unwrap()
}

#[test]
fn toml_config_drives_kind_subfolder_and_format() {
    let sandbox = Sandbox::new();
    let config = load_config(
        &sandbox,
        "store.toml",
        "kind = \"caches\"\nsubfolder = \"feeds/rss\"\nformat = \"yaml\"\n",
    );

    let store = FolderStore::from_config(sandbox.agent(), &config).unwrap();
    store.resources().save(&entry(), "latest.yaml").unwrap();

    assert_eq!(store.kind(), WellKnownDirectory::Caches);
    assert_eq!(store.format(), Format::Yaml);
    sandbox.assert_stored(
        WellKnownDirectory::Caches,
        "feeds/rss/latest.yaml",
        "title: release notes",
    );
    let loaded: Entry = store.resources().load("latest.yaml").unwrap();
    assert_eq!(loaded, entry());
}

#[test]
fn json_config_with_overwrite_disabled_protects_files() {
    let sandbox = Sandbox::new();
    let config = load_config(
        &sandbox,
        "store.json",
        r#"{"kind": "documents", "atomic_writes": true, "overwrite": false}"#,
    );

    let store = FolderStore::from_config(sandbox.agent(), &config).unwrap();
    store.resources().save(&entry(), "pinned.json").unwrap();
    let error = store.resources().save(&entry(), "pinned.json").unwrap_err();

    assert!(matches!(error, SaveError::WriteFailed { .. }));
    let content = std::fs::read_to_string(sandbox.root().join("documents/pinned.json")).unwrap();
    assert!(predicate::str::contains("release notes").eval(&content));
}

#[test]
fn empty_yaml_config_uses_application_support_and_json() {
    let sandbox = Sandbox::new();
    let config = load_config(&sandbox, "store.yaml", "{}\n");

    let store = FolderStore::from_config(sandbox.agent(), &config).unwrap();
    store.resources().save(&entry(), "entry.json").unwrap();

    sandbox.assert_stored(WellKnownDirectory::ApplicationSupport, "entry.json", "\"pinned\": true");
}

#[test]
fn unknown_config_keys_are_rejected() {
    let sandbox = Sandbox::new();
    sandbox.write_file("store.toml", "kind = \"caches\"\nretention_days = 3\n");

    let error = StoreConfig::load(&NormalizedPath::new(sandbox.root().join("store.toml")))
        .unwrap_err();

    assert!(matches!(error, Error::ConfigParse { .. }));
}
