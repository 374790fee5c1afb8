//! End-to-end persistence against a real, sandboxed disk
//!
//! These tests exercise the complete flow: store construction -> save ->
//! load -> update -> delete, with every write landing under a temporary root.

use files::{
    Directory, Folder, FolderStore, Format, LoadError, SaveError, WellKnownDirectory,
    WriteOptions,
};
use files_test_utils::Sandbox;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Session {
    user: String,
    visits: u32,
    pages: Vec<String>,
}

fn session() -> Session {
    Session {
        user: "grace".into(),
        visits: 1,
        pages: vec!["/".into(), "/docs".into()],
    }
}

#[test]
fn full_lifecycle_on_disk() {
    let _ = files::logging::init_with("files=debug");
    let sandbox = Sandbox::new();
    let store = FolderStore::with_subfolder(
        sandbox.agent(),
        WellKnownDirectory::ApplicationSupport,
        Some("sessions"),
    )
    .unwrap();
    let resources = store.resources();

    resources.save(&session(), "grace.json").unwrap();
    sandbox.assert_stored(
        WellKnownDirectory::ApplicationSupport,
        "sessions/grace.json",
        "\"user\": \"grace\"",
    );

    resources
        .update("grace.json", |s: &mut Session| {
            s.visits += 1;
            s.pages.push("/blog".into());
        })
        .unwrap();
    let updated: Session = resources.load("grace.json").unwrap();
    assert_eq!(updated.visits, 2);
    assert_eq!(updated.pages.last().map(String::as_str), Some("/blog"));

    resources.delete("grace.json").unwrap();
    sandbox.assert_absent(WellKnownDirectory::ApplicationSupport, "sessions/grace.json");
    assert!(matches!(
        resources.load::<Session>("grace.json"),
        Err(LoadError::ReadFailed { .. })
    ));
}

#[test]
fn every_format_round_trips_on_disk() {
    let sandbox = Sandbox::new();

    for format in [Format::Json, Format::Toml, Format::Yaml] {
        let store = FolderStore::new(sandbox.agent(), WellKnownDirectory::Documents)
            .unwrap()
            .with_format(format);
        let name = format!("session.{}", format.name().to_lowercase());

        store.resources().save(&session(), &name).unwrap();
        let loaded: Session = store.resources().load(&name).unwrap();

        assert_eq!(loaded, session(), "{} round trip", format.name());
    }

    sandbox.assert_stored(WellKnownDirectory::Documents, "session.toml", "user = \"grace\"");
    sandbox.assert_stored(WellKnownDirectory::Documents, "session.yaml", "user: grace");
}

#[test]
fn nested_stores_share_one_kind_root() {
    let sandbox = Sandbox::new();
    let thumbs =
        FolderStore::with_subfolder(sandbox.agent(), WellKnownDirectory::Caches, Some("img/thumbs"))
            .unwrap();
    let previews =
        FolderStore::with_subfolder(sandbox.agent(), WellKnownDirectory::Caches, Some("img/previews"))
            .unwrap();

    thumbs.resources().save_data(b"t", "a.png").unwrap();
    previews.resources().save_data(b"p", "a.png").unwrap();

    sandbox.assert_stored(WellKnownDirectory::Caches, "img/thumbs/a.png", "t");
    sandbox.assert_stored(WellKnownDirectory::Caches, "img/previews/a.png", "p");
    assert_eq!(
        thumbs.folder().location().parent(),
        previews.folder().location().parent()
    );
}

#[test]
fn save_recreates_a_root_removed_behind_the_store() {
    let sandbox = Sandbox::new();
    let store = FolderStore::with_subfolder(
        sandbox.agent(),
        WellKnownDirectory::Temporary,
        Some("scratch"),
    )
    .unwrap();

    std::fs::remove_dir_all(sandbox.kind_root(WellKnownDirectory::Temporary)).unwrap();
    store.resources().save_data(b"again", "note.txt").unwrap();

    sandbox.assert_stored(WellKnownDirectory::Temporary, "scratch/note.txt", "again");
}

#[test]
fn protected_store_refuses_to_overwrite() {
    let sandbox = Sandbox::new();
    let store = FolderStore::new(sandbox.agent(), WellKnownDirectory::Documents)
        .unwrap()
        .with_write_options(WriteOptions::without_overwriting());

    store.resources().save(&session(), "once.json").unwrap();
    let error = store.resources().save(&session(), "once.json").unwrap_err();

    assert!(matches!(error, SaveError::WriteFailed { ref key, .. } if key == "once.json"));
}

#[test]
fn files_move_between_stores() {
    let sandbox = Sandbox::new();
    let agent = sandbox.agent();
    let inbox = FolderStore::with_subfolder(agent.clone(), WellKnownDirectory::Documents, Some("inbox"))
        .unwrap();
    let archive = Folder::new(sandbox.kind_root(WellKnownDirectory::Documents)).subfolder("archive");
    archive.create_if_necessary(&agent).unwrap();

    inbox.resources().save(&session(), "grace.json").unwrap();
    inbox
        .resources()
        .resource("grace.json")
        .move_to(&archive, &agent)
        .unwrap();

    sandbox.assert_absent(WellKnownDirectory::Documents, "inbox/grace.json");
    sandbox.assert_stored(WellKnownDirectory::Documents, "archive/grace.json", "grace");
}
