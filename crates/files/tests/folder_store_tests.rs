use files::{
    Directory, Error, Folder, FolderStore, Format, NormalizedPath, StoreConfig, WellKnownDirectory,
    WriteOptions,
};
use files_test_utils::{Endpoint, MockContext};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn initialises_with_base_directory_only() {
    let agent = MockContext::new().with_root(WellKnownDirectory::Documents, "/base");

    let store = FolderStore::new(agent, WellKnownDirectory::Documents).unwrap();

    assert_eq!(store.folder().location().as_str(), "/base");
    assert!(store.agent().has_folder("/base"));
    assert_eq!(
        store.agent().calls(),
        vec![Endpoint::FolderExists, Endpoint::CreateDirectory]
    );
}

#[rstest]
#[case::flat(WellKnownDirectory::Temporary, Some("images"), "/base/images")]
#[case::nested(WellKnownDirectory::ApplicationSupport, Some("a/b/c"), "/base/a/b/c")]
#[case::none(WellKnownDirectory::Caches, None, "/base")]
fn initialises_with_subfolder(
    #[case] kind: WellKnownDirectory,
    #[case] subfolder: Option<&str>,
    #[case] expected: &str,
) {
    let agent = MockContext::new().with_root(kind, "/base");

    let store = FolderStore::with_subfolder(agent, kind, subfolder).unwrap();

    assert_eq!(store.folder().location().as_str(), expected);
    assert_eq!(store.kind(), kind);
    assert!(store.agent().has_folder(expected));
    assert_eq!(
        store.agent().calls(),
        vec![Endpoint::FolderExists, Endpoint::CreateDirectory]
    );
}

#[test]
fn nested_application_support_resolves_under_support_root() {
    let agent = MockContext::new().with_root(WellKnownDirectory::ApplicationSupport, "/support");

    let store =
        FolderStore::with_subfolder(agent, WellKnownDirectory::ApplicationSupport, Some("a/b/c"))
            .unwrap();

    assert_eq!(store.folder(), &Folder::new("/support/a/b/c"));
}

#[test]
fn existing_root_is_not_recreated() {
    let agent = MockContext::new()
        .with_root(WellKnownDirectory::Caches, "/cache")
        .with_folder("/cache");

    let store = FolderStore::new(agent, WellKnownDirectory::Caches).unwrap();

    assert_eq!(store.agent().calls(), vec![Endpoint::FolderExists]);
}

#[test]
fn unavailable_directory_fails_construction() {
    let agent = MockContext::new().with_unavailable(WellKnownDirectory::Documents);

    let error = FolderStore::new(agent, WellKnownDirectory::Documents).unwrap_err();

    assert!(matches!(
        error,
        Error::DirectoryUnavailable {
            kind: WellKnownDirectory::Documents
        }
    ));
}

#[test]
fn create_failure_fails_construction() {
    let agent = MockContext::new().failing(Endpoint::CreateDirectory);

    assert!(FolderStore::new(agent, WellKnownDirectory::Caches).is_err());
}

#[test]
fn kind_builds_store_through_agent() {
    let agent = MockContext::new();

    let store = WellKnownDirectory::Temporary.folder_store(&agent).unwrap();

    assert_eq!(store.folder().location(), &NormalizedPath::new("/mock/temporary"));
    assert!(agent.has_folder("/mock/temporary"));
}

#[test]
fn from_folder_creates_missing_root() {
    let agent = MockContext::new();

    let store =
        FolderStore::from_folder(&agent, Folder::new("/x/y"), WellKnownDirectory::Documents)
            .unwrap();

    assert!(store.resources().folder_exists());
    assert!(agent.has_folder("/x/y"));
    assert_eq!(store.kind(), WellKnownDirectory::Documents);
}

#[test]
fn from_folder_keeps_existing_root() {
    let agent = MockContext::new().with_file("/x/keep.json", "{}");

    FolderStore::from_folder(&agent, Folder::new("/x"), WellKnownDirectory::Documents).unwrap();

    assert_eq!(agent.calls(), vec![Endpoint::FolderExists]);
    assert!(agent.file("/x/keep.json").is_some());
}

#[test]
fn from_folder_propagates_create_failure() {
    let agent = MockContext::new().failing(Endpoint::CreateDirectory);

    let result = FolderStore::from_folder(&agent, Folder::new("/x"), WellKnownDirectory::Caches);

    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn from_config_applies_every_setting() {
    let agent = MockContext::new().with_root(WellKnownDirectory::Caches, "/cache");
    let config = StoreConfig {
        kind: WellKnownDirectory::Caches,
        subfolder: Some("thumbs".into()),
        format: Format::Yaml,
        atomic_writes: true,
        overwrite: true,
    };

    let store = FolderStore::from_config(&agent, &config).unwrap();
    store.resources().save(&vec![1, 2, 3], "sizes.yaml").unwrap();

    assert_eq!(store.format(), Format::Yaml);
    assert_eq!(
        agent.writes(),
        vec![(NormalizedPath::new("/cache/thumbs/sizes.yaml"), WriteOptions::atomic())]
    );
    let stored = String::from_utf8(agent.file("/cache/thumbs/sizes.yaml").unwrap()).unwrap();
    assert_eq!(stored, "- 1\n- 2\n- 3\n");
}

#[test]
fn shared_agent_backs_several_stores() {
    let agent = MockContext::new();
    let documents = FolderStore::new(&agent, WellKnownDirectory::Documents).unwrap();
    let caches = FolderStore::new(&agent, WellKnownDirectory::Caches).unwrap();

    documents.resources().save_data(b"doc", "same-name").unwrap();
    caches.resources().save_data(b"cache", "same-name").unwrap();

    assert_eq!(agent.file("/mock/documents/same-name"), Some(b"doc".to_vec()));
    assert_eq!(agent.file("/mock/caches/same-name"), Some(b"cache".to_vec()));
}
