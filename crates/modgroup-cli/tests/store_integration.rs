//! Integration tests for the config store.
//!
//! These drive `ConfigStore` through its *public* API the same way the CLI
//! does, with the mock platform pointed at a `tempfile` directory.  They
//! verify:
//!
//! - The happy path: groups added to one store instance survive a save and
//!   reload into a fresh instance, in order.
//! - First-run setup: opening against a missing file creates the parent
//!   directory and the default document.
//! - Corrupt-file recovery: invalid JSON is replaced with the default.
//! - The full add/add/list/remove scenario from the user documentation.

use modgroup_cli::application::store::ConfigStore;
use modgroup_cli::infrastructure::platform::mock::MockPlatform;
use modgroup_core::{ConfigFile, GroupError, ModLoader};
use std::path::Path;

fn open_at(path: &Path) -> ConfigStore {
    ConfigStore::open(Box::new(MockPlatform::new(path))).expect("open must succeed")
}

fn names(store: &ConfigStore) -> Vec<String> {
    store.groups().map(|g| g.name.clone()).collect()
}

#[test]
fn test_saved_groups_reload_in_order_from_a_fresh_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("minecraft-mod-config.json");

    let mut store = open_at(&path);
    store.add_group("alpha", "forge").unwrap();
    store.add_group("beta", "fabric").unwrap();
    store.add_group("gamma", "neoforge").unwrap();
    store.save().unwrap();
    drop(store);

    let reloaded = open_at(&path);
    let groups: Vec<_> = reloaded
        .groups()
        .map(|g| (g.name.as_str(), g.mod_loader))
        .collect();
    assert_eq!(
        groups,
        vec![
            ("alpha", ModLoader::Forge),
            ("beta", ModLoader::Fabric),
            ("gamma", ModLoader::NeoForge),
        ]
    );
}

#[test]
fn test_first_run_creates_parent_directory_and_default_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".config").join("minecraft-mod-config.json");
    assert!(!path.parent().unwrap().exists());

    let store = open_at(&path);

    assert_eq!(store.groups().count(), 0);
    assert_eq!(store.config_file_path(), path);
    let parsed: ConfigFile =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed, ConfigFile::default());
}

#[test]
fn test_corrupt_file_is_reset_to_the_default_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("minecraft-mod-config.json");
    std::fs::write(&path, "]]]{ definitely not json").unwrap();

    let store = open_at(&path);

    assert_eq!(store.groups().count(), 0);
    let on_disk = std::fs::read_to_string(&path).unwrap();
    let parsed: ConfigFile = serde_json::from_str(&on_disk).unwrap();
    assert!(parsed.groups.is_empty());
}

#[test]
fn test_duplicate_add_after_reload_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("minecraft-mod-config.json");

    let mut store = open_at(&path);
    store.add_group("persistent", "quilt").unwrap();
    store.save().unwrap();
    drop(store);

    let mut reloaded = open_at(&path);
    assert_eq!(
        reloaded.add_group("persistent", "forge").unwrap_err(),
        GroupError::DuplicateName("persistent".to_string())
    );
}

#[test]
fn test_documented_scenario_add_add_list_remove() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("minecraft-mod-config.json");
    let mut store = open_at(&path);

    store.add_group("vanilla-plus", "forge").unwrap();
    store.add_group("kitchen-sink", "fabric").unwrap();
    assert_eq!(names(&store), vec!["vanilla-plus", "kitchen-sink"]);

    let removed = store.remove_group("vanilla-plus").unwrap();
    assert_eq!(removed.mod_loader, ModLoader::Forge);
    assert_eq!(names(&store), vec!["kitchen-sink"]);
    assert_eq!(
        store.groups().next().unwrap().mod_loader,
        ModLoader::Fabric
    );
}

#[test]
fn test_unsaved_changes_are_lost_on_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("minecraft-mod-config.json");

    let mut store = open_at(&path);
    store.add_group("ephemeral", "forge").unwrap();
    // No save.
    drop(store);

    let reloaded = open_at(&path);
    assert_eq!(reloaded.groups().count(), 0);
}
