use std::path::PathBuf;

use combat_content::{ArchetypeCatalog, ArenaRules, ContentFactory};

fn factory() -> ContentFactory {
    ContentFactory::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"))
}

#[test]
fn shipped_catalog_matches_builtin() {
    let loaded = factory()
        .load_catalog()
        .expect("archetypes.ron should parse");
    assert_eq!(loaded, ArchetypeCatalog::builtin());
}

#[test]
fn shipped_rules_load() {
    let rules = factory().load_rules().expect("rules.toml should parse");
    assert_eq!(rules, ArenaRules::default());
}

#[test]
fn missing_directory_fails_with_context() {
    let err = ContentFactory::new("/nonexistent/arena-data")
        .load_rules()
        .expect_err("missing file must fail");
    assert!(err.to_string().contains("rules.toml"));
}
