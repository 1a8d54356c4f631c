//! Name resolution tests.

use proptest::prelude::*;
use valuetable_parser::{AliasTable, MatchPolicy, NameResolver, Resolution};
use valuetable_storage::{DatasetStore, ItemRecord};

fn store() -> DatasetStore {
    DatasetStore::from_records([
        ItemRecord::new("Frost Aura").with_value(100.0),
        ItemRecord::new("Festival Aura").with_value(50.0),
        ItemRecord::new("Frost Blade").with_value(75.0),
        ItemRecord::new("Shadow Cloak"),
    ])
    .unwrap()
}

fn names(resolution: &Resolution<'_>) -> Vec<String> {
    match resolution {
        Resolution::Ambiguous(names) => names.clone(),
        other => panic!("expected suggestions, got {other:?}"),
    }
}

#[test]
fn exact_match_ignores_case_and_decoration() {
    let store = store();
    let resolved = NameResolver::new().resolve(&store, "<:ice:42> frost AURA ");
    assert_eq!(resolved.record().unwrap().name, "Frost Aura");
}

#[test]
fn exact_match_beats_earlier_substring() {
    let store = DatasetStore::from_records([
        ItemRecord::new("Frost Aura Deluxe"),
        ItemRecord::new("Frost Aura"),
    ])
    .unwrap();
    let resolved = NameResolver::new().resolve(&store, "frost aura");
    assert_eq!(resolved.record().unwrap().name, "Frost Aura");
}

#[test]
fn substring_takes_first_in_load_order() {
    let store = store();
    let resolved = NameResolver::new().resolve(&store, "frost");
    assert_eq!(resolved.record().unwrap().name, "Frost Aura");
}

#[test]
fn misspelling_suggests() {
    let store = store();
    let suggestions = names(&NameResolver::new().resolve(&store, "festivl aura"));
    assert_eq!(suggestions[0], "Festival Aura");
    assert!(suggestions.len() <= 5);
}

#[test]
fn nonsense_is_not_found() {
    let store = store();
    assert_eq!(
        NameResolver::new().resolve(&store, "zzzznotreal"),
        Resolution::NotFound
    );
    assert_eq!(NameResolver::new().resolve(&store, "<:x:1>"), Resolution::NotFound);
}

#[test]
fn closest_policy_commits() {
    let store = store();
    let resolver = NameResolver::new();
    let closest = resolver.resolve_closest(&store, "shadow clok").unwrap();
    assert_eq!(closest.name, "Shadow Cloak");
    assert!(resolver.resolve_closest(&store, "zzzznotreal").is_none());
    assert!(
        resolver
            .resolve_with(&store, "shadow clok", MatchPolicy::Closest)
            .is_unique()
    );
}

#[test]
fn case_sensitive_resolver_misses_wrong_case() {
    let store = store();
    let resolver = NameResolver::new().with_case_sensitive(true);
    assert!(resolver.resolve(&store, "Frost Aura").is_unique());
    assert!(!resolver.resolve(&store, "frost aura").is_unique());
}

#[test]
fn aliases_resolve_to_items() {
    let store = store();
    let resolver =
        NameResolver::new().with_aliases(AliasTable::new().with("ShadowEmoji", "Shadow Cloak"));
    let resolved = resolver.resolve(&store, "<:ShadowEmoji:99>");
    assert_eq!(resolved.record().unwrap().name, "Shadow Cloak");
}

#[test]
fn suggestions_are_distinct() {
    let store = DatasetStore::from_records([
        ItemRecord::new("Storm Aura"),
        ItemRecord::new("Storm Aura"),
        ItemRecord::new("Storm Axe"),
    ])
    .unwrap();
    let suggestions = names(&NameResolver::new().resolve(&store, "storn aur"));
    assert_eq!(suggestions, vec!["Storm Aura", "Storm Axe"]);
}

proptest! {
    #[test]
    fn decorated_exact_name_resolves_to_first_row(
        index in 0usize..4,
        left in "(<:[a-z]{1,5}:[0-9]{1,5}> ?){0,2}",
        right in "( ?<a?:[a-z]{1,5}:[0-9]{1,5}>){0,2}",
    ) {
        let store = store();
        let name = store.get(index).unwrap().name.clone();
        let query = format!("{left}{}{right}", name.to_uppercase());
        let resolved = NameResolver::new().resolve(&store, &query);
        prop_assert_eq!(resolved.record().map(|r| r.name.as_str()), Some(name.as_str()));
    }

    #[test]
    fn resolution_never_panics(query in ".{0,30}") {
        let store = store();
        let _ = NameResolver::new().resolve(&store, &query);
        let _ = NameResolver::new().resolve_closest(&store, &query);
    }
}
