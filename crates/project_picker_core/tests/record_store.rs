use project_picker_core::{
    seed_entries, seeded_store, Cardinality, EntryDraft, EntrySelector, EntryValidationError,
    FilterCriteria, Level, RecordStore, StoreConfig, StoreError, StoreErrorKind,
};

fn two_entry_store() -> RecordStore {
    let mut store = RecordStore::new(StoreConfig::default());
    for name in ["IT", "Entwicklung", "Datenbank"] {
        store.add_category(name).unwrap();
    }
    store
        .create_entry(EntryDraft::new("Alpha").with_categories(["IT", "Entwicklung"]))
        .unwrap();
    store
        .create_entry(EntryDraft::new("Beta").with_categories(["IT", "Datenbank"]))
        .unwrap();
    store
}

fn titles(store: &RecordStore) -> Vec<&str> {
    store.entries().iter().map(|e| e.title.as_str()).collect()
}

#[test]
fn seeded_store_derives_sorted_vocabulary_from_entries() {
    let store = seeded_store(StoreConfig::default()).unwrap();
    assert_eq!(store.entry_count(), 5);
    assert_eq!(
        store.categories(),
        vec!["Datenbank", "Entwicklung", "IT", "Infrastruktur", "Marketing"]
    );
}

#[test]
fn create_appends_entry_with_defaults() {
    let mut store = seeded_store(StoreConfig::default()).unwrap();
    let created = store.create_entry(EntryDraft::new("Projekt Omega")).unwrap();

    assert_eq!(store.entry_count(), 6);
    let last = store.entries().last().unwrap();
    assert_eq!(last, &created);
    assert!(last.description.is_empty());
    assert!(last.money_level.is_empty());
    assert!(last.time_level.is_empty());
    assert!(last.categories.is_empty());
}

#[test]
fn create_with_blank_title_fails_and_leaves_count_unchanged() {
    let mut store = seeded_store(StoreConfig::default()).unwrap();
    let err = store
        .create_entry(EntryDraft::new("  ").with_description("body"))
        .unwrap_err();

    assert_eq!(err, StoreError::Validation(EntryValidationError::BlankTitle));
    assert_eq!(err.kind(), StoreErrorKind::Validation);
    assert_eq!(store.entry_count(), 5);
}

#[test]
fn explicit_registration_rejects_unknown_category() {
    let mut store = seeded_store(StoreConfig::default()).unwrap();
    let err = store
        .create_entry(EntryDraft::new("Omega").with_categories(["Forschung"]))
        .unwrap_err();

    assert_eq!(
        err,
        StoreError::Validation(EntryValidationError::UnknownCategory(
            "Forschung".to_string()
        ))
    );
    assert!(!store.categories().contains(&"Forschung".to_string()));
    assert_eq!(store.entry_count(), 5);
}

#[test]
fn scalar_variant_registers_new_category_on_create() {
    let mut store = RecordStore::new(StoreConfig::scalar());
    store
        .create_entry(
            EntryDraft::new("Omega")
                .with_money([Level::Two])
                .with_categories(["Forschung"]),
        )
        .unwrap();
    assert_eq!(store.categories(), vec!["Forschung"]);

    let err = store
        .create_entry(EntryDraft::new("Psi").with_money([Level::One, Level::Two]))
        .unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::Validation);
    assert_eq!(store.config().cardinality, Cardinality::Scalar);
}

#[test]
fn update_by_title_replaces_fields_in_place() {
    let mut store = seeded_store(StoreConfig::default()).unwrap();
    let original = store.get_entry("Projekt Gamma").unwrap().clone();

    let draft = EntryDraft::new("Projekt Gamma II")
        .with_description("Kampagne Q2")
        .with_money([Level::One])
        .with_time([Level::One, Level::Three])
        .with_categories(["Marketing", "IT"]);
    store.update_entry("Projekt Gamma", draft).unwrap();

    assert_eq!(store.entry_count(), 5);
    let updated = &store.entries()[2];
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.title, "Projekt Gamma II");
    assert_eq!(updated.description, "Kampagne Q2");
    assert_eq!(updated.money_level.iter().copied().collect::<Vec<_>>(), vec![Level::One]);
    assert_eq!(
        updated.time_level.iter().copied().collect::<Vec<_>>(),
        vec![Level::One, Level::Three]
    );
    assert_eq!(
        updated.categories.iter().cloned().collect::<Vec<_>>(),
        vec!["IT".to_string(), "Marketing".to_string()]
    );
    assert!(store.get_entry("Projekt Gamma").is_none());
}

#[test]
fn update_missing_entry_returns_not_found() {
    let mut store = seeded_store(StoreConfig::default()).unwrap();
    let err = store
        .update_entry("Projekt Zeta", EntryDraft::new("Zeta"))
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::EntryNotFound(EntrySelector::Title("Projekt Zeta".to_string()))
    );
    assert_eq!(err.kind(), StoreErrorKind::NotFound);
}

#[test]
fn update_validates_like_create() {
    let mut store = seeded_store(StoreConfig::default()).unwrap();
    let err = store
        .update_entry("Projekt Alpha", EntryDraft::new(""))
        .unwrap_err();
    assert_eq!(err, StoreError::Validation(EntryValidationError::BlankTitle));
    assert_eq!(store.entries()[0].title, "Projekt Alpha");
}

#[test]
fn duplicate_titles_resolve_to_first_match_but_ids_disambiguate() {
    let mut store = RecordStore::new(StoreConfig::default());
    let first = store.create_entry(EntryDraft::new("Same")).unwrap();
    let second = store.create_entry(EntryDraft::new("Same")).unwrap();

    store
        .update_entry("Same", EntryDraft::new("Same").with_description("first"))
        .unwrap();
    store
        .update_entry(second.id, EntryDraft::new("Same").with_description("second"))
        .unwrap();

    assert_eq!(store.get_entry(first.id).unwrap().description, "first");
    assert_eq!(store.get_entry(second.id).unwrap().description, "second");
}

#[test]
fn delete_entry_compacts_sequence() {
    let mut store = seeded_store(StoreConfig::default()).unwrap();
    let removed = store.delete_entry("Projekt Beta").unwrap();
    assert_eq!(removed.title, "Projekt Beta");
    assert_eq!(
        titles(&store),
        vec!["Projekt Alpha", "Projekt Gamma", "Projekt Delta", "Projekt Epsilon"]
    );

    let err = store.delete_entry(removed.id).unwrap_err();
    assert_eq!(err, StoreError::EntryNotFound(EntrySelector::Id(removed.id)));
}

#[test]
fn add_category_validates_and_keeps_vocabulary_sorted() {
    let mut store = seeded_store(StoreConfig::default()).unwrap();

    assert_eq!(store.add_category(" Architektur ").unwrap(), "Architektur");
    assert_eq!(store.categories()[0], "Architektur");

    assert_eq!(
        store.add_category("").unwrap_err(),
        StoreError::Validation(EntryValidationError::BlankCategory)
    );
    assert_eq!(
        store.add_category("IT").unwrap_err(),
        StoreError::DuplicateCategory("IT".to_string())
    );
    // Case-sensitive vocabulary.
    store.add_category("it").unwrap();
    assert_eq!(store.category_usage("Architektur"), 0);
}

#[test]
fn delete_category_cascades_and_reports_affected_count() {
    let mut store = seeded_store(StoreConfig::default()).unwrap();
    assert_eq!(store.category_usage("IT"), 3);

    let affected = store.delete_category("IT").unwrap();
    assert_eq!(affected, 3);
    assert!(!store.categories().contains(&"IT".to_string()));
    assert!(store.entries().iter().all(|e| !e.has_category("IT")));
    assert_eq!(store.entry_count(), 5);

    let criteria = FilterCriteria::new().with_categories(["IT"]);
    assert!(store.filter(&criteria).is_empty());

    assert_eq!(
        store.delete_category("IT").unwrap_err(),
        StoreError::CategoryNotFound("IT".to_string())
    );
}

#[test]
fn delete_unused_category_affects_nothing() {
    let mut store = seeded_store(StoreConfig::default()).unwrap();
    store.add_category("Leer").unwrap();
    assert_eq!(store.delete_category("Leer").unwrap(), 0);
}

#[test]
fn category_scenario_filter_then_cascade() {
    let mut store = two_entry_store();

    let criteria = FilterCriteria::new().with_categories(["Datenbank"]);
    let matched: Vec<_> = store.filter(&criteria).iter().map(|e| e.title.clone()).collect();
    assert_eq!(matched, vec!["Beta"]);

    store.delete_category("IT").unwrap();
    let alpha = store.get_entry("Alpha").unwrap();
    let beta = store.get_entry("Beta").unwrap();
    assert_eq!(alpha.categories.iter().collect::<Vec<_>>(), vec!["Entwicklung"]);
    assert_eq!(beta.categories.iter().collect::<Vec<_>>(), vec!["Datenbank"]);
    assert_eq!(store.categories(), vec!["Datenbank", "Entwicklung"]);
}

#[test]
fn option_lists_follow_current_entries() {
    let mut store = seeded_store(StoreConfig::default()).unwrap();
    assert_eq!(store.money_options(), vec![Level::One, Level::Two, Level::Three]);
    assert_eq!(store.time_options(), vec![Level::One, Level::Two, Level::Three]);

    store.delete_entry("Projekt Delta").unwrap();
    assert_eq!(store.money_options(), vec![Level::Two, Level::Three]);
    assert_eq!(store.time_options(), vec![Level::Two, Level::Three]);
}

#[test]
fn seed_entries_are_independent_per_session() {
    let first = seed_entries(&StoreConfig::default());
    let second = seed_entries(&StoreConfig::default());
    assert_ne!(first[0].id, second[0].id);
    assert_eq!(first[0].title, second[0].title);
}

#[test]
fn scalar_seeded_store_accepts_unchanged_edits() {
    let mut store = seeded_store(StoreConfig::scalar()).unwrap();
    for entry in store.entries() {
        assert!(entry.money_level.len() <= 1);
        assert!(entry.time_level.len() <= 1);
        assert!(entry.categories.len() <= 1);
    }

    let beta = store.get_entry("Projekt Beta").unwrap().clone();
    let updated = store.update_entry("Projekt Beta", beta.to_draft()).unwrap();
    assert_eq!(updated, beta);
}
