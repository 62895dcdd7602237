//! Integration tests for the brand knowledge base and its persistence.

use std::sync::Arc;
use std::thread;

use harmonize_core::models::brand::DictionarySource;
use harmonize_core::traits::ISnapshotStore;
use harmonize_knowledge::{
    BrandKnowledgeBase, CustomDictionary, JsonFileStore, LearnedSnapshot, MemoryStore,
};

fn in_memory_kb() -> (Arc<MemoryStore<LearnedSnapshot>>, BrandKnowledgeBase) {
    let store = Arc::new(MemoryStore::new());
    let kb = BrandKnowledgeBase::new(store.clone());
    (store, kb)
}

#[test]
fn static_lookup_has_full_confidence() {
    let (_, kb) = in_memory_kb();
    let m = kb.lookup("CRST").expect("CRST is a static alias");
    assert_eq!(m.canonical_name, "Crest");
    assert_eq!(m.confidence.value(), 1.0);
    assert_eq!(m.category.as_deref(), Some("Oral Care"));
    assert_eq!(m.manufacturer.as_deref(), Some("Procter & Gamble"));
}

#[test]
fn lookup_is_case_insensitive() {
    let (_, kb) = in_memory_kb();
    assert!(kb.lookup("crst").is_some());
    assert!(kb.lookup("  Mtn Dew  ").is_some());
}

#[test]
fn unknown_alias_is_a_miss_not_an_error() {
    let (_, kb) = in_memory_kb();
    assert!(kb.lookup("ZZZZZ").is_none());
    assert!(kb.expand_abbreviation("ZZZZZ").is_none());
}

#[test]
fn learned_alias_resolves_with_reduced_confidence() {
    let store = Arc::new(MemoryStore::with_initial(LearnedSnapshot {
        abbreviations: [("KRST".to_string(), "Crest".to_string())].into(),
        brands: Default::default(),
    }));
    let kb = BrandKnowledgeBase::new(store);
    let m = kb.lookup("KRST").expect("learned alias should resolve");
    assert_eq!(m.canonical_name, "Crest");
    assert_eq!(m.confidence.value(), 0.95);
}

#[test]
fn learned_brand_entries_merge_with_learned_trust() {
    let store = Arc::new(MemoryStore::with_initial(LearnedSnapshot {
        abbreviations: Default::default(),
        brands: [(
            "BRISK".to_string(),
            harmonize_core::models::brand::BrandEntry {
                name: "Brisk".to_string(),
                category: Some("Beverages".to_string()),
                manufacturer: None,
                source: DictionarySource::Static,
            },
        )]
        .into(),
    }));
    let kb = BrandKnowledgeBase::new(store);
    let m = kb.lookup("BRISK").expect("merged learned brand");
    assert_eq!(m.confidence.value(), 0.95);
}

#[test]
fn expansion_prefers_static_table_over_learned() {
    let store = Arc::new(MemoryStore::with_initial(LearnedSnapshot {
        abbreviations: [("WHTN".to_string(), "Wrong".to_string())].into(),
        brands: Default::default(),
    }));
    let kb = BrandKnowledgeBase::new(store);
    assert_eq!(kb.expand_abbreviation("WHTN").as_deref(), Some("Whitening"));
}

#[test]
fn learn_is_an_idempotent_upsert_and_persists() {
    let (store, kb) = in_memory_kb();
    kb.learn("TWST", "Twist").unwrap();
    kb.learn("TWST", "Twist").unwrap();
    assert_eq!(kb.expand_abbreviation("twst").as_deref(), Some("Twist"));

    let persisted = store.load().unwrap().unwrap();
    assert_eq!(persisted.abbreviations.get("TWST").map(String::as_str), Some("Twist"));
}

#[test]
fn failed_save_reports_error_but_keeps_memory_state() {
    let (store, kb) = in_memory_kb();
    store.fail_saves(true);
    assert!(kb.learn("TWST", "Twist").is_err());
    // In-memory state is authoritative until the next successful save.
    assert_eq!(kb.expand_abbreviation("TWST").as_deref(), Some("Twist"));

    store.fail_saves(false);
    kb.learn("SPKL", "Sparkle").unwrap();
    let persisted = store.load().unwrap().unwrap();
    assert_eq!(persisted.abbreviations.len(), 2, "next save reconciles disk");
}

#[test]
fn concurrent_learns_lose_no_updates() {
    let (_, kb) = in_memory_kb();
    let kb = Arc::new(kb);
    let a = {
        let kb = kb.clone();
        thread::spawn(move || kb.learn("AAA1", "Alpha").unwrap())
    };
    let b = {
        let kb = kb.clone();
        thread::spawn(move || kb.learn("BBB1", "Beta").unwrap())
    };
    a.join().unwrap();
    b.join().unwrap();
    assert_eq!(kb.expand_abbreviation("AAA1").as_deref(), Some("Alpha"));
    assert_eq!(kb.expand_abbreviation("BBB1").as_deref(), Some("Beta"));
}

#[test]
fn corrupt_snapshot_degrades_to_static_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("learned_mappings.json");
    std::fs::write(&path, b"{broken").unwrap();

    let store = Arc::new(JsonFileStore::<LearnedSnapshot>::new(&path));
    let kb = BrandKnowledgeBase::new(store);
    // Static dictionary fully usable despite the corrupt learned store.
    assert!(kb.lookup("PEPSI").is_some());
    assert!(kb.expand_abbreviation("WHTN").is_some());
}

#[test]
fn file_store_round_trips_through_learn() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("learned_mappings.json");

    {
        let store = Arc::new(JsonFileStore::<LearnedSnapshot>::new(&path));
        let kb = BrandKnowledgeBase::new(store);
        kb.learn("GLW", "Glow").unwrap();
    }

    // A fresh knowledge base picks the mapping up from disk.
    let store = Arc::new(JsonFileStore::<LearnedSnapshot>::new(&path));
    let kb = BrandKnowledgeBase::new(store);
    assert_eq!(kb.expand_abbreviation("GLW").as_deref(), Some("Glow"));
}

#[test]
fn custom_dictionary_merges_over_static_tables() {
    let store = Arc::new(MemoryStore::new());
    let custom: CustomDictionary = serde_json::from_str(
        r#"{
            "brands": {
                "FNTM": {"name": "Fantom", "category": "Beverages", "manufacturer": "Acme"}
            },
            "abbreviations": {"xtr": "Extra"}
        }"#,
    )
    .unwrap();
    let kb = BrandKnowledgeBase::with_custom_dictionary(store, custom);
    assert_eq!(kb.lookup("FNTM").unwrap().canonical_name, "Fantom");
    // Custom keys are canonicalized to uppercase.
    assert_eq!(kb.expand_abbreviation("XTR").as_deref(), Some("Extra"));
}

#[test]
fn all_brands_deduplicates_aliases() {
    let (_, kb) = in_memory_kb();
    let brands = kb.all_brands();
    let crest_count = brands.iter().filter(|b| *b == "Crest").count();
    assert_eq!(crest_count, 1);
    assert!(brands.contains(&"Mountain Dew".to_string()));
}

#[test]
fn brand_info_finds_entry_by_canonical_name() {
    let (_, kb) = in_memory_kb();
    let info = kb.brand_info("crest").unwrap();
    assert_eq!(info.category.as_deref(), Some("Oral Care"));
    assert!(kb.brand_info("Nonexistent").is_none());
}
