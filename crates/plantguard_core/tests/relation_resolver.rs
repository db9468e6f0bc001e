use plantguard_core::{
    related_items, resolve_related, CausedBy, Disease, DiseaseDraft, Pest, PestDraft, RecordDraft,
    RecordId, RecordKind, RecordRepository, RecordStore, RelatedItem, RelationSource, Remedy,
    RemedyDraft, StoreResult,
};
use uuid::Uuid;

fn remedy_against(store: &mut RecordStore, name: &str, targets: &[&str]) -> RecordId {
    store.create_remedy(RemedyDraft {
        effective_against: targets.iter().map(|target| target.to_string()).collect(),
        ..RemedyDraft::new(name, "3")
    })
}

fn names(items: &[RelatedItem]) -> Vec<&str> {
    items.iter().map(|item| item.name.as_str()).collect()
}

#[test]
fn explicit_remedy_on_disease_resolves_to_remedy_summary() {
    let mut store = RecordStore::new();
    let remedy = remedy_against(&mut store, "Copper Fungicide", &["Leaf spot"]);
    let disease = store.create_disease(DiseaseDraft {
        related_remedies: Some(vec![remedy]),
        ..DiseaseDraft::new("D1", "3")
    });

    let items = resolve_related(
        &store,
        &RelationSource {
            kind: RecordKind::Disease,
            id: disease,
            related_ids: vec![remedy],
        },
    );

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, remedy);
    assert_eq!(items[0].kind, RecordKind::Remedy);
    assert_eq!(items[0].name, "Copper Fungicide");
    assert!(items[0].severity.is_none());
    assert!(items[0].effectiveness.is_some());
    assert!(items[0].category.is_some());
}

#[test]
fn explicit_pest_on_disease_resolves_as_pest_before_remedies() {
    let mut store = RecordStore::new();
    let remedy = remedy_against(&mut store, "Copper Fungicide", &[]);
    let pest = store.create_pest(PestDraft::new("Leafhoppers", "3"));
    store.create_pest(PestDraft::new("Aphids", "3"));
    let disease = store.create_disease(DiseaseDraft {
        caused_by: CausedBy::Bacterial,
        related_pests: Some(vec![pest]),
        related_remedies: Some(vec![remedy]),
        ..DiseaseDraft::new("D1", "3")
    });

    let items = related_items(&store, RecordKind::Disease, disease);

    let ids: Vec<_> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![pest, remedy]);
    assert_eq!(items[0].kind, RecordKind::Pest);
    assert_eq!(items[0].name, "Leafhoppers");
    assert!(items[0].severity.is_some());
    assert_eq!(items[1].kind, RecordKind::Remedy);
}

#[test]
fn explicit_pest_alone_on_disease_resolves_to_that_pest() {
    let mut store = RecordStore::new();
    let pest = store.create_pest(PestDraft::new("P1", "3"));
    let disease = store.create_disease(DiseaseDraft {
        related_pests: Some(vec![pest]),
        ..DiseaseDraft::new("D1", "3")
    });

    let items = resolve_related(
        &store,
        &RelationSource {
            kind: RecordKind::Disease,
            id: disease,
            related_ids: store.disease(disease).unwrap().explicit_relations(),
        },
    );

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, pest);
    assert_eq!(items[0].kind, RecordKind::Pest);
}

#[test]
fn pest_caused_disease_pulls_in_every_pest_in_order() {
    let mut store = RecordStore::new();
    let first = store.create_pest(PestDraft::new("Aphids", "3"));
    let second = store.create_pest(PestDraft::new("Thrips", "3"));
    let disease = store.create_disease(DiseaseDraft {
        caused_by: CausedBy::Pest,
        ..DiseaseDraft::new("Mosaic Virus", "3")
    });

    let items = related_items(&store, RecordKind::Disease, disease);

    let ids: Vec<_> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![first, second]);
    assert!(items.iter().all(|item| item.kind == RecordKind::Pest));
    assert!(items.iter().all(|item| item.severity.is_some()));
}

#[test]
fn fungal_disease_only_gets_back_referencing_pests() {
    let mut store = RecordStore::new();
    let disease = store.create_disease(DiseaseDraft::new("Leaf Rust", "3"));
    store.create_pest(PestDraft::new("Aphids", "3"));
    let carrier = store.create_pest(PestDraft {
        related_diseases: Some(vec![disease]),
        ..PestDraft::new("Leafhoppers", "3")
    });

    let items = related_items(&store, RecordKind::Disease, disease);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, carrier);
}

#[test]
fn remedy_target_must_contain_full_disease_name() {
    let mut store = RecordStore::new();
    remedy_against(&mut store, "Milk Spray", &["mildew outbreaks"]);
    let disease = store.create_disease(DiseaseDraft::new("Powdery Mildew", "3"));

    assert!(related_items(&store, RecordKind::Disease, disease).is_empty());

    let matching = remedy_against(&mut store, "Sulfur Dust", &["Powdery mildew outbreaks"]);
    let items = related_items(&store, RecordKind::Disease, disease);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, matching);
}

#[test]
fn remedy_back_reference_matches_without_text_overlap() {
    let mut store = RecordStore::new();
    let disease = store.create_disease(DiseaseDraft::new("Leaf Rust", "3"));
    let remedy = store.create_remedy(RemedyDraft {
        related_diseases: Some(vec![disease]),
        ..RemedyDraft::new("Baking Soda Spray", "3")
    });

    let items = related_items(&store, RecordKind::Disease, disease);

    assert_eq!(names(&items), vec!["Baking Soda Spray"]);
    assert_eq!(items[0].id, remedy);
}

#[test]
fn explicit_and_heuristic_hits_are_deduplicated() {
    let mut store = RecordStore::new();
    let neem = remedy_against(&mut store, "Neem Oil", &["Fungal diseases", "Powdery mildew"]);
    let disease = store.create_disease(DiseaseDraft {
        related_remedies: Some(vec![neem, neem]),
        ..DiseaseDraft::new("Powdery Mildew", "3")
    });

    let items = related_items(&store, RecordKind::Disease, disease);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, neem);
}

#[test]
fn explicit_items_precede_heuristic_pests_then_remedies() {
    let mut store = RecordStore::new();
    let linked = remedy_against(&mut store, "Linked Remedy", &[]);
    let textual = remedy_against(&mut store, "Textual Remedy", &["early leaf rust"]);
    let disease = store.create_disease(DiseaseDraft {
        related_remedies: Some(vec![linked]),
        ..DiseaseDraft::new("Leaf Rust", "3")
    });
    store.create_pest(PestDraft {
        related_diseases: Some(vec![disease]),
        ..PestDraft::new("Rust Mites", "3")
    });

    let items = related_items(&store, RecordKind::Disease, disease);

    assert_eq!(names(&items), vec!["Linked Remedy", "Rust Mites", "Textual Remedy"]);
    assert_eq!(items[2].id, textual);
}

#[test]
fn unresolvable_ids_and_empty_catalog_yield_nothing() {
    let store = RecordStore::new();

    let items = resolve_related(
        &store,
        &RelationSource {
            kind: RecordKind::Disease,
            id: Uuid::new_v4(),
            related_ids: vec![Uuid::new_v4(), Uuid::new_v4()],
        },
    );

    assert!(items.is_empty());
    assert!(related_items(&store, RecordKind::Pest, Uuid::new_v4()).is_empty());
}

#[test]
fn missing_disease_source_skips_heuristics() {
    let mut store = RecordStore::new();
    store.create_pest(PestDraft::new("Aphids", "3"));
    let remedy = remedy_against(&mut store, "Neem Oil", &[""]);

    let items = resolve_related(
        &store,
        &RelationSource {
            kind: RecordKind::Disease,
            id: Uuid::new_v4(),
            related_ids: vec![remedy],
        },
    );

    assert_eq!(names(&items), vec!["Neem Oil"]);
}

#[test]
fn pest_source_gets_no_heuristic_expansion() {
    let mut store = RecordStore::new();
    let pest = store.create_pest(PestDraft::new("Aphids", "3"));
    remedy_against(&mut store, "Neem Oil", &["Aphids"]);
    store.create_disease(DiseaseDraft {
        caused_by: CausedBy::Pest,
        related_pests: Some(vec![pest]),
        ..DiseaseDraft::new("Sooty Mold", "3")
    });

    assert!(related_items(&store, RecordKind::Pest, pest).is_empty());
}

#[test]
fn pest_and_remedy_explicit_ids_cross_collections() {
    let mut store = RecordStore::new();
    let disease = store.create_disease(DiseaseDraft::new("Leaf Rust", "3"));
    let remedy = remedy_against(&mut store, "Neem Oil", &[]);
    let pest = store.create(RecordDraft::Pest(PestDraft {
        related_diseases: Some(vec![disease]),
        related_remedies: Some(vec![remedy]),
        ..PestDraft::new("Aphids", "3")
    }));
    let back = store.create_remedy(RemedyDraft {
        related_pests: Some(vec![pest]),
        ..RemedyDraft::new("Ladybugs", "3")
    });

    let from_pest = related_items(&store, RecordKind::Pest, pest);
    let from_remedy = related_items(&store, RecordKind::Remedy, back);

    assert_eq!(names(&from_pest), vec!["Leaf Rust", "Neem Oil"]);
    assert_eq!(from_pest[0].kind, RecordKind::Disease);
    assert_eq!(names(&from_remedy), vec!["Aphids"]);
}

#[test]
fn asymmetric_links_are_not_mirrored() {
    let mut store = RecordStore::new();
    let pest = store.create_pest(PestDraft::new("Aphids", "3"));
    let remedy = store.create_remedy(RemedyDraft {
        related_pests: Some(vec![pest]),
        ..RemedyDraft::new("Neem Oil", "3")
    });

    assert_eq!(related_items(&store, RecordKind::Remedy, remedy).len(), 1);
    assert!(related_items(&store, RecordKind::Pest, pest).is_empty());
}

/// Fixed-content repository that lets one id appear in several collections.
struct FixtureRepo {
    diseases: Vec<Disease>,
    pests: Vec<Pest>,
    remedies: Vec<Remedy>,
}

impl RecordRepository for FixtureRepo {
    fn create(&mut self, _draft: RecordDraft) -> RecordId {
        unreachable!("fixture is read-only")
    }

    fn approve(&mut self, _kind: RecordKind, _id: RecordId, _approved_by: &str) -> StoreResult<()> {
        unreachable!("fixture is read-only")
    }

    fn reject(&mut self, _kind: RecordKind, _id: RecordId) -> StoreResult<()> {
        unreachable!("fixture is read-only")
    }

    fn diseases(&self) -> &[Disease] {
        &self.diseases
    }

    fn pests(&self) -> &[Pest] {
        &self.pests
    }

    fn remedies(&self) -> &[Remedy] {
        &self.remedies
    }
}

#[test]
fn shared_id_resolves_from_first_collection_in_lookup_order() {
    let mut store = RecordStore::new();
    let disease = store.create_disease(DiseaseDraft::new("Leaf Rust", "3"));
    let pest = store.create_pest(PestDraft::new("Aphids", "3"));
    let remedy = store.create_remedy(RemedyDraft::new("Neem Oil", "3"));
    let shared = Uuid::new_v4();

    let mut pest_copy = store.pest(pest).unwrap().clone();
    pest_copy.id = shared;
    let mut remedy_copy = store.remedy(remedy).unwrap().clone();
    remedy_copy.id = shared;
    let mut disease_copy = store.disease(disease).unwrap().clone();
    disease_copy.id = shared;

    let source = RelationSource {
        kind: RecordKind::Remedy,
        id: Uuid::new_v4(),
        related_ids: vec![shared],
    };

    let pest_and_remedy = FixtureRepo {
        diseases: Vec::new(),
        pests: vec![pest_copy.clone()],
        remedies: vec![remedy_copy.clone()],
    };
    let items = resolve_related(&pest_and_remedy, &source);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].kind, RecordKind::Pest);

    let all_three = FixtureRepo {
        diseases: vec![disease_copy],
        pests: vec![pest_copy],
        remedies: vec![remedy_copy],
    };
    let items = resolve_related(&all_three, &source);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].kind, RecordKind::Disease);
    assert_eq!(items[0].name, "Leaf Rust");
}
