use plantguard_core::{
    demo_catalog, filter_diseases, filter_pests, filter_remedies, DiseaseFilter, Effectiveness,
    PestFilter, RecordStatus, RemedyCategory, RemedyFilter, Severity,
};

#[test]
fn empty_filters_return_whole_collections_in_order() {
    let store = demo_catalog();

    let diseases: Vec<_> = filter_diseases(&store, &DiseaseFilter::default())
        .iter()
        .map(|disease| disease.name.as_str())
        .collect();
    assert_eq!(diseases, vec!["Tomato Late Blight", "Powdery Mildew"]);
    assert_eq!(filter_pests(&store, &PestFilter::default()).len(), 3);
    assert_eq!(filter_remedies(&store, &RemedyFilter::default()).len(), 4);
}

#[test]
fn disease_text_search_is_trimmed_and_case_insensitive() {
    let store = demo_catalog();
    let filter = DiseaseFilter {
        text: Some("  POWDERY  ".to_string()),
        ..DiseaseFilter::default()
    };

    let found = filter_diseases(&store, &filter);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Powdery Mildew");
}

#[test]
fn blank_text_query_matches_everything() {
    let store = demo_catalog();
    let filter = DiseaseFilter {
        text: Some("   ".to_string()),
        ..DiseaseFilter::default()
    };

    assert_eq!(filter_diseases(&store, &filter).len(), 2);
}

#[test]
fn disease_severity_and_status_combine() {
    let store = demo_catalog();
    let filter = DiseaseFilter {
        severity: Some(Severity::High),
        status: Some(RecordStatus::Approved),
        ..DiseaseFilter::default()
    };

    let found = filter_diseases(&store, &filter);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Tomato Late Blight");
}

#[test]
fn pest_text_searches_scientific_name() {
    let store = demo_catalog();
    let filter = PestFilter {
        text: Some("tetranychidae".to_string()),
        ..PestFilter::default()
    };

    let found = filter_pests(&store, &filter);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Spider Mites");
}

#[test]
fn pest_season_is_an_exact_entry_match() {
    let store = demo_catalog();
    let fall = PestFilter {
        season: Some("Fall".to_string()),
        ..PestFilter::default()
    };
    let early_fall = PestFilter {
        season: Some("Early Fall".to_string()),
        ..PestFilter::default()
    };

    let fall_names: Vec<_> = filter_pests(&store, &fall)
        .iter()
        .map(|pest| pest.name.as_str())
        .collect();
    let early_names: Vec<_> = filter_pests(&store, &early_fall)
        .iter()
        .map(|pest| pest.name.as_str())
        .collect();

    assert_eq!(fall_names, vec!["Spider Mites", "Whiteflies"]);
    assert_eq!(early_names, vec!["Aphids"]);
}

#[test]
fn remedy_text_searches_effective_against() {
    let store = demo_catalog();
    let filter = RemedyFilter {
        text: Some("slugs".to_string()),
        ..RemedyFilter::default()
    };

    let found = filter_remedies(&store, &filter);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Diatomaceous Earth");
}

#[test]
fn remedy_category_and_effectiveness_combine() {
    let store = demo_catalog();
    let organic_medium = RemedyFilter {
        category: Some(RemedyCategory::Organic),
        effectiveness: Some(Effectiveness::Medium),
        ..RemedyFilter::default()
    };
    let biological = RemedyFilter {
        category: Some(RemedyCategory::Biological),
        ..RemedyFilter::default()
    };

    let found = filter_remedies(&store, &organic_medium);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Garlic and Chili Spray");
    assert!(filter_remedies(&store, &biological).is_empty());
}
