//! Demo catalog used by the CLI and integration tests.
//!
//! Records go through `create` and `approve` like any other report, with a
//! manual clock pinned to the original report dates. The returned store
//! stamps later writes with the wall clock.
//!
//! The explicit `related_*` links are demo additions: pests point at the
//! remedies named in their `treatment` or `natural_remedies`, and Powdery
//! Mildew points at Neem Oil Spray. The base report data carries no links of its own.

use crate::model::disease::{CausedBy, DiseaseDraft, Location, WeatherData};
use crate::model::pest::{Harm, PestDraft};
use crate::model::record::{RecordId, RecordKind};
use crate::model::remedy::{Effectiveness, RemedyCategory, RemedyDraft};
use crate::model::severity::Severity;
use crate::repo::clock::{ManualClock, SystemClock};
use crate::repo::record_store::{RecordRepository, RecordStore};
use chrono::{DateTime, TimeZone, Utc};
use log::{info, warn};

const DATA_ENTRY_USER: &str = "3";
const APPROVER_USER: &str = "2";

/// Builds the demo catalog: 2 diseases, 3 pests and 4 remedies.
pub fn demo_catalog() -> RecordStore {
    let clock = ManualClock::new(day(1));
    let mut store = RecordStore::with_clock(clock.clone());

    clock.set(day(5));
    let neem = store.create_remedy(RemedyDraft {
        description: "Natural oil extracted from neem tree seeds, effective against many pests and diseases.".into(),
        ingredients: strings(&["Neem oil", "Water", "Mild soap (emulsifier)"]),
        preparation: strings(&[
            "Mix 2 tbsp neem oil with 1 tsp soap",
            "Add to 1 gallon of water",
            "Stir thoroughly",
        ]),
        application: strings(&[
            "Spray in early morning or evening",
            "Cover all plant surfaces",
            "Reapply every 7-14 days",
        ]),
        effective_against: strings(&["Aphids", "Spider mites", "Whiteflies", "Fungal diseases"]),
        safety_notes: strings(&[
            "Safe for humans and pets",
            "May harm beneficial insects if applied directly",
            "Avoid during bloom to protect pollinators",
        ]),
        effectiveness: Effectiveness::High,
        category: RemedyCategory::Organic,
        ..RemedyDraft::new("Neem Oil Spray", APPROVER_USER)
    });

    clock.set(day(8));
    let diatomaceous = store.create_remedy(RemedyDraft {
        description: "Fossilized remains of diatoms that damage soft-bodied insects through physical action.".into(),
        ingredients: strings(&["Food-grade diatomaceous earth"]),
        preparation: strings(&[
            "Ensure powder is completely dry",
            "Use food-grade quality only",
            "Apply with duster or by hand",
        ]),
        application: strings(&[
            "Dust lightly on affected areas",
            "Apply when plants are dry",
            "Reapply after rain or watering",
        ]),
        effective_against: strings(&["Slugs", "Snails", "Ants", "Crawling insects"]),
        safety_notes: strings(&[
            "Use food-grade only",
            "Avoid inhaling dust",
            "Safe around pets and children when settled",
        ]),
        effectiveness: Effectiveness::Medium,
        category: RemedyCategory::Mechanical,
        ..RemedyDraft::new("Diatomaceous Earth", APPROVER_USER)
    });

    clock.set(day(3));
    let marigolds = store.create_remedy(RemedyDraft {
        description: "Strategic planting of marigolds to repel pests and attract beneficial insects.".into(),
        ingredients: strings(&["Marigold seeds or seedlings", "Garden space"]),
        preparation: strings(&[
            "Choose appropriate marigold varieties",
            "Plan garden layout",
            "Prepare soil",
        ]),
        application: strings(&[
            "Plant around vegetable crops",
            "Space 6-12 inches apart",
            "Maintain throughout growing season",
        ]),
        effective_against: strings(&["Nematodes", "Aphids", "Whiteflies", "Tomato hornworms"]),
        safety_notes: strings(&[
            "Completely safe for all",
            "Attracts beneficial pollinators",
            "Edible flowers for some varieties",
        ]),
        effectiveness: Effectiveness::Medium,
        category: RemedyCategory::Cultural,
        ..RemedyDraft::new("Companion Planting with Marigolds", APPROVER_USER)
    });

    clock.set(day(7));
    let garlic = store.create_remedy(RemedyDraft {
        description: "Homemade spray using garlic and chili peppers to deter various pests.".into(),
        ingredients: strings(&["Fresh garlic cloves", "Hot chili peppers", "Water", "Liquid soap"]),
        preparation: strings(&[
            "Blend 6 garlic cloves and 2 hot peppers",
            "Steep in 2 cups hot water for 24 hours",
            "Strain and add 1 tsp liquid soap",
        ]),
        application: strings(&[
            "Spray on affected plants",
            "Apply in evening to avoid leaf burn",
            "Reapply weekly or after rain",
        ]),
        effective_against: strings(&["Aphids", "Caterpillars", "Deer", "Rabbits"]),
        safety_notes: strings(&[
            "Avoid contact with eyes",
            "Wash hands after handling",
            "Test on small area first",
        ]),
        effectiveness: Effectiveness::Medium,
        category: RemedyCategory::Organic,
        ..RemedyDraft::new("Garlic and Chili Spray", DATA_ENTRY_USER)
    });

    clock.set(day(10));
    let aphids = store.create_pest(PestDraft {
        scientific_name: "Aphidoidea".into(),
        description: "Small, soft-bodied insects that feed on plant sap and can transmit viruses.".into(),
        affected_plants: strings(&["Roses", "Tomatoes", "Peppers", "Lettuce", "Beans"]),
        symptoms: strings(&["Curled leaves", "Sticky honeydew", "Stunted growth", "Yellowing leaves"]),
        lifecycle: "Complete several generations per year, reproduce rapidly in warm weather. Females can produce 40-60 offspring without mating.".into(),
        prevention: strings(&[
            "Encourage beneficial insects",
            "Use reflective mulch",
            "Regular monitoring",
            "Companion planting",
        ]),
        treatment: strings(&["Insecticidal soap", "Neem oil", "Ladybug release", "Strong water spray"]),
        natural_remedies: strings(&[
            "Spray with water",
            "Companion planting with marigolds",
            "Garlic spray",
        ]),
        harmful_to: vec![Harm::Plants],
        severity: Severity::Medium,
        seasonality: strings(&["Spring", "Summer", "Early Fall"]),
        related_remedies: Some(vec![neem, marigolds, garlic]),
        ..PestDraft::new("Aphids", DATA_ENTRY_USER)
    });

    clock.set(day(12));
    let spider_mites = store.create_pest(PestDraft {
        scientific_name: "Tetranychidae".into(),
        description: "Tiny arachnids that feed on plant cells, causing stippling and webbing on leaves.".into(),
        affected_plants: strings(&["Tomatoes", "Cucumbers", "Beans", "Strawberries", "Houseplants"]),
        symptoms: strings(&[
            "Fine webbing on leaves",
            "Yellow stippling",
            "Bronze or yellow leaves",
            "Leaf drop",
        ]),
        lifecycle: "Reproduce rapidly in hot, dry conditions. Complete lifecycle in 5-20 days depending on temperature.".into(),
        prevention: strings(&[
            "Maintain humidity",
            "Regular watering",
            "Avoid over-fertilizing",
            "Remove debris",
        ]),
        treatment: strings(&[
            "Miticide application",
            "Predatory mites",
            "Insecticidal soap",
            "Systemic insecticides",
        ]),
        natural_remedies: strings(&["Neem oil spray", "Diatomaceous earth", "Essential oil sprays"]),
        harmful_to: vec![Harm::Plants],
        severity: Severity::High,
        seasonality: strings(&["Summer", "Fall"]),
        related_remedies: Some(vec![neem, diatomaceous]),
        ..PestDraft::new("Spider Mites", DATA_ENTRY_USER)
    });

    clock.set(day(14));
    store.create_pest(PestDraft {
        scientific_name: "Aleyrodidae".into(),
        description: "Small white flying insects that feed on plant sap and excrete honeydew.".into(),
        affected_plants: strings(&["Tomatoes", "Peppers", "Eggplant", "Cabbage", "Poinsettias"]),
        symptoms: strings(&["Yellowing leaves", "Sticky honeydew", "Sooty mold", "Stunted growth"]),
        lifecycle: "Lay eggs on leaf undersides. Complete development in 25-30 days. Adults live 30-40 days.".into(),
        prevention: strings(&[
            "Yellow sticky traps",
            "Remove weeds",
            "Quarantine new plants",
            "Reflective mulch",
        ]),
        treatment: strings(&[
            "Vacuum adults",
            "Insecticidal soap",
            "Systemic insecticides",
            "Beneficial insects",
        ]),
        natural_remedies: strings(&["Neem oil", "Garlic spray", "Marigold companion planting"]),
        harmful_to: vec![Harm::Plants],
        severity: Severity::Medium,
        seasonality: strings(&["Spring", "Summer", "Fall"]),
        related_remedies: Some(vec![neem, garlic, marigolds]),
        ..PestDraft::new("Whiteflies", DATA_ENTRY_USER)
    });

    clock.set(day(15));
    let late_blight = store.create_disease(DiseaseDraft {
        description: "A devastating disease that affects tomato plants, causing brown lesions on leaves and stems.".into(),
        symptoms: strings(&[
            "Brown lesions on leaves",
            "White fuzzy growth on leaf undersides",
            "Stem cankers",
            "Fruit rot",
        ]),
        location: Location {
            latitude: 40.7128,
            longitude: -74.0060,
            address: "123 Farm Road, Valley View".into(),
            region: "New York".into(),
            country: "USA".into(),
        },
        weather: WeatherData {
            temperature: 22.0,
            humidity: 85.0,
            rainfall: 15.0,
            wind_speed: 12.0,
            conditions: "Humid, overcast".into(),
            date: day(15),
        },
        caused_by: CausedBy::Fungal,
        severity: Severity::High,
        treatment: strings(&[
            "Apply copper fungicide",
            "Remove affected plant parts",
            "Improve air circulation",
        ]),
        prevention: strings(&[
            "Plant resistant varieties",
            "Avoid overhead watering",
            "Space plants properly",
        ]),
        ..DiseaseDraft::new("Tomato Late Blight", DATA_ENTRY_USER)
    });

    clock.set(day(20));
    store.create_disease(DiseaseDraft {
        description: "A fungal disease that creates white powdery spots on leaves and stems.".into(),
        symptoms: strings(&[
            "White powdery coating on leaves",
            "Yellowing leaves",
            "Stunted growth",
            "Distorted leaves",
        ]),
        location: Location {
            latitude: 34.0522,
            longitude: -118.2437,
            address: "456 Garden Lane, Sunny Valley".into(),
            region: "California".into(),
            country: "USA".into(),
        },
        weather: WeatherData {
            temperature: 25.0,
            humidity: 60.0,
            rainfall: 5.0,
            wind_speed: 8.0,
            conditions: "Warm, dry".into(),
            date: day(20),
        },
        caused_by: CausedBy::Fungal,
        severity: Severity::Medium,
        treatment: strings(&[
            "Apply sulfur spray",
            "Increase air circulation",
            "Remove affected leaves",
        ]),
        prevention: strings(&[
            "Avoid overhead watering",
            "Plant in sunny locations",
            "Proper spacing",
        ]),
        related_remedies: Some(vec![neem]),
        ..DiseaseDraft::new("Powdery Mildew", DATA_ENTRY_USER)
    });

    let approvals = [
        (RecordKind::Remedy, neem, day(6)),
        (RecordKind::Remedy, diatomaceous, day(9)),
        (RecordKind::Remedy, marigolds, day(4)),
        (RecordKind::Pest, aphids, day(11)),
        (RecordKind::Pest, spider_mites, day(13)),
        (RecordKind::Disease, late_blight, day(16)),
    ];
    for (kind, id, approved_at) in approvals {
        clock.set(approved_at);
        approve_seeded(&mut store, kind, id);
    }

    info!(
        "event=seed_catalog module=seed status=ok records={}",
        store.len()
    );
    store.into_clock(SystemClock)
}

fn approve_seeded(store: &mut RecordStore<ManualClock>, kind: RecordKind, id: RecordId) {
    if let Err(err) = store.approve(kind, id, APPROVER_USER) {
        warn!("event=seed_catalog module=seed status=error error={err}");
    }
}

fn day(day_of_january: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day_of_january, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
