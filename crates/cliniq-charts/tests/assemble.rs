use cliniq_charts::error::ChartError;
use cliniq_charts::{ChartSources, chart_builder};
use cliniq_core::models::chart::{ChartKind, RowValues};
use cliniq_core::models::document::{DatedEntry, Document, Sex};
use cliniq_core::models::filter::{AgeRange, Filter};
use cliniq_intent::IntentParser;
use cliniq_intent::error::IntentError;
use cliniq_store::memory::MemoryStore;
use cliniq_text::tokenize::term_counts;
use cliniq_text::usefulness::TermFilter;

fn doc(id: u64, sex: Sex, age: u32, text: &str) -> Document {
    Document {
        id,
        sex,
        age,
        text: text.to_string(),
        dated_entries: Vec::new(),
    }
}

fn store() -> MemoryStore {
    MemoryStore::new(vec![
        doc(1, Sex::Female, 64, "PO intake poor. Aortic stenosis noted. Aortic valve replaced."),
        doc(2, Sex::Female, 68, "Post operative PO diet. Stenosis improved."),
        doc(3, Sex::Male, 65, "PO intake fine"),
        doc(4, Sex::Female, 75, "PO only"),
        doc(5, Sex::Female, 62, "Lung nodule"),
    ])
}

fn female_sixties(keyword: Option<&str>) -> Filter {
    Filter::default()
        .with_sex(Some(Sex::Female))
        .with_age(AgeRange::inclusive(60, 70))
        .with_keyword(keyword.map(str::to_string))
}

#[test]
fn table_payload_reports_raw_counts_for_filtered_documents() {
    let store = store();
    let terms = TermFilter::default();
    let sources = ChartSources {
        store: &store,
        terms: &terms,
    };
    let parser = IntentParser::default();

    let builder = chart_builder(ChartKind::Table, "tf table", &parser, sources).unwrap();
    assert_eq!(builder.kind(), ChartKind::Table);
    let payload = builder.build_payload(&female_sixties(Some("PO"))).unwrap();

    assert!(payload.title.contains("female"));
    assert!(payload.title.contains("60..70"));
    assert!(payload.x_labels.is_empty());
    assert!(payload.rows.len() <= 20);
    assert_eq!(payload.rows.len(), 13);

    let corpus_counts = term_counts(
        "PO intake poor. Aortic stenosis noted. Aortic valve replaced. Post operative PO diet. Stenosis improved.",
    );
    for row in &payload.rows {
        assert_eq!(row.values, RowValues::Count(corpus_counts.get(&row.label)));
    }
    assert_eq!(payload.rows[0].label, "Aortic");
    assert!(!payload.rows.iter().any(|r| r.label == "fine" || r.label == "nodule"));
}

#[test]
fn pie_payload_keeps_rank_order() {
    let store = store();
    let terms = TermFilter::default();
    let sources = ChartSources {
        store: &store,
        terms: &terms,
    };

    let payload = chart_builder(ChartKind::Pie, "tf pie", &IntentParser::default(), sources)
        .unwrap()
        .build_payload(&female_sixties(None))
        .unwrap();

    assert!(payload.title.starts_with("Term count with"));
    // The short note has the densest unique terms.
    assert_eq!(payload.rows[0].label, "Lung");
    assert_eq!(payload.rows[1].label, "nodule");
    assert!(payload.rows.iter().all(|r| matches!(r.values, RowValues::Count(_))));
}

#[test]
fn empty_selection_is_no_matching_records() {
    let store = store();
    let terms = TermFilter::default();
    let sources = ChartSources {
        store: &store,
        terms: &terms,
    };

    let filter = Filter::default().with_age(AgeRange::inclusive(1, 2));
    let err = chart_builder(ChartKind::Pie, "tf pie", &IntentParser::default(), sources)
        .unwrap()
        .build_payload(&filter)
        .unwrap_err();
    assert!(matches!(err, ChartError::NoMatchingRecords));
}

#[test]
fn bar_by_sex_has_two_series_positions() {
    let store = store();
    let terms = TermFilter::default();
    let sources = ChartSources {
        store: &store,
        terms: &terms,
    };

    let payload = chart_builder(
        ChartKind::Bar,
        "tf bar graph, group by gender",
        &IntentParser::default(),
        sources,
    )
    .unwrap()
    .build_payload(&Filter::default())
    .unwrap();

    assert_eq!(payload.x_labels, vec!["male", "female"]);
    assert!(payload.title.starts_with("TF over sex with"));
    assert!(payload.rows.len() <= 10);
    for row in &payload.rows {
        match &row.values {
            RowValues::Series(values) => assert_eq!(values.len(), 2),
            RowValues::Count(_) => panic!("bar rows carry a series"),
        }
    }
    let fine = payload.rows.iter().find(|r| r.label == "fine").unwrap();
    assert_eq!(fine.values, RowValues::Series(vec![1.0 / 3.0, 0.0]));
}

#[test]
fn bar_without_grouping_is_user_error() {
    let store = store();
    let terms = TermFilter::default();
    let sources = ChartSources {
        store: &store,
        terms: &terms,
    };

    let err = chart_builder(ChartKind::Bar, "tf bar graph", &IntentParser::default(), sources)
        .err()
        .unwrap();
    assert!(matches!(err, ChartError::UserInput(IntentError::MissingBarGrouping)));
}

#[test]
fn line_by_date_uses_positions() {
    let entries = vec![
        DatedEntry {
            year: 2017,
            month: 1,
            day: 2,
            text: "fever persisted".to_string(),
        },
        DatedEntry {
            year: 2017,
            month: 1,
            day: 1,
            text: "fever began".to_string(),
        },
    ];
    let store = MemoryStore::new(vec![Document {
        id: 1,
        sex: Sex::Male,
        age: 50,
        text: "febrile illness".to_string(),
        dated_entries: entries,
    }]);
    let terms = TermFilter::default();
    let sources = ChartSources {
        store: &store,
        terms: &terms,
    };

    let payload = chart_builder(
        ChartKind::Line,
        "term frequency line graph where x is date",
        &IntentParser::default(),
        sources,
    )
    .unwrap()
    .build_payload(&Filter::default())
    .unwrap();

    assert_eq!(payload.x_labels, vec!["1", "2"]);
    assert!(payload.title.starts_with("TF over date with"));
    let began = payload.rows.iter().find(|r| r.label == "began").unwrap();
    assert_eq!(began.values, RowValues::Series(vec![0.5, 0.0]));
}

#[test]
fn line_without_timelines_is_no_matching_records() {
    let store = store();
    let terms = TermFilter::default();
    let sources = ChartSources {
        store: &store,
        terms: &terms,
    };

    let err = chart_builder(
        ChartKind::Line,
        "tf line, x is date",
        &IntentParser::default(),
        sources,
    )
    .unwrap()
    .build_payload(&Filter::default())
    .unwrap_err();
    assert!(matches!(err, ChartError::NoMatchingRecords));
}

#[test]
fn line_by_sex_has_male_and_female_positions() {
    let store = MemoryStore::new(vec![
        doc(1, Sex::Male, 50, "murmur cough"),
        doc(2, Sex::Female, 52, "rash cough"),
    ]);
    let terms = TermFilter::default();
    let sources = ChartSources {
        store: &store,
        terms: &terms,
    };

    let payload = chart_builder(
        ChartKind::Line,
        "tf line graph, x is sex",
        &IntentParser::default(),
        sources,
    )
    .unwrap()
    .build_payload(&Filter::default())
    .unwrap();

    assert_eq!(payload.x_labels, vec!["male", "female"]);
    assert!(payload.title.starts_with("TF over sex with"));

    let series = |label: &str| {
        payload
            .rows
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.values.clone())
    };
    assert_eq!(series("murmur"), Some(RowValues::Series(vec![0.5, 0.0])));
    assert_eq!(series("rash"), Some(RowValues::Series(vec![0.0, 0.5])));
    assert_eq!(series("cough"), Some(RowValues::Series(vec![0.5, 0.5])));
}

#[test]
fn bar_by_age_has_one_value_per_age_bucket() {
    let store = MemoryStore::new(vec![
        doc(1, Sex::Male, 41, "cough murmur"),
        doc(2, Sex::Female, 45, "cough"),
        doc(3, Sex::Female, 70, "rash"),
    ]);
    let terms = TermFilter::default();
    let sources = ChartSources {
        store: &store,
        terms: &terms,
    };

    let filter = Filter::default().with_age(AgeRange::inclusive(40, 59));
    let payload = chart_builder(
        ChartKind::Bar,
        "tf bar graph, group by age",
        &IntentParser::default(),
        sources,
    )
    .unwrap()
    .build_payload(&filter)
    .unwrap();

    let expected_labels: Vec<String> = (0..10).map(|k| format!("{}~", 40 + 2 * k)).collect();
    assert_eq!(payload.x_labels, expected_labels);
    assert!(payload.title.starts_with("TF over age with"));

    // cough appears in two buckets, murmur in one; rash is out of range.
    let labels: Vec<&str> = payload.rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["cough", "murmur"]);

    let mut cough = vec![0.0; 10];
    cough[0] = 0.5;
    cough[2] = 1.0;
    assert_eq!(payload.rows[0].values, RowValues::Series(cough));

    let mut murmur = vec![0.0; 10];
    murmur[0] = 0.5;
    assert_eq!(payload.rows[1].values, RowValues::Series(murmur));
}
