use cliniq_core::error::CoreError;
use cliniq_core::models::chart::{ChartKind, RowValues};
use cliniq_core::models::document::{DatedEntry, Document, Sex};
use cliniq_core::models::filter::{AgeRange, Filter};

#[test]
fn default_age_range_is_zero_to_one_twenty_inclusive() {
    let range = AgeRange::default();
    assert_eq!(range.to_string(), "0..120");
    assert_eq!(range.len(), 121);
    assert!(range.contains(0));
    assert!(range.contains(120));
    assert!(!range.contains(121));
}

#[test]
fn inclusive_range_swaps_reversed_bounds() {
    let range = AgeRange::inclusive(70, 60);
    assert_eq!((range.low, range.high), (60, 70));
    assert_eq!(range.len(), 11);
}

#[test]
fn half_open_range_excludes_high() {
    let range = AgeRange::half_open(60, 62);
    assert_eq!(range.to_string(), "60...62");
    assert_eq!(range.len(), 2);
    assert!(range.contains(61));
    assert!(!range.contains(62));
}

#[test]
fn filter_describe_lists_set_values() {
    let filter = Filter::default()
        .with_sex(Some(Sex::Female))
        .with_age(AgeRange::inclusive(60, 70))
        .with_keyword(Some("PO".to_string()));

    assert_eq!(filter.describe(), "sex: female, age: 60..70, keyword: PO");
    assert_eq!(filter.values(), vec!["female".to_string(), "60..70".to_string()]);
}

#[test]
fn filter_without_sex_omits_it() {
    assert_eq!(Filter::default().describe(), "age: 0..120");
    assert_eq!(Filter::default().values(), vec!["0..120".to_string()]);
}

#[test]
fn sex_parses_from_lowercase_name() {
    assert_eq!("male".parse::<Sex>().unwrap(), Sex::Male);
    assert_eq!("female".parse::<Sex>().unwrap(), Sex::Female);
    assert!("unknown".parse::<Sex>().is_err());
}

#[test]
fn unknown_sex_is_invalid_sex_error() {
    let err = "unknown".parse::<Sex>().unwrap_err();
    assert!(matches!(err, CoreError::InvalidSex(ref value) if value == "unknown"));
    assert_eq!(err.to_string(), "invalid sex value: unknown");
}

#[test]
fn dated_entry_sort_key_orders_by_date() {
    let earlier = DatedEntry {
        year: 2016,
        month: 12,
        day: 31,
        text: String::new(),
    };
    let later = DatedEntry {
        year: 2017,
        month: 1,
        day: 1,
        text: String::new(),
    };
    assert!(earlier.sort_key() < later.sort_key());
}

#[test]
fn document_deserializes_without_entries() {
    let json = r#"{"id": 7, "sex": "female", "age": 64, "text": "Chest pain."}"#;
    let doc: Document = serde_json::from_str(json).unwrap();
    assert_eq!(doc.id, 7);
    assert_eq!(doc.sex, Sex::Female);
    assert!(doc.dated_entries.is_empty());
}

#[test]
fn chart_kind_priority_and_series() {
    assert_eq!(ChartKind::PRIORITY[0], ChartKind::Line);
    assert!(ChartKind::Bar.is_multi_series());
    assert!(!ChartKind::Table.is_multi_series());
}

#[test]
fn row_values_serialize_untagged() {
    let count = serde_json::to_string(&RowValues::Count(3)).unwrap();
    let series = serde_json::to_string(&RowValues::Series(vec![0.5, 0.0])).unwrap();
    assert_eq!(count, "3");
    assert_eq!(series, "[0.5,0.0]");
}
