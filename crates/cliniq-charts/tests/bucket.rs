use cliniq_charts::bucket::{age_sub_ranges, align_by_date, partition_by_age, partition_by_sex};
use cliniq_core::models::document::{DatedEntry, Document, Sex};
use cliniq_core::models::filter::{AgeRange, Filter};
use cliniq_store::memory::MemoryStore;

fn entry(year: i32, month: u32, day: u32, text: &str) -> DatedEntry {
    DatedEntry {
        year,
        month,
        day,
        text: text.to_string(),
    }
}

fn doc(id: u64, sex: Sex, age: u32, text: &str, dated_entries: Vec<DatedEntry>) -> Document {
    Document {
        id,
        sex,
        age,
        text: text.to_string(),
        dated_entries,
    }
}

#[test]
fn date_alignment_truncates_and_pads_to_ten_positions() {
    let long: Vec<DatedEntry> = (1..=12).map(|d| entry(2017, 1, d, &format!("a{d}"))).collect();
    let short: Vec<DatedEntry> = (1..=3).map(|d| entry(2016, 5, d, &format!("b{d}"))).collect();
    let docs = vec![
        doc(1, Sex::Male, 50, "", long),
        doc(2, Sex::Female, 60, "", short),
    ];

    let buckets = align_by_date(&docs, None);
    assert_eq!(buckets.len(), 10);
    assert_eq!(buckets[0].label, "1");
    assert_eq!(buckets[9].label, "10");
    assert_eq!(buckets[0].text, "a1 b1");
    assert_eq!(buckets[3].text, "a4 ");
    assert_eq!(buckets[9].text, "a10 ");
    assert!(buckets.iter().all(|b| !b.text.contains("a11") && !b.text.contains("a12")));
}

#[test]
fn date_alignment_sorts_entries_by_date() {
    let docs = vec![doc(
        1,
        Sex::Male,
        50,
        "",
        vec![
            entry(2018, 1, 1, "third"),
            entry(2017, 12, 31, "second"),
            entry(2017, 2, 1, "first"),
        ],
    )];

    let texts: Vec<String> = align_by_date(&docs, None).into_iter().map(|b| b.text).collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
}

#[test]
fn date_alignment_blanks_entries_without_keyword() {
    let docs = vec![doc(
        1,
        Sex::Female,
        70,
        "",
        vec![entry(2017, 1, 1, "PO intake poor"), entry(2017, 1, 2, "Stable overnight")],
    )];

    let buckets = align_by_date(&docs, Some("po"));
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].text, "PO intake poor");
    assert_eq!(buckets[1].text, "");
}

#[test]
fn date_alignment_without_entries_is_empty() {
    let docs = vec![doc(1, Sex::Male, 50, "text", Vec::new())];
    assert!(align_by_date(&docs, None).is_empty());
    assert!(align_by_date(&[], None).is_empty());
}

#[test]
fn age_sub_ranges_of_default_range() {
    let ranges = age_sub_ranges(AgeRange::DEFAULT);
    assert_eq!(ranges.len(), 11);
    assert_eq!(ranges[0], AgeRange::half_open(0, 12));
    assert_eq!(ranges[9], AgeRange::half_open(108, 120));
    assert_eq!(ranges[10], AgeRange::half_open(120, 121));
}

#[test]
fn age_sub_ranges_of_narrow_ranges() {
    let ranges = age_sub_ranges(AgeRange::inclusive(60, 70));
    assert_eq!(ranges.len(), 11);
    assert!(ranges.iter().all(|r| r.len() == 1));

    assert_eq!(age_sub_ranges(AgeRange::inclusive(45, 45)), vec![AgeRange::half_open(45, 46)]);
}

#[test]
fn age_sub_ranges_cover_the_range_contiguously() {
    let range = AgeRange::inclusive(0, 99);
    let ranges = age_sub_ranges(range);
    assert_eq!(ranges.len(), 10);
    for pair in ranges.windows(2) {
        assert_eq!(pair[0].high, pair[1].low);
    }
    assert_eq!(ranges.last().unwrap().high, range.end_exclusive());
}

fn store() -> MemoryStore {
    MemoryStore::new(vec![
        doc(1, Sex::Male, 45, "murmur noted", Vec::new()),
        doc(2, Sex::Female, 47, "rash noted", Vec::new()),
        doc(3, Sex::Female, 62, "fever", Vec::new()),
        doc(4, Sex::Male, 63, "cough", Vec::new()),
    ])
}

#[test]
fn sex_partition_pins_each_sex() {
    let filter = Filter::default().with_sex(Some(Sex::Female));
    let buckets = partition_by_sex(&store(), &filter).unwrap();
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].label, "male");
    assert_eq!(buckets[0].text, "murmur noted cough");
    assert_eq!(buckets[1].label, "female");
    assert_eq!(buckets[1].text, "rash noted fever");
}

#[test]
fn sex_partition_applies_keyword() {
    let filter = Filter::default().with_keyword(Some("noted".to_string()));
    let buckets = partition_by_sex(&store(), &filter).unwrap();
    assert_eq!(buckets[0].text, "murmur noted");
    assert_eq!(buckets[1].text, "rash noted");
}

#[test]
fn age_partition_labels_lower_bounds() {
    let filter = Filter::default().with_age(AgeRange::inclusive(40, 69));
    let buckets = partition_by_age(&store(), &filter).unwrap();
    let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["40~", "43~", "46~", "49~", "52~", "55~", "58~", "61~", "64~", "67~"]);
    assert_eq!(buckets[1].text, "murmur noted");
    assert_eq!(buckets[2].text, "rash noted");
    assert_eq!(buckets[7].text, "fever cough");
}
