//! Tests for roster-model types.

use chrono::NaiveDate;
use roster_model::{Bilingual, Gender, Language, Metadata, Record, RecordStore, VoterStatus};

fn voter(serial: u32, gender: Gender, profession: (&str, &str)) -> Record {
    Record::new(
        serial,
        format!("{:010}", serial),
        Bilingual::new(format!("Voter {serial}"), format!("ভোটার {serial}")),
        gender,
        VoterStatus::Active,
        NaiveDate::from_ymd_opt(1975, 4, 20).unwrap(),
    )
    .with_profession(Bilingual::new(
        profession.0.to_string(),
        profession.1.to_string(),
    ))
}

#[test]
fn store_keeps_load_order_and_counts_genders() {
    let store = RecordStore::new(
        Metadata::default(),
        vec![
            voter(3, Gender::Male, ("Farmer", "কৃষক")),
            voter(1, Gender::Male, ("Farmer", "কৃষক")),
            voter(2, Gender::Female, ("Housewife", "গৃহিণী")),
        ],
    );

    let serials: Vec<u32> = store.records().iter().map(|r| r.serial).collect();
    assert_eq!(serials, vec![3, 1, 2]);
    assert_eq!(store.count_by_gender(Gender::Male), 2);
    assert_eq!(store.count_by_gender(Gender::Female), 1);
    assert_eq!(store.professions().len(), 2);
    assert_eq!(store.professions()[0].key, "Farmer");
}

#[test]
fn record_serializes_with_bilingual_pairs() {
    let record = voter(7, Gender::Female, ("Teacher", "শিক্ষক"));
    let json = serde_json::to_value(&record).expect("serialize record");

    assert_eq!(json["name"]["en"], "Voter 7");
    assert_eq!(json["name"]["bn"], "ভোটার 7");
    assert_eq!(json["gender"], "female");
    assert_eq!(json["status"], "active");
    assert_eq!(json["birth_date"], "1975-04-20");
    assert!(json["father_name"]["en"].is_null());
}

#[test]
fn profession_choice_exposes_both_labels() {
    let store = RecordStore::new(
        Metadata::default(),
        vec![voter(1, Gender::Male, ("Teacher", "শিক্ষক"))],
    );
    let choice = &store.professions()[0];
    assert_eq!(*choice.as_bilingual().get(Language::Bangla), "শিক্ষক");
    assert_eq!(*choice.as_bilingual().get(Language::English), "Teacher");
}
