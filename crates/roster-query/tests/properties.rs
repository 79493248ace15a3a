//! Property tests for the filter, sort and pagination stages.

use chrono::NaiveDate;
use proptest::prelude::*;

use roster_model::{Bilingual, Gender, Record, VoterStatus};
use roster_query::{
    Criteria, GenderFilter, PAGE_SIZE, SortKey, SortOrder, filter, paginate, sorted, total_pages,
};

const NAMES: [&str; 6] = ["Rahim", "karim", "Ali", "Fatema", "ali", "Nasrin"];
const PROFESSIONS: [&str; 3] = ["Farmer", "Teacher", "Student"];

fn arb_status() -> impl Strategy<Value = VoterStatus> {
    prop::sample::select(VoterStatus::ALL.to_vec())
}

fn arb_gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

fn arb_record() -> impl Strategy<Value = Record> {
    (
        1u32..200,
        0usize..NAMES.len(),
        0usize..PROFESSIONS.len(),
        arb_gender(),
        arb_status(),
        0u64..20_000,
    )
        .prop_map(|(serial, name, profession, gender, status, days)| {
            let birth = NaiveDate::from_ymd_opt(1940, 1, 1).unwrap() + chrono::Days::new(days);
            Record::new(
                serial,
                format!("V{serial:04}"),
                Bilingual::new(NAMES[name].to_string(), String::new()),
                gender,
                status,
                birth,
            )
            .with_profession(Bilingual::new(PROFESSIONS[profession].to_string(), String::new()))
        })
}

fn arb_criteria() -> impl Strategy<Value = Criteria> {
    (
        prop::sample::select(vec!["", "ali", "RA", " v00", "zzz"]),
        prop::sample::select(vec![GenderFilter::All, GenderFilter::Male, GenderFilter::Female]),
        prop::collection::btree_set(arb_status(), 0..3),
        prop::sample::select(vec!["", "Farmer", "Teacher"]),
    )
        .prop_map(|(search, gender, statuses, profession)| Criteria {
            search_text: search.to_string(),
            gender_filter: gender,
            status_filter: statuses,
            profession_filter: profession.to_string(),
            ..Criteria::default()
        })
}

proptest! {
    #[test]
    fn default_criteria_match_everything(records in prop::collection::vec(arb_record(), 0..80)) {
        let matched = filter(&records, &Criteria::default());
        prop_assert_eq!(matched.len(), records.len());
    }

    #[test]
    fn filter_is_idempotent(
        records in prop::collection::vec(arb_record(), 0..80),
        criteria in arb_criteria(),
    ) {
        let once: Vec<Record> = filter(&records, &criteria).into_iter().cloned().collect();
        let twice = filter(&once, &criteria);
        prop_assert_eq!(twice.len(), once.len());
    }

    #[test]
    fn status_filter_is_set_membership(
        records in prop::collection::vec(arb_record(), 0..80),
        statuses in prop::collection::btree_set(arb_status(), 1..4),
    ) {
        let criteria = Criteria {
            status_filter: statuses.clone(),
            ..Criteria::default()
        };
        let matched = filter(&records, &criteria);
        prop_assert!(matched.iter().all(|r| statuses.contains(&r.status)));
        let expected = records.iter().filter(|r| statuses.contains(&r.status)).count();
        prop_assert_eq!(matched.len(), expected);
    }

    #[test]
    fn filtered_records_keep_store_order(
        records in prop::collection::vec(arb_record(), 0..80),
        criteria in arb_criteria(),
    ) {
        let matched = filter(&records, &criteria);
        let positions: Vec<usize> = matched
            .iter()
            .map(|m| records.iter().position(|r| std::ptr::eq(r, *m)).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn sort_is_a_permutation_ordered_by_key(
        records in prop::collection::vec(arb_record(), 0..80),
        key in prop::sample::select(SortKey::ALL.to_vec()),
        descending in any::<bool>(),
    ) {
        let order = if descending { SortOrder::Descending } else { SortOrder::Ascending };
        let refs: Vec<&Record> = records.iter().collect();
        let out = sorted(&refs, key, order);
        prop_assert_eq!(out.len(), records.len());
        for pair in out.windows(2) {
            let ord = roster_query::compare(pair[0], pair[1], key, order);
            prop_assert_ne!(ord, std::cmp::Ordering::Greater);
        }
    }

    #[test]
    fn pages_cover_every_item_once(count in 0usize..200) {
        let items: Vec<usize> = (0..count).collect();
        let pages = total_pages(count, PAGE_SIZE);
        let mut seen = Vec::new();
        for number in 1..=pages {
            let page = paginate(&items, PAGE_SIZE, number).unwrap();
            prop_assert!(page.items.len() <= PAGE_SIZE);
            seen.extend_from_slice(page.items);
        }
        prop_assert_eq!(seen, items);
        prop_assert!(paginate(&(0..count).collect::<Vec<_>>(), PAGE_SIZE, pages + 1).is_err());
    }
}

