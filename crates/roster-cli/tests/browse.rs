//! Interactive browser sessions driven from scripted input.

use std::io::Cursor;
use std::sync::Arc;

use chrono::NaiveDate;

use roster_cli::browse::{self, BrowseCommand, Outcome, Session};
use roster_ingest::{LoadPolicy, load_str};
use roster_model::{Language, RecordStore};
use roster_query::{ManualClock, QueryConfig, QueryController, SystemClock};

const ROSTER: &str = r#"{
  "meta": {
    "district_en": "Dhaka", "district_bn": "ঢাকা",
    "upazila_en": "Savar", "upazila_bn": "সাভার",
    "union_en": "Imamnagar", "union_bn": "ইমামনগর"
  },
  "male_list": {
    "voters": [
      {
        "serial": 1, "voter_no": "2691000001",
        "name_en": "Abdul Karim", "name_bn": "আব্দুল করিম",
        "father_en": "Ali Hassan", "father_bn": "আলী হাসান",
        "profession_en": "Farmer", "profession_bn": "কৃষক",
        "birthdate": "1965-02-11",
        "address_en": "North Para", "address_bn": "উত্তর পাড়া",
        "status": "active"
      }
    ]
  },
  "female_list": {
    "voters": [
      {
        "serial": 1, "voter_no": "2691000002",
        "name_en": "Rokeya Begum", "name_bn": "রোকেয়া বেগম",
        "spouse_en": "Abdul Karim", "spouse_bn": "আব্দুল করিম",
        "profession_en": "Housewife", "profession_bn": "গৃহিণী",
        "birthdate": "1970-09-30",
        "address_en": "North Para", "address_bn": "উত্তর পাড়া",
        "status": "cut"
      }
    ]
  }
}"#;

fn store() -> Arc<RecordStore> {
    let (store, _) = load_str(ROSTER, LoadPolicy::Strict).unwrap();
    Arc::new(store)
}

fn run_script(script: &str) -> String {
    let controller = QueryController::new(store(), &QueryConfig::default());
    let mut session = Session::new(controller, Language::English)
        .with_today(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    let mut out = Vec::new();
    browse::run(&mut session, Cursor::new(script.to_string()), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn initial_render_shows_header_and_all_voters() {
    let output = run_script("quit\n");
    assert!(output.contains("Dhaka • Savar • Imamnagar"));
    assert!(output.contains("Abdul Karim"));
    assert!(output.contains("Rokeya Begum"));
    assert!(output.contains("Showing 1–2 of 2"));
}

#[test]
fn typed_search_applies_at_end_of_input() {
    let output = run_script("/ali\n");
    let last = output.rsplit("Showing").next().unwrap();
    assert!(last.starts_with(" 1–1 of 1"));
    assert!(output.contains("search=\"ali\""));
}

#[test]
fn filter_then_detail() {
    let output = run_script("gender female\nshow 2691000002\nquit\n");
    assert!(output.contains("gender=female"));
    assert!(output.contains("Housewife"));
    assert!(output.contains("গৃহিণী"));
    // Born 1970-09-30, so 54 on 2025-01-01.
    assert!(output.contains("54"));
}

#[test]
fn unknown_commands_report_errors_and_continue() {
    let output = run_script("fly\nlang bn\nquit\n");
    assert!(output.contains("error: unknown command 'fly'"));
    assert!(output.contains("আব্দুল করিম"));
}

#[test]
fn profession_names_resolve_in_either_language() {
    let controller = QueryController::with_clock(store(), &QueryConfig::default(), ManualClock::new());
    let mut session = Session::new(controller, Language::English);

    session.handle(BrowseCommand::Profession("farmer".to_string()));
    assert_eq!(session.controller().criteria().profession_filter, "Farmer");
    assert_eq!(session.controller().total_matches(), 1);

    session.handle(BrowseCommand::Profession("গৃহিণী".to_string()));
    assert_eq!(session.controller().criteria().profession_filter, "Housewife");

    let outcome = session.handle(BrowseCommand::Profession("Pilot".to_string()));
    assert!(matches!(outcome, Outcome::Print(text) if text.contains("unknown profession")));
    assert_eq!(session.controller().criteria().profession_filter, "Housewife");
}

#[test]
fn typed_search_waits_for_the_clock() {
    let clock = ManualClock::new();
    let controller = QueryController::with_clock(store(), &QueryConfig::default(), clock.clone());
    let mut session = Session::new(controller, Language::English);

    assert_eq!(
        session.handle(BrowseCommand::Type("rok".to_string())),
        Outcome::Pending
    );
    clock.advance_ms(399);
    assert_eq!(session.tick(), None);
    clock.advance_ms(1);
    let rendered = session.tick().unwrap();
    assert!(rendered.contains("Rokeya Begum"));
    assert!(!rendered.contains("Abdul Karim"));
    assert_eq!(session.controller().total_matches(), 1);
}

#[test]
fn language_toggle_without_argument() {
    let controller = QueryController::new(store(), &QueryConfig::default());
    let mut session: Session<SystemClock> = Session::new(controller, Language::English);
    session.handle(BrowseCommand::Language(None));
    assert_eq!(session.language(), Language::Bangla);
    session.handle(BrowseCommand::Language(None));
    assert_eq!(session.language(), Language::English);
}
