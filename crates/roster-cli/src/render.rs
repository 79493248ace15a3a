//! Terminal rendering of query results, voter details and professions.
//!
//! Everything here builds strings or [`Table`]s; printing is left to the
//! commands. The display language only changes which member of each
//! bilingual pair is shown and which labels are used.

use chrono::NaiveDate;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_model::{
    Bilingual, Language, OptionalBilingual, ProfessionChoice, Record, RecordStore, VoterStatus,
};
use roster_query::{Criteria, GenderFilter, PageSlot, ResultView, RowRange, ViewState};

/// Placeholder for absent values.
const MISSING: &str = "-";

/// Column headers of the result table, in display order.
fn result_headers(language: Language) -> [&'static str; 8] {
    match language {
        Language::English => [
            "Serial",
            "Voter No",
            "Name",
            "Father",
            "Gender",
            "Birth date",
            "Profession",
            "Status",
        ],
        Language::Bangla => [
            "ক্রমিক",
            "ভোটার নং",
            "নাম",
            "পিতা",
            "লিঙ্গ",
            "জন্ম তারিখ",
            "পেশা",
            "অবস্থা",
        ],
    }
}

/// Header line above the result table: the roster's location.
pub fn location_header(store: &RecordStore, language: Language) -> Option<String> {
    let line = store.metadata().location_line(language);
    (!line.is_empty()).then_some(line)
}

/// Table of the records on the current page.
pub fn results_table(items: &[&Record], language: Language) -> Table {
    let mut table = Table::new();
    table.set_header(result_headers(language).map(header_cell).to_vec());
    apply_list_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for record in items {
        table.add_row(vec![
            Cell::new(record.serial),
            Cell::new(&record.voter_id),
            Cell::new(text_or_missing(record.name.get(language))).add_attribute(Attribute::Bold),
            optional_cell(&record.father_name, language),
            Cell::new(record.gender.label(language)),
            Cell::new(record.formatted_birth_date()),
            Cell::new(text_or_missing(record.profession.get(language))),
            status_cell(record.status, language),
        ]);
    }
    table
}

/// Message shown in place of the table when there is nothing to list.
pub fn empty_message(state: ViewState, language: Language) -> Option<&'static str> {
    match (state, language) {
        (ViewState::Results, _) => None,
        (ViewState::EmptyRoster, Language::English) => Some("The roster contains no voters."),
        (ViewState::EmptyRoster, Language::Bangla) => Some("তালিকায় কোনো ভোটার নেই।"),
        (ViewState::NoMatches, Language::English) => {
            Some("No voters match the current search and filters.")
        }
        (ViewState::NoMatches, Language::Bangla) => {
            Some("অনুসন্ধান ও ফিল্টারের সাথে মেলে এমন কোনো ভোটার নেই।")
        }
    }
}

/// "Showing 26–50 of 60".
pub fn row_range_line(range: RowRange, language: Language) -> String {
    match language {
        Language::English => format!(
            "Showing {}–{} of {}",
            range.first, range.last, range.total
        ),
        Language::Bangla => format!(
            "মোট {} জনের মধ্যে {}–{} দেখানো হচ্ছে",
            bangla_digits(range.total),
            bangla_digits(range.first),
            bangla_digits(range.last)
        ),
    }
}

/// Compact page strip with the current page bracketed: `1 … 4 [5] 6 … 8`.
pub fn page_strip(slots: &[PageSlot], current: usize) -> String {
    slots
        .iter()
        .map(|slot| match *slot {
            PageSlot::Page(page) if page == current => format!("[{page}]"),
            PageSlot::Page(page) => page.to_string(),
            PageSlot::Gap => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One-line summary of the active criteria, for the interactive browser.
pub fn criteria_line(criteria: &Criteria) -> String {
    let mut parts = Vec::new();
    if let Some(search) = criteria.normalized_search() {
        parts.push(format!("search=\"{search}\""));
    }
    if criteria.gender_filter != GenderFilter::All {
        parts.push(format!("gender={}", criteria.gender_filter.as_str()));
    }
    if !criteria.status_filter.is_empty() {
        let statuses: Vec<&str> = criteria
            .status_filter
            .iter()
            .map(VoterStatus::as_str)
            .collect();
        parts.push(format!("status={}", statuses.join(",")));
    }
    if !criteria.profession_filter.is_empty() {
        parts.push(format!("profession=\"{}\"", criteria.profession_filter));
    }
    parts.push(format!(
        "sort={} {}",
        criteria.sort_key.as_str(),
        criteria.sort_order.as_str()
    ));
    parts.join("  ")
}

/// Full rendering of a result view: header, rows or empty state, range and
/// page strip.
pub fn render_view(view: &ResultView<'_>, language: Language) -> String {
    let mut out = Vec::new();
    let location = view.metadata.location_line(language);
    if !location.is_empty() {
        out.push(location);
    }
    match empty_message(view.state(), language) {
        Some(message) => out.push(message.to_string()),
        None => {
            out.push(results_table(&view.items, language).to_string());
            out.push(row_range_line(view.row_range(), language));
        }
    }
    if view.total_pages > 1 {
        out.push(page_strip(&view.page_window(), view.current_page));
    }
    out.join("\n")
}

/// Field/value table with both languages side by side.
pub fn detail_table(record: &Record, language: Language, today: NaiveDate) -> Table {
    let labels = DetailLabels::for_language(language);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(labels.field),
        header_cell("English"),
        header_cell("বাংলা"),
    ]);
    apply_detail_style(&mut table);

    table.add_row(single_row(labels.serial, record.serial.to_string()));
    table.add_row(single_row(labels.voter_id, record.voter_id.clone()));
    table.add_row(pair_row(labels.name, &record.name));
    table.add_row(optional_row(labels.father, &record.father_name));
    table.add_row(optional_row(labels.mother, &record.mother_name));
    table.add_row(optional_row(labels.spouse, &record.spouse_name));
    table.add_row(pair_row(labels.profession, &record.profession));
    table.add_row(pair_row(labels.address, &record.address));
    table.add_row(vec![
        label_cell(labels.gender),
        Cell::new(record.gender.label(Language::English)),
        Cell::new(record.gender.label(Language::Bangla)),
    ]);
    table.add_row(vec![
        label_cell(labels.status),
        status_cell(record.status, Language::English),
        status_cell(record.status, Language::Bangla),
    ]);
    table.add_row(single_row(labels.birth_date, record.formatted_birth_date()));
    table.add_row(single_row(labels.age, record.age_on(today).to_string()));
    table
}

/// Professions with the number of voters holding each.
pub fn professions_table(store: &RecordStore, language: Language) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("English"),
        header_cell("বাংলা"),
        header_cell(match language {
            Language::English => "Voters",
            Language::Bangla => "ভোটার",
        }),
    ]);
    apply_list_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (index, choice) in store.professions().iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(text_or_missing(&choice.key)),
            Cell::new(text_or_missing(&choice.label_bn)),
            Cell::new(profession_count(store, choice)),
        ]);
    }
    table
}

fn profession_count(store: &RecordStore, choice: &ProfessionChoice) -> usize {
    store
        .records()
        .iter()
        .filter(|record| record.profession.en == choice.key && record.profession.bn == choice.label_bn)
        .count()
}

/// Render ASCII digits in a number with Bangla digits.
pub fn bangla_digits(value: usize) -> String {
    value
        .to_string()
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(digit) => char::from_u32(0x09E6 + digit).unwrap_or(c),
            None => c,
        })
        .collect()
}

struct DetailLabels {
    field: &'static str,
    serial: &'static str,
    voter_id: &'static str,
    name: &'static str,
    father: &'static str,
    mother: &'static str,
    spouse: &'static str,
    profession: &'static str,
    address: &'static str,
    gender: &'static str,
    status: &'static str,
    birth_date: &'static str,
    age: &'static str,
}

impl DetailLabels {
    fn for_language(language: Language) -> Self {
        match language {
            Language::English => Self {
                field: "Field",
                serial: "Serial",
                voter_id: "Voter No",
                name: "Name",
                father: "Father",
                mother: "Mother",
                spouse: "Spouse",
                profession: "Profession",
                address: "Address",
                gender: "Gender",
                status: "Status",
                birth_date: "Birth date",
                age: "Age",
            },
            Language::Bangla => Self {
                field: "বিবরণ",
                serial: "ক্রমিক",
                voter_id: "ভোটার নং",
                name: "নাম",
                father: "পিতা",
                mother: "মাতা",
                spouse: "স্বামী/স্ত্রী",
                profession: "পেশা",
                address: "ঠিকানা",
                gender: "লিঙ্গ",
                status: "অবস্থা",
                birth_date: "জন্ম তারিখ",
                age: "বয়স",
            },
        }
    }
}

fn single_row(label: &str, value: String) -> Vec<Cell> {
    vec![label_cell(label), Cell::new(value), dim_cell(MISSING)]
}

fn pair_row(label: &str, pair: &Bilingual) -> Vec<Cell> {
    vec![
        label_cell(label),
        Cell::new(text_or_missing(&pair.en)),
        Cell::new(text_or_missing(&pair.bn)),
    ]
}

fn optional_row(label: &str, pair: &OptionalBilingual) -> Vec<Cell> {
    vec![
        label_cell(label),
        optional_value_cell(pair.en.as_deref()),
        optional_value_cell(pair.bn.as_deref()),
    ]
}

fn optional_cell(pair: &OptionalBilingual, language: Language) -> Cell {
    optional_value_cell(pair.display(language))
}

fn optional_value_cell(value: Option<&str>) -> Cell {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Cell::new(value),
        _ => dim_cell(MISSING),
    }
}

fn text_or_missing(value: &str) -> &str {
    if value.trim().is_empty() {
        MISSING
    } else {
        value
    }
}

fn status_cell(status: VoterStatus, language: Language) -> Cell {
    let cell = Cell::new(status.label(language));
    match status {
        VoterStatus::Active => cell.fg(Color::Green),
        VoterStatus::Cut => cell.fg(Color::Red).add_attribute(Attribute::Bold),
        VoterStatus::Migrated => cell.fg(Color::Yellow),
        VoterStatus::Duplicate => cell.fg(Color::DarkGrey),
    }
}

fn apply_list_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn apply_detail_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::Blue)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_strip_brackets_current_page() {
        let slots = roster_query::page_window(5, 8);
        assert_eq!(page_strip(&slots, 5), "1 … 4 [5] 6 … 8");
        assert_eq!(page_strip(&roster_query::page_window(1, 2), 1), "[1] 2");
    }

    #[test]
    fn row_range_in_both_languages() {
        let range = RowRange::new(2, 25, 60);
        assert_eq!(row_range_line(range, Language::English), "Showing 26–50 of 60");
        assert_eq!(
            row_range_line(range, Language::Bangla),
            "মোট ৬০ জনের মধ্যে ২৬–৫০ দেখানো হচ্ছে"
        );
    }

    #[test]
    fn bangla_digit_conversion() {
        assert_eq!(bangla_digits(0), "০");
        assert_eq!(bangla_digits(1907), "১৯০৭");
    }

    #[test]
    fn empty_states_are_distinct() {
        let empty = empty_message(ViewState::EmptyRoster, Language::English);
        let none = empty_message(ViewState::NoMatches, Language::English);
        assert!(empty.is_some() && none.is_some());
        assert_ne!(empty, none);
        assert_eq!(empty_message(ViewState::Results, Language::Bangla), None);
    }

    #[test]
    fn criteria_line_lists_active_filters() {
        let mut criteria = Criteria {
            search_text: " Ali ".to_string(),
            gender_filter: GenderFilter::Female,
            ..Criteria::default()
        };
        criteria.status_filter.insert(VoterStatus::Cut);
        assert_eq!(
            criteria_line(&criteria),
            "search=\"ali\"  gender=female  status=cut  sort=serial asc"
        );
        assert_eq!(criteria_line(&Criteria::default()), "sort=serial asc");
    }
}
