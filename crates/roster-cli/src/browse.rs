//! Interactive roster browser.
//!
//! Reads one command per line. Lines starting with `/` are treated as the
//! contents of the search box: they go through the controller's debounce,
//! so a burst of lines (a paste, a script) only filters once the input has
//! been quiet. Every other command applies immediately.
//!
//! Input is read on a separate thread and handed over a channel; all query
//! state lives on the calling thread.

use std::io::{BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;

use anyhow::{Context, Result, anyhow, bail};
use chrono::NaiveDate;

use roster_model::{Gender, Language, RecordStore, VoterStatus};
use roster_query::{Clock, GenderFilter, QueryController, SortKey, SortOrder};

use crate::logging::redact_value;
use crate::render;

pub const HELP: &str = "\
Commands:
  /TEXT              type into the search box (applies after a short pause)
  search TEXT        search immediately
  clear              clear the search
  gender all|male|female
  status STATUS      toggle active, cut, migrated or duplicate
  profession [NAME]  filter by profession, no name to remove the filter
  sort serial|name|birth-date   same key again flips the order
  order asc|desc
  next | prev | first | last | page N
  show VOTER_NO      full details of one voter
  professions        list professions
  lang [en|bn]       switch display language
  reset              clear every filter and the sort
  help | quit";

/// One parsed browser command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Type(String),
    Search(String),
    ClearSearch,
    Gender(GenderFilter),
    ToggleStatus(VoterStatus),
    Profession(String),
    Sort(SortKey),
    Order(SortOrder),
    Page(usize),
    Next,
    Prev,
    First,
    Last,
    Show(String),
    Professions,
    Language(Option<Language>),
    Reset,
    Help,
    Quit,
}

/// Parse one input line.
pub fn parse_command(line: &str) -> Result<BrowseCommand> {
    let line = line.trim();
    if let Some(text) = line.strip_prefix('/') {
        return Ok(BrowseCommand::Type(text.to_string()));
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let command = match word.to_lowercase().as_str() {
        "search" => BrowseCommand::Search(rest.to_string()),
        "clear" => BrowseCommand::ClearSearch,
        "gender" => BrowseCommand::Gender(parse_gender(rest)?),
        "status" => BrowseCommand::ToggleStatus(rest.parse()?),
        "profession" => BrowseCommand::Profession(rest.to_string()),
        "sort" => BrowseCommand::Sort(parse_sort_key(rest)?),
        "order" => BrowseCommand::Order(parse_sort_order(rest)?),
        "page" => BrowseCommand::Page(
            rest.parse()
                .with_context(|| format!("invalid page number '{rest}'"))?,
        ),
        "next" | "n" => BrowseCommand::Next,
        "prev" | "p" => BrowseCommand::Prev,
        "first" => BrowseCommand::First,
        "last" => BrowseCommand::Last,
        "show" if !rest.is_empty() => BrowseCommand::Show(rest.to_string()),
        "show" => bail!("show needs a voter number"),
        "professions" => BrowseCommand::Professions,
        "lang" if rest.is_empty() => BrowseCommand::Language(None),
        "lang" => BrowseCommand::Language(Some(rest.parse()?)),
        "reset" => BrowseCommand::Reset,
        "help" | "?" => BrowseCommand::Help,
        "quit" | "exit" | "q" => BrowseCommand::Quit,
        other => bail!("unknown command '{other}' (type 'help')"),
    };
    Ok(command)
}

fn parse_gender(value: &str) -> Result<GenderFilter> {
    match value.to_lowercase().as_str() {
        "" | "all" => Ok(GenderFilter::All),
        other => other
            .parse::<Gender>()
            .map(GenderFilter::from)
            .map_err(|_| anyhow!("unknown gender '{value}'")),
    }
}

fn parse_sort_key(value: &str) -> Result<SortKey> {
    match value.to_lowercase().as_str() {
        "serial" => Ok(SortKey::Serial),
        "name" => Ok(SortKey::Name),
        "birth-date" | "birth_date" | "dob" => Ok(SortKey::BirthDate),
        _ => bail!("unknown sort key '{value}'"),
    }
}

fn parse_sort_order(value: &str) -> Result<SortOrder> {
    match value.to_lowercase().as_str() {
        "asc" | "ascending" => Ok(SortOrder::Ascending),
        "desc" | "descending" => Ok(SortOrder::Descending),
        _ => bail!("unknown sort order '{value}'"),
    }
}

/// Map user input to a profession key from the store's index, ignoring case.
pub fn resolve_profession<'a>(store: &'a RecordStore, input: &str) -> Option<&'a str> {
    let input = input.trim();
    let folded = input.to_lowercase();
    store
        .professions()
        .iter()
        .find(|choice| choice.key.to_lowercase() == folded || choice.label_bn.trim() == input)
        .map(|choice| choice.key.as_str())
}

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text.
    Print(String),
    /// Nothing to show yet; a debounced search is pending.
    Pending,
    Quit,
}

/// Browser state: the query controller plus display preferences.
pub struct Session<C: Clock> {
    controller: QueryController<C>,
    language: Language,
    today: NaiveDate,
}

impl<C: Clock> Session<C> {
    pub fn new(controller: QueryController<C>, language: Language) -> Self {
        Self {
            controller,
            language,
            today: chrono::Local::now().date_naive(),
        }
    }

    /// Fix the date used for ages.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn controller(&self) -> &QueryController<C> {
        &self.controller
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Current result page with the criteria summary.
    pub fn render(&self) -> String {
        let view = self.controller.view();
        format!(
            "{}\n{}",
            render::render_view(&view, self.language),
            render::criteria_line(view.criteria)
        )
    }

    pub fn handle(&mut self, command: BrowseCommand) -> Outcome {
        let controller = &mut self.controller;
        match command {
            BrowseCommand::Type(text) => {
                tracing::trace!(text = redact_value(&text), "Search input");
                controller.set_search_input(text);
                return Outcome::Pending;
            }
            BrowseCommand::Search(text) => {
                controller.set_search_text(text);
            }
            BrowseCommand::ClearSearch => {
                controller.clear_search();
            }
            BrowseCommand::Gender(gender) => {
                controller.set_gender(gender);
            }
            BrowseCommand::ToggleStatus(status) => controller.toggle_status(status),
            BrowseCommand::Profession(input) if input.is_empty() => {
                controller.set_profession(String::new());
            }
            BrowseCommand::Profession(input) => {
                match resolve_profession(controller.store(), &input).map(str::to_string) {
                    Some(key) => {
                        controller.set_profession(key);
                    }
                    None => {
                        return Outcome::Print(format!(
                            "unknown profession '{input}' (type 'professions')"
                        ));
                    }
                }
            }
            BrowseCommand::Sort(key) => controller.toggle_sort(key),
            BrowseCommand::Order(order) => controller.set_sort_order(order),
            BrowseCommand::Page(page) => {
                let shown = controller.set_page(page);
                if shown != page {
                    return Outcome::Print(format!(
                        "page {page} is out of range, showing page {shown}\n{}",
                        self.render()
                    ));
                }
            }
            BrowseCommand::Next => {
                controller.next_page();
            }
            BrowseCommand::Prev => {
                controller.prev_page();
            }
            BrowseCommand::First => {
                controller.first_page();
            }
            BrowseCommand::Last => {
                controller.last_page();
            }
            BrowseCommand::Show(voter_id) => return Outcome::Print(self.detail(&voter_id)),
            BrowseCommand::Professions => {
                return Outcome::Print(
                    render::professions_table(controller.store(), self.language).to_string(),
                );
            }
            BrowseCommand::Language(language) => {
                self.language = language.unwrap_or_else(|| self.language.other());
            }
            BrowseCommand::Reset => controller.reset_filters(),
            BrowseCommand::Help => return Outcome::Print(HELP.to_string()),
            BrowseCommand::Quit => return Outcome::Quit,
        }
        Outcome::Print(self.render())
    }

    /// Apply debounced search input whose quiet period has passed.
    pub fn tick(&mut self) -> Option<String> {
        self.controller.poll().then(|| self.render())
    }

    /// Apply any pending input at end of input.
    pub fn finish(&mut self) -> Option<String> {
        self.controller.flush_search().then(|| self.render())
    }

    fn detail(&self, voter_id: &str) -> String {
        tracing::debug!(voter_id = redact_value(voter_id), "Detail lookup");
        match self.controller.detail(voter_id) {
            Some(record) => render::detail_table(record, self.language, self.today).to_string(),
            None => format!("no voter with number '{}'", voter_id.trim()),
        }
    }
}

/// Run the browser until `quit` or end of input.
pub fn run<C, R, W>(session: &mut Session<C>, input: R, out: &mut W) -> Result<()>
where
    C: Clock,
    R: BufRead + Send + 'static,
    W: Write,
{
    let (sender, receiver) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in input.lines() {
            let Ok(line) = line else { break };
            if sender.send(line).is_err() {
                break;
            }
        }
    });

    writeln!(out, "{}", session.render())?;
    loop {
        let received = match session.controller().search_remaining() {
            Some(wait) => receiver.recv_timeout(wait),
            None => receiver
                .recv()
                .map_err(|_| RecvTimeoutError::Disconnected),
        };
        match received {
            Ok(line) if line.trim().is_empty() => {}
            Ok(line) => match parse_command(&line) {
                Ok(command) => match session.handle(command) {
                    Outcome::Print(text) => writeln!(out, "{text}")?,
                    Outcome::Pending => {}
                    Outcome::Quit => break,
                },
                Err(error) => writeln!(out, "error: {error}")?,
            },
            Err(RecvTimeoutError::Timeout) => {
                if let Some(text) = session.tick() {
                    writeln!(out, "{text}")?;
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                if let Some(text) = session.finish() {
                    writeln!(out, "{text}")?;
                }
                break;
            }
        }
        out.flush()?;
    }
    Ok(())
}
