use std::collections::BTreeSet;
use std::io::{self, BufReader};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use roster_cli::browse::{self, Session, resolve_profession};
use roster_cli::logging::redact_value;
use roster_cli::render;
use roster_cli::settings::Settings;
use roster_ingest::{LoadPolicy, load_path};
use roster_model::{Language, RecordStore, VoterStatus};
use roster_query::QueryController;

use crate::cli::{ListArgs, QueryArgs, ShowArgs, SourceArgs};

pub fn run_list(args: &ListArgs, settings: &Settings) -> Result<()> {
    let store = load_store(&args.source, settings)?;
    let language = display_language(&args.source, settings);
    let mut controller = QueryController::new(store, &settings.query);
    apply_query(&mut controller, &args.query)?;
    println!("{}", render::render_view(&controller.view(), language));
    Ok(())
}

pub fn run_show(args: &ShowArgs, settings: &Settings) -> Result<()> {
    let store = load_store(&args.source, settings)?;
    let language = display_language(&args.source, settings);
    let Some(record) = store.find_by_voter_id(&args.voter_id) else {
        bail!("no voter with number '{}'", args.voter_id.trim());
    };
    info!(voter_id = redact_value(&record.voter_id), "Showing voter");
    let today = chrono::Local::now().date_naive();
    println!("{}", render::detail_table(record, language, today));
    Ok(())
}

pub fn run_professions(args: &SourceArgs, settings: &Settings) -> Result<()> {
    let store = load_store(args, settings)?;
    let language = display_language(args, settings);
    if store.professions().is_empty() {
        println!("No professions recorded.");
        return Ok(());
    }
    if let Some(header) = render::location_header(&store, language) {
        println!("{header}");
    }
    println!("{}", render::professions_table(&store, language));
    Ok(())
}

pub fn run_browse(args: &SourceArgs, settings: &Settings) -> Result<()> {
    let store = load_store(args, settings)?;
    let language = display_language(args, settings);
    let controller = QueryController::new(store, &settings.query);
    let mut session = Session::new(controller, language);
    println!("{}", browse::HELP);
    let stdout = io::stdout();
    browse::run(
        &mut session,
        BufReader::new(io::stdin()),
        &mut stdout.lock(),
    )
}

fn load_store(source: &SourceArgs, settings: &Settings) -> Result<Arc<RecordStore>> {
    let policy = if source.lenient {
        LoadPolicy::Lenient
    } else {
        settings.display.load_policy
    };
    let span = info_span!("load", path = %source.roster.display());
    let _guard = span.enter();
    let (store, report) = load_path(&source.roster, policy)
        .with_context(|| format!("load roster {}", source.roster.display()))?;
    if !report.skipped.is_empty() {
        eprintln!(
            "warning: skipped {} invalid record(s); run with -v for details",
            report.skipped.len()
        );
    }
    Ok(Arc::new(store))
}

fn display_language(source: &SourceArgs, settings: &Settings) -> Language {
    source
        .lang
        .map_or(settings.display.language, Language::from)
}

fn apply_query(controller: &mut QueryController, query: &QueryArgs) -> Result<()> {
    if let Some(search) = &query.search {
        controller.set_search_text(search.clone());
    }
    controller.set_gender(query.gender.into());
    let statuses: BTreeSet<VoterStatus> = query.status.iter().map(|&s| s.into()).collect();
    controller.set_status_filter(statuses);
    if let Some(input) = &query.profession {
        let Some(key) = resolve_profession(controller.store(), input).map(str::to_string) else {
            bail!("unknown profession '{input}'; see the `professions` command");
        };
        controller.set_profession(key);
    }
    controller.set_sort_key(query.sort.into());
    controller.set_sort_order(query.order.into());
    let shown = controller.set_page(query.page);
    if shown != query.page {
        warn!(
            requested = query.page,
            shown,
            total_pages = controller.total_pages(),
            "Page out of range"
        );
    }
    Ok(())
}
