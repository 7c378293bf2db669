use std::path::PathBuf;

use chrono::Local;
use tracing::info;

use crate::{
    browser::Launcher,
    config::SearchConfig,
    error::{SearchError, ValidationError},
    fetch::{fetch_all, FeedSource},
    format::Formatter,
    model::Report,
    query::{build_queries, SearchRequest},
    storage::{file_url, LocalSaver}
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    NoResults {
        failed: Vec<String>
    },
    Saved {
        path: PathBuf,
        entries: usize,
        failed: Vec<String>
    }
}

impl SearchOutcome {
    pub fn failed(&self) -> &[String] {
        match self {
            SearchOutcome::NoResults { failed } => failed,
            SearchOutcome::Saved { failed, .. } => failed
        }
    }
}

// Validate, then fetch every selected category in order. No network
// traffic happens when the request is invalid.
pub fn build_search<S: FeedSource + ?Sized>(
    config: &SearchConfig,
    request: &SearchRequest,
    source: &S
) -> Result<Report, ValidationError> {
    let queries = build_queries(config, request)?;
    info!(keywords = %request.keywords(), categories = queries.len(), "search started");
    let (entries, failed) = fetch_all(source, &queries);
    Ok(Report::new(request.keywords(), request.categories.clone(), entries, failed))
}

pub fn run_search<S, L>(
    config: &SearchConfig,
    request: &SearchRequest,
    source: &S,
    launcher: &L
) -> Result<SearchOutcome, SearchError>
where
    S: FeedSource + ?Sized,
    L: Launcher + ?Sized,
{
    let report = build_search(config, request, source)?;
    if report.is_empty() {
        info!(failed = report.failed.len(), "search finished without results");
        return Ok(SearchOutcome::NoResults { failed: report.failed });
    }

    let html = Formatter::to_html_report(&report, config.max_results);
    let path = LocalSaver::save_report(&config.output_dir, &html, &Local::now())?;
    info!(path = %path.display(), entries = report.entries.len(), "report written");
    launcher.open(&file_url(&path)?);

    Ok(SearchOutcome::Saved {
        path,
        entries: report.entries.len(),
        failed: report.failed
    })
}
