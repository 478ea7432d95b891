use crate::draft::clean::{Cleaner, parse_rank};
use crate::draft::columns::{ColumnMap, is_draft_table};
use crate::draft::frame::Frame;
use crate::draft::row::Record;
use crate::error::PipelineError;
use crate::html::TableParser;
use crate::net;
use tracing::{debug, info};

/// Fetch the draft page for `year` and extract its records.
pub fn fetch_year(year: i32) -> Result<Vec<Record>, PipelineError> {
    fetch_url(year, &net::draft_url(year))
}

/// Fetch `url` as the draft page of `year` and extract its records.
pub fn fetch_url(year: i32, url: &str) -> Result<Vec<Record>, PipelineError> {
    info!(year, url = %url, "fetching draft page");

    let html = net::get_text(url).map_err(|source| PipelineError::Transport {
        year,
        url: url.to_string(),
        source,
    })?;
    debug!(bytes = html.len(), "fetched draft page");

    extract_records(&html, year, url)
}

/// Reduce the tables in a draft page to tidy records.
///
/// `url` is only used to label a [`PipelineError::NotFound`].
pub fn extract_records(html: &str, year: i32, url: &str) -> Result<Vec<Record>, PipelineError> {
    let tables = TableParser::new()?.parse(html);
    let draft_tables: Vec<_> = tables.iter().filter(|t| is_draft_table(&t.headers)).collect();
    info!(
        tables = tables.len(),
        draft_tables = draft_tables.len(),
        "parsed draft page tables"
    );

    if draft_tables.is_empty() {
        return Err(PipelineError::NotFound {
            year,
            url: url.to_string(),
        });
    }

    let frame = Frame::concat(draft_tables);
    let cols = ColumnMap::resolve(&frame)?;
    debug!(?cols, columns = ?frame.columns, "resolved draft columns");

    let cleaner = Cleaner::new()?;
    let mut out = Vec::with_capacity(frame.rows.len());
    let mut skipped = 0usize;

    for row in &frame.rows {
        let cell = |idx: usize| row[idx].as_deref().unwrap_or("");

        let person = cleaner.person(cell(cols.person));
        let origin = cleaner.origin(cell(cols.origin));
        let destination = cleaner.destination(cell(cols.destination));

        if origin.is_empty() || destination.is_empty() {
            skipped += 1;
            debug!(?row, "skipping incomplete draft row");
            continue;
        }

        out.push(Record {
            person,
            origin,
            destination,
            year,
            rank: cols.rank.and_then(|idx| row[idx].as_deref()).and_then(parse_rank),
        });
    }

    info!(records = out.len(), skipped, "extracted draft records");
    Ok(out)
}
