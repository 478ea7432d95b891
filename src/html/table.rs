use crate::html::text::CellText;
use regex::Regex;
use std::collections::BTreeMap;

/// One parsed `<table>`: a header row plus rectangular-ish body rows.
///
/// Spanned cells are already expanded, so `rows[i][j]` is the text shown in
/// grid position (i, j). Rows may be shorter than `headers`.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone)]
struct RawCell {
    text: String,
    header: bool,
    rowspan: usize,
    colspan: usize,
}

#[derive(Debug, Clone, Default)]
struct RawRow {
    cells: Vec<RawCell>,
    in_thead: bool,
    /// Row group (`thead`/`tbody`/`tfoot` section) the row belongs to.
    group: usize,
}

#[derive(Debug, Clone, Copy)]
struct OpenCell {
    start: usize,
    header: bool,
    rowspan: usize,
    colspan: usize,
}

/// Accumulates rows for one `<table>` while the document is scanned.
#[derive(Debug, Default)]
struct TableBuilder {
    start: usize,
    in_thead: bool,
    group: usize,
    rows: Vec<RawRow>,
    row: Option<RawRow>,
    cell: Option<OpenCell>,
}

impl TableBuilder {
    fn new(start: usize) -> Self {
        Self {
            start,
            ..Self::default()
        }
    }

    fn close_cell(&mut self, html: &str, end: usize, text: &CellText) {
        let Some(open) = self.cell.take() else {
            return;
        };
        let fragment = html.get(open.start..end).unwrap_or("");
        let (in_thead, group) = (self.in_thead, self.group);
        let row = self.row.get_or_insert_with(|| RawRow {
            cells: Vec::new(),
            in_thead,
            group,
        });
        row.cells.push(RawCell {
            text: text.extract(fragment),
            header: open.header,
            rowspan: open.rowspan,
            colspan: open.colspan,
        });
    }

    fn close_row(&mut self, html: &str, end: usize, text: &CellText) {
        self.close_cell(html, end, text);
        if let Some(row) = self.row.take() {
            if !row.cells.is_empty() {
                self.rows.push(row);
            }
        }
    }

    fn finish(mut self, html: &str, end: usize, text: &CellText) -> (usize, HtmlTable) {
        self.close_row(html, end, text);
        (self.start, assemble(self.rows))
    }
}

const MAX_COLSPAN: usize = 1000;
const MAX_ROWSPAN: usize = 65534;

/// Scans an HTML document for tables.
///
/// Regex-driven rather than a full DOM: only table structure tags are
/// tracked, everything between them is cell content.
pub struct TableParser {
    hidden: Regex,
    structure: Regex,
    span: Regex,
    text: CellText,
}

impl TableParser {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            // Comments, style/script bodies and display:none elements never
            // reach the visible cell text.
            hidden: Regex::new(
                r#"(?is)<!--.*?-->|<style\b.*?</style\s*>|<script\b.*?</script\s*>|<(?:span|div|sup)\b[^>]*display\s*:\s*none[^>]*>.*?</(?:span|div|sup)\s*>"#,
            )?,
            structure: Regex::new(r"(?i)<(/?)(table|thead|tbody|tfoot|tr|th|td)\b([^>]*)>")?,
            span: Regex::new(r#"(?i)\b(rowspan|colspan)\s*=\s*["']?\s*(\d+)"#)?,
            text: CellText::new()?,
        })
    }

    /// Parse every table in `html`, in document order of their opening tags.
    pub fn parse(&self, html: &str) -> Vec<HtmlTable> {
        let html = self.hidden.replace_all(html, "");
        let html: &str = &html;

        let mut stack: Vec<TableBuilder> = Vec::new();
        let mut done: Vec<(usize, HtmlTable)> = Vec::new();

        for caps in self.structure.captures_iter(html) {
            let Some(m) = caps.get(0) else { continue };
            let closing = !caps[1].is_empty();
            let tag = caps[2].to_ascii_lowercase();

            if tag == "table" {
                if closing {
                    if let Some(builder) = stack.pop() {
                        done.push(builder.finish(html, m.start(), &self.text));
                    }
                } else {
                    stack.push(TableBuilder::new(m.start()));
                }
                continue;
            }

            // Structure tags outside any table are ignored.
            let Some(builder) = stack.last_mut() else {
                continue;
            };

            match (tag.as_str(), closing) {
                ("thead" | "tbody" | "tfoot", _) => {
                    builder.close_row(html, m.start(), &self.text);
                    builder.in_thead = tag == "thead" && !closing;
                    builder.group += 1;
                }
                ("tr", false) => {
                    builder.close_row(html, m.start(), &self.text);
                    builder.row = Some(RawRow {
                        cells: Vec::new(),
                        in_thead: builder.in_thead,
                        group: builder.group,
                    });
                }
                ("tr", true) => builder.close_row(html, m.start(), &self.text),
                ("th" | "td", false) => {
                    builder.close_cell(html, m.start(), &self.text);
                    let (rowspan, colspan) = self.spans(&caps[3]);
                    builder.cell = Some(OpenCell {
                        start: m.end(),
                        header: tag == "th",
                        rowspan,
                        colspan,
                    });
                }
                ("th" | "td", true) => builder.close_cell(html, m.start(), &self.text),
                _ => {}
            }
        }

        // Unterminated tables still count; close them at end of input.
        while let Some(builder) = stack.pop() {
            done.push(builder.finish(html, html.len(), &self.text));
        }

        done.sort_by_key(|(start, _)| *start);
        done.into_iter().map(|(_, table)| table).collect()
    }

    /// `(rowspan, colspan)` clamped to the ranges HTML allows.
    ///
    /// A rowspan of 0 is kept: it means "to the end of the row group".
    fn spans(&self, attrs: &str) -> (usize, usize) {
        let mut rowspan = 1;
        let mut colspan = 1;
        for caps in self.span.captures_iter(attrs) {
            // Digits beyond usize overflow the parse; they clamp to the max.
            let n = caps[2].parse::<usize>().unwrap_or(usize::MAX);
            if caps[1].eq_ignore_ascii_case("rowspan") {
                rowspan = n.min(MAX_ROWSPAN);
            } else {
                colspan = n.clamp(1, MAX_COLSPAN);
            }
        }
        (rowspan, colspan)
    }
}

/// Expand spans into a grid, then split header rows from body rows.
///
/// Header rows are the `<thead>` rows, or else the leading rows made only of
/// `<th>` cells. With several header rows the last one names the columns.
fn assemble(rows: Vec<RawRow>) -> HtmlTable {
    let header_flags: Vec<bool> = rows
        .iter()
        .map(|r| r.in_thead || r.cells.iter().all(|c| c.header))
        .collect();
    let has_thead = rows.iter().any(|r| r.in_thead);

    let grid = expand_spans(&rows);

    let mut headers: Option<Vec<String>> = None;
    let mut body = Vec::new();
    let mut in_header = true;
    for (cells, (raw, is_header_like)) in grid.into_iter().zip(rows.iter().zip(header_flags)) {
        let is_header = if has_thead {
            raw.in_thead
        } else {
            in_header && is_header_like
        };
        if is_header {
            headers = Some(cells);
        } else {
            in_header = false;
            body.push(cells);
        }
    }

    let width = body
        .iter()
        .map(Vec::len)
        .chain(headers.as_ref().map(Vec::len))
        .max()
        .unwrap_or(0);

    let mut headers = headers.unwrap_or_default();
    for (i, h) in headers.iter_mut().enumerate() {
        if h.is_empty() {
            *h = i.to_string();
        }
    }
    for i in headers.len()..width {
        headers.push(i.to_string());
    }

    HtmlTable {
        headers,
        rows: body,
    }
}

fn expand_spans(rows: &[RawRow]) -> Vec<Vec<String>> {
    // column -> (text, rows still to fill)
    let mut carry: BTreeMap<usize, (String, usize)> = BTreeMap::new();
    let mut grid = Vec::with_capacity(rows.len());
    let mut group = rows.first().map(|r| r.group);

    for row in rows {
        // Spans never cross a row group boundary.
        if group != Some(row.group) {
            carry.clear();
            group = Some(row.group);
        }

        let mut out: Vec<String> = Vec::new();
        let mut col = 0usize;

        for cell in &row.cells {
            while take_carry(&mut carry, col, &mut out) {
                col += 1;
            }
            for _ in 0..cell.colspan {
                out.push(cell.text.clone());
                match cell.rowspan {
                    0 => {
                        carry.insert(col, (cell.text.clone(), usize::MAX));
                    }
                    1 => {}
                    n => {
                        carry.insert(col, (cell.text.clone(), n - 1));
                    }
                }
                col += 1;
            }
        }

        // Spans from earlier rows that sit past this row's last cell.
        let trailing: Vec<usize> = carry.range(col..).map(|(c, _)| *c).collect();
        for c in trailing {
            while out.len() < c {
                out.push(String::new());
            }
            take_carry(&mut carry, c, &mut out);
        }

        grid.push(out);
    }

    grid
}

fn take_carry(carry: &mut BTreeMap<usize, (String, usize)>, col: usize, out: &mut Vec<String>) -> bool {
    let Some((text, left)) = carry.get_mut(&col) else {
        return false;
    };
    out.push(text.clone());
    *left -= 1;
    if *left == 0 {
        carry.remove(&col);
    }
    true
}
