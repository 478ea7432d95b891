use crate::html::HtmlTable;

/// Column-named rows gathered from one or more tables.
///
/// Column names are normalized (trimmed, lowercased). `None` marks a column
/// the row's source table did not have.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

pub fn normalize_header(h: &str) -> String {
    h.trim().to_lowercase()
}

impl Frame {
    /// Row-wise concatenation with schema union: the first table's columns
    /// come first, new columns are appended as later tables introduce them.
    pub fn concat<'a>(tables: impl IntoIterator<Item = &'a HtmlTable>) -> Self {
        let mut frame = Frame::default();
        for table in tables {
            frame.append(table);
        }
        frame
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    fn append(&mut self, table: &HtmlTable) {
        // Table column -> frame column. Duplicate names keep the first.
        let mut mapping: Vec<Option<usize>> = Vec::with_capacity(table.headers.len());
        let mut seen: Vec<String> = Vec::new();
        for header in &table.headers {
            let name = normalize_header(header);
            if seen.contains(&name) {
                mapping.push(None);
                continue;
            }
            let idx = match self.column_index(&name) {
                Some(idx) => idx,
                None => {
                    self.columns.push(name.clone());
                    for row in &mut self.rows {
                        row.push(None);
                    }
                    self.columns.len() - 1
                }
            };
            seen.push(name);
            mapping.push(Some(idx));
        }

        for cells in &table.rows {
            let mut row = vec![None; self.columns.len()];
            for (cell, target) in cells.iter().zip(&mapping) {
                if let Some(idx) = target {
                    row[*idx] = Some(cell.clone());
                }
            }
            self.rows.push(row);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(headers: &[&str], rows: &[&[&str]]) -> HtmlTable {
        HtmlTable {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn headers_are_trimmed_and_lowercased() {
        let frame = Frame::concat([&table(&[" Player ", "NFL team"], &[&["A", "B"]])]);
        assert_eq!(frame.columns, vec!["player", "nfl team"]);
    }

    #[test]
    fn concat_takes_the_union_of_columns() {
        let a = table(&["Player", "College"], &[&["A", "X"]]);
        let b = table(&["Player", "Pick", "College"], &[&["B", "7", "Y"]]);
        let frame = Frame::concat([&a, &b]);

        assert_eq!(frame.columns, vec!["player", "college", "pick"]);
        assert_eq!(
            frame.rows,
            vec![
                vec![Some("A".to_string()), Some("X".to_string()), None],
                vec![Some("B".to_string()), Some("Y".to_string()), Some("7".to_string())],
            ]
        );
    }

    #[test]
    fn short_rows_leave_missing_cells() {
        let frame = Frame::concat([&table(&["Player", "College"], &[&["A"]])]);
        assert_eq!(frame.rows, vec![vec![Some("A".to_string()), None]]);
    }
}
