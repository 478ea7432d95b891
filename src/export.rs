//! Tidy CSV export.

use crate::draft::Record;
use std::io::{self, Write};

pub const TIDY_HEADER: [&str; 4] = ["person", "origin", "destination", "year"];

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row, quoting fields that need it.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first {
            w.write_all(b",")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            w.write_all(cell.as_bytes())?;
        }
    }
    w.write_all(b"\n")
}

/// Header plus one row per record.
pub fn write_tidy_csv<W: Write>(mut w: W, records: &[&Record]) -> io::Result<()> {
    write_row(&mut w, &TIDY_HEADER)?;
    for r in records {
        let year = r.year.to_string();
        write_row(
            &mut w,
            &[r.person.as_str(), r.origin.as_str(), r.destination.as_str(), year.as_str()],
        )?;
    }
    Ok(())
}

pub fn tidy_csv_string(records: &[&Record]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_tidy_csv(&mut buf, records);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn header_and_rows() {
        let a = Record {
            person: "A. Smith".into(),
            origin: "Michigan".into(),
            destination: "Detroit Lions".into(),
            year: 2025,
            rank: Some(3),
        };
        let b = Record {
            person: "Jones, \"BJ\"".into(),
            origin: "Texas A&M".into(),
            destination: "Dallas Cowboys".into(),
            year: 2025,
            rank: None,
        };
        assert_eq!(
            tidy_csv_string(&[&a, &b]),
            "person,origin,destination,year\n\
             A. Smith,Michigan,Detroit Lions,2025\n\
             \"Jones, \"\"BJ\"\"\",Texas A&M,Dallas Cowboys,2025\n"
        );
    }

    #[test]
    fn empty_export_still_has_header() {
        assert_eq!(tidy_csv_string(&[]), "person,origin,destination,year\n");
    }
}
