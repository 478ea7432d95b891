//! Header heuristics: which tables are draft tables, and which of their
//! columns carry player, college, team and pick.

use crate::draft::frame::Frame;
use crate::error::PipelineError;

/// Substrings (lowercase) that mark a table as a draft table. A table needs
/// one header from each group.
pub const PERSON_MARKERS: &[&str] = &["player"];
pub const ORIGIN_MARKERS: &[&str] = &["college", "school"];

/// Exact normalized header names, in priority order.
pub const PERSON_ALIASES: &[&str] = &["player"];
pub const ORIGIN_ALIASES: &[&str] = &["college", "college/university", "school", "university"];
pub const DESTINATION_ALIASES: &[&str] = &["nfl team", "team", "club", "to"];
pub const RANK_ALIASES: &[&str] = &[
    "pick",
    "overall",
    "selection",
    "overall pick",
    "overall_pick",
    "pick no.",
    "pick #",
];

pub fn is_draft_table(headers: &[String]) -> bool {
    let has = |markers: &[&str]| {
        headers.iter().any(|h| {
            let h = h.to_lowercase();
            markers.iter().any(|m| h.contains(m))
        })
    };
    has(PERSON_MARKERS) && has(ORIGIN_MARKERS)
}

/// First alias present in `columns` wins; returns its position.
pub fn resolve_column(columns: &[String], aliases: &[&str]) -> Option<usize> {
    aliases
        .iter()
        .find_map(|alias| columns.iter().position(|c| c == alias))
}

/// Resolved positions of the logical columns within a [`Frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub person: usize,
    pub origin: usize,
    pub destination: usize,
    pub rank: Option<usize>,
}

impl ColumnMap {
    pub fn resolve(frame: &Frame) -> Result<Self, PipelineError> {
        let required = |role: &'static str, aliases: &[&str]| {
            resolve_column(&frame.columns, aliases).ok_or_else(|| PipelineError::MissingColumn {
                role,
                columns: frame.columns.clone(),
            })
        };

        Ok(Self {
            person: required("player", PERSON_ALIASES)?,
            origin: required("college", ORIGIN_ALIASES)?,
            destination: required("team", DESTINATION_ALIASES)?,
            rank: resolve_column(&frame.columns, RANK_ALIASES),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn draft_table_needs_player_and_college_or_school() {
        assert!(is_draft_table(&cols(&["Rnd.", "Pick No.", "NFL team", "Player", "College"])));
        assert!(is_draft_table(&cols(&["PLAYER NAME", "High school"])));
        assert!(!is_draft_table(&cols(&["Player", "Team"])));
        assert!(!is_draft_table(&cols(&["College", "Team"])));
    }

    #[test]
    fn alias_priority_is_list_order_not_column_order() {
        let columns = cols(&["school", "team", "college"]);
        assert_eq!(resolve_column(&columns, ORIGIN_ALIASES), Some(2));
        assert_eq!(resolve_column(&columns, DESTINATION_ALIASES), Some(1));
        assert_eq!(resolve_column(&columns, RANK_ALIASES), None);
    }

    #[test]
    fn resolve_maps_wikipedia_headers() {
        let frame = Frame {
            columns: cols(&["rnd.", "pick no.", "nfl team", "player", "pos.", "college", "conf."]),
            rows: vec![],
        };
        assert_eq!(
            ColumnMap::resolve(&frame).unwrap(),
            ColumnMap {
                person: 3,
                origin: 5,
                destination: 2,
                rank: Some(1),
            }
        );
    }

    #[test]
    fn missing_destination_is_an_error() {
        let frame = Frame {
            columns: cols(&["player", "college"]),
            rows: vec![],
        };
        match ColumnMap::resolve(&frame) {
            Err(PipelineError::MissingColumn { role, columns }) => {
                assert_eq!(role, "team");
                assert_eq!(columns, cols(&["player", "college"]));
            }
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }
}
