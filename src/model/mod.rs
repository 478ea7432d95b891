//! Sankey model: colleges on the left, NFL teams on the right, one link per
//! drafted player.

use crate::Result;
use crate::draft::Record;
use crate::palette::{LINK_ALPHA, college_color, hex_to_rgba, team_color};

use anyhow::anyhow;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};

#[derive(Debug, Clone, Serialize)]
pub struct NodesView {
    pub label: Vec<String>,
    pub color: Vec<String>,
}

/// Parallel per-link arrays, indexed the same way.
#[derive(Debug, Clone, Serialize)]
pub struct LinksView {
    pub source: Vec<usize>,
    pub target: Vec<usize>,
    pub value: Vec<u32>,
    pub color: Vec<String>,
    /// Hover text, one per link.
    pub customdata: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SankeyData {
    pub title: String,
    pub nodes: NodesView,
    pub links: LinksView,
}

/// Records of `year`, deduplicated on (person, origin, destination).
///
/// The first occurrence of a triple wins and input order is kept.
pub fn tidy_records(records: &[Record], year: i32) -> Vec<&Record> {
    let mut seen: HashSet<(&str, &str, &str)> = HashSet::new();
    records
        .iter()
        .filter(|r| r.year == year)
        .filter(|r| seen.insert((r.person.as_str(), r.origin.as_str(), r.destination.as_str())))
        .collect()
}

pub fn tooltip(record: &Record) -> String {
    let pick = record
        .rank
        .map(|n| format!(" (Pick {n})"))
        .unwrap_or_default();
    format!(
        "Player: {}{}<br>College: {}<br>Team: {}",
        record.person, pick, record.origin, record.destination
    )
}

/// Build the diagram for one draft year.
///
/// Nodes are the sorted colleges followed by the sorted teams. The two groups
/// are kept apart even if a name were to appear in both.
pub fn build_sankey(records: &[Record], year: i32, title: &str) -> Result<SankeyData> {
    let data = tidy_records(records, year);

    let colleges: BTreeSet<&str> = data.iter().map(|r| r.origin.as_str()).collect();
    let teams: BTreeSet<&str> = data.iter().map(|r| r.destination.as_str()).collect();

    let mut label = Vec::with_capacity(colleges.len() + teams.len());
    let mut color = Vec::with_capacity(colleges.len() + teams.len());
    let mut college_index: BTreeMap<&str, usize> = BTreeMap::new();
    let mut team_index: BTreeMap<&str, usize> = BTreeMap::new();

    for &name in &colleges {
        college_index.insert(name, label.len());
        label.push(name.to_string());
        color.push(college_color(name).to_string());
    }
    for &name in &teams {
        team_index.insert(name, label.len());
        label.push(name.to_string());
        color.push(team_color(name).to_string());
    }

    let mut links = LinksView {
        source: Vec::with_capacity(data.len()),
        target: Vec::with_capacity(data.len()),
        value: Vec::with_capacity(data.len()),
        color: Vec::with_capacity(data.len()),
        customdata: Vec::with_capacity(data.len()),
    };

    for r in &data {
        let source = *college_index
            .get(r.origin.as_str())
            .ok_or_else(|| anyhow!("no node for college {:?}", r.origin))?;
        let target = *team_index
            .get(r.destination.as_str())
            .ok_or_else(|| anyhow!("no node for team {:?}", r.destination))?;

        links.source.push(source);
        links.target.push(target);
        links.value.push(1);
        links
            .color
            .push(hex_to_rgba(college_color(&r.origin), LINK_ALPHA));
        links.customdata.push(tooltip(r));
    }

    Ok(SankeyData {
        title: title.to_string(),
        nodes: NodesView { label, color },
        links,
    })
}
