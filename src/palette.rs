//! Node colors for colleges and NFL teams, and the translucent link variant.

use std::collections::BTreeMap;
use std::sync::LazyLock;

pub const COLLEGE_FALLBACK: &str = "#666666";
pub const TEAM_FALLBACK: &str = "#B0B0B0";
pub const LINK_ALPHA: f64 = 0.45;

pub static COLLEGE_COLORS: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    BTreeMap::from([
        ("Penn State", "#041E42"),
        ("Michigan", "#00274C"),
        ("Ohio State", "#BB0000"),
        ("Michigan State", "#18453B"),
        ("Iowa", "#FFCD00"),
        ("Wisconsin", "#C5050C"),
        ("Minnesota", "#7A0019"),
        ("Nebraska", "#E41C38"),
        ("Illinois", "#13294B"),
        ("Indiana", "#990000"),
        ("Purdue", "#CEB888"),
        ("Rutgers", "#CC0033"),
        ("Northwestern", "#4E2A84"),
        ("Maryland", "#E03A3E"),
        ("USC", "#990000"),
        ("UCLA", "#2774AE"),
        ("Oregon", "#154733"),
        ("Washington", "#4B2E83"),
        ("Alabama", "#9E1B32"),
        ("Georgia", "#BA0C2F"),
        ("LSU", "#461D7C"),
        ("Florida", "#0021A5"),
        ("Tennessee", "#FF8200"),
        ("Kentucky", "#0033A0"),
        ("Auburn", "#0C2340"),
        ("Ole Miss", "#CE1126"),
        ("Mississippi State", "#660000"),
        ("Missouri", "#F1B82D"),
        ("Texas A&M", "#500000"),
        ("Texas", "#BF5700"),
        ("Oklahoma", "#841617"),
        ("South Carolina", "#73000A"),
        ("Vanderbilt", "#866D4B"),
        ("Arkansas", "#9D2235"),
    ])
});

pub static TEAM_COLORS: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    BTreeMap::from([
        ("Arizona Cardinals", "#97233F"),
        ("Atlanta Falcons", "#A71930"),
        ("Baltimore Ravens", "#241773"),
        ("Buffalo Bills", "#00338D"),
        ("Carolina Panthers", "#0085CA"),
        ("Chicago Bears", "#0B162A"),
        ("Cincinnati Bengals", "#FB4F14"),
        ("Cleveland Browns", "#311D00"),
        ("Dallas Cowboys", "#041E42"),
        ("Denver Broncos", "#002244"),
        ("Detroit Lions", "#0076B6"),
        ("Green Bay Packers", "#203731"),
        ("Houston Texans", "#03202F"),
        ("Indianapolis Colts", "#003A70"),
        ("Jacksonville Jaguars", "#101820"),
        ("Kansas City Chiefs", "#E31837"),
        ("Las Vegas Raiders", "#000000"),
        ("Los Angeles Chargers", "#0080C6"),
        ("Los Angeles Rams", "#003594"),
        ("Miami Dolphins", "#008E97"),
        ("Minnesota Vikings", "#4F2683"),
        ("New England Patriots", "#002244"),
        ("New Orleans Saints", "#D3BC8D"),
        ("New York Giants", "#0B2265"),
        ("New York Jets", "#125740"),
        ("Philadelphia Eagles", "#004C54"),
        ("Pittsburgh Steelers", "#FFB612"),
        ("San Francisco 49ers", "#AA0000"),
        ("Seattle Seahawks", "#002244"),
        ("Tampa Bay Buccaneers", "#D50A0A"),
        ("Tennessee Titans", "#0C2340"),
        ("Washington Commanders", "#5A1414"),
    ])
});

pub fn college_color(name: &str) -> &'static str {
    COLLEGE_COLORS.get(name).copied().unwrap_or(COLLEGE_FALLBACK)
}

pub fn team_color(name: &str) -> &'static str {
    TEAM_COLORS.get(name).copied().unwrap_or(TEAM_FALLBACK)
}

/// `#RRGGBB` -> `rgba(r,g,b,alpha)`.
///
/// Anything that is not exactly six hex digits (after trimming and dropping
/// leading `#`) becomes translucent gray.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> String {
    match parse_hex(hex) {
        Some((r, g, b)) => format!("rgba({r},{g},{b},{alpha})"),
        None => format!("rgba(102,102,102,{alpha})"),
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let s = hex.trim().trim_start_matches('#');
    if s.len() != 6 || !s.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hex_to_rgba_parses_six_digit_colors() {
        assert_eq!(hex_to_rgba("#041E42", LINK_ALPHA), "rgba(4,30,66,0.45)");
        assert_eq!(hex_to_rgba(" bb0000 ", 1.0), "rgba(187,0,0,1)");
    }

    #[test]
    fn hex_to_rgba_falls_back_to_gray() {
        assert_eq!(hex_to_rgba("#FFF", LINK_ALPHA), "rgba(102,102,102,0.45)");
        assert_eq!(hex_to_rgba("#GGGGGG", LINK_ALPHA), "rgba(102,102,102,0.45)");
        assert_eq!(hex_to_rgba("", 0.5), "rgba(102,102,102,0.5)");
    }

    #[test]
    fn lookups_fall_back_per_role() {
        assert_eq!(college_color("Penn State"), "#041E42");
        assert_eq!(college_color("Boise State"), COLLEGE_FALLBACK);
        assert_eq!(team_color("Detroit Lions"), "#0076B6");
        assert_eq!(team_color("Michigan"), TEAM_FALLBACK);
    }
}
