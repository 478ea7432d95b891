//! Resolved run settings: CLI values with their defaults filled in.

use crate::Cli;
use crate::conference::ConferenceMode;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub year: i32,
    pub mode: ConferenceMode,
    pub out_html: PathBuf,
    pub out_csv: PathBuf,
    pub open: bool,
}

impl RunConfig {
    pub fn from_cli(cli: Cli) -> Self {
        let year = cli.year;
        Self {
            year,
            mode: cli.confs,
            out_html: cli
                .out_html
                .unwrap_or_else(|| PathBuf::from("viz").join(format!("cfb_sankey_{year}.html"))),
            out_csv: cli
                .out_csv
                .unwrap_or_else(|| PathBuf::from("data").join(format!("cfb_nfl_{year}.csv"))),
            open: cli.open,
        }
    }

    pub fn title(&self) -> String {
        format!(
            "From Saturdays to Sundays: {} in the {} NFL Draft<br><sup>Data: Wikipedia NFL Draft Pages</sup>",
            self.mode.label(),
            self.year
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_derive_from_year() {
        let cli = Cli::try_parse_from(["draft-sankey", "--year", "2024"]).unwrap();
        let cfg = RunConfig::from_cli(cli);
        assert_eq!(
            cfg,
            RunConfig {
                year: 2024,
                mode: ConferenceMode::Both,
                out_html: PathBuf::from("viz/cfb_sankey_2024.html"),
                out_csv: PathBuf::from("data/cfb_nfl_2024.csv"),
                open: false,
            }
        );
        assert_eq!(
            cfg.title(),
            "From Saturdays to Sundays: Big Ten & SEC in the 2024 NFL Draft<br><sup>Data: Wikipedia NFL Draft Pages</sup>"
        );
    }

    #[test]
    fn explicit_flags_win() {
        let cli = Cli::try_parse_from([
            "draft-sankey",
            "--confs",
            "sec",
            "--out-html",
            "out/x.html",
            "--out-csv",
            "out/x.csv",
            "--open",
        ])
        .unwrap();
        let cfg = RunConfig::from_cli(cli);
        assert_eq!(cfg.year, 2025);
        assert_eq!(cfg.mode, ConferenceMode::Sec);
        assert_eq!(cfg.out_html, PathBuf::from("out/x.html"));
        assert_eq!(cfg.out_csv, PathBuf::from("out/x.csv"));
        assert!(cfg.open);
        assert!(cfg.title().contains(": SEC in the 2025 NFL Draft"));
    }

    #[test]
    fn unknown_conference_is_rejected() {
        assert!(Cli::try_parse_from(["draft-sankey", "--confs", "acc"]).is_err());
    }
}
