use regex::Regex;

/// Field cleaners for draft table cells. All of them are idempotent.
pub struct Cleaner {
    bracketed: Regex,
    parenthetical: Regex,
}

impl Cleaner {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            // Footnote markers such as "Georgia[a]".
            bracketed: Regex::new(r"\s*\[.*?\]")?,
            // Disambiguators such as "Washington (from Chicago)".
            parenthetical: Regex::new(r"\s*\(.*\)")?,
        })
    }

    pub fn person(&self, raw: &str) -> String {
        raw.trim().to_string()
    }

    pub fn origin(&self, raw: &str) -> String {
        self.bracketed.replace_all(raw, "").trim().to_string()
    }

    pub fn destination(&self, raw: &str) -> String {
        self.parenthetical.replace_all(raw, "").trim().to_string()
    }
}

/// Pick number as a positive integer. Anything else is `None`, never an error.
///
/// Accepts integral floats ("12.0") the way a numeric column read would.
pub fn parse_rank(raw: &str) -> Option<u32> {
    let s = raw.trim();
    let n = match s.parse::<u32>() {
        Ok(n) => n,
        Err(_) => {
            let f = s.parse::<f64>().ok()?;
            if !f.is_finite() || f.fract() != 0.0 || f < 1.0 || f > f64::from(u32::MAX) {
                return None;
            }
            f as u32
        }
    };
    (n > 0).then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn origin_drops_footnotes() {
        let c = Cleaner::new().unwrap();
        assert_eq!(c.origin("Georgia[a]"), "Georgia");
        assert_eq!(c.origin("  Ohio State [12] [b] "), "Ohio State");
        assert_eq!(c.origin("Miami (FL)"), "Miami (FL)");
    }

    #[test]
    fn destination_drops_parentheticals() {
        let c = Cleaner::new().unwrap();
        assert_eq!(c.destination("Chicago Bears (from Carolina)"), "Chicago Bears");
        assert_eq!(c.destination("Detroit Lions"), "Detroit Lions");
    }

    #[test]
    fn cleaning_is_idempotent() {
        let c = Cleaner::new().unwrap();
        for raw in ["Georgia[a]", " Texas A&M ", "LSU [1](x)", "[only]"] {
            let once = c.origin(raw);
            assert_eq!(c.origin(&once), once);
        }
        for raw in ["Las Vegas Raiders (from NYJ) ", "Jets (a) (b)", "(x)"] {
            let once = c.destination(raw);
            assert_eq!(c.destination(&once), once);
        }
    }

    #[test]
    fn rank_coercion() {
        assert_eq!(parse_rank("3"), Some(3));
        assert_eq!(parse_rank(" 12.0 "), Some(12));
        assert_eq!(parse_rank("12.5"), None);
        assert_eq!(parse_rank("0"), None);
        assert_eq!(parse_rank("-4"), None);
        assert_eq!(parse_rank("Forfeited"), None);
        assert_eq!(parse_rank(""), None);
        assert_eq!(parse_rank("NaN"), None);
    }
}
