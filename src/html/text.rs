use regex::{Captures, Regex};

/// Turns a raw cell fragment into display text.
///
/// Tags are stripped (`<br>` becomes a space), entities decoded and
/// whitespace collapsed, roughly what a browser shows for the cell.
pub struct CellText {
    line_break: Regex,
    tag: Regex,
    entity: Regex,
}

impl CellText {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            line_break: Regex::new(r"(?i)<br\s*/?>")?,
            tag: Regex::new(r"(?s)<[^>]*>")?,
            entity: Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z][a-zA-Z0-9]*);")?,
        })
    }

    pub fn extract(&self, fragment: &str) -> String {
        let text = self.line_break.replace_all(fragment, " ");
        let text = self.tag.replace_all(&text, "");
        let text = self.entity.replace_all(&text, |caps: &Captures| {
            decode_entity(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        });
        normalize_ws(&text)
    }
}

/// Collapse whitespace runs (including NBSP) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

fn decode_entity(name: &str) -> Option<String> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code).map(String::from);
    }

    let ch = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "dagger" => '\u{2020}',
        "Dagger" => '\u{2021}',
        "middot" => '\u{b7}',
        "eacute" => '\u{e9}',
        _ => return None,
    };
    Some(ch.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_tags_and_decodes_entities() {
        let t = CellText::new().unwrap();
        assert_eq!(
            t.extract(r#"<a href="/wiki/Texas_A%26M" title="x">Texas A&amp;M</a>"#),
            "Texas A&M"
        );
        assert_eq!(t.extract("Ja&#39;Marr<br/>Chase"), "Ja'Marr Chase");
        assert_eq!(t.extract("&#x41;&nbsp;&nbsp;B"), "A B");
    }

    #[test]
    fn keeps_unknown_entities_verbatim() {
        let t = CellText::new().unwrap();
        assert_eq!(t.extract("a &bogus; b"), "a &bogus; b");
    }
}
