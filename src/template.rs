//! Placeholder substitution engine.
//!
//! Templates contain `{{name}}` markers. [`scan`] finds them left to right and
//! [`render`] splices model values into their place. Neither step can fail:
//! an unterminated marker ends the scan, and a marker whose name is missing
//! from the model is copied to the output unchanged.

use indexmap::IndexMap;
use log::{debug, trace};

/// Substitution values for a single generation run, keyed by placeholder name.
pub type Model = IndexMap<String, String>;

/// A single `{{name}}` occurrence inside a template.
///
/// `position` and `raw_length` are byte offsets into the scanned string, so
/// `&template[position..position + raw_length]` is always the full marker,
/// delimiters included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    position: usize,
    raw_length: usize,
    name: String,
}

impl Placeholder {
    /// Offset of the opening `{{`.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Length of the whole marker, both delimiter pairs included.
    pub fn raw_length(&self) -> usize {
        self.raw_length
    }

    /// Text between the delimiters with surrounding whitespace trimmed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Offset just past the closing `}}`.
    pub fn end(&self) -> usize {
        self.position + self.raw_length
    }
}

/// Scans `template` for placeholders in a single left-to-right pass.
///
/// A `{` not followed by another `{` skips both characters. The first `}}`
/// after an opener closes it, so `{{a{{b}}` is one placeholder named `a{{b`.
/// If an opener has no closing pair the scan stops and returns what it has.
pub fn scan(template: &str) -> Vec<Placeholder> {
    let chars: Vec<(usize, char)> = template.char_indices().collect();
    let mut placeholders = Vec::new();
    let mut i = 0;

    while i + 1 < chars.len() {
        match (chars[i].1, chars[i + 1].1) {
            ('{', '{') => {
                let Some(close) = find_closing(&chars, i + 2) else {
                    debug!("Unterminated placeholder at offset {}, stopping scan.", chars[i].0);
                    return placeholders;
                };
                // Delimiters are ASCII, so each brace is exactly one byte wide.
                let position = chars[i].0;
                let end = chars[close + 1].0 + 1;
                let name = template[position + 2..chars[close].0].trim().to_string();
                placeholders.push(Placeholder { position, raw_length: end - position, name });
                i = close + 2;
            }
            ('{', _) => i += 2,
            _ => i += 1,
        }
    }

    placeholders
}

/// Returns the char index of the first `}` of the closing pair at or after `from`.
fn find_closing(chars: &[(usize, char)], from: usize) -> Option<usize> {
    let mut i = from;
    while i + 1 < chars.len() {
        match (chars[i].1, chars[i + 1].1) {
            ('}', '}') => return Some(i),
            ('}', _) => i += 2,
            _ => i += 1,
        }
    }
    None
}

/// Builds the output by copying the text around `placeholders` verbatim and
/// substituting the model value for every resolved one.
///
/// The cursor only moves past a placeholder when its name resolves. An
/// unresolved placeholder is therefore flushed along with the following span.
///
/// `placeholders` must come from [`scan`] over the same `template`.
pub fn render(template: &str, placeholders: &[Placeholder], model: &Model) -> String {
    let mut output = String::with_capacity(template.len());
    let mut cursor = 0;

    for placeholder in placeholders {
        if placeholder.position > cursor {
            output.push_str(&template[cursor..placeholder.position]);
            cursor = placeholder.position;
        }
        match model.get(placeholder.name()) {
            Some(value) => {
                output.push_str(value);
                cursor += placeholder.raw_length;
            }
            None => trace!("Unresolved placeholder '{}' left as is.", placeholder.name()),
        }
    }

    if cursor < template.len() {
        output.push_str(&template[cursor..]);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(pairs: &[(&str, &str)]) -> Model {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_scan_records_span_and_trimmed_name() {
        let placeholders = scan("ab{{ name }}cd");
        assert_eq!(placeholders.len(), 1);
        assert_eq!(placeholders[0].position(), 2);
        assert_eq!(placeholders[0].raw_length(), 10);
        assert_eq!(placeholders[0].end(), 12);
        assert_eq!(placeholders[0].name(), "name");
    }

    #[test]
    fn test_scan_empty_name() {
        let placeholders = scan("{{}}");
        assert_eq!(placeholders.len(), 1);
        assert_eq!(placeholders[0].name(), "");
        assert_eq!(placeholders[0].raw_length(), 4);
    }

    #[test]
    fn test_scan_first_closing_pair_wins() {
        let placeholders = scan("{{a{{b}}c}}");
        assert_eq!(placeholders.len(), 1);
        assert_eq!(placeholders[0].name(), "a{{b");
        assert_eq!(placeholders[0].raw_length(), 8);
    }

    #[test]
    fn test_scan_stops_at_unterminated_placeholder() {
        let placeholders = scan("{{a}} {{b {{c}}");
        // `{{b {{c}}` closes at the first `}}`, so the scan finds two.
        assert_eq!(placeholders.len(), 2);

        let placeholders = scan("{{a}} {{b");
        assert_eq!(placeholders.len(), 1);
        assert_eq!(placeholders[0].name(), "a");
    }

    #[test]
    fn test_scan_single_brace_skips_next_char() {
        assert_eq!(scan("{ {{b}}").len(), 1);
        assert_eq!(scan("{x{b}}").len(), 0);

        let placeholders = scan("{{{b}}");
        assert_eq!(placeholders.len(), 1);
        assert_eq!(placeholders[0].name(), "{b");
    }

    #[test]
    fn test_scan_lone_closing_brace_skips_next_char() {
        // `}` followed by `x` is skipped as a pair, the `}}` after it closes.
        let placeholders = scan("{{a}x}}");
        assert_eq!(placeholders.len(), 1);
        assert_eq!(placeholders[0].name(), "a}x");
    }

    #[test]
    fn test_scan_multibyte_text() {
        let template = "héllo {{ wörld }} ✓";
        let placeholders = scan(template);
        assert_eq!(placeholders.len(), 1);
        let p = &placeholders[0];
        assert_eq!(&template[p.position()..p.end()], "{{ wörld }}");
        assert_eq!(p.name(), "wörld");
    }

    #[test]
    fn test_render_resolved_and_unresolved_mix() {
        let template = "{{a}}-{{missing}}-{{b}}";
        let output = render(template, &scan(template), &model(&[("a", "1"), ("b", "2")]));
        assert_eq!(output, "1-{{missing}}-2");
    }

    #[test]
    fn test_render_empty_name_passes_through() {
        let template = "x{{}}y";
        assert_eq!(render(template, &scan(template), &model(&[("a", "1")])), template);
    }

    #[test]
    fn test_render_value_is_not_rescanned() {
        let template = "{{a}}";
        let output = render(template, &scan(template), &model(&[("a", "{{b}}"), ("b", "2")]));
        assert_eq!(output, "{{b}}");
    }

    #[test]
    fn test_render_length_accounts_for_resolved_only() {
        let template = "<{{a}}|{{zz}}|{{ b }}>";
        let placeholders = scan(template);
        let model = model(&[("a", "one"), ("b", "")]);
        let output = render(template, &placeholders, &model);

        let shrink: usize = placeholders
            .iter()
            .filter_map(|p| model.get(p.name()).map(|v| p.raw_length() - v.len()))
            .sum();
        assert_eq!(output.len(), template.len() - shrink);
        assert_eq!(output, "<one|{{zz}}|>");
    }
}
