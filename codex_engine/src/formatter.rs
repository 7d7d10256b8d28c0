//! Content formatting - splitting raw text into paragraphs and lines.
//!
//! Paragraphs are separated by a blank line (`"\n\n"`). Inside a paragraph
//! every line is trimmed and the lines are kept apart as soft breaks. Whether
//! a soft break becomes a `<br>`, a newline or something else is left to the
//! presentation layer.

/// Separator between paragraphs in raw content.
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Separator used when a paragraph is rendered as plain text.
pub const SOFT_BREAK: &str = "\n";

/// Split content into paragraphs.
///
/// The returned iterator borrows `content` and does no work until polled.
/// Clone it (or call `format` again) to walk the paragraphs a second time.
pub fn format(content: &str) -> Paragraphs<'_> {
    Paragraphs {
        inner: content.split(PARAGRAPH_BREAK),
    }
}

/// Lazy iterator over the paragraphs of some content.
#[derive(Debug, Clone)]
pub struct Paragraphs<'a> {
    inner: std::str::Split<'a, &'static str>,
}

impl<'a> Iterator for Paragraphs<'a> {
    type Item = Paragraph<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Paragraph::parse)
    }
}

/// One paragraph: its trimmed lines, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Paragraph<'a> {
    fn parse(raw: &'a str) -> Self {
        Self {
            lines: raw.split('\n').map(str::trim).collect(),
        }
    }

    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// Join the lines with a caller-chosen soft break, e.g. `"<br>"`.
    pub fn join(&self, soft_break: &str) -> String {
        self.lines.join(soft_break)
    }
}

impl std::fmt::Display for Paragraph<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.join(SOFT_BREAK))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_paragraphs() {
        let paragraphs: Vec<_> = format("Line one.\nLine two.\n\nSecond paragraph.").collect();

        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].lines(), &["Line one.", "Line two."]);
        assert_eq!(paragraphs[1].lines(), &["Second paragraph."]);
        assert_eq!(paragraphs[0].to_string(), "Line one.\nLine two.");
    }

    #[test]
    fn test_lines_are_trimmed() {
        let paragraph = format("  Fireball: burns  \n    more info").next().unwrap();
        assert_eq!(paragraph.lines(), &["Fireball: burns", "more info"]);
        assert_eq!(paragraph.join("<br>"), "Fireball: burns<br>more info");
    }

    #[test]
    fn test_restartable() {
        let paragraphs = format("a\n\nb\n\nc");
        let first: Vec<String> = paragraphs.clone().map(|p| p.to_string()).collect();
        let second: Vec<String> = paragraphs.map(|p| p.to_string()).collect();

        assert_eq!(first, vec!["a", "b", "c"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_content_is_one_empty_paragraph() {
        let paragraphs: Vec<_> = format("").collect();
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].lines(), &[""]);
    }

    #[test]
    fn test_extra_blank_lines_stay_inside_a_paragraph() {
        let paragraphs: Vec<_> = format("a\n\n\nb").collect();
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[1].lines(), &["", "b"]);
    }
}
