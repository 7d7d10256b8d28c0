//! Skill extraction from the shared skills text blob.
//!
//! The blob has no structure beyond convention: each entry starts on an
//! unindented line of the form `<Name>: ...` and continues over the lines
//! that follow until the next such line. Continuation lines that contain a
//! colon must be indented with a leading space, or they are taken as the
//! start of a new entry. A leading tab does not count as indentation.

use codex_content::ItemDetail;
use serde::{Deserialize, Serialize};

/// Marks a continuation line as indented.
const INDENT: char = ' ';

/// One entry pulled out of the skills blob.
///
/// `name` and `content` are empty when the target was not found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub id: String,
    pub name: String,
    pub content: String,
}

impl SkillEntry {
    fn missing(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: String::new(),
            content: String::new(),
        }
    }

    /// Whether a section matched the target.
    pub fn is_found(&self) -> bool {
        !self.name.is_empty() || !self.content.is_empty()
    }
}

impl From<SkillEntry> for ItemDetail {
    fn from(entry: SkillEntry) -> Self {
        ItemDetail::new(entry.id, entry.content).with_name(entry.name)
    }
}

/// Extract the entry for `target_id` from the skills blob.
///
/// The section starts at the first line that contains both a colon and
/// `target_id` (case-insensitive substring). Its name is the text before the
/// first colon on that line. The start line and every following line are
/// collected until a line that contains a colon, is not blank and is not
/// indented; that line belongs to the next entry and is left out. The
/// section is never restarted by a later line that also mentions the target.
///
/// Matching is by substring, so a target that occurs inside another entry's
/// line (including its description) selects that entry if it comes first.
pub fn extract(raw_text: &str, target_id: &str) -> SkillEntry {
    let needle = target_id.to_lowercase();
    let mut lines = raw_text.split('\n');

    let Some(start) = lines
        .by_ref()
        .find(|line| line.contains(':') && line.to_lowercase().contains(&needle))
    else {
        tracing::debug!(target_id, "skill not present in blob");
        return SkillEntry::missing(target_id);
    };

    let name = start.split_once(':').map_or(start, |(name, _)| name).trim();

    let mut content = String::new();
    for line in std::iter::once(start).chain(lines.take_while(|line| !starts_next_entry(line))) {
        content.push_str(line);
        content.push('\n');
    }

    SkillEntry {
        id: target_id.to_string(),
        name: name.to_string(),
        content: content.trim().to_string(),
    }
}

fn starts_next_entry(line: &str) -> bool {
    line.contains(':') && !line.trim().is_empty() && !line.starts_with(INDENT)
}
