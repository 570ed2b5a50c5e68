//! Heading Segment Parser
//!
//! Splits README text into a flat, ordered list of heading segments. Only ATX
//! headings of level 1-5 are recognized; a line with six or more leading `#`
//! is ordinary content. Text before the first heading belongs to no segment.

use serde::Serialize;

/// Deepest heading level that opens a segment
pub const MAX_HEADING_LEVEL: usize = 5;

/// A heading and the body that follows it up to the next heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingSegment {
    /// Heading line without its `#` markers, trimmed
    pub text: String,
    /// Number of leading `#` (1-5)
    pub level: u8,
    /// Raw body lines joined with `\n`
    pub content: String,
}

/// Segments in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HeadingStore {
    segments: Vec<HeadingSegment>,
}

impl HeadingStore {
    pub fn segments(&self) -> &[HeadingSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Presence record returned by [`exists`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeadingPresence {
    pub exists: bool,
    pub text: Option<String>,
    pub level: Option<u8>,
    /// Segment body, trimmed
    pub content: Option<String>,
}

/// Level and text of a heading line, if it is one
fn heading_line(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    if (1..=MAX_HEADING_LEVEL).contains(&hashes) {
        Some((hashes as u8, line[hashes..].trim()))
    } else {
        None
    }
}

pub fn parse(text: &str) -> HeadingStore {
    let lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len().saturating_sub(1);

    let mut segments = Vec::new();
    let mut current: Option<HeadingSegment> = None;

    for (idx, line) in lines.iter().enumerate() {
        if let Some((level, heading)) = heading_line(line) {
            segments.extend(current.take());
            current = Some(HeadingSegment {
                text: heading.to_string(),
                level,
                content: String::new(),
            });
        } else if let Some(segment) = current.as_mut() {
            segment.content.push_str(line);
            if idx < last {
                segment.content.push('\n');
            }
        }
    }
    segments.extend(current);

    HeadingStore { segments }
}

/// First segment whose heading contains `substring` (case-insensitive, trimmed)
pub fn exists(store: &HeadingStore, substring: &str) -> HeadingPresence {
    let needle = substring.trim().to_lowercase();
    store
        .segments
        .iter()
        .find(|segment| segment.text.to_lowercase().contains(&needle))
        .map(|segment| HeadingPresence {
            exists: true,
            text: Some(segment.text.clone()),
            level: Some(segment.level),
            content: Some(segment.content.trim().to_string()),
        })
        .unwrap_or_default()
}

/// All segments whose heading contains `key` and whose body contains `value`
pub fn contains<'a>(store: &'a HeadingStore, key: &str, value: &str) -> Vec<&'a HeadingSegment> {
    let key = key.to_lowercase();
    let value = value.to_lowercase();
    store
        .segments
        .iter()
        .filter(|segment| {
            segment.text.to_lowercase().contains(&key)
                && segment.content.to_lowercase().contains(&value)
        })
        .collect()
}
