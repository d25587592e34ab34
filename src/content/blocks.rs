//! Line-oriented block classification for blog post bodies
//!
//! Each source line becomes exactly one [`Block`], except fence delimiter
//! lines which produce none. Classification never looks at neighbouring
//! lines.

use serde::Serialize;

const HEADING2: &str = "## ";
const HEADING3: &str = "### ";
const LIST_ITEM: &str = "- ";
const FENCE: &str = "```";

/// A classified unit of post content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Block {
    Heading2(String),
    Heading3(String),
    ListItem(String),
    Blank,
    Paragraph(String),
}

/// Classify `content` line by line
///
/// Lines are split on `\n` only, so empty lines are kept. An empty input
/// yields no blocks.
///
/// Text between two fence lines is not treated as code: a `- ` line inside
/// a fenced block still becomes a list item.
pub fn render_blocks(content: &str) -> Vec<Block> {
    if content.is_empty() {
        return Vec::new();
    }

    content.split('\n').filter_map(classify_line).collect()
}

/// Classify a single line; `None` for fence delimiters
pub fn classify_line(line: &str) -> Option<Block> {
    if let Some(rest) = line.strip_prefix(HEADING2) {
        Some(Block::Heading2(rest.to_string()))
    } else if let Some(rest) = line.strip_prefix(HEADING3) {
        Some(Block::Heading3(rest.to_string()))
    } else if let Some(rest) = line.strip_prefix(LIST_ITEM) {
        Some(Block::ListItem(rest.to_string()))
    } else if line.starts_with(FENCE) {
        None
    } else if line.trim().is_empty() {
        Some(Block::Blank)
    } else {
        Some(Block::Paragraph(line.to_string()))
    }
}
