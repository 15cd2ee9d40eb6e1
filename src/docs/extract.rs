//! Field extraction from section content: list items and fenced code blocks.

use super::section::is_fence;

/// Collects markdown bullet items (`- ` or `* `) with `**` emphasis removed.
///
/// Non-list lines are ignored; content without bullets yields an empty list.
pub fn extract_list_items(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            trimmed
                .strip_prefix("- ")
                .or_else(|| trimmed.strip_prefix("* "))
        })
        .map(|item| item.replace("**", "").trim().to_string())
        .collect()
}

/// Collects the bodies of fenced code blocks in order.
///
/// Fence lines (and any language tag on them) are not part of a body. A block
/// left open at the end of the content is still returned.
pub fn extract_code_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();
    let mut in_block = false;

    for line in content.lines() {
        if is_fence(line) {
            if in_block {
                blocks.push(buffer.join("\n"));
                buffer.clear();
            }
            in_block = !in_block;
        } else if in_block {
            buffer.push(line);
        }
    }

    if in_block {
        blocks.push(buffer.join("\n"));
    }

    blocks
}
