//! Heading-delimited markdown section parsing.
//!
//! Splits a markdown document into flat sections: every ATX heading (`#` to
//! `######`) starts a new section regardless of its level, and headings inside
//! fenced code blocks are treated as plain content.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// ATX heading, matched against a trimmed line.
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("heading pattern is valid"));

/// Characters dropped from a title when building its slug. Word characters
/// are ASCII only, so accented letters are dropped too.
static SLUG_STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").expect("slug pattern is valid"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// One heading-delimited unit of documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocSection {
    /// File prefix plus title slug, e.g. `packages_fusion-kit-core_installation`
    pub id: String,
    /// Heading text, trimmed
    pub title: String,
    /// Everything between this heading and the next one, trimmed
    pub content: String,
    /// Path relative to the documentation root
    pub file_path: String,
    /// Heading depth (1-6)
    pub level: u8,
}

impl DocSection {
    /// Whether the content contains a triple-backtick fence anywhere.
    pub fn has_code_fence(&self) -> bool {
        self.content.contains("```")
    }

    /// First line of the content, or an empty string.
    pub fn first_line(&self) -> &str {
        self.content.lines().next().unwrap_or("")
    }
}

/// Returns true when a trimmed line opens or closes a fenced code block.
pub(crate) fn is_fence(line: &str) -> bool {
    line.trim().starts_with("```")
}

/// Parses a heading line into `(level, title)`.
///
/// The caller is responsible for skipping lines inside fenced blocks.
pub fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let caps = HEADING.captures(line.trim())?;
    let hashes = caps.get(1)?.as_str();
    let title = caps.get(2)?.as_str().trim();
    // 1..=6 by construction of the pattern
    let level = u8::try_from(hashes.len()).ok()?;
    Some((level, title))
}

/// Builds the deterministic section identifier for a title in a file.
pub fn section_id(title: &str, file_path: &str) -> String {
    let prefix = file_path.replace(['/', '\\'], "_");
    let prefix = prefix.strip_suffix(".md").unwrap_or(&prefix);
    format!("{}_{}", prefix, slugify(title))
}

/// Lowercases, drops punctuation and joins whitespace runs with `-`.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = SLUG_STRIP.replace_all(&lowered, "");
    WHITESPACE_RUN.replace_all(&stripped, "-").into_owned()
}

/// Section under construction.
struct OpenSection<'a> {
    title: &'a str,
    level: u8,
    lines: Vec<&'a str>,
}

impl OpenSection<'_> {
    fn finish(self, file_path: &str) -> DocSection {
        DocSection {
            id: section_id(self.title, file_path),
            title: self.title.to_string(),
            content: self.lines.join("\n").trim().to_string(),
            file_path: file_path.to_string(),
            level: self.level,
        }
    }
}

/// Splits markdown text into sections in document order.
///
/// Text before the first heading is discarded. An unterminated code fence
/// simply runs to the end of the document. A leading byte order mark is
/// ignored.
pub fn extract_sections(markdown: &str, file_path: &str) -> Vec<DocSection> {
    let markdown = markdown.strip_prefix('\u{FEFF}').unwrap_or(markdown);
    let mut sections = Vec::new();
    let mut current: Option<OpenSection<'_>> = None;
    let mut in_code_block = false;

    for line in markdown.split('\n') {
        if is_fence(line) {
            in_code_block = !in_code_block;
            if let Some(open) = current.as_mut() {
                open.lines.push(line);
            }
            continue;
        }

        let heading = if in_code_block {
            None
        } else {
            parse_heading(line)
        };

        match heading {
            Some((level, title)) => {
                if let Some(open) = current.take() {
                    sections.push(open.finish(file_path));
                }
                current = Some(OpenSection {
                    title,
                    level,
                    lines: Vec::new(),
                });
            }
            None => {
                if let Some(open) = current.as_mut() {
                    open.lines.push(line);
                }
            }
        }
    }

    if let Some(open) = current {
        sections.push(open.finish(file_path));
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use rstest::rstest;

    #[rstest]
    #[case("# Title", 1, "Title")]
    #[case("###### Deep", 6, "Deep")]
    #[case("##   Spaced out  ", 2, "Spaced out")]
    #[case("   ## Indented", 2, "Indented")]
    fn test_parse_heading(#[case] line: &str, #[case] level: u8, #[case] title: &str) {
        let_assert!(Some((parsed_level, parsed_title)) = parse_heading(line));
        check!(parsed_level == level);
        check!(parsed_title == title);
    }

    #[rstest]
    #[case("####### Too deep")]
    #[case("#NoSpace")]
    #[case("#")]
    #[case("plain text")]
    #[case("")]
    fn test_parse_heading_rejects(#[case] line: &str) {
        check!(parse_heading(line).is_none());
    }

    #[rstest]
    #[case("What is FusionKit?", "overview.md", "overview_what-is-fusionkit")]
    #[case("Key  Benefits", "docs/intro.md", "docs_intro_key-benefits")]
    #[case("API (v2)", "packages\\core.md", "packages_core_api-v2")]
    #[case("Install", "notes.markdown", "notes.markdown_install")]
    #[case("Café Setup", "guide.md", "guide_caf-setup")]
    #[case("Überblick", "guide.md", "guide_berblick")]
    fn test_section_id(#[case] title: &str, #[case] path: &str, #[case] expected: &str) {
        check!(section_id(title, path) == expected);
    }

    #[test]
    fn test_extract_basic_sections() {
        let md = "# What is FusionKit?\nFusionKit is great.\n## Key Benefits\n- Fast\n- Simple";
        let sections = extract_sections(md, "overview.md");

        check!(sections.len() == 2);
        check!(sections[0].title == "What is FusionKit?");
        check!(sections[0].content == "FusionKit is great.");
        check!(sections[0].level == 1);
        check!(sections[1].title == "Key Benefits");
        check!(sections[1].content == "- Fast\n- Simple");
        check!(sections[1].level == 2);
        check!(sections[1].file_path == "overview.md");
    }

    #[test]
    fn test_leading_byte_order_mark_is_ignored() {
        let md = "\u{FEFF}# What is FusionKit?\nFusionKit is great.\n## Key Benefits\n- Fast";
        let sections = extract_sections(md, "overview.md");

        check!(sections.len() == 2);
        check!(sections[0].title == "What is FusionKit?");
        check!(sections[0].content == "FusionKit is great.");
        check!(sections[0].id == "overview_what-is-fusionkit");
    }

    #[test]
    fn test_preamble_is_discarded() {
        let md = "stray text\nmore\n# First\nbody";
        let sections = extract_sections(md, "a.md");
        check!(sections.len() == 1);
        check!(sections[0].content == "body");
    }

    #[test]
    fn test_headings_inside_fences_are_content() {
        let md = "# Usage\n```bash\n# not a heading\nfk create mfe\n```\nafter";
        let sections = extract_sections(md, "usage.md");

        check!(sections.len() == 1);
        check!(sections[0].content == "```bash\n# not a heading\nfk create mfe\n```\nafter");
    }

    #[test]
    fn test_unterminated_fence_runs_to_end() {
        let md = "# Open\n```\n# still code\nlast line";
        let sections = extract_sections(md, "open.md");

        check!(sections.len() == 1);
        check!(sections[0].content == "```\n# still code\nlast line");
    }

    #[test]
    fn test_empty_sections_are_kept() {
        let md = "# One\n## Two\n### Three\ncontent";
        let sections = extract_sections(md, "x.md");

        check!(sections.len() == 3);
        check!(sections[0].content.is_empty());
        check!(sections[1].content.is_empty());
        check!(sections[2].content == "content");
    }

    #[test]
    fn test_no_heading_lines_leak_into_content() {
        let md = "# A\ntext\n## B\n```\n## fenced\n```\n### C\nmore\n#### D";
        for section in extract_sections(md, "x.md") {
            let mut fenced = false;
            for line in section.content.lines() {
                if is_fence(line) {
                    fenced = !fenced;
                    continue;
                }
                check!(fenced || parse_heading(line).is_none(), "leaked heading: {}", line);
            }
        }
    }

    #[test]
    fn test_parsing_is_deterministic() {
        let md = "# Alpha\none\n## Beta\n```\ncode\n```\n# Gamma";
        check!(extract_sections(md, "p.md") == extract_sections(md, "p.md"));
    }

    #[test]
    fn test_reconstruction_keeps_every_line() {
        let md = "# A\nline 1\nline 2\n## B\n```\n# inner\n```\n# C\ntail";
        let sections = extract_sections(md, "r.md");

        let rebuilt: Vec<String> = sections
            .iter()
            .flat_map(|s| {
                std::iter::once(s.title.clone())
                    .chain(s.content.lines().map(str::to_string))
                    .collect::<Vec<_>>()
            })
            .collect();

        let expected: Vec<String> = md
            .lines()
            .map(|line| match parse_heading(line) {
                Some((_, title)) if line != "# inner" => title.to_string(),
                _ => line.to_string(),
            })
            .collect();

        check!(rebuilt == expected);
    }

    #[test]
    fn test_first_line_and_fence_helpers() {
        let section = DocSection {
            id: "x".into(),
            title: "X".into(),
            content: "first\n```\ncode\n```".into(),
            file_path: "x.md".into(),
            level: 1,
        };
        check!(section.first_line() == "first");
        check!(section.has_code_fence());
    }
}
