//! Metadata header extraction.
//!
//! A header is a run of `key: value` lines at the top of the file, usually
//! fenced by `---` lines. Extraction is lenient: a missing key becomes an
//! empty value and nothing here can fail.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// The two fields the index cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillHeader {
    pub name: String,
    pub description: String,
}

/// Read `name` and `description` from a metadata file's contents.
///
/// When the file opens with a `---` fence only the fenced block is searched;
/// otherwise every line is. The first line starting with `key:` wins, and the
/// rest of that line, trimmed, is the value. Values are taken verbatim.
pub fn parse_header(content: &str) -> SkillHeader {
    static NAME_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?m)^name:(.*)$").expect("valid regex"));
    static DESCRIPTION_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?m)^description:(.*)$").expect("valid regex"));

    let block = header_block(content);

    let name = first_value(&NAME_RE, block);
    let description = first_value(&DESCRIPTION_RE, block);

    if name.is_none() {
        debug!("metadata header has no name line");
    }
    if description.is_none() {
        debug!("metadata header has no description line");
    }

    SkillHeader {
        name: name.unwrap_or_default(),
        description: description.unwrap_or_default(),
    }
}

fn first_value(re: &Regex, block: &str) -> Option<String> {
    re.captures(block).map(|c| c[1].trim().to_string())
}

/// Slice out the fenced frontmatter, or the whole text when unfenced.
/// An unterminated fence runs to the end of the file.
fn header_block(content: &str) -> &str {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.split_inclusive('\n');

    match lines.next() {
        Some(first) if first.trim_end() == "---" => {
            let start = first.len();
            let mut end = start;
            for line in lines {
                if line.trim_end() == "---" {
                    return &content[start..end];
                }
                end += line.len();
            }
            &content[start..]
        }
        _ => content,
    }
}
