//! Index table rendering.

use skillindex_shared::Artifact;

const HEADER_ROW: &str = "| Artifact | Description |";
const SEPARATOR_ROW: &str = "| --- | --- |";

/// Rendering switches.
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    /// Omit artifacts whose name and description are both empty.
    pub skip_empty_rows: bool,
}

/// Render artifacts, in the given order, as a two-column markdown table.
///
/// Each row is `| [name](relative_path) | description |`. Cell text is not
/// escaped. Lines are joined with `\n` and the result has no trailing
/// newline; an empty slice renders the header and separator only.
pub fn render_table(artifacts: &[Artifact], opts: &TableOptions) -> String {
    let mut lines = Vec::with_capacity(artifacts.len() + 2);
    lines.push(HEADER_ROW.to_string());
    lines.push(SEPARATOR_ROW.to_string());

    for artifact in artifacts {
        if opts.skip_empty_rows && artifact.is_blank() {
            continue;
        }
        lines.push(format!(
            "| [{}]({}) | {} |",
            artifact.name, artifact.relative_path, artifact.description
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(name: &str, description: &str, path: &str) -> Artifact {
        Artifact {
            name: name.into(),
            description: description.into(),
            relative_path: path.into(),
        }
    }

    #[test]
    fn rows_follow_input_order() {
        let artifacts = vec![
            artifact("Alpha", "First", "skills/alpha"),
            artifact("Beta", "Second", "skills/beta"),
        ];

        let table = render_table(&artifacts, &TableOptions::default());
        assert_eq!(
            table,
            "| Artifact | Description |\n\
             | --- | --- |\n\
             | [Alpha](skills/alpha) | First |\n\
             | [Beta](skills/beta) | Second |"
        );
    }

    #[test]
    fn empty_input_renders_header_only() {
        let table = render_table(&[], &TableOptions::default());
        assert_eq!(table, "| Artifact | Description |\n| --- | --- |");
    }

    #[test]
    fn blank_rows_are_kept_by_default() {
        let artifacts = vec![artifact("", "", "skills/draft")];
        let table = render_table(&artifacts, &TableOptions::default());
        assert!(table.ends_with("| [](skills/draft) |  |"));
    }

    #[test]
    fn blank_rows_can_be_skipped() {
        let artifacts = vec![
            artifact("", "", "skills/draft"),
            artifact("toon", "", "skills/toon"),
        ];
        let opts = TableOptions {
            skip_empty_rows: true,
        };
        let table = render_table(&artifacts, &opts);
        assert_eq!(table.lines().count(), 3);
        assert!(table.contains("[toon](skills/toon)"));
        assert!(!table.contains("skills/draft"));
    }
}
