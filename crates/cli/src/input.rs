//! Undo event input
//!
//! Accepts a JSON array or JSON Lines. Entries are full events
//! (`{"table": .., "data": {..}}`) or, with a fixed table, bare records.

use std::io::Read;
use std::path::Path;

use contracts::{Record, UndoDescriptionEvent};
use serde_json::Value;

use crate::error::{CliError, Result};

/// Read the whole input; `-` means stdin
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::input_read("<stdin>", e))?;
        Ok(content)
    } else {
        std::fs::read_to_string(path).map_err(|e| CliError::input_read(path.display().to_string(), e))
    }
}

/// Parse input entries into events
///
/// Entry numbers in errors are 1-based. Syntax errors in the array form
/// carry the line and column of the whole input.
pub fn parse_events(content: &str, table: Option<&str>) -> Result<Vec<UndoDescriptionEvent>> {
    let trimmed = content.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let entries: Vec<Value> = if trimmed.starts_with('[') {
        serde_json::from_str(content).map_err(|e| CliError::input_syntax(&e))?
    } else {
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                serde_json::from_str(line).map_err(|e| CliError::input_parse(idx + 1, e.to_string()))
            })
            .collect::<Result<_>>()?
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| to_event(entry, table).map_err(|e| CliError::input_parse(idx + 1, e)))
        .collect()
}

fn to_event(entry: Value, table: Option<&str>) -> std::result::Result<UndoDescriptionEvent, String> {
    match table {
        Some(table) => {
            let record: Record = serde_json::from_value(entry)
                .map_err(|e| format!("expected a record object: {e}"))?;
            Ok(UndoDescriptionEvent::new(table, record))
        }
        None => serde_json::from_value(entry).map_err(|e| format!("expected an undo event: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_json_array() {
        let content = r#"[
            {"table": "content", "data": {"type": "toplink", "id": 42}},
            {"table": "page", "data": {"title": "Home"}}
        ]"#;
        let events = parse_events(content, None).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].table(), "content");
        assert_eq!(events[1].data().text("title").as_deref(), Some("Home"));
    }

    #[test]
    fn test_parse_json_lines_skips_blank_lines() {
        let content = "{\"table\":\"content\",\"data\":{\"type\":\"code\",\"code\":\"x\"}}\n\n\
                       {\"table\":\"content\",\"data\":{\"type\":\"vimeo\",\"vimeo\":\"1\"}}\n";
        let events = parse_events(content, None).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].data().type_key(), Some("vimeo"));
    }

    #[test]
    fn test_bare_records_with_table() {
        let content = r#"[{"type": "hyperlink", "url": "https://x.org"}]"#;
        let events = parse_events(content, Some("tl_content")).unwrap();
        assert_eq!(events[0].table(), "tl_content");
        assert_eq!(events[0].data().type_key(), Some("hyperlink"));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_events("  \n", None).unwrap().is_empty());
    }

    #[test]
    fn test_bad_line_reports_entry() {
        let content = "{\"table\":\"content\",\"data\":{}}\nnot json\n";
        match parse_events(content, None).unwrap_err() {
            CliError::InputParse { entry, .. } => assert_eq!(entry, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_array_reports_line() {
        let content = "[\n  {\"table\": \"content\", \"data\": {}},\n  {\"table\": \"content\" \"data\": {}}\n]";
        match parse_events(content, None).unwrap_err() {
            CliError::InputSyntax { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_array_entry_reports_position() {
        let content = r#"[{"table": "content", "data": {}}, {"data": {}}]"#;
        match parse_events(content, None).unwrap_err() {
            CliError::InputParse { entry, .. } => assert_eq!(entry, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_event_without_table_rejected() {
        let err = parse_events(r#"[{"data": {"type": "text"}}]"#, None).unwrap_err();
        assert!(err.to_string().contains("expected an undo event"), "got: {err}");
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{{\"table\":\"content\",\"data\":{{}}}}").unwrap();
        let content = read_input(file.path()).unwrap();
        assert_eq!(parse_events(&content, None).unwrap().len(), 1);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_input(Path::new("/nonexistent/events.json")).unwrap_err();
        assert!(matches!(err, CliError::InputRead { .. }));
    }
}
