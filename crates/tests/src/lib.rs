//! # Integration Tests
//!
//! Cross-crate and end-to-end tests.
//!
//! Covers:
//! - Contract snapshots (wire shapes of events and config)
//! - Record -> description examples through the public API
//! - Config file -> describer -> listener flows

#[cfg(test)]
mod contract_tests {
    use contracts::{ConfigVersion, DescriberConfig, Record, UndoDescriptionEvent};

    #[test]
    fn test_config_version_is_closed() {
        let config: DescriberConfig = serde_json::from_str(r#"{"version": "V1"}"#).unwrap();
        assert_eq!(config.version, ConfigVersion::V1);
        assert!(serde_json::from_str::<DescriberConfig>(r#"{"version": "V2"}"#).is_err());
    }

    #[test]
    fn test_event_wire_shape() {
        let mut event =
            UndoDescriptionEvent::new("content", Record::new().with("type", "vimeo"));
        event.set_description(Some("123".into()));

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "table": "content",
                "data": { "type": "vimeo" },
                "description": "123"
            })
        );
    }

    #[test]
    fn test_config_json_shape() {
        let json = serde_json::to_value(DescriberConfig::default()).unwrap();
        assert_eq!(json["version"], "V1");
        assert_eq!(json["content"]["table"], "content");
        assert_eq!(json["truncation"]["text_max_chars"], 100);
        assert_eq!(json["truncation"]["indicator"], " …");
    }
}

#[cfg(test)]
mod describe_tests {
    use contracts::{ContentType, DescribeError, Record};
    use describer::ContentDescriber;

    fn describe(record: Record) -> Result<Option<String>, DescribeError> {
        ContentDescriber::new().describe("content", &record)
    }

    #[test]
    fn test_toplink_falls_back_to_id() {
        let record = Record::new()
            .with("type", "toplink")
            .with("linkTitle", "")
            .with("id", "42");
        assert_eq!(describe(record).unwrap().as_deref(), Some("ID 42"));
    }

    #[test]
    fn test_hyperlink_url() {
        let record = Record::new()
            .with("type", "hyperlink")
            .with("url", "https://example.com");
        assert_eq!(
            describe(record).unwrap().as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn test_list_items_joined() {
        let record = Record::new().with("type", "list").with(
            "listitems",
            r#"a:3:{i:0;s:1:"a";i:1;s:1:"b";i:2;s:1:"c";}"#,
        );
        assert_eq!(describe(record).unwrap().as_deref(), Some("a, b, c"));
    }

    #[test]
    fn test_table_uses_first_row() {
        let record = Record::new().with("type", "table").with(
            "tableitems",
            r#"a:2:{i:0;a:2:{i:0;s:1:"x";i:1;s:1:"y";}i:1;a:2:{i:0;s:1:"p";i:1;s:1:"q";}}"#,
        );
        assert_eq!(describe(record).unwrap().as_deref(), Some("x, y"));
    }

    #[test]
    fn test_headline_value() {
        let record = Record::new().with("type", "headline").with(
            "headline",
            r#"a:2:{s:4:"unit";s:2:"h2";s:5:"value";s:11:"Hello World";}"#,
        );
        assert_eq!(describe(record).unwrap().as_deref(), Some("Hello World"));
    }

    #[test]
    fn test_every_describable_type_yields_text() {
        let serialized_list = r#"a:1:{i:0;s:1:"v";}"#;
        let serialized_table = r#"a:1:{i:0;a:1:{i:0;s:1:"v";}}"#;
        let serialized_headline = r#"a:1:{s:5:"value";s:1:"v";}"#;

        for content_type in ContentType::describable() {
            let record = Record::new()
                .with("type", content_type.as_str())
                .with("id", 7)
                .with("headline", serialized_headline)
                .with("text", "v")
                .with("html", "v")
                .with("listitems", serialized_list)
                .with("tableitems", serialized_table)
                .with("code", "v")
                .with("markdown", "v")
                .with("url", "v")
                .with("youtube", "v")
                .with("vimeo", "v");

            let description = describe(record).unwrap();
            assert!(description.is_some(), "no description for {content_type}");
        }
    }

    #[test]
    fn test_disabled_and_unknown_types() {
        for key in ["image", "gallery", "unknownType"] {
            let record = Record::new().with("type", key).with("singleSRC", "uuid");
            assert_eq!(describe(record).unwrap(), None, "type {key}");
        }
    }

    #[test]
    fn test_text_cut_on_word_boundary() {
        let original = "lorem ipsum dolor sit amet ".repeat(10);
        let record = Record::new().with("type", "text").with("text", original.as_str());
        let description = describe(record).unwrap().unwrap();

        let body = description.strip_suffix(" …").unwrap();
        assert!(body.chars().count() <= 100);
        assert!(original.starts_with(body));
        assert_eq!(original.as_bytes()[body.len()], b' ');
    }

    #[test]
    fn test_html_escaped_before_cut() {
        let html = format!("<div class=\"x\">{}</div>", "y".repeat(120));
        let record = Record::new().with("type", "html").with("html", html.as_str());
        let description = describe(record).unwrap().unwrap();

        assert!(description.starts_with("&lt;div class=&quot;x&quot;&gt;"));
        assert!(description.ends_with(" …"));
        assert_eq!(description.chars().count(), 102);
    }

    #[test]
    fn test_malformed_serialized_field_is_an_error() {
        let record = Record::new().with("type", "list").with("listitems", "a:1:{");
        assert!(matches!(
            describe(record).unwrap_err(),
            DescribeError::Decode { .. }
        ));
    }

    #[test]
    fn test_other_table_returns_none() {
        let record = Record::new().with("type", "hyperlink").with("url", "x");
        let describer = ContentDescriber::new();
        assert_eq!(describer.describe("page", &record).unwrap(), None);
    }
}

#[cfg(test)]
mod e2e_tests {
    use std::io::Write;

    use config_loader::ConfigLoader;
    use contracts::{Record, UndoDescriptionEvent, UndoDescriptionListener};
    use describer::{ContentDescriber, ContentUndoDescriptionListener};
    use observability::{DescribeOutcome, OutcomeAggregator};

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    /// Config file -> describer -> listener -> events
    #[test]
    fn test_e2e_config_to_events() {
        let file = write_config(
            r#"
[content]
table = "tl_content"

[truncation]
html_max_chars = 10
indicator = "..."
"#,
        );
        let config = ConfigLoader::load_from_path(file.path()).unwrap();
        let listener = ContentUndoDescriptionListener::new(ContentDescriber::from_config(&config));

        let mut events = vec![
            UndoDescriptionEvent::new(
                "tl_content",
                Record::new().with("type", "html").with("html", "<p>Hello world</p>"),
            ),
            UndoDescriptionEvent::new(
                "tl_content",
                Record::new().with("type", "accordionStop").with("id", 3),
            ),
            UndoDescriptionEvent::new(
                "content",
                Record::new().with("type", "vimeo").with("vimeo", "1"),
            ),
            UndoDescriptionEvent::new("tl_content", Record::new().with("type", "image")),
        ];

        let mut aggregator = OutcomeAggregator::new();
        for event in &mut events {
            let outcome = listener.handle(event).unwrap();
            aggregator.update(
                event.data().type_key().unwrap_or("unknown"),
                outcome,
                event.description(),
            );
        }

        assert_eq!(events[0].description(), Some("&lt;p&gt;H..."));
        assert_eq!(events[1].description(), Some("ID 3"));
        assert_eq!(events[2].description(), None);
        assert_eq!(events[3].description(), None);

        let summary = aggregator.summary();
        assert_eq!(summary.described, 2);
        assert_eq!(summary.unsupported_table, 1);
        assert_eq!(summary.no_formatter, 1);
        assert_eq!(summary.failed, 0);
    }

    /// Several listeners share one event; only the content one acts
    #[test]
    fn test_e2e_listener_chain() {
        struct Suffix;

        impl UndoDescriptionListener for Suffix {
            fn on_undo_description(
                &self,
                event: &mut UndoDescriptionEvent,
            ) -> Result<(), contracts::DescribeError> {
                let description = event.description().map(|d| format!("{d} (restored)"));
                event.set_description(description);
                Ok(())
            }
        }

        let listeners: Vec<Box<dyn UndoDescriptionListener>> = vec![
            Box::new(ContentUndoDescriptionListener::new(ContentDescriber::new())),
            Box::new(Suffix),
        ];

        let mut event = UndoDescriptionEvent::new(
            "content",
            Record::new().with("type", "markdown").with("markdown", "# Title"),
        );
        for listener in &listeners {
            listener.on_undo_description(&mut event).unwrap();
        }

        assert_eq!(event.description(), Some("# Title (restored)"));
    }

    #[test]
    fn test_e2e_failure_is_reported() {
        let listener = ContentUndoDescriptionListener::new(ContentDescriber::new());
        let mut event = UndoDescriptionEvent::new(
            "content",
            Record::new().with("type", "table").with("tableitems", "s:3:\"abc\";"),
        );

        let err = listener.handle(&mut event).unwrap_err();
        assert!(err.to_string().contains("tableitems"));
        assert_eq!(event.description(), None);

        let mut aggregator = OutcomeAggregator::new();
        aggregator.update("table", DescribeOutcome::Failed, None);
        assert_eq!(aggregator.summary().failed, 1);
    }

    #[test]
    fn test_e2e_invalid_config_file() {
        let file = write_config("[truncation]\ntext_max_chars = 0\n");
        let err = ConfigLoader::load_from_path(file.path()).unwrap_err();
        assert!(err.to_string().contains("truncation.text_max_chars"));
    }
}
