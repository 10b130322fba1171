//! ContentDescriber - type dispatch for undo descriptions

use std::borrow::Cow;

use codec::{HtmlSpecialChars, PhpUnserializer};
use contracts::{
    ContentElement, ContentType, DescribeError, DescriberConfig, HtmlEscaper, PhpValue, Record,
    Serialized, TruncationConfig, ValueDecoder,
};
use tracing::trace;

use crate::text::{truncate_chars, truncate_words};

/// Derives a short description for content records
///
/// Holds no mutable state; a shared reference can be used from any
/// number of threads.
#[derive(Debug, Clone)]
pub struct ContentDescriber<D = PhpUnserializer, E = HtmlSpecialChars> {
    table: String,
    truncation: TruncationConfig,
    decoder: D,
    escaper: E,
}

impl ContentDescriber {
    /// Describer with default configuration and collaborators
    pub fn new() -> Self {
        Self::from_config(&DescriberConfig::default())
    }

    pub fn from_config(config: &DescriberConfig) -> Self {
        Self::with_collaborators(config, PhpUnserializer, HtmlSpecialChars)
    }
}

impl Default for ContentDescriber {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: ValueDecoder, E: HtmlEscaper> ContentDescriber<D, E> {
    pub fn with_collaborators(config: &DescriberConfig, decoder: D, escaper: E) -> Self {
        Self {
            table: config.content.table.clone(),
            truncation: config.truncation.clone(),
            decoder,
            escaper,
        }
    }

    /// Table whose records are described
    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn supports(&self, table: &str) -> bool {
        table == self.table
    }

    /// Describe a record of `table`.
    ///
    /// Returns `Ok(None)` for other tables and for types without a
    /// description (unknown types, image, gallery).
    ///
    /// # Errors
    /// - `MissingType` / `MissingField` / `InvalidField` for records that
    ///   lack what their type reads
    /// - `Decode` for malformed serialized fields
    pub fn describe(&self, table: &str, data: &Record) -> Result<Option<String>, DescribeError> {
        if !self.supports(table) {
            trace!(table, supported = %self.table, "table not supported");
            return Ok(None);
        }

        match ContentElement::from_record(data)? {
            Some(element) => self.describe_element(&element).map(Some),
            None => {
                trace!(content_type = ?data.type_key(), "no description for content type");
                Ok(None)
            }
        }
    }

    /// Apply the formatting rule of one element
    pub fn describe_element(&self, element: &ContentElement) -> Result<String, DescribeError> {
        let content_type = element.content_type();
        let limits = &self.truncation;

        let description = match element {
            ContentElement::Headline { headline } => {
                let value = self.decode(content_type, "headline", headline)?;
                match value.get("value") {
                    Some(text) => text.to_string(),
                    None => {
                        return Err(DescribeError::invalid_field(
                            content_type.as_str(),
                            "headline",
                            "no 'value' entry",
                        ))
                    }
                }
            }
            ContentElement::Text { text } => {
                truncate_words(text, limits.text_max_chars, &limits.indicator)
            }
            ContentElement::Html { html } => truncate_chars(
                &self.escaper.escape(html),
                limits.html_max_chars,
                &limits.indicator,
            ),
            ContentElement::List { items } => {
                let value = self.decode(content_type, "listitems", items)?;
                join_values(content_type, "listitems", &value)?
            }
            ContentElement::Table { rows } => {
                let value = self.decode(content_type, "tableitems", rows)?;
                let first = value.get(0_i64).ok_or_else(|| {
                    DescribeError::invalid_field(content_type.as_str(), "tableitems", "no first row")
                })?;
                join_values(content_type, "tableitems", first)?
            }
            ContentElement::AccordionStart { title, id } => match title {
                Some(title) => title.clone(),
                None => id_label(content_type, id.as_deref())?,
            },
            ContentElement::AccordionStop { id } => format!("ID {id}"),
            ContentElement::AccordionSingle { title, text } => match (title, text) {
                (Some(title), _) => title.clone(),
                (None, Some(text)) => self.escaper.escape(text),
                (None, None) => {
                    return Err(DescribeError::missing_field(content_type.as_str(), "text"))
                }
            },
            ContentElement::SliderStart { headline, id }
            | ContentElement::SliderStop { headline, id } => match headline {
                Some(headline) => headline.clone(),
                None => id_label(content_type, id.as_deref())?,
            },
            ContentElement::Code { code } => self.escaper.escape(code),
            ContentElement::Markdown { markdown } => self.escaper.escape(markdown),
            ContentElement::Hyperlink { url } => url.clone(),
            ContentElement::Toplink { link_title, id } => match link_title {
                Some(title) => title.clone(),
                None => id_label(content_type, id.as_deref())?,
            },
            ContentElement::Youtube { youtube } => youtube.clone(),
            ContentElement::Vimeo { vimeo } => vimeo.clone(),
        };

        Ok(description)
    }

    fn decode<'a>(
        &self,
        content_type: ContentType,
        field: &str,
        value: &'a Serialized,
    ) -> Result<Cow<'a, PhpValue>, DescribeError> {
        match value {
            Serialized::Decoded(value) => Ok(Cow::Borrowed(value)),
            Serialized::Encoded(raw) => self
                .decoder
                .decode(raw)
                .map(Cow::Owned)
                .map_err(|e| DescribeError::decode(content_type.as_str(), field, e)),
        }
    }
}

fn id_label(content_type: ContentType, id: Option<&str>) -> Result<String, DescribeError> {
    id.map(|id| format!("ID {id}"))
        .ok_or_else(|| DescribeError::missing_field(content_type.as_str(), "id"))
}

fn join_values(
    content_type: ContentType,
    field: &str,
    value: &PhpValue,
) -> Result<String, DescribeError> {
    let values = value.values().ok_or_else(|| {
        DescribeError::invalid_field(
            content_type.as_str(),
            field,
            format!("expected an array, got {}", value.kind()),
        )
    })?;
    Ok(values.map(ToString::to_string).collect::<Vec<_>>().join(", "))
}
