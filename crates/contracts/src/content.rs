//! Content element model
//!
//! `ContentType` is the closed set of known `type` discriminants;
//! `ContentElement` narrows a `Record` to the fields one type needs.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::{DescribeError, PhpValue, Record};

/// Known content element types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Headline,
    Text,
    Html,
    List,
    Table,
    AccordionStart,
    AccordionStop,
    AccordionSingle,
    SliderStart,
    SliderStop,
    Code,
    Markdown,
    Hyperlink,
    Toplink,
    Image,
    Gallery,
    Youtube,
    Vimeo,
}

impl ContentType {
    pub const ALL: [ContentType; 18] = [
        Self::Headline,
        Self::Text,
        Self::Html,
        Self::List,
        Self::Table,
        Self::AccordionStart,
        Self::AccordionStop,
        Self::AccordionSingle,
        Self::SliderStart,
        Self::SliderStop,
        Self::Code,
        Self::Markdown,
        Self::Hyperlink,
        Self::Toplink,
        Self::Image,
        Self::Gallery,
        Self::Youtube,
        Self::Vimeo,
    ];

    /// Canonical `type` key
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Headline => "headline",
            Self::Text => "text",
            Self::Html => "html",
            Self::List => "list",
            Self::Table => "table",
            Self::AccordionStart => "accordionStart",
            Self::AccordionStop => "accordionStop",
            Self::AccordionSingle => "accordionSingle",
            Self::SliderStart => "sliderStart",
            Self::SliderStop => "sliderStop",
            Self::Code => "code",
            Self::Markdown => "markdown",
            Self::Hyperlink => "hyperlink",
            Self::Toplink => "toplink",
            Self::Image => "image",
            Self::Gallery => "gallery",
            Self::Youtube => "youtube",
            Self::Vimeo => "vimeo",
        }
    }

    /// Resolve a `type` key, ignoring ASCII case
    pub fn from_type_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(key))
    }

    /// Whether a description can be derived for this type.
    ///
    /// Image and gallery descriptions need a file lookup by UUID and are
    /// not provided.
    pub fn is_describable(&self) -> bool {
        !matches!(self, Self::Image | Self::Gallery)
    }

    /// Types a description can be derived for
    pub fn describable() -> impl Iterator<Item = ContentType> {
        Self::ALL.into_iter().filter(ContentType::is_describable)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_type_key(s).ok_or_else(|| format!("unknown content type: {s}"))
    }
}

/// Field holding a serialized structure
#[derive(Debug, Clone, PartialEq)]
pub enum Serialized {
    /// Still in its stored text encoding
    Encoded(String),
    /// Already structured by the caller
    Decoded(PhpValue),
}

/// Content element narrowed to the fields its description reads
///
/// Optional fields are the guarded ones: empty values are stored as `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentElement {
    Headline { headline: Serialized },
    Text { text: String },
    Html { html: String },
    List { items: Serialized },
    Table { rows: Serialized },
    AccordionStart { title: Option<String>, id: Option<String> },
    AccordionStop { id: String },
    AccordionSingle { title: Option<String>, text: Option<String> },
    SliderStart { headline: Option<String>, id: Option<String> },
    SliderStop { headline: Option<String>, id: Option<String> },
    Code { code: String },
    Markdown { markdown: String },
    Hyperlink { url: String },
    Toplink { link_title: Option<String>, id: Option<String> },
    Youtube { youtube: String },
    Vimeo { vimeo: String },
}

impl ContentElement {
    /// Narrow a record to its content element.
    ///
    /// Returns `Ok(None)` when the type is unknown or not describable.
    ///
    /// # Errors
    /// - `MissingType` when the record carries no string `type`
    /// - `MissingField` / `InvalidField` when a field the type always reads
    ///   is absent or not a scalar
    pub fn from_record(record: &Record) -> Result<Option<Self>, DescribeError> {
        let key = record.type_key().ok_or(DescribeError::MissingType)?;
        let Some(content_type) = ContentType::from_type_key(key) else {
            return Ok(None);
        };

        let required = |field: &str| required_text(record, content_type, field);
        let filled = |field: &str| record.filled_text(field);
        let optional = |field: &str| record.text(field);

        let element = match content_type {
            ContentType::Headline => Self::Headline {
                headline: serialized(record, content_type, "headline")?,
            },
            ContentType::Text => Self::Text {
                text: required("text")?,
            },
            ContentType::Html => Self::Html {
                html: required("html")?,
            },
            ContentType::List => Self::List {
                items: serialized(record, content_type, "listitems")?,
            },
            ContentType::Table => Self::Table {
                rows: serialized(record, content_type, "tableitems")?,
            },
            ContentType::AccordionStart => Self::AccordionStart {
                title: filled("mooHeadline"),
                id: optional("id"),
            },
            ContentType::AccordionStop => Self::AccordionStop {
                id: required("id")?,
            },
            ContentType::AccordionSingle => Self::AccordionSingle {
                title: filled("mooHeadline"),
                text: optional("text"),
            },
            ContentType::SliderStart => Self::SliderStart {
                headline: filled("headline"),
                id: optional("id"),
            },
            ContentType::SliderStop => Self::SliderStop {
                headline: filled("headline"),
                id: optional("id"),
            },
            ContentType::Code => Self::Code {
                code: required("code")?,
            },
            ContentType::Markdown => Self::Markdown {
                markdown: required("markdown")?,
            },
            ContentType::Hyperlink => Self::Hyperlink {
                url: required("url")?,
            },
            ContentType::Toplink => Self::Toplink {
                link_title: filled("linkTitle"),
                id: optional("id"),
            },
            ContentType::Youtube => Self::Youtube {
                youtube: required("youtube")?,
            },
            ContentType::Vimeo => Self::Vimeo {
                vimeo: required("vimeo")?,
            },
            ContentType::Image | ContentType::Gallery => return Ok(None),
        };

        Ok(Some(element))
    }

    pub fn content_type(&self) -> ContentType {
        match self {
            Self::Headline { .. } => ContentType::Headline,
            Self::Text { .. } => ContentType::Text,
            Self::Html { .. } => ContentType::Html,
            Self::List { .. } => ContentType::List,
            Self::Table { .. } => ContentType::Table,
            Self::AccordionStart { .. } => ContentType::AccordionStart,
            Self::AccordionStop { .. } => ContentType::AccordionStop,
            Self::AccordionSingle { .. } => ContentType::AccordionSingle,
            Self::SliderStart { .. } => ContentType::SliderStart,
            Self::SliderStop { .. } => ContentType::SliderStop,
            Self::Code { .. } => ContentType::Code,
            Self::Markdown { .. } => ContentType::Markdown,
            Self::Hyperlink { .. } => ContentType::Hyperlink,
            Self::Toplink { .. } => ContentType::Toplink,
            Self::Youtube { .. } => ContentType::Youtube,
            Self::Vimeo { .. } => ContentType::Vimeo,
        }
    }
}

fn required_text(
    record: &Record,
    content_type: ContentType,
    field: &str,
) -> Result<String, DescribeError> {
    match record.get(field) {
        None => Err(DescribeError::missing_field(content_type.as_str(), field)),
        Some(Value::Array(_) | Value::Object(_)) => Err(DescribeError::invalid_field(
            content_type.as_str(),
            field,
            "expected a scalar value",
        )),
        Some(_) => record
            .text(field)
            .ok_or_else(|| DescribeError::missing_field(content_type.as_str(), field)),
    }
}

fn serialized(
    record: &Record,
    content_type: ContentType,
    field: &str,
) -> Result<Serialized, DescribeError> {
    match record.get(field) {
        None => Err(DescribeError::missing_field(content_type.as_str(), field)),
        Some(Value::String(s)) => Ok(Serialized::Encoded(s.clone())),
        Some(value @ (Value::Array(_) | Value::Object(_))) => {
            Ok(Serialized::Decoded(PhpValue::from(value)))
        }
        Some(other) => Err(DescribeError::invalid_field(
            content_type.as_str(),
            field,
            format!("expected serialized text or a structure, got {other}"),
        )),
    }
}
