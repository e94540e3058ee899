use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// HTML element names the component layer recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Table,
    THead,
    TBody,
    Tr,
    Td,
    Th,
    Button,
    Div,
    Span,
    Input,
    A,
}

/// Tags that bound a table cell hit.
pub const CELL_TAGS: [Tag; 2] = [Tag::Td, Tag::Th];

/// Tags that bound a button hit.
pub const BUTTON_TAGS: [Tag; 1] = [Tag::Button];

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tag::Table => "table",
            Tag::THead => "thead",
            Tag::TBody => "tbody",
            Tag::Tr => "tr",
            Tag::Td => "td",
            Tag::Th => "th",
            Tag::Button => "button",
            Tag::Div => "div",
            Tag::Span => "span",
            Tag::Input => "input",
            Tag::A => "a",
        };
        write!(f, "{}", name)
    }
}

/// Error returned when a tag name is not part of the recognized vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tag name: {0:?}")]
pub struct ParseTagError(pub String);

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Hosts report tag names in either case; DOM `tagName` is uppercase.
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Tag::Table),
            "thead" => Ok(Tag::THead),
            "tbody" => Ok(Tag::TBody),
            "tr" => Ok(Tag::Tr),
            "td" => Ok(Tag::Td),
            "th" => Ok(Tag::Th),
            "button" => Ok(Tag::Button),
            "div" => Ok(Tag::Div),
            "span" => Ok(Tag::Span),
            "input" => Ok(Tag::Input),
            "a" => Ok(Tag::A),
            _ => Err(ParseTagError(s.to_string())),
        }
    }
}
