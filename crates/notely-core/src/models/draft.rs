//! Validated note input shared by create and edit flows

use crate::error::{Error, Result};

/// Longest accepted title, in characters
pub const MAX_TITLE_LEN: usize = 128;

/// Longest accepted comma-separated tag input, in characters
pub const MAX_TAG_INPUT_LEN: usize = 64;

/// Editable note fields after validation.
///
/// The title is trimmed and non-empty, the body is trimmed, and tags are
/// lowercase, non-empty and unique in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
}

impl NoteDraft {
    /// Build a draft from a tag list
    pub fn new<I>(title: impl AsRef<str>, body: impl AsRef<str>, tags: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let title = title.as_ref().trim();
        if title.is_empty() {
            return Err(Error::InvalidInput("Title is required".into()));
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(Error::InvalidInput(format!(
                "Title must be at most {MAX_TITLE_LEN} characters"
            )));
        }

        Ok(Self {
            title: title.to_string(),
            body: body.as_ref().trim().to_string(),
            tags: normalize_tags(tags),
        })
    }

    /// Build a draft from form-style input where tags are comma separated
    pub fn from_input(title: &str, body: &str, tags_input: &str) -> Result<Self> {
        if tags_input.chars().count() > MAX_TAG_INPUT_LEN {
            return Err(Error::InvalidInput(format!(
                "Tags must be at most {MAX_TAG_INPUT_LEN} characters"
            )));
        }
        Self::new(title, body, parse_tags(tags_input))
    }
}

/// Split comma separated tag input into normalized tags
///
/// # Examples
///
/// ```
/// use notely_core::models::parse_tags;
///
/// assert_eq!(parse_tags(" Work, ideas,,WORK "), vec!["work", "ideas"]);
/// ```
#[must_use]
pub fn parse_tags(input: &str) -> Vec<String> {
    normalize_tags(input.split(','))
}

/// Trim and lowercase tags, dropping empties and duplicates
#[must_use]
pub fn normalize_tags<I>(tags: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim().to_lowercase();
        if !tag.is_empty() && !normalized.contains(&tag) {
            normalized.push(tag);
        }
    }
    normalized
}
