//! Salutation extraction and grouping.
//!
//! Names in the passenger table follow `Family, Title. Given names`, e.g.
//! `Braund, Mr. Owen Harris`. The title is a useful proxy for age, but rare
//! titles (`Dr`, `Rev`, `Countess`, ...) have too few rows to carry their own
//! statistic, so they are folded into a single fallback label.

use std::collections::BTreeSet;

use munge_model::SalutationOptions;
use polars::prelude::{Column, DataFrame, NamedFrom};
use thiserror::Error;
use tracing::debug;

use crate::data_utils::require_column;
use crate::error::{Result, TransformError};

/// Ways a name can violate the `Family, Title. Given` grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SalutationError {
    #[error("no comma after the family name")]
    MissingComma,
    #[error("no period after the title")]
    MissingPeriod,
    #[error("title is empty")]
    EmptyTitle,
}

/// Parse the title out of a `Family, Title. Given` name.
///
/// The title is the text after the first comma, cut at the first period and
/// at any later comma, then trimmed. The text after the first comma must
/// contain a period somewhere.
///
/// # Examples
///
/// ```
/// use munge_transform::parse_salutation;
///
/// assert_eq!(parse_salutation("Jain, Mr. Kunal"), Ok("Mr"));
/// assert_eq!(parse_salutation("Jain, Miss. Jenika"), Ok("Miss"));
/// assert_eq!(parse_salutation("Jain, Mr, Kunal. Jr"), Ok("Mr"));
/// assert!(parse_salutation("Kunal Jain").is_err());
/// ```
pub fn parse_salutation(text: &str) -> std::result::Result<&str, SalutationError> {
    let (_, rest) = text
        .split_once(',')
        .ok_or(SalutationError::MissingComma)?;
    if !rest.contains('.') {
        return Err(SalutationError::MissingPeriod);
    }
    let title = rest
        .split([',', '.'])
        .next()
        .unwrap_or_default()
        .trim();
    if title.is_empty() {
        return Err(SalutationError::EmptyTitle);
    }
    Ok(title)
}

/// Allow-list of salutations kept verbatim, with one fallback for the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalutationGroups {
    kept: BTreeSet<String>,
    fallback: String,
}

impl SalutationGroups {
    pub fn new<I, S>(kept: I, fallback: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kept: kept.into_iter().map(Into::into).collect(),
            fallback: fallback.into(),
        }
    }

    pub fn from_options(options: &SalutationOptions) -> Self {
        Self::new(options.kept.iter().cloned(), options.fallback.clone())
    }

    /// Map a salutation to its group. Total: every input has an output.
    pub fn collapse<'a>(&'a self, value: &'a str) -> &'a str {
        if self.kept.contains(value) {
            value
        } else {
            &self.fallback
        }
    }

    pub fn kept(&self) -> impl Iterator<Item = &str> {
        self.kept.iter().map(String::as_str)
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl Default for SalutationGroups {
    fn default() -> Self {
        Self::from_options(&SalutationOptions::default())
    }
}

/// Return a copy of `df` with `target` holding the title parsed from `source`.
///
/// Fails on the first null or malformed name, reporting its row.
pub fn extract_salutations(df: &DataFrame, source: &str, target: &str) -> Result<DataFrame> {
    let column = require_column(df, source)?;
    let names = column.str().map_err(|_| TransformError::UnexpectedType {
        column: source.to_string(),
        expected: "string",
        found: column.dtype().to_string(),
    })?;

    let mut titles = Vec::with_capacity(df.height());
    for (row, cell) in names.into_iter().enumerate() {
        let text = cell.ok_or_else(|| TransformError::MissingText {
            row,
            column: source.to_string(),
        })?;
        let title = parse_salutation(text).map_err(|err| TransformError::MalformedText {
            row,
            column: source.to_string(),
            value: text.to_string(),
            source: err,
        })?;
        titles.push(title);
    }

    let mut out = df.clone();
    out.with_column(Column::new(target.into(), titles))?;
    debug!(source, target, rows = out.height(), "extracted salutations");
    Ok(out)
}

/// Return a copy of `df` with `target` holding the grouped form of `source`.
///
/// Null cells stay null.
pub fn collapse_salutations(
    df: &DataFrame,
    groups: &SalutationGroups,
    source: &str,
    target: &str,
) -> Result<DataFrame> {
    let column = require_column(df, source)?;
    let values = column.str().map_err(|_| TransformError::UnexpectedType {
        column: source.to_string(),
        expected: "string",
        found: column.dtype().to_string(),
    })?;

    let collapsed: Vec<Option<&str>> = values
        .into_iter()
        .map(|cell| cell.map(|value| groups.collapse(value)))
        .collect();

    let mut out = df.clone();
    out.with_column(Column::new(target.into(), collapsed))?;
    debug!(
        source,
        target,
        fallback = groups.fallback(),
        "collapsed salutations"
    );
    Ok(out)
}
