use super::error::InvalidInputError;
use super::pattern::{matches_exclude, matches_include};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

/// Decides whether a log message should be suppressed based on its category.
///
/// The exclude list is checked first and always wins. When the include list
/// is non-empty, a category that matches none of its patterns is excluded too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRules")]
pub struct CategoryFilter {
    include: Vec<String>,
    exclude: Vec<String>,
}

/// Why [`CategoryFilter::decide`] reached its verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "pattern", rename_all = "snake_case")]
pub enum Decision<'a> {
    /// An exclude pattern matched
    ExcludedBy(Cow<'a, str>),
    /// Nothing excluded it and there is no include list
    NoAllowlist,
    /// An include pattern matched
    IncludedBy(Cow<'a, str>),
    /// An include list exists and nothing in it matched
    NotIncluded,
}

impl Decision<'_> {
    pub fn is_excluded(&self) -> bool {
        matches!(self, Decision::ExcludedBy(_) | Decision::NotIncluded)
    }

    pub fn into_owned(self) -> Decision<'static> {
        match self {
            Decision::ExcludedBy(p) => Decision::ExcludedBy(Cow::Owned(p.into_owned())),
            Decision::NoAllowlist => Decision::NoAllowlist,
            Decision::IncludedBy(p) => Decision::IncludedBy(Cow::Owned(p.into_owned())),
            Decision::NotIncluded => Decision::NotIncluded,
        }
    }
}

impl fmt::Display for Decision<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::ExcludedBy(p) => write!(f, "excluded by pattern '{}'", p),
            Decision::NoAllowlist => write!(f, "allowed, no include list"),
            Decision::IncludedBy(p) => write!(f, "allowed by pattern '{}'", p),
            Decision::NotIncluded => write!(f, "excluded, not in include list"),
        }
    }
}

impl CategoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the include list
    pub fn set_included<I, S>(&mut self, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include = categories.into_iter().map(Into::into).collect();
        debug!("include list replaced ({} patterns)", self.include.len());
    }

    /// Replace the exclude list
    pub fn set_excluded<I, S>(&mut self, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = categories.into_iter().map(Into::into).collect();
        debug!("exclude list replaced ({} patterns)", self.exclude.len());
    }

    /// Replace the include list from untyped values.
    ///
    /// Every element must be a JSON string; otherwise the list is left
    /// untouched and the first offending element is reported.
    pub fn try_set_included(&mut self, categories: &[Value]) -> Result<(), InvalidInputError> {
        let categories = validate_strings(categories).inspect_err(|e| {
            warn!("rejected include list: {}", e);
        })?;
        self.set_included(categories);
        Ok(())
    }

    /// Replace the exclude list from untyped values.
    ///
    /// Same contract as [`CategoryFilter::try_set_included`].
    pub fn try_set_excluded(&mut self, categories: &[Value]) -> Result<(), InvalidInputError> {
        let categories = validate_strings(categories).inspect_err(|e| {
            warn!("rejected exclude list: {}", e);
        })?;
        self.set_excluded(categories);
        Ok(())
    }

    pub fn with_included<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_included(categories);
        self
    }

    pub fn with_excluded<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_excluded(categories);
        self
    }

    pub fn included(&self) -> &[String] {
        &self.include
    }

    pub fn excluded(&self) -> &[String] {
        &self.exclude
    }

    /// Whether a message with this category should be suppressed
    pub fn is_excluded(&self, category: &str) -> bool {
        self.decide(category).is_excluded()
    }

    /// Run the exclusion check and report which rule decided it
    pub fn decide<'a>(&'a self, category: &str) -> Decision<'a> {
        let decision = if let Some(p) = self
            .exclude
            .iter()
            .find(|p| matches_exclude(p, category))
        {
            Decision::ExcludedBy(Cow::Borrowed(p.as_str()))
        } else if self.include.is_empty() {
            Decision::NoAllowlist
        } else if let Some(q) = self
            .include
            .iter()
            .find(|q| matches_include(q, category))
        {
            Decision::IncludedBy(Cow::Borrowed(q.as_str()))
        } else {
            Decision::NotIncluded
        };

        trace!("category '{}': {}", category, decision);
        decision
    }
}

fn validate_strings(values: &[Value]) -> Result<Vec<String>, InvalidInputError> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(InvalidInputError::new(index, other)),
        })
        .collect()
}

/// Serialized shape of a filter before its elements are checked
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRules {
    include: Vec<Value>,
    exclude: Vec<Value>,
}

impl TryFrom<RawRules> for CategoryFilter {
    type Error = InvalidInputError;

    fn try_from(raw: RawRules) -> Result<Self, Self::Error> {
        let mut filter = CategoryFilter::new();
        filter.try_set_included(&raw.include)?;
        filter.try_set_excluded(&raw.exclude)?;
        Ok(filter)
    }
}
