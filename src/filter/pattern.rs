/// Trailing marker that turns a pattern into a prefix pattern
pub const WILDCARD: char = '*';

/// How a single pattern string is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind<'a> {
    /// Matches only an identical category
    Exact(&'a str),
    /// Matches every category starting with the contained prefix
    Prefix(&'a str),
}

impl<'a> PatternKind<'a> {
    /// Classify a pattern. Only one trailing marker is stripped.
    pub fn of(pattern: &'a str) -> Self {
        match pattern.strip_suffix(WILDCARD) {
            Some(prefix) => PatternKind::Prefix(prefix),
            None => PatternKind::Exact(pattern),
        }
    }

    pub fn is_prefix(&self) -> bool {
        matches!(self, PatternKind::Prefix(_))
    }
}

/// Match rule used for the exclude list.
///
/// A lone `*` has an empty prefix and matches every category.
pub fn matches_exclude(pattern: &str, category: &str) -> bool {
    if category == pattern {
        return true;
    }
    match PatternKind::of(pattern) {
        PatternKind::Prefix(prefix) => category.starts_with(prefix),
        PatternKind::Exact(_) => false,
    }
}

/// Match rule used for the include list.
///
/// Unlike [`matches_exclude`], the pattern must be non-empty before it is
/// tested for the trailing marker.
pub fn matches_include(pattern: &str, category: &str) -> bool {
    if category == pattern {
        return true;
    }
    if pattern.is_empty() {
        return false;
    }
    match PatternKind::of(pattern) {
        PatternKind::Prefix(prefix) => category.starts_with(prefix),
        PatternKind::Exact(_) => false,
    }
}
