//! Column references and resolution.
//!
//! A column is referenced either by 1-based numeric index or by header
//! name. References are parsed up front into a tagged value and resolved
//! once per invocation against the current header; resolution is never
//! cached or persisted.

use crate::error::CsvError;

/// A user-supplied, not-yet-resolved column reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRef {
    /// 1-based numeric index.
    Index(usize),
    /// Header name, matched against the first occurrence.
    Name(String),
}

impl ColumnRef {
    /// Parse a single reference.
    ///
    /// A non-empty all-digit string is a 1-based index; anything else is a
    /// name. Surrounding whitespace is trimmed.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if !s.is_empty()
            && s.chars().all(|c| c.is_ascii_digit())
            && let Ok(n) = s.parse::<usize>()
        {
            ColumnRef::Index(n)
        } else {
            ColumnRef::Name(s.to_string())
        }
    }

    /// Parse a comma-separated reference list. Numeric and name references
    /// may be mixed freely.
    pub fn parse_list(s: &str) -> Vec<Self> {
        s.split(',').map(Self::parse).collect()
    }

    /// Resolve to a 0-based field index against an optional header.
    ///
    /// Numeric references are not bounds-checked here; a missing field is
    /// handled per row at use time as empty text. Name references fail when
    /// there is no header or the name is absent from it.
    pub fn resolve(&self, header: Option<&[String]>) -> Result<usize, CsvError> {
        match self {
            ColumnRef::Index(n) => n
                .checked_sub(1)
                .ok_or_else(|| CsvError::InvalidIndex(n.to_string())),
            ColumnRef::Name(name) => match header {
                None => Err(CsvError::NameWithoutHeaders(name.clone())),
                Some(header) => header
                    .iter()
                    .position(|field| field == name)
                    .ok_or_else(|| CsvError::ColumnNotFound(name.clone())),
            },
        }
    }
}
