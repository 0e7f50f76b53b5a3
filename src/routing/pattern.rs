//! Path pattern parsing.
//!
//! Patterns use the `:name` placeholder syntax of the front-end router,
//! e.g. `/trade/:stockCode`. They are parsed once when the table is built
//! and compiled into `matchit` syntax for lookup.
//!
//! Literal segments match ignoring ASCII case; parameter values keep the
//! text exactly as it appears in the path.

use std::fmt;

use thiserror::Error;

use super::params::PathParams;

/// Reasons a pattern string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern must start with '/'")]
    MissingLeadingSlash,

    #[error("empty segment at position {0}")]
    EmptySegment(usize),

    #[error("parameter at position {0} has no name")]
    UnnamedParam(usize),

    #[error("invalid character in parameter name '{0}'")]
    InvalidParamName(String),

    #[error("parameter '{0}' declared more than once")]
    DuplicateParam(String),

    #[error("segment '{segment}' contains reserved character '{ch}'")]
    ReservedChar { segment: String, ch: char },
}

/// Characters that end the path part of a URL.
const RESERVED: [char; 2] = ['?', '#'];

/// Reasons bindings cannot be substituted into a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FillError {
    #[error("no value for parameter '{0}'")]
    Missing(String),

    #[error("value '{value}' for parameter '{param}' cannot appear in a path segment")]
    Invalid { param: String, value: String },
}

/// One segment of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the path segment, ignoring ASCII case.
    Literal(String),
    /// Matches any non-empty path segment and binds it under this name.
    Param(String),
}

/// A parsed route path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern such as `/` or `/trade/:stockCode`.
    pub fn parse(source: &str) -> Result<Self, PatternError> {
        let rest = source
            .strip_prefix('/')
            .ok_or(PatternError::MissingLeadingSlash)?;

        let mut segments = Vec::new();
        if !rest.is_empty() {
            for (position, raw) in rest.split('/').enumerate() {
                if raw.is_empty() {
                    return Err(PatternError::EmptySegment(position));
                }
                match raw.strip_prefix(':') {
                    Some("") => return Err(PatternError::UnnamedParam(position)),
                    Some(name) => {
                        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                            return Err(PatternError::InvalidParamName(name.to_string()));
                        }
                        let seen = segments
                            .iter()
                            .any(|s| matches!(s, Segment::Param(p) if p == name));
                        if seen {
                            return Err(PatternError::DuplicateParam(name.to_string()));
                        }
                        segments.push(Segment::Param(name.to_string()));
                    }
                    None => {
                        if let Some(ch) = raw.chars().find(|c| RESERVED.contains(c)) {
                            return Err(PatternError::ReservedChar {
                                segment: raw.to_string(),
                                ch,
                            });
                        }
                        segments.push(Segment::Literal(raw.to_string()))
                    }
                }
            }
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The pattern as written in configuration.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of all parameters, in path order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    pub fn has_param(&self, name: &str) -> bool {
        self.param_names().any(|p| p == name)
    }

    /// True if both patterns match exactly the same set of paths.
    pub fn same_shape(&self, other: &PathPattern) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|pair| match pair {
                    (Segment::Literal(a), Segment::Literal(b)) => a.eq_ignore_ascii_case(b),
                    (Segment::Param(_), Segment::Param(_)) => true,
                    _ => false,
                })
    }

    /// Render the pattern in `matchit` route syntax (`/trade/{stockCode}`).
    pub(crate) fn to_matchit(&self) -> String {
        if self.segments.is_empty() {
            return "/".to_string();
        }
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Literal(text) => {
                    let text = text.to_ascii_lowercase();
                    out.push_str(&text.replace('{', "{{").replace('}', "}}"));
                }
                Segment::Param(name) => {
                    out.push('{');
                    out.push_str(name);
                    out.push('}');
                }
            }
        }
        out
    }

    /// Bind parameter values from a path this pattern matched.
    ///
    /// `path` must start with '/' and carry no query, fragment, or trailing
    /// slash. Values are taken from `path` as written.
    pub fn bind(&self, path: &str) -> Option<PathParams> {
        let rest = path.strip_prefix('/')?;
        let parts: Vec<&str> = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('/').collect()
        };
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = PathParams::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(text) if text.eq_ignore_ascii_case(part) => {}
                Segment::Literal(_) => return None,
                Segment::Param(_) if part.is_empty() => return None,
                Segment::Param(name) => params.insert(name.as_str(), part),
            }
        }
        Some(params)
    }

    /// Build a concrete path by substituting bindings into the pattern.
    ///
    /// Values must be non-empty and free of '/', '?' and '#', so that the
    /// resulting path resolves back to the same bindings.
    pub fn fill(&self, params: &PathParams) -> Result<String, FillError> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Param(name) => match params.get(name) {
                    None | Some("") => return Err(FillError::Missing(name.clone())),
                    Some(value) if value.contains(['/', '?', '#']) => {
                        return Err(FillError::Invalid {
                            param: name.clone(),
                            value: value.to_string(),
                        })
                    }
                    Some(value) => out.push_str(value),
                },
            }
        }
        Ok(out)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
