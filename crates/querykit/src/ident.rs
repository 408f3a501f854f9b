//! Identifier grammar used by [`IdentPolicy::Allowlist`](crate::IdentPolicy).
//!
//! - Bare parts match `[A-Za-z_][A-Za-z0-9_$]*`
//! - Quoted parts allow anything except NUL, with `"` escaped as `""`
//! - Parts are joined with `.` (`schema.table.column`)
//!
//! # Example
//! ```
//! use querykit::Ident;
//!
//! let t = Ident::parse("public.users")?;
//! assert_eq!(t.to_sql(), "public.users");
//! assert!(Ident::parse("users; drop table users").is_err());
//! # Ok::<(), querykit::BuildError>(())
//! ```

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use crate::error::{BuildError, BuildResult};

/// A part of a dotted identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentPart {
    Bare(String),
    Quoted(String),
}

/// A grammar-checked SQL name such as `users`, `public.users` or
/// `"Order Lines".id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub parts: Vec<IdentPart>,
}

impl Ident {
    /// Wrap an arbitrary name as a single quoted part.
    pub fn quoted(name: &str) -> BuildResult<Self> {
        if name.is_empty() {
            return Err(BuildError::identifier("empty quoted identifier"));
        }
        if name.contains('\0') {
            return Err(BuildError::identifier("identifier cannot contain NUL"));
        }
        Ok(Self {
            parts: vec![IdentPart::Quoted(name.to_string())],
        })
    }

    /// Parse a dotted, optionally quoted name.
    pub fn parse(s: &str) -> BuildResult<Self> {
        if s.is_empty() {
            return Err(BuildError::identifier("identifier cannot be empty"));
        }
        if s.contains('\0') {
            return Err(BuildError::identifier("identifier cannot contain NUL"));
        }

        let mut parts = Vec::new();
        let mut chars = s.chars().peekable();
        loop {
            let part = if chars.peek() == Some(&'"') {
                chars.next();
                parse_quoted(&mut chars)?
            } else {
                parse_bare(&mut chars)?
            };
            parts.push(part);

            match chars.next() {
                None => break,
                Some('.') if chars.peek().is_none() => {
                    return Err(BuildError::identifier("trailing '.' in identifier"));
                }
                Some('.') => {}
                Some(c) => {
                    return Err(BuildError::identifier(format!(
                        "expected '.' between identifier parts, got '{c}'"
                    )));
                }
            }
        }

        Ok(Self { parts })
    }

    /// Render the identifier as SQL.
    pub fn to_sql(&self) -> String {
        let mut out = String::with_capacity(self.parts.len() * 8);
        self.write_sql(&mut out);
        out
    }

    pub(crate) fn write_sql(&self, out: &mut String) {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            match part {
                IdentPart::Bare(s) => out.push_str(s),
                IdentPart::Quoted(s) => {
                    out.push('"');
                    out.push_str(&s.replace('"', "\"\""));
                    out.push('"');
                }
            }
        }
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

// Opening quote already consumed.
fn parse_quoted(chars: &mut Peekable<Chars<'_>>) -> BuildResult<IdentPart> {
    let mut name = String::new();
    loop {
        match chars.next() {
            Some('"') if chars.peek() == Some(&'"') => {
                chars.next();
                name.push('"');
            }
            Some('"') => break,
            Some(c) => name.push(c),
            None => return Err(BuildError::identifier("unclosed quoted identifier")),
        }
    }
    if name.is_empty() {
        return Err(BuildError::identifier("empty quoted identifier"));
    }
    Ok(IdentPart::Quoted(name))
}

fn parse_bare(chars: &mut Peekable<Chars<'_>>) -> BuildResult<IdentPart> {
    let mut name = String::new();
    while let Some(&c) = chars.peek() {
        if c == '.' {
            break;
        }
        let ok = if name.is_empty() {
            c == '_' || c.is_ascii_alphabetic()
        } else {
            c == '_' || c == '$' || c.is_ascii_alphanumeric()
        };
        if !ok {
            return Err(BuildError::identifier(format!(
                "invalid character in identifier: '{c}'"
            )));
        }
        name.push(c);
        chars.next();
    }
    if name.is_empty() {
        return Err(BuildError::identifier("empty identifier segment"));
    }
    Ok(IdentPart::Bare(name))
}
