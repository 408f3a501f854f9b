//! Denylist filtering for text embedded into generated SQL.
//!
//! Two policies are applied depending on where the text lands:
//!
//! - **strict** (names: tables, columns, aliases, ORDER BY): only
//!   `[A-Za-z0-9_.*]` survives, then structural keywords are removed.
//! - **permissive** (operators, join conditions): only structural keywords are
//!   removed; spaces, parentheses and comparison symbols pass through.
//!
//! Names go through [`safe_identifier`]: anything the classifier considers
//! apparently safe is emitted verbatim, everything else is strict-filtered and
//! double-quoted.
//!
//! This is best-effort mitigation, not a grammar. Use
//! [`IdentPolicy::Allowlist`] to let grammar-valid names through untouched.

use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ident::Ident;

/// Keywords removed by both policies, matched case-insensitively anywhere.
pub const STRUCTURAL_KEYWORDS: &[&str] = &[
    "drop", "delete", "insert", "update", "create", "alter", "truncate", "exec", "execute",
];

/// Substrings that make a name look unsafe to the classifier.
pub const SUSPICIOUS_PATTERNS: &[&str] = &[
    "';", "\";", "--", "/*", "*/", "drop", "delete", "insert", "update", "create", "alter",
    "truncate", "exec", "execute", "union", "select", "into", "from", "where", "join",
];

fn keyword_re() -> &'static Regex {
    static KEYWORD_RE: OnceLock<Regex> = OnceLock::new();
    KEYWORD_RE.get_or_init(|| {
        // `execute` before `exec` so the longer word goes in one pass.
        Regex::new(r"(?i)execute|exec|drop|delete|insert|update|create|alter|truncate")
            .expect("invalid built-in keyword regex")
    })
}

fn disallowed_char_re() -> &'static Regex {
    static CHAR_RE: OnceLock<Regex> = OnceLock::new();
    CHAR_RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_.*]").expect("invalid built-in char regex"))
}

/// How names in identifier positions are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentPolicy {
    /// Classifier + strict filter for everything.
    #[default]
    Denylist,
    /// Names matching the [`Ident`] grammar render verbatim; the rest fall
    /// back to the denylist route.
    Allowlist,
}

/// Where a piece of text is embedded in the statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentContext {
    Table,
    TableAlias,
    Column,
    OrderBy,
    PredicateColumn,
    Operator,
    JoinTable,
    JoinAlias,
    JoinCondition,
    InsertColumn,
    SetColumn,
}

impl IdentContext {
    /// Positions that only ever hold a (possibly dotted) name.
    ///
    /// Projection columns and ORDER BY may legitimately carry expressions
    /// (`count(*) as n`, `name desc`), so they are excluded.
    pub fn is_name(self) -> bool {
        matches!(
            self,
            Self::Table
                | Self::TableAlias
                | Self::PredicateColumn
                | Self::JoinTable
                | Self::JoinAlias
                | Self::InsertColumn
                | Self::SetColumn
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::TableAlias => "table alias",
            Self::Column => "column",
            Self::OrderBy => "order by",
            Self::PredicateColumn => "where column",
            Self::Operator => "operator",
            Self::JoinTable => "join table",
            Self::JoinAlias => "join alias",
            Self::JoinCondition => "join condition",
            Self::InsertColumn => "insert column",
            Self::SetColumn => "set column",
        }
    }
}

impl fmt::Display for IdentContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Permissive policy: remove every structural keyword, case-insensitively.
///
/// Removal repeats until nothing matches, so `drdropop` cannot collapse back
/// into `drop`.
pub fn strip_keywords(input: &str) -> Cow<'_, str> {
    let re = keyword_re();
    if !re.is_match(input) {
        return Cow::Borrowed(input);
    }
    let mut current = re.replace_all(input, "").into_owned();
    while re.is_match(&current) {
        current = re.replace_all(&current, "").into_owned();
    }
    Cow::Owned(current)
}

/// Strict policy: keep `[A-Za-z0-9_.*]`, then strip structural keywords.
pub fn sanitize_strict(input: &str) -> Cow<'_, str> {
    let kept = disallowed_char_re().replace_all(input, "");
    if !keyword_re().is_match(&kept) {
        return kept;
    }
    Cow::Owned(strip_keywords(&kept).into_owned())
}

/// Classifier: non-empty and free of every [`SUSPICIOUS_PATTERNS`] entry.
pub fn is_apparently_safe(input: &str) -> bool {
    if input.is_empty() {
        return false;
    }
    let lower = input.to_ascii_lowercase();
    !SUSPICIOUS_PATTERNS.iter().any(|p| lower.contains(p))
}

/// Render a name: verbatim when apparently safe, otherwise strict-filtered
/// and wrapped in double quotes (inner `"` doubled).
///
/// Names carrying a quote character are always treated as unsafe.
pub fn safe_identifier(input: &str) -> Cow<'_, str> {
    if is_apparently_safe(input) && !input.contains(['"', '\'']) {
        return Cow::Borrowed(input);
    }

    let stripped = sanitize_strict(input);
    let mut out = String::with_capacity(stripped.len() + 2);
    out.push('"');
    for ch in stripped.chars() {
        if ch == '"' {
            out.push_str("\"\"");
        } else {
            out.push(ch);
        }
    }
    out.push('"');
    Cow::Owned(out)
}

/// Apply `policy` to a name without emitting any event.
pub(crate) fn filter_identifier(input: &str, policy: IdentPolicy) -> Cow<'_, str> {
    if policy == IdentPolicy::Allowlist && Ident::parse(input).is_ok() {
        return Cow::Borrowed(input);
    }
    safe_identifier(input)
}

/// Render a name for `context`, reporting rewrites through `tracing`.
pub(crate) fn render_identifier(
    input: &str,
    policy: IdentPolicy,
    context: IdentContext,
) -> Cow<'_, str> {
    let rendered = filter_identifier(input, policy);
    if let Cow::Owned(out) = &rendered {
        trace_rewrite(context, input, out);
    }
    rendered
}

/// Render an operator or join condition with the permissive policy.
pub(crate) fn render_expression(input: &str, context: IdentContext) -> Cow<'_, str> {
    let rendered = strip_keywords(input);
    if let Cow::Owned(out) = &rendered {
        trace_rewrite(context, input, out);
    }
    rendered
}

#[cfg(feature = "tracing")]
fn trace_rewrite(context: IdentContext, original: &str, rendered: &str) {
    tracing::warn!(
        target: "querykit::sanitize",
        context = %context,
        original,
        rendered,
        "input rewritten by safety filter"
    );
}

#[cfg(not(feature = "tracing"))]
fn trace_rewrite(_context: IdentContext, _original: &str, _rendered: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_keeps_identifier_charset() {
        assert_eq!(sanitize_strict("users.id"), "users.id");
        assert_eq!(sanitize_strict("*"), "*");
        assert_eq!(sanitize_strict("first name;"), "firstname");
    }

    #[test]
    fn strict_strips_keywords_in_any_case() {
        assert_eq!(sanitize_strict("users; DROP TABLE accounts; --"), "usersTABLEaccounts");
        assert_eq!(sanitize_strict("DeLeTe_me"), "_me");
    }

    #[test]
    fn permissive_keeps_expression_syntax() {
        assert_eq!(strip_keywords(">="), ">=");
        assert_eq!(
            strip_keywords("a.id = b.a_id AND (b.x > 1)"),
            "a.id = b.a_id AND (b.x > 1)"
        );
        assert_eq!(
            strip_keywords("a.id = b.id; drop table logs; --"),
            "a.id = b.id;  table logs; --"
        );
    }

    #[test]
    fn stripping_reaches_a_fixed_point() {
        assert_eq!(strip_keywords("drdropop"), "");
        assert_eq!(strip_keywords("xDRdRoPOPy"), "xy");
        assert_eq!(strip_keywords("execute"), "");
    }

    #[test]
    fn classifier_flags_patterns() {
        assert!(is_apparently_safe("users"));
        assert!(is_apparently_safe("accounts.name as account_name"));
        assert!(!is_apparently_safe(""));
        assert!(!is_apparently_safe("id; --"));
        assert!(!is_apparently_safe("UNION ALL"));
        assert!(!is_apparently_safe("from_date"));
    }

    #[test]
    fn safe_identifier_passes_safe_names_through() {
        assert!(matches!(safe_identifier("users.id"), Cow::Borrowed("users.id")));
        assert_eq!(safe_identifier("count(*) as total"), "count(*) as total");
    }

    #[test]
    fn safe_identifier_quotes_unsafe_names() {
        assert_eq!(safe_identifier("from_date"), r#""from_date""#);
        assert_eq!(safe_identifier("name'"), r#""name""#);
        assert_eq!(safe_identifier(""), r#""""#);
        assert_eq!(
            safe_identifier("users; DROP TABLE accounts; --"),
            r#""usersTABLEaccounts""#
        );
    }

    #[test]
    fn allowlist_keeps_grammar_valid_names() {
        assert_eq!(filter_identifier("created_at", IdentPolicy::Allowlist), "created_at");
        assert_eq!(filter_identifier("created_at", IdentPolicy::Denylist), r#""d_at""#);
        assert_eq!(
            filter_identifier(r#""Drop""."Me""#, IdentPolicy::Allowlist),
            r#""Drop""."Me""#
        );
        assert_eq!(
            filter_identifier("id; drop table x", IdentPolicy::Allowlist),
            r#""idtablex""#
        );
    }

    #[test]
    fn name_contexts() {
        assert!(IdentContext::Table.is_name());
        assert!(IdentContext::SetColumn.is_name());
        assert!(!IdentContext::Column.is_name());
        assert!(!IdentContext::OrderBy.is_name());
        assert!(!IdentContext::JoinCondition.is_name());
    }
}
