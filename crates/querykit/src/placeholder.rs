//! Parameter placeholder styles.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// How bound parameters are marked in the generated SQL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamStyle {
    /// `?` for every parameter (MySQL, SQLite).
    QuestionMark,
    /// `$1`, `$2`, ... (PostgreSQL).
    #[default]
    DollarNumber,
}

impl ParamStyle {
    /// Placeholder for the 1-based `ordinal`.
    pub fn placeholder(self, ordinal: usize) -> String {
        let mut out = String::with_capacity(4);
        self.write_placeholder(&mut out, ordinal);
        out
    }

    pub(crate) fn write_placeholder(self, out: &mut String, ordinal: usize) {
        match self {
            Self::QuestionMark => out.push('?'),
            Self::DollarNumber => {
                let _ = write!(out, "${ordinal}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_each_style() {
        assert_eq!(ParamStyle::DollarNumber.placeholder(1), "$1");
        assert_eq!(ParamStyle::DollarNumber.placeholder(12), "$12");
        assert_eq!(ParamStyle::QuestionMark.placeholder(1), "?");
        assert_eq!(ParamStyle::QuestionMark.placeholder(7), "?");
    }

    #[test]
    fn defaults_to_dollar_number() {
        assert_eq!(ParamStyle::default(), ParamStyle::DollarNumber);
    }
}
