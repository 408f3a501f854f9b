use serde::Deserialize;

use crate::error::{BuildError, BuildResult};
use crate::placeholder::ParamStyle;
use crate::sanitize::IdentPolicy;

/// Defaults applied to new builders.
///
/// Every field is optional when deserializing:
///
/// ```toml
/// param_style = "question_mark"
/// ident_policy = "allowlist"
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuilderConfig {
    /// Placeholder style. Default is `$n`.
    pub param_style: ParamStyle,
    /// Identifier rendering policy. Default is the denylist filter.
    pub ident_policy: IdentPolicy,
}

impl BuilderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document.
    pub fn from_toml_str(raw: &str) -> BuildResult<Self> {
        toml::from_str(raw).map_err(|e| BuildError::config(format!("failed to parse config: {e}")))
    }

    pub fn with_param_style(mut self, style: ParamStyle) -> Self {
        self.param_style = style;
        self
    }

    pub fn with_ident_policy(mut self, policy: IdentPolicy) -> Self {
        self.ident_policy = policy;
        self
    }
}
