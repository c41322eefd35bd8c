//! Policy accumulation and rendering.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DELIMITER;
use crate::directive::Directive;
use crate::error::{CspError, Result};

/// Mapping of directive names to their allowed resource tokens.
pub type DirectivesMap = HashMap<String, Vec<String>>;

/// An accumulating Content-Security-Policy.
///
/// Build the policy with [`set`](Self::set) and [`add`](Self::add), then
/// render it with [`to_header_value`](Self::to_header_value) (or `Display`)
/// and write the result under the [`HEADER`](crate::HEADER) or
/// [`HEADER_REPORT_ONLY`](crate::HEADER_REPORT_ONLY) name. Rendering is
/// deterministic: directives come out in the fixed [`Directive::ALL`] order,
/// so the same final directive contents produce byte-identical output no
/// matter the order of the calls that built them.
///
/// A policy is plain data with no interior locking. The intended pattern is
/// to build it once at startup and share the rendered `String` across
/// request handlers; if a policy itself must be shared, callers are
/// responsible for serializing mutation externally.
///
/// # Examples
///
/// ```
/// use csp_builder::{Policy, DEFAULT_SRC, SCRIPT_SRC, SELF};
///
/// let mut policy = Policy::new();
/// policy.set(DEFAULT_SRC, vec![SELF]).unwrap();
/// policy.add(SCRIPT_SRC, vec![SELF, "https://cdn.example.com"]).unwrap();
///
/// assert_eq!(
///     policy.to_header_value(),
///     "default-src 'self'; script-src 'self' https://cdn.example.com"
/// );
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Policy {
    /// Directives and their resource tokens.
    ///
    /// Public so a policy can be built as a literal or loaded from config.
    /// Keys placed here directly bypass directive-name validation; rendering
    /// walks the fixed directive set, so unknown keys are silently skipped.
    pub directives: DirectivesMap,
}

impl Policy {
    /// Create an empty policy. Rendering it yields the empty string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a directive's entire value list.
    ///
    /// Returns [`CspError::InvalidDirective`] if `directive` is not one of
    /// the fixed CSP directives, leaving the policy untouched.
    pub fn set(
        &mut self,
        directive: impl Into<String>,
        values: Vec<impl Into<String>>,
    ) -> Result<()> {
        let directive = directive.into();
        if Directive::from_name(&directive).is_none() {
            return Err(CspError::InvalidDirective(directive));
        }

        self.directives
            .insert(directive, values.into_iter().map(Into::into).collect());
        Ok(())
    }

    /// Append values to the end of a directive's list, creating the entry
    /// first if the directive is not present yet. Argument order is
    /// preserved and duplicates are kept.
    ///
    /// Returns [`CspError::InvalidDirective`] if `directive` is not one of
    /// the fixed CSP directives, leaving the policy untouched.
    pub fn add(
        &mut self,
        directive: impl Into<String>,
        values: Vec<impl Into<String>>,
    ) -> Result<()> {
        let directive = directive.into();
        if Directive::from_name(&directive).is_none() {
            return Err(CspError::InvalidDirective(directive));
        }

        self.directives
            .entry(directive)
            .or_default()
            .extend(values.into_iter().map(Into::into));
        Ok(())
    }

    /// Replace a directive's value list, chainable form for building a
    /// policy in one expression. The typed [`Directive`] argument cannot
    /// name an unknown directive, so unlike [`set`](Self::set) this cannot
    /// fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use csp_builder::{Directive, Policy, NONE, SELF};
    ///
    /// let policy = Policy::new()
    ///     .with_directive(Directive::DefaultSrc, vec![SELF])
    ///     .with_directive(Directive::ObjectSrc, vec![NONE]);
    ///
    /// assert_eq!(policy.to_header_value(), "default-src 'self'; object-src 'none'");
    /// ```
    pub fn with_directive(mut self, directive: Directive, values: Vec<impl Into<String>>) -> Self {
        self.directives.insert(
            directive.name().to_string(),
            values.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Render the policy as a header value.
    ///
    /// Directives render in [`Directive::ALL`] order as
    /// `"<directive> <token> <token>…"`, joined by
    /// [`DELIMITER`](crate::DELIMITER). Absent directives are skipped; there
    /// is no trailing delimiter; an empty policy renders as `""`.
    pub fn to_header_value(&self) -> String {
        let mut parts = Vec::new();

        for directive in Directive::ALL {
            if let Some(values) = self.directives.get(directive.name()) {
                parts.push(format!("{} {}", directive.name(), values.join(" ")));
            }
        }

        parts.join(DELIMITER)
    }
}

/// Wraps a caller-supplied mapping as-is. Construction trusts the caller:
/// keys are not validated here, only when later passed to
/// [`Policy::set`]/[`Policy::add`].
impl From<DirectivesMap> for Policy {
    fn from(directives: DirectivesMap) -> Self {
        Self { directives }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_header_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_SRC, MEDIA_SRC, NONE, SANDBOX, SCRIPT_SRC, SELF};

    #[test]
    fn test_empty_policy_renders_empty() {
        assert_eq!(Policy::new().to_header_value(), "");
    }

    #[test]
    fn test_set_replaces() {
        let mut policy = Policy::new();
        policy.set(DEFAULT_SRC, vec![SELF]).unwrap();
        assert_eq!(policy.to_header_value(), "default-src 'self'");

        policy.set(DEFAULT_SRC, vec![NONE]).unwrap();
        assert_eq!(policy.to_header_value(), "default-src 'none'");
    }

    #[test]
    fn test_add_appends() {
        let mut policy = Policy::new();
        policy.add(DEFAULT_SRC, vec![SELF]).unwrap();
        policy.add(DEFAULT_SRC, vec!["https://cdn.example.com"]).unwrap();

        let mut by_set = Policy::new();
        by_set
            .set(DEFAULT_SRC, vec![SELF, "https://cdn.example.com"])
            .unwrap();

        assert_eq!(policy.to_header_value(), by_set.to_header_value());
    }

    #[test]
    fn test_empty_value_list_keeps_entry() {
        // A bare directive like sandbox is legal; it renders as the name
        // followed by a single space.
        let mut policy = Policy::new();
        policy.add(SANDBOX, Vec::<String>::new()).unwrap();
        assert!(policy.directives.contains_key(SANDBOX));
        assert_eq!(policy.to_header_value(), "sandbox ");

        policy.set(SANDBOX, Vec::<String>::new()).unwrap();
        policy.set(DEFAULT_SRC, vec![SELF]).unwrap();
        assert_eq!(policy.to_header_value(), "default-src 'self'; sandbox ");
    }

    #[test]
    fn test_render_order_is_fixed() {
        let mut policy = Policy::new();
        policy.add(MEDIA_SRC, vec![NONE]).unwrap();
        policy.set(DEFAULT_SRC, vec![SELF]).unwrap();

        // default-src leads even though media-src was added first.
        assert_eq!(
            policy.to_header_value(),
            "default-src 'self'; media-src 'none'"
        );
    }

    #[test]
    fn test_invalid_directive_rejected() {
        let mut policy = Policy::new();
        policy.set(DEFAULT_SRC, vec![SELF]).unwrap();

        let err = policy.set("bogus-src", vec![SELF]).unwrap_err();
        assert!(matches!(err, CspError::InvalidDirective(ref name) if name == "bogus-src"));
        assert_eq!(err.to_string(), r#"invalid CSP directive: "bogus-src""#);

        let err = policy.add("bogus-src", vec![SELF]).unwrap_err();
        assert!(matches!(err, CspError::InvalidDirective(ref name) if name == "bogus-src"));

        // The failed calls left no trace.
        assert_eq!(policy.to_header_value(), "default-src 'self'");
    }

    #[test]
    fn test_with_directive_chain() {
        let policy = Policy::new()
            .with_directive(Directive::ScriptSrc, vec![SELF])
            .with_directive(Directive::DefaultSrc, vec![SELF])
            .with_directive(Directive::ScriptSrc, vec![NONE]);

        assert_eq!(
            policy.to_header_value(),
            "default-src 'self'; script-src 'none'"
        );
    }

    #[test]
    fn test_from_map_trusts_caller() {
        let mut map = DirectivesMap::new();
        map.insert(DEFAULT_SRC.to_string(), vec![SELF.to_string()]);
        map.insert("not-a-directive".to_string(), vec![SELF.to_string()]);

        // The unknown key is kept in the map but never rendered.
        let policy = Policy::from(map);
        assert_eq!(policy.to_header_value(), "default-src 'self'");
        assert!(policy.directives.contains_key("not-a-directive"));
    }

    #[test]
    fn test_display_matches_header_value() {
        let mut policy = Policy::new();
        policy.set(SCRIPT_SRC, vec![SELF]).unwrap();
        assert_eq!(policy.to_string(), policy.to_header_value());
    }
}
