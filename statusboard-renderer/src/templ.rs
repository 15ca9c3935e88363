//! Minimal substitution function built on [`SafeString`].

use statusboard_core::{HtmlError, HtmlText, SafeString};

/// Render a trusted pattern with named, auto-escaped arguments.
///
/// `pattern` is wrapped as trusted markup; every argument is escaped before
/// substitution (already-safe arguments pass through unchanged). There are no
/// positional arguments — only named substitution is escape-safe.
pub fn templ(pattern: &str, args: &[(&str, HtmlText)]) -> Result<SafeString, HtmlError> {
    SafeString::trusted(pattern).format_named(args)
}
