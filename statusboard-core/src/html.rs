//! HTML-safe string type and escaping-preserving combinators.
//!
//! [`SafeString`] carries the invariant "contents are HTML-safe". Untrusted
//! text enters the system as [`HtmlText::Raw`] and is escaped exactly once,
//! at the moment it is absorbed into a safe context (concatenation, join or
//! placeholder substitution). Text that is already safe is tagged
//! [`HtmlText::Escaped`] and is never escaped a second time.
//!
//! This is a taint-tracking policy, not a template engine: it guarantees no
//! double-escaping and no accidental unescaped interpolation, as long as
//! callers route all interpolation through [`SafeString::format_named`],
//! [`SafeString::join`] or the `+` operator rather than assembling raw
//! fragments by hand.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul};

use crate::error::HtmlError;

// ---------------------------------------------------------------------------
// HtmlText — explicit taint tag
// ---------------------------------------------------------------------------

/// A fragment of text tagged by whether it has already been HTML-escaped.
///
/// `&str` and `String` convert to [`HtmlText::Raw`]; [`SafeString`] converts
/// to [`HtmlText::Escaped`]. Every combinator in this module accepts
/// `impl Into<HtmlText>` and pattern-matches on the tag, so a raw fragment is
/// escaped exactly once and an escaped fragment is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HtmlText {
    /// Untrusted text. Escaped when absorbed into a safe context.
    Raw(String),
    /// Text that is already HTML-safe. Never re-escaped.
    Escaped(String),
}

impl From<&str> for HtmlText {
    fn from(s: &str) -> Self {
        HtmlText::Raw(s.to_owned())
    }
}

impl From<String> for HtmlText {
    fn from(s: String) -> Self {
        HtmlText::Raw(s)
    }
}

impl From<SafeString> for HtmlText {
    fn from(s: SafeString) -> Self {
        HtmlText::Escaped(s.0)
    }
}

impl From<&SafeString> for HtmlText {
    fn from(s: &SafeString) -> Self {
        HtmlText::Escaped(s.0.clone())
    }
}

// ---------------------------------------------------------------------------
// escape
// ---------------------------------------------------------------------------

/// Convert the five markup-significant characters into inert entities.
fn escape_chars(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}

/// Escape `value` into a [`SafeString`], but only if needed.
///
/// Idempotent: an already-escaped value passes through unchanged, so escaping
/// is never applied twice no matter how many safe contexts a fragment moves
/// through.
pub fn escape(value: impl Into<HtmlText>) -> SafeString {
    match value.into() {
        HtmlText::Escaped(s) => SafeString(s),
        HtmlText::Raw(s) => SafeString(escape_chars(&s)),
    }
}

// ---------------------------------------------------------------------------
// SafeString
// ---------------------------------------------------------------------------

/// An immutable string guaranteed to contain only HTML-safe text.
///
/// Created by [`escape`] or by [`SafeString::trusted`]; there is no way to
/// mutate the contents after creation. All composition operators preserve the
/// safety invariant by escaping any raw operand first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SafeString(String);

impl SafeString {
    /// Wrap a literal markup template as already-safe.
    ///
    /// The caller asserts that `markup` is well-formed, trusted HTML. Only
    /// ever call this on literals under the author's control — routing
    /// user-supplied text through here defeats the taint tracking.
    pub fn trusted(markup: impl Into<String>) -> Self {
        SafeString(markup.into())
    }

    /// The escaped text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the underlying escaped text.
    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Escape each item and join with `self` as separator.
    pub fn join<I>(&self, items: I) -> SafeString
    where
        I: IntoIterator,
        I::Item: Into<HtmlText>,
    {
        let mut out = String::new();
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                out.push_str(&self.0);
            }
            out.push_str(escape(item).as_str());
        }
        SafeString(out)
    }

    /// Substitute named placeholders, escaping every argument.
    ///
    /// Placeholders are written `{name}`; `{{` and `}}` emit literal braces.
    /// Positional placeholders do not exist — only named substitution is
    /// escape-safe, so the API does not offer anything else.
    ///
    /// Returns [`HtmlError`] for malformed patterns or names missing from
    /// `args`; both are programmer errors in the pattern literal.
    pub fn format_named(&self, args: &[(&str, HtmlText)]) -> Result<SafeString, HtmlError> {
        let mut out = String::with_capacity(self.0.len());
        let mut chars = self.0.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    out.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    out.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(ch) => name.push(ch),
                            None => return Err(HtmlError::UnclosedPlaceholder),
                        }
                    }
                    let value = args
                        .iter()
                        .find(|(key, _)| *key == name)
                        .ok_or(HtmlError::UnknownPlaceholder { name })?;
                    out.push_str(escape(value.1.clone()).as_str());
                }
                '}' => return Err(HtmlError::StrayBrace),
                other => out.push(other),
            }
        }
        Ok(SafeString(out))
    }
}

impl fmt::Display for SafeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ---------------------------------------------------------------------------
// Concatenation — raw operands are escaped first, in either order
// ---------------------------------------------------------------------------

impl<T: Into<HtmlText>> Add<T> for SafeString {
    type Output = SafeString;

    fn add(self, rhs: T) -> SafeString {
        SafeString(self.0 + escape(rhs).as_str())
    }
}

impl Add<SafeString> for &str {
    type Output = SafeString;

    fn add(self, rhs: SafeString) -> SafeString {
        SafeString(escape(self).0 + rhs.0.as_str())
    }
}

impl Add<SafeString> for String {
    type Output = SafeString;

    fn add(self, rhs: SafeString) -> SafeString {
        SafeString(escape(self).0 + rhs.0.as_str())
    }
}

// ---------------------------------------------------------------------------
// Repetition — the count is a usize, so a non-integer or negative count is
// a compile error rather than a runtime type error
// ---------------------------------------------------------------------------

impl Mul<usize> for SafeString {
    type Output = SafeString;

    fn mul(self, count: usize) -> SafeString {
        SafeString(self.0.repeat(count))
    }
}

impl Mul<usize> for &SafeString {
    type Output = SafeString;

    fn mul(self, count: usize) -> SafeString {
        SafeString(self.0.repeat(count))
    }
}

// ---------------------------------------------------------------------------
// Comparisons against raw text — the other operand is escaped first, so a
// SafeString compares equal to its own unescaped source text
// ---------------------------------------------------------------------------

impl PartialEq<str> for SafeString {
    fn eq(&self, other: &str) -> bool {
        self.0 == escape(other).0
    }
}

impl PartialEq<&str> for SafeString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == escape(*other).0
    }
}

impl PartialEq<String> for SafeString {
    fn eq(&self, other: &String) -> bool {
        self.0 == escape(other.as_str()).0
    }
}

impl PartialEq<SafeString> for str {
    fn eq(&self, other: &SafeString) -> bool {
        escape(self).0 == other.0
    }
}

impl PartialEq<SafeString> for &str {
    fn eq(&self, other: &SafeString) -> bool {
        escape(*self).0 == other.0
    }
}

impl PartialEq<SafeString> for String {
    fn eq(&self, other: &SafeString) -> bool {
        escape(self.as_str()).0 == other.0
    }
}

impl PartialOrd<str> for SafeString {
    fn partial_cmp(&self, other: &str) -> Option<Ordering> {
        Some(self.0.cmp(&escape(other).0))
    }
}

impl PartialOrd<&str> for SafeString {
    fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
        Some(self.0.cmp(&escape(*other).0))
    }
}

impl PartialOrd<String> for SafeString {
    fn partial_cmp(&self, other: &String) -> Option<Ordering> {
        Some(self.0.cmp(&escape(other.as_str()).0))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
