//! Email addresses in `local@domain` and `Name <local@domain>` form.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use super::{Detected, Interpreter};
use crate::Kind;

/// RFC 5322 dot-atom: atext runs separated by single dots.
static DOT_ATOM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*$")
        .unwrap()
});

/// Display-name words: atext plus the obsolete `.` allowed in phrases.
static PHRASE_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~.-]+$").unwrap());

/// A parsed email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EmailAddress {
    /// Display name, unquoted
    pub name: Option<String>,
    /// Local part, as written (quoted local parts keep their quotes)
    pub local: String,
    /// Domain part
    pub domain: String,
}

impl EmailAddress {
    /// Parse an address.
    ///
    /// Accepts a bare addr-spec (`max@example.com`) or a name-addr
    /// (`Max Musterman <max@example.com>`, `"Musterman, Max" <max@example.com>`,
    /// `<max@example.com>`). Surrounding whitespace is ignored. Only ASCII
    /// is accepted.
    ///
    /// # Examples
    /// ```
    /// use inputtype::EmailAddress;
    ///
    /// let email = EmailAddress::parse("Max Musterman <max@musterman.com>").unwrap();
    /// assert_eq!(email.name.as_deref(), Some("Max Musterman"));
    /// assert_eq!(email.address(), "max@musterman.com");
    /// ```
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() || !input.is_ascii() {
            return None;
        }

        match input.strip_suffix('>') {
            Some(rest) => {
                let open = rest.rfind('<')?;
                let name = parse_display_name(&rest[..open])?;
                let (local, domain) = parse_addr_spec(&rest[open + 1..])?;
                Some(Self {
                    name,
                    local,
                    domain,
                })
            }
            None => {
                let (local, domain) = parse_addr_spec(input)?;
                Some(Self {
                    name: None,
                    local,
                    domain,
                })
            }
        }
    }

    /// Get the `local@domain` form.
    pub fn address(&self) -> String {
        format!("{}@{}", self.local, self.domain)
    }

    /// Get the domain part.
    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "\"{}\" <{}>", name.replace('"', "\\\""), self.address()),
            None => write!(f, "{}", self.address()),
        }
    }
}

/// Parse the display name before `<`. `Some(None)` means no name was given.
fn parse_display_name(s: &str) -> Option<Option<String>> {
    let s = s.trim();
    if s.is_empty() {
        return Some(None);
    }

    if s.starts_with('"') {
        let (name, rest) = parse_quoted_string(s)?;
        if !rest.trim().is_empty() {
            return None;
        }
        return Some(Some(name));
    }

    let words: Vec<&str> = s.split_whitespace().collect();
    if words.iter().all(|w| PHRASE_WORD.is_match(w)) {
        Some(Some(words.join(" ")))
    } else {
        None
    }
}

/// Parse a leading quoted-string, returning its unescaped content and the remainder.
fn parse_quoted_string(s: &str) -> Option<(String, &str)> {
    let body = s.strip_prefix('"')?;
    let mut out = String::new();
    let mut escaped = false;

    for (i, c) in body.char_indices() {
        if escaped {
            out.push(c);
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => return Some((out, &body[i + 1..])),
            c if c == ' ' || c == '\t' || c.is_ascii_graphic() => out.push(c),
            _ => return None,
        }
    }

    None
}

/// Split an addr-spec at its last `@` and check both halves.
fn parse_addr_spec(s: &str) -> Option<(String, String)> {
    let (local, domain) = s.rsplit_once('@')?;

    let local_ok = if local.starts_with('"') {
        matches!(parse_quoted_string(local), Some((content, rest)) if rest.is_empty() && !content.is_empty())
    } else {
        DOT_ATOM.is_match(local)
    };
    if !local_ok {
        return None;
    }

    let domain_ok = DOT_ATOM.is_match(domain) || is_domain_literal(domain);
    if !domain_ok {
        return None;
    }

    Some((local.to_string(), domain.to_string()))
}

/// `[` dtext `]`, e.g. `[192.0.2.1]`.
fn is_domain_literal(s: &str) -> bool {
    match s.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        Some(inner) => {
            !inner.is_empty()
                && inner
                    .bytes()
                    .all(|b| b.is_ascii_graphic() && !matches!(b, b'[' | b']' | b'\\'))
        }
        None => false,
    }
}

/// EmailInterpreter accepts anything [`EmailAddress::parse`] accepts.
pub struct EmailInterpreter;

impl Interpreter for EmailInterpreter {
    fn kind(&self) -> Kind {
        Kind::Email
    }

    fn interpret(&self, input: &str) -> Option<Detected> {
        EmailAddress::parse(input).map(Detected::Email)
    }
}
