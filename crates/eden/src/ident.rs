//! SQL identifier checks for table and column names.
//!
//! [`Ident`] accepts dotted names whose parts are either bare words
//! (`[A-Za-z_][A-Za-z0-9_$]*`) or quoted. Both ANSI double quotes and MySQL
//! backticks are understood; the quote character is escaped by doubling it.
//!
//! # Example
//! ```
//! use eden::Ident;
//!
//! let t = Ident::parse("shop.`order`")?;
//! assert_eq!(t.to_sql(), "shop.`order`");
//! # Ok::<(), eden::EdenError>(())
//! ```

use crate::error::{EdenError, EdenResult};

/// Quote style of a quoted identifier part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    /// `"name"`
    Double,
    /// `` `name` ``
    Backtick,
}

impl Quote {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '"' => Some(Self::Double),
            '`' => Some(Self::Backtick),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Self::Double => '"',
            Self::Backtick => '`',
        }
    }
}

/// A part of a SQL identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentPart {
    /// Unquoted identifier: must match `[A-Za-z_][A-Za-z0-9_$]*`.
    Bare(String),
    /// Quoted identifier: any characters except NUL.
    Quoted(Quote, String),
}

/// A SQL identifier (column, table, or `schema.table`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub parts: Vec<IdentPart>,
}

impl Ident {
    /// Parse an identifier string.
    ///
    /// - Dotted: `schema.table.column`
    /// - Quoted: `"CamelCase"` or `` `order` ``
    /// - Mixed: ``shop.`order`.id``
    pub fn parse(s: &str) -> EdenResult<Self> {
        if s.is_empty() {
            return Err(EdenError::validation("Identifier cannot be empty"));
        }
        if s.contains('\0') {
            return Err(EdenError::validation(
                "Identifier cannot contain NUL character",
            ));
        }

        let mut parts = Vec::new();
        let mut chars = s.chars().peekable();

        while chars.peek().is_some() {
            if !parts.is_empty() {
                match chars.next() {
                    Some('.') => {
                        if chars.peek().is_none() {
                            return Err(EdenError::validation(format!(
                                "Trailing '.' in identifier '{s}'"
                            )));
                        }
                    }
                    Some(c) => {
                        return Err(EdenError::validation(format!(
                            "Expected '.' between identifier parts in '{s}', got '{c}'"
                        )));
                    }
                    None => break,
                }
            }

            if let Some(quote) = chars.peek().copied().and_then(Quote::from_char) {
                chars.next();
                let q = quote.as_char();
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some(c) if c == q => {
                            if chars.peek() == Some(&q) {
                                chars.next();
                                name.push(q);
                            } else {
                                break;
                            }
                        }
                        Some(c) => name.push(c),
                        None => {
                            return Err(EdenError::validation(format!(
                                "Unclosed quoted identifier in '{s}'"
                            )));
                        }
                    }
                }
                if name.is_empty() {
                    return Err(EdenError::validation("Empty quoted identifier"));
                }
                parts.push(IdentPart::Quoted(quote, name));
                continue;
            }

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
                    return Err(EdenError::validation(format!(
                        "Invalid character '{c}' in identifier '{s}'"
                    )));
                }
                name.push(c);
                chars.next();
            }
            if name.is_empty() {
                return Err(EdenError::validation(format!(
                    "Empty identifier segment in '{s}'"
                )));
            }
            parts.push(IdentPart::Bare(name));
        }

        Ok(Self { parts })
    }

    /// Render the identifier as SQL.
    pub fn to_sql(&self) -> String {
        let mut out = String::new();
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            match part {
                IdentPart::Bare(s) => out.push_str(s),
                IdentPart::Quoted(quote, s) => {
                    let q = quote.as_char();
                    out.push(q);
                    for ch in s.chars() {
                        if ch == q {
                            out.push(q);
                        }
                        out.push(ch);
                    }
                    out.push(q);
                }
            }
        }
        out
    }
}
