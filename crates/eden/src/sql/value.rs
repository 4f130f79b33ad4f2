//! Right-hand side values for assignments and comparisons.

use std::fmt;

/// A value rendered into SQL text.
///
/// `Raw` text is emitted verbatim, so it may be a placeholder (`?`, `:name`),
/// an expression (`NOW()`, `hits + 1`) or a literal the caller already quoted.
/// Use [`SqlValue::quoted`] to turn arbitrary text into a string literal.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// Verbatim SQL text
    Raw(String),
    /// Integer literal
    Int(i64),
    /// Floating point literal
    Float(f64),
    /// `NULL`
    Null,
}

impl SqlValue {
    /// Single-quoted string literal; embedded `'` are doubled.
    pub fn quoted(text: &str) -> Self {
        let mut out = String::with_capacity(text.len() + 2);
        out.push('\'');
        for ch in text.chars() {
            if ch == '\'' {
                out.push('\'');
            }
            out.push(ch);
        }
        out.push('\'');
        SqlValue::Raw(out)
    }

    /// Verbatim SQL expression.
    pub fn raw(expr: impl Into<String>) -> Self {
        SqlValue::Raw(expr.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// `false` only for a `NaN` or infinite float, which has no SQL literal.
    pub fn is_finite(&self) -> bool {
        match self {
            SqlValue::Float(n) => n.is_finite(),
            _ => true,
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Raw(s) => f.write_str(s),
            SqlValue::Int(n) => write!(f, "{n}"),
            SqlValue::Float(n) => write!(f, "{n}"),
            SqlValue::Null => f.write_str("NULL"),
        }
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Raw(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Raw(value)
    }
}

impl From<&String> for SqlValue {
    fn from(value: &String) -> Self {
        SqlValue::Raw(value.clone())
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for SqlValue {
                fn from(value: $t) -> Self {
                    SqlValue::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for SqlValue {
    fn from(value: f32) -> Self {
        SqlValue::Float(f64::from(value))
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Float(value)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(SqlValue::Null, Into::into)
    }
}
