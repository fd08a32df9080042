use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Memory cell value
///
/// Cells are text or integer. `OUT` and `MOV` treat them as text,
/// `ADD` and `CMP` coerce to an integer when they need one.

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Integer(i64),
    Text(String),
}

impl Default for Val {
    fn default() -> Val {
        Val::Integer(0)
    }
}

impl Val {
    /// Literals are kept as written, `007` stays `007` until something
    /// asks for an integer. A quoted literal loses its surrounding quotes.
    pub fn from_literal(s: &str) -> Val {
        let unquoted = if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
            &s[1..s.len() - 1]
        } else {
            s
        };
        Val::Text(unquoted.to_string())
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Val::Integer(0))
    }

    pub fn to_integer(&self) -> Result<i64> {
        match self {
            Val::Integer(n) => Ok(*n),
            Val::Text(s) => match s.trim().parse::<i64>() {
                Ok(n) => Ok(n),
                Err(_) => Err(error!(TypeMismatch; &format!("{:?} IS NOT AN INTEGER", s))),
            },
        }
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Val {
        Val::Text(s.to_string())
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Integer(n) => write!(f, "{}", n),
            Val::Text(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_literal_keeps_digits() {
        assert_eq!(Val::from_literal("007"), Val::Text("007".into()));
        assert_eq!(Val::from_literal("+5"), Val::Text("+5".into()));
        assert_eq!(Val::from_literal("007").to_integer().unwrap(), 7);
        assert_eq!(Val::from_literal("-12").to_integer().unwrap(), -12);
    }

    #[test]
    fn test_literal_text() {
        assert_eq!(Val::from_literal("hello"), Val::Text("hello".into()));
        assert_eq!(Val::from_literal(r#""reached""#), Val::Text("reached".into()));
        assert_eq!(Val::from_literal(r#"""#), Val::Text(r#"""#.into()));
    }

    #[test]
    fn test_text_coerces() {
        assert_eq!(Val::from(" 42 ").to_integer().unwrap(), 42);
        let e = Val::from("abc").to_integer().unwrap_err();
        assert_eq!(e.code(), ErrorCode::TypeMismatch);
    }

    #[test]
    fn test_zero() {
        assert!(Val::default().is_zero());
        assert!(!Val::from("0").is_zero());
        assert!(!Val::from_literal("0").is_zero());
    }
}
