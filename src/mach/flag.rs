use std::cmp::Ordering;

/// ## Comparison flag
///
/// Written by `CMP`, read by `JG` and `JL`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Less,
    Equal,
    Greater,
}

impl Default for Flag {
    fn default() -> Flag {
        Flag::Equal
    }
}

impl From<Ordering> for Flag {
    fn from(ordering: Ordering) -> Flag {
        match ordering {
            Ordering::Less => Flag::Less,
            Ordering::Equal => Flag::Equal,
            Ordering::Greater => Flag::Greater,
        }
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Flag::*;
        match self {
            Less => write!(f, "LESS"),
            Equal => write!(f, "EQUAL"),
            Greater => write!(f, "GREATER"),
        }
    }
}
