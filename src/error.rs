use std::result;

pub type Result<T, E = Error> = result::Result<T, E>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    kind: Kind,
    message: &'static str,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    /// The charset holds this many symbols instead of 64.
    CharsetLength(usize),

    /// The symbol at this position already appears earlier in the charset.
    DuplicateSymbol(usize, char),

    /// Fewer than two bits remain once trailing padding is stripped, so there are no
    /// sentinels to remove.
    MalformedInput,
}

impl Kind {
    pub fn is_invalid_charset(&self) -> bool {
        matches!(self, Kind::CharsetLength(_) | Kind::DuplicateSymbol(..))
    }
}

impl Error {
    pub(crate) fn new(kind: Kind, message: &'static str) -> Self {
        Error { kind, message }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}
