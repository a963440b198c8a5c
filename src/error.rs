use std::fmt::Debug;

use thiserror::Error;

use crate::opcode::PythonVersion;

#[derive(Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Malformed bytecode at offset {offset}: code stream size({size}) is not a whole number of instructions")]
    MalformedLength { offset: usize, size: usize },

    #[error("Unresolved EXTENDED_ARG chain at offset {offset} (depth {depth}, at most {max} prefixes allowed)", max = crate::bytecode::MAX_EXTENDED_ARGS)]
    UnresolvedPrefixChain { offset: usize, depth: usize },

    #[error("{opcode}: {cache_entries} inline cache entries at offset {offset} overflow code stream size({size})")]
    TruncatedCachePadding {
        offset: usize,
        opcode: &'static str,
        cache_entries: u8,
        size: usize,
    },

    #[error("Unassigned opcode {opcode} at offset {offset} for Python {version}")]
    UnassignedOpcode {
        offset: usize,
        opcode: u8,
        version: PythonVersion,
    },

    #[error("{opcode} at offset {offset} cannot start an instruction")]
    MisplacedStructuralWord { offset: usize, opcode: &'static str },

    #[error("{opcode} cannot be assembled (output offset {offset}): it is emitted by the encoder only")]
    UnencodableOpcode { offset: usize, opcode: &'static str },

    #[error("Unsupported Python version: {0}")]
    UnsupportedVersion(String),
}

#[macro_export]
macro_rules! decode_err {
    ($name:ident { $($arg:tt)* }) => {
        Err($crate::error::DecodeError::$name { $($arg)* })
    };
    ($name:ident, $arg1:literal, $($arg:tt)*) => {
        Err($crate::error::DecodeError::$name(format!($arg1, $($arg)*)))
    };
    ($name:ident, $($arg:tt)*) => {
        Err($crate::error::DecodeError::$name($($arg)*))
    };
}

impl DecodeError {
    /// Byte offset the error was detected at, if it refers to a position
    /// inside a code stream.
    pub fn offset(&self) -> Option<usize> {
        match self {
            DecodeError::MalformedLength { offset, .. }
            | DecodeError::UnresolvedPrefixChain { offset, .. }
            | DecodeError::TruncatedCachePadding { offset, .. }
            | DecodeError::UnassignedOpcode { offset, .. }
            | DecodeError::MisplacedStructuralWord { offset, .. }
            | DecodeError::UnencodableOpcode { offset, .. } => Some(*offset),
            DecodeError::UnsupportedVersion(_) => None,
        }
    }
}

impl Debug for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
