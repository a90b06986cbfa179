use std::path::PathBuf;
use thiserror::Error;

use crate::descriptor::Flag;

/// Errors that can occur while loading or transforming an opcode dataset.
///
/// Every variant is fatal for the whole run: the generated table is trusted
/// verbatim by the program that includes it, so nothing is emitted once one
/// of these has been raised.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("malformed dataset ({context}): {reason}")]
    MalformedDataset { context: String, reason: String },
    #[error("unrecognized flag symbol {symbol:?} for flag {flag} in opcode {code}")]
    UnrecognizedFlagSymbol {
        code: String,
        flag: Flag,
        symbol: String,
    },
    #[error("invalid option `{option}`: {reason}")]
    InvalidOption {
        option: &'static str,
        reason: String,
    },
    #[error("failed to read dataset from {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenError {
    pub(crate) fn malformed(context: impl Into<String>, reason: impl ToString) -> Self {
        Self::MalformedDataset {
            context: context.into(),
            reason: reason.to_string(),
        }
    }
}
