use crate::constants;

use derive_more::Display;
use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, ReaderError>;

/// Failures reported by the load primitive.
///
/// Both kinds are deterministic functions of the transaction snapshot and
/// the addressed target, so neither is ever worth retrying. Absence folding
/// happens only in `Reader::exists`/`Reader::total_len`; everywhere else
/// both kinds propagate unchanged.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Display, Hash, PartialEq, Eq)]
pub enum ReaderError {
    /// The index is past the end of the addressed source collection. A
    /// script logic defect, never an absence signal.
    #[display(fmt = "index out of bound")]
    IndexOutOfBound,

    /// The item or sub-field does not exist for an otherwise valid index,
    /// e.g. the type script of a cell that has none.
    #[display(fmt = "item missing")]
    ItemMissing,
}

impl ReaderError {
    /// The return code the VM boundary reports for this failure.
    pub fn code(self) -> u64 {
        match self {
            ReaderError::IndexOutOfBound => constants::INDEX_OUT_OF_BOUND,
            ReaderError::ItemMissing => constants::ITEM_MISSING,
        }
    }

    /// Map a raw return code back; `None` for success or unknown codes.
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            constants::INDEX_OUT_OF_BOUND => Some(ReaderError::IndexOutOfBound),
            constants::ITEM_MISSING => Some(ReaderError::ItemMissing),
            _ => None,
        }
    }
}

impl std::error::Error for ReaderError {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn code_round_trip() {
        for err in [ReaderError::IndexOutOfBound, ReaderError::ItemMissing] {
            assert_eq!(ReaderError::from_code(err.code()), Some(err));
        }
        assert_eq!(ReaderError::from_code(crate::constants::SUCCESS), None);
        assert_eq!(ReaderError::from_code(99), None);
    }
}
