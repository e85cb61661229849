use crate::constants;
use crate::source::{CellField, InputField, Source};

use serde::{Deserialize, Serialize};

/// Where a read points: the addressing triple of one logical byte-string
/// within the transaction's field space.
///
/// Building a target does no I/O and no validation; a dangling one only
/// surfaces on first use. Each variant maps to exactly one load primitive.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Target {
    /// A whole serialized cell.
    Cell { source: Source, index: u64 },
    /// One sub-field of a cell.
    CellField {
        source: Source,
        index: u64,
        field: CellField,
    },
    /// The data blob attached to a cell.
    CellData { source: Source, index: u64 },
    /// A whole serialized input.
    Input { source: Source, index: u64 },
    /// One sub-field of an input.
    InputField {
        source: Source,
        index: u64,
        field: InputField,
    },
    /// A whole serialized header.
    Header { source: Source, index: u64 },
    /// A whole witness byte-string.
    Witness { source: Source, index: u64 },
    /// The currently executing script.
    Script,
    /// The 32-byte hash of the running transaction.
    TxHash,
    /// The 32-byte hash of the currently executing script.
    ScriptHash,
}

impl Target {
    /// Syscall id the VM boundary dispatches this target to.
    pub const fn syscall_id(&self) -> u64 {
        match self {
            Target::Cell { .. } => constants::SYS_LOAD_CELL,
            Target::CellField { .. } => constants::SYS_LOAD_CELL_BY_FIELD,
            Target::CellData { .. } => constants::SYS_LOAD_CELL_DATA,
            Target::Input { .. } => constants::SYS_LOAD_INPUT,
            Target::InputField { .. } => constants::SYS_LOAD_INPUT_BY_FIELD,
            Target::Header { .. } => constants::SYS_LOAD_HEADER,
            Target::Witness { .. } => constants::SYS_LOAD_WITNESS,
            Target::Script => constants::SYS_LOAD_SCRIPT,
            Target::TxHash => constants::SYS_LOAD_TX_HASH,
            Target::ScriptHash => constants::SYS_LOAD_SCRIPT_HASH,
        }
    }
}
