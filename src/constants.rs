//! Raw numbers shared with the VM boundary.
//!
//! These are the values the syscall layer actually sees; everything else in
//! the crate speaks typed enums and converts at the edge.

/// Syscall ids, one per load primitive.
pub const SYS_LOAD_SCRIPT: u64 = 2052;
pub const SYS_LOAD_TX_HASH: u64 = 2061;
pub const SYS_LOAD_SCRIPT_HASH: u64 = 2062;
pub const SYS_LOAD_CELL: u64 = 2071;
pub const SYS_LOAD_HEADER: u64 = 2072;
pub const SYS_LOAD_INPUT: u64 = 2073;
pub const SYS_LOAD_WITNESS: u64 = 2074;
pub const SYS_LOAD_CELL_BY_FIELD: u64 = 2081;
pub const SYS_LOAD_INPUT_BY_FIELD: u64 = 2083;
pub const SYS_LOAD_CELL_DATA: u64 = 2092;
pub const SYS_DEBUG: u64 = 2177;

/// Return codes of the load primitives. `SUCCESS` is never an error value.
pub const SUCCESS: u64 = 0;
pub const INDEX_OUT_OF_BOUND: u64 = 1;
pub const ITEM_MISSING: u64 = 2;

/// Source codes. The group sources index within the current script's
/// verification group and carry a reserved high-bit flag, keeping them
/// numerically apart from the plain four.
pub const SOURCE_INPUT: u64 = 1;
pub const SOURCE_OUTPUT: u64 = 2;
pub const SOURCE_CELL_DEP: u64 = 3;
pub const SOURCE_HEADER_DEP: u64 = 4;
pub const SOURCE_GROUP_FLAG: u64 = 0x0100_0000_0000_0000;
pub const SOURCE_GROUP_INPUT: u64 = SOURCE_GROUP_FLAG | SOURCE_INPUT;
pub const SOURCE_GROUP_OUTPUT: u64 = SOURCE_GROUP_FLAG | SOURCE_OUTPUT;

/// Cell sub-field codes for the load-cell-by-field primitive.
pub const CELL_FIELD_CAPACITY: u64 = 0;
pub const CELL_FIELD_DATA_HASH: u64 = 1;
pub const CELL_FIELD_LOCK: u64 = 2;
pub const CELL_FIELD_LOCK_HASH: u64 = 3;
pub const CELL_FIELD_TYPE: u64 = 4;
pub const CELL_FIELD_TYPE_HASH: u64 = 5;
pub const CELL_FIELD_OCCUPIED_CAPACITY: u64 = 6;

/// Input sub-field codes for the load-input-by-field primitive.
pub const INPUT_FIELD_OUT_POINT: u64 = 0;
pub const INPUT_FIELD_SINCE: u64 = 1;
