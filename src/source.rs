use crate::constants;

use serde::{Deserialize, Serialize};

/// Transaction-relative location classes a read can address.
///
/// `GroupInput` and `GroupOutput` index within the cells of the current
/// script's verification group instead of the whole transaction; outside a
/// group context the primitive layer reports them as missing or out of
/// bound, nothing is detected earlier.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Source {
    Input,
    Output,
    CellDep,
    HeaderDep,
    GroupInput,
    GroupOutput,
}

impl Source {
    /// Raw code passed to the VM boundary.
    pub const fn code(self) -> u64 {
        match self {
            Source::Input => constants::SOURCE_INPUT,
            Source::Output => constants::SOURCE_OUTPUT,
            Source::CellDep => constants::SOURCE_CELL_DEP,
            Source::HeaderDep => constants::SOURCE_HEADER_DEP,
            Source::GroupInput => constants::SOURCE_GROUP_INPUT,
            Source::GroupOutput => constants::SOURCE_GROUP_OUTPUT,
        }
    }

    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            constants::SOURCE_INPUT => Some(Source::Input),
            constants::SOURCE_OUTPUT => Some(Source::Output),
            constants::SOURCE_CELL_DEP => Some(Source::CellDep),
            constants::SOURCE_HEADER_DEP => Some(Source::HeaderDep),
            constants::SOURCE_GROUP_INPUT => Some(Source::GroupInput),
            constants::SOURCE_GROUP_OUTPUT => Some(Source::GroupOutput),
            _ => None,
        }
    }
}

/// Cell sub-field selectors.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum CellField {
    Capacity,
    DataHash,
    Lock,
    LockHash,
    Type,
    TypeHash,
    OccupiedCapacity,
}

impl CellField {
    pub const fn code(self) -> u64 {
        match self {
            CellField::Capacity => constants::CELL_FIELD_CAPACITY,
            CellField::DataHash => constants::CELL_FIELD_DATA_HASH,
            CellField::Lock => constants::CELL_FIELD_LOCK,
            CellField::LockHash => constants::CELL_FIELD_LOCK_HASH,
            CellField::Type => constants::CELL_FIELD_TYPE,
            CellField::TypeHash => constants::CELL_FIELD_TYPE_HASH,
            CellField::OccupiedCapacity => constants::CELL_FIELD_OCCUPIED_CAPACITY,
        }
    }
}

/// Input sub-field selectors.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum InputField {
    OutPoint,
    Since,
}

impl InputField {
    pub const fn code(self) -> u64 {
        match self {
            InputField::OutPoint => constants::INPUT_FIELD_OUT_POINT,
            InputField::Since => constants::INPUT_FIELD_SINCE,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::SOURCE_GROUP_FLAG;

    #[test]
    fn source_code_round_trip() {
        for source in [
            Source::Input,
            Source::Output,
            Source::CellDep,
            Source::HeaderDep,
            Source::GroupInput,
            Source::GroupOutput,
        ] {
            assert_eq!(Source::from_code(source.code()), Some(source));
        }
        assert_eq!(Source::from_code(0), None);
        assert_eq!(Source::from_code(SOURCE_GROUP_FLAG | 3), None);
    }

    #[test]
    fn group_sources_carry_the_flag() {
        assert_eq!(Source::GroupInput.code() & SOURCE_GROUP_FLAG, SOURCE_GROUP_FLAG);
        assert_eq!(Source::GroupOutput.code() & SOURCE_GROUP_FLAG, SOURCE_GROUP_FLAG);
        assert_eq!(Source::Input.code() & SOURCE_GROUP_FLAG, 0);
        assert_eq!(Source::GroupOutput.code(), 0x0100_0000_0000_0002);
    }

    #[test]
    fn field_codes_match_the_abi() {
        assert_eq!(CellField::Capacity.code(), 0);
        assert_eq!(CellField::OccupiedCapacity.code(), 6);
        assert_eq!(InputField::OutPoint.code(), 0);
        assert_eq!(InputField::Since.code(), 1);
    }
}
