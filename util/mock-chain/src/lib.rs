//! In-memory transaction snapshot backing the [`Loader`] trait.
//!
//! Field bytes are produced with `ckb-types`, so what a reader sees here is
//! byte-for-byte what the chain encodings produce (Molecule serialization
//! and CKB blake2b-256 hashes included). Every primitive load is counted,
//! which is what lets tests pin down how many boundary crossings an
//! operation costs.

use ckb_script_reader::{CellField, InputField, Loader, RawRead, ReaderError, Result, Source, Target};

use ckb_types::bytes::Bytes;
use ckb_types::core::Capacity;
use ckb_types::packed::{Byte32, CellInput, CellOutput, Header, Script};
use ckb_types::prelude::*;

use std::sync::atomic::{AtomicUsize, Ordering};

/// A cell as the snapshot sees it: the output plus its data blob.
#[derive(Clone)]
pub struct MockCell {
    pub output: CellOutput,
    pub data: Bytes,
}

impl MockCell {
    pub fn new(output: CellOutput, data: Bytes) -> Self {
        MockCell { output, data }
    }
}

/// A consumed input together with the cell it consumes.
#[derive(Clone)]
pub struct MockInput {
    pub input: CellInput,
    pub cell: MockCell,
}

impl MockInput {
    pub fn new(input: CellInput, cell: MockCell) -> Self {
        MockInput { input, cell }
    }
}

/// One immutable transaction snapshot.
///
/// Group membership is recorded as index lists into the absolute input and
/// output collections, the same remapping the VM applies for the
/// group-relative sources. Header-by-consumed-cell association is not
/// modeled; header reads resolve against header deps only.
#[derive(Default)]
pub struct MockTransaction {
    tx_hash: Byte32,
    script: Script,
    inputs: Vec<MockInput>,
    outputs: Vec<MockCell>,
    cell_deps: Vec<MockCell>,
    header_deps: Vec<Header>,
    witnesses: Vec<Bytes>,
    group_inputs: Vec<usize>,
    group_outputs: Vec<usize>,
    loads: AtomicUsize,
}

impl MockTransaction {
    pub fn add_input(&mut self, input: MockInput, in_group: bool) -> usize {
        let index = self.inputs.len();
        if in_group {
            self.group_inputs.push(index);
        }
        self.inputs.push(input);
        index
    }

    pub fn add_output(&mut self, cell: MockCell, in_group: bool) -> usize {
        let index = self.outputs.len();
        if in_group {
            self.group_outputs.push(index);
        }
        self.outputs.push(cell);
        index
    }

    pub fn add_cell_dep(&mut self, cell: MockCell) -> usize {
        self.cell_deps.push(cell);
        self.cell_deps.len() - 1
    }

    pub fn add_header_dep(&mut self, header: Header) -> usize {
        self.header_deps.push(header);
        self.header_deps.len() - 1
    }

    pub fn add_witness(&mut self, witness: Bytes) -> usize {
        self.witnesses.push(witness);
        self.witnesses.len() - 1
    }

    pub fn set_tx_hash(&mut self, tx_hash: Byte32) {
        self.tx_hash = tx_hash;
    }

    pub fn set_script(&mut self, script: Script) {
        self.script = script;
    }

    /// Number of primitive loads served so far.
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }

    pub fn reset_loads(&self) {
        self.loads.store(0, Ordering::Relaxed);
    }

    fn cell_at(&self, source: Source, index: u64) -> Result<&MockCell> {
        let index = index as usize;
        match source {
            Source::Input => self.inputs.get(index).map(|input| &input.cell),
            Source::Output => self.outputs.get(index),
            Source::CellDep => self.cell_deps.get(index),
            Source::GroupInput => self
                .group_inputs
                .get(index)
                .and_then(|&absolute| self.inputs.get(absolute))
                .map(|input| &input.cell),
            Source::GroupOutput => self
                .group_outputs
                .get(index)
                .and_then(|&absolute| self.outputs.get(absolute)),
            Source::HeaderDep => None,
        }
        .ok_or(ReaderError::IndexOutOfBound)
    }

    fn input_at(&self, source: Source, index: u64) -> Result<&MockInput> {
        let index = index as usize;
        match source {
            Source::Input => self.inputs.get(index),
            Source::GroupInput => self
                .group_inputs
                .get(index)
                .and_then(|&absolute| self.inputs.get(absolute)),
            _ => None,
        }
        .ok_or(ReaderError::IndexOutOfBound)
    }

    // Full bytes of the addressed item; windowing happens in `raw_read`.
    fn resolve(&self, target: &Target) -> Result<Vec<u8>> {
        match *target {
            Target::Cell { source, index } => {
                Ok(self.cell_at(source, index)?.output.as_slice().to_vec())
            }
            Target::CellField {
                source,
                index,
                field,
            } => cell_field_bytes(self.cell_at(source, index)?, field),
            Target::CellData { source, index } => Ok(self.cell_at(source, index)?.data.to_vec()),
            Target::Input { source, index } => {
                Ok(self.input_at(source, index)?.input.as_slice().to_vec())
            }
            Target::InputField {
                source,
                index,
                field,
            } => {
                let input = &self.input_at(source, index)?.input;
                Ok(match field {
                    InputField::OutPoint => input.previous_output().as_slice().to_vec(),
                    InputField::Since => input.since().as_slice().to_vec(),
                })
            }
            Target::Header { source, index } => match source {
                Source::HeaderDep => self
                    .header_deps
                    .get(index as usize)
                    .map(|header| header.as_slice().to_vec())
                    .ok_or(ReaderError::IndexOutOfBound),
                _ => Err(ReaderError::IndexOutOfBound),
            },
            Target::Witness { source, index } => {
                let absolute = match source {
                    Source::Input | Source::Output => index as usize,
                    Source::GroupInput => *self
                        .group_inputs
                        .get(index as usize)
                        .ok_or(ReaderError::IndexOutOfBound)?,
                    Source::GroupOutput => *self
                        .group_outputs
                        .get(index as usize)
                        .ok_or(ReaderError::IndexOutOfBound)?,
                    _ => return Err(ReaderError::IndexOutOfBound),
                };
                self.witnesses
                    .get(absolute)
                    .map(|witness| witness.to_vec())
                    .ok_or(ReaderError::IndexOutOfBound)
            }
            Target::Script => Ok(self.script.as_slice().to_vec()),
            Target::TxHash => Ok(self.tx_hash.as_slice().to_vec()),
            Target::ScriptHash => Ok(self.script.calc_script_hash().as_slice().to_vec()),
        }
    }
}

impl Loader for MockTransaction {
    fn raw_read(&self, target: &Target, buf: &mut [u8], offset: u64) -> Result<RawRead> {
        self.loads.fetch_add(1, Ordering::Relaxed);
        let bytes = self.resolve(target)?;
        let total = bytes.len();
        let offset = offset as usize;
        let written = if offset >= total {
            0
        } else {
            (total - offset).min(buf.len())
        };
        if written > 0 {
            buf[..written].copy_from_slice(&bytes[offset..offset + written]);
        }
        log::trace!(
            "load {:?} offset {}: {}/{} bytes",
            target,
            offset,
            written,
            total
        );
        Ok(RawRead { written, total })
    }

    fn debug(&self, message: &str) {
        log::debug!("script debug: {}", message);
    }
}

fn cell_field_bytes(cell: &MockCell, field: CellField) -> Result<Vec<u8>> {
    let bytes = match field {
        CellField::Capacity => cell.output.capacity().as_slice().to_vec(),
        CellField::DataHash => CellOutput::calc_data_hash(&cell.data).as_slice().to_vec(),
        CellField::Lock => cell.output.lock().as_slice().to_vec(),
        CellField::LockHash => cell.output.lock().calc_script_hash().as_slice().to_vec(),
        CellField::Type => cell
            .output
            .type_()
            .to_opt()
            .ok_or(ReaderError::ItemMissing)?
            .as_slice()
            .to_vec(),
        CellField::TypeHash => cell
            .output
            .type_()
            .to_opt()
            .ok_or(ReaderError::ItemMissing)?
            .calc_script_hash()
            .as_slice()
            .to_vec(),
        CellField::OccupiedCapacity => {
            let data_capacity = Capacity::bytes(cell.data.len()).expect("data size as capacity");
            cell.output
                .occupied_capacity(data_capacity)
                .expect("occupied capacity overflow")
                .as_u64()
                .to_le_bytes()
                .to_vec()
        }
    };
    Ok(bytes)
}

#[cfg(test)]
mod test {
    use super::*;

    use ckb_hash::blake2b_256;
    use ckb_types::core::ScriptHashType;
    use ckb_types::H256;

    fn lock_script(arg: u8) -> Script {
        Script::new_builder()
            .code_hash(H256([7u8; 32]).pack())
            .hash_type(ScriptHashType::Data.into())
            .args(Bytes::from(vec![arg]).pack())
            .build()
    }

    fn plain_cell(capacity: u64, data: &[u8]) -> MockCell {
        let output = CellOutput::new_builder()
            .capacity(Capacity::shannons(capacity).pack())
            .lock(lock_script(0))
            .build();
        MockCell::new(output, Bytes::copy_from_slice(data))
    }

    #[test]
    fn capacity_bytes_are_little_endian() {
        let cell = plain_cell(500, b"");
        assert_eq!(
            cell_field_bytes(&cell, CellField::Capacity).unwrap(),
            500u64.to_le_bytes()
        );
    }

    #[test]
    fn script_hashes_are_ckb_blake2b() {
        let lock = lock_script(1);
        let output = CellOutput::new_builder().lock(lock.clone()).build();
        let cell = MockCell::new(output, Bytes::new());
        assert_eq!(
            cell_field_bytes(&cell, CellField::LockHash).unwrap(),
            blake2b_256(lock.as_slice())
        );
    }

    #[test]
    fn missing_type_script_is_item_missing() {
        let cell = plain_cell(100, b"");
        assert_eq!(
            cell_field_bytes(&cell, CellField::Type),
            Err(ReaderError::ItemMissing)
        );
        assert_eq!(
            cell_field_bytes(&cell, CellField::TypeHash),
            Err(ReaderError::ItemMissing)
        );
    }

    #[test]
    fn empty_data_hash_is_all_zero() {
        let cell = plain_cell(100, b"");
        assert_eq!(
            cell_field_bytes(&cell, CellField::DataHash).unwrap(),
            [0u8; 32]
        );
    }

    #[test]
    fn occupied_capacity_counts_fields_and_data() {
        let output = CellOutput::new_builder()
            .capacity(Capacity::shannons(100).pack())
            .lock(lock_script(1))
            .build();
        let cell = MockCell::new(output, Bytes::copy_from_slice(b"xy"));
        // capacity field (8) + code hash (32) + hash type (1) + args (1) + data (2)
        let expected = Capacity::bytes(44).unwrap().as_u64();
        assert_eq!(
            cell_field_bytes(&cell, CellField::OccupiedCapacity).unwrap(),
            expected.to_le_bytes()
        );
    }

    #[test]
    fn group_indices_remap() {
        let mut tx = MockTransaction::default();
        tx.add_output(plain_cell(100, b"first"), false);
        tx.add_output(plain_cell(200, b"second"), true);
        let grouped = tx.cell_at(Source::GroupOutput, 0).unwrap();
        assert_eq!(grouped.data, Bytes::copy_from_slice(b"second"));
        assert_eq!(
            tx.cell_at(Source::GroupOutput, 1).err(),
            Some(ReaderError::IndexOutOfBound)
        );
    }
}
