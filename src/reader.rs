use crate::error::{ReaderError, Result};
use crate::loader::Loader;
use crate::source::{CellField, InputField, Source};
use crate::target::Target;

/// Uniform access to one addressable byte-string of the transaction.
///
/// A reader is a pure descriptor: a target plus the loader it is evaluated
/// against. It owns no buffers and caches nothing; every operation goes back
/// to the live snapshot, and nothing is validated at construction.
pub struct Reader<'a, L> {
    loader: &'a L,
    target: Target,
}

impl<'a, L> Reader<'a, L> {
    /// A whole serialized cell.
    pub fn cell(loader: &'a L, source: Source, index: u64) -> Self {
        Reader {
            loader,
            target: Target::Cell { source, index },
        }
    }

    /// One sub-field of a cell.
    pub fn cell_field(loader: &'a L, source: Source, index: u64, field: CellField) -> Self {
        Reader {
            loader,
            target: Target::CellField {
                source,
                index,
                field,
            },
        }
    }

    /// The data blob attached to a cell.
    pub fn cell_data(loader: &'a L, source: Source, index: u64) -> Self {
        Reader {
            loader,
            target: Target::CellData { source, index },
        }
    }

    /// A whole serialized input.
    pub fn input(loader: &'a L, source: Source, index: u64) -> Self {
        Reader {
            loader,
            target: Target::Input { source, index },
        }
    }

    /// One sub-field of an input.
    pub fn input_field(loader: &'a L, source: Source, index: u64, field: InputField) -> Self {
        Reader {
            loader,
            target: Target::InputField {
                source,
                index,
                field,
            },
        }
    }

    /// A whole serialized header.
    pub fn header(loader: &'a L, source: Source, index: u64) -> Self {
        Reader {
            loader,
            target: Target::Header { source, index },
        }
    }

    /// A whole witness byte-string.
    pub fn witness(loader: &'a L, source: Source, index: u64) -> Self {
        Reader {
            loader,
            target: Target::Witness { source, index },
        }
    }

    /// The currently executing script.
    pub fn script(loader: &'a L) -> Self {
        Reader {
            loader,
            target: Target::Script,
        }
    }

    /// The hash of the running transaction.
    pub fn tx_hash(loader: &'a L) -> Self {
        Reader {
            loader,
            target: Target::TxHash,
        }
    }

    /// The hash of the currently executing script.
    pub fn script_hash(loader: &'a L) -> Self {
        Reader {
            loader,
            target: Target::ScriptHash,
        }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }
}

impl<'a, L: Loader> Reader<'a, L> {
    /// Whether the addressed byte-string exists. A zero-length item exists;
    /// an out-of-bound index is a caller error and propagates.
    pub fn exists(&self) -> Result<bool> {
        match self.probe() {
            Ok(_) => Ok(true),
            Err(ReaderError::ItemMissing) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Total length of the byte-string, `None` when the item is absent.
    pub fn total_len(&self) -> Result<Option<usize>> {
        match self.probe() {
            Ok(total) => Ok(Some(total)),
            Err(ReaderError::ItemMissing) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Read up to `len` bytes starting at `offset` within the byte-string,
    /// in one primitive call. The result is shorter than `len` only at the
    /// true end; an offset past the end yields an empty vector, not an
    /// error. Both failure kinds propagate unchanged.
    pub fn read(&self, offset: u64, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        let raw = self.loader.raw_read(&self.target, &mut buf, offset)?;
        buf.truncate(raw.written);
        Ok(buf)
    }

    /// Read the whole byte-string: one probe for the length, then one
    /// exactly-sized read. An empty item costs a single primitive call.
    pub fn read_all(&self) -> Result<Vec<u8>> {
        let total = self.total_len()?.ok_or(ReaderError::ItemMissing)?;
        if total == 0 {
            return Ok(Vec::new());
        }
        log::trace!("read_all {:?}: {} bytes", self.target, total);
        self.read(0, total)
    }

    // Zero-length read at offset 0; only the reported total is of interest.
    fn probe(&self) -> Result<usize> {
        self.loader
            .raw_read(&self.target, &mut [], 0)
            .map(|raw| raw.total)
    }
}

/// Hash of the running transaction, via the corresponding reader.
pub fn load_tx_hash<L: Loader>(loader: &L) -> Result<Vec<u8>> {
    Reader::tx_hash(loader).read_all()
}

/// Hash of the currently executing script.
pub fn load_script_hash<L: Loader>(loader: &L) -> Result<Vec<u8>> {
    Reader::script_hash(loader).read_all()
}

/// The currently executing script, serialized.
pub fn load_script<L: Loader>(loader: &L) -> Result<Vec<u8>> {
    Reader::script(loader).read_all()
}

/// Forward a message to the VM debug channel.
pub fn debug<L: Loader>(loader: &L, message: &str) {
    loader.debug(message)
}
