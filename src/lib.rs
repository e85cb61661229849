//! Lazy, syscall-minimizing readers over transaction fields for CKB script
//! environments.
//!
//! A script running inside the VM cannot see the transaction it validates;
//! it queries structured fields (cell capacity, lock script, witness bytes,
//! header bytes, input metadata, cell data) through a narrow load primitive
//! that copies a byte range into a caller-supplied buffer and reports the
//! item's total length. Every such call crosses an expensive boundary, so
//! the [`Reader`] family keeps the count down: a length probe is one call,
//! and a whole-item read is at most two.
//!
//! Readers return raw bytes or an absence signal; decoding them (Molecule
//! or otherwise) is the caller's business.

pub mod constants;
pub mod error;
pub mod loader;
pub mod reader;
pub mod source;
pub mod target;

pub use error::{ReaderError, Result};
pub use loader::{Loader, RawRead};
pub use reader::{debug, load_script, load_script_hash, load_tx_hash, Reader};
pub use source::{CellField, InputField, Source};
pub use target::Target;
