use crate::error::Result;
use crate::target::Target;

/// Outcome of one primitive load: how many bytes landed in the destination
/// and how long the addressed byte-string is in full.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawRead {
    pub written: usize,
    pub total: usize,
}

/// The single cross-boundary operation everything above composes. Each call
/// is comparatively expensive, so callers keep the count down.
///
/// Implementations must be read-only and idempotent: the transaction
/// snapshot cannot change during one script invocation, so equal targets
/// yield equal lengths and equal bytes.
pub trait Loader {
    /// Copy up to `buf.len()` bytes of the addressed byte-string, starting
    /// at `offset` within it, into `buf`.
    ///
    /// `offset >= total` writes nothing but still reports the total, which
    /// is how a zero-length probe (`&mut []`, offset 0) discovers lengths.
    /// Fails with `IndexOutOfBound` when `index` exceeds the entry count of
    /// the source, and with `ItemMissing` when the addressed field does not
    /// exist for an otherwise valid item.
    fn raw_read(&self, target: &Target, buf: &mut [u8], offset: u64) -> Result<RawRead>;

    /// VM debug channel. Default is a no-op so loaders without one can
    /// ignore it.
    fn debug(&self, _message: &str) {}
}
