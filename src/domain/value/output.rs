//! Bounded-buffer output results

/// Outcome of copying a string setting into a caller buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStatus {
    /// The whole value was copied (`n` bytes, NUL excluded)
    Copied(usize),
    /// Only the first `n` bytes fit
    Truncated(usize),
    /// Key absent and no default supplied; buffer untouched
    Missing,
}

impl CopyStatus {
    pub fn is_truncated(self) -> bool {
        matches!(self, Self::Truncated(_))
    }
}

/// Outcome of dumping a section into a caller buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpStatus {
    /// All records written; count includes NUL separators
    Complete(usize),
    /// Stopped before the first record that did not fit
    Truncated { written: usize },
}

impl DumpStatus {
    pub fn written(self) -> usize {
        match self {
            Self::Complete(n) => n,
            Self::Truncated { written } => written,
        }
    }
}

/// Copy `src` into `buf`, NUL-terminating when there is room left.
pub fn copy_bounded(src: &[u8], buf: &mut [u8]) -> CopyStatus {
    let n = src.len().min(buf.len());
    buf[..n].copy_from_slice(&src[..n]);
    if n < buf.len() {
        buf[n] = 0;
    }
    if n < src.len() {
        CopyStatus::Truncated(n)
    } else {
        CopyStatus::Copied(n)
    }
}
