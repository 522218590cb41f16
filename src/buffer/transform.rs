//! Growable buffer with in-place LF to CRLF expansion.
//!
//! The allocation is laid out as three consecutive zones:
//!
//! ```text
//! data => done + hole + tail
//!         out---^       ^---in
//! ```
//!
//! - `done` bytes are finalized.
//! - `hole` bytes are reserved between the write cursor (`out`) and the
//!   landing zone of the next read (`in`). Expansion writes into the hole,
//!   so it must be at least as large as the next read. It is zero when
//!   expansion is disabled.
//! - `tail` bytes are free at the end of the allocation and must fit one
//!   full read.
//!
//! Before every read the buffer makes sure `hole + tail` covers one read of
//! `increment` bytes plus its worst-case expansion. If it does not, the
//! increment doubles and the allocation grows, so `N` input bytes cost
//! `O(log N)` reallocations.

use bytes::Bytes;
use tracing::debug;

use crate::eol::expand_within;
use crate::error::ClipError;

/// Snapshot of the zone sizes of a [`TransformBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferLayout {
    /// Finalized bytes.
    pub done: usize,
    /// Reserved bytes between the write cursor and the landing zone.
    pub hole: usize,
    /// Free bytes at the end of the allocation.
    pub tail: usize,
    /// Size of the next read request.
    pub increment: usize,
}

impl BufferLayout {
    /// Total allocation size; always `done + hole + tail`.
    pub fn allocated(&self) -> usize {
        self.done + self.hole + self.tail
    }
}

/// A single growable allocation that is filled by reads and optionally
/// rewritten in place to expand bare LF into CRLF.
///
/// Reads happen in two steps: [`TransformBuffer::landing_zone`] reserves room
/// and returns the slice to read into, then [`TransformBuffer::commit`]
/// finalizes the bytes that were actually read.
///
/// # Example
///
/// ```
/// use clipio::TransformBuffer;
///
/// let mut buffer = TransformBuffer::new(4, true);
///
/// for chunk in [&b"a\r"[..], &b"\nb\n"[..]] {
///     let zone = buffer.landing_zone()?;
///     zone[..chunk.len()].copy_from_slice(chunk);
///     buffer.commit(chunk.len());
/// }
///
/// assert_eq!(&buffer.finish()[..], b"a\r\nb\r\n");
/// # Ok::<(), clipio::ClipError>(())
/// ```
#[derive(Debug)]
pub struct TransformBuffer {
    data: Vec<u8>,
    done: usize,
    hole: usize,
    tail: usize,
    increment: usize,
    expand: bool,
    prev: u8,
    growths: usize,
}

impl TransformBuffer {
    /// Creates an empty buffer.
    ///
    /// Nothing is allocated until the first [`TransformBuffer::landing_zone`].
    ///
    /// # Panics
    ///
    /// Panics if `initial_increment` is zero.
    pub fn new(initial_increment: usize, expand: bool) -> Self {
        assert!(initial_increment > 0, "initial increment must be non-zero");
        Self {
            data: Vec::new(),
            done: 0,
            hole: 0,
            tail: 0,
            increment: initial_increment,
            expand,
            prev: 0,
            growths: 0,
        }
    }

    /// Returns the current zone sizes.
    pub fn layout(&self) -> BufferLayout {
        BufferLayout {
            done: self.done,
            hole: self.hole,
            tail: self.tail,
            increment: self.increment,
        }
    }

    /// Returns the number of finalized bytes.
    pub fn len(&self) -> usize {
        self.done
    }

    /// Returns `true` if nothing has been finalized yet.
    pub fn is_empty(&self) -> bool {
        self.done == 0
    }

    /// Returns the finalized bytes.
    pub fn finalized(&self) -> &[u8] {
        &self.data[..self.done]
    }

    /// Returns how many times the allocation has grown.
    pub fn growths(&self) -> usize {
        self.growths
    }

    /// Reserves room for the next read and returns the slice to read into.
    ///
    /// The slice is exactly `increment` bytes long. Calling this again
    /// without a [`TransformBuffer::commit`] in between returns the same
    /// zone.
    ///
    /// # Errors
    ///
    /// Returns [`ClipError::OutOfMemory`] if the allocation cannot grow or
    /// its size would overflow `usize`.
    pub fn landing_zone(&mut self) -> Result<&mut [u8], ClipError> {
        let need = if self.expand {
            self.increment.checked_mul(2).ok_or(ClipError::OutOfMemory {
                requested: usize::MAX,
            })?
        } else {
            self.increment
        };

        if self.hole + self.tail < need {
            self.grow(need)?;
        }

        if self.expand && self.hole < self.increment {
            self.tail -= self.increment - self.hole;
            self.hole = self.increment;
        }

        self.check_layout();
        debug_assert!(self.tail >= self.increment);

        let start = self.done + self.hole;
        Ok(&mut self.data[start..start + self.increment])
    }

    fn grow(&mut self, need: usize) -> Result<(), ClipError> {
        let extra = need.checked_mul(2);
        let increment = self.increment.checked_mul(2);
        let size = extra.and_then(|extra| self.data.len().checked_add(extra));

        let (Some(extra), Some(increment), Some(size)) = (extra, increment, size) else {
            return Err(ClipError::OutOfMemory {
                requested: usize::MAX,
            });
        };

        self.data
            .try_reserve_exact(extra)
            .map_err(|_| ClipError::OutOfMemory { requested: size })?;
        self.data.resize(size, 0);

        self.tail += extra;
        self.increment = increment;
        self.growths += 1;

        debug!(
            allocated = size,
            done = self.done,
            increment = self.increment,
            "transform buffer grown"
        );
        Ok(())
    }

    /// Finalizes `n` bytes that were read into the current landing zone.
    ///
    /// With expansion enabled, every LF not preceded by CR becomes CRLF. The
    /// preceding byte is tracked across calls, so a CR at the end of one read
    /// and an LF at the start of the next stay a single CRLF.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds the size of the landing zone.
    pub fn commit(&mut self, n: usize) {
        assert!(n <= self.increment, "read larger than landing zone");
        assert!(n <= self.tail, "commit without a landing zone");

        let start = self.done + self.hole;
        self.tail -= n;

        if self.expand {
            let written = expand_within(&mut self.data, self.done, start, n, &mut self.prev);
            self.hole -= written - n;
            self.done += written;
        } else {
            self.done += n;
        }

        self.check_layout();
    }

    /// Consumes the buffer and returns the finalized bytes.
    pub fn finish(mut self) -> Bytes {
        self.data.truncate(self.done);
        Bytes::from(self.data)
    }

    fn check_layout(&self) {
        debug_assert_eq!(self.data.len(), self.done + self.hole + self.tail);
        debug_assert!(self.expand || self.hole == 0);
    }
}
