// Srcbuf
// Copyright (C) 2026 Srcbuf contributors

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Growable byte buffer with monotonic append and one-shot finalization.
//!
//! Appends are amortized O(1): capacity doubles whenever an append would
//! exceed it, at the cost of up to 2x transient over-allocation, which the
//! shrink inside [`SourceBuffer::finalize`] corrects.

use tracing::{debug, trace};

use crate::error::{BufferError, BufferResult};

/// Logical capacity of a freshly created buffer, in bytes.
pub const INITIAL_CAPACITY: usize = 1;

/// Multiplier applied to capacity when an append would otherwise exceed it.
pub const GROWTH_FACTOR: usize = 2;

/// Byte appended at finalize to mark the logical end of content.
const TERMINATOR: u8 = 0;

/// An owned, contiguous, growable store of bytes.
///
/// Content bytes are opaque to the buffer. A buffer is created empty,
/// mutated only through appends, and consumed exactly once by
/// [`finalize`], which hands the terminated content to the caller as an
/// independently owned array. A buffer that is never finalized frees its
/// storage on drop.
///
/// [`finalize`]: SourceBuffer::finalize
#[derive(Debug)]
pub struct SourceBuffer {
    /// Backing storage. Its raw capacity may exceed `capacity` because the
    /// allocator is free to round a reservation up; `capacity` is what the
    /// doubling policy governs.
    data: Vec<u8>,
    capacity: usize,
}

impl SourceBuffer {
    /// Creates an empty buffer with one byte of storage reserved.
    pub fn new() -> BufferResult<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(INITIAL_CAPACITY)
            .map_err(|_| BufferError::AllocationFailed {
                requested: INITIAL_CAPACITY,
            })?;
        Ok(Self {
            data,
            capacity: INITIAL_CAPACITY,
        })
    }

    /// Number of content bytes written so far.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if no bytes have been appended yet.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current logical capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Read-only view of the content appended so far, without terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Appends a single byte, growing storage first when the buffer is full.
    pub fn push(&mut self, byte: u8) -> BufferResult<()> {
        if self.data.len() == self.capacity {
            self.grow()?;
        }
        self.data.push(byte);
        Ok(())
    }

    /// Appends every byte of `bytes` in order.
    ///
    /// Equivalent to calling [`push`] once per input byte; the empty slice
    /// is a no-op.
    ///
    /// [`push`]: SourceBuffer::push
    pub fn append(&mut self, bytes: &[u8]) -> BufferResult<()> {
        for &byte in bytes {
            self.push(byte)?;
        }
        Ok(())
    }

    /// Appends the terminator byte, shrinks storage to exact size, and
    /// transfers ownership of the result to the caller.
    ///
    /// The returned array holds `len() + 1` bytes: the content in append
    /// order followed by a single zero byte, with no slack capacity.
    /// Consuming `self` rules out any append after finalization.
    pub fn finalize(mut self) -> BufferResult<Box<[u8]>> {
        self.push(TERMINATOR)?;
        debug!(
            len = self.data.len(),
            capacity = self.capacity,
            "finalizing buffer"
        );
        // into_boxed_slice reallocates down to the exact length; a shrink
        // the allocator cannot satisfy aborts the process, the fatal policy
        // for this step.
        Ok(self.data.into_boxed_slice())
    }

    /// Doubles the logical capacity, reserving storage fallibly.
    fn grow(&mut self) -> BufferResult<()> {
        let new_capacity = self
            .capacity
            .checked_mul(GROWTH_FACTOR)
            .ok_or(BufferError::CapacityOverflow {
                current: self.capacity,
            })?;
        let additional = new_capacity - self.data.len();
        self.data
            .try_reserve_exact(additional)
            .map_err(|_| BufferError::AllocationFailed {
                requested: new_capacity,
            })?;
        trace!(
            old = self.capacity,
            new = new_capacity,
            "growing buffer storage"
        );
        self.capacity = new_capacity;
        Ok(())
    }
}
