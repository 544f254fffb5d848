//! Fixed-capacity ring buffer holding a rolling history of samples.
//!
//! The write and read cursors advance independently, each from its own
//! previous position. Once full, new writes overwrite the oldest slots.

use core::fmt;

use crate::domain::{DspError, DspResult, Sample};

pub struct RingBuffer {
    buffer: Vec<Sample>,
    write_index: usize,
    read_index: usize,
    /// Values written but not yet read, saturating at capacity
    unread: usize,
    /// Logical samples held, saturating at capacity
    filled: usize,
}

impl fmt::Debug for RingBuffer {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "RingBuffer(capacity: {}, write_index: {}, read_index: {})",
            self.buffer.len(),
            self.write_index,
            self.read_index
        )
    }
}

impl RingBuffer {
    /// Create a zero-filled buffer. A capacity of zero is rejected.
    pub fn new(capacity: usize) -> DspResult<Self> {
        if capacity == 0 {
            return Err(DspError::DimensionMismatch(
                "ring buffer capacity must be at least 1".to_string(),
            ));
        }
        Ok(Self::zeroed(capacity))
    }

    /// `capacity` must be non-zero
    pub(crate) fn zeroed(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self {
            buffer: vec![0.0; capacity],
            write_index: 0,
            read_index: 0,
            unread: 0,
            filled: 0,
        }
    }

    /// Store `value` at the write cursor and advance it by one slot
    pub fn write(&mut self, value: Sample) {
        let capacity = self.buffer.len();
        self.buffer[self.write_index] = value;
        self.write_index = (self.write_index + 1) % capacity;
        self.unread = (self.unread + 1).min(capacity);
        self.filled = (self.filled + 1).min(capacity);
    }

    /// Return the value at the read cursor and advance it by one slot.
    ///
    /// Fails with [`DspError::BufferMisuse`] when no written value is left
    /// to read, instead of handing back stale or never-written storage.
    pub fn read(&mut self) -> DspResult<Sample> {
        if self.unread == 0 {
            return Err(DspError::BufferMisuse(
                "read issued with no unread value in the ring buffer".to_string(),
            ));
        }
        let value = self.buffer[self.read_index];
        self.read_index = (self.read_index + 1) % self.buffer.len();
        self.unread -= 1;
        Ok(value)
    }

    /// Value written `age` writes ago, `0` being the most recent.
    ///
    /// History older than the first write reads as `0.0`. Returns `None`
    /// when `age` reaches past the capacity.
    pub fn peek(&self, age: usize) -> Option<Sample> {
        let capacity = self.buffer.len();
        if age >= capacity {
            return None;
        }
        let index = (self.write_index + capacity - 1 - age) % capacity;
        Some(self.buffer[index])
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Number of logical samples held, never more than the capacity
    pub fn len(&self) -> usize {
        self.filled
    }

    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// Zero the storage and rewind both cursors
    pub fn reset(&mut self) {
        self.buffer.fill(0.0);
        self.write_index = 0;
        self.read_index = 0;
        self.unread = 0;
        self.filled = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_zero_capacity() {
        assert!(matches!(
            RingBuffer::new(0),
            Err(DspError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn read_back_in_write_order() {
        let mut buffer = RingBuffer::new(4).unwrap();
        for value in [1.0, 2.0, 3.0, 4.0] {
            buffer.write(value);
        }

        for expected in [1.0, 2.0, 3.0, 4.0] {
            assert_eq!(buffer.read().unwrap(), expected);
        }
    }

    #[test]
    fn read_before_write_is_misuse() {
        let mut buffer = RingBuffer::new(4).unwrap();
        assert!(matches!(buffer.read(), Err(DspError::BufferMisuse(_))));

        buffer.write(1.0);
        assert_eq!(buffer.read().unwrap(), 1.0);
        assert!(matches!(buffer.read(), Err(DspError::BufferMisuse(_))));
    }

    #[test]
    fn interleaved_write_and_read_do_not_disturb_each_other() {
        let mut buffer = RingBuffer::new(3).unwrap();
        for value in 0..10 {
            buffer.write(value as f64);
            assert_eq!(buffer.read().unwrap(), value as f64);
        }
    }

    #[test]
    fn peek_returns_newest_first() {
        let mut buffer = RingBuffer::new(8).unwrap();
        buffer.write(1.0);
        buffer.write(2.0);
        buffer.write(3.0);

        assert_eq!(buffer.peek(0), Some(3.0));
        assert_eq!(buffer.peek(1), Some(2.0));
        assert_eq!(buffer.peek(2), Some(1.0));
        // Never written
        assert_eq!(buffer.peek(3), Some(0.0));
        assert_eq!(buffer.peek(8), None);
    }

    #[test]
    fn cross_buffer_end_while_peeking() {
        let mut buffer = RingBuffer::new(128).unwrap();
        for x in 0..=300 {
            buffer.write(x as f64);
        }

        assert_eq!(buffer.peek(0), Some(300.0));
        assert_eq!(buffer.peek(1), Some(299.0));
        assert_eq!(buffer.peek(127), Some(300.0 - 127.0));
        assert_eq!(buffer.len(), 128);
    }

    #[test]
    fn len_saturates_at_capacity() {
        let mut buffer = RingBuffer::new(2).unwrap();
        assert!(buffer.is_empty());
        buffer.write(1.0);
        assert_eq!(buffer.len(), 1);
        buffer.write(2.0);
        buffer.write(3.0);
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.capacity(), 2);
    }

    #[test]
    fn reset_clears_history() {
        let mut buffer = RingBuffer::new(4).unwrap();
        buffer.write(5.0);
        buffer.reset();

        assert!(buffer.is_empty());
        assert_eq!(buffer.peek(0), Some(0.0));
        assert!(buffer.read().is_err());
    }
}
