use super::{AggregateRecorder, Record, Recorder};

/// Buffered recorder.
///
/// Keeps every record in memory, which is handy for inspecting the per-episode
/// records of a short run.
#[derive(Debug, Default)]
pub struct BufferedRecorder {
    buf: Vec<Record>,
    n_flushes: usize,
}

impl BufferedRecorder {
    /// Construct the recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an iterator over the records.
    pub fn iter(&self) -> std::slice::Iter<Record> {
        self.buf.iter()
    }

    /// Returns the number of buffered records.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if no record has been buffered.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns how many times [`AggregateRecorder::flush`] was called.
    pub fn n_flushes(&self) -> usize {
        self.n_flushes
    }
}

impl Recorder for BufferedRecorder {
    /// Write a [`Record`] to the buffer.
    fn write(&mut self, record: Record) {
        self.buf.push(record);
    }
}

impl AggregateRecorder for BufferedRecorder {
    fn store(&mut self, record: Record) {
        self.buf.push(record);
    }

    /// Records are kept in the buffer; only the call is counted.
    fn flush(&mut self, _step: i64) {
        self.n_flushes += 1;
    }
}
