use super::Record;

/// Writes a record to an output destination with [`Recorder::write`].
pub trait Recorder {
    /// Write a record to the [`Recorder`].
    fn write(&mut self, record: Record);
}

/// A [`Recorder`] which stores records and writes values aggregated from them.
pub trait AggregateRecorder: Recorder {
    /// Store the record.
    fn store(&mut self, record: Record);

    /// Writes values aggregated from the stored records, then drops them.
    ///
    /// `step` is the index of the episode at which the records are flushed.
    fn flush(&mut self, step: i64);
}
