use super::{AggregateRecorder, Record, RecordStorage, RecordValue, Recorder};
use log::info;

/// Writes records to the `log` facade.
///
/// Records given to [`Recorder::write`] are logged immediately. Records given to
/// [`AggregateRecorder::store`] are aggregated and logged as one line on
/// [`AggregateRecorder::flush`].
#[derive(Debug, Default)]
pub struct LogRecorder {
    storage: RecordStorage,
}

impl LogRecorder {
    /// Constructs the recorder.
    pub fn new() -> Self {
        Self::default()
    }

    fn format(record: &Record) -> String {
        let mut items: Vec<_> = record
            .iter()
            .filter_map(|(k, v)| match v {
                RecordValue::Scalar(v) => Some(format!("{} = {:.4}", k, v)),
                RecordValue::String(s) => Some(format!("{} = {}", k, s)),
                RecordValue::DateTime(t) => Some(format!("{} = {}", k, t)),
                RecordValue::Array1(_) => None,
            })
            .collect();
        items.sort();
        items.join(", ")
    }
}

impl Recorder for LogRecorder {
    fn write(&mut self, record: Record) {
        info!("{}", Self::format(&record));
    }
}

impl AggregateRecorder for LogRecorder {
    fn store(&mut self, record: Record) {
        self.storage.store(record);
    }

    fn flush(&mut self, step: i64) {
        if self.storage.is_empty() {
            return;
        }
        let n = self.storage.len();
        let record = self.storage.aggregate();
        info!("Episode {} ({} episodes): {}", step, n, Self::format(&record));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        let mut record = Record::from_scalar("episode_steps", 8.0);
        record.insert("agent", RecordValue::String("option".to_string()));
        record.insert("values", RecordValue::Array1(vec![1.0, 2.0]));

        assert_eq!(
            LogRecorder::format(&record),
            "agent = option, episode_steps = 8.0000"
        );
    }

    #[test]
    fn test_flush_drains_storage() {
        let mut recorder = LogRecorder::new();
        recorder.store(Record::from_scalar("episode_return", 1.0));
        recorder.store(Record::from_scalar("episode_return", 2.0));
        assert_eq!(recorder.storage.len(), 2);

        recorder.flush(2);
        assert!(recorder.storage.is_empty());
    }
}
