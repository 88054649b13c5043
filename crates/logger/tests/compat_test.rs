//! Tests for the `log` crate bridge

use proven_logger::*;
use std::sync::{Arc, Mutex};

type Seen = Arc<Mutex<Vec<OwnedRecord>>>;

struct RecordingHandler {
    seen: Seen,
    metadata: Metadata,
}

impl LogHandler for RecordingHandler {
    fn log(&self, record: Record<'_>) {
        self.seen.lock().unwrap().push(record.into_owned());
    }

    fn log_level(&self) -> Level {
        Level::Debug
    }

    fn set_log_level(&mut self, _level: Level) {}

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}

#[test]
fn test_log_bridge() {
    let seen = Seen::default();
    let logger = Logger::with_handler(
        "deps",
        RecordingHandler {
            seen: seen.clone(),
            metadata: Metadata::new(),
        },
    );

    compat::init_log_bridge(logger).expect("log bridge installs once");
    assert_eq!(log::max_level(), log::LevelFilter::Debug);

    log::error!("Error from log crate");
    log::warn!("Warning from log crate");
    log::info!("Info from log crate");
    log::debug!("Debug from log crate");
    log::trace!("Trace from log crate");

    let seen = seen.lock().unwrap();
    let levels: Vec<_> = seen.iter().map(|record| record.level).collect();
    assert_eq!(
        levels,
        vec![Level::Error, Level::Warning, Level::Info, Level::Debug]
    );
    assert_eq!(seen[0].message, "Error from log crate");
    assert_eq!(seen[0].source, "compat_test");
    assert_eq!(seen[0].location.file, file!());
}
