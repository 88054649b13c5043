//! Process-wide dispatcher with synchronous and asynchronous delivery

use crate::{Backend, BackendLevel, Error, Loggable, Result, Sink, TracingSink};
use std::fmt;
use std::sync::{Arc, OnceLock};
use std::thread::{self, ThreadId};
use tracing::{debug, warn};

const WORKER_NAME: &str = "proven-logger-dispatch";

static SHARED: OnceLock<Arc<Dispatcher>> = OnceLock::new();

enum Command {
    Log {
        message: Arc<dyn Loggable>,
        ack: Option<flume::Sender<()>>,
    },
    Flush(flume::Sender<()>),
}

struct Worker {
    sender: flume::Sender<Command>,
    thread: ThreadId,
}

/// Hands messages to a `Sink`, either inline or through a single worker
/// thread that preserves submission order.
///
/// Synchronous submissions go through the same queue and block until the
/// worker has written them, so they never overtake earlier asynchronous ones.
pub struct Dispatcher {
    sink: Arc<dyn Sink>,
    level: BackendLevel,
    /// `None` once spawning failed; delivery is then inline.
    worker: OnceLock<Option<Worker>>,
}

impl Dispatcher {
    /// Create a dispatcher writing to `tracing`
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(Arc::new(TracingSink))
    }

    /// Create a dispatcher writing to the given sink
    #[must_use]
    pub fn with_sink(sink: Arc<dyn Sink>) -> Self {
        Self {
            sink,
            level: BackendLevel::All,
            worker: OnceLock::new(),
        }
    }

    /// Builder-style method for setting the filter level
    #[must_use]
    pub fn with_level(mut self, level: BackendLevel) -> Self {
        self.level = level;
        self
    }

    /// The process-wide dispatcher
    pub fn shared() -> Arc<Self> {
        SHARED.get_or_init(|| Arc::new(Self::new())).clone()
    }

    /// Current filter level
    #[must_use]
    pub const fn level(&self) -> BackendLevel {
        self.level
    }

    /// Start the worker thread now instead of on first use.
    ///
    /// # Errors
    ///
    /// Returns `Error::Spawn` if the thread could not be created.
    pub fn start(&self) -> Result<()> {
        if self.worker.get().is_none() {
            let worker = self.spawn()?;
            // Losing the race drops our sender, which stops the spare thread.
            let _ = self.worker.set(Some(worker));
        }

        Ok(())
    }

    fn spawn(&self) -> Result<Worker> {
        let (sender, receiver) = flume::unbounded::<Command>();
        let sink = self.sink.clone();

        let handle = thread::Builder::new()
            .name(WORKER_NAME.to_string())
            .spawn(move || {
                for command in receiver.iter() {
                    match command {
                        Command::Log { message, ack } => {
                            sink.write(message.as_ref());
                            if let Some(ack) = ack {
                                let _ = ack.send(());
                            }
                        }
                        Command::Flush(ack) => {
                            let _ = ack.send(());
                        }
                    }
                }
            })
            .map_err(Error::Spawn)?;

        debug!("started {} worker", WORKER_NAME);

        Ok(Worker {
            sender,
            thread: handle.thread().id(),
        })
    }

    fn worker(&self) -> Option<&Worker> {
        self.worker
            .get_or_init(|| match self.spawn() {
                Ok(worker) => Some(worker),
                Err(e) => {
                    warn!("falling back to synchronous delivery: {}", e);
                    None
                }
            })
            .as_ref()
            // Writing from inside the sink must not wait on ourselves.
            .filter(|worker| worker.thread != thread::current().id())
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("level", &self.level)
            .field("started", &self.worker.get().is_some_and(Option::is_some))
            .finish_non_exhaustive()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for Dispatcher {
    fn log(&self, asynchronous: bool, message: Arc<dyn Loggable>) {
        if !self.level.admits(message.base().flag()) {
            return;
        }

        let Some(worker) = self.worker() else {
            self.sink.write(message.as_ref());
            return;
        };

        let (ack, done) = if asynchronous {
            (None, None)
        } else {
            let (ack, done) = flume::bounded(1);
            (Some(ack), Some(done))
        };

        match worker.sender.send(Command::Log { message, ack }) {
            Ok(()) => {
                if let Some(done) = done {
                    let _ = done.recv();
                }
            }
            Err(flume::SendError(command)) => {
                if let Command::Log { message, .. } = command {
                    self.sink.write(message.as_ref());
                }
            }
        }
    }

    fn flush(&self) {
        let Some(Some(worker)) = self.worker.get() else {
            return;
        };
        if worker.thread == thread::current().id() {
            return;
        }

        let (ack, done) = flume::bounded(1);
        if worker.sender.send(Command::Flush(ack)).is_ok() {
            let _ = done.recv();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingSink;
    use crate::{LogFlag, LogMessage};
    use std::sync::Weak;

    fn message(text: &str, flag: LogFlag) -> Arc<dyn Loggable> {
        Arc::new(LogMessage::new(text, BackendLevel::Verbose, flag))
    }

    /// Sink that logs back into its own dispatcher when it sees "outer"
    struct ReentrantSink {
        dispatcher: OnceLock<Weak<Dispatcher>>,
        recorded: RecordingSink,
    }

    impl Sink for ReentrantSink {
        fn write(&self, message: &dyn Loggable) {
            self.recorded.write(message);

            if message.base().message() != "outer" {
                return;
            }
            if let Some(dispatcher) = self.dispatcher.get().and_then(Weak::upgrade) {
                dispatcher.log(false, self::message("inner", LogFlag::INFO));
                dispatcher.flush();
            }
        }
    }

    #[test]
    fn test_async_delivered_in_order_by_flush() {
        let sink = RecordingSink::new();
        let dispatcher = Dispatcher::with_sink(Arc::new(sink.clone()));

        for i in 0..100 {
            dispatcher.log(true, message(&format!("message {i}"), LogFlag::INFO));
        }
        dispatcher.flush();

        let written = sink.messages();
        assert_eq!(written.len(), 100);
        for (i, message) in written.iter().enumerate() {
            assert_eq!(message.message(), format!("message {i}"));
        }
    }

    #[test]
    fn test_sync_waits_for_earlier_async() {
        let sink = RecordingSink::new();
        let dispatcher = Dispatcher::with_sink(Arc::new(sink.clone()));

        dispatcher.log(true, message("queued", LogFlag::INFO));
        dispatcher.log(false, message("blocking", LogFlag::ERROR));

        // No flush: the synchronous call already waited
        let written: Vec<_> = sink
            .messages()
            .iter()
            .map(|m| m.message().to_string())
            .collect();
        assert_eq!(written, vec!["queued", "blocking"]);
    }

    #[test]
    fn test_sync_written_on_worker_thread() {
        let sink = RecordingSink::new();
        let dispatcher = Dispatcher::with_sink(Arc::new(sink.clone()));
        dispatcher.start().unwrap();

        dispatcher.log(false, message("sync", LogFlag::WARNING));

        assert_eq!(sink.thread_names(), vec![Some(WORKER_NAME.to_string())]);
    }

    #[test]
    fn test_level_filter() {
        let sink = RecordingSink::new();
        let dispatcher =
            Dispatcher::with_sink(Arc::new(sink.clone())).with_level(BackendLevel::Warning);

        dispatcher.log(false, message("kept", LogFlag::ERROR));
        dispatcher.log(false, message("dropped", LogFlag::INFO));
        dispatcher.log(true, message("dropped too", LogFlag::VERBOSE));
        dispatcher.flush();

        let written = sink.messages();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].message(), "kept");
    }

    #[test]
    fn test_flush_before_start_is_noop() {
        let dispatcher = Dispatcher::with_sink(Arc::new(RecordingSink::new()));
        dispatcher.flush();
        assert!(dispatcher.worker.get().is_none());
    }

    #[test]
    fn test_shared_is_singleton() {
        assert!(Arc::ptr_eq(&Dispatcher::shared(), &Dispatcher::shared()));
        assert_eq!(Dispatcher::shared().level(), BackendLevel::All);
    }

    #[test]
    fn test_sink_logging_from_worker_is_inline() {
        let recorded = RecordingSink::new();
        let sink = Arc::new(ReentrantSink {
            dispatcher: OnceLock::new(),
            recorded: recorded.clone(),
        });
        let dispatcher = Arc::new(Dispatcher::with_sink(sink.clone()));
        sink.dispatcher.set(Arc::downgrade(&dispatcher)).unwrap();

        dispatcher.log(false, message("outer", LogFlag::INFO));

        let written: Vec<_> = recorded
            .messages()
            .iter()
            .map(|m| m.message().to_string())
            .collect();
        assert_eq!(written, vec!["outer", "inner"]);
        assert_eq!(
            recorded.thread_names(),
            vec![Some(WORKER_NAME.to_string()), Some(WORKER_NAME.to_string())]
        );
    }
}
