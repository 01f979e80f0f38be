//! Logging infrastructure for structured console output.

mod logger;
mod subscriber;
mod types;

pub use logger::{Logger, SummaryCounts};
pub use subscriber::{DRY_RUN_TARGET, STAGE_TARGET, init_subscriber};
pub use types::{Log, TaskEntry, TaskStatus};

/// Run `f` under an isolated thread-local subscriber and return every
/// console line it produced, rendered the same way as the real console.
#[cfg(test)]
pub(crate) fn capture_lines(f: impl FnOnce()) -> Vec<String> {
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::SubscriberExt as _;

    struct CaptureLayer(Arc<Mutex<Vec<String>>>);

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for CaptureLayer {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            let mut extractor = subscriber::MessageExtractor::default();
            event.record(&mut extractor);
            let metadata = event.metadata();
            let line =
                subscriber::render_line(*metadata.level(), metadata.target(), &extractor.message);
            if let Ok(mut lines) = self.0.lock() {
                lines.push(line);
            }
        }
    }

    let lines = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(CaptureLayer(Arc::clone(&lines)));
    tracing::subscriber::with_default(subscriber, f);
    lines.lock().map_or_else(|_| Vec::new(), |guard| guard.clone())
}
