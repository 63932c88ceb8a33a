//! Engine events reach the log file through the tracing bridge.

#![cfg(feature = "log")]

use std::fs;

use linmat::log::{LogLayer, Logger};
use linmat::prelude::*;
use tracing_subscriber::layer::SubscriberExt;

#[test]
fn engine_events_are_logged_without_changing_results() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("engine.log");
    let logger: &'static Logger = Box::leak(Box::new(Logger::new()));
    logger.open(&LogConfig {
        ansi: false,
        ..LogConfig::with_path(&path)
    });

    let data = [1.0, 2.0, 2.0, 4.0];
    let subscriber = tracing_subscriber::registry().with(LogLayer::new(logger));
    let (rank, singular) = tracing::subscriber::with_default(subscriber, || {
        let m = Matrix::from_row_major(2, 2, &data).or_die("building matrix");
        (rank(&m), solve(&m, &[1.0, 2.0]))
    });
    logger.close();

    assert_eq!(rank, 1);
    assert!(matches!(singular, Err(CoreError::SingularMatrix { column: 1 })));

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("[DEBUG] "), "{text}");
    assert!(text.contains("matrix created"), "{text}");
    assert!(text.contains("[WARN] "), "{text}");
    assert!(text.ends_with("Closing log session.\n"));
}
