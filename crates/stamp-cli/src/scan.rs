//! `stamp scan`: feed input lines through the dispatcher event loop.
//!
//! Navigations and user-facing errors are written as JSON lines, standing in
//! for screen transitions and toasts.

use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use stamp_core::UriValidatorError;
use stamp_dispatch::{AppState, Dispatcher, Navigator, Notifier, Route, ScanEvent, ScanLock};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;

/// Navigator and notifier writing to one shared output, one JSON value per line.
pub(crate) struct JsonLines<W> {
    out: Arc<Mutex<W>>,
}

impl<W> Clone for JsonLines<W> {
    fn clone(&self) -> Self {
        Self {
            out: Arc::clone(&self.out),
        }
    }
}

impl<W: Write> JsonLines<W> {
    pub(crate) fn new(out: Arc<Mutex<W>>) -> Self {
        Self { out }
    }

    fn write_line(&self, line: &str) {
        let Ok(mut out) = self.out.lock() else {
            tracing::error!("scan output lock poisoned");
            return;
        };
        if let Err(e) = writeln!(out, "{line}").and_then(|()| out.flush()) {
            tracing::error!(error = %e, "failed to write scan output");
        }
    }
}

impl<W: Write> Navigator for JsonLines<W> {
    fn navigate(&mut self, route: &Route) {
        match serde_json::to_string(route) {
            Ok(line) => self.write_line(&line),
            Err(e) => tracing::error!(error = %e, "failed to serialize route"),
        }
    }
}

impl<W: Write> Notifier for JsonLines<W> {
    fn show_error(&mut self, error: &UriValidatorError) {
        self.write_line(&error.to_json().to_string());
    }
}

/// Map one input line to an event. Blank lines are skipped.
pub(crate) fn parse_event(line: &str) -> Option<ScanEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    Some(match line.parse::<AppState>() {
        Ok(state) => ScanEvent::AppState(state),
        Err(_) => ScanEvent::Link(line.to_owned()),
    })
}

/// Replay `input` through a dispatcher writing to `out` and return the scan
/// lock once every event and pending navigation has been handled.
pub(crate) async fn scan_events<R, W>(
    input: R,
    out: Arc<Mutex<W>>,
    navigation_delay: Duration,
) -> anyhow::Result<ScanLock>
where
    R: AsyncRead + Unpin,
    W: Write,
{
    let sink = JsonLines::new(out);
    let dispatcher = Dispatcher::new(sink.clone(), sink, navigation_delay);
    let (tx, rx) = mpsc::channel(32);

    let feed = async move {
        let mut lines = BufReader::new(input).lines();
        while let Some(line) = lines.next_line().await? {
            let Some(event) = parse_event(&line) else {
                continue;
            };
            if tx.send(event).await.is_err() {
                anyhow::bail!("scan event loop stopped unexpectedly");
            }
        }
        Ok::<(), anyhow::Error>(())
    };

    let (fed, dispatcher) = tokio::join!(feed, stamp_dispatch::run(dispatcher, rx));
    fed?;
    Ok(dispatcher.lock())
}

pub(crate) async fn run_scan(config: &stamp_core::AppConfig) -> anyhow::Result<()> {
    let out = Arc::new(Mutex::new(std::io::stdout()));
    let lock = scan_events(tokio::io::stdin(), out, config.navigation_delay()).await?;
    tracing::info!(?lock, "scan input exhausted");
    Ok(())
}
