mod logging;

use std::io::{self, Read};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use labterm::kernel::services::adapters::{
    ensure_history_dir, load_or_default, FileHistoryStore, MemoryHistoryStore, SimulatedCluster,
};
use labterm::kernel::services::ports::{HistoryStore, Settings};
use labterm::kernel::services::TerminalHost;
use labterm::kernel::{DispatchResult, DisplayOp, Effect, SessionConfig};
use labterm::tui::{install_panic_hook, AnsiWriter, TerminalGuard};

const DEFAULT_SESSION: &str = "default";
const EXIT_COMMAND: &str = "exit";
const POLL_INTERVAL: Duration = Duration::from_millis(15);
const SIMULATED_LATENCY: Duration = Duration::from_millis(120);

fn main() -> io::Result<()> {
    let _logging = logging::init();

    let settings = load_or_default();
    let session_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SESSION.to_string());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;

    let mut host = TerminalHost::new(
        SessionConfig::from_settings(&settings),
        Arc::new(SimulatedCluster::new().with_latency(SIMULATED_LATENCY)),
        history_store(&settings),
        runtime.handle().clone(),
    );

    let guard = TerminalGuard::new()?;
    install_panic_hook(guard.restorer());
    let mut out = AnsiWriter::new(io::stdout());

    let opened = host.open_session(session_id.clone()).map_err(io_error)?;
    out.render(opened.display_ops())?;

    let input = spawn_stdin_reader();
    loop {
        match input.recv_timeout(POLL_INTERVAL) {
            Ok(chunk) => {
                let result = host.feed_bytes(&session_id, &chunk).map_err(io_error)?;
                out.render(result.display_ops())?;
                if wants_exit(&result) {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        for done in host.drain_completions() {
            out.render(done.result.display_ops())?;
        }
    }

    host.close_session(&session_id);
    out.render(&[DisplayOp::Write("\r\n".to_string())])?;
    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(100));
    Ok(())
}

fn history_store(settings: &Settings) -> Arc<dyn HistoryStore> {
    let capacity = settings.history.capacity;
    if settings.history.persist {
        match ensure_history_dir() {
            Ok(dir) => return Arc::new(FileHistoryStore::new(dir, capacity)),
            Err(err) => {
                tracing::warn!(error = %err, "history directory unavailable, keeping history in memory");
            }
        }
    }
    Arc::new(MemoryHistoryStore::new(capacity))
}

/// Raw stdin bytes, chunk by chunk. The channel closes on EOF.
fn spawn_stdin_reader() -> Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut stdin = io::stdin();
        let mut buf = [0u8; 1024];
        loop {
            match stdin.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    if tx.send(buf[..n].to_vec()).is_err() {
                        break;
                    }
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    tracing::warn!(error = %err, "stdin closed");
                    break;
                }
            }
        }
    });
    rx
}

fn wants_exit(result: &DispatchResult) -> bool {
    result.effects.iter().any(|effect| {
        matches!(effect, Effect::ExecuteCommand { request, .. } if request.command_text == EXIT_COMMAND)
    })
}

fn io_error(err: labterm::kernel::RegistryError) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err)
}
