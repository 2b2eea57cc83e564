use super::*;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MockOps {
    calls: Mutex<Vec<&'static str>>,
}

impl TerminalOps for MockOps {
    fn setup(&self) -> std::io::Result<()> {
        self.calls.lock().unwrap().push("setup");
        Ok(())
    }

    fn restore(&self) -> std::io::Result<()> {
        self.calls.lock().unwrap().push("restore");
        Ok(())
    }
}

#[test]
fn terminal_guard_restores_on_drop() {
    let ops = Arc::new(MockOps::default());
    {
        let _guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    }

    assert_eq!(&*ops.calls.lock().unwrap(), &["setup", "restore"]);
}

#[test]
fn terminal_restorer_is_idempotent() {
    let ops = Arc::new(MockOps::default());
    let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    let restorer = guard.restorer();

    restorer.restore().unwrap();
    restorer.restore().unwrap();
    drop(guard);

    assert_eq!(&*ops.calls.lock().unwrap(), &["setup", "restore"]);
}

struct FailingSetup {
    restores: Mutex<usize>,
}

impl TerminalOps for FailingSetup {
    fn setup(&self) -> std::io::Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "not a tty"))
    }

    fn restore(&self) -> std::io::Result<()> {
        *self.restores.lock().unwrap() += 1;
        Ok(())
    }
}

#[test]
fn failed_setup_yields_no_guard_and_no_restore() {
    let ops = Arc::new(FailingSetup {
        restores: Mutex::new(0),
    });
    assert!(TerminalGuard::with_ops(ops.clone()).is_err());
    assert_eq!(*ops.restores.lock().unwrap(), 0);
}
