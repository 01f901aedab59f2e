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
fn guard_restores_terminal_on_drop() {
    let ops = Arc::new(MockOps::default());
    {
        let _guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    }

    assert_eq!(&*ops.calls.lock().unwrap(), &["setup", "restore"]);
}

#[test]
fn explicit_restore_is_not_repeated_on_drop() {
    let ops = Arc::new(MockOps::default());
    let guard = TerminalGuard::with_ops(ops.clone()).unwrap();

    guard.restore().unwrap();
    guard.restore().unwrap();
    drop(guard);

    assert_eq!(&*ops.calls.lock().unwrap(), &["setup", "restore"]);
}

#[cfg(unix)]
#[test]
fn screen_setup_toggles_focus_reporting() {
    let mut out = Vec::new();
    enter_screen(&mut out).unwrap();
    let entered = String::from_utf8(out).unwrap();
    assert!(entered.contains("\x1b[?1004h"));
    assert!(entered.contains("\x1b[?1049h"));

    let mut out = Vec::new();
    leave_screen(&mut out).unwrap();
    let left = String::from_utf8(out).unwrap();
    assert!(left.contains("\x1b[?1004l"));
    assert!(left.contains("\x1b[?1049l"));
}
