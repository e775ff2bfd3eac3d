use super::*;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MockOps {
    calls: Mutex<Vec<String>>,
}

impl MockOps {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl TerminalOps for MockOps {
    fn setup(&self) -> std::io::Result<()> {
        self.calls.lock().unwrap().push("setup".to_string());
        Ok(())
    }

    fn restore(&self) -> std::io::Result<()> {
        self.calls.lock().unwrap().push("restore".to_string());
        Ok(())
    }

    fn set_title(&self, title: &str) -> std::io::Result<()> {
        self.calls.lock().unwrap().push(format!("title:{title}"));
        Ok(())
    }
}

#[test]
fn terminal_guard_restores_on_drop() {
    let ops = Arc::new(MockOps::default());
    {
        let _guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    }

    assert_eq!(ops.calls(), vec!["setup", "restore"]);
}

#[test]
fn terminal_restorer_is_idempotent() {
    let ops = Arc::new(MockOps::default());
    let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    let restorer = guard.restorer();

    restorer.restore().unwrap();
    restorer.restore().unwrap();
    drop(guard);

    assert_eq!(ops.calls(), vec!["setup", "restore"]);
}

#[test]
fn title_updates_stop_after_restore() {
    let ops = Arc::new(MockOps::default());
    let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    let restorer = guard.restorer();

    restorer.set_title("Quill - a.txt").unwrap();
    restorer.restore().unwrap();
    restorer.set_title("Quill - b.txt").unwrap();

    assert_eq!(ops.calls(), vec!["setup", "title:Quill - a.txt", "restore"]);
}

#[test]
fn exit_codes_follow_shell_convention() {
    assert_eq!(TerminationSignal::SigInt.exit_code(), 130);
    assert_eq!(TerminationSignal::SigTerm.exit_code(), 143);
}
