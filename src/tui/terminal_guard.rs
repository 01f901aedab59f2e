use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub trait TerminalOps: Send + Sync + 'static {
    fn setup(&self) -> io::Result<()>;
    fn restore(&self) -> io::Result<()>;
}

/// Raw mode, alternate screen, mouse capture, focus reports and a hidden cursor for the deck.
#[derive(Debug, Default)]
pub struct CrosstermTerminalOps;

impl TerminalOps for CrosstermTerminalOps {
    fn setup(&self) -> io::Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        enter_screen(&mut io::stdout())
    }

    fn restore(&self) -> io::Result<()> {
        // Run every step even if an earlier one fails.
        let raw = crossterm::terminal::disable_raw_mode();
        let screen = leave_screen(&mut io::stdout());
        raw.and(screen)
    }
}

/// Focus reports let a drag whose release happened outside the terminal be cancelled.
fn enter_screen<W: io::Write>(out: &mut W) -> io::Result<()> {
    use crossterm::{
        cursor,
        event::{EnableFocusChange, EnableMouseCapture},
        execute,
        terminal::EnterAlternateScreen,
    };

    execute!(
        out,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        cursor::Hide
    )
}

fn leave_screen<W: io::Write>(out: &mut W) -> io::Result<()> {
    use crossterm::{
        cursor,
        event::{DisableFocusChange, DisableMouseCapture},
        execute,
        terminal::LeaveAlternateScreen,
    };

    execute!(
        out,
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange,
        cursor::Show
    )
}

pub struct TerminalGuard {
    restored: Arc<AtomicBool>,
    ops: Arc<dyn TerminalOps>,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermTerminalOps))
    }

    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        ops.setup()?;
        Ok(Self {
            restored: Arc::new(AtomicBool::new(false)),
            ops,
        })
    }

    pub fn restore(&self) -> io::Result<()> {
        if self.restored.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.restore()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
