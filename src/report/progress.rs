use std::io::Write;

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

/// Optional live status line shown while a probe is running.
pub trait ProgressIndicator: Send + Sync {
    /// # Errors
    ///
    /// Returns an error when the terminal cannot be written.
    fn start(&self, label: &str) -> std::io::Result<()>;

    /// # Errors
    ///
    /// Returns an error when the terminal cannot be written.
    fn clear(&self) -> std::io::Result<()>;
}

/// Reporter without live progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressIndicator for NoProgress {
    fn start(&self, _label: &str) -> std::io::Result<()> {
        Ok(())
    }

    fn clear(&self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Single rewritable status line on stderr.
#[derive(Debug, Clone, Copy)]
pub struct TerminalProgress {
    color: bool,
}

impl TerminalProgress {
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }
}

impl ProgressIndicator for TerminalProgress {
    fn start(&self, label: &str) -> std::io::Result<()> {
        let mut out = std::io::stderr();
        queue!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        if self.color {
            queue!(
                out,
                SetForegroundColor(Color::Cyan),
                Print("… "),
                Print(label),
                ResetColor
            )?;
        } else {
            queue!(out, Print("… "), Print(label))?;
        }
        out.flush()
    }

    fn clear(&self) -> std::io::Result<()> {
        let mut out = std::io::stderr();
        queue!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        out.flush()
    }
}
