use std::io::{IsTerminal, Stdout, Write};
use std::sync::{Mutex, MutexGuard};

use crossterm::style::{Color, Stylize};

use crate::domain::{Outcome, SessionResult, TargetConfig};
use crate::error::HarnessError;

use super::Reporter;
use super::progress::{NoProgress, ProgressIndicator, TerminalProgress};
use super::summary::{Tone, glyph, summary_lines};

/// Human-oriented console report.
pub struct ConsoleReporter<W> {
    out: Mutex<W>,
    progress: Box<dyn ProgressIndicator>,
    color: bool,
}

impl ConsoleReporter<Stdout> {
    /// Report on stdout; color and live progress only when attached to a terminal.
    #[must_use]
    pub fn stdout(no_color: bool) -> Self {
        let color = !no_color && std::io::stdout().is_terminal();
        let progress: Box<dyn ProgressIndicator> = if std::io::stderr().is_terminal() {
            Box::new(TerminalProgress::new(!no_color))
        } else {
            Box::new(NoProgress)
        };
        Self::new(std::io::stdout(), progress, color)
    }
}

impl<W: Write + Send> ConsoleReporter<W> {
    pub fn new(out: W, progress: Box<dyn ProgressIndicator>, color: bool) -> Self {
        Self {
            out: Mutex::new(out),
            progress,
            color,
        }
    }

    /// Plain-text reporter without progress, for captured output.
    pub fn plain(out: W) -> Self {
        Self::new(out, Box::new(NoProgress), false)
    }

    fn lock(&self) -> Result<MutexGuard<'_, W>, HarnessError> {
        self.out.lock().map_err(|err| HarnessError::ReporterPoisoned {
            detail: err.to_string(),
        })
    }

    fn paint(&self, tone: Tone, text: &str) -> String {
        if !self.color {
            return text.to_owned();
        }
        match tone {
            Tone::Heading => text.with(Color::Blue).bold().to_string(),
            Tone::Muted => text.with(Color::DarkGrey).to_string(),
            Tone::Plain => text.to_owned(),
            Tone::Pass => text.with(Color::Green).to_string(),
            Tone::Fail => text.with(Color::Red).to_string(),
            Tone::Warning => text.with(Color::Yellow).to_string(),
            Tone::Ready => text.with(Color::Green).bold().to_string(),
            Tone::NotReady => text.with(Color::Red).bold().to_string(),
        }
    }
}

impl<W: Write + Send> Reporter for ConsoleReporter<W> {
    fn session_started(&self, target: &TargetConfig) -> Result<(), HarnessError> {
        let mut out = self.lock()?;
        writeln!(out)?;
        writeln!(out, "{}", self.paint(Tone::Heading, "🚀 Launch Verification"))?;
        writeln!(
            out,
            "{}",
            self.paint(Tone::Muted, &format!("Testing API: {}", target.api_base()))
        )?;
        writeln!(
            out,
            "{}",
            self.paint(
                Tone::Muted,
                &format!("Testing Client: {}", target.client_base())
            )
        )?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }

    fn probe_started(&self, name: &str) -> Result<(), HarnessError> {
        {
            let mut out = self.lock()?;
            writeln!(out, "{}", self.paint(Tone::Heading, name))?;
            out.flush()?;
        }
        self.progress.start(&format!("Checking {}...", name))?;
        Ok(())
    }

    fn outcome(&self, outcome: &Outcome) -> Result<(), HarnessError> {
        self.progress.clear()?;
        let line = format!("  {} {}", glyph(outcome.status()), outcome.message());
        let mut out = self.lock()?;
        writeln!(out, "{}", self.paint(Tone::from(outcome.status()), &line))?;
        out.flush()?;
        Ok(())
    }

    fn finish(&self, result: &SessionResult) -> Result<(), HarnessError> {
        self.progress.clear()?;
        let mut out = self.lock()?;
        for line in summary_lines(result) {
            writeln!(out, "{}", self.paint(line.tone, &line.text))?;
        }
        out.flush()?;
        Ok(())
    }
}
