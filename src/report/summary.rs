use crate::domain::{OutcomeStatus, SessionResult};
use crate::session::Verdict;

const RULE_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Heading,
    Muted,
    Plain,
    Pass,
    Fail,
    Warning,
    Ready,
    NotReady,
}

impl From<OutcomeStatus> for Tone {
    fn from(status: OutcomeStatus) -> Self {
        match status {
            OutcomeStatus::Pass => Tone::Pass,
            OutcomeStatus::Fail => Tone::Fail,
            OutcomeStatus::Warning => Tone::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub tone: Tone,
    pub text: String,
}

impl SummaryLine {
    fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }
}

#[must_use]
pub const fn glyph(status: OutcomeStatus) -> &'static str {
    match status {
        OutcomeStatus::Pass => "✓",
        OutcomeStatus::Fail => "✗",
        OutcomeStatus::Warning => "⚠",
    }
}

/// The end-of-run block. The banner depends on the failure count alone.
#[must_use]
pub fn summary_lines(result: &SessionResult) -> Vec<SummaryLine> {
    let rule = "─".repeat(RULE_WIDTH);
    let mut lines = vec![
        SummaryLine::new(Tone::Plain, ""),
        SummaryLine::new(Tone::Heading, "📊 Launch Verification Summary"),
        SummaryLine::new(Tone::Muted, rule.clone()),
        SummaryLine::new(Tone::Pass, format!("✓ Passed: {}", result.passed())),
        SummaryLine::new(Tone::Fail, format!("✗ Failed: {}", result.failed())),
        SummaryLine::new(Tone::Warning, format!("⚠ Warnings: {}", result.warnings())),
        SummaryLine::new(Tone::Muted, rule),
        SummaryLine::new(
            Tone::Plain,
            format!("Success Rate: {}%", result.success_rate_percent()),
        ),
        SummaryLine::new(Tone::Plain, ""),
    ];

    if Verdict::of(result).is_ready() {
        lines.push(SummaryLine::new(
            Tone::Ready,
            "🎉 All critical checks passed! Ready for launch!",
        ));
    } else {
        lines.push(SummaryLine::new(
            Tone::NotReady,
            "❌ Some checks failed. Please fix issues before launch.",
        ));
    }

    if result.warnings() > 0 {
        lines.push(SummaryLine::new(Tone::Plain, ""));
        lines.push(SummaryLine::new(
            Tone::Warning,
            "⚠️  Please review warnings before launch.",
        ));
    }
    lines
}
