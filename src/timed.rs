//! Timed actions
//!
//! Wraps a lifecycle action so that, once it succeeds, a status line with a
//! simulated duration is emitted. Durations are drawn, never measured.

use crate::error::PizzaError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Shortest simulated duration, in seconds.
pub const MIN_SECONDS: u8 = 1;
/// Longest simulated duration, in seconds.
pub const MAX_SECONDS: u8 = 5;

const SLOT: &str = "{}";

/// A status message with exactly one `{}` slot for the duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
    slot: usize,
}

impl Template {
    pub fn parse(text: &str) -> crate::error::Result<Self> {
        if text.matches(SLOT).count() != 1 {
            return Err(PizzaError::InvalidTemplate(text.to_string()));
        }
        // Checked above: exactly one slot.
        let slot = text.find(SLOT).unwrap_or_default();
        Ok(Self {
            text: text.to_string(),
            slot,
        })
    }

    pub fn render(&self, seconds: u8) -> String {
        format!(
            "{}{}{}",
            &self.text[..self.slot],
            seconds,
            &self.text[self.slot + SLOT.len()..]
        )
    }
}

impl FromStr for Template {
    type Err = PizzaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Where status lines go.
pub trait StatusSink {
    fn emit(&mut self, line: &str);
}

impl StatusSink for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

impl<S: StatusSink + ?Sized> StatusSink for &mut S {
    fn emit(&mut self, line: &str) {
        (**self).emit(line);
    }
}

/// Draw a simulated duration in `MIN_SECONDS..=MAX_SECONDS`.
pub fn draw_seconds<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(MIN_SECONDS..=MAX_SECONDS)
}

/// Wrap `action` so each successful call emits `template` with a random duration.
///
/// The wrapped callable takes and returns exactly what `action` does. The
/// duration is drawn only after the action returns `Ok`; an `Err` is passed
/// through untouched and nothing is emitted.
pub fn timed<A, T, E, F, R, S>(
    template: Template,
    mut action: F,
    mut rng: R,
    mut sink: S,
) -> impl FnMut(A) -> Result<T, E>
where
    F: FnMut(A) -> Result<T, E>,
    R: Rng,
    S: StatusSink,
{
    move |arg| {
        let value = action(arg)?;
        let seconds = draw_seconds(&mut rng);
        log::debug!("'{}' took {}s (simulated)", template, seconds);
        sink.emit(&template.render(seconds));
        Ok(value)
    }
}
