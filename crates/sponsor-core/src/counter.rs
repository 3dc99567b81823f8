//! Count-up animation math and per-element progress.

use crate::constants::{COUNTER_DURATION_MS, COUNTER_VISIBILITY_THRESHOLD, FRENCH_GROUP_SEPARATOR};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterConfig {
    pub duration: Duration,
    /// Fraction of the element that must be visible before it starts.
    pub visibility_threshold: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(COUNTER_DURATION_MS),
            visibility_threshold: COUNTER_VISIBILITY_THRESHOLD,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterState {
    Idle,
    Running,
    Completed,
}

/// One animated counter. Runs at most once per page lifetime.
#[derive(Clone, Debug)]
pub struct CounterProgress {
    target: u64,
    displayed: u64,
    duration: Duration,
    state: CounterState,
}

impl CounterProgress {
    pub fn new(target: u64, duration: Duration) -> Self {
        Self {
            target,
            displayed: 0,
            duration,
            state: CounterState::Idle,
        }
    }

    /// Build from the raw `data-count` attribute value.
    pub fn from_attribute(raw: Option<&str>, config: &CounterConfig) -> Self {
        Self::new(parse_count(raw.unwrap_or("0")), config.duration)
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn displayed(&self) -> u64 {
        self.displayed
    }

    pub fn state(&self) -> CounterState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state == CounterState::Completed
    }

    /// Returns `true` only on the first call; later visibility triggers are
    /// ignored whether the animation is running or done.
    pub fn begin(&mut self) -> bool {
        if self.state != CounterState::Idle {
            return false;
        }
        self.state = CounterState::Running;
        self.displayed = 0;
        true
    }

    /// Advance to `elapsed` since `begin`. Returns `true` while more frames
    /// are needed. The displayed value never decreases.
    pub fn step(&mut self, elapsed: Duration) -> bool {
        if self.state != CounterState::Running {
            return false;
        }
        let value = value_at(self.target, elapsed, self.duration);
        self.displayed = self.displayed.max(value);
        if elapsed >= self.duration {
            self.displayed = self.target;
            self.state = CounterState::Completed;
            return false;
        }
        true
    }

    pub fn formatted(&self) -> String {
        format_grouped_fr(self.displayed)
    }
}

#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Displayed value at `elapsed`; exactly `target` once `elapsed >= duration`.
pub fn value_at(target: u64, elapsed: Duration, duration: Duration) -> u64 {
    if duration.is_zero() || elapsed >= duration {
        return target;
    }
    let progress = elapsed.as_secs_f64() / duration.as_secs_f64();
    let v = (target as f64 * ease_out_cubic(progress)).floor() as u64;
    v.min(target)
}

/// Integer-prefix parse: optional leading whitespace and `+`, then digits.
/// Anything without a leading digit (including negatives) counts as zero.
pub fn parse_count(raw: &str) -> u64 {
    let s = raw.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let digits: String = s.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Thousands grouping following the fr-FR convention, e.g. `1 234`.
pub fn format_grouped_fr(value: u64) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * FRENCH_GROUP_SEPARATOR.len_utf8());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(FRENCH_GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}
