//! # Interactive query session
//!
//! [`QuerySession`] drives the read → query → print loop of the tool:
//!
//! 1. recompute the active phase branches (every iteration, unconditionally),
//! 2. prompt `Source depth (km): ` and apply the depth to the model,
//! 3. prompt `Enter delta: `,
//! 4. look up the arrivals and print the report.
//!
//! The loop stops on end of input, which is a normal termination. Input is consumed as
//! whitespace-separated tokens, so `10 45` on one line answers both prompts. A token that
//! is not a finite number is reported, the rest of its line is dropped and the same prompt
//! is shown again: an unparsed value is never handed to the model.
//!
//! The session is generic over its model and streams, so tests can drive it with a
//! scripted model and in-memory buffers.
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use itertools::Itertools;
use tracing::{debug, info, warn};

use crate::constants::{Degree, Kilometer};
use crate::display::ArrivalsDisplayExt;
use crate::travel_time::{clamp_arrivals, TravelTimeModel};
use crate::ttim_errors::TtimError;

pub const DEPTH_PROMPT: &str = "Source depth (km): ";
pub const DELTA_PROMPT: &str = "Enter delta: ";

/// Whitespace-separated token reader over a buffered input.
pub struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> Self {
        TokenReader {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Return the next token, reading new lines as needed; `None` at end of input.
    ///
    /// Lines are decoded lossily: bytes that are not UTF-8 end up in a token that fails
    /// to parse as a number, instead of failing the read.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
    }

    /// Drop the tokens left on the current line.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }
}

/// Parse a numeric answer; only finite values are accepted.
pub fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Outcome of a session that reached end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Number of complete (depth, delta) queries answered.
    pub queries: usize,
}

/// Interactive loop owning the loaded model and the terminal streams.
pub struct QuerySession<M, R, W> {
    model: M,
    input: TokenReader<R>,
    output: W,
    wide: bool,
}

impl<M: TravelTimeModel, R: BufRead, W: Write> QuerySession<M, R, W> {
    /// Build a session over a loaded model.
    ///
    /// Arguments
    /// -----------------
    /// * `model` – the loaded travel-time model, owned for the session lifetime.
    /// * `input` – where answers to the prompts are read from.
    /// * `output` – where prompts and reports are written.
    pub fn new(model: M, input: R, output: W) -> Self {
        QuerySession {
            model,
            input: TokenReader::new(input),
            output,
            wide: false,
        }
    }

    /// Print reports with the labeled-column layout instead of fixed-width rows.
    pub fn wide(mut self, yes: bool) -> Self {
        self.wide = yes;
        self
    }

    /// Run queries until the input is exhausted.
    ///
    /// Return
    /// ----------
    /// * A [`SessionSummary`] on end of input, or a [`TtimError`] if writing to the
    ///   output, reading the input or the model lookup fails.
    pub fn run(&mut self) -> Result<SessionSummary, TtimError> {
        let mut summary = SessionSummary::default();

        loop {
            self.model.select_branches();

            let Some(depth) = self.prompt_number(DEPTH_PROMPT)? else {
                break;
            };
            self.model.set_depth(depth);

            let Some(delta) = self.prompt_number(DELTA_PROMPT)? else {
                break;
            };

            self.answer(depth, delta)?;
            summary.queries += 1;
        }

        info!(queries = summary.queries, "end of input");
        Ok(summary)
    }

    /// Look up one query and print its report.
    fn answer(&mut self, depth: Kilometer, delta: Degree) -> Result<(), TtimError> {
        let arrivals = self.model.lookup(delta)?;
        let count = clamp_arrivals(arrivals.len() as i64, arrivals.len());
        let arrivals = &arrivals[..count];

        let phases = arrivals.iter().map(|a| a.phase.as_str()).join(" ");
        debug!(depth, delta, n = count, %phases, "lookup");

        write!(
            self.output,
            "{}",
            arrivals.report(depth, delta).wide(self.wide)
        )?;
        self.output.flush()?;
        Ok(())
    }

    /// Show `prompt` and read a number, re-prompting on malformed input.
    ///
    /// Return
    /// ----------
    /// * `Some(value)` for a finite number, `None` at end of input.
    fn prompt_number(&mut self, prompt: &str) -> Result<Option<f64>, TtimError> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let Some(token) = self.input.next_token()? else {
                return Ok(None);
            };

            match parse_number(&token) {
                Some(value) => return Ok(Some(value)),
                None => {
                    warn!(%token, "rejected non-numeric input");
                    self.input.discard_line();
                    writeln!(self.output, "Invalid number '{token}', try again.")?;
                }
            }
        }
    }

    /// Release the model and the output stream.
    pub fn into_parts(self) -> (M, W) {
        (self.model, self.output)
    }
}
