// src/pager.rs

use anyhow::{Context, Result};
use arrow::util::pretty::pretty_format_batches;
use std::{
    io::{BufRead, Write},
    ops::Range,
};
use tracing::debug;

use crate::{load::TripTable, prompt::Prompter};

/// Position of the raw data pager between questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagerState {
    #[default]
    AwaitingFirstAnswer,
    Paging { offset: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagerStep {
    Reveal { rows: Range<usize>, next: PagerState },
    Done,
}

impl PagerState {
    pub fn question(&self, page_size: usize) -> String {
        match self {
            PagerState::AwaitingFirstAnswer => format!(
                "Do you want to see {} lines of raw data? Enter 'yes'(or 'y') or 'no'(or 'n').\n",
                page_size
            ),
            PagerState::Paging { .. } => format!(
                "Do you want to see {} more lines of raw data? Enter 'yes'(or 'y') or 'no'(or 'n').\n",
                page_size
            ),
        }
    }

    /// Advance on a yes/no answer. Ranges may run past the table's end.
    pub fn step(self, show_more: bool, page_size: usize) -> PagerStep {
        if !show_more {
            return PagerStep::Done;
        }
        let offset = match self {
            PagerState::AwaitingFirstAnswer => 0,
            PagerState::Paging { offset } => offset,
        };
        PagerStep::Reveal {
            rows: offset..offset + page_size,
            next: PagerState::Paging {
                offset: offset + page_size,
            },
        }
    }
}

/// Page through `table` until the user answers no.
pub fn show_raw_data<R: BufRead, W: Write>(
    table: &TripTable,
    prompter: &mut Prompter<R, W>,
    page_size: usize,
) -> Result<()> {
    let mut state = PagerState::default();
    loop {
        let show_more = prompter.yes_no(&state.question(page_size))?;
        match state.step(show_more, page_size) {
            PagerStep::Done => return Ok(()),
            PagerStep::Reveal { rows, next } => {
                debug!(start = rows.start, end = rows.end, "revealing raw rows");
                let page = table.slice(rows.start, rows.len());
                let rendered = pretty_format_batches(&[page.batch().clone()])
                    .context("formatting raw rows")?;
                writeln!(prompter.output(), "{}", rendered)?;
                state = next;
            }
        }
    }
}
