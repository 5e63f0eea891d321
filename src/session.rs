// src/session.rs

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

use crate::{
    config::Config,
    filters::collect_filters,
    load::load_trips,
    pager::show_raw_data,
    prompt::Prompter,
    stats::report_all,
};

const RESTART_QUESTION: &str = "\nWould you like to restart? Enter 'yes'(or 'y') or 'no'(or 'n').\n";

/// Collect filters, load, report and page, then offer a restart.
/// Every iteration starts from scratch; nothing is carried over.
pub fn run<R: BufRead, W: Write>(config: &Config, prompter: &mut Prompter<R, W>) -> Result<()> {
    let mut iteration = 0usize;
    loop {
        iteration += 1;
        info!(iteration, "session start");

        let selection = collect_filters(prompter)?;
        let table = load_trips(config, &selection)?;
        report_all(&table, prompter.output())?;
        show_raw_data(&table, prompter, config.page_size)?;

        if !prompter.yes_no(RESTART_QUESTION)? {
            info!(iteration, "session finished");
            return Ok(());
        }
    }
}
