//! Run orchestration for the `figcount` CLI.

use std::io;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::Result;
use figgen::registry::{self, Connectivity};

use crate::report::Section;

/// Driver flags selected on the command line.
pub struct RunFlags {
    pub stat: bool,
    pub alt: bool,
    pub mt: bool,
}

/// Enumerate one connectivity selection and format its report section.
pub fn run(conn: Connectivity, max_size: u32, flags: &RunFlags) -> Result<Section> {
    let start = Instant::now();
    let outcome = if flags.mt {
        let bar = Mutex::new(pbr::ProgressBar::on(io::stderr(), 0));
        let progress = |done: usize, total: usize| {
            let mut bar = bar.lock().unwrap();
            bar.total = total as u64;
            bar.set(done as u64);
        };
        let outcome = registry::enumerate_parallel(conn, max_size, None, Some(&progress))?;
        bar.into_inner().unwrap().finish();
        outcome
    } else if flags.stat {
        registry::enumerate_with_stats(conn, max_size, flags.alt)?
    } else {
        registry::enumerate_counts(conn, max_size, flags.alt)?
    };
    let seconds = start.elapsed().as_secs_f64();

    Ok(Section::new(conn, max_size, flags, seconds, &outcome))
}
