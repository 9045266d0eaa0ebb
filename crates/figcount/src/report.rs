//! Report section formatting.
//!
//! Each enumeration run is printed as a bracketed section header followed by
//! `key = value` lines, one section per selected connectivity.

use std::fmt;

use figgen::registry::{Connectivity, RunOutcome};

use crate::cmd::RunFlags;

/// One formatted report section.
pub struct Section {
    header: String,
    lines: Vec<(String, String)>,
}

impl Section {
    /// Assemble the section for one finished run.
    pub fn new(
        conn: Connectivity,
        max_size: u32,
        flags: &RunFlags,
        seconds: f64,
        outcome: &RunOutcome,
    ) -> Self {
        let mut suffix = String::new();
        if flags.stat {
            suffix.push_str("_stats");
        }
        if flags.alt {
            suffix.push_str("_alt");
        }
        if flags.mt {
            suffix.push_str("_mt");
        }
        let header = format!(
            "[n{}_a{}_b{}{}]",
            max_size,
            conn.foreground(),
            conn.background(),
            suffix
        );

        let total: u64 = outcome.counts.iter().sum();
        let millions_per_sec = if seconds > 0.0 {
            total as f64 / seconds / 1e6
        } else {
            0.0
        };

        let mut lines = vec![
            ("time_seconds".to_string(), format!("{seconds:.6}")),
            ("state_bytesize".to_string(), outcome.state_bytes.to_string()),
        ];
        for (size, count) in (1..).zip(&outcome.counts) {
            lines.push((format!("count_{size}"), count.to_string()));
        }
        lines.push(("total_count".to_string(), total.to_string()));
        lines.push((
            "millions_per_sec".to_string(),
            format!("{millions_per_sec:.2}"),
        ));

        if let Some(stats) = outcome.stats {
            let pct = |part: u64| format!("{:.2}%", part as f64 / total as f64 * 100.0);
            lines.push(("stat_non_leaf".to_string(), stats.non_leaf.to_string()));
            lines.push(("stat_leaf".to_string(), stats.leaf.to_string()));
            lines.push(("stat_rejected".to_string(), stats.rejected.to_string()));
            lines.push(("ratio_non_leaf".to_string(), pct(stats.non_leaf)));
            lines.push(("ratio_leaf".to_string(), pct(stats.leaf)));
            lines.push(("ratio_rejected".to_string(), pct(stats.rejected)));
        }

        Self { header, lines }
    }

    /// The bracketed header line, without the trailing newline.
    #[cfg(test)]
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Look up a formatted value by key.
    #[cfg(test)]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        for (key, value) in &self.lines {
            writeln!(f, "{key} = {value}")?;
        }
        Ok(())
    }
}
