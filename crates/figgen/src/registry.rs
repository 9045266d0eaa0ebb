//! Supported connectivity configurations and the monomorphizing dispatcher.
//!
//! The generator is specialized at compile time over its connectivity
//! parameters so the hot loop carries no per-cell branching. This module maps
//! the runtime selection (a two-digit token such as `"84"`) onto the six
//! monomorphized instantiations.

use std::mem::size_of;

use crate::error::{Error, Result};
use crate::generator::{FigureGenerator, GenerationStats};
use crate::grid::NMAX;
use crate::parallel::{self, ProgressFn};

/// The accepted connectivity tokens; first digit foreground, second
/// background (`0` disables the background constraint).
pub const CONNECTIVITY_TOKENS: [&str; 6] = ["40", "44", "48", "80", "84", "88"];

/// One of the six supported (foreground, background) connectivity pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connectivity {
    C40,
    C44,
    C48,
    C80,
    C84,
    C88,
}

impl Connectivity {
    pub const ALL: [Connectivity; 6] = [
        Connectivity::C40,
        Connectivity::C44,
        Connectivity::C48,
        Connectivity::C80,
        Connectivity::C84,
        Connectivity::C88,
    ];

    /// Parse a two-digit token such as `"40"` or `"88"`.
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "40" => Ok(Connectivity::C40),
            "44" => Ok(Connectivity::C44),
            "48" => Ok(Connectivity::C48),
            "80" => Ok(Connectivity::C80),
            "84" => Ok(Connectivity::C84),
            "88" => Ok(Connectivity::C88),
            _ => Err(Error::Connectivity(format!(
                "unknown connectivity '{token}': expected one of {}",
                CONNECTIVITY_TOKENS.join(", ")
            ))),
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Connectivity::C40 => "40",
            Connectivity::C44 => "44",
            Connectivity::C48 => "48",
            Connectivity::C80 => "80",
            Connectivity::C84 => "84",
            Connectivity::C88 => "88",
        }
    }

    /// Connectivity required among chosen cells.
    pub fn foreground(self) -> u8 {
        match self {
            Connectivity::C40 | Connectivity::C44 | Connectivity::C48 => 4,
            Connectivity::C80 | Connectivity::C84 | Connectivity::C88 => 8,
        }
    }

    /// Connectivity required among unchosen cells, 0 when disabled.
    pub fn background(self) -> u8 {
        match self {
            Connectivity::C40 | Connectivity::C80 => 0,
            Connectivity::C44 | Connectivity::C84 => 4,
            Connectivity::C48 | Connectivity::C88 => 8,
        }
    }

    /// Split depth giving good load balance for the parallel driver.
    pub fn default_threshold(self) -> u32 {
        if self.foreground() == 4 { 8 } else { 6 }
    }
}

impl std::fmt::Display for Connectivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// Result of one enumeration run.
pub struct RunOutcome {
    /// `counts[k]` figures of size `k + 1` were visited.
    pub counts: Vec<u64>,
    /// Present when the run collected statistics.
    pub stats: Option<GenerationStats>,
    /// Byte size of the monomorphized generator value.
    pub state_bytes: usize,
}

fn validate_nmax(nmax: u32) -> Result<()> {
    if nmax < 1 || nmax as usize > NMAX {
        return Err(Error::Size(format!(
            "figure size {nmax} out of range: this build supports 1..={NMAX}"
        )));
    }
    Ok(())
}

fn run_sequential<const A: u8, const B: u8, const STATS: bool>(
    nmax: u32,
    stepwise: bool,
) -> RunOutcome {
    let mut generator = FigureGenerator::<A, B, STATS>::new();
    let mut counts = vec![0u64; nmax as usize];
    if stepwise {
        loop {
            counts[generator.level() as usize] += 1;
            if !generator.next_step(nmax) {
                break;
            }
        }
    } else {
        generator.generate(nmax, |level| counts[level as usize] += 1);
    }
    RunOutcome {
        counts,
        stats: STATS.then(|| generator.stats()),
        state_bytes: size_of::<FigureGenerator<A, B, STATS>>(),
    }
}

/// Count figures by size with a sequential driver (callback by default,
/// stepwise when `stepwise` is set).
pub fn enumerate_counts(conn: Connectivity, nmax: u32, stepwise: bool) -> Result<RunOutcome> {
    validate_nmax(nmax)?;
    Ok(match conn {
        Connectivity::C40 => run_sequential::<4, 0, false>(nmax, stepwise),
        Connectivity::C44 => run_sequential::<4, 4, false>(nmax, stepwise),
        Connectivity::C48 => run_sequential::<4, 8, false>(nmax, stepwise),
        Connectivity::C80 => run_sequential::<8, 0, false>(nmax, stepwise),
        Connectivity::C84 => run_sequential::<8, 4, false>(nmax, stepwise),
        Connectivity::C88 => run_sequential::<8, 8, false>(nmax, stepwise),
    })
}

/// Like [`enumerate_counts`], additionally collecting [`GenerationStats`].
pub fn enumerate_with_stats(conn: Connectivity, nmax: u32, stepwise: bool) -> Result<RunOutcome> {
    validate_nmax(nmax)?;
    Ok(match conn {
        Connectivity::C40 => run_sequential::<4, 0, true>(nmax, stepwise),
        Connectivity::C44 => run_sequential::<4, 4, true>(nmax, stepwise),
        Connectivity::C48 => run_sequential::<4, 8, true>(nmax, stepwise),
        Connectivity::C80 => run_sequential::<8, 0, true>(nmax, stepwise),
        Connectivity::C84 => run_sequential::<8, 4, true>(nmax, stepwise),
        Connectivity::C88 => run_sequential::<8, 8, true>(nmax, stepwise),
    })
}

/// Count figures by size on a thread pool.
///
/// `threshold` defaults to [`Connectivity::default_threshold`]; `progress`
/// receives completed/total subtask counts as blocks drain.
pub fn enumerate_parallel(
    conn: Connectivity,
    nmax: u32,
    threshold: Option<u32>,
    progress: Option<ProgressFn<'_>>,
) -> Result<RunOutcome> {
    validate_nmax(nmax)?;
    let threshold = threshold.unwrap_or_else(|| conn.default_threshold());
    let counts = match conn {
        Connectivity::C40 => parallel::enumerate_parallel::<4, 0>(nmax, threshold, progress),
        Connectivity::C44 => parallel::enumerate_parallel::<4, 4>(nmax, threshold, progress),
        Connectivity::C48 => parallel::enumerate_parallel::<4, 8>(nmax, threshold, progress),
        Connectivity::C80 => parallel::enumerate_parallel::<8, 0>(nmax, threshold, progress),
        Connectivity::C84 => parallel::enumerate_parallel::<8, 4>(nmax, threshold, progress),
        Connectivity::C88 => parallel::enumerate_parallel::<8, 8>(nmax, threshold, progress),
    };
    Ok(RunOutcome {
        counts,
        stats: None,
        state_bytes: state_bytesize(conn),
    })
}

/// Byte size of the generator value backing a connectivity selection.
pub fn state_bytesize(conn: Connectivity) -> usize {
    match conn {
        Connectivity::C40 => size_of::<FigureGenerator<4, 0>>(),
        Connectivity::C44 => size_of::<FigureGenerator<4, 4>>(),
        Connectivity::C48 => size_of::<FigureGenerator<4, 8>>(),
        Connectivity::C80 => size_of::<FigureGenerator<8, 0>>(),
        Connectivity::C84 => size_of::<FigureGenerator<8, 4>>(),
        Connectivity::C88 => size_of::<FigureGenerator<8, 8>>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip() {
        for token in CONNECTIVITY_TOKENS {
            let conn = Connectivity::from_token(token).unwrap();
            assert_eq!(conn.token(), token);
            assert_eq!(
                format!("{}{}", conn.foreground(), conn.background()),
                token
            );
        }
        assert!(Connectivity::from_token("42").is_err());
        assert!(Connectivity::from_token("").is_err());
    }

    #[test]
    fn out_of_range_sizes_are_rejected() {
        assert!(enumerate_counts(Connectivity::C40, 0, false).is_err());
        assert!(enumerate_counts(Connectivity::C40, NMAX as u32 + 1, false).is_err());
        assert!(enumerate_counts(Connectivity::C40, 1, false).is_ok());
    }

    #[test]
    fn default_thresholds_follow_the_foreground() {
        assert_eq!(Connectivity::C44.default_threshold(), 8);
        assert_eq!(Connectivity::C88.default_threshold(), 6);
    }
}
