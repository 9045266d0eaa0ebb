//! Driver equivalence: the callback, stepwise and parallel drivers must
//! produce bit-identical per-size counts for any configuration.

use proptest::prelude::*;

use figgen::registry::{self, Connectivity};

fn counts(conn: Connectivity, nmax: u32, stepwise: bool) -> Vec<u64> {
    registry::enumerate_counts(conn, nmax, stepwise)
        .expect("size in range")
        .counts
}

#[test]
fn all_three_drivers_agree() {
    for conn in Connectivity::ALL {
        let nmax = if conn.foreground() == 4 { 7 } else { 6 };
        let callback = counts(conn, nmax, false);
        let stepwise = counts(conn, nmax, true);
        let parallel = registry::enumerate_parallel(conn, nmax, Some(3), None)
            .expect("size in range")
            .counts;
        let default_split = registry::enumerate_parallel(conn, nmax, None, None)
            .expect("size in range")
            .counts;

        assert_eq!(callback, stepwise, "({conn}) stepwise drifted");
        assert_eq!(callback, parallel, "({conn}) parallel drifted");
        assert_eq!(callback, default_split, "({conn}) default threshold drifted");
    }
}

#[test]
fn stats_do_not_change_the_counts() {
    for conn in Connectivity::ALL {
        let plain = counts(conn, 6, false);
        let with_stats = registry::enumerate_with_stats(conn, 6, false)
            .expect("size in range")
            .counts;
        assert_eq!(plain, with_stats, "({conn})");
    }
}

#[test]
fn both_sequential_drivers_collect_the_same_stats() {
    for conn in Connectivity::ALL {
        let callback = registry::enumerate_with_stats(conn, 6, false)
            .expect("size in range")
            .stats
            .expect("stats requested");
        let stepwise = registry::enumerate_with_stats(conn, 6, true)
            .expect("size in range")
            .stats
            .expect("stats requested");
        assert_eq!(callback, stepwise, "({conn})");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn parallel_matches_callback(
        conn_idx in 0usize..6,
        nmax in 1u32..=6,
        threshold in 1u32..=6,
    ) {
        let conn = Connectivity::ALL[conn_idx];
        let expected = counts(conn, nmax, false);
        let parallel = registry::enumerate_parallel(conn, nmax, Some(threshold), None)
            .expect("size in range")
            .counts;
        prop_assert_eq!(expected, parallel);
    }
}
