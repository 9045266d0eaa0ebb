//! The background-connectivity oracle's 256-entry lookup table.
//!
//! After a cell is chosen, its 3x3 neighborhood decides in O(1) whether the
//! background (unchosen cells) is still connected. The neighborhood
//!
//! ```text
//! a b c
//! d . f
//! g h i
//! ```
//!
//! is packed into a key byte with `a` in bit 0 through `i` in bit 7 (the
//! center is the new chosen cell and carries no bit). The table is consulted
//! for every configuration with a background constraint; only (8,8) needs a
//! graph-traversal fallback on rejection, because there a local rejection can
//! be a false positive.

/// Precomputed accept/reject verdicts for all 256 neighborhood patterns.
#[derive(Clone, Copy)]
pub struct ValidityTable {
    accept: [bool; 256],
}

impl ValidityTable {
    /// All-reject table for configurations that never consult it (B = 0).
    pub const fn disabled() -> Self {
        Self {
            accept: [false; 256],
        }
    }

    /// Build the table for foreground connectivity `a_conn` and background
    /// connectivity `b_conn`.
    ///
    /// The base count walks the cyclic sequence (f,c,b,a,d,g,h,i,f) and
    /// counts chosen-to-unchosen transitions, one per run of unchosen cells
    /// around the new cell. Corrections:
    ///
    /// - B = 8: a chosen corner with both its axis neighbors unchosen does
    ///   not split the background, the two unchosen cells stay diagonally
    ///   adjacent.
    /// - A = 8 and B = 4: an unchosen corner squeezed between two chosen
    ///   axis neighbors is still reachable through an external path, so the
    ///   run it forms does not count.
    ///
    /// The figure remains valid iff the corrected count is at most 1.
    pub fn build(a_conn: u8, b_conn: u8) -> Self {
        let mut accept = [false; 256];
        for (key, slot) in accept.iter_mut().enumerate() {
            let bit = |mask: usize| key & mask != 0;
            let (a, b, c, d) = (bit(1), bit(2), bit(4), bit(8));
            let (f, g, h, i) = (bit(16), bit(32), bit(64), bit(128));
            let t = |cond: bool| cond as i32;

            let mut runs = t(f && !c)
                + t(c && !b)
                + t(b && !a)
                + t(a && !d)
                + t(d && !g)
                + t(g && !h)
                + t(h && !i)
                + t(i && !f);

            if b_conn == 8 {
                runs -= t(a && !b && !d) + t(c && !b && !f) + t(g && !d && !h) + t(i && !f && !h);
            }
            if a_conn == 8 && b_conn == 4 {
                runs -= t(!a && b && d) + t(!c && b && f) + t(!g && d && h) + t(!i && f && h);
            }

            *slot = runs <= 1;
        }
        Self { accept }
    }

    #[inline]
    pub fn accepts(&self, key: u8) -> bool {
        self.accept[key as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: u8 = 1;
    const B: u8 = 2;
    const D: u8 = 8;
    const F: u8 = 16;
    const H: u8 = 64;

    #[test]
    fn empty_and_full_neighborhoods_are_valid() {
        for (a_conn, b_conn) in [(4, 4), (4, 8), (8, 4), (8, 8)] {
            let table = ValidityTable::build(a_conn, b_conn);
            assert!(table.accepts(0));
            assert!(table.accepts(255));
        }
    }

    #[test]
    fn opposite_axis_neighbors_split_the_background() {
        // b and h chosen: the left and right unchosen runs are separated.
        let key = B | H;
        for (a_conn, b_conn) in [(4, 4), (4, 8), (8, 4), (8, 8)] {
            let table = ValidityTable::build(a_conn, b_conn);
            assert!(!table.accepts(key), "({a_conn},{b_conn}) must reject");
        }
    }

    #[test]
    fn pinched_corner_only_passes_with_diagonal_foreground() {
        // b and d chosen, the corner a unchosen: under (8,4) the corner
        // reaches the rest of the background through an external path.
        let key = B | D;
        assert!(ValidityTable::build(8, 4).accepts(key));
        assert!(!ValidityTable::build(4, 4).accepts(key));
        assert!(!ValidityTable::build(4, 8).accepts(key));
        assert!(!ValidityTable::build(8, 8).accepts(key));
    }

    #[test]
    fn lone_corner_only_splits_a_four_connected_background() {
        // a and f chosen, b and d unchosen: with an 8-connected background
        // the cells around a stay diagonally linked.
        let key = A | F;
        assert!(ValidityTable::build(4, 8).accepts(key));
        assert!(ValidityTable::build(8, 8).accepts(key));
        assert!(!ValidityTable::build(4, 4).accepts(key));
        assert!(!ValidityTable::build(8, 4).accepts(key));
    }

    #[test]
    fn disabled_table_rejects_everything() {
        let table = ValidityTable::disabled();
        assert!((0..=255u8).all(|key| !table.accepts(key)));
    }
}
