//! The depth-first figure generator.
//!
//! The generator walks a rooted tree whose nodes are partial figures. The
//! root is the single cell at [`POS_ORIGIN`]; the children of a node are
//! obtained by considering, in insertion order, every candidate strictly
//! after the node's own chosen index. Because every position with a linear
//! index at or below the origin is poisoned as an already-present candidate,
//! no cell below or left of the origin on its row can ever be chosen, so each
//! translation class of figures is visited through exactly one
//! representative.
//!
//! The whole state is a flat value: copying it (the type is [`Copy`]) yields
//! an independent enumerator that resumes from the same figure, which is what
//! the parallel driver builds its subtasks from.
//!
//! # Parameters
//!
//! * `A` - connectivity required among chosen cells, 4 or 8.
//! * `B` - connectivity required among unchosen cells, 4 or 8, or 0 to
//!   disable the background check.
//! * `STATS` - compile-time switch for the statistics counters. Keep it off
//!   for measurement runs; the extra bookkeeping is not free.

use crate::bitgrid::BitGrid;
use crate::grid::{
    DOWN_LEFT, MAX_CANDIDATES, NEIGHBORS4, NEIGHBORS8, NMAX, POS_ORIGIN, Pos, WIDTH, coords,
};
use crate::validity::ValidityTable;

/// First position the (8,8) background traversal visits: the padded cell
/// diagonally below-left of the origin, adjacent to the poisoned area.
const FIRST_VISIT_POS: Pos = POS_ORIGIN + DOWN_LEFT;

/// The traversal queue must hold every unchosen candidate plus the poisoned
/// cells between [`FIRST_VISIT_POS`] and the origin.
const VISIT_QUEUE_LEN: usize = MAX_CANDIDATES + WIDTH as usize + 1;

/// Counters collected when the `STATS` parameter is on.
///
/// Exactly one of the three fires for every figure the state machine
/// produces: `non_leaf` for valid figures that produced a first child,
/// `leaf` for valid figures with no child (including figures cut off at the
/// depth bound), `rejected` for figures discarded by the validity oracle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub non_leaf: u64,
    pub leaf: u64,
    pub rejected: u64,
}

/// Exhaustive generator of discrete figures up to size [`NMAX`].
///
/// See the [module documentation](self) for the tree model and parameters.
#[derive(Clone, Copy)]
pub struct FigureGenerator<const A: u8, const B: u8, const STATS: bool = false> {
    /// Depth of the current figure; its size is `level + 1`.
    level: u32,
    /// Current length of `candidates`.
    count: u32,
    /// Snapshot of `count` taken when each level was entered, so ascending
    /// can truncate the candidates discovered below.
    candidate_counts: [u32; NMAX],
    /// Index into `candidates` of the cell chosen at each level.
    chosen_indices: [u32; NMAX],
    /// Candidate positions in discovery order. Append-only; shrinks only by
    /// truncation in `parent`.
    candidates: [Pos; MAX_CANDIDATES],
    grid_candidates: BitGrid,
    /// Maintained only when `B != 0`; the background check reads it.
    grid_chosen: BitGrid,
    validity: ValidityTable,
    stats: GenerationStats,
}

impl<const A: u8, const B: u8, const STATS: bool> FigureGenerator<A, B, STATS> {
    /// Create a generator positioned on the root figure (the origin cell).
    pub fn new() -> Self {
        const {
            assert!(A == 4 || A == 8, "foreground connectivity must be 4 or 8");
            assert!(
                B == 0 || B == 4 || B == 8,
                "background connectivity must be 0, 4 or 8"
            );
        }

        let mut generator = Self {
            level: 0,
            count: 1,
            candidate_counts: [0; NMAX],
            chosen_indices: [0; NMAX],
            candidates: [0; MAX_CANDIDATES],
            grid_candidates: BitGrid::new(),
            grid_chosen: BitGrid::new(),
            validity: if B != 0 {
                ValidityTable::build(A, B)
            } else {
                ValidityTable::disabled()
            },
            stats: GenerationStats::default(),
        };
        generator.candidates[0] = POS_ORIGIN;
        generator.candidate_counts[0] = 1;
        generator.chosen_indices[0] = 0;
        // Poisoning every position up to the origin is what enforces the
        // bottom-row-leftmost representative: those cells can never be
        // appended as candidates again.
        for pos in 0..=POS_ORIGIN {
            generator.grid_candidates.set(pos);
        }
        if B != 0 {
            generator.grid_chosen.set(POS_ORIGIN);
        }
        generator
    }

    /// Depth of the current figure.
    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Size of the current figure, `level + 1`.
    #[inline]
    pub fn size(&self) -> u32 {
        self.level + 1
    }

    /// Statistics collected so far. All zero unless `STATS` is on.
    pub fn stats(&self) -> GenerationStats {
        self.stats
    }

    /// Chosen cells of the current figure as `(x, y)` offsets from the
    /// origin cell, in the order they were chosen.
    pub fn cells(&self) -> Vec<(i32, i32)> {
        let (origin_x, origin_y) = coords(POS_ORIGIN);
        (0..=self.level)
            .map(|l| {
                let pos = self.candidates[self.chosen_indices[l as usize] as usize];
                let (x, y) = coords(pos);
                ((x - origin_x) as i32, (y - origin_y) as i32)
            })
            .collect()
    }

    /// ASCII rendering of the current figure's bounding box, top row first:
    /// `X` for chosen cells, space otherwise, one line per row.
    pub fn render(&self) -> String {
        let cells = self.cells();
        let (mut min_x, mut min_y) = (i32::MAX, i32::MAX);
        let (mut max_x, mut max_y) = (i32::MIN, i32::MIN);
        for &(x, y) in &cells {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        let width = (max_x - min_x + 1) as usize;
        let height = (max_y - min_y + 1) as usize;
        let mut rows = vec![vec![b' '; width]; height];
        for &(x, y) in &cells {
            rows[(max_y - y) as usize][(x - min_x) as usize] = b'X';
        }
        let mut out = String::with_capacity(height * (width + 1));
        for row in rows {
            for byte in row {
                out.push(byte as char);
            }
            out.push('\n');
        }
        out
    }

    // ------------------------------------------------------------------
    // Tree transitions.

    #[inline]
    fn add_candidate(&mut self, pos: Pos) {
        if !self.grid_candidates.get(pos) {
            self.grid_candidates.set(pos);
            debug_assert!((self.count as usize) < MAX_CANDIDATES);
            self.candidates[self.count as usize] = pos;
            self.count += 1;
        }
    }

    /// Descend to the first child of the current figure, if any.
    ///
    /// Appends the unseen neighbors of the cell chosen at this level, then
    /// chooses the candidate immediately after it. Choosing only candidates
    /// strictly after the parent's index is what keeps the tree free of
    /// duplicates.
    fn first_child(&mut self) -> bool {
        debug_assert!((self.level as usize) < NMAX - 1);
        let idx = self.chosen_indices[self.level as usize];
        let pos = self.candidates[idx as usize];

        if A == 4 {
            for off in NEIGHBORS4 {
                self.add_candidate(pos + off);
            }
        } else {
            for off in NEIGHBORS8 {
                self.add_candidate(pos + off);
            }
        }

        if idx + 1 == self.count {
            if STATS {
                self.stats.leaf += 1;
            }
            return false;
        }

        self.level += 1;
        self.candidate_counts[self.level as usize] = self.count;
        self.chosen_indices[self.level as usize] = idx + 1;
        if B != 0 {
            self.grid_chosen.set(self.candidates[idx as usize + 1]);
        }
        if STATS {
            self.stats.non_leaf += 1;
        }
        true
    }

    /// Move the chosen cell at the current level to the next candidate.
    fn next_sibling(&mut self) -> bool {
        let idx = self.chosen_indices[self.level as usize];
        if idx + 1 < self.count {
            if B != 0 {
                self.grid_chosen.reset(self.candidates[idx as usize]);
                self.grid_chosen.set(self.candidates[idx as usize + 1]);
            }
            self.chosen_indices[self.level as usize] = idx + 1;
            true
        } else {
            false
        }
    }

    /// Ascend one level, dropping the candidates discovered below.
    fn parent(&mut self) {
        if B != 0 {
            self.grid_chosen
                .reset(self.candidates[self.chosen_indices[self.level as usize] as usize]);
        }
        self.level -= 1;
        for idx in self.candidate_counts[self.level as usize]..self.count {
            self.grid_candidates.reset(self.candidates[idx as usize]);
        }
        self.count = self.candidate_counts[self.level as usize];
    }

    // ------------------------------------------------------------------
    // Validity check.

    /// Pack the 8-neighborhood of `pos` into the lookup key.
    #[inline]
    fn neighborhood_key(&self, pos: Pos) -> u8 {
        use crate::grid::{DOWN, DOWN_RIGHT, LEFT, RIGHT, UP, UP_LEFT, UP_RIGHT};
        let n = |off: Pos| self.grid_chosen.get(pos + off) as u8;
        n(UP_LEFT)
            | n(UP) << 1
            | n(UP_RIGHT) << 2
            | n(LEFT) << 3
            | n(RIGHT) << 4
            | n(DOWN_LEFT) << 5
            | n(DOWN) << 6
            | n(DOWN_RIGHT) << 7
    }

    /// Decide whether the newly chosen cell left the background connected.
    ///
    /// The lookup table answers alone for every configuration except (8,8),
    /// where a local rejection can be a false positive and a full traversal
    /// of the unchosen candidates settles it.
    fn check_validity(&mut self) -> bool {
        let valid = if B == 0 {
            true
        } else {
            let pos = self.candidates[self.chosen_indices[self.level as usize] as usize];
            if self.validity.accepts(self.neighborhood_key(pos)) {
                true
            } else if A == 8 && B == 8 {
                self.background_connected()
            } else {
                false
            }
        };
        if STATS && !valid {
            self.stats.rejected += 1;
        }
        valid
    }

    /// Flood the unchosen candidates from the padding boundary; the
    /// background is connected iff everything gets visited.
    fn background_connected(&self) -> bool {
        let mut unvisited = self.grid_candidates.difference(&self.grid_chosen);
        // The poisoned positions up to FIRST_VISIT_POS sit outside any
        // figure's reach and need no visit.
        unvisited.clear_through(FIRST_VISIT_POS);

        let mut queue = [0 as Pos; VISIT_QUEUE_LEN];
        queue[0] = FIRST_VISIT_POS;
        let mut len = 1usize;
        while len > 0 {
            len -= 1;
            let pos = queue[len];
            for off in NEIGHBORS8 {
                let next = pos + off;
                if unvisited.get(next) {
                    unvisited.reset(next);
                    debug_assert!(len < VISIT_QUEUE_LEN);
                    queue[len] = next;
                    len += 1;
                }
            }
        }

        !unvisited.any_set()
    }

    // ------------------------------------------------------------------
    // Drivers.

    /// Enumerate every valid figure of size at most `nmax`, invoking
    /// `on_figure` with the level (size minus one) of each.
    ///
    /// `nmax` is clamped to `1..=NMAX`. Observers fire for every valid node
    /// of the tree, internal figures included, in depth-first order.
    pub fn generate<F: FnMut(u32)>(&mut self, nmax: u32, mut on_figure: F) {
        let max_level = nmax.clamp(1, NMAX as u32) - 1;

        loop {
            while self.check_validity() {
                on_figure(self.level);
                if self.level >= max_level {
                    if STATS {
                        self.stats.leaf += 1;
                    }
                    break;
                }
                if !self.first_child() {
                    break;
                }
            }
            loop {
                if self.next_sibling() {
                    break;
                }
                if self.level == 0 {
                    return;
                }
                self.parent();
            }
        }
    }

    /// Advance to the next valid figure of size at most `nmax`.
    ///
    /// Returns `false` when the enumeration is exhausted. The current figure
    /// stays inspectable between calls, which is what lets the parallel
    /// driver snapshot and resume mid-run.
    pub fn next_step(&mut self, nmax: u32) -> bool {
        let max_level = nmax.clamp(1, NMAX as u32) - 1;

        if self.level < max_level {
            if self.first_child() && self.check_validity() {
                return true;
            }
        } else if STATS {
            self.stats.leaf += 1;
        }
        loop {
            while !self.next_sibling() {
                if self.level == 0 {
                    return false;
                }
                self.parent();
            }
            if self.check_validity() {
                return true;
            }
        }
    }
}

impl<const A: u8, const B: u8, const STATS: bool> Default for FigureGenerator<A, B, STATS> {
    fn default() -> Self {
        Self::new()
    }
}
