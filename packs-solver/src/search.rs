//! Branch search over pack counts, largest pack size first.
//!
//! At every pack size the search tries each count from `remaining / size + 2` down to zero
//! and recurses into the next smaller size. A branch becomes a candidate as soon as its
//! running total covers the target; candidates are ranked by overage and then by pack
//! count, and only a strictly better candidate replaces the incumbent. The first candidate
//! with no overage ends the search.
//!
//! Once the incumbent's overage reaches the gcd lower bound, a count is abandoned along
//! with every count below it as soon as its branch cannot finish with fewer packs.
//!
//! The packs chosen so far form a chain of [`Frame`]s that lives on the call stack, and
//! both the incumbent and the early exit travel through return values, so a single search
//! owns all of its state.

use crate::{
    catalog::PackCatalog,
    result::{Breakdown, CalculationResult},
};
use std::ops::ControlFlow;
use tracing::trace;

/// Counts past `remaining / size` that are still tried at each pack size.
pub const COUNT_HEADROOM: u64 = 2;

struct Frame<'a> {
    size: u64,
    count: u64,
    parent: Option<&'a Frame<'a>>,
}

fn collect_breakdown(mut chain: Option<&Frame<'_>>) -> Breakdown {
    let mut breakdown = Breakdown::new();
    while let Some(frame) = chain {
        breakdown.insert(frame.size, frame.count);
        chain = frame.parent;
    }
    breakdown
}

#[derive(Debug, Clone)]
struct Candidate {
    breakdown: Breakdown,
    overage: u64,
    packs: u64,
}

impl Candidate {
    fn is_beaten_by(&self, overage: u64, packs: u64) -> bool {
        (overage, packs) < (self.overage, self.packs)
    }
}

type Step = ControlFlow<Candidate, Option<Candidate>>;

struct Search<'c> {
    sizes: &'c [u64],
    target: u64,
    floor_overage: u64,
}

impl<'c> Search<'c> {
    fn explore<'a>(
        &self,
        depth: usize,
        chain: Option<&'a Frame<'a>>,
        total: u64,
        packs: u64,
        best: Option<Candidate>,
    ) -> Step {
        if total >= self.target {
            let overage = total - self.target;
            if best
                .as_ref()
                .is_some_and(|incumbent| !incumbent.is_beaten_by(overage, packs))
            {
                return ControlFlow::Continue(best);
            }
            let candidate = Candidate {
                breakdown: collect_breakdown(chain),
                overage,
                packs,
            };
            trace!(overage, packs, "new incumbent");
            return match overage {
                0 => ControlFlow::Break(candidate),
                _ => ControlFlow::Continue(Some(candidate)),
            };
        }

        let Some(&size) = self.sizes.get(depth) else {
            return ControlFlow::Continue(best);
        };

        let remaining = self.target - total;
        let mut best = best;
        for count in (0..=remaining / size + COUNT_HEADROOM).rev() {
            let added = count.saturating_mul(size);
            // Lower counts leave more to cover with smaller sizes, so none of them can do better.
            if added < remaining
                && self.is_hopeless(best.as_ref(), depth + 1, remaining - added, packs + count)
            {
                break;
            }
            best = if count == 0 {
                self.explore(depth + 1, chain, total, packs, best)?
            } else {
                let frame = Frame {
                    size,
                    count,
                    parent: chain,
                };
                self.explore(
                    depth + 1,
                    Some(&frame),
                    total.saturating_add(added),
                    packs + count,
                    best,
                )?
            };
        }
        ControlFlow::Continue(best)
    }

    /// True when a branch that still needs `remaining` items from the sizes at `depth` and
    /// below cannot produce a new incumbent: either no sizes are left, or the incumbent
    /// already has the lowest reachable overage and the branch cannot finish with fewer
    /// packs, even using only the largest size left.
    fn is_hopeless(
        &self,
        best: Option<&Candidate>,
        depth: usize,
        remaining: u64,
        packs: u64,
    ) -> bool {
        let Some(&size) = self.sizes.get(depth) else {
            return true;
        };
        match best {
            Some(incumbent) if incumbent.overage == self.floor_overage => {
                packs + remaining.div_ceil(size) >= incumbent.packs
            }
            _ => false,
        }
    }
}

/// Finds the breakdown for `target` by branch search. `target` must be positive.
pub fn solve(catalog: &PackCatalog, target: u64) -> CalculationResult {
    let search = Search {
        sizes: catalog.sizes(),
        target,
        floor_overage: catalog.min_overage(target),
    };
    let best = match search.explore(0, None, 0, 0, None) {
        ControlFlow::Break(exact) => Some(exact),
        ControlFlow::Continue(best) => best,
    };
    // Enough of the largest size always covers the target, so a candidate exists.
    let breakdown = best.map(|c| c.breakdown).unwrap_or_else(|| {
        Breakdown::from([(catalog.largest(), target.div_ceil(catalog.largest()))])
    });
    CalculationResult::new(breakdown, target)
}
