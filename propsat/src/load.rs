//! Adding clauses to the engine.
use log::debug;
use partial_ref::{partial, PartialRef};

use crate::clause::{db, ClauseHeader};
use crate::context::{parts::*, Context};
use crate::lit::Lit;

/// Adds a clause to the stored formula.
///
/// Empty and unit clauses are rejected without touching any engine state; the database represents
/// neither, and a caller holding a bare fact asserts it through
/// [`assign`](crate::solver::Solver::assign) instead. Duplicate literals are stored as given.
///
/// An accepted clause is copied into the clause arena and registered with the watchlists once per
/// distinct variable it mentions.
///
/// Returns whether the clause was accepted.
pub fn load_clause(
    mut ctx: partial!(
        Context,
        mut ClauseAllocP,
        mut ClauseDbP,
        mut TmpDataP,
        mut WatchlistsP,
    ),
    lits: &[Lit],
) -> bool {
    if lits.len() < 2 {
        debug!("rejecting clause of length {}", lits.len());
        return false;
    }

    // Marking the distinct variables also bound-checks every literal before any state is touched.
    let (tmp, mut ctx) = ctx.split_part_mut(TmpDataP);
    for &lit in lits {
        tmp.seen[lit.index()] = true;
    }

    let cref = db::add_clause(ctx.borrow(), ClauseHeader::new(), lits);

    let watchlists = ctx.part_mut(WatchlistsP);
    for &lit in lits {
        if tmp.seen[lit.index()] {
            tmp.seen[lit.index()] = false;
            watchlists.add_watch(lit.var(), cref);
        }
    }

    true
}
