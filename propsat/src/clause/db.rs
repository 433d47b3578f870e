//! Database of stored clauses.
use partial_ref::{partial, PartialRef};

use super::{ClauseHeader, ClauseRef};

use crate::context::{ClauseAllocP, ClauseDbP, Context};
use crate::lit::Lit;

/// Database of stored clauses.
///
/// Keeps one [`ClauseRef`] per stored clause in insertion order. Clauses are never removed
/// individually; deriving a reduced clause set produces a fresh formula instead of editing this
/// database in place.
#[derive(Default)]
pub struct ClauseDb {
    clauses: Vec<ClauseRef>,
}

impl ClauseDb {
    /// References of all stored clauses in insertion order.
    pub fn clauses(&self) -> &[ClauseRef] {
        &self.clauses
    }
}

/// Add a clause to the database.
pub fn add_clause(
    mut ctx: partial!(Context, mut ClauseDbP, mut ClauseAllocP),
    header: ClauseHeader,
    lits: &[Lit],
) -> ClauseRef {
    let cref = ctx.part_mut(ClauseAllocP).add_clause(header, lits);

    ctx.part_mut(ClauseDbP).clauses.push(cref);

    cref
}
