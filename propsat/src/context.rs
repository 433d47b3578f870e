//! Central engine data structure.
use partial_ref::{part, partial, PartialRef, PartialRefTarget};

use crate::clause::{ClauseAlloc, ClauseDb};
use crate::prop::{Assignment, Watchlists};
use crate::tmp::TmpData;

/// Part declarations for the [`Context`] struct.
pub mod parts {
    use super::*;

    part!(pub AssignmentP: Assignment);
    part!(pub ClauseAllocP: ClauseAlloc);
    part!(pub ClauseDbP: ClauseDb);
    part!(pub TmpDataP: TmpData);
    part!(pub WatchlistsP: Watchlists);
}

pub use parts::*;

/// Central engine data structure.
///
/// This struct contains all data kept by the engine. Most functions operating on multiple fields
/// of the context use partial references provided by the `partial_ref` crate. This documents the
/// data dependencies and makes the borrow checker happy without the overhead of passing individual
/// references.
#[derive(PartialRefTarget, Default)]
pub struct Context {
    #[part = "AssignmentP"]
    assignment: Assignment,
    #[part = "ClauseAllocP"]
    clause_alloc: ClauseAlloc,
    #[part = "ClauseDbP"]
    clause_db: ClauseDb,
    #[part = "TmpDataP"]
    tmp_data: TmpData,
    #[part = "WatchlistsP"]
    watchlists: Watchlists,
}

/// Update structures for a new variable count.
///
/// The variable count is fixed when an engine is constructed, so this runs exactly once per
/// context.
pub fn set_var_count(
    mut ctx: partial!(Context, mut AssignmentP, mut TmpDataP, mut WatchlistsP),
    count: usize,
) {
    ctx.part_mut(AssignmentP).set_var_count(count);
    ctx.part_mut(TmpDataP).set_var_count(count);
    ctx.part_mut(WatchlistsP).set_var_count(count);
}
