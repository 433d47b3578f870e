//! Unit propagation.
pub mod assignment;
pub mod watch;

pub use assignment::{Assignment, Value};
pub use watch::Watchlists;

use std::slice;

use log::{debug, trace};
use partial_ref::{partial, PartialRef};

use crate::clause::ClauseRef;
use crate::context::{AssignmentP, ClauseAllocP, ClauseDbP, Context, WatchlistsP};
use crate::lit::Lit;

/// A clause falsified during unit propagation.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Conflict {
    /// A stored unit clause whose literal contradicts the assignment.
    Unit(Lit),
    /// A stored clause with every literal falsified.
    Clause(ClauseRef),
}

impl Conflict {
    /// The literals of the falsified clause.
    pub fn lits<'out, 'a, 'b>(&'a self, ctx: &'b partial!('b Context, ClauseAllocP)) -> &'out [Lit]
    where
        'a: 'out,
        'b: 'out,
    {
        match self {
            Conflict::Unit(lit) => slice::from_ref(lit),
            Conflict::Clause(cref) => ctx.part(ClauseAllocP).clause(*cref).lits(),
        }
    }
}

/// Propagate all forced assignments until fixpoint or conflict.
///
/// Works a queue of literals known to be true, starting from everything the assignment already
/// forces. Popping a literal re-examines the clauses watched by its variable: a clause with every
/// literal falsified is a conflict and ends propagation immediately, a clause with all but one
/// literal falsified and no satisfied literal forces its remaining literal, which is assigned and
/// queued in turn.
///
/// On success the assignment is a fixpoint: every stored clause is satisfied or still has at
/// least two unassigned literals.
pub fn propagate(
    mut ctx: partial!(Context, mut AssignmentP, ClauseAllocP, ClauseDbP, WatchlistsP),
) -> Result<(), Conflict> {
    let (db, mut ctx) = ctx.split_part(ClauseDbP);
    let (alloc, mut ctx) = ctx.split_part(ClauseAllocP);
    let (watchlists, mut ctx) = ctx.split_part(WatchlistsP);
    let assignment = ctx.part_mut(AssignmentP);

    let mut queue: Vec<Lit> = assignment.forced_lits().collect();

    // The database cannot hold unit clauses (they are rejected at load time), so this scan
    // normally finds nothing. Seeding is defined over whatever the database holds, not over that
    // policy.
    for &cref in db.clauses() {
        let lits = alloc.clause(cref).lits();
        if let [lit] = *lits {
            if !assignment.assign(lit) {
                return Err(Conflict::Unit(lit));
            }
            queue.push(lit);
        }
    }

    let mut queue_head_pos = 0;

    while queue_head_pos < queue.len() {
        let lit = queue[queue_head_pos];
        queue_head_pos += 1;

        for &cref in watchlists.watched_by(lit.var()) {
            let lits = alloc.clause(cref).lits();

            let mut false_count = 0;
            let mut unassigned = None;
            let mut satisfied = false;

            for &clause_lit in lits {
                match assignment.lit_value(clause_lit) {
                    Value::True => {
                        satisfied = true;
                        break;
                    }
                    Value::False => false_count += 1,
                    Value::Undefined => unassigned = Some(clause_lit),
                }
            }

            // A satisfied clause never forces anything, no matter how many of its other literals
            // are false.
            if satisfied {
                continue;
            }

            if false_count == lits.len() {
                debug!("conflict in clause {:?}", lits);
                return Err(Conflict::Clause(cref));
            }

            if false_count + 1 == lits.len() {
                // All literals but one are false and none is true, so the remaining unassigned
                // literal is forced.
                if let Some(forced) = unassigned {
                    if !assignment.assign(forced) {
                        return Err(Conflict::Clause(cref));
                    }
                    trace!("propagating {:?} from clause {:?}", forced, lits);
                    queue.push(forced);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use partial_ref::IntoPartialRefMut;

    use propsat_formula::{lit, lits, var};

    use crate::context::set_var_count;
    use crate::load::load_clause;

    #[test]
    fn forces_the_last_open_literal() {
        let mut ctx = Context::default();
        let mut ctx = ctx.into_partial_ref_mut();
        set_var_count(ctx.borrow(), 4);

        assert!(load_clause(ctx.borrow(), &lits![-1, -2, 3]));

        assert!(ctx.part_mut(AssignmentP).assign(lit!(1)));
        assert!(ctx.part_mut(AssignmentP).assign(lit!(2)));

        assert_eq!(propagate(ctx.borrow()), Ok(()));

        assert_eq!(ctx.part(AssignmentP).value(var!(3)), Value::True);
        assert_eq!(ctx.part(AssignmentP).value(var!(4)), Value::Undefined);
    }

    #[test]
    fn conflict_names_the_falsified_clause() {
        let mut ctx = Context::default();
        let mut ctx = ctx.into_partial_ref_mut();
        set_var_count(ctx.borrow(), 3);

        assert!(load_clause(ctx.borrow(), &lits![-1, 2]));
        assert!(load_clause(ctx.borrow(), &lits![-1, -2, 3]));
        assert!(load_clause(ctx.borrow(), &lits![-2, -3]));

        assert!(ctx.part_mut(AssignmentP).assign(lit!(1)));

        let conflict = propagate(ctx.borrow()).unwrap_err();

        let (ctx_lits, _ctx) = ctx.split_borrow();
        assert_eq!(conflict.lits(&ctx_lits), &lits![-2, -3][..]);
    }

    #[test]
    fn without_assignments_nothing_propagates() {
        let mut ctx = Context::default();
        let mut ctx = ctx.into_partial_ref_mut();
        set_var_count(ctx.borrow(), 3);

        assert!(load_clause(ctx.borrow(), &lits![1, 2]));
        assert!(load_clause(ctx.borrow(), &lits![-2, 3]));

        assert_eq!(propagate(ctx.borrow()), Ok(()));

        for index in 0..3 {
            assert_eq!(
                ctx.part(AssignmentP).lit_value(Lit::from_index(index, true)),
                Value::Undefined
            );
        }
    }
}
