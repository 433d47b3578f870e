//! Deriving a reduced clause set from the current assignment.
use partial_ref::{partial, PartialRef};

use crate::cnf::CnfFormula;
use crate::context::{AssignmentP, ClauseAllocP, ClauseDbP, Context};
use crate::prop::{Conflict, Value};

/// Reduce the stored clauses under the current assignment.
///
/// Produces a fresh formula with the same logical content restricted to the unassigned variables:
/// a clause with a satisfied literal is implied and dropped, every other clause keeps exactly its
/// non-falsified literals. The satisfied literal of each defined variable leads the result as a
/// unit clause, so replacing the stored formula by the result loses no forced facts.
///
/// A clause whose literals are all falsified reduces to the empty clause. That proves the current
/// assignment contradicts the stored formula and is reported as a conflict instead of being
/// dropped.
///
/// Neither the assignment nor the clause database is changed.
pub fn rebase(
    mut ctx: partial!(Context, AssignmentP, ClauseAllocP, ClauseDbP),
) -> Result<CnfFormula, Conflict> {
    let (assignment, mut ctx) = ctx.split_part(AssignmentP);
    let (alloc, ctx) = ctx.split_part(ClauseAllocP);
    let db = ctx.part(ClauseDbP);

    let mut reduced = CnfFormula::new();
    reduced.set_var_count(assignment.var_count());

    for lit in assignment.forced_lits() {
        reduced.add_clause(Some(lit));
    }

    let mut new_lits = vec![];

    for &cref in db.clauses() {
        let lits = alloc.clause(cref).lits();

        new_lits.clear();
        let mut satisfied = false;

        for &lit in lits {
            match assignment.lit_value(lit) {
                Value::True => {
                    satisfied = true;
                    break;
                }
                Value::False => (),
                Value::Undefined => new_lits.push(lit),
            }
        }

        if satisfied {
            continue;
        }

        if new_lits.is_empty() {
            return Err(Conflict::Clause(cref));
        }

        reduced.add_clause(new_lits.iter().cloned());
    }

    Ok(reduced)
}
