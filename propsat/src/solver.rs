//! Unit propagation engine.
use partial_ref::{IntoPartialRef, IntoPartialRefMut, PartialRef};

use thiserror::Error;

use crate::cnf::CnfFormula;
use crate::context::{set_var_count, AssignmentP, Context};
use crate::lit::{Lit, Var};
use crate::load::load_clause;
use crate::prop::{self, Value};
use crate::simplify;

/// An assignment that falsifies a stored clause.
///
/// Returned by [`propagate`](Solver::propagate) and [`rebase`](Solver::rebase). This is an
/// ordinary outcome of search, not a fault: it reports that the current branch of assignments
/// cannot satisfy the stored formula.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
#[error("assignment falsifies the clause {clause:?}")]
pub struct Contradiction {
    clause: Vec<Lit>,
}

impl Contradiction {
    /// The literals of a falsified clause.
    pub fn clause(&self) -> &[Lit] {
        &self.clause
    }
}

/// A unit propagation engine over a fixed set of variables.
///
/// The engine stores a conjunction of clauses and a monotonic partial assignment. A caller
/// alternates [`assign`](Solver::assign) calls for its own decisions with
/// [`propagate`](Solver::propagate) calls for the forced consequences;
/// [`rebase`](Solver::rebase) derives a reduced clause set to restart from.
///
/// Assignments are never retracted. A backtracking search keeps one engine per branch or
/// reconstructs engines from its own snapshots.
pub struct Solver {
    ctx: Box<Context>,
}

impl Solver {
    /// Create an engine for `var_count` variables, all unassigned.
    ///
    /// The variable count is fixed for the engine's lifetime; passing a variable with a larger
    /// index to any other method is a contract violation and panics.
    pub fn new(var_count: usize) -> Solver {
        let mut ctx = Box::new(Context::default());
        {
            let mut ctx = ctx.into_partial_ref_mut();
            set_var_count(ctx.borrow(), var_count);
        }
        Solver { ctx }
    }

    /// Number of variables of the engine.
    pub fn var_count(&self) -> usize {
        let ctx = self.ctx.into_partial_ref();
        ctx.part(AssignmentP).var_count()
    }

    /// Add a clause to the stored formula.
    ///
    /// Empty and unit clauses are rejected with a `false` return and nothing is stored. A bare
    /// fact is asserted with [`assign`](Solver::assign) instead.
    pub fn add_clause(&mut self, lits: &[Lit]) -> bool {
        let mut ctx = self.ctx.into_partial_ref_mut();
        load_clause(ctx.borrow(), lits)
    }

    /// Add every clause of a formula.
    ///
    /// Returns the number of accepted clauses; the difference to `formula.len()` is the number of
    /// rejected empty and unit clauses.
    pub fn add_formula(&mut self, formula: &CnfFormula) -> usize {
        let mut ctx = self.ctx.into_partial_ref_mut();
        let mut accepted = 0;
        for clause in formula.iter() {
            if load_clause(ctx.borrow(), clause) {
                accepted += 1;
            }
        }
        accepted
    }

    /// Assign a literal.
    ///
    /// Returns `true` if the literal's variable was still undefined (it is set so the literal
    /// holds) or already agreed with the literal. Returns `false` if the variable already holds
    /// the opposite value; the assignment is left unchanged in that case. A `false` result means
    /// the current branch of assignments is inconsistent, it is not an error.
    pub fn assign(&mut self, lit: Lit) -> bool {
        let mut ctx = self.ctx.into_partial_ref_mut();
        ctx.part_mut(AssignmentP).assign(lit)
    }

    /// The state of a variable under the current assignment.
    pub fn value(&self, var: Var) -> Value {
        let ctx = self.ctx.into_partial_ref();
        ctx.part(AssignmentP).value(var)
    }

    /// Whether the literal's variable is defined and satisfies the literal.
    pub fn lit_is_true(&self, lit: Lit) -> bool {
        let ctx = self.ctx.into_partial_ref();
        ctx.part(AssignmentP).lit_is_true(lit)
    }

    /// Whether the literal's variable is defined and falsifies the literal.
    pub fn lit_is_false(&self, lit: Lit) -> bool {
        let ctx = self.ctx.into_partial_ref();
        ctx.part(AssignmentP).lit_is_false(lit)
    }

    /// Run unit propagation to fixpoint.
    ///
    /// On success every stored clause is satisfied or has at least two unassigned literals. On a
    /// contradiction the assignment keeps everything derived before the falsified clause was
    /// found; nothing is rolled back.
    pub fn propagate(&mut self) -> Result<(), Contradiction> {
        let mut ctx = self.ctx.into_partial_ref_mut();
        let result = prop::propagate(ctx.borrow());
        match result {
            Ok(()) => Ok(()),
            Err(conflict) => {
                let (ctx_lits, _ctx) = ctx.split_borrow();
                Err(Contradiction {
                    clause: conflict.lits(&ctx_lits).to_vec(),
                })
            }
        }
    }

    /// Derive the reduced clause set of the current assignment.
    ///
    /// The result starts with one unit clause per defined variable (the forced facts) followed by
    /// the remainder of every clause that is neither satisfied nor fully falsified, with its
    /// falsified literals removed. If some stored clause is fully falsified the assignment
    /// already contradicts the formula and a [`Contradiction`] is returned instead.
    ///
    /// The engine itself is left unchanged; the caller decides whether to continue with this
    /// engine or to rebuild one from the result.
    pub fn rebase(&self) -> Result<CnfFormula, Contradiction> {
        let mut ctx = self.ctx.into_partial_ref();
        let result = simplify::rebase(ctx.borrow());
        match result {
            Ok(reduced) => Ok(reduced),
            Err(conflict) => {
                let (ctx_lits, _ctx) = ctx.split_borrow();
                Err(Contradiction {
                    clause: conflict.lits(&ctx_lits).to_vec(),
                })
            }
        }
    }
}
