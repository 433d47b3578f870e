//! Propsat is a unit propagation engine for boolean formulas in [conjunctive normal form][cnf].
//! Given a set of clauses and a partial variable assignment, it derives every assignment forced by
//! [unit propagation][bcp] and detects when the assignment contradicts a clause.
//!
//! It is not a complete decision procedure: there are no decision heuristics, no clause learning
//! and no backtracking. A search driver built on top decides which literal to [assign][solver::Solver::assign]
//! next, calls [`propagate`][solver::Solver::propagate] for the forced consequences and may use
//! [`rebase`][solver::Solver::rebase] to derive a reduced clause set for a restart.
//!
//! [cnf]: https://en.wikipedia.org/wiki/Conjunctive_normal_form
//! [bcp]: https://en.wikipedia.org/wiki/Unit_propagation

pub mod solver;

mod clause;
mod context;
mod load;
mod prop;
mod simplify;
mod tmp;

pub use propsat_formula::{cnf, lit, CnfFormula, Lit, Var};

pub use crate::prop::Value;
pub use crate::solver::{Contradiction, Solver};
