//! Watchlists to find the clauses affected by an assignment.
//!
//! Every stored clause is watched by each variable appearing in it, so a single per-variable
//! lookup yields exactly the clauses that have to be re-examined when that variable's value
//! changes. This is the simple full-occurrence scheme: it rescans a whole clause per trigger and
//! trades the tighter bound of the classical two-watched-literal scheme for not having to move
//! watches around during propagation. Since assignments are never undone there is no need to ever
//! unregister a watch.

use crate::clause::ClauseRef;
use crate::lit::Var;

/// Watchlists to find the clauses affected by an assignment.
#[derive(Default)]
pub struct Watchlists {
    watches: Vec<Vec<ClauseRef>>,
}

impl Watchlists {
    /// Update structures for a new variable count.
    pub fn set_var_count(&mut self, count: usize) {
        self.watches.resize(count, vec![]);
    }

    /// Make a variable watch a clause.
    pub fn add_watch(&mut self, var: Var, cref: ClauseRef) {
        self.watches[var.index()].push(cref)
    }

    /// Return the clauses watched by a given variable.
    pub fn watched_by(&self, var: Var) -> &[ClauseRef] {
        &self.watches[var.index()]
    }
}
