//! The partial assignment.
use crate::lit::{Lit, Var};

/// A variable's state in the current assignment.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Value {
    True,
    False,
    Undefined,
}

impl Default for Value {
    fn default() -> Value {
        Value::Undefined
    }
}

impl Value {
    /// The value that satisfies a literal of the given polarity.
    #[inline]
    pub fn from_polarity(polarity: bool) -> Value {
        if polarity {
            Value::True
        } else {
            Value::False
        }
    }

    /// The value of the negated variable.
    #[inline]
    pub fn negate(self) -> Value {
        match self {
            Value::True => Value::False,
            Value::False => Value::True,
            Value::Undefined => Value::Undefined,
        }
    }
}

/// Current partial assignment.
///
/// One slot per variable, fixed at construction. Slots only ever move from `Undefined` to a
/// defined value: there is no unassignment. A search driver that backtracks keeps its own
/// snapshots and rebuilds an engine from them.
#[derive(Default)]
pub struct Assignment {
    assignment: Vec<Value>,
}

impl Assignment {
    /// Update structures for a new variable count.
    pub fn set_var_count(&mut self, count: usize) {
        self.assignment.resize(count, Value::Undefined);
    }

    /// Number of variables in the assignment.
    pub fn var_count(&self) -> usize {
        self.assignment.len()
    }

    /// The value of a variable.
    pub fn value(&self, var: Var) -> Value {
        self.assignment[var.index()]
    }

    /// The value of a literal under the current assignment.
    ///
    /// `True` iff the literal is satisfied, `False` iff it is falsified.
    pub fn lit_value(&self, lit: Lit) -> Value {
        let value = self.assignment[lit.index()];
        if lit.is_negative() {
            value.negate()
        } else {
            value
        }
    }

    /// Whether the literal's variable is defined and satisfies the literal.
    pub fn lit_is_true(&self, lit: Lit) -> bool {
        self.lit_value(lit) == Value::True
    }

    /// Whether the literal's variable is defined and falsifies the literal.
    pub fn lit_is_false(&self, lit: Lit) -> bool {
        self.lit_value(lit) == Value::False
    }

    /// Assign a literal.
    ///
    /// If the literal's variable is undefined it is set so the literal becomes satisfied and
    /// `true` is returned. Otherwise nothing changes and the result reports whether the existing
    /// value agrees with the literal. A `false` result marks the current branch of assignments as
    /// inconsistent; it is an ordinary outcome, not an error.
    pub fn assign(&mut self, lit: Lit) -> bool {
        match self.lit_value(lit) {
            Value::Undefined => {
                self.assignment[lit.index()] = Value::from_polarity(lit.is_positive());
                true
            }
            value => value == Value::True,
        }
    }

    /// The satisfied literal of every defined variable, in index order.
    pub fn forced_lits(&self) -> impl Iterator<Item = Lit> + '_ {
        self.assignment
            .iter()
            .enumerate()
            .filter_map(|(index, &value)| match value {
                Value::True => Some(Lit::from_index(index, true)),
                Value::False => Some(Lit::from_index(index, false)),
                Value::Undefined => None,
            })
    }
}
