use proptest::{prelude::*, *};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::cnf::CnfFormula;
use crate::lit::Lit;

/// Generate a formula that forces a chain of assignments.
///
/// Picks a hidden polarity for every variable and emits, for each adjacent pair of variables, a
/// clause that forces the next chain literal once all earlier ones hold. Each clause optionally
/// carries further negated antecedents drawn from earlier chain positions. Asserting the first
/// returned literal thus makes unit propagation derive every literal of the chain.
///
/// Returns the chain literals in forcing order together with the shuffled formula.
pub fn implication_chain_formula(
    vars: impl Strategy<Value = usize>,
    extra_antecedents: impl Strategy<Value = usize>,
) -> impl Strategy<Value = (Vec<Lit>, CnfFormula)> {
    (vars, extra_antecedents).prop_flat_map(|(vars, extra_antecedents)| {
        let vars = vars.max(2);

        collection::vec(bool::ANY, vars).prop_perturb(move |polarity, mut rng| {
            let lits = polarity
                .into_iter()
                .enumerate()
                .map(|(index, polarity)| Lit::from_index(index, polarity))
                .collect::<Vec<_>>();

            let mut clauses: Vec<Vec<Lit>> = vec![];

            for i in 0..lits.len() - 1 {
                let mut clause = vec![!lits[i], lits[i + 1]];
                for _ in 0..extra_antecedents {
                    clause.push(!lits[rng.gen_range(0, i + 1)]);
                }
                clause.shuffle(&mut rng);
                clauses.push(clause);
            }

            clauses.shuffle(&mut rng);
            let mut formula = CnfFormula::from(clauses);
            formula.set_var_count(lits.len());
            (lits, formula)
        })
    })
}

/// Generate an implication chain whose head contradicts its tail.
///
/// Same construction as [`implication_chain_formula`], with one additional clause that rules out
/// the first and last chain literal holding at the same time. Asserting the first returned literal
/// and propagating must therefore end in a contradiction.
pub fn contradictory_chain_formula(
    vars: impl Strategy<Value = usize>,
    extra_antecedents: impl Strategy<Value = usize>,
) -> impl Strategy<Value = (Vec<Lit>, CnfFormula)> {
    implication_chain_formula(vars, extra_antecedents).prop_perturb(
        |(lits, formula), mut rng| {
            let mut clauses: Vec<Vec<Lit>> =
                formula.iter().map(|clause| clause.to_owned()).collect();

            let &first = lits.first().unwrap();
            let &last = lits.last().unwrap();
            let mut clause = vec![!first, !last];
            clause.shuffle(&mut rng);
            clauses.push(clause);

            clauses.shuffle(&mut rng);
            let mut contradictory = CnfFormula::from(clauses);
            contradictory.set_var_count(lits.len());
            (lits, contradictory)
        },
    )
}

/// Generate a satisfiable instance.
///
/// This generates a random full assignment and then only generates clauses compatible with that
/// assignment. Every clause has at least two literals. Returns the satisfying literals together
/// with the formula.
pub fn sat_formula(
    vars: impl Strategy<Value = usize>,
    clause_count: impl Strategy<Value = usize>,
    density: impl Strategy<Value = f64>,
    polarity_dist: impl Strategy<Value = f64>,
) -> impl Strategy<Value = (Vec<Lit>, CnfFormula)> {
    (vars, clause_count, density, polarity_dist).prop_flat_map(
        |(vars, clause_count, density, polarity_dist)| {
            let vars = vars.max(2);

            collection::vec(bool::ANY, vars).prop_perturb(move |polarity, mut rng| {
                let mut clauses: Vec<Vec<Lit>> = vec![];
                let lits = polarity
                    .into_iter()
                    .enumerate()
                    .map(|(index, polarity)| Lit::from_index(index, polarity))
                    .collect::<Vec<_>>();

                for _ in 0..clause_count {
                    let fixed_index = rng.gen_range(0, vars);
                    let fixed_lit = lits[fixed_index];
                    let mut clause = vec![fixed_lit];
                    for &lit in lits.iter() {
                        if lit != fixed_lit && rng.gen_bool(density) {
                            clause.push(lit ^ rng.gen_bool(polarity_dist));
                        }
                    }
                    if clause.len() < 2 {
                        // The satisfied literal is already present, so the filler's polarity
                        // cannot make the clause unsatisfiable.
                        let offset = rng.gen_range(1, vars);
                        let filler = lits[(fixed_index + offset) % vars];
                        clause.push(filler ^ rng.gen_bool(polarity_dist));
                    }
                    clause.shuffle(&mut rng);
                    clauses.push(clause);
                }

                clauses.shuffle(&mut rng);
                let mut formula = CnfFormula::from(clauses);
                formula.set_var_count(lits.len());
                (lits, formula)
            })
        },
    )
}
