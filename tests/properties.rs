use proptest::prelude::*;

use otter_bench::{
    aggregate::statistics::mean_ci,
    builder::{read_dimacs, DimacsConfig},
    reports::Status,
    structures::{
        clause::CClause, expectation::Expectation, formula::Formula, literal::CLiteral,
    },
    validator::check_output,
};

const ATOMS: i32 = 6;

fn literal() -> impl Strategy<Value = CLiteral> {
    (1..=ATOMS, any::<bool>()).prop_map(|(atom, polarity)| if polarity { atom } else { -atom })
}

fn clause() -> impl Strategy<Value = CClause> {
    prop::collection::vec(literal(), 1..5)
}

fn formula() -> impl Strategy<Value = Vec<CClause>> {
    prop::collection::vec(clause(), 0..12)
}

/// A value for each atom.
fn full_assignment() -> impl Strategy<Value = Vec<CLiteral>> {
    prop::collection::vec(any::<bool>(), ATOMS as usize).prop_map(|values| {
        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                let atom = index as CLiteral + 1;
                if value {
                    atom
                } else {
                    -atom
                }
            })
            .collect()
    })
}

fn sat_output(assignment: &[CLiteral]) -> String {
    let values: Vec<String> = assignment.iter().map(|value| value.to_string()).collect();
    format!("s SATISFIABLE\nv {} 0\n", values.join(" "))
}

proptest! {
    #[test]
    fn dimacs_round_trip(clauses in formula()) {
        let formula = Formula::from(clauses.clone());
        let (read, info) = read_dimacs(formula.as_dimacs().as_bytes(), &DimacsConfig::default()).unwrap();

        prop_assert_eq!(read.clauses(), clauses.as_slice());
        prop_assert_eq!(info.expected_clauses, Some(clauses.len()));
    }

    #[test]
    fn certified_iff_every_clause_satisfied(clauses in formula(), assignment in full_assignment()) {
        let formula = Formula::from(clauses.clone());
        let satisfied = clauses
            .iter()
            .all(|clause| clause.iter().any(|literal| assignment.contains(literal)));

        let status = check_output(&formula, &sat_output(&assignment), Expectation::Unknown, false);
        match satisfied {
            true => prop_assert_eq!(status, Status::Satisfiable),
            false => prop_assert_eq!(status, Status::ClauseNotSatisfied),
        }
    }

    #[test]
    fn contradictions_rejected(mut assignment in full_assignment(), index in 0..ATOMS as usize) {
        assignment.push(-assignment[index]);
        let formula = Formula::from(vec![vec![1]]);
        let status = check_output(&formula, &sat_output(&assignment), Expectation::Unknown, false);
        prop_assert_eq!(status, Status::ContradictoryValues);
    }

    #[test]
    fn unsatisfiable_claims_trusted_unless_known(clauses in formula()) {
        let formula = Formula::from(clauses);
        let output = "s UNSATISFIABLE\n";
        prop_assert_eq!(check_output(&formula, output, Expectation::Unknown, false), Status::Unsatisfiable);
        prop_assert_eq!(check_output(&formula, output, Expectation::Satisfiable, false), Status::WrongSolution);
    }

    #[test]
    fn interval_about_mean(samples in prop::collection::vec(0.0..100.0_f64, 1..20)) {
        let (mean, ci) = mean_ci(&samples).unwrap();
        let min = samples.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        prop_assert!(ci >= 0.0);
        prop_assert!(min - 1e-9 <= mean && mean <= max + 1e-9);
    }
}

#[cfg(unix)]
mod solvers;

#[cfg(unix)]
mod admission {
    use super::*;
    use otter_bench::{reports::Report, scheduler::Scheduler};
    use crate::solvers::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(6))]

        #[test]
        fn peak_within_bound(max_jobs in 1..4_usize, count in 0..7_usize) {
            let bench = Bench::new();
            let mut config = bench.config();
            config.max_jobs.value = max_jobs;

            let scheduler = Scheduler::new(&config, shell(&format!("sleep 0.05; {UNKNOWN}")), no_interrupt());

            let mut reported = 0;
            let summary = scheduler.run(bench.items(count), &mut |_: Report| reported += 1, None);

            prop_assert_eq!(reported, count);
            prop_assert_eq!(summary.submitted, count);
            prop_assert!(summary.peak_running <= max_jobs);
        }
    }
}
