/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, with a target for each part of an evaluation.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [reading formulas](crate::builder)
    pub const DIMACS: &str = "dimacs";

    /// Logs related to [parsing solutions](crate::solution)
    pub const SOLUTION: &str = "solution";

    /// Logs related to [validation](crate::validator)
    pub const VALIDATION: &str = "validation";

    /// Logs related to [launching and supervising solvers](crate::runner)
    pub const RUNNER: &str = "runner";

    /// Logs related to [admission and completion of jobs](crate::scheduler)
    pub const SCHEDULER: &str = "scheduler";

    /// Logs related to [repeated trials](crate::aggregate)
    pub const AGGREGATE: &str = "aggregate";

    /// Logs related to [selection of instances](crate::selection)
    pub const SELECTION: &str = "selection";
}
