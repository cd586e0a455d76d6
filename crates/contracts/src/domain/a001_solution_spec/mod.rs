pub mod aggregate;
pub mod data;

pub use aggregate::SolutionSpec;
pub use data::solution_specs;
