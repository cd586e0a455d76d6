pub mod aggregate;
pub mod data;

pub use aggregate::SolutionBuild;
pub use data::solution_builds;
