pub mod aggregate;
pub mod data;

pub use aggregate::BestPractice;
pub use data::best_practices;
