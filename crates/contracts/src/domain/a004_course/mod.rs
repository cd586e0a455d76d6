pub mod aggregate;
pub mod data;

pub use aggregate::Course;
pub use data::courses;
