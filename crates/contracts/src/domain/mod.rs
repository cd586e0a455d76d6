pub mod a001_solution_spec;
pub mod a002_solution_build;
pub mod a003_template;
pub mod a004_course;
pub mod a005_best_practice;

/// `&["a", "b"]` -> `vec!["a".to_string(), "b".to_string()]` для статических данных
pub(crate) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
