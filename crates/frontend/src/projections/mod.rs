pub mod p100_blueprint_detail;
pub mod p101_course_detail;

use contracts::shared::catalog::DetailSource;

/// Подпись источника детальной записи
pub fn source_label(source: DetailSource) -> &'static str {
    match source {
        DetailSource::HandAuthored => "Curated",
        DetailSource::GeneratedFromSpec => "Generated from spec",
        DetailSource::GeneratedFromBuild => "Generated from build",
        DetailSource::GeneratedFromCourse => "Generated from course",
    }
}
