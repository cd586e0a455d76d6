pub mod p100_blueprint_detail;
pub mod p101_course_detail;
