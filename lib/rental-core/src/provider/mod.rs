pub mod input_source;
pub mod report_generator;
