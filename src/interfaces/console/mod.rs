pub mod prompt;
pub mod report_writer;
