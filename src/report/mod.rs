mod writer;

pub use writer::{read_report, write_report, Report};
