mod dates;

pub use dates::{format_date, parse_date, DATE_FORMAT};
