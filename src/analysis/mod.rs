mod coverage;

pub use coverage::{analyze_project, analyze_project_data, growth_rates, unique_crashes};

#[cfg(test)]
mod tests;
