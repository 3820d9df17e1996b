pub mod fixtures;

use pageflow::{Flow, MonospaceOracle, PipelineError};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A monospace oracle on a US-letter viewport (816 x 1056 px).
pub fn letter_oracle() -> MonospaceOracle {
    MonospaceOracle::new().with_viewport(816.0, 1056.0)
}

/// Paginates JSON content and options against the letter oracle.
pub fn paginate_values(content: &Value, options: &Value) -> Result<Flow, PipelineError> {
    init_logging();
    let content = serde_json::to_string(content)?;
    let options = serde_json::to_string(options)?;
    pageflow::paginate_json(&letter_oracle(), &content, Some(options.as_str()))
}

/// The fragment texts of each page.
pub fn page_texts(flow: &Flow) -> Vec<Vec<&str>> {
    flow.pages
        .iter()
        .map(|page| page.fragments.iter().map(|f| f.text.as_str()).collect())
        .collect()
}
