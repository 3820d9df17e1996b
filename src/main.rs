use pageflow::{MonospaceOracle, PipelineError};
use std::env;
use std::fs;

/// Letter paper at 96 px/in.
const VIEWPORT_WIDTH: f32 = 816.0;
const VIEWPORT_HEIGHT: f32 = 1056.0;

/// Paginates a JSON content file on a monospace grid and prints the flow as JSON.
fn main() -> Result<(), PipelineError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if !(2..=3).contains(&args.len()) {
        eprintln!("Splits JSON content blocks into fixed-height pages.");
        eprintln!();
        eprintln!(
            "Usage: {} <path/to/content.json> [path/to/options.json]",
            args.first().map(String::as_str).unwrap_or("pageflow")
        );
        eprintln!();
        eprintln!("Set RUST_LOG=pageflow=debug to trace page decisions.");
        return Err(PipelineError::Usage("expected one or two arguments".into()));
    }

    log::info!("Loading content from {}", args[1]);
    let content = fs::read_to_string(&args[1])?;
    let options = match args.get(2) {
        Some(path) => {
            log::info!("Loading options from {}", path);
            Some(fs::read_to_string(path)?)
        }
        None => None,
    };

    let oracle = MonospaceOracle::new().with_viewport(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
    let flow = pageflow::paginate_json(&oracle, &content, options.as_deref())?;

    println!("{}", serde_json::to_string_pretty(&flow)?);
    Ok(())
}
