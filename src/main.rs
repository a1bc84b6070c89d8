use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use er_editor::{Diagram, EditorConfig, Validator};

/// Check an ER diagram for well-formedness problems
#[derive(Parser, Debug)]
#[command(name = "er-check")]
#[command(about = "Validate a Chen-notation ER diagram saved as JSON", long_about = None)]
struct Args {
    /// Diagram JSON file (use "-" for stdin)
    #[arg(value_name = "DIAGRAM")]
    diagram: PathBuf,

    /// Editor config JSON selecting the validation rules
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Exit with a non-zero status when any issue is found
    #[arg(long)]
    strict: bool,
}

fn main() -> ExitCode {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) if !args.strict => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(message) => {
            eprintln!("er-check: {message}");
            ExitCode::from(2)
        }
    }
}

/// Prints every issue and returns how many there were
fn run(args: &Args) -> Result<usize, String> {
    let config = match &args.config {
        Some(path) => EditorConfig::load(path).map_err(|e| format!("{}: {e}", path.display()))?,
        None => EditorConfig::default(),
    };

    let json = if args.diagram.to_str() == Some("-") {
        let mut buffer = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut buffer)
            .map_err(|e| format!("Failed to read from stdin: {e}"))?;
        buffer
    } else {
        std::fs::read_to_string(&args.diagram)
            .map_err(|e| format!("Failed to read {}: {e}", args.diagram.display()))?
    };
    let diagram: Diagram =
        serde_json::from_str(&json).map_err(|e| format!("Invalid diagram JSON: {e}"))?;

    log::info!(
        "Checking {} entities, {} relationships, {} attributes",
        diagram.entities().count(),
        diagram.relationships().count(),
        diagram.attributes().count()
    );

    let issues = Validator::new(&diagram, &config.rules).diagram();
    for issue in &issues {
        let kind = diagram
            .kind_of(issue.element_id)
            .map_or("element", |kind| kind.name());
        println!("{kind} {issue}");
    }
    if issues.is_empty() {
        eprintln!("No issues found");
    } else {
        eprintln!("{} element(s) with issues", issues.len());
    }
    Ok(issues.len())
}
