use tracing::info;
use tracing_subscriber::EnvFilter;

use querydocs::{RenderParams, generate};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Merge an optional config file with command-line flags. Flags win.
pub fn resolve_params(args: &CliArgs) -> Result<RenderParams, AppError> {
    let mut params = match &args.config {
        Some(path) => RenderParams::from_json_file(path)?,
        None => RenderParams::default(),
    };

    if let Some(pattern) = &args.querycommands {
        params.pattern = Some(pattern.clone());
    }
    if let Some(output) = &args.output {
        params.output = Some(output.clone());
    }
    if let Some(format) = args.format {
        params.format = format;
    }
    if let Some(title) = &args.title {
        params.title = title.clone();
    }
    if let Some(template) = &args.template {
        params.template = Some(template.clone());
    }

    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }

    let params = resolve_params(&args)?;
    let output = params.output_path();

    info!("Rendering {} listing to {:?}", params.format, output);
    let report = generate(&params).map_err(AppError::from)?;

    info!("Parsed: {}", report.parsed);
    info!("Skipped: {}", report.skipped);
    info!("Commands: {}", report.commands.len());

    Ok(())
}
