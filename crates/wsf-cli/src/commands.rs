use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use wsf_output::{default_output_path, flatten_file};
use wsf_transform::ColumnLayout;

use crate::cli::{FlattenArgs, SizeArgs};
use crate::types::FlattenResult;

pub fn run_columns(args: &SizeArgs) -> Result<()> {
    let options = args.options();
    options.validate()?;
    for label in ColumnLayout::from_options(&options).header() {
        println!("{label}");
    }
    Ok(())
}

pub fn run_flatten(args: &FlattenArgs) -> Result<FlattenResult> {
    let options = args.options();
    options.validate()?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    let span = info_span!("flatten", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let outcome = flatten_file(&args.input, &output, &options)
        .with_context(|| format!("flatten {}", args.input.display()))?;

    let duration_ms = start.elapsed().as_millis();
    info!(
        output = %outcome.output_path.display(),
        row_count = outcome.summary.row_count,
        duration_ms,
        "flatten complete"
    );
    Ok(FlattenResult {
        input: args.input.clone(),
        output: outcome.output_path,
        options,
        duration_ms,
        summary: outcome.summary,
    })
}
