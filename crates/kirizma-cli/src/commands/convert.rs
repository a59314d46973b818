//! Convert command: DOS chart + lyric → lane chart.

use anyhow::{Context, Result};
use kirizma_core::{ConvertOptions, convert};
use tracing::{info, warn};

use crate::cli::{ConvertArgs, OutputFormat};
use crate::cli_utils;

/// Merge the config file (if any) with command-line overrides.
pub fn resolve_options(args: &ConvertArgs) -> Result<ConvertOptions> {
    let mut options = match &args.config {
        Some(path) => {
            let options = ConvertOptions::load(path)
                .with_context(|| format!("Failed to load config {}", path))?;
            info!("Loaded config from {}", path);
            options
        }
        None => ConvertOptions::default(),
    };

    if let Some(mode) = args.mode {
        options.mode = mode;
    }
    if let Some(slot) = args.in_slot {
        options.input_slot = slot;
    }
    if let Some(slot) = args.out_slot {
        options.output_slot = slot;
    }

    options.keep_onigiri |= args.keep_onigiri;
    options.keep_4key |= args.keep_4key;
    options.use_sleft |= args.use_sleft;

    options.rules.use_j_for_zi |= args.j_for_zi;
    options.rules.use_c_for_chi |= args.c_for_chi;
    options.rules.use_f_for_fu |= args.f_for_fu;
    options.rules.use_l_for_ra_row |= args.l_for_ra;
    options.rules.use_x_for_n |= args.x_for_n;

    options.extra_ignored.extend(args.ignore.iter().cloned());

    Ok(options)
}

pub fn run(args: &ConvertArgs) -> Result<()> {
    let options = resolve_options(args)?;

    let chart = cli_utils::read_input(args.chart.as_deref())?;
    let kana = match (&args.kana, &args.kana_file) {
        (Some(kana), _) => kana.clone(),
        (None, Some(path)) => cli_utils::read_input(Some(path.as_str()))?,
        (None, None) => anyhow::bail!("Either --kana or --kana-file is required"),
    };

    let conversion = convert(&chart, &kana, &options)?;

    if conversion.timeline.is_empty() {
        warn!("No timing data found in slot {}", options.input_slot);
    }
    eprintln!(
        "{} notes assigned, {} frames dropped",
        conversion.assignment.note_count(),
        conversion.assignment.dropped()
    );

    let content = match args.format {
        OutputFormat::Dos => conversion.output,
        OutputFormat::Json => conversion.to_json()?,
    };
    cli_utils::write_output(args.output.as_deref(), &content)
}
