use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use stopsync_core::{RunInput, run};
use stopsync_ingest::{read_authority_registry, read_general_registry};
use stopsync_model::{NameNormalizationMode, ProcessingOptions};
use stopsync_normalization::NameNormalizer;
use stopsync_output::write_outputs;
use stopsync_rules::{RuleSet, load_rule_set_or_default};

use crate::cli::{NormalizeArgs, RulesArgs, RunArgs};
use crate::types::RunReport;

pub fn run_reconcile(args: &RunArgs) -> Result<RunReport> {
    let rules = load_rules(args.rules.as_deref())?;
    let options = processing_options(args);
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.general));

    // =========================================================================
    // Stage 1: Ingest
    // =========================================================================
    let ingest_span = info_span!("ingest", general = %args.general.display());
    let ingest_start = Instant::now();
    let input = ingest_span.in_scope(|| -> Result<RunInput> {
        let general = read_general_registry(&args.general)
            .with_context(|| format!("read general registry {}", args.general.display()))?;
        let rapid = read_authority_registry(&args.rapid)
            .with_context(|| format!("read rapid registry {}", args.rapid.display()))?;
        let rail = read_authority_registry(&args.rail)
            .with_context(|| format!("read rail registry {}", args.rail.display()))?;
        info!(
            general_rows = general.len(),
            rapid_rows = rapid.len(),
            rail_rows = rail.len(),
            duration_ms = ingest_start.elapsed().as_millis(),
            "ingest complete"
        );
        Ok(RunInput {
            general,
            rapid,
            rail,
        })
    })?;

    // =========================================================================
    // Stage 2: Reconcile
    // =========================================================================
    let output = run(&input, &rules, &options).context("reconcile registries")?;

    // =========================================================================
    // Stage 3: Output
    // =========================================================================
    let written = if args.dry_run {
        info!(output_dir = %output_dir.display(), "dry run, no files written");
        None
    } else {
        let output_span = info_span!("output", output_dir = %output_dir.display());
        let output_start = Instant::now();
        let paths = output_span.in_scope(|| {
            write_outputs(&output_dir, &output.stops, &output.route_links, args.json)
        });
        let paths = paths
            .with_context(|| format!("write outputs to {}", output_dir.display()))?;
        info!(
            stops = output.stops.len(),
            route_links = output.route_links.len(),
            duration_ms = output_start.elapsed().as_millis(),
            "output complete"
        );
        Some(paths)
    };

    Ok(RunReport {
        output_dir,
        output,
        written,
    })
}

pub fn run_normalize(args: &NormalizeArgs) -> Result<Vec<String>> {
    let rules = load_rules(args.rules.as_deref())?;
    let normalizer = NameNormalizer::new(&rules.names);
    let names = args
        .text
        .iter()
        .map(|text| {
            if args.street {
                normalizer.street_name(text)
            } else {
                normalizer.stop_name(text)
            }
        })
        .collect();
    Ok(names)
}

pub fn run_rules(args: &RulesArgs) -> Result<RuleSet> {
    load_rules(args.rules.as_deref())
}

fn load_rules(path: Option<&Path>) -> Result<RuleSet> {
    load_rule_set_or_default(path).with_context(|| match path {
        Some(path) => format!("load rules from {}", path.display()),
        None => "load built-in rules".to_string(),
    })
}

fn processing_options(args: &RunArgs) -> ProcessingOptions {
    let mut options = ProcessingOptions::default();
    if args.keep_all_routes {
        options = options.with_excluded_route_marker(None);
    }
    if args.no_normalize {
        options = options.with_name_normalization(NameNormalizationMode::Skip);
    }
    options
}

/// `processed/` next to the general registry.
fn default_output_dir(general: &Path) -> PathBuf {
    general
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("processed")
}
