// ABOUTME: Command implementations for the scanforge CLI
// ABOUTME: Handles execution of the generate and validate commands

use anyhow::Result;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info};

use super::config::Config;
use crate::output::OutputWriter;
use crate::render::{RenderLayout, Renderer};
use crate::scan::ScanTable;
use crate::template::TemplateContext;

/// Generate config files and command lists from a parameter table
pub async fn generate(
    parameters: PathBuf,
    template: Option<PathBuf>,
    dry_run: bool,
    config: &Config,
) -> Result<()> {
    info!("Reading parameter table: {}", parameters.display());

    let table = ScanTable::from_file(&parameters)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to parse parameter table: {}", e))?;
    debug!("Parameter fields: {}", table.fields().join(", "));
    info!("Loaded {} scan points", table.len());

    let template_path = template.unwrap_or_else(|| config.template_path.clone());
    let template_text = fs::read_to_string(&template_path).await.map_err(|e| {
        anyhow::anyhow!(
            "Failed to read config template '{}': {}",
            template_path.display(),
            e
        )
    })?;

    let renderer = Renderer::new(RenderLayout {
        cfg_dir: config.output.cfg_dir.clone(),
        commands_dir: config.output.commands_dir.clone(),
        root_dir: config.output.root_dir.clone(),
    });
    let writer = OutputWriter::new();

    // Strictly sequential: each point is rendered and written to
    // completion before the next, and any failure aborts the run.
    for point in table.points() {
        debug!("Processing scan point: {}", point);

        let mut ctx = TemplateContext::from_point(point);
        let cfg_file = renderer.render_config(&mut ctx, &template_text);
        let commands_file = renderer.render_commands(&mut ctx);

        if dry_run {
            info!(
                "Dry run - would write {} and {}",
                cfg_file.path.display(),
                commands_file.path.display()
            );
            continue;
        }

        writer.write(&cfg_file).await?;
        writer.write(&commands_file).await?;
    }

    info!(
        "Generated {} config files and {} command lists",
        table.len(),
        table.len()
    );

    Ok(())
}

/// Validate a parameter table without generating anything
pub async fn validate(parameters: PathBuf, _config: &Config) -> Result<()> {
    info!("Validating parameter table: {}", parameters.display());

    let table = ScanTable::from_file(&parameters)
        .await
        .map_err(|e| anyhow::anyhow!("Parameter table validation failed: {}", e))?;

    println!("✓ Parameter table '{}' is valid", parameters.display());
    println!("  Fields: {}", table.fields().join(", "));
    println!("  Scan points: {}", table.len());

    info!("Parameter table validation completed successfully");

    Ok(())
}
