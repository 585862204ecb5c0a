//! Render command implementation
//!
//! Loads a parameter file, renders the whole sound, and reports its length,
//! peak level, and PCM hash.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;

use bitsfx_spec::SfxrParams;
use bitsfx_synth::{render_json, render_with_config, RenderResult, SynthConfig};

use super::json_output::{error_codes, JsonError, RenderOutput, RenderStats};

/// Reads and parses a parameter file.
pub fn load_params(path: &str) -> Result<SfxrParams> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read params file: {}", path))?;
    let params = SfxrParams::from_json(&content)
        .with_context(|| format!("Failed to parse params file: {}", path))?;
    tracing::debug!(path, wave = %params.wave_type(), "loaded parameters");
    Ok(params)
}

/// Renders `params` and collects statistics.
pub fn render_stats(params: &SfxrParams, config: &SynthConfig) -> Result<RenderStats> {
    let result = render_with_config(params, config).context("Render failed")?;
    Ok(stats_for(result, config))
}

fn stats_for(result: RenderResult, config: &SynthConfig) -> RenderStats {
    RenderStats {
        samples: result.samples.len(),
        sample_rate: result.format.sample_rate,
        bit_depth: result.format.bit_depth,
        duration_seconds: result.duration_seconds(),
        peak: result.peak(),
        pcm_bytes: result.pcm.len(),
        pcm_hash: result.pcm_hash,
        seed: config.seed,
    }
}

/// Run the render command
///
/// # Arguments
/// * `params_path` - Path to the parameter JSON file
/// * `config` - Seed and output format
/// * `json` - Output machine-readable JSON instead of colored text
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(params_path: &str, config: &SynthConfig, json: bool) -> Result<ExitCode> {
    if json {
        return run_json(params_path, config);
    }

    println!("{} {}", "Rendering:".cyan().bold(), params_path);

    let params = load_params(params_path)?;
    let stats = render_stats(&params, config)?;

    println!("  {} {}", "samples:".dimmed(), stats.samples);
    println!(
        "  {} {:.3}s at {} Hz, {}-bit",
        "duration:".dimmed(),
        stats.duration_seconds,
        stats.sample_rate,
        stats.bit_depth
    );
    println!("  {} {:.4}", "peak:".dimmed(), stats.peak);
    println!("  {} {}", "pcm hash:".dimmed(), stats.pcm_hash);
    println!("{} Rendered {} bytes of PCM", "SUCCESS".green().bold(), stats.pcm_bytes);

    Ok(ExitCode::SUCCESS)
}

fn run_json(params_path: &str, config: &SynthConfig) -> Result<ExitCode> {
    let output = match fs::read_to_string(params_path) {
        Err(e) => RenderOutput::failure(JsonError::for_file(
            error_codes::FILE_READ,
            e.to_string(),
            params_path,
        )),
        Ok(content) => match render_json(&content, config) {
            Err(e) => RenderOutput::failure(JsonError::for_file(e.code(), e.to_string(), params_path)),
            Ok(result) => RenderOutput::success(stats_for(result, config)),
        },
    };

    let success = output.success;
    let out = serde_json::to_string_pretty(&output).context("Failed to serialize output")?;
    println!("{}", out);

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_stats_defaults() {
        let stats = render_stats(&SfxrParams::new(), &SynthConfig::default()).unwrap();
        assert_eq!(stats.sample_rate, 44_100);
        assert_eq!(stats.pcm_bytes, stats.samples * 2);
        assert!(stats.duration_seconds > 0.5);
        assert!(stats.peak > 0.0 && stats.peak <= 1.0);
    }

    #[test]
    fn test_render_stats_rejects_bad_depth() {
        let config = SynthConfig {
            bit_depth: 4,
            ..SynthConfig::default()
        };
        assert!(render_stats(&SfxrParams::new(), &config).is_err());
    }
}
