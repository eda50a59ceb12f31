use anyhow::{bail, Context, Result};
use barsplit::layout::{BarLayer, Layer};
use barsplit::{BarLayout, LayoutConfig};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

#[derive(Parser)]
#[command(name = "barsplit")]
#[command(about = "Split a glyph outline into horizontal bars")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Lay out one or more layers (JSON) and print the bar layers as JSON
    Layout {
        /// Layer JSON: a single layer object or an array of layers
        #[arg(long)]
        input: PathBuf,
        /// Layout configuration JSON; missing keys take their defaults
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        bars: Option<i64>,
        #[arg(long)]
        gap: Option<f64>,
        #[arg(long)]
        angle: Option<f64>,
        #[arg(long)]
        fit_contour: bool,
        /// Fail instead of emitting geometry whose normalization failed
        #[arg(long)]
        strict: bool,
    },
    /// Print the default configuration
    Defaults,
}

/// Command-line overrides applied on top of the configuration file.
#[derive(Default)]
struct Overrides {
    bars: Option<i64>,
    gap: Option<f64>,
    angle: Option<f64>,
    fit_contour: bool,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Layout {
            input,
            config,
            bars,
            gap,
            angle,
            fit_contour,
            strict,
        } => {
            let overrides = Overrides {
                bars,
                gap,
                angle,
                fit_contour,
            };
            let cfg = load_config(config.as_deref(), &overrides)?;
            let out = run_layout(&input, cfg, strict)?;
            println!("{out}");
            Ok(())
        }
        Action::Defaults => {
            println!(
                "{}",
                serde_json::to_string_pretty(&LayoutConfig::default())?
            );
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>, overrides: &Overrides) -> Result<LayoutConfig> {
    let mut cfg = match path {
        Some(p) => {
            let text =
                std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", p.display()))?
        }
        None => LayoutConfig::default(),
    };
    if let Some(n) = overrides.bars {
        cfg.bar_count = n;
    }
    if let Some(g) = overrides.gap {
        cfg.gap = g;
    }
    if let Some(a) = overrides.angle {
        cfg.angle_deg = a;
    }
    if overrides.fit_contour {
        cfg.fit_contour = true;
    }
    Ok(cfg)
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum LayerInput {
    One(Layer),
    Many(Vec<Layer>),
}

fn run_layout(input: &Path, cfg: LayoutConfig, strict: bool) -> Result<String> {
    let text =
        std::fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let parsed: LayerInput =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", input.display()))?;
    let layers = match parsed {
        LayerInput::One(l) => vec![l],
        LayerInput::Many(v) => v,
    };
    tracing::info!(layers = layers.len(), input = %input.display(), "layout");
    let engine = BarLayout::with_config(cfg);
    let mut out: Vec<BarLayer> = Vec::with_capacity(layers.len());
    for (layer, res) in layers.iter().zip(engine.build_layers(&layers)) {
        let bar = res.with_context(|| format!("layer {:?}", layer.name))?;
        if strict && !bar.warnings.is_empty() {
            bail!("layer {:?}: {}", layer.name, bar.warnings[0]);
        }
        for w in &bar.warnings {
            tracing::warn!(layer = %layer.name, "{w}");
        }
        out.push(bar);
    }
    Ok(serde_json::to_string_pretty(&out)?)
}
