use crate::formatters::{Formatter, HumanFormatter, JsonFormatter};
use anyhow::{Context, Result};
use clap::Args;
use occ_config::{ConfigManager, OccConfig};
use occ_core::wire;
use occ_i18n::Catalog;
use occ_normalizer::VariantNormalizer;
use std::io::Read;
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Wire configuration JSON file, or `-` for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: PathBuf,

    /// Configuration file path (defaults to $OCC_CONFIG or ./occ.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// TOML translation catalog layered over the built-in English labels
    #[arg(long, value_name = "PATH")]
    pub translations: Option<PathBuf>,

    /// Output format
    #[arg(short, long = "output", value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

pub fn handle_normalize_command(args: NormalizeArgs) -> Result<()> {
    let runtime = Runtime::new().context("Failed to create tokio runtime")?;

    let normalizer = runtime.block_on(build_normalizer(
        args.config.as_deref(),
        args.translations.as_deref(),
    ))?;

    let source = load_document(&args.input)?;
    let configuration = normalizer.convert(&source);
    tracing::info!(
        input = %args.input.display(),
        groups = configuration.groups.len(),
        incomplete = configuration.incomplete_attribute_count(),
        "normalized configuration"
    );

    let output = match args.format {
        OutputFormat::Json => JsonFormatter { pretty: args.pretty }.format(&configuration),
        OutputFormat::Human => HumanFormatter.format(&configuration),
    }
    .context("Failed to render configuration")?;
    println!("{}", output);
    Ok(())
}

/// Load backend config and translations, then build the normalizer
pub async fn build_normalizer(
    config_path: Option<&Path>,
    translations_path: Option<&Path>,
) -> Result<VariantNormalizer<OccConfig>> {
    let config = ConfigManager::load_or_default(config_path)
        .await
        .context("Failed to load configuration")?
        .with_env_overrides();
    config.validate().context("Invalid configuration")?;

    let mut catalog = Catalog::english();
    if let Some(path) = translations_path {
        let overlay = Catalog::load(path)
            .await
            .with_context(|| format!("Failed to load translations from '{}'", path.display()))?;
        catalog = catalog.merge(overlay);
    }

    let normalizer = VariantNormalizer::with_translations(config, &catalog)
        .await
        .context("Failed to resolve labels")?;
    Ok(normalizer)
}

/// Read a wire document from a file, or from stdin when the path is `-`
pub fn load_document(path: &Path) -> Result<wire::Configuration> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        wire::Configuration::from_json_str(&buffer).context("Failed to parse stdin")
    } else {
        wire::Configuration::from_json_file(path)
            .with_context(|| format!("Failed to load '{}'", path.display()))
    }
}
