/* Common utilities shared between analyze and codegen commands */

use crate::ModelArgs;
use abi_cxx::GeneratorConfig;
use abi_model::AbiModel;
use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/* RUST_LOG wins; otherwise debug when verbose, warnings only when not */
pub fn init_logging(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(filter)
    .init();
}

pub fn load_model(args: &ModelArgs) -> anyhow::Result<AbiModel> {
  if args.verbose {
    println!("[~] Loading ABI description {}", args.file.display());
  }

  let model = abi_model::load_model(&args.file)
    .with_context(|| format!("loading ABI description {}", args.file.display()))?;

  if args.verbose {
    println!("[~] Loaded {} type definitions for '{}'", model.len(), model.name());
    for ty in model.types() {
      if let Some(name) = ty.name() {
        println!("  - {}", name);
      }
    }
    println!();
  }

  Ok(model)
}

/* Config file (or defaults) with command line overrides applied */
pub fn load_config(args: &ModelArgs) -> anyhow::Result<GeneratorConfig> {
  let mut config = match &args.config {
    Some(path) => GeneratorConfig::load(path)
      .with_context(|| format!("loading generator config {}", path.display()))?,
    None => GeneratorConfig::default(),
  };

  if let Some(namespace) = &args.namespace {
    config.namespace = namespace.clone();
  }
  if let Some(prefix) = &args.prefix {
    config.canonical_prefix = prefix.clone();
  }
  config.exclude.extend(args.exclude.iter().cloned());

  if args.verbose {
    println!("[~] Configuration:");
    println!("  Namespace: {}", config.namespace);
    println!("  Canonical prefix: {}", config.canonical_prefix);
    println!("  Excluded types: {}", config.exclude.len());
    for name in &config.exclude {
      println!("    - {}", name);
    }
    println!();
  }

  Ok(config)
}
