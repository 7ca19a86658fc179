/* Codegen command - render both headers and write them out */

use super::common::{load_config, load_model};
use crate::ModelArgs;
use anyhow::Context;
use std::path::PathBuf;

/* Execute the codegen command */
pub fn run(args: &ModelArgs, output_dir: PathBuf) -> anyhow::Result<()> {
  if args.verbose {
    println!("ABI C++ Generator - Code Generation Tool");
    println!("========================================\n");
    println!("  Output directory: {}\n", output_dir.display());
  }

  let model = load_model(args)?;
  let config = load_config(args)?;

  if args.verbose {
    println!("[*] Starting code generation...");
  }

  /* Render everything before touching the output directory */
  let artifacts = abi_cxx::generate(&model, &config)
    .with_context(|| format!("generating C++ declarations for '{}'", model.name()))?;

  let written = artifacts
    .write_to(&output_dir)
    .with_context(|| format!("writing headers to {}", output_dir.display()))?;

  if args.verbose {
    for path in &written {
      println!("    - {}", path.display());
    }
    println!("[~] {} offset assertions emitted", artifacts.offset_assertions);
  }

  println!("[✓] Code generation complete!");
  Ok(())
}
