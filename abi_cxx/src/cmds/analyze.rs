/* Analyze command - show the layout leaves and value mapping per type */

use super::common::{load_config, load_model};
use crate::ModelArgs;
use abi_cxx::codegen::cpp_gen::LeafKind;
use abi_cxx::report::{AnalysisReport, analyze};
use anyhow::{Context, anyhow};

/* Execute the analyze command */
pub fn run(args: &ModelArgs, type_name: Option<&str>, json: bool) -> anyhow::Result<()> {
  let model = load_model(args)?;
  let config = load_config(args)?;

  if let Some(name) = type_name {
    if model.get(name).is_none() {
      return Err(anyhow!("type '{}' not found in '{}'", name, model.name()));
    }
  }

  let report = analyze(&model, &config, type_name)
    .with_context(|| format!("analyzing '{}'", model.name()))?;

  if json {
    println!("{}", serde_json::to_string_pretty(&report)?);
  } else {
    print_report(&report);
  }

  Ok(())
}

fn print_report(report: &AnalysisReport) {
  println!("ABI C++ Generator - Layout Analysis");
  println!("===================================\n");
  println!("[~] ABI: {}", report.abi);

  if !report.excluded.is_empty() {
    println!("[~] Excluded (hand-maintained): {}", report.excluded.join(", "));
  }
  println!();

  for (name, enum_report) in &report.enums {
    println!(
      "[enum{}] {} : {} ({} -> {})",
      if enum_report.flags { " flags" } else { "" },
      name,
      enum_report.int_type,
      enum_report.generated,
      enum_report.canonical
    );
    if enum_report.flags {
      println!("    none = 0");
    }
    for value in &enum_report.values {
      println!(
        "    {} = {} ({:#x})",
        value.generated, value.canonical, value.value
      );
    }
  }
  if !report.enums.is_empty() {
    println!();
  }

  for (name, struct_report) in &report.structs {
    println!(
      "[struct] {} ({} -> {})",
      name, struct_report.generated, struct_report.canonical
    );
    for leaf in &struct_report.leaves {
      let note = match leaf.kind {
        LeafKind::Field => "",
        LeafKind::RangeBase => "  [range base]",
        LeafKind::RangeLength => "  [range length]",
      };
      println!("    {} <-> {}{}", leaf.generated, leaf.canonical, note);
    }
  }

  println!(
    "\n[✓] {} offset assertion(s) across {} record(s)",
    report.offset_assertions(),
    report.structs.len()
  );
}
