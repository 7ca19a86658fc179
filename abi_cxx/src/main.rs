use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cmds;

#[derive(Parser)]
#[command(name = "abi-cxx")]
#[command(about = "Layout-checked C++ declarations for an ABI description", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/* Options shared by every command that reads a model */
#[derive(clap::Args, Debug)]
pub struct ModelArgs {
    /* ABI description (.yaml, .yml or .json) */
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: PathBuf,

    /* Generator config (YAML); CloudABI defaults when absent */
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /* Override the namespace wrapping the generated code */
    #[arg(long = "namespace", value_name = "NAME")]
    pub namespace: Option<String>,

    /* Override the canonical name prefix (e.g. "cloudabi_") */
    #[arg(long = "prefix", value_name = "PREFIX")]
    pub prefix: Option<String>,

    /* Additional type names to exclude from generation */
    #[arg(short = 'x', long = "exclude", value_name = "TYPE")]
    pub exclude: Vec<String>,

    /* Enable verbose output */
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /* Generate the types and structs headers */
    Codegen {
        #[command(flatten)]
        model: ModelArgs,

        /* Output directory for generated headers */
        #[arg(
            short = 'o',
            long = "output",
            value_name = "DIR",
            default_value = "generated"
        )]
        output_dir: PathBuf,
    },

    /* Show how every enumeration and record maps onto the canonical layout */
    Analyze {
        #[command(flatten)]
        model: ModelArgs,

        /* Restrict the report to a single type */
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        type_name: Option<String>,

        /* Print the report as JSON */
        #[arg(long = "json")]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Codegen { model, output_dir } => {
            cmds::common::init_logging(model.verbose);
            cmds::codegen::run(&model, output_dir)?;
        }

        Commands::Analyze {
            model,
            type_name,
            json,
        } => {
            cmds::common::init_logging(model.verbose);
            cmds::analyze::run(&model, type_name.as_deref(), json)?;
        }
    }

    Ok(())
}
