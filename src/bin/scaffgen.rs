use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use scaffgen::generator::{generate_project, RenderContext, TemplateRegistry};
use scaffgen::spec::load_definition;

#[derive(Parser)]
#[command(
    name = "scaffgen",
    version,
    about = "Regeneration-safe scaffolding generator for RPC/REST microservices"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate (or regenerate) a service skeleton from a definition document
    Generate {
        /// Path to the interface-definition document (YAML or JSON)
        #[arg(short, long)]
        definition: PathBuf,
        /// Module root prepended to the generated service's import path
        #[arg(long, default_value = "svc")]
        module_root: String,
        /// Directory the generated tree is written under
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
        /// Discard prior output instead of merging preserved handler bodies
        #[arg(long)]
        force: bool,
    },
    /// List the bundled template assets
    Templates,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            definition,
            module_root,
            output,
            force,
        } => {
            let def = load_definition(&definition)
                .with_context(|| format!("failed to load definition {definition:?}"))?;
            let registry = TemplateRegistry::bundled()?;
            let context = RenderContext::build(&def, &module_root)?;
            let written = generate_project(&registry, &context, &output, force)?;
            println!("✅ {} file(s) generated under {:?}", written.len(), output);
        }
        Commands::Templates => {
            let registry = TemplateRegistry::bundled()?;
            for path in registry.paths() {
                println!("{path}");
            }
        }
    }
    Ok(())
}
