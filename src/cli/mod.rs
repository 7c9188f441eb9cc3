//! CLI for Cabinet
//!
//! Commands:
//! - `chat`: interactive shell (default)
//! - `run`: one request with a batch-size iteration ceiling
//! - `tools`: list the registered capabilities

use crate::settings::Settings;
use cabinet_core::{Dispatcher, DispatcherConfig};
use cabinet_llm::{AnthropicClient, AnthropicConfig, ModelBackend};
use cabinet_skills::PluginLoader;
use cabinet_team::{register_team, TeamConfig};
use cabinet_tools::ToolCatalog;
use clap::{Parser, Subcommand};
use std::sync::Arc;

pub mod chat;
pub mod run;

/// Cabinet CLI
#[derive(Parser, Debug)]
#[command(name = "cabinet")]
#[command(about = "AI advisory team for your business")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Chat with the team interactively
    Chat,
    /// Run a single request and print the result
    Run {
        /// The request text
        request: String,
        /// Structured context as a JSON object
        #[arg(long)]
        context: Option<String>,
        /// Iteration ceiling for the dispatch loop
        #[arg(long, default_value_t = 20)]
        max_iterations: usize,
    },
    /// List the registered capabilities
    Tools,
}

/// Run the CLI command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Chat) | None => chat::run().await,
        Some(Commands::Run {
            request,
            context,
            max_iterations,
        }) => run::run(request, context, max_iterations).await,
        Some(Commands::Tools) => {
            let settings = Settings::load()?;
            let dispatcher = build_dispatcher(&settings)?;
            for capability in dispatcher.list_capabilities() {
                println!(
                    "{} — {}",
                    capability.name,
                    capability.description.lines().next().unwrap_or_default()
                );
                println!("    parameters: {}", capability.parameters.join(", "));
            }
            Ok(())
        }
    }
}

/// Wire backend, skills, team, and dispatcher together
pub(crate) fn build_dispatcher(settings: &Settings) -> anyhow::Result<Dispatcher> {
    let backend: Arc<dyn ModelBackend> = Arc::new(AnthropicClient::new(
        AnthropicConfig::new(settings.anthropic_api_key.clone())
            .with_model(settings.model_name.clone()),
    )?);

    let loader = PluginLoader::new(&settings.plugins_dir);
    let team_config = TeamConfig {
        model: settings.model_name.clone(),
        light_model: settings.model_name_light.clone(),
        ..TeamConfig::default()
    };

    let mut catalog = ToolCatalog::new();
    register_team(&mut catalog, Arc::clone(&backend), &team_config, &loader);

    Ok(Dispatcher::new(
        backend,
        Arc::new(catalog),
        DispatcherConfig::default(),
    ))
}
