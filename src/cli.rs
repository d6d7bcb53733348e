use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::rules::RuleCatalog;

#[derive(Parser)]
#[command(name = "validation-service")]
#[command(about = "Transaction validation service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Print the rule catalog the server would load
    Rules {
        /// Emit the catalog as JSON rule definitions
        #[arg(long)]
        json: bool,
    },

    /// Configuration validation
    Config,
}

pub fn handle_rules_list(config: &Config, json: bool) -> anyhow::Result<()> {
    let catalog = crate::load_catalog(config)?;

    if json {
        let definitions: Vec<_> = catalog.iter().map(|rule| rule.to_definition()).collect();
        println!("{}", serde_json::to_string_pretty(&definitions)?);
        return Ok(());
    }

    print!("{}", format_catalog(&catalog));
    Ok(())
}

fn format_catalog(catalog: &RuleCatalog) -> String {
    let mut out = format!(
        "{:<4} {:<22} {:<26} {:<20} {:<8}\n",
        "#", "ID", "Name", "Type", "Enabled"
    );
    out.push_str(&"-".repeat(82));
    out.push('\n');

    for (position, rule) in catalog.iter().enumerate() {
        out.push_str(&format!(
            "{:<4} {:<22} {:<26} {:<20} {:<8}\n",
            position + 1,
            rule.id,
            rule.name,
            rule.kind.type_name(),
            if rule.enabled { "yes" } else { "no" }
        ));
    }

    out
}

pub fn handle_config_validate(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Validating configuration...");

    println!("Configuration:");
    println!("  Port: {}", config.server_port);
    println!("  Environment: {}", config.environment);
    println!("  Log Level: {}", config.log_level);
    println!("  Service: {} {}", config.service_name, config.service_version);
    println!("  CORS Origins: {}", config.cors_allowed_origins.join(", "));
    println!(
        "  Rules: {}",
        config
            .rules_path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "built-in".to_string())
    );
    println!("  Result Capacity: {}", config.result_capacity);

    config.validate()?;
    let catalog = crate::load_catalog(config)?;

    tracing::info!(rules_count = catalog.len(), "Configuration is valid");
    println!(
        "✓ Configuration is valid ({} rules, {} enabled)",
        catalog.len(),
        catalog.enabled_count()
    );

    Ok(())
}
