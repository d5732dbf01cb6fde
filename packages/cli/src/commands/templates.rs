use crate::config::Config;
use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use pagekit_gateway::{HttpTransport, Synced, TemplateGateway};
use pagekit_schema::Template;

#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Template server URL; overrides config
    #[arg(long)]
    pub server: Option<String>,

    #[command(subcommand)]
    pub action: TemplatesAction,
}

#[derive(Debug, Subcommand)]
pub enum TemplatesAction {
    /// List templates, defaults first
    List,
    /// Print a template as JSON
    Show { id: String },
    /// Delete a custom template
    Delete { id: String },
    /// Copy a template under a new id
    Duplicate { id: String },
    /// Record one use of a template
    Apply { id: String },
}

pub fn templates(args: TemplatesArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let base_url = args.server.unwrap_or(config.server_url);

    let mut transport = HttpTransport::new(base_url)?;
    if let Some(token) = config.token {
        transport = transport.with_token(token);
    }
    let mut gateway = TemplateGateway::new(transport);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        match args.action {
            TemplatesAction::List => {
                let listed = gateway.list().await?;
                warn_offline(&listed);
                print_listing(listed.value());
            }
            TemplatesAction::Show { id } => {
                let template = gateway.get(&id).await?;
                warn_offline(&template);
                println!("{}", serde_json::to_string_pretty(template.value())?);
            }
            TemplatesAction::Delete { id } => {
                let deleted = gateway.delete(&id).await?;
                warn_offline(&deleted);
                println!("  {} Deleted {}", "✓".green(), id);
            }
            TemplatesAction::Duplicate { id } => {
                let copy = gateway.duplicate(&id).await?;
                warn_offline(&copy);
                println!(
                    "  {} {} → {} ({})",
                    "✓".green(),
                    id,
                    copy.value().id.bright_white(),
                    copy.value().name
                );
            }
            TemplatesAction::Apply { id } => {
                let applied = gateway.apply(&id).await?;
                warn_offline(&applied);
                println!(
                    "  {} {} used {} times",
                    "✓".green(),
                    applied.value().name,
                    applied.value().usage_count
                );
            }
        }
        Ok::<(), anyhow::Error>(())
    })
}

fn warn_offline<T>(result: &Synced<T>) {
    if let Some(warning) = result.warning() {
        eprintln!("{} {}", "⚠️".yellow(), warning.yellow());
    }
}

fn print_listing(templates: &[Template]) {
    if templates.is_empty() {
        println!("{}", "No templates".dimmed());
        return;
    }
    for template in templates {
        let marker = if template.is_default {
            "default".cyan()
        } else {
            "custom".normal()
        };
        println!(
            "  {:<38} {:<28} {:<9} {:<8} used {}",
            template.id.bright_white(),
            template.name,
            template.category.as_str(),
            marker,
            template.usage_count
        );
    }
}
