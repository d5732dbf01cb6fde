mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    render, templates, types, validate, RenderArgs, TemplatesArgs, TypesArgs, ValidateArgs,
};
use tracing_subscriber::EnvFilter;

/// Pagekit CLI - compose, render and manage storefront pages
#[derive(Parser, Debug)]
#[command(name = "pagekit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the component types available on a surface
    Types(TypesArgs),

    /// Render a template file to HTML
    Render(RenderArgs),

    /// Check template files for problems
    Validate(ValidateArgs),

    /// Manage templates on a template server
    Templates(TemplatesArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            let cwd = cwd.display().to_string();
            match cli.command {
                Command::Types(args) => types(args),
                Command::Render(args) => render(args, &cwd),
                Command::Validate(args) => validate(args),
                Command::Templates(args) => templates(args, &cwd),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
