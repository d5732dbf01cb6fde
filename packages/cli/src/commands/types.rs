use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagekit_schema::{list_available, Surface};

#[derive(Debug, Args)]
pub struct TypesArgs {
    /// Editing surface (storefront, page_builder)
    #[arg(short, long, default_value = "storefront")]
    pub surface: String,

    /// Print the palette as JSON, including default props
    #[arg(long)]
    pub json: bool,
}

pub fn types(args: TypesArgs) -> Result<()> {
    let surface: Surface = args.surface.parse().map_err(|e: String| anyhow!(e))?;
    let specs = list_available(surface);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&specs)?);
        return Ok(());
    }

    println!(
        "{} {} component types",
        "🧩".bright_blue(),
        specs.len().to_string().bold()
    );
    for spec in &specs {
        println!(
            "  {:<14} {:<16} {}",
            spec.component_type.as_str().green(),
            spec.display_name,
            spec.description.dimmed()
        );
    }
    Ok(())
}
