use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use pagekit_renderer::{render_html, Catalog, DecorSource, HtmlOptions, RenderContext, Renderer};
use pagekit_schema::{Template, Viewport};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Template JSON file
    pub file: PathBuf,

    /// Write HTML here instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Viewport (desktop, tablet, mobile); overrides config
    #[arg(short, long)]
    pub viewport: Option<String>,

    /// Single-line markup
    #[arg(long)]
    pub compact: bool,

    /// Emit only the page fragment, without the document head
    #[arg(long)]
    pub fragment: bool,

    /// Seed for decorative content (badges, filler ratings)
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Catalog JSON; overrides config
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Print the navigation targets found on the page
    #[arg(long)]
    pub links: bool,
}

pub fn render(args: RenderArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let viewport: Viewport = args
        .viewport
        .as_deref()
        .unwrap_or(&config.viewport)
        .parse()
        .map_err(|e: String| anyhow!(e))?;

    let catalog = match args.catalog.clone().or_else(|| config.catalog_path(cwd)) {
        Some(path) => load_catalog(&path)?,
        None => Catalog::default(),
    };

    let template = load_template(&args.file)?;
    let ctx = RenderContext::new()
        .with_viewport(viewport)
        .with_decor(DecorSource::new(args.seed))
        .with_catalog(catalog);

    let mut options = if args.fragment {
        HtmlOptions::default()
    } else {
        HtmlOptions::document(template.name.clone())
    };
    options.pretty = !args.compact;

    let (html, links) = render_to_html(&template, ctx, &options);

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(out, &html)?;
            eprintln!(
                "  {} {} → {} ({} sections, {})",
                "✓".green(),
                args.file.display(),
                out.display(),
                template.components.len(),
                viewport.as_str()
            );
        }
        None => println!("{}", html),
    }

    if args.links {
        for link in links {
            eprintln!("  {} {}", "→".bright_blue(), link);
        }
    }
    Ok(())
}

pub(crate) fn load_template(path: &Path) -> Result<Template> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid template {}", path.display()))
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid catalog {}", path.display()))
}

/// Render a template and collect its navigation targets
pub(crate) fn render_to_html(
    template: &Template,
    ctx: RenderContext,
    options: &HtmlOptions,
) -> (String, Vec<String>) {
    let page = Renderer::new(ctx).render_template(template);
    let links = page.collect_links();
    (render_html(&page, options), links)
}
