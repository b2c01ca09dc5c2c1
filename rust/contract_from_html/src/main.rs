use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use contract_template::{convert, extract_fragments, ConvertOptions, FragmentOrder, RenderOptions};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Word-exported HTML contract. Invalid UTF-8 is tolerated.
    #[arg(long, default_value = "contrato-parceria-psicologo.html")]
    input: PathBuf,

    /// Output path for the cleaned template.
    #[arg(long, default_value = "contrato-parceria-psicologo-limpo.html")]
    out: PathBuf,

    /// Document title (defaults to the partnership contract title).
    #[arg(long)]
    title: Option<String>,

    /// Fragment ordering: `legacy` groups content by kind, `positional` keeps source order.
    #[arg(long, value_enum, default_value_t = Order::Legacy)]
    order: Order,

    /// Print the extracted fragments as JSON instead of writing the document.
    #[arg(long)]
    dump_fragments: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Order {
    Legacy,
    Positional,
}

impl From<Order> for FragmentOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Legacy => FragmentOrder::Legacy,
            Order::Positional => FragmentOrder::Positional,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("open {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_output(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(path, html).with_context(|| format!("write {}", path.display()))
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    info!("reading {}", args.input.display());
    let html = read_lossy(&args.input)?;

    if args.dump_fragments {
        let fragments = extract_fragments(&html, args.order.into());
        let json = serde_json::to_string_pretty(&fragments).context("serialize fragments")?;
        println!("{json}");
        return Ok(());
    }

    let mut render = RenderOptions::default();
    if let Some(title) = args.title {
        render.title = title;
    }
    let options = ConvertOptions {
        order: args.order.into(),
        render,
    };

    info!("extracting content");
    let conversion = convert(&html, &options);
    info!(fragments = conversion.fragment_count, "found {} fragments", conversion.fragment_count);

    info!("saving {}", args.out.display());
    write_output(&args.out, &conversion.html)?;

    info!(
        out = %args.out.display(),
        fragments = conversion.fragment_count,
        "conversion complete"
    );
    Ok(())
}
