use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use exlibris_core::{
    Collection, FetchConfig, collection_filename, extract, fetch_file, fetch_stdin, fetch_url, is_present,
    record_filename, record_to_json,
};
use owo_colors::OwoColorize;

mod echo;

use echo::{format_size, print_banner, print_info, print_step, print_success};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Extract and collect book metadata from product pages
#[derive(Parser, Debug)]
#[command(name = "exlibris")]
#[command(version = VERSION)]
#[command(about = "Extract and collect book metadata from product pages", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract metadata from a URL, HTML file, or stdin
    Scrape {
        /// URL to fetch, local HTML file, or "-" for stdin
        #[arg(value_name = "INPUT")]
        input: String,

        /// Output file (default: stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Write the record to `<slugged title>_scraped.json` in the
        /// current directory
        #[arg(long, conflicts_with = "output")]
        save: bool,

        /// Add the extracted record to the collection
        #[arg(long)]
        add: bool,

        /// HTTP timeout in seconds
        #[arg(long, default_value = "30", value_name = "SECS")]
        timeout: u64,

        /// Custom User-Agent for HTTP requests
        #[arg(long, value_name = "UA")]
        user_agent: Option<String>,

        /// Collection file to operate on
        #[arg(long, value_name = "PATH")]
        collection: Option<PathBuf>,

        /// Enable progress logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the collected records
    List {
        /// Print the collection as JSON
        #[arg(long)]
        json: bool,

        /// Collection file to operate on
        #[arg(long, value_name = "PATH")]
        collection: Option<PathBuf>,
    },

    /// Remove one record from the collection
    Remove {
        /// Id of the record to remove
        #[arg(value_name = "ID")]
        id: String,

        /// Collection file to operate on
        #[arg(long, value_name = "PATH")]
        collection: Option<PathBuf>,
    },

    /// Export the collection to a JSON file and clear it
    Export {
        /// Output file (default: dated filename in the current directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Keep the collection after exporting
        #[arg(long)]
        keep: bool,

        /// Collection file to operate on
        #[arg(long, value_name = "PATH")]
        collection: Option<PathBuf>,
    },
}

fn collection_path(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(Collection::default_path)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Scrape { input, output, save, add, timeout, user_agent, collection, verbose } => {
            scrape(input, output, save, add, timeout, user_agent, collection, verbose).await
        }
        Command::List { json, collection } => list(json, collection),
        Command::Remove { id, collection } => remove(&id, collection),
        Command::Export { output, keep, collection } => export(output, keep, collection),
    }
}

#[allow(clippy::too_many_arguments)]
async fn scrape(
    input: String,
    output: Option<PathBuf>,
    save: bool,
    add: bool,
    timeout: u64,
    user_agent: Option<String>,
    collection: Option<PathBuf>,
    verbose: bool,
) -> anyhow::Result<()> {
    if verbose {
        print_banner();
    }

    let (html, source_url) = if input == "-" {
        if verbose {
            print_step(1, 3, "Reading from stdin");
        }
        let content = fetch_stdin().context("Failed to read from stdin")?;
        (content, "stdin".to_string())
    } else if input.starts_with("http://") || input.starts_with("https://") {
        if verbose {
            print_step(1, 3, &format!("Fetching from {}", input.bright_white().underline()));
        }

        let config = FetchConfig {
            timeout,
            user_agent: user_agent.unwrap_or_else(|| FetchConfig::default().user_agent),
        };

        let content = fetch_url(&input, &config).await.context("Failed to fetch URL")?;
        (content, input.clone())
    } else {
        if verbose {
            print_step(1, 3, &format!("Reading from file {}", input.bright_white()));
        }
        let content = fetch_file(&input).with_context(|| format!("Failed to read file: {}", input))?;
        let name = Path::new(&input)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.clone());
        (content, format!("File: {}", name))
    };

    if verbose {
        eprintln!("  {} {}", "Size:".dimmed(), format_size(html.len()).bright_white());
        eprintln!();
        print_step(2, 3, "Extracting metadata");
    }

    let record = extract(&html, &source_url).context("Failed to extract metadata")?;

    if verbose {
        eprintln!("  {} {}", "Title:".dimmed(), record.title.bright_white());
        eprintln!("  {} {}", "Author:".dimmed(), record.author.bright_white());
        eprintln!();
        print_step(3, 3, "Writing output");
    }

    let json = record_to_json(&record)?;

    let output = output.or_else(|| save.then(|| PathBuf::from(record_filename(&record))));

    match output {
        Some(path) => {
            fs::write(&path, json).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            println!("{}", json);
        }
    }

    if add {
        let path = collection_path(collection);
        let mut collection = Collection::load(&path).context("Failed to load collection")?;
        collection.add(record.clone());
        collection.save().context("Failed to save collection")?;
        print_success(&format!(
            "Added \"{}\" to collection ({})",
            record.title,
            path.display()
        ));
    }

    Ok(())
}

fn list(json: bool, collection: Option<PathBuf>) -> anyhow::Result<()> {
    let path = collection_path(collection);
    let collection = Collection::load(&path).context("Failed to load collection")?;

    if json {
        println!("{}", collection.export_all()?);
        return Ok(());
    }

    if collection.is_empty() {
        print_info("Collection is empty");
        return Ok(());
    }

    for item in collection.items() {
        println!("{}  {}", item.id.dimmed(), item.record.title.bold());
        if is_present(&item.record.author) {
            println!("    {}", item.record.author);
        }
    }
    eprintln!();
    print_info(&format!("{} item(s) in {}", collection.len(), path.display()));

    Ok(())
}

fn remove(id: &str, collection: Option<PathBuf>) -> anyhow::Result<()> {
    let path = collection_path(collection);
    let mut collection = Collection::load(&path).context("Failed to load collection")?;

    let title = collection.get(id).map(|item| item.record.title.clone());
    if !collection.remove(id) {
        anyhow::bail!("No item with id {} in {}", id, path.display());
    }
    collection.save().context("Failed to save collection")?;

    match title {
        Some(title) => print_success(&format!("Removed \"{}\" from collection", title)),
        None => print_success("Removed item from collection"),
    }

    Ok(())
}

fn export(output: Option<PathBuf>, keep: bool, collection: Option<PathBuf>) -> anyhow::Result<()> {
    let path = collection_path(collection);
    let mut collection = Collection::load(&path).context("Failed to load collection")?;

    if collection.is_empty() {
        anyhow::bail!("No collected items to export");
    }

    let count = collection.len();
    let target = output.unwrap_or_else(|| PathBuf::from(collection_filename()));
    fs::write(&target, collection.export_all()?)
        .with_context(|| format!("Failed to write to file: {}", target.display()))?;

    if !keep {
        collection.clear();
        collection.save().context("Failed to save collection")?;
    }

    print_success(&format!(
        "Exported {} item(s) to {}",
        count,
        target.display().bright_white()
    ));

    Ok(())
}
