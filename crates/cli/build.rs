use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let collection_arg = clap::arg!(--collection <PATH> "Collection file to operate on")
        .value_parser(clap::value_parser!(std::path::PathBuf));

    let mut cmd = clap::Command::new("exlibris")
        .version("0.1.0")
        .about("Extract and collect book metadata from product pages")
        .subcommand(
            clap::Command::new("scrape")
                .about("Extract metadata from a URL, HTML file, or stdin")
                .arg(clap::arg!(<INPUT> "URL to fetch, local HTML file, or '-' for stdin"))
                .arg(
                    clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(clap::arg!(--save "Write the record to its default slugged filename"))
                .arg(clap::arg!(--add "Add the extracted record to the collection"))
                .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
                .arg(clap::arg!(--"user-agent" <UA> "Custom User-Agent for HTTP requests"))
                .arg(clap::arg!(-v --verbose "Enable progress logging"))
                .arg(collection_arg.clone()),
        )
        .subcommand(
            clap::Command::new("list")
                .about("List the collected records")
                .arg(clap::arg!(--json "Print the collection as JSON"))
                .arg(collection_arg.clone()),
        )
        .subcommand(
            clap::Command::new("remove")
                .about("Remove one record from the collection")
                .arg(clap::arg!(<ID> "Id of the record to remove"))
                .arg(collection_arg.clone()),
        )
        .subcommand(
            clap::Command::new("export")
                .about("Export the collection to a JSON file and clear it")
                .arg(
                    clap::arg!(-o --output <FILE> "Output file (default: dated filename)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(clap::arg!(--keep "Keep the collection after exporting"))
                .arg(collection_arg),
        );

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "exlibris", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "exlibris", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "exlibris", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "exlibris", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
