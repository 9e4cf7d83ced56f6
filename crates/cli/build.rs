use std::{env, fs, path::PathBuf};

fn lexicon_args(cmd: clap::Command) -> clap::Command {
    cmd.arg(
        clap::arg!(--"stop-words" <DIR> "Directory of stop word lists")
            .default_value("StopWords")
            .value_parser(clap::value_parser!(std::path::PathBuf)),
    )
    .arg(
        clap::arg!(--positive <FILE> "Positive word list")
            .default_value("MasterDictionary/positive-words.txt")
            .value_parser(clap::value_parser!(std::path::PathBuf)),
    )
    .arg(
        clap::arg!(--negative <FILE> "Negative word list")
            .default_value("MasterDictionary/negative-words.txt")
            .value_parser(clap::value_parser!(std::path::PathBuf)),
    )
}

fn fetch_args(cmd: clap::Command) -> clap::Command {
    cmd.arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--"user-agent" <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let run = clap::Command::new("run")
        .about("Fetch every article in the input table and write the metrics report")
        .arg(
            clap::arg!(-i --input <FILE> "Spreadsheet (.xlsx) or CSV table with URL_ID and URL columns")
                .default_value("Input.xlsx")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-o --output <FILE> "Report file")
                .default_value("Output.csv")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(--"articles-dir" <DIR> "Directory for extracted article text")
                .default_value("articles")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--"no-articles" "Do not save extracted article text"));

    let analyze = clap::Command::new("analyze")
        .about("Compute metrics for one plain text file")
        .arg(clap::arg!(<INPUT> "Plain text file, or '-' for stdin"))
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (text, json)")
                .default_value("text")
                .value_parser(["text", "json"]),
        );

    let extract = clap::Command::new("extract")
        .about("Print the article text extracted from a page")
        .arg(clap::arg!(<INPUT> "URL to fetch, local HTML file, or '-' for stdin"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        );

    let mut cmd = clap::Command::new("textgauge")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Textgauge Contributors")
        .about("Readability and sentiment metrics for web articles")
        .arg(clap::arg!(-v --verbose "Enable debug logging").global(true))
        .subcommand(lexicon_args(fetch_args(run)))
        .subcommand(lexicon_args(analyze))
        .subcommand(fetch_args(extract));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "textgauge", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "textgauge", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "textgauge", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "textgauge", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
