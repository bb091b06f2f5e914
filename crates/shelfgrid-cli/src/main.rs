use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use shelfgrid::config::MatrixConfig;
use shelfgrid_cli::dispatch::{dispatch, Request, Response};
use shelfgrid_cli::export::write_matrix_table;
use shelfgrid_cli::format::render_text;
use shelfgrid_cli::html::write_report;
use shelfgrid_cli::session::{load_matrix_config, open_matrix, save_snapshot};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("SHELFGRID_LOG", "error"))
        .init();

    let matches = build_cli().get_matches();
    run(&matches)
}

fn build_cli() -> Command {
    Command::new("shelfgrid")
        .version(clap::crate_version!())
        .author("Justin Sing <justincsing@gmail.com>")
        .about("\u{1F4DA} shelfgrid - Library borrowing matrix statistics")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .global(true)
                .help("Path to matrix JSON configuration file")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("size")
                .short('n')
                .long("size")
                .global(true)
                .help("Matrix size. Overrides the size in the configuration file.")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .global(true)
                .help("Seed for the random generator. Overrides the configured seed.")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("state")
                .short('s')
                .long("state")
                .global(true)
                .help(
                    "Snapshot file. Loaded when it exists; written back after \
                     commands that change the matrix.",
                )
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .global(true)
                .help("Output format")
                .value_parser(["json", "text"])
                .default_value("json"),
        )
        .subcommand(Command::new("show").about("Print the matrix with its labels"))
        .subcommand(Command::new("generate").about("Replace every cell with fresh random counts"))
        .subcommand(Command::new("row-sums").about("Sum of every row (category)"))
        .subcommand(Command::new("col-sums").about("Sum of every column (day)"))
        .subcommand(Command::new("swap").about("Swap cells across the main diagonal"))
        .subcommand(Command::new("determinant").about("Determinant of the matrix"))
        .subcommand(Command::new("row-averages").about("Average of every row"))
        .subcommand(Command::new("col-averages").about("Average of every column"))
        .subcommand(
            Command::new("report")
                .about("Full statistics report")
                .arg(
                    Arg::new("html")
                        .long("html")
                        .help("Also write the report as an HTML page")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("get")
                .about("Read a single cell")
                .arg(cell_index("row"))
                .arg(cell_index("col")),
        )
        .subcommand(
            Command::new("set")
                .about("Write a single cell")
                .allow_negative_numbers(true)
                .arg(cell_index("row"))
                .arg(cell_index("col"))
                .arg(
                    Arg::new("value")
                        .required(true)
                        .help("New value (any finite number)")
                        .value_parser(clap::value_parser!(f64)),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write the matrix to a CSV or TSV file")
                .arg(
                    Arg::new("output_file")
                        .required(true)
                        .help("Destination (*.csv or *.tsv)")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("quiet")
                        .short('q')
                        .long("quiet")
                        .help("Do not print the output path")
                        .action(ArgAction::SetTrue),
                ),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Written by {author-with-newline}Version {version}\n\n\
             {all-args}{after-help}",
        )
}

fn cell_index(name: &'static str) -> Arg {
    Arg::new(name)
        .required(true)
        .help("Zero-based index")
        .value_parser(clap::value_parser!(usize))
}

fn resolve_config(matches: &ArgMatches) -> Result<MatrixConfig> {
    let mut config = if let Some(config_path) = matches.get_one::<PathBuf>("config") {
        log::info!("[shelfgrid] Using config: {:?}", config_path);
        load_matrix_config(config_path)?
    } else {
        let default_config = MatrixConfig::default();
        eprintln!("[shelfgrid] No config provided; using defaults.");
        default_config
    };

    if let Some(&size) = matches.get_one::<usize>("size") {
        config.size = size;
        if config.labels.as_ref().is_some_and(|l| l.len() != size) {
            log::warn!("[shelfgrid] --size {} drops the configured labels", size);
            config.labels = None;
        }
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(seed);
    }
    Ok(config)
}

fn run(matches: &ArgMatches) -> Result<()> {
    let (name, sub_m) = match matches.subcommand() {
        Some(pair) => pair,
        None => unreachable!("Subcommand is required by CLI configuration"),
    };

    // Global arguments are propagated into the subcommand matches.
    let config = resolve_config(sub_m)?;
    let state = sub_m.get_one::<PathBuf>("state");
    let (mut matrix, mut rng) = open_matrix(&config, state.map(PathBuf::as_path))?;

    if name == "export" {
        let output: &PathBuf = sub_m
            .get_one("output_file")
            .expect("output_file is a required argument");
        write_matrix_table(&matrix, output)?;
        if !sub_m.get_flag("quiet") {
            println!("{}", output.display());
        }
        return Ok(());
    }

    let request = request_for(name, sub_m);
    let response = match dispatch(&mut matrix, &request, &mut rng) {
        Ok(response) => response,
        Err(e) => {
            log::error!("[shelfgrid] {} failed: {}", name, e);
            return Err(e.into());
        }
    };

    if request.is_mutating() {
        if let Some(path) = state {
            save_snapshot(&matrix, path)?;
        }
    }

    if let Response::Report(report) = &response {
        if let Some(path) = sub_m.get_one::<PathBuf>("html") {
            write_report(report, matrix.labels(), path)?;
        }
    }

    match sub_m.get_one::<String>("format").map(String::as_str) {
        Some("text") => print!("{}", render_text(&response, matrix.labels())),
        _ => println!("{}", serde_json::to_string_pretty(&response)?),
    }
    Ok(())
}

fn request_for(name: &str, sub_m: &ArgMatches) -> Request {
    let index = |arg: &str| -> usize {
        *sub_m
            .get_one::<usize>(arg)
            .expect("cell index is a required argument")
    };
    match name {
        "show" => Request::Snapshot,
        "generate" => Request::Regenerate,
        "row-sums" => Request::RowSums,
        "col-sums" => Request::ColSums,
        "swap" => Request::Swap,
        "determinant" => Request::Determinant,
        "row-averages" => Request::RowAverages,
        "col-averages" => Request::ColAverages,
        "report" => Request::Report,
        "get" => Request::GetCell {
            row: index("row"),
            col: index("col"),
        },
        "set" => Request::SetCell {
            row: index("row"),
            col: index("col"),
            value: *sub_m
                .get_one::<f64>("value")
                .expect("value is a required argument"),
        },
        _ => unreachable!(),
    }
}
