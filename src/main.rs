use clap::{ArgGroup, Parser, ValueEnum};
use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::{Path, PathBuf};
use subnet_splitter::config::Config;
use subnet_splitter::models::{AddressFamily, SplitForm};
use subnet_splitter::output::{
    clipboard_text, export_csv_file, render_json, render_table, write_csv,
};
use subnet_splitter::processing::Ipv6Mode;
use subnet_splitter::{calculate, SplitError};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Format {
    Table,
    Text,
    Csv,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "subnet-splitter")]
#[command(about = "Split an IPv4 or IPv6 CIDR block into equal subnets")]
#[command(group(ArgGroup::new("split").args(["count", "size", "request"]).required(true)))]
struct Cli {
    /// Base network, e.g. 10.0.0.0/16 or 2001:db8::/32
    #[arg(required_unless_present = "request")]
    cidr: Option<String>,

    /// ipv4 or ipv6, guessed from the CIDR when omitted
    #[arg(long)]
    ip_type: Option<String>,

    /// Number of subnets wanted (rounded up to a power of two)
    #[arg(short, long)]
    count: Option<i64>,

    /// New prefix length of every subnet
    #[arg(short, long)]
    size: Option<i64>,

    /// JSON form {ipType, baseCidr, splitType, subnetCount, subnetSize}
    #[arg(long, conflicts_with_all = ["cidr", "ip_type"])]
    request: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Also write the networks as a CSV file into this directory
    #[arg(long)]
    export: Option<PathBuf>,

    /// compat or exact
    #[arg(long)]
    ipv6_mode: Option<Ipv6Mode>,

    /// Refuse larger splits, 0 disables the limit
    #[arg(long)]
    max_subnets: Option<u64>,
}

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse();
    let (mut config, warnings) = Config::load_env();
    if let Some(mode) = cli.ipv6_mode {
        config.ipv6_mode = mode;
    }
    if let Some(max) = cli.max_subnets {
        config.max_subnets = (max > 0).then_some(max);
    }
    init_logging(&config.log_config);
    for warning in warnings {
        log::warn!("{warning}");
    }
    log::info!("#Start main() {:?}", config);

    if let Err(e) = run(&cli, &config) {
        log::error!("{e}");
        eprintln!("{} {e}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &Config) -> Result<(), SplitError> {
    let form: SplitForm = match &cli.request {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => form_from_args(cli),
    };
    let result = calculate(form, config)?;

    match cli.format {
        Format::Table => print!("{}", render_table(&result.summary(), &result.subnets)),
        Format::Text => print!("{}", clipboard_text(&result.subnets)),
        Format::Csv => write_csv(std::io::stdout().lock(), &result.subnets)?,
        Format::Json => println!("{}", render_json(&result)?),
    }

    if let Some(dir) = &cli.export {
        let path = export_csv_file(dir, &result.subnets)?;
        eprintln!("{} {}", "Exported".green(), path.display());
    }
    Ok(())
}

fn form_from_args(cli: &Cli) -> SplitForm {
    let base_cidr = cli.cidr.clone().unwrap_or_default();
    let ip_type = cli
        .ip_type
        .clone()
        .unwrap_or_else(|| match AddressFamily::detect(&base_cidr) {
            AddressFamily::Ipv4 => "ipv4".to_string(),
            AddressFamily::Ipv6 => "ipv6".to_string(),
        });
    let split_type = if cli.count.is_some() { "count" } else { "size" };
    SplitForm {
        ip_type,
        base_cidr,
        split_type: split_type.to_string(),
        subnet_count: cli.count,
        subnet_size: cli.size,
    }
}

/// Use the log4rs YAML file if there is one, else warnings to stderr.
fn init_logging(path: &Path) {
    match log4rs::init_file(path, Default::default()) {
        Ok(()) => return,
        // missing file falls back quietly
        Err(e) if path.exists() => {
            eprintln!("Error loading {}: {e}, logging warnings to stderr", path.display())
        }
        Err(_) => {}
    }
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {t} - {m}{n}")))
        .build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn));
    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                eprintln!("Error initializing log4rs: {e}");
            }
        }
        Err(e) => eprintln!("Error building log4rs config: {e}"),
    }
}
