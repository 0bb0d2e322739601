use clap::{Parser, Subcommand};
use env_loadr::{
    new_bool, new_duration, new_int, new_string, optional, required, when_true, VarId, VarSet,
};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "util-cli", about = "Exercise env-loadr against the current environment")]
struct Cli {
    /// Print all supported environment variables in shell format and exit
    #[arg(long = "print-env")]
    print_env: bool,

    /// Load variables from this dotenv file before parsing
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load the configuration, exiting with status 2 on errors
    Check,
    /// Load the configuration and list problems without exiting
    Report,
    /// Write markdown documentation of all variables
    Docs {
        #[arg(default_value = "CONFIG.md")]
        path: PathBuf,
    },
    /// Show metadata of all variables
    Describe,
}

struct Demo<'a> {
    vars: VarSet<'a>,
    port: VarId<isize>,
    debug: VarId<bool>,
    log_path: VarId<String>,
    timeout: VarId<Duration>,
}

fn demo_vars() -> Demo<'static> {
    let mut vars = VarSet::new();
    let port = vars.add("PORT", required(), new_int(0), "Port the server listens on");
    let debug = vars.add("DEBUG", optional(), new_bool(false), "Enable debug logging");
    let log_path = vars.add(
        "LOG_PATH",
        when_true(debug),
        new_string(""),
        "File receiving debug logs.\nRequired when DEBUG is on.",
    );
    let timeout = vars.add(
        "TIMEOUT",
        optional(),
        new_duration(Duration::from_secs(30)),
        "Upstream request timeout",
    );

    Demo {
        vars,
        port,
        debug,
        log_path,
        timeout,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = dotenvy::from_path(&cli.env_file) {
        tracing::debug!(path = %cli.env_file.display(), error = %e, "no dotenv file loaded");
    }

    let mut demo = demo_vars();
    demo.vars.print_action().handle(cli.print_env);

    match cli.command.unwrap_or(Command::Check) {
        Command::Check => check(&mut demo),
        Command::Report => report(&mut demo),
        Command::Docs { path } => generate_docs(&demo.vars, &path),
        Command::Describe => describe(&demo.vars),
    }
}

fn check(demo: &mut Demo<'_>) {
    demo.vars.parse();
    print_loaded(demo);
}

fn report(demo: &mut Demo<'_>) {
    match demo.vars.try_parse() {
        Ok(()) => print_loaded(demo),
        Err(error) => {
            eprintln!("Failed to load config:");
            for invalid in &error.invalid_values {
                eprintln!("\t- {}", invalid);
            }
            for missing in &error.missing_vars {
                eprintln!("\t- {} is required", missing.key);
            }
        }
    }
    println!("all done");
}

fn print_loaded(demo: &Demo<'_>) {
    let vars = &demo.vars;
    println!("Config loaded successfully!");
    println!("  port: {}", vars.get(demo.port).unwrap_or_default());
    println!("  debug: {}", vars.get(demo.debug).unwrap_or_default());
    println!("  log_path: {}", vars.get(demo.log_path).unwrap_or_default());
    println!(
        "  timeout: {}",
        humantime::format_duration(vars.get(demo.timeout).unwrap_or_default())
    );
}

fn generate_docs(vars: &VarSet<'_>, path: &Path) {
    match vars.write_docs(path) {
        Ok(_) => println!("✓ Documentation written to {}", path.display()),
        Err(e) => eprintln!("✗ Failed to write documentation: {}", e),
    }
}

fn describe(vars: &VarSet<'_>) {
    for info in vars.describe() {
        println!("{}:", info.key);
        println!("    description: {}", info.description.replace('\n', " "));
        println!("    value: {}", info.value);
        println!("    required: {}", info.required);
    }
}
