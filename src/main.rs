use clap::{Parser as ClapParser, Subcommand};
use predicate_lang::cli::{self, CliError, CompareOptions};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "predicate")]
#[command(about = "Build query predicates and print their canonical form")]
#[command(version)]
struct Cli {
    /// Log construction details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single comparison
    Compare {
        /// Left-hand key path
        key_path: String,

        /// Operator token (<, <=, >, >=, =, !=, MATCHES, LIKE, ...)
        operator: String,

        /// Right-hand value as JSON or a bare string (reads from stdin if not provided)
        value: Option<String>,

        /// Treat the right-hand side as a key path
        #[arg(short, long)]
        key: bool,

        /// ANY or ALL
        #[arg(short, long)]
        modifier: Option<String>,

        /// Option token ([c], [d], [n], [l]); may be repeated
        #[arg(short, long = "option")]
        options: Vec<String>,

        /// Wrap the comparison in NOT
        #[arg(short, long)]
        negate: bool,
    },

    /// List operator, modifier and option tokens
    Tokens,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "predicate_lang=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Compare {
            key_path,
            operator,
            value,
            key,
            modifier,
            options,
            negate,
        } => run_compare(CompareOptions {
            key_path,
            operator,
            value,
            right_is_key_path: key,
            modifier,
            options,
            negate,
        }),
        Commands::Tokens => {
            print!("{}", cli::get_token_reference());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_compare(mut options: CompareOptions) -> Result<(), CliError> {
    if options.value.is_none() && !atty::is(atty::Stream::Stdin) {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        options.value = Some(buffer);
    }

    println!("{}", cli::execute_compare(&options)?);
    Ok(())
}
