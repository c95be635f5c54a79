use clap::{Parser as ClapParser, Subcommand};
use std::io::{self, Read};
use uniql::cli::{self, CheckOptions, CheckResult, CliError};

#[derive(ClapParser)]
#[command(name = "uniql")]
#[command(about = "uniql - parse filter expressions into a JSON AST")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an expression and print its AST as JSON
    Parse {
        /// The expression to parse (reads from stdin if not provided)
        expression: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Validate an expression without printing its AST
    Check {
        /// The expression to validate (reads from stdin if not provided)
        expression: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse { expression, pretty } => run_check(expression, pretty, false),
        Commands::Check { expression } => run_check(expression, false, true),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_check(
    expression: Option<String>,
    pretty: bool,
    syntax_only: bool,
) -> Result<(), CliError> {
    let expression = match expression {
        Some(s) => s,
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            buffer
        }
        None => return Err(CliError::NoExpression),
    };

    let options = CheckOptions {
        expression,
        syntax_only,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Success(ast) => {
            let json = if pretty {
                serde_json::to_string_pretty(&ast)
            } else {
                serde_json::to_string(&ast)
            }
            .unwrap();
            println!("{}", json);
        }
    }
    Ok(())
}
