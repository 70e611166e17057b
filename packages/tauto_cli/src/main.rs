use std::{
    collections::BTreeSet,
    io::{self, BufRead, Write},
};

use clap::Parser;
use colored::Colorize;
use tauto::{check, lexer::tokenize, parser::parse, Verdict};

/// Checks whether propositional formulas are tautologies.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Formula to check; starts an interactive session when omitted.
    formula: Option<String>,

    /// Also print the syntax tree of each parsed formula.
    #[arg(long, short, default_value_t = false)]
    tree: bool,
}

/// Lines mentioning more distinct letters than this are rejected up front;
/// enumerating 2^n assignments past this point is no longer interactive.
const MAX_VARIABLES: usize = 20;

fn main() -> io::Result<()> {
    #[cfg(feature = "log")]
    enable_logging();

    let cli = Cli::parse();

    match cli.formula {
        Some(formula) => report(&formula, cli.tree),
        None => run_session(cli.tree)?,
    }

    Ok(())
}

fn run_session(tree: bool) -> io::Result<()> {
    println!("Welcome to the propositional logic checker!");
    println!("Connectives: -> (implies), <-> (iff), ^ or & (and), v (or), ~ or ! (not).");
    println!("Use uppercase letters (P, Q, R) for propositions. Type 'exit' to quit.");

    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim();

        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("exit") {
            println!("Goodbye!");
            break;
        }

        report(input, tree);
    }

    Ok(())
}

fn report(input: &str, tree: bool) {
    if distinct_letters(input) > MAX_VARIABLES {
        println!(
            "⚠ {}",
            format!("formulas with more than {MAX_VARIABLES} propositions are not supported")
                .yellow()
        );
        return;
    }

    if tree {
        print_tree(input);
    }

    match check(input) {
        Verdict::Tautology => {
            println!("✅ '{}' is a {}.", input, "tautology".green().bold());
        }
        Verdict::NotTautology { counterexample } => {
            println!("❌ '{}' is {} a tautology.", input, "not".red().bold());
            println!(
                "   counterexample: {}",
                counterexample.to_string().yellow()
            );
        }
        Verdict::Invalid { message } => {
            println!("⚠ {}", message.yellow());
        }
    }
}

fn print_tree(input: &str) {
    let formula = tokenize(input).ok().and_then(|tokens| parse(&tokens).ok());

    if let Some(formula) = formula {
        print!("{}", formula.get_tree());
    }
}

fn distinct_letters(input: &str) -> usize {
    input
        .chars()
        .filter(char::is_ascii_uppercase)
        .collect::<BTreeSet<_>>()
        .len()
}

#[cfg(feature = "log")]
fn enable_logging() {
    use log4rs::{
        append::console::{ConsoleAppender, Target},
        config::{Appender, Config, Root},
    };

    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(log::LevelFilter::Trace))
        .expect("the logging configuration is well formed");

    log4rs::init_config(config).expect("logging is only initialized once");
}
