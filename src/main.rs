use std::{env, fs::read_to_string, path::PathBuf, process::ExitCode, rc::Rc, time::Instant};

use anyhow::{bail, Context};
use declc::{
    errors::diagnostics::TracingSink, lexer::lexer::tokenize, parser::parser::parse, render_error,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const SAMPLE_SOURCE: &str = "int a = 5 int b = 4; int sum = a + b - 2  3 / 4;";
const SAMPLE_NAME: &str = "<sample>";

struct Options {
    path: Option<PathBuf>,
    print_tokens: bool,
    print_tree: bool,
}

fn parse_args() -> anyhow::Result<Options> {
    let mut options = Options {
        path: None,
        print_tokens: false,
        print_tree: false,
    };

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--tokens" => options.print_tokens = true,
            "--tree" => options.print_tree = true,
            flag if flag.starts_with("--") => bail!("unknown flag `{}`", flag),
            path => {
                if options.path.is_some() {
                    bail!("Usage: declc [--tokens] [--tree] [source-file]");
                }
                options.path = Some(PathBuf::from(path));
            }
        }
    }

    Ok(options)
}

fn main() -> anyhow::Result<ExitCode> {
    let filter = EnvFilter::try_from_env("DECLC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let options = parse_args()?;

    let (file_name, source) = match &options.path {
        Some(path) => {
            let source =
                read_to_string(path).with_context(|| format!("reading {:?}", path))?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned());
            (file_name, source)
        }
        None => (String::from(SAMPLE_NAME), String::from(SAMPLE_SOURCE)),
    };

    let mut diagnostics = TracingSink;
    let start = Instant::now();

    let tokens = tokenize(&source, Some(file_name.clone()), &mut diagnostics);
    debug!(tokens = tokens.len(), elapsed = ?start.elapsed(), "tokenized");

    if options.print_tokens {
        for token in &tokens {
            println!("{}", token);
        }
    }

    let parse_start = Instant::now();
    let result = parse(&tokens, Rc::new(file_name), &mut diagnostics);
    debug!(elapsed = ?parse_start.elapsed(), "parsed");

    match result {
        Ok(program) => {
            info!(declarations = program.len(), "parse succeeded");
            println!("Parsing completed successfully.");
            if options.print_tree {
                print!("{}", program.to_tree_string());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            println!("Parsing failed.");
            eprintln!("{}", render_error(&error, &source));
            Ok(ExitCode::FAILURE)
        }
    }
}
