/*
 * ==========================================================================
 * RAT25F - Single-pass compiler front end
 * ==========================================================================
 * 
 * Author:   Sam Wilcox
 * 
 * License:
 * This file is part of the RAT25F compiler project.
 * 
 * RAT25F is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 * 
 * You may choose either license to govern your use of this software.
 * Full license texts are available at:
 *    https://opensource.org/licenses/MIT
 *    https://www.apache.org/licenses/LICENSE-2.0
 * 
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * 
 * ==========================================================================
 */

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use rat25f::config::{CompileOptions, Mode};
use rat25f::diagnostics::{progress, DiagnosticPrinter};
use rat25f::error::RatError;
use rat25f::report;

const USAGE: &str = "\
Usage: rat25f <source.rat25> [options]

Options:
  -o, --output <file>   Listing file (default: <source>.out)
      --config <file>   JSON options file
      --syntax-only     Syntax analysis only, over the full grammar
      --base <n>        First symbol memory address (default 10000)
      --no-trace        Do not record the production trace
      --json            Print artifacts as JSON instead of text
  -v, --verbose         Timestamped progress on stderr";

struct Cli {
    input: PathBuf,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    syntax_only: bool,
    base: Option<i64>,
    no_trace: bool,
    json: bool,
    verbose: bool,
}

fn parse_args(args: &[String]) -> Result<Cli, RatError> {
    let mut cli = Cli {
        input: PathBuf::new(),
        output: None,
        config: None,
        syntax_only: false,
        base: None,
        no_trace: false,
        json: false,
        verbose: false,
    };
    let mut input = None;
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| RatError::config(format!("Missing value for {}", flag)))
        };

        match arg.as_str() {
            "-o" | "--output" => cli.output = Some(PathBuf::from(value(arg.as_str())?)),
            "--config" => cli.config = Some(PathBuf::from(value(arg.as_str())?)),
            "--base" => {
                let raw = value(arg.as_str())?;
                let base = raw
                    .parse()
                    .map_err(|_| RatError::config(format!("Invalid memory base '{}'", raw)))?;
                cli.base = Some(base);
            }
            "--syntax-only" => cli.syntax_only = true,
            "--no-trace" => cli.no_trace = true,
            "--json" => cli.json = true,
            "-v" | "--verbose" => cli.verbose = true,
            flag if flag.starts_with('-') => {
                return Err(RatError::config(format!("Unknown option '{}'", flag)));
            }
            path => {
                if input.replace(PathBuf::from(path)).is_some() {
                    return Err(RatError::config("Only one source file may be given"));
                }
            }
        }
    }

    cli.input = input.ok_or_else(|| RatError::config("No source file given"))?;
    Ok(cli)
}

/// File options first, then command-line flags on top.
fn resolve_options(cli: &Cli) -> Result<CompileOptions, RatError> {
    let mut options = match &cli.config {
        Some(path) => CompileOptions::load(path)?,
        None => CompileOptions::default(),
    };

    if cli.syntax_only {
        options.mode = Mode::SyntaxOnly;
    }
    if let Some(base) = cli.base {
        options.memory_base = base;
    }
    if cli.no_trace {
        options.trace = false;
    }
    if cli.verbose {
        options.verbose = true;
    }

    Ok(options)
}

fn write_file(path: &Path, contents: &str) -> Result<(), RatError> {
    fs::write(path, contents)
        .map_err(|e| RatError::io(format!("Failed to write {}: {}", path.display(), e)))
}

/// Returns whether the source compiled.
fn run(cli: &Cli) -> Result<bool, RatError> {
    let options = resolve_options(cli)?;
    let file_name = cli.input.display().to_string();
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_extension("out"));

    progress(options.verbose, format!("reading {}", file_name));
    let source = fs::read_to_string(&cli.input)
        .map_err(|e| RatError::io(format!("Failed to read {}: {}", file_name, e)))?;

    progress(options.verbose, format!("compiling in {:?} mode", options.mode));
    match rat25f::compile(&source, &options) {
        Ok(artifacts) => {
            progress(
                options.verbose,
                format!(
                    "{} instruction(s), {} symbol(s)",
                    artifacts.instructions.len(),
                    artifacts.symbols.len()
                ),
            );

            let text = report::render_report(&artifacts);
            write_file(&output, &text)?;
            progress(options.verbose, format!("wrote {}", output.display()));

            println!("Syntax is correct.");
            if cli.json {
                println!("{}", report::to_json(&artifacts)?);
            } else if options.mode.generates_code() {
                println!("\n{}", report::render_listing(&artifacts));
            }
            Ok(true)
        }
        Err(failure) => {
            write_file(&output, &report::render_failure(&failure.error))?;
            DiagnosticPrinter::new(file_name, source).print(&failure.error);
            Ok(false)
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("{}\n\n{}", err, USAGE);
            process::exit(2);
        }
    };

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("error[{}]: {}", err.code, err);
            process::exit(1);
        }
    }
}
