// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

use job_hasher::config::{load_and_validate_config, HasherConfig};
use job_hasher::engine::run_stream;
use job_hasher::processors::JobHasher;

const DOCKERFILE: &str = r#"FROM rust:1-bookworm AS builder
WORKDIR /usr/src/job-hasher
COPY . .
RUN cargo install --locked --path .

FROM debian:bookworm-slim
COPY --from=builder /usr/local/cargo/bin/job-hasher /usr/local/bin/job-hasher
ENTRYPOINT ["job-hasher"]
"#;

/// Parsed command line
struct Args {
    config: Option<String>,
    debug: bool,
    input: Option<String>,
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [--config <file>] [--debug] [<input.yaml>]\n       {program} gen <dir>\n\
         Reads a ResourceList or multi-document YAML stream (stdin when no input file is given)\n\
         and appends a hash of 'spec' to the name of Jobs annotated with job-hasher: \"true\"."
    )
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args {
        config: None,
        debug: false,
        input: None,
    };

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().context("--config requires a file path")?;
                parsed.config = Some(path.clone());
            }
            "--debug" => parsed.debug = true,
            flag if flag.starts_with("--") => bail!("unknown flag '{flag}' (see --help)"),
            path if parsed.input.is_none() => parsed.input = Some(path.to_string()),
            extra => bail!("unexpected argument '{extra}' (see --help)"),
        }
    }

    Ok(parsed)
}

/// Setup tracing on stderr so stdout carries only the document stream
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("job_hasher=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("job_hasher=info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Write a Dockerfile for packaging the function into `dir`
fn generate_dockerfile(dir: &Path) -> Result<()> {
    let path = dir.join("Dockerfile");
    fs::write(&path, DOCKERFILE).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "Generated Dockerfile");
    Ok(())
}

fn run(args: &[String]) -> Result<()> {
    if args.get(1).map(String::as_str) == Some("gen") {
        setup_logging(false);
        let dir = args.get(2).context("gen requires a target directory")?;
        return generate_dockerfile(Path::new(dir));
    }

    let parsed = parse_args(args)?;
    setup_logging(parsed.debug);

    let config = match &parsed.config {
        Some(path) => load_and_validate_config(path)
            .with_context(|| format!("failed to load config from {path}"))?,
        None => HasherConfig::default(),
    };

    let input = match &parsed.input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read input {path}"))?
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let output = run_stream(&JobHasher::new(config), &input)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if matches!(args.get(1).map(String::as_str), Some("-h" | "--help")) {
        println!("{}", usage(&args[0]));
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("❌ {e:#}");
        std::process::exit(1);
    }
}
