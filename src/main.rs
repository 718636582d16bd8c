// std imports
use std::{
    io::{BufRead, BufWriter, Write, stdin, stdout},
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use globcraft::{Matcher, cli, error::*, settings::Settings};

const GLOBCRAFT_DEBUG_LOG: &str = "GLOBCRAFT_DEBUG_LOG";
const GLOBCRAFT_DEBUG_LOG_STYLE: &str = "GLOBCRAFT_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(GLOBCRAFT_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(GLOBCRAFT_DEBUG_LOG)
                .write_style(GLOBCRAFT_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

/// Returns whether anything was printed.
fn run() -> Result<bool> {
    bootstrap();

    let opt = cli::Opt::parse();
    let settings = Settings::load(opt.config.as_deref())?;
    let options = opt.options(&settings);
    log::debug!("options: {:?}", options);

    let matcher = Matcher::new(&opt.pattern, &options)?;
    let mut output = BufWriter::new(stdout().lock());

    if opt.source {
        for source in matcher.sources() {
            writeln!(output, "{}", source)?;
        }
        output.flush()?;
        return Ok(true);
    }

    let mut found = false;
    let mut filter = |candidate: &str| -> Result<()> {
        if matcher.is_match(candidate) != opt.invert {
            writeln!(output, "{}", candidate)?;
            found = true;
        }
        Ok(())
    };

    if opt.candidates.is_empty() {
        for line in stdin().lock().lines() {
            filter(&line?)?;
        }
    } else {
        for candidate in &opt.candidates {
            filter(candidate)?;
        }
    }

    output.flush()?;
    Ok(found)
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            err.log();
            process::exit(2);
        }
    }
}
