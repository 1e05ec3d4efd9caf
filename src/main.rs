use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::process;

use ctxfmt::raw::RawTokenReader;
use ctxfmt::{ContextFormatter, FormatterOptions, StyleTable, cli};
use tracing_subscriber::EnvFilter;

fn fail(context: &str, err: impl std::fmt::Display) -> ! {
    eprintln!("ctxfmt: {}: {}", context, err);
    process::exit(2);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = cli::parse_args();
    let options = FormatterOptions::from_pairs(args.options);

    let formatter = match &args.style_file {
        Some(path) => {
            let text = fs::read_to_string(path).unwrap_or_else(|e| fail(path, e));
            let table = StyleTable::from_json(&text).unwrap_or_else(|e| fail(path, e));
            ContextFormatter::with_style_table(options, &table)
        }
        None => ContextFormatter::new(options),
    }
    .unwrap_or_else(|e| {
        eprintln!("ctxfmt: {}", e);
        process::exit(1);
    });

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path).unwrap_or_else(|e| fail(path, e));
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let result = if args.stylesheet {
        writeln!(out, "{}", formatter.style_defs()).map_err(ctxfmt::Error::from)
    } else {
        match &args.input {
            Some(path) => {
                let file = File::open(path).unwrap_or_else(|e| fail(path, e));
                formatter.try_format(RawTokenReader::new(BufReader::new(file)), &mut out)
            }
            None => formatter.try_format(RawTokenReader::new(io::stdin().lock()), &mut out),
        }
    };

    // process::exit skips destructors, so push buffered output out first
    let flushed = out.flush();
    if let Err(e) = result {
        let context = match (&args.input, args.stylesheet) {
            (_, true) => "write",
            (Some(path), false) => path.as_str(),
            (None, false) => "<stdin>",
        };
        fail(context, e);
    }
    if let Err(e) = flushed {
        fail("write", e);
    }
}
