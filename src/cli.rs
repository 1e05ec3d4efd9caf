use std::env;
use std::process;

use crate::options::parse_option_list;

#[derive(Debug, Default)]
pub struct Args {
    pub options: Vec<(String, String)>,
    pub style_file: Option<String>,
    pub output: Option<String>,
    pub input: Option<String>,
    pub stylesheet: bool,
}

pub fn parse_args() -> Args {
    let args: Vec<String> = env::args().skip(1).collect();
    match parse_from(&args) {
        Ok(Some(args)) => args,
        Ok(None) => process::exit(0),
        Err(msg) => {
            eprintln!("ctxfmt: {}", msg);
            eprintln!("Try 'ctxfmt --help' for usage.");
            process::exit(1);
        }
    }
}

/// Parse arguments. `Ok(None)` means help or version was printed.
pub fn parse_from(args: &[String]) -> Result<Option<Args>, String> {
    let mut out = Args::default();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];

        if arg == "--" {
            i += 1;
            if let Some(file) = args.get(i) {
                set_input(&mut out, file)?;
            }
            break;
        }

        if arg == "-O" {
            i += 1;
            let value = args.get(i).ok_or("-O requires an argument")?;
            out.options.extend(parse_option_list(value));
        } else if let Some(value) = arg.strip_prefix("-O") {
            out.options.extend(parse_option_list(value));
        } else if arg == "-o" {
            i += 1;
            let value = args.get(i).ok_or("-o requires an argument")?;
            out.output = Some(value.clone());
        } else if arg == "--style-file" {
            i += 1;
            let value = args.get(i).ok_or("--style-file requires an argument")?;
            out.style_file = Some(value.clone());
        } else if let Some(value) = arg.strip_prefix("--style-file=") {
            out.style_file = Some(value.to_string());
        } else if arg == "-S" || arg == "--stylesheet" {
            out.stylesheet = true;
        } else if arg == "-h" || arg == "--help" {
            print_usage();
            return Ok(None);
        } else if arg == "--version" {
            println!("ctxfmt {}", env!("CARGO_PKG_VERSION"));
            return Ok(None);
        } else if arg.starts_with('-') && arg.len() > 1 {
            return Err(format!("unknown option: {}", arg));
        } else {
            set_input(&mut out, arg)?;
        }

        i += 1;
    }

    Ok(Some(out))
}

fn set_input(args: &mut Args, file: &str) -> Result<(), String> {
    if args.input.is_some() {
        return Err(format!("unexpected extra input file: {}", file));
    }
    args.input = Some(file.to_string());
    Ok(())
}

fn print_usage() {
    eprintln!(
        "ctxfmt {} — ConTeXt verbatim output for token streams",
        env!("CARGO_PKG_VERSION")
    );
    eprintln!();
    eprintln!("Usage: ctxfmt [options] [tokens-file]");
    eprintln!("       ctxfmt -S [options]                # print style definitions");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -O key=val[,...]   Formatter options: codename, escapeopen, escapeclose,");
    eprintln!("                     commandprefix, style (default, bw)");
    eprintln!("  --style-file FILE  JSON object of category -> style definition");
    eprintln!("  -S, --stylesheet   Print colour and macro definitions and exit");
    eprintln!("  -o FILE            Write output to FILE instead of stdout");
    eprintln!("  -h, --help         Show this help");
    eprintln!();
    eprintln!("Input is one token per line: <Category><TAB><JSON string>, e.g.");
    eprintln!("  Token.Keyword\t\"def\"");
    eprintln!();
    eprintln!("Set RUST_LOG=debug to trace style resolution.");
}
