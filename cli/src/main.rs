//! `argbind-demo`: adds a float and an integer, then greets the caller.
//!
//! ```text
//! $ argbind-demo --name=Ferris 1.25 2
//! Hello Ferris.
//! Result: 3.25000
//! ```
//!
//! Help goes to stderr with exit status 0; any parse error is reported on
//! stderr, followed by the help text, with exit status 1. Set `ARGBIND_LOG`
//! (`trace`, `debug`, ...) to see what the parser is doing.

use std::str::FromStr;

use argbind_core::{Command, Outcome, Result, heapless};
use tracing::{Level, debug};

const DESCRIPTION: &str = "Adds a float and an integer, then says hello.";
const USAGE: &str = "[-name NAME] FLOAT INT";
const NAME_CAPACITY: usize = 24;

fn main() {
    init_tracing();

    let argv: Vec<String> = std::env::args().collect();
    let program = argv.first().map_or("argbind-demo", String::as_str);

    let mut name: heapless::String<NAME_CAPACITY> = heapless::String::new();
    let mut x = 0.0;
    let mut y = 0;

    let cmd = match declare(&mut name, &mut x, &mut y) {
        Ok(cmd) => cmd,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };
    let usage = cmd.usage();

    match cmd.parse(&argv) {
        Ok(Outcome::Done) => {}
        Ok(Outcome::HelpRequested(usage)) => {
            eprint!("{}", usage.display(program));
            return;
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprint!("{}", usage.display(program));
            std::process::exit(1);
        }
    }

    debug!(name = name.as_str(), x, y, "parsed");
    let who = if name.is_empty() {
        "(whoever you are)"
    } else {
        name.as_str()
    };
    println!("Hello {who}.\nResult: {:.5}", x + y as f64);
}

fn declare<'a>(
    name: &'a mut heapless::String<NAME_CAPACITY>,
    x: &'a mut f64,
    y: &'a mut i64,
) -> Result<Command<'a>> {
    let mut cmd = Command::new(DESCRIPTION, USAGE)?;
    cmd.add_text_option("name", "Your name. Optional.", name, false)?;
    cmd.add_float_argument(x)?;
    cmd.add_int_argument(y)?;
    Ok(cmd)
}

fn init_tracing() {
    let level = std::env::var("ARGBIND_LOG")
        .ok()
        .and_then(|value| Level::from_str(&value).ok())
        .unwrap_or(Level::WARN);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
