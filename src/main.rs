use std::{env, process::exit};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use stasis::runtime::clock;
use stasis::symbols;

enum Command {
    /// Print every registered stub.
    List,

    /// Print the address of one stub.
    Lookup(String),

    /// Print the instant reported by the time stubs.
    Clock,
}

fn main() {
    setup_logging();

    let args: Vec<String> = env::args().collect();
    let Some(command) = parse_opts(&args) else {
        eprintln!("usage: stasis --list | --lookup <symbol> | --clock");
        exit(1);
    };

    match command {
        Command::List => {
            for name in symbols::names() {
                if let Some(addr) = symbols::lookup(name) {
                    println!("{:<16} 0x{:016x}", name, addr);
                }
            }
        }
        Command::Lookup(name) => match symbols::resolve(&name) {
            Ok(addr) => println!("0x{:016x}", addr),
            Err(e) => {
                eprintln!("{}", e);
                exit(1);
            }
        },
        Command::Clock => {
            let now = clock::now();
            println!("{}.{:06}", now.secs, now.micros);
        }
    }
}

fn parse_opts(args: &[String]) -> Option<Command> {
    let mut i = 1; // Skip program name
    while i < args.len() {
        match args[i].as_str() {
            "--list" => return Some(Command::List),
            "--clock" => return Some(Command::Clock),
            "--lookup" => return args.get(i + 1).map(|name| Command::Lookup(name.clone())),
            other => {
                debug!("ignoring unknown option {}", other);
                i += 1;
            }
        }
    }
    None
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
