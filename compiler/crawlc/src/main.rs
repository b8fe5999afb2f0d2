//! Crawl CLI

use crawlc::commands::{check_file, lex_file, parse_run_options, run_file};

fn main() {
    crawlc::init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            let mut file_path = None;
            let mut flags = Vec::new();
            for arg in args.iter().skip(2) {
                if arg.starts_with('-') {
                    flags.push(arg.as_str());
                } else if file_path.is_none() {
                    file_path = Some(arg.as_str());
                }
            }

            let Some(path) = file_path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: crawl run <file.crawl> [options]");
                std::process::exit(1);
            };

            match parse_run_options(&flags) {
                Ok(options) => run_file(path, &options),
                Err(message) => {
                    eprintln!("error: {message}");
                    std::process::exit(1);
                }
            }
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: crawl check <file.crawl>");
                std::process::exit(1);
            }
            check_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: crawl lex <file.crawl>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("crawl {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Crawl scripting language");
    println!();
    println!("Usage: crawl <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.crawl>     Run a program against the console host");
    println!("  check <file.crawl>   Report syntax errors without running");
    println!("  lex <file.crawl>     Tokenize and display tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --once               Run the program body once instead of repeating");
    println!("  --seed=<n>           Seed for rand()");
    println!("  --delay=<ms>         Delay before resuming after each action (default 100)");
    println!("  --sensor=<state>     read_front() answer: open (default) or closed");
    println!();
    println!("Examples:");
    println!("  crawl run robot.crawl --once");
    println!("  crawl run robot.crawl --seed=7 --delay=0");
    println!("  crawl check robot.crawl");
}
