use std::{env, fs::read_to_string, process::ExitCode, time::Instant};

use tern::{
    display_error,
    parser::parser::{parse, parse_with_policy, TopLevelPolicy},
    structure::structure::{blockify, Navigator},
};

fn main() -> ExitCode {
    let mut strict = false;
    let mut files = vec![];
    for arg in env::args().skip(1) {
        if arg == "--strict" {
            strict = true;
        } else {
            files.push(arg);
        }
    }

    if files.is_empty() {
        eprintln!("usage: tern [--strict] <file>...");
        return ExitCode::FAILURE;
    }

    // one file's failure does not stop the batch
    let mut failed = false;
    for file in &files {
        let source = match read_to_string(file) {
            Ok(source) => source,
            Err(err) => {
                println!("Could not read file {}: {}", file, err);
                failed = true;
                continue;
            }
        };

        let start = Instant::now();
        let unit = blockify(&source).and_then(|tree| {
            let mut nav = Navigator::new(&tree);
            if strict {
                parse_with_policy(&mut nav, TopLevelPolicy::Strict)
            } else {
                parse(&mut nav)
            }
        });

        match unit {
            Ok(unit) => {
                println!("{:#?}", unit);
                println!("Parsed {} in {:?}", file, start.elapsed());
            }
            Err(error) => {
                display_error(&error, file, &source);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
