use std::{
    env, fs,
    io::{self, Read},
    process,
    rc::Rc,
    time::Instant,
};

use lox::{
    display_error,
    errors::errors::{Error, ErrorKind},
    interpreter::interpreter::Interpreter,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

/// Settings read from the environment.
struct Config {
    /// `LOX_TIMINGS`: report how long each stage took
    timings: bool,
    /// `LOX_DUMP_TOKENS`: print every scanned token before parsing
    dump_tokens: bool,
}

impl Config {
    fn from_env() -> Self {
        Config {
            timings: env_flag("LOX_TIMINGS"),
            dump_tokens: env_flag("LOX_DUMP_TOKENS"),
        }
    }
}

fn env_flag(name: &str) -> bool {
    match env::var(name) {
        Ok(value) => matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes"),
        Err(_) => false,
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = Config::from_env();

    let (source, file_name) = match args.as_slice() {
        [] => {
            let mut source = String::new();
            if let Err(error) = io::stdin().read_to_string(&mut source) {
                eprintln!("Failed to read standard input: {}", error);
                process::exit(66);
            }
            (source, String::from("stdin"))
        }
        [file_path] => match fs::read_to_string(file_path) {
            Ok(source) => (source, file_path.clone()),
            Err(error) => {
                eprintln!("Failed to read file {}: {}", file_path, error);
                process::exit(66);
            }
        },
        _ => {
            eprintln!("Usage: lox [script]");
            process::exit(64);
        }
    };

    if let Err(error) = run(&source, file_name, &config) {
        let _ = display_error(&error, &source, &mut io::stderr());

        process::exit(match error.get_error_kind() {
            ErrorKind::Lex | ErrorKind::Parse => 65,
            ErrorKind::Runtime => 70,
        });
    }
}

fn run(source: &str, file_name: String, config: &Config) -> Result<(), Error> {
    let start = Instant::now();

    let tokens = tokenize(String::from(source), Some(file_name.clone()))?;

    if config.timings {
        eprintln!("Tokenized in {:?}", start.elapsed());
    }
    if config.dump_tokens {
        for token in &tokens {
            eprintln!("{}", token.debug());
        }
    }

    let parse_start = Instant::now();
    let file = Rc::new(file_name);
    let statements = parse(tokens, Rc::clone(&file))?;

    if config.timings {
        eprintln!("Parsed in {:?}", parse_start.elapsed());
    }

    let interpret_start = Instant::now();
    let mut interpreter = Interpreter::new(io::stdout().lock(), file);
    interpreter.interpret(&statements)?;

    if config.timings {
        eprintln!("Interpreted in {:?}", interpret_start.elapsed());
        eprintln!("Total time: {:?}", start.elapsed());
    }

    Ok(())
}
