//! Test driver and one-shot validator for the jsontide parser.
//!
//! With no arguments (or `-a`) the built-in suite runs; `-c <json>` checks a
//! single document and prints `JSON OK` when it is well formed. Exit code is
//! 0 on success, 1 on any failure.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser as ClapParser;
use jsontide::{Extensions, ParseStatus, Parser, Value};

#[derive(ClapParser, Debug)]
#[clap(
    name = "jsontide",
    version,
    about = "Streaming JSON parser test driver",
    long_about = "Runs the built-in parser test suite, or validates a single JSON document."
)]
struct Cli {
    /// Run all tests (the default when no action is given).
    #[clap(short = 'a', long = "all", conflicts_with = "check")]
    all: bool,

    /// Validate that a JSON string is syntactically correct.
    #[clap(short = 'c', long = "check", value_name = "JSON")]
    check: Option<String>,

    /// Print every test case, not only the failures.
    #[clap(short = 'v', long = "verbose")]
    verbose: bool,

    /// Halt before exiting (handy for attaching leak checkers).
    #[clap(short = 'p', long = "pause")]
    pause: bool,
}

struct JsonCase {
    should_pass: bool,
    json: &'static [u8],
}

macro_rules! case {
    ($should_pass:expr, $json:expr) => {
        JsonCase {
            should_pass: $should_pass,
            json: $json,
        }
    };
}

static SIMPLE_CASES: &[JsonCase] = &[
    case!(true, b"[]"),
    case!(true, b"[[]]"),
    case!(true, b"[ [], [], [[[]]] ]"),
    case!(false, b""),
    case!(false, b"["),
    case!(false, b"[[]"),
    case!(false, b"]"),
    case!(false, b"[]]"),
    case!(false, b"[,]"),
    case!(false, b"[ [], ] "),
    case!(false, b"[ [,] ] "),
    case!(false, b"[ [], [] [], [] ] "),
    case!(true, b" [ 5 ] "),
    case!(true, b" [ 1024 ] "),
    case!(true, b"[ -10E+6, -1.5e4, -1.5, -1, -1E-6, 0, 1.5, 2, 3.14, 1024, 10e+6 ]"),
    case!(true, b"[[[1024]]]"),
    case!(true, b"[ [ 9, 3, 2], [ 1.5, 99.9999, 0.9999 ], [ -40 ], -99.5e-4 ]"),
    case!(true, b"[ true, false, null, null, false, true, [true,false,null,null,false], null ]"),
    case!(false, b"99"),
    case!(false, b"[45,]"),
    case!(false, b"[ 32$ ]"),
    case!(false, b"[,1]"),
    case!(false, b"[5, 2]]"),
    case!(false, b"[ 99, 3, $, 45 ]"),
    case!(false, b"[ 33, 44.#2, 70 ]"),
    case!(true, b"[ \"\", \"This is a test string.\", \"\\\\\", \"\\\"\" ]"),
    case!(true, "[ \"π = 3.14159...\" ]".as_bytes()),
    case!(true, b"[ \"]\", \"Another string.\", 0 ] "),
    case!(true, b"[ \"\\uD801\\uDC37\\u03c0\\ud801\\udc37\" ] "),
    case!(false, b"[ \"\\uDC37\\uD801\" ] "),
    case!(false, b"[ \"\\uDC37\" ] "),
    case!(false, b"[ \"\\uD801\" ] "),
    case!(false, b"[ \"\\u0000\" ] "),
    case!(false, b"[ \"\\u007f\" ] "),
    case!(false, b"[ \"\x7f\" ]"),
    case!(false, b"[ \x06 ]"),
    case!(false, "[ π ]".as_bytes()),
    case!(false, b"[ \x80\xcf ] "),
    case!(true, b"{}"),
    case!(true, b"{ \"\" : \"\" }"),
    case!(true, b"{ \"[}}{]][,[[[[[}}}\" : \",\\\"}[]][\" } "),
    case!(
        true,
        "{ \"π\" : 3.14159, \"boolean\": true, \"array\": [true, false, 0.1, \"\", {}], \"object\": {} }"
            .as_bytes()
    ),
    case!(true, b"[ {}, { \"\" : \"\" }, { \"true\": true, \"false\": false, \"null\": null } ] "),
    case!(false, b"{,}"),
    case!(false, b"{:}"),
    case!(false, b"{:,}"),
    case!(false, b"{\":,5\":,}"),
    case!(false, b"{\"\"::32}"),
    case!(false, b"{ 34 : \"\" }"),
    case!(false, b"{  : \"\" }"),
    case!(false, b"{ \"\" : }"),
    case!(false, b"{ \"\" : 34234, }"),
    case!(false, b"{ \"\" \"\": \"\" }"),
    case!(false, b"{ \"\" : \"\" \"\" }"),
    case!(false, b"{ \"\" : \"\", \"\" }"),
    case!(false, b"{ \"\" : \"\", [] }"),
    case!(false, b"[1, 2, 3, } "),
    case!(false, b"{ \"\": \"\" ] "),
    case!(false, b"{"),
    case!(false, b"{ \"\" "),
    case!(false, b"{ \"\" : "),
];

fn run_simple_cases(verbose: bool) -> bool {
    println!("Executing simple tests:");

    let mut passed = 0;
    for case in SIMPLE_CASES {
        let result = jsontide::parse(case.json);
        let ok = result.is_ok() == case.should_pass;
        if ok {
            passed += 1;
        }

        if verbose || !ok {
            println!("----------------------------------------------------------");
            println!("Json: {}", String::from_utf8_lossy(case.json));
            println!("Result: {}", if result.is_ok() { "Passed" } else { "Failed" });
            println!(
                "Expected Result: {}",
                if case.should_pass { "Pass" } else { "Fail" }
            );
            match &result {
                Ok(_) => println!("Message: OK"),
                Err(err) => println!("Message: {err}"),
            }
        }
    }

    println!(
        "{passed} of {} Tests Passed ({:.1}%)",
        SIMPLE_CASES.len(),
        passed as f64 / SIMPLE_CASES.len() as f64 * 100.0
    );
    passed == SIMPLE_CASES.len()
}

fn run_multi_buffer_test() -> bool {
    println!("Testing parsing from multiple buffers:");

    let buffers: [&[u8]; 3] = [b"[ 1024, 99, 24, ", b"-35, -788.0, 2048, -3", b"22 ]"];

    let mut parser = Parser::new();
    for buffer in buffers {
        if let Err(err) = parser.parse_chunk(buffer) {
            eprintln!("{err}");
            return false;
        }
    }

    let array = match parser.take_result() {
        Ok(value) => value,
        Err(err) => {
            eprintln!("{err}");
            return false;
        }
    };
    println!("Successfully loaded array of numbers");

    let sum: f64 = array
        .as_array()
        .map(|items| items.iter().filter_map(Value::as_number).sum())
        .unwrap_or(f64::NAN);
    if (sum - 2050.0).abs() > f64::EPSILON {
        eprintln!("Incorrect sum {sum:.0} computed from array, expected 2050.");
        return false;
    }

    println!("Computed correct sum");
    true
}

fn run_extension_test() -> bool {
    println!("Testing extension [UTF8_PI]");

    let mut parser = Parser::new();
    parser.set_extensions(Extensions::UTF8_PI);

    if let Err(err) = parser.parse_chunk(b"[\xcf") {
        eprintln!("Error: {err}");
        return false;
    }
    match parser.parse_chunk(b"\x80]") {
        Ok(ParseStatus::Complete) => {}
        Ok(ParseStatus::Incomplete) => {
            eprintln!("Error: parse did not complete");
            return false;
        }
        Err(err) => {
            eprintln!("Error: {err}");
            return false;
        }
    }

    println!("Success");
    true
}

fn run_tests(verbose: bool) -> bool {
    if !run_simple_cases(verbose) {
        return false;
    }
    println!();
    if !run_multi_buffer_test() {
        return false;
    }
    println!();
    run_extension_test()
}

fn validate_json_string(json: &str) -> bool {
    match jsontide::parse(json.as_bytes()) {
        Ok(_) => {
            println!("JSON OK");
            true
        }
        Err(err) => {
            eprintln!("{err}");
            false
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let ok = if cli.all {
        run_tests(cli.verbose)
    } else if let Some(json) = cli.check.as_deref() {
        validate_json_string(json)
    } else {
        run_tests(cli.verbose)
    };

    if cli.pause {
        print!("\nPress enter to exit:");
        let _ = io::stdout().flush();
        let mut line = String::new();
        let _ = io::stdin().lock().read_line(&mut line);
    }

    if ok { ExitCode::SUCCESS } else { ExitCode::from(1) }
}
