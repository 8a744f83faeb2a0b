// ============================================================================
// Gaussian CLI
// Evaluates one standard-normal function in the reference lane
// ============================================================================
//
// Usage: gaussian --cdf|--ppf|--pdf|--erfc|--ierfc <value>

use gaussian_invariant::gaussian::reference;
use std::process::ExitCode;

fn lookup(flag: &str) -> Option<(&'static str, fn(f64) -> f64)> {
    let entry: (&'static str, fn(f64) -> f64) = match flag {
        "--cdf" => ("cdf", reference::cdf),
        "--ppf" => ("ppf", reference::ppf),
        "--pdf" => ("pdf", reference::pdf),
        "--erfc" => ("erfc", reference::erfc),
        "--ierfc" => ("ierfc", reference::ierfc),
        _ => return None,
    };
    Some(entry)
}

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let flag = args.next().unwrap_or_default();

    let Some(value) = args.next().filter(|v| !v.is_empty()) else {
        println!("No value supplied...");
        return ExitCode::SUCCESS;
    };

    let Some((name, function)) = lookup(&flag) else {
        println!("Unknown operation: {}", flag);
        return ExitCode::SUCCESS;
    };

    match value.trim().parse::<f64>() {
        Ok(x) => {
            println!("{}: {}", name, function(x));
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("Invalid value '{}': {}", value, err);
            ExitCode::FAILURE
        },
    }
}
