//! powersched entry point: CLI wiring around the planning library.

use std::path::Path;
use std::process;

use powersched::config;
use powersched::io::export::export_csv;
use powersched::plan::plan_day;
use powersched::report::PlanReport;

/// Parsed CLI arguments.
struct CliArgs {
    input_path: Option<String>,
    preset: Option<String>,
    report_out: Option<String>,
    json: bool,
}

fn print_help() {
    eprintln!("powersched — single-day household device energy scheduler");
    eprintln!();
    eprintln!("Usage: powersched [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --input <path>        Load devices/rates/budget from a TOML or JSON file");
    eprintln!("  --preset <name>       Use a built-in dataset (sample)");
    eprintln!("  --report-out <path>   Export the hourly plan to CSV");
    eprintln!("  --json                Print the report as JSON instead of a table");
    eprintln!("  --help                Show this help message");
    eprintln!();
    eprintln!("If no --input or --preset is given, the sample preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        input_path: None,
        preset: None,
        report_out: None,
        json: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--input" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --input requires a path argument");
                    process::exit(1);
                }
                cli.input_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--report-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --report-out requires a path argument");
                    process::exit(1);
                }
                cli.report_out = Some(args[i].clone());
            }
            "--json" => {
                cli.json = true;
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    if cli.input_path.is_some() && cli.preset.is_some() {
        eprintln!("error: --input and --preset are mutually exclusive; choose one source");
        process::exit(1);
    }

    cli
}

fn main() {
    let cli = parse_args();

    // Load input: --input takes priority, then --preset, then the sample default
    let input = if let Some(ref path) = cli.input_path {
        match config::load_input(Path::new(path)) {
            Ok(input) => input,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match config::from_preset(name) {
            Ok(input) => input,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        config::sample()
    };

    // Validate
    let errors = config::validate(&input);
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    // Plan the day
    let plan = match plan_day(&input) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };
    let report = PlanReport::from_plan(&plan, &input);

    // Print the report
    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize report: {e}");
                process::exit(1);
            }
        }
    } else {
        println!("{report}");
    }

    // Export CSV if requested
    if let Some(ref path) = cli.report_out {
        if let Err(e) = export_csv(&plan, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Plan written to {path}");
    }
}
