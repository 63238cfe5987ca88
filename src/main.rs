use std::fs;
use std::io::{self, Write};

use anyhow::{anyhow, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use serde::{Deserialize, Serialize};

use qm_minimizer::{minimize, MinimizationResult, OptimizationLevel, Options};

#[derive(Debug, Deserialize)]
struct MinimizeRequest {
    variables: usize,
    minterms: Vec<u32>,
    #[serde(default)]
    dont_cares: Vec<u32>,
    #[serde(default)]
    variable_names: Option<Vec<String>>,
    #[serde(default)]
    output_name: Option<String>,
}

#[derive(Debug, Serialize)]
struct MinimizeResponse {
    minimal_sop: String,
    minimal_pos: Option<String>,
    canonical_sop: String,
    canonical_pos: String,
    prime_implicants: Vec<String>,
    essential_prime_implicants: Vec<String>,
    selected: Vec<String>,
    is_minimal: bool,
}

impl MinimizeResponse {
    fn from_result(result: &MinimizationResult, include_pos: bool) -> Self {
        MinimizeResponse {
            minimal_sop: result.minimal_sop.clone(),
            minimal_pos: if include_pos {
                Some(result.minimal_pos.clone())
            } else {
                None
            },
            canonical_sop: result.canonical_sop.clone(),
            canonical_pos: result.canonical_pos.clone(),
            prime_implicants: result
                .prime_implicants
                .iter()
                .map(|pi| pi.cube.expression.clone())
                .collect(),
            essential_prime_implicants: result
                .prime_implicants
                .iter()
                .filter(|pi| pi.essential)
                .map(|pi| pi.cube.expression.clone())
                .collect(),
            selected: result.selected.iter().map(|c| c.expression.clone()).collect(),
            is_minimal: result.is_minimal,
        }
    }
}

fn build_cli() -> Command {
    Command::new("qm-minimizer")
        .version("0.1.0")
        .about("Exact two-level Quine-McCluskey Boolean minimizer")
        .subcommand(
            Command::new("minimize")
                .about("Minimize a Boolean function given as minterms (and optional don't-cares)")
                .arg(
                    Arg::new("vars")
                        .long("vars")
                        .help("Number of Boolean variables (2-15)"),
                )
                .arg(
                    Arg::new("ones")
                        .long("ones")
                        .help("Comma-separated minterm list, e.g. \"0,2,5,7\""),
                )
                .arg(
                    Arg::new("dont-cares")
                        .long("dont-cares")
                        .help("Comma-separated don't-care list")
                        .default_value(""),
                )
                .arg(
                    Arg::new("names")
                        .long("names")
                        .help("Comma-separated variable names, e.g. \"A,B,C\""),
                )
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help("JSON request file (overrides --vars/--ones/--dont-cares/--names)"),
                )
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .help("Output format")
                        .value_parser(["human", "json", "table", "steps"])
                        .default_value("human"),
                )
                .arg(
                    Arg::new("pos")
                        .long("pos")
                        .help("Compute and print the Product-of-Sums form too")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("deadline-ms")
                        .long("deadline-ms")
                        .help("Cooperative cancellation deadline in milliseconds"),
                ),
        )
        .subcommand(
            Command::new("interactive")
                .about("Interactive REPL: enter minterm specs one at a time"),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let result = match matches.subcommand() {
        Some(("minimize", sub_matches)) => handle_minimize_args(sub_matches),
        Some(("interactive", _)) => handle_interactive(),
        _ => {
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn handle_minimize_args(matches: &ArgMatches) -> Result<()> {
    let vars = matches
        .get_one::<String>("vars")
        .map(|s| s.parse::<usize>())
        .transpose()
        .context("--vars must be an integer")?;
    let ones = matches.get_one::<String>("ones").cloned();
    let dont_cares = matches
        .get_one::<String>("dont-cares")
        .cloned()
        .unwrap_or_default();
    let names = matches.get_one::<String>("names").cloned();
    let input = matches.get_one::<String>("input").cloned();
    let format = matches
        .get_one::<String>("format")
        .cloned()
        .unwrap_or_else(|| "human".to_string());
    let pos = matches.get_flag("pos");
    let deadline_ms = matches
        .get_one::<String>("deadline-ms")
        .map(|s| s.parse::<u64>())
        .transpose()
        .context("--deadline-ms must be an integer")?;

    handle_minimize(vars, ones, dont_cares, names, input, &format, pos, deadline_ms)
}

fn parse_csv_u32(s: &str) -> Result<Vec<u32>> {
    s.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u32>().with_context(|| format!("invalid minterm '{s}'")))
        .collect()
}

fn parse_csv_names(s: &str) -> Vec<String> {
    s.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn build_request(
    vars: Option<usize>,
    ones: Option<String>,
    dont_cares: String,
    names: Option<String>,
    input: Option<String>,
) -> Result<MinimizeRequest> {
    if let Some(path_or_json) = input {
        let text = fs::read_to_string(&path_or_json).unwrap_or(path_or_json);
        return serde_json::from_str(&text)
            .with_context(|| "failed to parse --input as a minimize request".to_string());
    }

    let variables = vars.ok_or_else(|| anyhow!("--vars is required unless --input is given"))?;
    let minterms = parse_csv_u32(
        &ones.ok_or_else(|| anyhow!("--ones is required unless --input is given"))?,
    )?;
    let dont_cares = parse_csv_u32(&dont_cares)?;
    let variable_names = names.map(|n| parse_csv_names(&n));

    Ok(MinimizeRequest {
        variables,
        minterms,
        dont_cares,
        variable_names,
        output_name: None,
    })
}

fn run_request(request: &MinimizeRequest, include_pos: bool, deadline_ms: Option<u64>) -> Result<MinimizationResult> {
    let variable_names = request.variable_names.clone().unwrap_or_default();
    let output_name = request.output_name.as_deref().unwrap_or("F");

    let options = Options {
        compute_pos: include_pos,
        emit_steps: true,
        deadline_ms,
        optimization_level: OptimizationLevel::Auto,
    };

    minimize(
        request.variables,
        &request.minterms,
        &request.dont_cares,
        &variable_names,
        output_name,
        options,
    )
    .map_err(|e| anyhow!("{e}"))
}

#[allow(clippy::too_many_arguments)]
fn handle_minimize(
    vars: Option<usize>,
    ones: Option<String>,
    dont_cares: String,
    names: Option<String>,
    input: Option<String>,
    format: &str,
    pos: bool,
    deadline_ms: Option<u64>,
) -> Result<()> {
    let request = build_request(vars, ones, dont_cares, names, input)?;
    let result = run_request(&request, pos, deadline_ms)?;

    match format {
        "json" => {
            let response = MinimizeResponse::from_result(&result, pos);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        "human" => print_human_readable(&result, pos),
        "table" => print_table_format(&result),
        "steps" => print_steps(&result),
        _ => return Err(anyhow!("unknown format: {format}")),
    }

    Ok(())
}

fn print_human_readable(result: &MinimizationResult, include_pos: bool) {
    println!("Quine-McCluskey Boolean Minimization Result");
    println!("============================================");

    println!("\nMinimized expression (SOP):");
    println!("   {} = {}", result.output_name, result.minimal_sop);

    if include_pos {
        println!("\nMinimized expression (POS):");
        println!("   {} = {}", result.output_name, result.minimal_pos);
    }

    println!("\nCanonical forms:");
    println!("   SOP: {}", result.canonical_sop);
    println!("   POS: {}", result.canonical_pos);

    println!("\nPrime implicants:");
    for pi in &result.prime_implicants {
        let marker = if pi.essential { "*" } else { " " };
        println!("   [{marker}] {}  covers {:?}", pi.cube.expression, pi.covers);
    }

    println!("\nSelected cover:");
    for cube in &result.selected {
        println!("   {}", cube.expression);
    }

    if !result.is_minimal {
        println!("\nWARNING: deadline exceeded; this is the best cover found, not proven minimal.");
    }

    println!(
        "\nPrime implicants: {}  Essential: {}  Selected: {}  B&B nodes: {}",
        result.counts.prime_implicant_count,
        result.counts.essential_count,
        result.counts.selected_count,
        result.counts.branch_and_bound_nodes,
    );
}

fn print_table_format(result: &MinimizationResult) {
    println!("PI\tEssential\tCovers");
    for pi in &result.prime_implicants {
        println!("{}\t{}\t{:?}", pi.cube.expression, pi.essential, pi.covers);
    }
    println!("\nMinimized Expression: {}", result.minimal_sop);
}

fn print_steps(result: &MinimizationResult) {
    if result.steps.is_empty() {
        println!("No step-by-step information available.");
        return;
    }
    println!("Quine-McCluskey Solution Steps:");
    println!("===============================");
    for (i, step) in result.steps.iter().enumerate() {
        println!("{}. {}", i + 1, step);
    }
}

fn handle_interactive() -> Result<()> {
    println!("qm-minimizer interactive mode");
    println!("=============================");
    println!("Enter: <n_vars> <minterms...> [-- <dont-cares...>]");
    println!("Example: 3 0 2 5 7");
    println!("Type 'quit' to exit.\n");

    loop {
        print!("qm> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        match input {
            "quit" | "exit" => break,
            "" => continue,
            _ => match parse_interactive_line(input) {
                Ok(request) => match run_request(&request, true, None) {
                    Ok(result) => {
                        println!();
                        print_human_readable(&result, true);
                        println!();
                    }
                    Err(e) => eprintln!("Error processing: {e:#}"),
                },
                Err(e) => eprintln!("Parse error: {e:#}"),
            },
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn parse_interactive_line(input: &str) -> Result<MinimizeRequest> {
    let mut parts = input.splitn(2, "--");
    let head = parts.next().unwrap_or_default();
    let tail = parts.next();

    let mut head_tokens = head.split_whitespace();
    let variables: usize = head_tokens
        .next()
        .ok_or_else(|| anyhow!("expected <n_vars> as the first token"))?
        .parse()
        .context("n_vars must be an integer")?;
    let minterms: Vec<u32> = head_tokens
        .map(|s| s.parse::<u32>().with_context(|| format!("invalid minterm '{s}'")))
        .collect::<Result<_>>()?;
    let dont_cares: Vec<u32> = tail
        .map(|t| {
            t.split_whitespace()
                .map(|s| s.parse::<u32>().with_context(|| format!("invalid don't-care '{s}'")))
                .collect::<Result<_>>()
        })
        .transpose()?
        .unwrap_or_default();

    Ok(MinimizeRequest {
        variables,
        minterms,
        dont_cares,
        variable_names: None,
        output_name: None,
    })
}
