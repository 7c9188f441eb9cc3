//! Interactive chat shell

use crate::settings::Settings;
use cabinet_core::DispatchRequest;
use cabinet_tools::InvocationRecord;
use std::io::{self, BufRead, Write};

const WELCOME: &str = "\
Cabinet — your AI advisory team
===============================

The team covers productivity, research, writing, data, marketing, sales,
legal & compliance, finance, product, engineering, design, HR, PR, and
security.

Examples:
- \"Organize this week's tasks and set priorities\"
- \"Research the market for AI bookkeeping startups\"
- \"Draft a proposal email to a potential partner\"
";

pub async fn run() -> anyhow::Result<()> {
    println!("{}", WELCOME);

    let settings = Settings::load()?;
    println!("Assembling the team...");
    let dispatcher = crate::cli::build_dispatcher(&settings)?;
    println!("Team ready. Type your request, or 'exit' to quit.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("You: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if matches!(input.to_lowercase().as_str(), "exit" | "quit" | "bye") {
            println!("Goodbye!");
            break;
        }

        println!("\nWorking...");
        match dispatcher.process(DispatchRequest::new(input)).await {
            Ok(result) if result.is_success() => {
                println!("\nCabinet:\n{}\n", result.answer.unwrap_or_default());
                print_call_trace(&result.call_trace);
            }
            Ok(result) => {
                let error = result.error.unwrap_or_else(|| "unknown error".to_string());
                println!("\nError: {}\n", error);
            }
            Err(e) => {
                println!("\nRequest failed: {}\n", e);
            }
        }
    }

    Ok(())
}

fn print_call_trace(trace: &[InvocationRecord]) {
    if trace.is_empty() {
        return;
    }
    println!("Specialists used:");
    for record in trace {
        let status = if record.success { "✓" } else { "✗" };
        println!("  {} {}", status, record.tool_name);
    }
    println!();
}
