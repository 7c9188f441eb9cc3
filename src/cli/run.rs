//! Single-request batch runner

use crate::settings::Settings;
use anyhow::Context;
use cabinet_core::DispatchRequest;

pub async fn run(
    request: String,
    context: Option<String>,
    max_iterations: usize,
) -> anyhow::Result<()> {
    let settings = Settings::load()?;
    let dispatcher = crate::cli::build_dispatcher(&settings)?;

    let preview: String = request.chars().take(100).collect();
    println!("Request: {}\n{}", preview, "=".repeat(60));

    let mut dispatch = DispatchRequest::new(request).with_max_iterations(max_iterations);
    if let Some(raw) = context {
        let value: serde_json::Value =
            serde_json::from_str(&raw).context("--context must be a valid JSON value")?;
        dispatch = dispatch.with_context(value);
    }

    let result = dispatcher.process(dispatch).await?;

    if result.is_success() {
        println!("\n{}", result.answer.unwrap_or_default());
        if !result.call_trace.is_empty() {
            println!("\n{}", "=".repeat(60));
            println!("Specialists used:");
            for record in &result.call_trace {
                let status = if record.success { "✓" } else { "✗" };
                println!("  {} {}", status, record.tool_name);
            }
        }
    } else {
        let error = result.error.unwrap_or_else(|| "unknown error".to_string());
        println!("\nError: {}", error);
    }

    Ok(())
}
