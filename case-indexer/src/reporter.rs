//! Console reporting for run summaries.

use colored::Colorize;

use case_indexer_shared::RunSummary;

/// Print the run summary to the console.
pub fn print_summary(summary: &RunSummary) {
    println!("{}", render(summary));

    if summary.is_success() {
        println!("{}", "✓ All chunks uploaded".green());
    } else {
        println!(
            "{}",
            format!("✗ {} chunk(s) failed", summary.failed_chunks()).red()
        );
    }
}

fn render(summary: &RunSummary) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push("=".repeat(60));
    lines.push("BULK LOAD RESULTS".to_string());
    lines.push("=".repeat(60));
    lines.push(format!("  Started:  {}", summary.started_at.to_rfc3339()));
    lines.push(format!(
        "  Elapsed:  {:.1} seconds",
        summary.elapsed_ms as f64 / 1000.0
    ));
    lines.push(format!("  Records:  {}", summary.total_records));
    lines.push(format!(
        "  Chunks:   {} total, {} succeeded, {} failed",
        summary.chunks.len(),
        summary.succeeded_chunks(),
        summary.failed_chunks()
    ));
    lines.push(format!("  Uploaded: {} records", summary.uploaded_records()));

    if !summary.chunks.is_empty() {
        lines.push(String::new());
        lines.push("Chunks:".to_string());
        for chunk in &summary.chunks {
            let status = if chunk.success { "ok" } else { "failed" };
            let mut line = format!(
                "  [{:>6}..{:<6}) {:>5} records  {:>6} ms  {}",
                chunk.start, chunk.end, chunk.records, chunk.latency_ms, status
            );
            if let Some(ref error) = chunk.error {
                line.push_str(&format!("  ({})", error));
            }
            lines.push(line);
        }
    }

    lines.push("=".repeat(60));
    lines.join("\n")
}
