//! Final verdict and suggested follow-ups.

/// Print the closing verdict based on whether league access worked.
pub fn print_summary(connected: bool) {
    println!("\nSUMMARY:");
    for line in summary_lines(connected) {
        println!("{}", line);
    }
}

pub fn summary_lines(connected: bool) -> Vec<String> {
    if connected {
        vec![
            "✓ ESPN API can connect to the league".to_string(),
            "  Live draft monitoring from this data looks feasible".to_string(),
            String::new(),
            "Next steps:".to_string(),
            "  1. Add authentication cookies for private league access".to_string(),
            "  2. Re-run during an active draft".to_string(),
            "  3. Wire the probe into a live monitoring system".to_string(),
        ]
    } else {
        vec![
            "✗ Couldn't connect to the league".to_string(),
            "  Private leagues may require authentication cookies".to_string(),
        ]
    }
}
