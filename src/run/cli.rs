use anyhow::Result;

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    match args[1].as_str() {
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("budget-tracker {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("budget-tracker — personal budget tracker for the console");
    println!();
    println!("Usage: budget-tracker [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Start the interactive menu");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Environment:");
    println!("  BUDGET_TRACKER_LOG            Log filter for stderr output (default: warn)");
    println!("  NO_COLOR                      Disable coloured output");
}
