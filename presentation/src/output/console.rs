//! Console output formatter for the `list` and `call` commands

use colored::Colorize;
use rdw_domain::{ToolResult, ToolSpec};

/// Formats tool listings and results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One block per tool, sorted by name
    pub fn format_tool_list(spec: &ToolSpec) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("{} tools", spec.len())));
        output.push('\n');

        for tool in spec.sorted() {
            output.push_str(&format!("\n{}\n", tool.name.yellow().bold()));
            output.push_str(&Self::indent(&tool.description, "  "));
            output.push('\n');

            let datasets: Vec<&str> = tool.binding.datasets().iter().map(|d| d.as_str()).collect();
            output.push_str(&format!(
                "  {} {}\n",
                "datasets:".dimmed(),
                datasets.join(", ")
            ));
            for param in &tool.parameters {
                let required = if param.required { " (required)" } else { "" };
                output.push_str(&format!(
                    "  {} {}: {}{}\n",
                    "param:".dimmed(),
                    param.name.cyan(),
                    param.param_type,
                    required
                ));
            }
        }

        output
    }

    /// The result text as-is; failed lookups get a marker line first
    pub fn format_result(result: &ToolResult) -> String {
        if result.is_error {
            format!("{}\n{}\n", "Lookup failed:".red().bold(), result.content)
        } else {
            format!("{}\n", result.content)
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
