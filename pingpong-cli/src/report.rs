//! Run report generation
//!
//! Renders the outcome of scenario runs as plain text or JSON.

use crate::config::{OutputFormat, ScenarioConfig};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write as _;

/// Outcome of a single scenario run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub scenario: String,
    pub start: i64,
    pub trigger: i64,
    pub pings: u64,
    pub threads: usize,
    pub final_value: i64,
    pub expected_final_value: i64,
    /// Values that produced a trigger, in ascending order
    pub triggered: Vec<i64>,
    pub trigger_count: usize,
    pub generated_at: DateTime<Utc>,
}

impl RunReport {
    pub fn new(scenario: &ScenarioConfig, final_value: i64, triggered: Vec<i64>) -> Self {
        Self {
            scenario: scenario.name.clone(),
            start: scenario.start,
            trigger: scenario.trigger,
            pings: scenario.pings,
            threads: scenario.threads,
            final_value,
            expected_final_value: scenario.start + scenario.pings as i64,
            trigger_count: triggered.len(),
            triggered,
            generated_at: Utc::now(),
        }
    }

    /// Render this report as human-readable text
    pub fn render_txt(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "═══════════════════════════════════════════════");
        let _ = writeln!(out, "  Scenario: {}", self.scenario);
        let _ = writeln!(out, "═══════════════════════════════════════════════");
        let _ = writeln!(out, "Start value:  {}", self.start);
        let _ = writeln!(out, "Trigger:      {}", self.trigger);
        let _ = writeln!(out, "Pings:        {}", self.pings);
        let _ = writeln!(out, "Threads:      {}", self.threads);
        let _ = writeln!(
            out,
            "Final value:  {} (expected {})",
            self.final_value, self.expected_final_value
        );
        let _ = writeln!(out, "Trigger hits: {}", self.trigger_count);
        let _ = writeln!(
            out,
            "With start at {}, trigger at {} and {} pings, the values that produced a trigger -> {}",
            self.start,
            self.trigger,
            self.pings,
            format_values(&self.triggered)
        );
        out
    }
}

/// Render a batch of reports in the requested format
pub fn render(reports: &[RunReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Txt => Ok(reports
            .iter()
            .map(RunReport::render_txt)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
    }
}

/// Format a value list as `[a,b,c]`, matching the demo output shape
fn format_values(values: &[i64]) -> String {
    let mut out = String::from("[");
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{}", value);
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_scenario() -> ScenarioConfig {
        ScenarioConfig {
            name: "demo".to_string(),
            start: 0,
            trigger: 3,
            pings: 11,
            threads: 1,
        }
    }

    #[test]
    fn test_format_values() {
        assert_eq!(format_values(&[]), "[]");
        assert_eq!(format_values(&[3]), "[3]");
        assert_eq!(format_values(&[3, 6, 9]), "[3,6,9]");
    }

    #[test]
    fn test_txt_report_names_the_triggered_values() {
        let report = RunReport::new(&demo_scenario(), 11, vec![3, 6, 9]);
        let txt = report.render_txt();

        assert!(txt.contains("Scenario: demo"));
        assert!(txt.contains("Final value:  11 (expected 11)"));
        assert!(txt.contains(
            "With start at 0, trigger at 3 and 11 pings, the values that produced a trigger -> [3,6,9]"
        ));
    }

    #[test]
    fn test_json_report_is_machine_readable() {
        let report = RunReport::new(&demo_scenario(), 11, vec![3, 6, 9]);
        let json = render(&[report], OutputFormat::Json).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["scenario"], "demo");
        assert_eq!(parsed[0]["trigger_count"], 3);
        assert_eq!(parsed[0]["triggered"], serde_json::json!([3, 6, 9]));
    }
}
