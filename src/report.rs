// Presentation layer: fixed-width text table, with an optional JSON dump
// of full history/messages. The core never needs either format itself.

use serde::Serialize;

use crate::record::{InstructionRecord, ReportableState};
use crate::tracker::InstructionTracker;

const RULE_WIDTH: usize = 35;

/// `"<start>-<end>"`, `"<start>"`, or `""` for the EX column.
fn ex_column(record: &InstructionRecord) -> String {
    let Some(start) = record.cycle_of(ReportableState::Execute) else {
        return String::new();
    };
    match record.cycle_of(ReportableState::ExecuteEnd) {
        Some(end) if end != start => format!("{}-{}", start, end),
        _ => start.to_string(),
    }
}

fn column(record: &InstructionRecord, state: ReportableState) -> String {
    record.cycle_of(state).map(|c| c.to_string()).unwrap_or_default()
}

/// Renders the fixed-width report table for every tracked instruction, in
/// program order.
pub fn render_text(tracker: &InstructionTracker) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>2}{:>18}{:>3}{:>6}{:>3}{:>3}\n",
        "", "Instruction", "IS", "EX", "WB", "CM"
    ));
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    for record in tracker.records() {
        out.push_str(&format!(
            "{:>2}{:>18}{:>3}{:>6}{:>3}{:>3}\n",
            record.index,
            record.display_text(),
            column(record, ReportableState::Is),
            ex_column(record),
            column(record, ReportableState::Writeback),
            column(record, ReportableState::Commit),
        ));
    }
    out
}

#[derive(Debug, Serialize)]
struct InstructionReport {
    index: usize,
    instruction: String,
    is: Option<usize>,
    ex_start: Option<usize>,
    ex_end: Option<usize>,
    wb: Option<usize>,
    cm: Option<usize>,
    messages: Vec<String>,
}

/// Full per-instruction history and hazard messages, for callers that want
/// more than the fixed-width table.
pub fn render_json(tracker: &InstructionTracker) -> serde_json::Result<String> {
    let reports: Vec<InstructionReport> = tracker
        .records()
        .iter()
        .map(|record| InstructionReport {
            index: record.index,
            instruction: record.display_text(),
            is: record.cycle_of(ReportableState::Is),
            ex_start: record.cycle_of(ReportableState::Execute),
            ex_end: record.cycle_of(ReportableState::ExecuteEnd),
            wb: record.cycle_of(ReportableState::Writeback),
            cm: record.cycle_of(ReportableState::Commit),
            messages: record.messages.iter().map(|m| m.to_string()).collect(),
        })
        .collect();
    serde_json::to_string_pretty(&reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulatorConfig;
    use crate::engine::run;
    use crate::instruction::Instruction;

    #[test]
    fn text_report_has_header_rule_and_one_row_per_instruction() {
        let config = SimulatorConfig::new();
        let result = run(
            vec![Instruction::new("ADD.D", Some("F2".into()), vec!["F0".into(), "F4".into()])],
            &config,
        );
        let text = render_text(&result.tracker);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "-".repeat(RULE_WIDTH));
        assert_eq!(lines[2], " 0  ADD.D F2, F0, F4  1   2-3  4  5");
    }

    #[test]
    fn json_report_round_trips_cycle_numbers() {
        let config = SimulatorConfig::new();
        let result = run(
            vec![Instruction::new("ADD.D", Some("F2".into()), vec!["F0".into(), "F4".into()])],
            &config,
        );
        let json = render_json(&result.tracker).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["is"], 1);
        assert_eq!(parsed[0]["cm"], 5);
    }
}
