//! Plain-text export of a screening record.

use mindsupport_core::models::screening_record::ScreeningRecord;

pub const DISCLAIMER: &str = "Important Note: This screening is not a diagnosis. \
Please consult with a mental health professional for proper evaluation and treatment.";

pub fn render_report(record: &ScreeningRecord) -> String {
    let mut out = String::from("Mental Health Screening Results\n");
    out.push_str(&format!("Generated on: {}\n", record.taken_on));

    for entry in &record.entries {
        out.push_str(&format!("\n{} {}:\n", entry.instrument_name, entry.heading));
        out.push_str(&format!("Score: {}/{}\n", entry.score, entry.max_score));
        out.push_str(&format!("Level: {}\n", entry.level));
        out.push_str(&entry.description);
        out.push('\n');
    }

    out.push('\n');
    out.push_str(DISCLAIMER);
    out.push('\n');
    out
}

/// e.g. `mental-health-screening-2026-03-14.txt`
pub fn report_filename(date: jiff::civil::Date) -> String {
    format!("mental-health-screening-{date}.txt")
}
