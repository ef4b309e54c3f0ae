//! Printable work order form rendering.
//!
//! [`FormView`] is the display projection of a [`WorkOrderRecord`]: every
//! field is a concrete string with fallbacks already applied, so rendering
//! is total and never fails. [`render_text`] lays the view out as a
//! fixed-width ASCII form suitable for printing or pasting into a reply.

use crate::types::WorkOrderRecord;

// ============================================================================
// Form constants
// ============================================================================

/// Shown for any optional field the extraction did not find.
pub const FALLBACK: &str = "N/A";

/// Shown when the problem description is empty.
pub const NO_DESCRIPTION: &str = "No description provided.";

pub const COMPANY_NAME: &str = "DYNAMIC SYSTEMS";
pub const COMPANY_TAGLINE: &str = "FACILITIES & MAINTENANCE SOLUTIONS";
pub const COMPANY_ADDRESS: &str = "25401 Glendale, Redford, MI 48239";
pub const COMPANY_PHONE: &str = "800-252-1145";
pub const COMPANY_EMAIL: &str = "workorders@dynsys.com";

/// Check-in instruction printed on every form.
pub const ONSITE_INSTRUCTION: &str = "When arriving on site, please contact Dynamic at 313-563-1145 to check in and give assessment.";

const FORM_WIDTH: usize = 72;

// ============================================================================
// Display projection
// ============================================================================

/// Display-ready projection of a [`WorkOrderRecord`].
///
/// Optional fields collapse to [`FALLBACK`], an empty problem description
/// collapses to [`NO_DESCRIPTION`], and the DS tracking number falls back
/// to the work order number before giving up. Whitespace-only values are
/// treated the same as absent ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub work_order_number: String,
    pub location_name: String,
    pub location_id: String,
    pub address: String,
    pub city_state_zip: String,
    pub problem_description: String,
    pub ivr_check_in_line: String,
    pub account_code_pin: String,
    pub ds_tracking_number: String,
    pub customer_name: String,
}

impl FormView {
    /// Project a record into display values.
    pub fn from_record(record: &WorkOrderRecord) -> Self {
        let ds_tracking_number = record
            .ds_tracking_number
            .as_deref()
            .and_then(non_empty)
            .or_else(|| non_empty(&record.work_order_number))
            .unwrap_or(FALLBACK)
            .to_string();

        Self {
            work_order_number: non_empty(&record.work_order_number)
                .unwrap_or(FALLBACK)
                .to_string(),
            location_name: or_fallback(&record.location_name),
            location_id: or_fallback(&record.location_id),
            address: or_fallback(&record.address),
            city_state_zip: or_fallback(&record.city_state_zip),
            problem_description: non_empty(&record.problem_description)
                .unwrap_or(NO_DESCRIPTION)
                .to_string(),
            ivr_check_in_line: or_fallback(&record.ivr_check_in_line),
            account_code_pin: or_fallback(&record.account_code_pin),
            ds_tracking_number,
            customer_name: or_fallback(&record.customer_name),
        }
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn or_fallback(value: &Option<String>) -> String {
    value
        .as_deref()
        .and_then(non_empty)
        .unwrap_or(FALLBACK)
        .to_string()
}

// ============================================================================
// Text rendering
// ============================================================================

/// Render the view as a fixed-width printable form.
pub fn render_text(view: &FormView) -> String {
    let border = "=".repeat(FORM_WIDTH);
    let box_border = format!("+{}+", "-".repeat(FORM_WIDTH - 2));
    let box_inner = FORM_WIDTH - 4;
    let half = (FORM_WIDTH - 4) / 2;

    let mut lines: Vec<String> = Vec::new();

    lines.push(border.clone());
    lines.push(COMPANY_NAME.to_string());
    lines.push(COMPANY_TAGLINE.to_string());
    lines.push(COMPANY_ADDRESS.to_string());
    lines.push(format!("{} | {}", COMPANY_PHONE, COMPANY_EMAIL));
    lines.push(border);

    lines.push(String::new());
    lines.push(format!("WORKORDER: {}", view.work_order_number));

    lines.push(String::new());
    lines.push("SERVICE LOCATION".to_string());
    lines.push(format!(
        "  {} ({})",
        view.location_name.to_uppercase(),
        view.location_id
    ));
    lines.push(format!("  {}", view.address.to_uppercase()));
    lines.push(format!("  {}", view.city_state_zip.to_uppercase()));
    lines.push(format!("  CUSTOMER: {}", view.customer_name));

    lines.push(String::new());
    lines.push(format!("IVR CHECK-IN LINE:   {}", view.ivr_check_in_line));
    lines.push(format!("ACCOUNT CODE / PIN:  {}", view.account_code_pin));
    lines.push(format!("DS TRACKING #:       {}", view.ds_tracking_number));

    lines.push(String::new());
    lines.push("PROBLEM DESCRIPTION".to_string());
    lines.push(box_border.clone());
    for wrapped in wrap(&view.problem_description.to_uppercase(), box_inner) {
        lines.push(format!("| {:<width$} |", wrapped, width = box_inner));
    }
    lines.push(box_border);

    lines.push(String::new());
    lines.extend(wrap(ONSITE_INSTRUCTION, FORM_WIDTH));

    lines.push(String::new());
    lines.push("COMMENTS".to_string());
    for _ in 0..3 {
        lines.push("_".repeat(FORM_WIDTH));
    }

    lines.push(String::new());
    lines.push("ASSIGNED TECH ID: ____________________".to_string());

    lines.push(String::new());
    lines.push("CHECK IN DATE:  ____________________".to_string());
    lines.push("CHECK IN TIME:  ____________________".to_string());
    lines.push("CHECK OUT TIME: ____________________".to_string());

    lines.push(String::new());
    lines.push(format!("{}    {}", "_".repeat(half), "_".repeat(half)));
    lines.push(format!(
        "{:<width$}{}",
        "TECHNICIAN SIGNATURE",
        "MANAGER PRINT & SIGN",
        width = half + 4
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Greedy word wrap. Words longer than the width get their own line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> WorkOrderRecord {
        WorkOrderRecord::new("WO-99283", "Ballasts failed on the sales floor")
            .with_location_name("RetailCorp Store #234")
            .with_location_id("CC234")
            .with_address("1234 Woodward Ave")
            .with_city_state_zip("Detroit, MI 48226")
            .with_ivr_check_in_line("888-555-0199")
            .with_account_code_pin("4452")
            .with_ds_tracking_number("DS-REF-99283")
            .with_customer_name("RetailCorp")
    }

    #[test]
    fn test_ds_tracking_prefers_own_value() {
        let view = FormView::from_record(&full_record());
        assert_eq!(view.ds_tracking_number, "DS-REF-99283");
    }

    #[test]
    fn test_ds_tracking_falls_back_to_work_order_number() {
        let record = WorkOrderRecord::new("WO-42", "desc");
        let view = FormView::from_record(&record);
        assert_eq!(view.ds_tracking_number, "WO-42");
    }

    #[test]
    fn test_ds_tracking_falls_back_to_na() {
        let record = WorkOrderRecord::new("", "desc");
        let view = FormView::from_record(&record);
        assert_eq!(view.ds_tracking_number, FALLBACK);
        assert_eq!(view.work_order_number, FALLBACK);
    }

    #[test]
    fn test_missing_optionals_render_as_na() {
        let record = WorkOrderRecord::new("WO-1", "desc");
        let view = FormView::from_record(&record);
        assert_eq!(view.location_name, FALLBACK);
        assert_eq!(view.address, FALLBACK);
        assert_eq!(view.city_state_zip, FALLBACK);
        assert_eq!(view.ivr_check_in_line, FALLBACK);
        assert_eq!(view.account_code_pin, FALLBACK);
        assert_eq!(view.customer_name, FALLBACK);
    }

    #[test]
    fn test_whitespace_only_counts_as_absent() {
        let record = WorkOrderRecord::new("WO-1", "desc").with_address("   ");
        let view = FormView::from_record(&record);
        assert_eq!(view.address, FALLBACK);
    }

    #[test]
    fn test_empty_problem_description_gets_placeholder() {
        let record = WorkOrderRecord::new("WO-1", "");
        let view = FormView::from_record(&record);
        assert_eq!(view.problem_description, NO_DESCRIPTION);
    }

    #[test]
    fn test_render_contains_company_header() {
        let text = render_text(&FormView::from_record(&full_record()));
        assert!(text.contains(COMPANY_NAME));
        assert!(text.contains(COMPANY_TAGLINE));
        assert!(text.contains(COMPANY_ADDRESS));
        assert!(text.contains(COMPANY_PHONE));
        assert!(text.contains(COMPANY_EMAIL));
        assert!(text.contains(ONSITE_INSTRUCTION.split_whitespace().next().unwrap()));
    }

    #[test]
    fn test_render_uppercases_location_and_problem() {
        let text = render_text(&FormView::from_record(&full_record()));
        assert!(text.contains("RETAILCORP STORE #234 (CC234)"));
        assert!(text.contains("1234 WOODWARD AVE"));
        assert!(text.contains("BALLASTS FAILED ON THE SALES FLOOR"));
        assert!(text.contains("WORKORDER: WO-99283"));
        assert!(text.contains("CUSTOMER: RetailCorp"));
    }

    #[test]
    fn test_render_labels_every_section() {
        let text = render_text(&FormView::from_record(&full_record()));
        for label in [
            "SERVICE LOCATION",
            "IVR CHECK-IN LINE:",
            "ACCOUNT CODE / PIN:",
            "DS TRACKING #:",
            "PROBLEM DESCRIPTION",
            "COMMENTS",
            "ASSIGNED TECH ID:",
            "CHECK IN DATE:",
            "CHECK IN TIME:",
            "CHECK OUT TIME:",
            "TECHNICIAN SIGNATURE",
            "MANAGER PRINT & SIGN",
        ] {
            assert!(text.contains(label), "form should contain {label:?}");
        }
    }

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("aaa bbb ccc", 7);
        assert_eq!(lines, vec!["aaa bbb", "ccc"]);
    }

    #[test]
    fn test_wrap_handles_empty_text() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }
}
