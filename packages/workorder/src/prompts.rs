//! Prompts for the extraction service.
//!
//! The prompt names every field of the record contract with the guidance
//! the model needs to locate it in free-form email text; the response
//! schema (built by the service implementation) constrains the output
//! shape.

use crate::types::FIELDS;

/// Prompt for extracting work order fields from an email body.
pub const EXTRACT_WORK_ORDER_PROMPT: &str = r#"Extract work order information from the following email text and return it as JSON.

Email Content:
{email}

Fields to extract:
{fields}"#;

/// Format the extraction prompt with the email body and the field list.
pub fn format_extract_prompt(email: &str) -> String {
    let fields_text = FIELDS
        .iter()
        .map(|f| format!("- {} ({})", f.name, f.description))
        .collect::<Vec<_>>()
        .join("\n");

    EXTRACT_WORK_ORDER_PROMPT
        .replace("{email}", email)
        .replace("{fields}", &fields_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_email_body() {
        let formatted = format_extract_prompt("Lights are out at store CC234");
        assert!(formatted.contains("Lights are out at store CC234"));
    }

    #[test]
    fn test_prompt_names_all_fields() {
        let formatted = format_extract_prompt("body");
        for field in FIELDS {
            assert!(
                formatted.contains(field.name),
                "prompt should mention {}",
                field.name
            );
        }
    }

    #[test]
    fn test_prompt_carries_field_guidance() {
        let formatted = format_extract_prompt("body");
        assert!(formatted.contains("look for # or Work Order ID"));
        assert!(formatted.contains("often a short code like CC234"));
    }
}
