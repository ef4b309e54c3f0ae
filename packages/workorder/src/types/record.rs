//! The structured work order record and its fixed field schema.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WorkOrderError};

/// One field of the extraction contract: wire name, guidance shown to the
/// model, and whether the result is invalid without it.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// The fixed ten-field schema every extraction call uses.
///
/// Order matters: this is the order fields appear in the prompt and the
/// response schema.
pub const FIELDS: [FieldSpec; 10] = [
    FieldSpec {
        name: "workOrderNumber",
        description: "look for # or Work Order ID",
        required: true,
    },
    FieldSpec {
        name: "locationName",
        description: "the facility name",
        required: false,
    },
    FieldSpec {
        name: "locationId",
        description: "often a short code like CC234",
        required: false,
    },
    FieldSpec {
        name: "address",
        description: "street address",
        required: false,
    },
    FieldSpec {
        name: "cityStateZip",
        description: "City, State, and Zip code",
        required: false,
    },
    FieldSpec {
        name: "problemDescription",
        description: "The full description of what needs to be fixed",
        required: true,
    },
    FieldSpec {
        name: "ivrCheckInLine",
        description: "The phone number for automated check-in",
        required: false,
    },
    FieldSpec {
        name: "accountCodePin",
        description: "The PIN or account code provided",
        required: false,
    },
    FieldSpec {
        name: "dsTrackingNumber",
        description: "Often same as Work Order number",
        required: false,
    },
    FieldSpec {
        name: "customerName",
        description: "The client company name",
        required: false,
    },
];

/// The structured result of extraction.
///
/// Created atomically by a single extraction call, never partially
/// populated, immutable once created; replaced wholesale by the next
/// extraction or discarded on clear. Optional fields keep absence (`None`)
/// distinct from an empty string returned by the service; display-level
/// fallbacks treat the two alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderRecord {
    /// Work order number (required, non-empty)
    pub work_order_number: String,

    /// Facility name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,

    /// Short location code (e.g., CC234)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,

    /// Street address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// City, state, and zip code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_state_zip: Option<String>,

    /// What needs to be fixed (required, non-empty)
    pub problem_description: String,

    /// Phone number for automated check-in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ivr_check_in_line: Option<String>,

    /// PIN or account code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_code_pin: Option<String>,

    /// DS tracking number (often the work order number)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ds_tracking_number: Option<String>,

    /// Client company name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
}

impl WorkOrderRecord {
    /// Create a record with the two required fields; optionals start absent.
    pub fn new(
        work_order_number: impl Into<String>,
        problem_description: impl Into<String>,
    ) -> Self {
        Self {
            work_order_number: work_order_number.into(),
            location_name: None,
            location_id: None,
            address: None,
            city_state_zip: None,
            problem_description: problem_description.into(),
            ivr_check_in_line: None,
            account_code_pin: None,
            ds_tracking_number: None,
            customer_name: None,
        }
    }

    /// Set the facility name.
    pub fn with_location_name(mut self, value: impl Into<String>) -> Self {
        self.location_name = Some(value.into());
        self
    }

    /// Set the location code.
    pub fn with_location_id(mut self, value: impl Into<String>) -> Self {
        self.location_id = Some(value.into());
        self
    }

    /// Set the street address.
    pub fn with_address(mut self, value: impl Into<String>) -> Self {
        self.address = Some(value.into());
        self
    }

    /// Set the city, state, and zip line.
    pub fn with_city_state_zip(mut self, value: impl Into<String>) -> Self {
        self.city_state_zip = Some(value.into());
        self
    }

    /// Set the IVR check-in phone number.
    pub fn with_ivr_check_in_line(mut self, value: impl Into<String>) -> Self {
        self.ivr_check_in_line = Some(value.into());
        self
    }

    /// Set the PIN or account code.
    pub fn with_account_code_pin(mut self, value: impl Into<String>) -> Self {
        self.account_code_pin = Some(value.into());
        self
    }

    /// Set the DS tracking number.
    pub fn with_ds_tracking_number(mut self, value: impl Into<String>) -> Self {
        self.ds_tracking_number = Some(value.into());
        self
    }

    /// Set the client company name.
    pub fn with_customer_name(mut self, value: impl Into<String>) -> Self {
        self.customer_name = Some(value.into());
        self
    }

    /// Check the required-field invariant.
    ///
    /// `work_order_number` and `problem_description` must be non-empty
    /// (whitespace does not count) for the record to be valid.
    pub fn validate(&self) -> Result<()> {
        if self.work_order_number.trim().is_empty() {
            return Err(WorkOrderError::Schema {
                reason: "workOrderNumber is empty".to_string(),
            });
        }
        if self.problem_description.trim().is_empty() {
            return Err(WorkOrderError::Schema {
                reason: "problemDescription is empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_schema_shape() {
        assert_eq!(FIELDS.len(), 10);

        let required: Vec<&str> = FIELDS.iter().filter(|f| f.required).map(|f| f.name).collect();
        assert_eq!(required, ["workOrderNumber", "problemDescription"]);
    }

    #[test]
    fn test_validate_accepts_required_fields() {
        let record = WorkOrderRecord::new("WO-1", "Broken door");
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_work_order_number() {
        let record = WorkOrderRecord::new("", "Broken door");
        let err = record.validate().unwrap_err();
        assert!(matches!(err, WorkOrderError::Schema { .. }));
    }

    #[test]
    fn test_validate_rejects_whitespace_problem_description() {
        let record = WorkOrderRecord::new("WO-1", "   ");
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let record = WorkOrderRecord::new("WO-1", "Broken door").with_city_state_zip("Detroit, MI");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["workOrderNumber"], "WO-1");
        assert_eq!(value["problemDescription"], "Broken door");
        assert_eq!(value["cityStateZip"], "Detroit, MI");
        assert!(value.get("dsTrackingNumber").is_none());
    }

    #[test]
    fn test_absent_optional_is_distinct_from_empty() {
        let json = r#"{
            "workOrderNumber": "WO-1",
            "problemDescription": "Broken door",
            "dsTrackingNumber": ""
        }"#;

        let record: WorkOrderRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.ds_tracking_number.as_deref(), Some(""));
        assert_eq!(record.location_name, None);
    }
}
