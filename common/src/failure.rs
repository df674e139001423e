//! "Fail a Machine" report: what a user fills in when a job on a machine has
//! gone wrong.

use serde::Serialize;
use thiserror::Error;

/// Faults the form offers as checkboxes.
pub const NOTICEABLE_FAULTS: [&str; 4] = [
    "Layer Shift",
    "Filament Jam",
    "Lack of Bed Adhesion",
    "Other",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureError {
    #[error("Please select a machine.")]
    NoMachineSelected,
    #[error("Percent completed must be between 0 and 100.")]
    PercentOutOfRange,
    #[error("Please describe the printer error message.")]
    MissingErrorMessage,
}

/// Body sent with `POST /fail/{machine_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FailureReport {
    #[serde(skip)]
    pub machine_id: Option<String>,
    pub percent_completed: u8,
    pub error_message: String,
    pub noticeable_faults: Vec<String>,
}

impl FailureReport {
    /// Sets the completion estimate. Values above 100 are rejected and leave
    /// the previous value in place.
    pub fn set_percent_completed(&mut self, percent: u32) -> Result<(), FailureError> {
        let percent = u8::try_from(percent)
            .ok()
            .filter(|percent| *percent <= 100)
            .ok_or(FailureError::PercentOutOfRange)?;
        self.percent_completed = percent;
        Ok(())
    }

    /// Checks or unchecks one fault.
    pub fn toggle_fault(&mut self, fault: &str) {
        if let Some(index) = self.noticeable_faults.iter().position(|f| f == fault) {
            self.noticeable_faults.remove(index);
        } else {
            self.noticeable_faults.push(fault.to_string());
        }
    }

    pub fn has_fault(&self, fault: &str) -> bool {
        self.noticeable_faults.iter().any(|f| f == fault)
    }

    /// Returns the machine to report against once the report is complete.
    pub fn validate(&self) -> Result<&str, FailureError> {
        let machine_id = self
            .machine_id
            .as_deref()
            .ok_or(FailureError::NoMachineSelected)?;
        if self.error_message.trim().is_empty() {
            return Err(FailureError::MissingErrorMessage);
        }
        Ok(machine_id)
    }

    /// Clears everything but the selected machine.
    pub fn reset_fields(&mut self) {
        self.percent_completed = 0;
        self.error_message.clear();
        self.noticeable_faults.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_outside_range_is_rejected() {
        let mut report = FailureReport::default();
        assert!(report.set_percent_completed(60).is_ok());
        assert_eq!(report.set_percent_completed(101), Err(FailureError::PercentOutOfRange));
        assert_eq!(report.set_percent_completed(1000), Err(FailureError::PercentOutOfRange));
        assert_eq!(report.percent_completed, 60);
    }

    #[test]
    fn faults_toggle() {
        let mut report = FailureReport::default();
        report.toggle_fault("Filament Jam");
        report.toggle_fault("Other");
        assert!(report.has_fault("Filament Jam"));
        report.toggle_fault("Filament Jam");
        assert!(!report.has_fault("Filament Jam"));
        assert_eq!(report.noticeable_faults, vec!["Other"]);
    }

    #[test]
    fn validation_needs_machine_and_message() {
        let mut report = FailureReport::default();
        assert_eq!(report.validate(), Err(FailureError::NoMachineSelected));
        report.machine_id = Some("m1".to_string());
        report.error_message = "   ".to_string();
        assert_eq!(report.validate(), Err(FailureError::MissingErrorMessage));
        report.error_message = "thermal runaway".to_string();
        assert_eq!(report.validate(), Ok("m1"));

        report.toggle_fault("Other");
        report.reset_fields();
        assert_eq!(report.machine_id.as_deref(), Some("m1"));
        assert!(report.error_message.is_empty() && report.noticeable_faults.is_empty());
    }

    #[test]
    fn body_omits_the_machine_id() {
        let report = FailureReport {
            machine_id: Some("m1".to_string()),
            percent_completed: 40,
            error_message: "jam".to_string(),
            noticeable_faults: vec!["Filament Jam".to_string()],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("machine_id").is_none());
        assert_eq!(json["percent_completed"], 40);
    }
}
