//! Raw descriptive input shared by the create and update commands.

use chrono::NaiveDate;

use crate::domain::foundation::{EntryDetails, ValidationError};

/// Unvalidated trip or location fields, as received from a client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryInput {
    pub name: String,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl EntryInput {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Validate into domain details. Only the name is checked.
    pub fn validate(self) -> Result<EntryDetails, ValidationError> {
        Ok(EntryDetails::new(self.name)?
            .with_description(self.description)
            .with_coordinates(self.latitude, self.longitude)
            .with_dates(self.start_date, self.end_date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_carries_all_fields() {
        let start = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 7, 10).unwrap();
        let input = EntryInput {
            name: "Yosemite 2025".to_string(),
            description: Some("Valley floor".to_string()),
            latitude: Some(37.7),
            longitude: Some(-119.6),
            start_date: Some(start),
            end_date: Some(end),
        };

        let details = input.validate().unwrap();

        assert_eq!(details.name(), "Yosemite 2025");
        assert_eq!(details.description(), Some("Valley floor"));
        assert_eq!(details.latitude(), Some(37.7));
        assert_eq!(details.start_date(), Some(start));
        assert_eq!(details.end_date(), Some(end));
    }

    #[test]
    fn validate_rejects_missing_name() {
        assert!(EntryInput::default().validate().is_err());
    }
}
