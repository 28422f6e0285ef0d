//! Descriptive payload shared by trips and locations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Maximum length for a trip or location name, in characters.
pub const MAX_NAME_LENGTH: usize = 256;

/// The mutable fields of a trip or location.
///
/// # Invariants
///
/// - `name` is non-blank and at most `MAX_NAME_LENGTH` characters
///
/// Coordinates and dates are deliberately unconstrained: there is no range
/// check on latitude/longitude and `end_date` may precede `start_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryDetails {
    name: String,
    description: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl EntryDetails {
    /// Creates details with the given name and no optional fields.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is empty or whitespace only
    /// - `TooLong` if the name exceeds `MAX_NAME_LENGTH` characters
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        Self::validate_name(&name)?;

        Ok(Self {
            name,
            description: None,
            latitude: None,
            longitude: None,
            start_date: None,
            end_date: None,
        })
    }

    /// Reconstitute details from persistence (no validation).
    pub fn reconstitute(
        name: String,
        description: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            name,
            description,
            latitude,
            longitude,
            start_date,
            end_date,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the coordinates. Either half may be absent.
    pub fn with_coordinates(mut self, latitude: Option<f64>, longitude: Option<f64>) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Sets the date range. No ordering is enforced.
    pub fn with_dates(mut self, start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    fn validate_name(name: &str) -> Result<(), ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        let len = name.chars().count();
        if len > MAX_NAME_LENGTH {
            return Err(ValidationError::too_long("name", MAX_NAME_LENGTH, len));
        }
        Ok(())
    }
}
