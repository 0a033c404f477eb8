//! Vehicle record types

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered mapping of vehicle ID to record
pub type VehicleMap = IndexMap<String, Vehicle>;

/// A single catalogued vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Caller-assigned key, immutable after creation
    #[serde(rename = "vehicle_id")]
    pub id: String,
    pub make: String,
    pub model: String,
    /// Four-digit year, kept as text
    pub year: String,
    pub color: String,
}

impl Vehicle {
    pub fn new(
        id: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
        year: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            make: make.into(),
            model: model.into(),
            year: year.into(),
            color: color.into(),
        }
    }

    /// Overwrite the fields carried by `update`, leaving the rest untouched
    pub fn apply(&mut self, update: &VehicleUpdate) {
        fn overwrite(slot: &mut String, value: &Option<String>) {
            if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
                *slot = v.to_string();
            }
        }

        overwrite(&mut self.make, &update.make);
        overwrite(&mut self.model, &update.model);
        overwrite(&mut self.year, &update.year);
        overwrite(&mut self.color, &update.color);
    }
}

impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, Make: {}, Model: {}, Year: {}, Color: {}",
            self.id, self.make, self.model, self.year, self.color
        )
    }
}

/// Partial update for an existing vehicle.
///
/// A field that is `None` or an empty string leaves the stored value as is;
/// the two cases cannot be told apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleUpdate {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub color: Option<String>,
}

impl VehicleUpdate {
    /// Build an update from raw form text, mapping empty text to `None`
    pub fn from_fields(make: &str, model: &str, year: &str, color: &str) -> Self {
        fn field(value: &str) -> Option<String> {
            (!value.is_empty()).then(|| value.to_string())
        }

        Self {
            make: field(make),
            model: field(model),
            year: field(year),
            color: field(color),
        }
    }

    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.make = Some(make.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}
