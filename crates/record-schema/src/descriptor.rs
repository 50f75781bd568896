//! Shared Schema Descriptor

use crate::{EmployeeRecord, FieldValue, SchemaError};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Declared domain of a single input field
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldDomain {
    /// Integer bounded to an inclusive range
    Numeric { min: i64, max: i64 },
    /// Closed vocabulary of string values
    Categorical { values: Vec<String> },
}

/// One field of the schema: name, domain, and documented default
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Feature name, exactly as the trained artifact expects it
    pub name: String,
    /// Declared domain enforced at the form boundary
    pub domain: FieldDomain,
    /// Default the form prefills
    pub default: FieldValue,
}

/// Ordered input schema shared by the form collaborator and the scoring
/// path, so field names and vocabularies cannot drift between the two.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaDescriptor {
    fields: Vec<FieldSpec>,
}

fn numeric(name: &str, min: i64, max: i64, default: i64) -> FieldSpec {
    FieldSpec {
        name: name.to_string(),
        domain: FieldDomain::Numeric { min, max },
        default: FieldValue::Int(default),
    }
}

fn categorical(name: &str, values: &[&str], default: &str) -> FieldSpec {
    FieldSpec {
        name: name.to_string(),
        domain: FieldDomain::Categorical {
            values: values.iter().map(|v| v.to_string()).collect(),
        },
        default: FieldValue::Text(default.to_string()),
    }
}

impl SchemaDescriptor {
    /// Build a descriptor from an ordered field list
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// The canonical employee-attrition schema, in training-time column
    /// order with the documented form defaults.
    pub fn employee_attrition() -> Self {
        Self::new(vec![
            numeric("Age", 18, 65, 30),
            numeric("MonthlyIncome", 1000, 20_000, 5000),
            numeric("JobSatisfaction", 1, 4, 3),
            categorical("OverTime", &["No", "Yes"], "No"),
            categorical("Gender", &["Male", "Female"], "Male"),
            categorical("MaritalStatus", &["Single", "Married", "Divorced"], "Single"),
            categorical(
                "Department",
                &["Sales", "Research & Development", "Human Resources"],
                "Research & Development",
            ),
            categorical(
                "JobRole",
                &[
                    "Sales Executive",
                    "Research Scientist",
                    "Laboratory Technician",
                    "Manufacturing Director",
                    "Healthcare Representative",
                    "Manager",
                    "Sales Representative",
                    "Research Director",
                    "Human Resources",
                ],
                "Research Scientist",
            ),
            categorical(
                "BusinessTravel",
                &["Non-Travel", "Travel_Rarely", "Travel_Frequently"],
                "Travel_Rarely",
            ),
            categorical(
                "EducationField",
                &[
                    "Life Sciences",
                    "Medical",
                    "Marketing",
                    "Technical Degree",
                    "Human Resources",
                    "Other",
                ],
                "Life Sciences",
            ),
            numeric("TotalWorkingYears", 0, 40, 10),
            numeric("YearsAtCompany", 0, 40, 5),
        ])
    }

    /// Fields in declared order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Record with every field at its documented default
    pub fn default_record(&self) -> EmployeeRecord {
        self.fields
            .iter()
            .map(|spec| (spec.name.clone(), spec.default.clone()))
            .collect()
    }

    /// Validate a record against the descriptor.
    ///
    /// Every declared field must be present with a value inside its
    /// domain; fields outside the schema are rejected rather than
    /// silently ignored.
    pub fn validate(&self, record: &EmployeeRecord) -> Result<(), SchemaError> {
        for spec in &self.fields {
            let value = record
                .get(&spec.name)
                .ok_or_else(|| SchemaError::MissingField(spec.name.clone()))?;

            match (&spec.domain, value) {
                (FieldDomain::Numeric { min, max }, FieldValue::Int(v)) => {
                    if v < min || v > max {
                        return Err(SchemaError::OutOfRange {
                            field: spec.name.clone(),
                            value: *v,
                            min: *min,
                            max: *max,
                        });
                    }
                }
                (FieldDomain::Numeric { .. }, FieldValue::Text(_)) => {
                    return Err(SchemaError::TypeMismatch {
                        field: spec.name.clone(),
                        expected: "integer",
                    });
                }
                (FieldDomain::Categorical { values }, FieldValue::Text(v)) => {
                    if !values.iter().any(|allowed| allowed == v) {
                        return Err(SchemaError::UnknownCategory {
                            field: spec.name.clone(),
                            value: v.clone(),
                        });
                    }
                }
                (FieldDomain::Categorical { .. }, FieldValue::Int(_)) => {
                    return Err(SchemaError::TypeMismatch {
                        field: spec.name.clone(),
                        expected: "text",
                    });
                }
            }
        }

        for (name, _) in record.iter() {
            if self.field(name).is_none() {
                warn!("Rejecting record with undeclared field {}", name);
                return Err(SchemaError::UnknownField(name.to_string()));
            }
        }

        Ok(())
    }
}
