//! Artifact Envelope and Pipeline Capability

use crate::{InferenceError, TransformError};
use record_schema::{EmployeeRecord, FieldDomain, FieldValue, SchemaDescriptor, SchemaError};
use serde::{Deserialize, Serialize};

/// On-disk format version this build can load
pub const FORMAT_VERSION: u32 = 1;

/// Versioned envelope persisted by the training process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactFile {
    /// Format version the payload was written with
    pub format_version: u32,
    /// Persisted artifact shape
    pub payload: ArtifactPayload,
}

impl ArtifactFile {
    /// Wrap a payload in a current-version envelope
    pub fn new(payload: ArtifactPayload) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            payload,
        }
    }
}

/// Persisted artifact shape.
///
/// Training deployments have shipped both a separate (transformer,
/// classifier) pair and a single combined pipeline object; both collapse
/// to [`ScoringPipeline`] at the loader boundary so nothing downstream
/// branches on shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ArtifactPayload {
    /// Transformer and classifier stored side by side
    Paired {
        transformer: FittedTransformer,
        classifier: Classifier,
    },
    /// Combined pipeline object
    Unified { pipeline: ScoringPipeline },
}

impl ArtifactPayload {
    /// Collapse either shape into the single pipeline capability
    pub fn normalize(self) -> ScoringPipeline {
        match self {
            ArtifactPayload::Paired {
                transformer,
                classifier,
            } => ScoringPipeline::new(transformer, classifier),
            ArtifactPayload::Unified { pipeline } => pipeline,
        }
    }
}

/// Fitted encoding for one input column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ColumnEncoder {
    /// Z-score a numeric field with training-time statistics
    Standardize {
        field: String,
        mean: f64,
        std_dev: f64,
    },
    /// One-hot a categorical field against its training vocabulary
    OneHot {
        field: String,
        categories: Vec<String>,
    },
}

impl ColumnEncoder {
    /// Field name this encoder reads
    pub fn field(&self) -> &str {
        match self {
            ColumnEncoder::Standardize { field, .. } => field,
            ColumnEncoder::OneHot { field, .. } => field,
        }
    }

    /// Number of output slots this encoder writes
    pub fn width(&self) -> usize {
        match self {
            ColumnEncoder::Standardize { .. } => 1,
            ColumnEncoder::OneHot { categories, .. } => categories.len(),
        }
    }

    fn encode_into(&self, record: &EmployeeRecord, out: &mut Vec<f64>) -> Result<(), TransformError> {
        let value = record
            .get(self.field())
            .ok_or_else(|| SchemaError::MissingField(self.field().to_string()))?;

        match (self, value) {
            (
                ColumnEncoder::Standardize {
                    field,
                    mean,
                    std_dev,
                },
                FieldValue::Int(v),
            ) => {
                let scaled = (*v as f64 - *mean) / *std_dev;
                if !scaled.is_finite() {
                    return Err(TransformError::NonFinite {
                        field: field.clone(),
                    });
                }
                out.push(scaled);
            }
            (ColumnEncoder::Standardize { field, .. }, FieldValue::Text(_)) => {
                return Err(SchemaError::TypeMismatch {
                    field: field.clone(),
                    expected: "integer",
                }
                .into());
            }
            (ColumnEncoder::OneHot { field, categories }, FieldValue::Text(v)) => {
                let hit = categories.iter().position(|category| category == v).ok_or_else(|| {
                    SchemaError::UnknownCategory {
                        field: field.clone(),
                        value: v.clone(),
                    }
                })?;
                for idx in 0..categories.len() {
                    out.push(if idx == hit { 1.0 } else { 0.0 });
                }
            }
            (ColumnEncoder::OneHot { field, .. }, FieldValue::Int(_)) => {
                return Err(SchemaError::TypeMismatch {
                    field: field.clone(),
                    expected: "text",
                }
                .into());
            }
        }

        Ok(())
    }
}

/// Deterministic feature transformer, fit once at training time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FittedTransformer {
    columns: Vec<ColumnEncoder>,
}

impl FittedTransformer {
    /// Build from fitted column encoders in training order
    pub fn new(columns: Vec<ColumnEncoder>) -> Self {
        Self { columns }
    }

    /// Column encoders in fitted order
    pub fn columns(&self) -> &[ColumnEncoder] {
        &self.columns
    }

    /// Total width of the encoded vector
    pub fn width(&self) -> usize {
        self.columns.iter().map(ColumnEncoder::width).sum()
    }

    /// Encode a record into the fitted feature space.
    ///
    /// Columns are addressed by field name, so record-side ordering is
    /// irrelevant; the fitted column order alone decides output layout.
    pub fn encode(&self, record: &EmployeeRecord) -> Result<Vec<f64>, TransformError> {
        let mut out = Vec::with_capacity(self.width());
        for column in &self.columns {
            column.encode_into(record, &mut out)?;
        }
        Ok(out)
    }

    /// Check that the fitted columns agree with a schema descriptor:
    /// same field set, numeric/categorical kinds lining up, and
    /// categorical vocabularies matching the training ones. Catches
    /// drift between the input form and the artifact before any record
    /// is scored.
    pub fn check_schema(&self, schema: &SchemaDescriptor) -> Result<(), SchemaError> {
        for column in &self.columns {
            let spec = schema
                .field(column.field())
                .ok_or_else(|| SchemaError::UnknownField(column.field().to_string()))?;

            match (column, &spec.domain) {
                (ColumnEncoder::Standardize { .. }, FieldDomain::Numeric { .. }) => {}
                (ColumnEncoder::OneHot { field, categories }, FieldDomain::Categorical { values }) => {
                    if let Some(category) = categories.iter().find(|c| !values.contains(*c)) {
                        return Err(SchemaError::UnknownCategory {
                            field: field.clone(),
                            value: category.clone(),
                        });
                    }
                    if let Some(value) = values.iter().find(|v| !categories.contains(*v)) {
                        return Err(SchemaError::UnknownCategory {
                            field: field.clone(),
                            value: value.clone(),
                        });
                    }
                }
                (ColumnEncoder::Standardize { field, .. }, FieldDomain::Categorical { .. }) => {
                    return Err(SchemaError::TypeMismatch {
                        field: field.clone(),
                        expected: "integer",
                    });
                }
                (ColumnEncoder::OneHot { field, .. }, FieldDomain::Numeric { .. }) => {
                    return Err(SchemaError::TypeMismatch {
                        field: field.clone(),
                        expected: "text",
                    });
                }
            }
        }

        for spec in schema.fields() {
            if !self.columns.iter().any(|column| column.field() == spec.name) {
                return Err(SchemaError::MissingField(spec.name.clone()));
            }
        }

        Ok(())
    }
}

/// Logistic scorer over the encoded feature vector.
///
/// Returns the probability of the positive ("leave") class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classifier {
    weights: Vec<f64>,
    bias: f64,
}

impl Classifier {
    /// Build from fitted weights and bias
    pub fn new(weights: Vec<f64>, bias: f64) -> Self {
        Self { weights, bias }
    }

    /// Expected feature vector width
    pub fn width(&self) -> usize {
        self.weights.len()
    }

    /// Probability of the positive class for an encoded vector
    pub fn predict_proba(&self, features: &[f64]) -> Result<f64, InferenceError> {
        if features.len() != self.weights.len() {
            return Err(InferenceError::DimensionMismatch {
                expected: self.weights.len(),
                actual: features.len(),
            });
        }

        let z: f64 = self
            .weights
            .iter()
            .zip(features)
            .map(|(weight, feature)| weight * feature)
            .sum::<f64>()
            + self.bias;

        let probability = 1.0 / (1.0 + (-z).exp());
        if !probability.is_finite() {
            return Err(InferenceError::NonFinite);
        }
        Ok(probability)
    }
}

/// Normalized artifact capability: encode a record, then score it.
///
/// Stateless at inference time; shared read-only across requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringPipeline {
    transformer: FittedTransformer,
    classifier: Classifier,
}

impl ScoringPipeline {
    /// Pair a fitted transformer with its classifier
    pub fn new(transformer: FittedTransformer, classifier: Classifier) -> Self {
        Self {
            transformer,
            classifier,
        }
    }

    /// Fitted transformer (authority on column order and vocabulary)
    pub fn transformer(&self) -> &FittedTransformer {
        &self.transformer
    }

    /// Encode a raw record into the fitted feature space
    pub fn transform(&self, record: &EmployeeRecord) -> Result<Vec<f64>, TransformError> {
        self.transformer.encode(record)
    }

    /// Probability of the positive class for an encoded vector
    pub fn predict_proba(&self, features: &[f64]) -> Result<f64, InferenceError> {
        self.classifier.predict_proba(features)
    }
}
