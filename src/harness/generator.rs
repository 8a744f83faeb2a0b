// ============================================================================
// Vector Generator
// Drives sampling, reference evaluation, persistence and verification
// ============================================================================

use super::artifacts::ArtifactStore;
use super::compare::{compare, DiffReport};
use super::config::HarnessConfig;
use super::errors::{HarnessError, HarnessResult};
use super::sampler::{boundary_rows, Sampler};
use super::vector_set::VectorSet;
use crate::domain::{Operation, Row, RowError, Word};
use crate::interfaces::{EventHandler, HarnessEvent, NormalModel};
use crate::model::{create_model, ModelKind, ReferenceModel};
use std::sync::Arc;

/// Expected output word of one row: the reference lane's value, scaled to
/// 18 decimals.
///
/// # Errors
/// `UndefinedValue` if the reference lane rejects the row or returns a
/// non-finite value, `Encoding` if the value does not fit an `int256`.
pub fn expected_output(operation: Operation, index: usize, row: &[Word]) -> HarnessResult<Word> {
    let value = match ReferenceModel.evaluate(operation, row) {
        Ok(value) if value.is_finite() => value,
        Ok(_) | Err(RowError::Invariant(_)) => {
            return Err(HarnessError::UndefinedValue { operation, index });
        },
        Err(err) => return Err(err.into()),
    };
    Ok(Word::from_real(value)?)
}

/// Golden-vector generator with a pluggable lane under test
pub struct VectorGenerator {
    config: HarnessConfig,

    /// Artifacts under `config.output_dir`
    store: ArtifactStore,

    /// Lane checked by `verify`
    lane: Box<dyn NormalModel>,

    /// Event handler for progress and results
    event_handler: Arc<dyn EventHandler>,
}

impl VectorGenerator {
    /// Create a generator that verifies the fixed-point lane
    ///
    /// # Errors
    /// `InvalidConfig` if the configuration fails validation.
    pub fn new(config: HarnessConfig, event_handler: Arc<dyn EventHandler>) -> HarnessResult<Self> {
        Self::with_lane(config, create_model(ModelKind::FixedPoint), event_handler)
    }

    /// Create a generator that verifies `lane`
    ///
    /// # Errors
    /// `InvalidConfig` if the configuration fails validation.
    pub fn with_lane(
        config: HarnessConfig,
        lane: Box<dyn NormalModel>,
        event_handler: Arc<dyn EventHandler>,
    ) -> HarnessResult<Self> {
        config.validate().map_err(HarnessError::InvalidConfig)?;
        Ok(Self {
            store: ArtifactStore::new(config.output_dir.clone()),
            config,
            lane,
            event_handler,
        })
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }

    pub fn lane(&self) -> &dyn NormalModel {
        self.lane.as_ref()
    }

    // ========================================================================
    // Generation
    // ========================================================================

    /// Build the vector set of one operation: boundary rows first, then
    /// seeded random rows, `vector_count` in total. Rows are kept at full
    /// word width whether or not the lane under test can hold them.
    ///
    /// # Errors
    /// Stops at the first row without a defined reference value.
    pub fn generate(&self, operation: Operation) -> HarnessResult<VectorSet> {
        let count = self.config.vector_count;
        let mut inputs: Vec<Row> = Vec::with_capacity(count);
        if self.config.include_boundaries {
            inputs.extend(boundary_rows(operation).into_iter().take(count));
        }
        let boundary = inputs.len();

        let sampler = Sampler::new(self.config.seed, operation);
        for row in sampler.take(count - boundary) {
            inputs.push(row?);
        }

        let outputs = inputs
            .iter()
            .enumerate()
            .map(|(index, row)| expected_output(operation, index, row))
            .collect::<HarnessResult<Vec<_>>>()?;

        let set = VectorSet::new(operation, inputs, outputs)?;
        self.event_handler.on_event(HarnessEvent::VectorSetGenerated {
            operation,
            rows: set.len(),
            boundary_rows: boundary,
        });
        Ok(set)
    }

    /// Generate every configured operation, in configuration order
    ///
    /// # Errors
    /// See [`VectorGenerator::generate`].
    pub fn generate_all(&self) -> HarnessResult<Vec<VectorSet>> {
        self.config
            .operations
            .iter()
            .map(|&operation| self.generate(operation))
            .collect()
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Write a set under the configured output directory
    ///
    /// # Errors
    /// `Io` from the artifact store.
    pub fn persist(&self, set: &VectorSet) -> HarnessResult<()> {
        let operation = set.operation();
        let written = self.store.write(set)?;
        self.event_handler.on_events(vec![
            HarnessEvent::ArtifactWritten {
                operation,
                path: self.store.input_path(operation),
                bytes: written.input_bytes,
            },
            HarnessEvent::ArtifactWritten {
                operation,
                path: self.store.output_path(operation),
                bytes: written.output_bytes,
            },
        ]);
        Ok(())
    }

    /// Read a persisted set back
    ///
    /// # Errors
    /// `Io` or `MalformedArtifact` from the artifact store.
    pub fn load(&self, operation: Operation) -> HarnessResult<VectorSet> {
        let set = self.store.read(operation)?;
        self.event_handler.on_event(HarnessEvent::ArtifactLoaded {
            operation,
            path: self.store.operation_dir(operation),
            rows: set.len(),
        });
        Ok(set)
    }

    /// Generate and persist every configured operation
    ///
    /// # Errors
    /// The first generation or persistence failure.
    pub fn run(&self) -> HarnessResult<Vec<VectorSet>> {
        let sets = self.generate_all()?;
        for set in &sets {
            self.persist(set)?;
        }
        tracing::info!(
            operations = sets.len(),
            rows = self.config.vector_count,
            seed = self.config.seed,
            dir = %self.store.root().display(),
            "golden vectors written"
        );
        Ok(sets)
    }

    // ========================================================================
    // Verification
    // ========================================================================

    /// Compare the lane under test against a set's expected outputs
    pub fn verify(&self, set: &VectorSet) -> DiffReport {
        let report = compare(set, self.lane.as_ref());
        self.event_handler.on_event(HarnessEvent::ComparisonFinished {
            operation: report.operation,
            lane: report.lane.clone(),
            rows: report.rows,
            mismatches: report.mismatches.len(),
            out_of_lane: report.out_of_lane.len(),
            max_error: report.max_error,
        });
        report
    }

    /// Load every configured operation from disk and verify it
    ///
    /// # Errors
    /// The first load failure; mismatches are reported, not raised.
    pub fn verify_persisted(&self) -> HarnessResult<Vec<DiffReport>> {
        self.config
            .operations
            .iter()
            .map(|&operation| self.load(operation).map(|set| self.verify(&set)))
            .collect()
    }
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating vector generators with fluent API
///
/// # Example
/// ```
/// use gaussian_invariant::prelude::*;
/// use std::sync::Arc;
///
/// let generator = VectorGeneratorBuilder::new(std::env::temp_dir().join("vectors"))
///     .kernels_only()
///     .with_seed(7)
///     .with_vector_count(16)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// let set = generator.generate(Operation::Cdf).unwrap();
/// assert_eq!(set.len(), 16);
/// assert!(generator.verify(&set).passed());
/// ```
pub struct VectorGeneratorBuilder {
    config: HarnessConfig,
    lane: ModelKind,
}

impl VectorGeneratorBuilder {
    /// Create a builder writing under `output_dir`
    pub fn new(output_dir: impl Into<std::path::PathBuf>) -> Self {
        Self {
            config: HarnessConfig::new(output_dir),
            lane: ModelKind::FixedPoint,
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: HarnessConfig) -> Self {
        Self {
            config,
            lane: ModelKind::FixedPoint,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    pub fn with_vector_count(mut self, count: usize) -> Self {
        self.config = self.config.with_vector_count(count);
        self
    }

    pub fn with_operations(mut self, operations: impl IntoIterator<Item = Operation>) -> Self {
        self.config = self.config.with_operations(operations);
        self
    }

    /// Normal kernels only
    pub fn kernels_only(mut self) -> Self {
        self.config = self.config.with_operations(Operation::KERNELS);
        self
    }

    /// Verify `kind` instead of the fixed-point lane
    pub fn with_lane(mut self, kind: ModelKind) -> Self {
        self.lane = kind;
        self
    }

    /// Build the generator
    ///
    /// # Errors
    /// `InvalidConfig` if the configuration fails validation.
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> HarnessResult<VectorGenerator> {
        VectorGenerator::with_lane(self.config, create_model(self.lane), event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &HarnessConfig {
        &self.config
    }
}
