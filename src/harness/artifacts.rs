// ============================================================================
// Artifact Store
// `<root>/<operation>/input` and `<root>/<operation>/output` on disk
// ============================================================================

use super::codec::{decode_words, encode_words};
use super::errors::{HarnessError, HarnessResult};
use super::vector_set::VectorSet;
use crate::domain::{Operation, Word, WORD_BYTES};
use std::fs;
use std::path::{Path, PathBuf};

/// Sizes of one persisted vector set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrittenArtifact {
    pub input_bytes: usize,
    pub output_bytes: usize,
}

/// Directory of golden vectors, one subdirectory per operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn operation_dir(&self, operation: Operation) -> PathBuf {
        self.root.join(operation.name())
    }

    pub fn input_path(&self, operation: Operation) -> PathBuf {
        self.operation_dir(operation).join("input")
    }

    pub fn output_path(&self, operation: Operation) -> PathBuf {
        self.operation_dir(operation).join("output")
    }

    /// True when both files of `operation` exist
    pub fn contains(&self, operation: Operation) -> bool {
        self.input_path(operation).is_file() && self.output_path(operation).is_file()
    }

    /// Write a vector set, replacing any previous one for its operation.
    ///
    /// # Errors
    /// `Io` naming the path that failed.
    pub fn write(&self, set: &VectorSet) -> HarnessResult<WrittenArtifact> {
        let operation = set.operation();
        let input = encode_words(&set.input_words());
        let output = encode_words(set.outputs());

        let dir = self.operation_dir(operation);
        fs::create_dir_all(&dir).map_err(|source| HarnessError::Io { path: dir, source })?;
        write_file(&self.input_path(operation), &input)?;
        write_file(&self.output_path(operation), &output)?;

        Ok(WrittenArtifact {
            input_bytes: input.len(),
            output_bytes: output.len(),
        })
    }

    /// Load the vector set of `operation`; the row count comes from the
    /// file length and the operation's arity.
    ///
    /// # Errors
    /// `Io` if a file is missing or unreadable, `MalformedArtifact` if the
    /// contents do not decode into a consistent set.
    pub fn read(&self, operation: Operation) -> HarnessResult<VectorSet> {
        let input_path = self.input_path(operation);
        let output_path = self.output_path(operation);

        let inputs = read_words(&input_path)?;
        let outputs = read_words(&output_path)?;

        VectorSet::from_words(operation, &inputs, outputs).map_err(|err| {
            HarnessError::MalformedArtifact {
                path: input_path,
                reason: err.to_string(),
            }
        })
    }
}

fn write_file(path: &Path, contents: &str) -> HarnessResult<()> {
    fs::write(path, contents).map_err(|source| HarnessError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_words(path: &Path) -> HarnessResult<Vec<Word>> {
    let text = fs::read_to_string(path).map_err(|source| HarnessError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_words(&text).map_err(|err| HarnessError::MalformedArtifact {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}

/// Encoded length in characters of `words` words, prefix included
pub const fn encoded_len(words: usize) -> usize {
    2 + words * WORD_BYTES * 2
}
