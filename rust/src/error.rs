//! Error handling and result types for RbTree operations.
//!
//! The primary API reports expected negative outcomes through `bool` and
//! `Option` returns. The `try_*` entry points and the validation layer use
//! [`RbTreeError`] so callers can propagate with `?`.

use thiserror::Error;

/// Error type for red-black tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RbTreeError {
    /// Key not found in the tree.
    #[error("Key not found in tree")]
    KeyNotFound,
    /// An equal key is already present; the stored value was left untouched.
    #[error("Key already present in tree")]
    DuplicateKey,
    /// Operation requires a non-empty tree.
    #[error("Empty tree: {0}")]
    EmptyTree(String),
    /// Invalid capacity specified.
    #[error("Invalid capacity: {0}")]
    InvalidCapacity(String),
    /// Slot buffer access failed.
    #[error("Slot error: {0}")]
    SlotError(String),
    /// Internal data structure integrity violation.
    #[error("Data integrity error: {0}")]
    DataIntegrityError(String),
    /// Tree corruption detected.
    #[error("Corrupted tree: {0}")]
    CorruptedTree(String),
}

impl RbTreeError {
    /// Create an EmptyTree error naming the rejected operation
    pub fn empty_tree(operation: &str) -> Self {
        Self::EmptyTree(format!("{} requires at least one entry", operation))
    }

    /// Create an InvalidCapacity error with context
    pub fn invalid_capacity(capacity: usize, max_allowed: usize) -> Self {
        Self::InvalidCapacity(format!(
            "Capacity {} is invalid (maximum addressable: {})",
            capacity, max_allowed
        ))
    }

    /// Create a SlotError with context
    pub fn slot_error(operation: &str, details: &str) -> Self {
        Self::SlotError(format!("{} failed: {}", operation, details))
    }

    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Check if this error reports a normal negative lookup/insert outcome
    pub fn is_negative_outcome(&self) -> bool {
        matches!(self, Self::KeyNotFound | Self::DuplicateKey | Self::EmptyTree(_))
    }

    /// Check if this error reports a broken structural invariant
    pub fn is_integrity_error(&self) -> bool {
        matches!(
            self,
            Self::DataIntegrityError(_) | Self::CorruptedTree(_) | Self::SlotError(_)
        )
    }
}

/// Result type for whole-tree checks
pub type TreeResult<T> = Result<T, RbTreeError>;

/// Result type for key lookup operations
pub type KeyResult<T> = Result<T, RbTreeError>;

/// Result type for tree modification operations
pub type ModifyResult<T> = Result<T, RbTreeError>;

/// Result type for tree construction and validation
pub type InitResult<T> = Result<T, RbTreeError>;

/// Result extension trait for attaching context to tree errors
pub trait RbTreeResultExt<T> {
    /// Prefix the error message with additional context
    fn with_context(self, context: &str) -> Result<T, RbTreeError>;

    /// Prefix the error message with the name of the failing operation
    fn with_operation(self, operation: &str) -> Result<T, RbTreeError>;
}

impl<T> RbTreeResultExt<T> for Result<T, RbTreeError> {
    fn with_context(self, context: &str) -> Result<T, RbTreeError> {
        self.map_err(|e| match e {
            RbTreeError::KeyNotFound => RbTreeError::KeyNotFound,
            RbTreeError::DuplicateKey => RbTreeError::DuplicateKey,
            RbTreeError::EmptyTree(msg) => RbTreeError::EmptyTree(format!("{}: {}", context, msg)),
            RbTreeError::InvalidCapacity(msg) => {
                RbTreeError::InvalidCapacity(format!("{}: {}", context, msg))
            }
            RbTreeError::SlotError(msg) => RbTreeError::slot_error(context, &msg),
            RbTreeError::DataIntegrityError(msg) => RbTreeError::data_integrity(context, &msg),
            RbTreeError::CorruptedTree(msg) => RbTreeError::corrupted_tree(context, &msg),
        })
    }

    fn with_operation(self, operation: &str) -> Result<T, RbTreeError> {
        self.with_context(&format!("Operation '{}'", operation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(RbTreeError::KeyNotFound.to_string(), "Key not found in tree");
        assert_eq!(
            RbTreeError::empty_tree("min").to_string(),
            "Empty tree: min requires at least one entry"
        );
        assert_eq!(
            RbTreeError::corrupted_tree("Links", "node 3 orphaned").to_string(),
            "Corrupted tree: Links corruption: node 3 orphaned"
        );
    }

    #[test]
    fn test_with_operation_keeps_negative_outcomes() {
        let missing: KeyResult<()> = Err(RbTreeError::KeyNotFound);
        assert_eq!(missing.with_operation("find"), Err(RbTreeError::KeyNotFound));

        let broken: TreeResult<()> = Err(RbTreeError::data_integrity("order", "3 before 2"));
        let err = broken.with_operation("validate").unwrap_err();
        assert!(err.is_integrity_error());
        assert!(err.to_string().contains("Operation 'validate'"));
    }

    #[test]
    fn test_classification() {
        assert!(RbTreeError::DuplicateKey.is_negative_outcome());
        assert!(!RbTreeError::DuplicateKey.is_integrity_error());
        assert!(RbTreeError::slot_error("get", "stale").is_integrity_error());
    }
}
