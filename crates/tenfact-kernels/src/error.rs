//! Error types for tensor kernel operations
//!
//! Kernels validate their operands up front and report the first violation as a
//! structured [`KernelError`].

use std::fmt;

/// Error type for tensor kernel operations
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Dimension mismatch between operands
    DimensionMismatch {
        operation: String,
        expected: Vec<usize>,
        actual: Vec<usize>,
        context: String,
    },

    /// Mode index out of range for the tensor order
    InvalidMode {
        mode: usize,
        max_mode: usize,
        context: String,
    },

    /// Rank mismatch (different CP ranks in factor matrices)
    RankMismatch {
        operation: String,
        expected_rank: usize,
        actual_rank: usize,
        factor_index: usize,
    },

    /// Empty input not allowed
    EmptyInput {
        operation: String,
        parameter: String,
    },

    /// Layout or reshape failure reported by the array backend
    Layout { operation: String, message: String },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::DimensionMismatch {
                operation,
                expected,
                actual,
                context,
            } => write!(
                f,
                "{}: dimension mismatch - expected {:?}, got {:?}. {}",
                operation, expected, actual, context
            ),

            KernelError::InvalidMode {
                mode,
                max_mode,
                context,
            } => write!(
                f,
                "Invalid mode {}: must be < {}. {}",
                mode, max_mode, context
            ),

            KernelError::RankMismatch {
                operation,
                expected_rank,
                actual_rank,
                factor_index,
            } => write!(
                f,
                "{}: rank mismatch at factor {}: expected rank {}, got {}",
                operation, factor_index, expected_rank, actual_rank
            ),

            KernelError::EmptyInput {
                operation,
                parameter,
            } => write!(
                f,
                "{}: empty input not allowed for parameter '{}'",
                operation, parameter
            ),

            KernelError::Layout { operation, message } => {
                write!(f, "{}: {}", operation, message)
            }
        }
    }
}

impl std::error::Error for KernelError {}

/// Result type for kernel operations
pub type KernelResult<T> = Result<T, KernelError>;

impl KernelError {
    /// Create a dimension mismatch error
    pub fn dimension_mismatch(
        operation: impl Into<String>,
        expected: Vec<usize>,
        actual: Vec<usize>,
        context: impl Into<String>,
    ) -> Self {
        KernelError::DimensionMismatch {
            operation: operation.into(),
            expected,
            actual,
            context: context.into(),
        }
    }

    /// Create an invalid mode error
    pub fn invalid_mode(mode: usize, max_mode: usize, context: impl Into<String>) -> Self {
        KernelError::InvalidMode {
            mode,
            max_mode,
            context: context.into(),
        }
    }

    /// Create a rank mismatch error
    pub fn rank_mismatch(
        operation: impl Into<String>,
        expected_rank: usize,
        actual_rank: usize,
        factor_index: usize,
    ) -> Self {
        KernelError::RankMismatch {
            operation: operation.into(),
            expected_rank,
            actual_rank,
            factor_index,
        }
    }

    /// Create an empty input error
    pub fn empty_input(operation: impl Into<String>, parameter: impl Into<String>) -> Self {
        KernelError::EmptyInput {
            operation: operation.into(),
            parameter: parameter.into(),
        }
    }

    /// Wrap a backend layout/reshape failure
    pub fn layout(operation: impl Into<String>, err: impl fmt::Display) -> Self {
        KernelError::Layout {
            operation: operation.into(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = KernelError::dimension_mismatch(
            "nmode_product",
            vec![4, 3],
            vec![4, 5],
            "Matrix columns must match the mode size",
        );

        let msg = format!("{}", err);
        assert!(msg.contains("nmode_product"));
        assert!(msg.contains("dimension mismatch"));
        assert!(msg.contains("[4, 3]"));
        assert!(msg.contains("[4, 5]"));
    }

    #[test]
    fn test_invalid_mode_display() {
        let err = KernelError::invalid_mode(3, 3, "Tensor has only 3 modes");

        let msg = format!("{}", err);
        assert!(msg.contains("Invalid mode 3"));
        assert!(msg.contains("must be < 3"));
    }

    #[test]
    fn test_rank_mismatch_display() {
        let err = KernelError::rank_mismatch("mttkrp", 5, 3, 2);

        let msg = format!("{}", err);
        assert!(msg.contains("factor 2"));
        assert!(msg.contains("expected rank 5"));
        assert!(msg.contains("got 3"));
    }

    #[test]
    fn test_empty_input_display() {
        let err = KernelError::empty_input("khatri_rao_list", "matrices");
        let msg = format!("{}", err);
        assert!(msg.contains("empty input"));
        assert!(msg.contains("matrices"));
    }

    #[test]
    fn test_layout_display() {
        let err = KernelError::layout("fold", "incompatible shapes");
        assert_eq!(err.to_string(), "fold: incompatible shapes");
    }
}
