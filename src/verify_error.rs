/// Kinds of structurally malformed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Malformed
{
    /// `NaN` or infinite number found in the named place.
    NonFinite(String),
    /// Matrix variable and its factor are not square of the same size.
    DimMismatch {
        /// Index of the PSD block.
        block: usize,
        /// Size of the matrix variable.
        mat: (usize, usize),
        /// Size of the factor.
        factor: (usize, usize),
    },
    /// Factor has an entry above the diagonal which is not identically zero.
    NonTriangularFactor {
        /// Index of the PSD block.
        block: usize,
        row: usize,
        col: usize,
    },
    /// Tolerance is negative or non-finite, or the diagonal floor is not positive.
    InvalidTolerance,
}

impl core::fmt::Display for Malformed {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self {
            Malformed::NonFinite(at) =>
                write!(f, "non-finite number in {}", at),
            Malformed::DimMismatch { block, mat, factor } =>
                write!(f, "PSD block #{}: matrix {:?} and factor {:?} are not square of the same size", block, mat, factor),
            Malformed::NonTriangularFactor { block, row, col } =>
                write!(f, "PSD block #{}: factor entry ({}, {}) above the diagonal is not zero", block, row, col),
            Malformed::InvalidTolerance =>
                write!(f, "tolerance must be finite and non-negative, diagonal floor finite and positive"),
        }
    }
}

//

/// Verifier errors.
///
/// An invalid certificate is not an error; it is reported by [`crate::Certificate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyError
{
    /// A variable referenced by a constraint, objective or matrix is missing in the assignment.
    UnboundVariable(String),
    /// Structurally malformed problem, assignment or parameter.
    MalformedProblem(Malformed),
}

impl core::fmt::Display for VerifyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self {
            VerifyError::UnboundVariable(name) =>
                write!(f, "UnboundVariable: `{}` is not in the assignment", name),
            VerifyError::MalformedProblem(m) =>
                write!(f, "MalformedProblem: {}", m),
        }
    }
}

impl std::error::Error for VerifyError {}

impl From<Malformed> for VerifyError {
    fn from(m: Malformed) -> Self
    {
        VerifyError::MalformedProblem(m)
    }
}

//

#[test]
fn test_verify_error1()
{
    let e = VerifyError::from(Malformed::NonTriangularFactor { block: 1, row: 0, col: 2 });
    assert_eq!(format!("{}", e), "MalformedProblem: PSD block #1: factor entry (0, 2) above the diagonal is not zero");

    let e = VerifyError::UnboundVariable("y3".into());
    assert_eq!(format!("{}", e), "UnboundVariable: `y3` is not in the assignment");
}
