use num_traits::Float;

/// Primal or dual side of a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side
{
    Primal,
    Dual,
}

impl core::fmt::Display for Side {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", match &self {
            Side::Primal => "primal",
            Side::Dual   => "dual",
        })
    }
}

//

/// Diagnostic of a failed check.
///
/// Purely informational; the boolean fields of [`crate::Certificate`] carry the outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation<F: Float>
{
    /// Linear constraint `index` of `side` exceeds the tolerance by `excess`.
    Constraint {
        side: Side,
        index: usize,
        excess: F,
    },
    /// Objective values differ by `excess` beyond the tolerance.
    Gap {
        primal: F,
        dual: F,
        excess: F,
    },
    /// Entry `(row, col)` of the matrix variable of PSD block `block`
    /// differs from the factor product by `excess` beyond the tolerance.
    PsdEntry {
        block: usize,
        row: usize,
        col: usize,
        excess: F,
    },
    /// Diagonal entry `index` of the factor of PSD block `block` is below `floor`.
    PsdDiag {
        block: usize,
        index: usize,
        value: F,
        floor: F,
    },
}

impl<F: Float + core::fmt::LowerExp> core::fmt::Display for Violation<F>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        match &self {
            Violation::Constraint { side, index, excess } =>
                write!(f, "{} constraint #{} violated by {:.3e} beyond tolerance", side, index, excess),
            Violation::Gap { primal, dual, excess } =>
                write!(f, "duality gap: primal {:.6e} vs dual {:.6e}, {:.3e} beyond tolerance", primal, dual, excess),
            Violation::PsdEntry { block, row, col, excess } =>
                write!(f, "PSD block #{}: entry ({}, {}) differs from factor product by {:.3e} beyond tolerance", block, row, col, excess),
            Violation::PsdDiag { block, index, value, floor } =>
                write!(f, "PSD block #{}: factor diagonal #{} is {:.3e} < floor {:.3e}", block, index, value, floor),
        }
    }
}

//

#[test]
fn test_violation1()
{
    let v = Violation::Constraint { side: Side::Primal, index: 0, excess: 16. };
    assert_eq!(format!("{}", v), "primal constraint #0 violated by 1.600e1 beyond tolerance");

    let v = Violation::PsdDiag { block: 0, index: 0, value: 1e-5, floor: 1e-4 };
    assert_eq!(format!("{}", v), "PSD block #0: factor diagonal #0 is 1.000e-5 < floor 1.000e-4");
}
