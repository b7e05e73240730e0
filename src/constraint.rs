use num_traits::Float;
use crate::{Assignment, LinExpr, VerifyError};

//

/// Comparison operator of a [`LinConstraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmp
{
    /// `lhs <= rhs`
    Le,
    /// `lhs >= rhs`
    Ge,
    /// `lhs == rhs`
    Eq,
}

impl core::fmt::Display for Cmp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", match &self {
            Cmp::Le => "<=",
            Cmp::Ge => ">=",
            Cmp::Eq => "==",
        })
    }
}

//

/// Linear constraint `expr cmp rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinConstraint<F: Float>
{
    pub expr: LinExpr<F>,
    pub cmp: Cmp,
    pub rhs: F,
}

impl<F: Float> LinConstraint<F>
{
    /// Creates an instance.
    pub fn new(expr: LinExpr<F>, cmp: Cmp, rhs: F) -> Self
    {
        LinConstraint { expr, cmp, rhs }
    }

    /// `expr <= rhs`
    pub fn le(expr: LinExpr<F>, rhs: F) -> Self
    {
        Self::new(expr, Cmp::Le, rhs)
    }

    /// `expr >= rhs`
    pub fn ge(expr: LinExpr<F>, rhs: F) -> Self
    {
        Self::new(expr, Cmp::Ge, rhs)
    }

    /// `expr == rhs`
    pub fn equal(expr: LinExpr<F>, rhs: F) -> Self
    {
        Self::new(expr, Cmp::Eq, rhs)
    }

    /// Checks if every coefficient, the offset and `rhs` are finite.
    pub fn is_finite(&self) -> bool
    {
        self.expr.is_finite() && self.rhs.is_finite()
    }

    /// Tests the constraint against a value of `expr`.
    ///
    /// Returns `None` if satisfied within `eps`,
    /// otherwise `Some` with the amount by which the tolerance is exceeded.
    pub fn excess(&self, lhs: F, eps: F) -> Option<F>
    {
        let ok = match self.cmp {
            Cmp::Eq => (lhs - self.rhs).abs() <= eps,
            Cmp::Le => lhs <= self.rhs + eps,
            Cmp::Ge => lhs >= self.rhs - eps,
        };

        if ok {
            None
        }
        else {
            let d = match self.cmp {
                Cmp::Eq => (lhs - self.rhs).abs(),
                Cmp::Le => lhs - self.rhs,
                Cmp::Ge => self.rhs - lhs,
            };
            // NaN propagates into the diagnostic as is
            Some(d - eps)
        }
    }

    /// Evaluates `expr` and tests the constraint.
    ///
    /// Returns a tuple of the value of `expr` and [`LinConstraint::excess`].
    pub fn eval(&self, asgn: &Assignment<F>, eps: F) -> Result<(F, Option<F>), VerifyError>
    {
        let lhs = self.expr.eval(asgn)?;

        Ok((lhs, self.excess(lhs, eps)))
    }
}

impl<F: Float + core::fmt::Display> core::fmt::Display for LinConstraint<F>
{
    fn fmt(&self, f: &mut core::fmt::Formatter) -> Result<(), core::fmt::Error>
    {
        write!(f, "{} {} {}", self.expr, self.cmp, self.rhs)
    }
}

//

#[test]
fn test_constraint1()
{
    use float_eq::assert_float_eq;

    let c = LinConstraint::le(LinExpr::var("x1").term(2., "x2"), 14.);
    assert_eq!(format!("{}", c), "1 x1 + 2 x2 <= 14");

    assert_eq!(c.excess(14., 0.), None);
    assert_float_eq!(c.excess(15., 0.5).unwrap(), 0.5, abs <= 1e-12);

    let c = LinConstraint::ge(LinExpr::var("y1"), 3.);
    assert_eq!(c.excess(3. - 1e-7, 1e-6), None);
    assert_float_eq!(c.excess(1., 0.).unwrap(), 2., abs <= 1e-12);

    let c = LinConstraint::equal(LinExpr::var("z"), -1.);
    assert_eq!(c.excess(-1., 0.), None);
    assert_float_eq!(c.excess(-3., 1.).unwrap(), 1., abs <= 1e-12);
    assert!(c.excess(f64::NAN, 1.).is_some());
}
