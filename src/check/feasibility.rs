use num_traits::Float;
use core::fmt::{Display, LowerExp};
use crate::{Assignment, LinConstraint, VerifyError, Malformed};
use super::{Side, Violation, validate_eps};

//

/// Checks that every coefficient and right-hand side of `cons` is finite.
///
/// Returns `Err` with [`Malformed::NonFinite`] naming the first offending constraint.
pub fn validate_constraints<F: Float>(side: Side, cons: &[LinConstraint<F>]) -> Result<(), VerifyError>
{
    validate_labeled(&side, cons)
}

fn validate_labeled<F: Float>(label: &dyn Display, cons: &[LinConstraint<F>]) -> Result<(), VerifyError>
{
    for (i, c) in cons.iter().enumerate() {
        if !c.is_finite() {
            log::error!("{} constraint #{} has a non-finite number", label, i);
            return Err(Malformed::NonFinite(format!("{} constraint #{}", label, i)).into());
        }
    }
    Ok(())
}

// every constraint is evaluated; `on_viol` gets the index and the excess of each violated one
fn eval_labeled<F, V>(label: &dyn Display, cons: &[LinConstraint<F>], asgn: &Assignment<F>, eps: F, mut on_viol: V) -> Result<(), VerifyError>
where F: Float + LowerExp, V: FnMut(usize, F)
{
    for (index, c) in cons.iter().enumerate() {
        let (lhs, excess) = c.eval(asgn, eps)?;
        log::trace!("{} constraint #{}: lhs {:.6e} {} rhs {:.6e}", label, index, lhs, c.cmp, c.rhs);

        if let Some(excess) = excess {
            log::warn!("{} constraint #{} violated by {:.3e}", label, index, excess);
            on_viol(index, excess);
        }
    }

    Ok(())
}

/// Evaluates linear constraints and collects violated ones.
///
/// Every constraint is evaluated, so an unbound variable in any of them is reported
/// regardless of the order.
/// Returns violations in the order of `cons`, empty if all are satisfied within `eps`.
/// * `side` labels the violations.
/// * `cons` are the constraints, already validated by [`validate_constraints`].
/// * `asgn` is the assignment.
/// * `eps` is the tolerance.
pub(crate) fn eval_constraints<F>(side: Side, cons: &[LinConstraint<F>], asgn: &Assignment<F>, eps: F) -> Result<Vec<Violation<F>>, VerifyError>
where F: Float + LowerExp
{
    let mut viols = Vec::new();

    eval_labeled(&side, cons, asgn, eps, |index, excess| {
        viols.push(Violation::Constraint { side, index, excess });
    })?;

    Ok(viols)
}

/// Feasibility violations of one side.
///
/// Validates `cons` and `eps` first, then works as [`is_feasible`] but
/// returns every violated constraint with the amount beyond the tolerance.
pub fn feasibility_violations<F>(side: Side, cons: &[LinConstraint<F>], asgn: &Assignment<F>, eps: F) -> Result<Vec<Violation<F>>, VerifyError>
where F: Float + LowerExp
{
    validate_eps(eps)?;
    validate_constraints(side, cons)?;
    asgn.validate()?;

    eval_constraints(side, cons, asgn, eps)
}

/// Feasibility Evaluator.
///
/// Returns `Ok(true)` if all of `cons` are satisfied within `eps`, `Ok(false)` otherwise.
/// Returns `Err` with [`VerifyError::UnboundVariable`] if a referenced variable is missing,
/// or [`VerifyError::MalformedProblem`] for non-finite input.
/// Constraints are not tied to either side here and are labeled `linear`;
/// use [`feasibility_violations`] for side-labeled diagnostics.
pub fn is_feasible<F>(cons: &[LinConstraint<F>], asgn: &Assignment<F>, eps: F) -> Result<bool, VerifyError>
where F: Float + LowerExp
{
    validate_eps(eps)?;
    validate_labeled(&"linear", cons)?;
    asgn.validate()?;

    let mut feasible = true;
    eval_labeled(&"linear", cons, asgn, eps, |_, _| feasible = false)?;

    Ok(feasible)
}

//

#[test]
fn test_feasibility1()
{
    use crate::LinExpr;

    let cons = vec![
        LinConstraint::le(LinExpr::var("x1").term(2., "x2"), 14.),
        LinConstraint::le(LinExpr::new().term(-3., "x1").term(1., "x2"), 0.),
        LinConstraint::le(LinExpr::var("x1").term(-1., "x2"), 2.),
    ];

    let asgn = Assignment::new().var("x1", 6.).var("x2", 4.);
    assert_eq!(is_feasible(&cons, &asgn, 0.), Ok(true));

    let asgn = Assignment::new().var("x1", 10.).var("x2", 10.);
    let v = feasibility_violations(Side::Primal, &cons, &asgn, 0.).unwrap();
    assert_eq!(v, vec![Violation::Constraint { side: Side::Primal, index: 0, excess: 16. }]);

    let asgn = Assignment::new().var("x1", 10.);
    assert_eq!(is_feasible(&cons, &asgn, 0.), Err(VerifyError::UnboundVariable("x2".into())));

    assert_eq!(is_feasible(&cons, &asgn, -1.), Err(VerifyError::MalformedProblem(Malformed::InvalidTolerance)));
}

#[test]
fn test_feasibility2()
{
    use crate::LinExpr;

    let cons = vec![
        LinConstraint::ge(LinExpr::var("y1"), f64::INFINITY),
    ];
    let asgn = Assignment::new().var("y1", 0.);

    assert_eq!(
        is_feasible(&cons, &asgn, 0.),
        Err(VerifyError::MalformedProblem(Malformed::NonFinite("linear constraint #0".into())))
    );
    assert_eq!(
        feasibility_violations(Side::Dual, &cons, &asgn, 0.),
        Err(VerifyError::MalformedProblem(Malformed::NonFinite("dual constraint #0".into())))
    );
}
