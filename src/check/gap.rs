use num_traits::Float;
use core::fmt::LowerExp;
use crate::{Assignment, LinExpr, VerifyError, Malformed};
use super::{Violation, validate_eps};

//

/// Checks that both objectives have finite coefficients.
pub fn validate_objectives<F: Float>(primal_obj: &LinExpr<F>, dual_obj: &LinExpr<F>) -> Result<(), VerifyError>
{
    for (e, at) in [(primal_obj, "primal objective"), (dual_obj, "dual objective")] {
        if !e.is_finite() {
            log::error!("{} has a non-finite number", at);
            return Err(Malformed::NonFinite(at.to_string()).into());
        }
    }
    Ok(())
}

pub(crate) fn eval_gap<F>(primal_obj: &LinExpr<F>, dual_obj: &LinExpr<F>, asgn: &Assignment<F>, eps: F) -> Result<Option<Violation<F>>, VerifyError>
where F: Float + LowerExp
{
    let primal = primal_obj.eval(asgn)?;
    let dual = dual_obj.eval(asgn)?;
    let gap = (primal - dual).abs();
    log::trace!("objective: primal {:.6e} dual {:.6e} gap {:.3e}", primal, dual, gap);

    if gap <= eps {
        Ok(None)
    }
    else {
        log::warn!("duality gap {:.3e} exceeds tolerance {:.3e}", gap, eps);
        Ok(Some(Violation::Gap { primal, dual, excess: gap - eps }))
    }
}

/// Duality Gap Checker.
///
/// Returns `Ok(true)` if `|primal_obj - dual_obj| <= eps` at `asgn`, `Ok(false)` otherwise.
/// Independent of feasibility.
pub fn has_zero_gap<F>(primal_obj: &LinExpr<F>, dual_obj: &LinExpr<F>, asgn: &Assignment<F>, eps: F) -> Result<bool, VerifyError>
where F: Float + LowerExp
{
    validate_eps(eps)?;
    validate_objectives(primal_obj, dual_obj)?;
    asgn.validate()?;

    Ok(eval_gap(primal_obj, dual_obj, asgn, eps)?.is_none())
}

//

#[test]
fn test_gap1()
{
    let p = LinExpr::new().term(3., "x1").term(4., "x2");
    let d = LinExpr::new().term(14., "y1").term(2., "y3");

    let asgn = Assignment::new()
               .var("x1", 6.).var("x2", 4.)
               .var("y1", 2.).var("y3", 3.);
    assert_eq!(has_zero_gap(&p, &d, &asgn, 0.), Ok(true));

    let asgn = asgn.var("y3", 3.5);
    assert_eq!(has_zero_gap(&p, &d, &asgn, 0.5), Ok(false));
    assert_eq!(has_zero_gap(&p, &d, &asgn, 1.), Ok(true));

    let d = d.offset(f64::NAN);
    assert!(has_zero_gap(&p, &d, &asgn, 1.).is_err());
}
