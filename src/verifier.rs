//! Optimality certificate verifier

use num_traits::Float;
use core::fmt::{Debug, LowerExp};
use crate::{Assignment, ProbCert, VerifyError};
use crate::check::{Side, Violation, validate_eps, validate_diag_floor, eval_constraints, eval_gap, eval_psd};

//

/// Verifier parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifierParam<F: Float>
{
    /// Tolerance of every equality and inequality comparison.
    pub eps: F,
    /// Lower bound of diagonal entries of PSD factors.
    pub diag_floor: F,
    /// Max number of [`Violation`]s kept in a [`Certificate`]. `None` means no upper limit.
    pub max_violations: Option<usize>,
}

impl<F: Float> Default for VerifierParam<F>
{
    fn default() -> Self
    {
        let ten = F::from(10).unwrap();

        VerifierParam {
            eps: ten.powi(-6),
            diag_floor: ten.powi(-4),
            max_violations: None,
        }
    }
}

//

/// Result of a verification.
///
/// Each field tells whether one class of conditions holds;
/// `violations` lists what failed, in the order of checking.
#[derive(Debug, Clone, PartialEq)]
pub struct Certificate<F: Float>
{
    pub primal_feasible: bool,
    pub dual_feasible: bool,
    pub zero_gap: bool,
    /// `None` if the problem has no PSD block.
    pub psd_certified: Option<bool>,
    pub violations: Vec<Violation<F>>,
}

impl<F: Float> Certificate<F>
{
    /// Checks if the certificate is valid.
    ///
    /// Returns the conjunction of all present fields.
    pub fn is_valid(&self) -> bool
    {
        self.primal_feasible && self.dual_feasible && self.zero_gap && self.psd_certified.unwrap_or(true)
    }
}

impl<F: Float + LowerExp> core::fmt::Display for Certificate<F>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "{}: primal_feasible {}, dual_feasible {}, zero_gap {}",
            if self.is_valid() {"Valid"} else {"Invalid"},
            self.primal_feasible, self.dual_feasible, self.zero_gap)?;
        if let Some(psd) = self.psd_certified {
            write!(f, ", psd_certified {}", psd)?;
        }
        for v in self.violations.iter() {
            writeln!(f)?;
            write!(f, "  {}", v)?;
        }
        Ok(())
    }
}

//

/// Optimality verifier
///
/// Stateless; one instance may verify any number of problems, also from multiple threads.
#[derive(Debug, Clone)]
pub struct Verifier<F: Float>
{
    pub par: VerifierParam<F>,
}

impl<F: Float> Verifier<F>
{
    /// Creates an instance.
    ///
    /// Returns [`Verifier`] instance.
    pub fn new() -> Self
    {
        Verifier {
            par: VerifierParam::default(),
        }
    }

    /// Changes verifier parameters.
    ///
    /// Returns [`Verifier`] with its parameters changed.
    /// * `f` is a function to change parameters given by its argument.
    pub fn par<P>(mut self, f: P) -> Self
    where P: FnOnce(&mut VerifierParam<F>)
    {
        f(&mut self.par);
        self
    }
}

impl<F: Float> Default for Verifier<F>
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl<F> Verifier<F>
where F: Float + Debug + LowerExp
{
    /// Verifies a primal-dual pair.
    ///
    /// Returns `Ok` with [`Certificate`], whether valid or not,
    /// or `Err` with [`VerifyError`] if the input is malformed or a variable is unbound.
    /// All structural validation is done before any check is evaluated.
    /// * `prob` is the problem pair.
    /// * `asgn` is the candidate solution for all variables.
    pub fn verify(&self, prob: &ProbCert<F>, asgn: &Assignment<F>) -> Result<Certificate<F>, VerifyError>
    {
        log::debug!("{:?}", self.par);

        validate_eps(self.par.eps)?;
        validate_diag_floor(self.par.diag_floor)?;
        prob.validate()?;
        asgn.validate()?;

        let eps = self.par.eps;

        let v_pri = eval_constraints(Side::Primal, prob.cons(Side::Primal), asgn, eps)?;
        let v_dual = eval_constraints(Side::Dual, prob.cons(Side::Dual), asgn, eps)?;
        let v_gap = eval_gap(prob.primal_obj(), prob.dual_obj(), asgn, eps)?;

        let mut v_psd = Vec::new();
        for (block, pair) in prob.psd_blocks().iter().enumerate() {
            log::debug!("PSD block #{}: dimension {}", block, pair.dim());
            v_psd.extend(eval_psd(block, &pair.mat, &pair.factor, asgn, eps, self.par.diag_floor)?);
        }

        let cert_psd = if prob.psd_blocks().is_empty() {
            None
        }
        else {
            Some(v_psd.is_empty())
        };

        let mut violations = v_pri;
        let primal_feasible = violations.is_empty();
        let dual_feasible = v_dual.is_empty();
        let zero_gap = v_gap.is_none();
        violations.extend(v_dual);
        violations.extend(v_gap);
        violations.extend(v_psd);

        if let Some(max) = self.par.max_violations {
            violations.truncate(max);
        }

        let cert = Certificate {
            primal_feasible,
            dual_feasible,
            zero_gap,
            psd_certified: cert_psd,
            violations,
        };

        log::debug!("primal_feasible {}, dual_feasible {}, zero_gap {}, psd_certified {:?}",
            cert.primal_feasible, cert.dual_feasible, cert.zero_gap, cert.psd_certified);
        if cert.is_valid() {
            log::info!("----- Certified");
        }
        else {
            log::info!("----- Not certified");
        }

        Ok(cert)
    }
}

//

#[test]
fn test_verifier1()
{
    use crate::{LinExpr, LinConstraint};

    let _ = env_logger::builder().is_test(true).try_init();

    let prob = ProbCert::new(
        LinExpr::var("x"), vec![LinConstraint::le(LinExpr::var("x"), 1.)],
        LinExpr::var("y"), vec![LinConstraint::ge(LinExpr::var("y"), 1.)],
    );
    let asgn = Assignment::new().var("x", 1.).var("y", 1.);

    let v = Verifier::new();
    let cert = v.verify(&prob, &asgn).unwrap();
    assert!(cert.is_valid());
    assert_eq!(cert.psd_certified, None);
    assert_eq!(format!("{}", cert), "Valid: primal_feasible true, dual_feasible true, zero_gap true");

    let asgn = asgn.var("x", 3.).var("y", 0.);
    let cert = v.verify(&prob, &asgn).unwrap();
    assert!(!cert.is_valid());
    assert_eq!(cert.violations.len(), 3);

    let v = v.par(|p| p.max_violations = Some(1));
    let cert = v.verify(&prob, &asgn).unwrap();
    assert_eq!(cert.violations.len(), 1);
    assert!(!cert.primal_feasible && !cert.dual_feasible && !cert.zero_gap);
}

#[test]
fn test_verifier2()
{
    use float_eq::assert_float_eq;

    let p = VerifierParam::<f64>::default();
    assert_float_eq!(p.eps, 1e-6, rmax <= 1e-12);
    assert_float_eq!(p.diag_floor, 1e-4, rmax <= 1e-12);
    assert_eq!(p.max_violations, None);

    let v = Verifier::new().par(|p| p.eps = f64::NAN);
    let prob = ProbCert::new(
        crate::LinExpr::new(), Vec::new(),
        crate::LinExpr::new(), Vec::new(),
    );
    assert_eq!(
        v.verify(&prob, &Assignment::new()),
        Err(VerifyError::MalformedProblem(crate::Malformed::InvalidTolerance))
    );
}
