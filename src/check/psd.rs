use num_traits::Float;
use core::fmt::LowerExp;
use crate::{Assignment, MatBuild, MatExpr, MatType, VerifyError, Malformed};
use super::{Violation, validate_eps, validate_diag_floor};

//

/// Matrix variable with its factor
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// A symmetric matrix variable \\( X \in \mathcal{S}^n \\) certified positive definite by
/// a lower-triangular factor \\( R \\) such that \\( X = R R^T \\) and \\( R_{ii} \ge \\) `diag_floor`.
/// Entries of both are affine expressions of scalar variables.
#[derive(Debug, Clone, PartialEq)]
pub struct PsdPair<F: Float>
{
    pub mat: MatExpr<F>,
    pub factor: MatExpr<F>,
}

impl<F: Float> PsdPair<F>
{
    /// Creates an instance.
    ///
    /// * `mat` is the matrix variable; [`MatType::General`] or [`MatType::SymPack`].
    /// * `factor` is the lower-triangular factor; entries above the diagonal shall be zero expressions.
    pub fn new(mat: MatExpr<F>, factor: MatExpr<F>) -> Self
    {
        PsdPair { mat, factor }
    }

    /// Dimension of the matrix variable.
    pub fn dim(&self) -> usize
    {
        self.mat.size().0
    }

    /// Structural validation, see [`validate_psd`].
    pub fn validate(&self, block: usize) -> Result<(), VerifyError>
    {
        validate_psd(block, &self.mat, &self.factor)
    }
}

//

/// Structural validation of a matrix variable and its factor.
///
/// Returns `Err` with [`VerifyError::MalformedProblem`] if
/// - they are not square of the same size ([`Malformed::DimMismatch`]),
/// - an entry has a non-finite number ([`Malformed::NonFinite`]),
/// - the factor has an entry above the diagonal which is not identically zero ([`Malformed::NonTriangularFactor`]).
/// * `block` is an index of the PSD block used in errors.
pub fn validate_psd<F: Float>(block: usize, mat: &MatExpr<F>, factor: &MatExpr<F>) -> Result<(), VerifyError>
{
    let (nr, nc) = mat.size();
    if nr != nc || factor.size() != (nr, nc) {
        log::error!("PSD block #{}: size mismatch: mat{:?}, factor{:?}", block, mat.size(), factor.size());
        return Err(Malformed::DimMismatch { block, mat: mat.size(), factor: factor.size() }.into());
    }

    for (which, m) in [("matrix", mat), ("factor", factor)] {
        for (r, c, e) in m.elems() {
            if !e.is_finite() {
                log::error!("PSD block #{}: {} entry ({}, {}) has a non-finite number", block, which, r, c);
                return Err(Malformed::NonFinite(format!("PSD block #{} {} entry ({}, {})", block, which, r, c)).into());
            }
        }
    }

    for (row, col, e) in factor.elems() {
        if row < col && !e.is_zero() {
            log::error!("PSD block #{}: factor entry ({}, {}) is above the diagonal", block, row, col);
            return Err(Malformed::NonTriangularFactor { block, row, col }.into());
        }
    }

    Ok(())
}

/// Lower-triangular factor product \\( R R^T \\) in symmetric packed form.
///
/// Only the lower-triangular part of `factor` is read.
pub fn factor_product<F: Float>(factor: &MatBuild<F>) -> MatBuild<F>
{
    let n = factor.size().0;
    let mut recon = MatBuild::from_elem(MatType::SymPack(n), F::zero());

    for j in 0.. n {
        for i in j.. n {
            let mut s = F::zero();
            for k in 0..= j {
                s = s + factor[(i, k)] * factor[(j, k)];
            }
            recon[(i, j)] = s;
        }
    }

    recon
}

pub(crate) fn eval_psd<F>(block: usize, mat: &MatExpr<F>, factor: &MatExpr<F>, asgn: &Assignment<F>, eps: F, diag_floor: F) -> Result<Vec<Violation<F>>, VerifyError>
where F: Float + LowerExp
{
    let val_r = factor.try_map(|e| e.eval(asgn))?;
    let val_x = mat.try_map(|e| e.eval(asgn))?;
    let recon = factor_product(&val_r);
    let n = recon.size().0;
    log::debug!("PSD block #{}: factor product {}", block, recon);

    let mut viols = Vec::new();

    for j in 0.. n {
        for i in j.. n {
            let rr = recon[(i, j)];
            log::trace!("PSD block #{}: ({}, {}) reconstructed {:.6e}", block, i, j, rr);

            // a general matrix variable stores both triangles
            let mirror = if i == j || val_x.is_sympack() {None} else {Some((j, i))};
            for (row, col) in core::iter::once((i, j)).chain(mirror) {
                let d = (rr - val_x[(row, col)]).abs();
                if !(d <= eps) {
                    log::warn!("PSD block #{}: entry ({}, {}) differs by {:.3e}", block, row, col, d);
                    viols.push(Violation::PsdEntry { block, row, col, excess: d - eps });
                }
            }
        }
    }

    for index in 0.. n {
        let value = val_r[(index, index)];
        if !(value >= diag_floor) {
            log::warn!("PSD block #{}: factor diagonal #{} {:.3e} is below {:.3e}", block, index, value, diag_floor);
            viols.push(Violation::PsdDiag { block, index, value, floor: diag_floor });
        }
    }

    Ok(viols)
}

/// PSD violations of a matrix variable and its factor.
///
/// Validates the inputs first, then works as [`is_psd_certified`] but
/// returns every mismatching entry and every diagonal below the floor.
pub fn psd_violations<F>(mat: &MatExpr<F>, factor: &MatExpr<F>, asgn: &Assignment<F>, eps: F, diag_floor: F) -> Result<Vec<Violation<F>>, VerifyError>
where F: Float + LowerExp
{
    validate_eps(eps)?;
    validate_diag_floor(diag_floor)?;
    validate_psd(0, mat, factor)?;
    asgn.validate()?;

    eval_psd(0, mat, factor, asgn, eps, diag_floor)
}

/// PSD Certificate Checker.
///
/// Returns `Ok(true)` if `mat` agrees with `factor * factor^T` within `eps` entry-wise
/// and every diagonal entry of `factor` is not less than `diag_floor`, `Ok(false)` otherwise.
/// Returns `Err` for a structurally malformed input (see [`validate_psd`]) or an unbound variable.
pub fn is_psd_certified<F>(mat: &MatExpr<F>, factor: &MatExpr<F>, asgn: &Assignment<F>, eps: F, diag_floor: F) -> Result<bool, VerifyError>
where F: Float + LowerExp
{
    Ok(psd_violations(mat, factor, asgn, eps, diag_floor)?.is_empty())
}

//

#[cfg(test)]
fn mat_vars(n: usize, prefix: &str) -> MatExpr<f64>
{
    use crate::LinExpr;

    MatExpr::new(MatType::General(n, n))
    .by_fn(|r, c| LinExpr::var(&format!("{}{}{}", prefix, r + 1, c + 1)))
}

#[cfg(test)]
fn lower_vars(n: usize, prefix: &str) -> MatExpr<f64>
{
    use crate::LinExpr;

    // (r, c) of the lower part is named by its transposed position, as r11, r12, r22
    MatExpr::new(MatType::General(n, n))
    .by_fn(|r, c| if r >= c {LinExpr::var(&format!("{}{}{}", prefix, c + 1, r + 1))} else {LinExpr::new()})
}

#[test]
fn test_psd1()
{
    let asgn = Assignment::new()
               .var("r11", 1.).var("r12", 0.).var("r22", 1.)
               .var("x11", 1.).var("x12", 0.).var("x21", 0.).var("x22", 1.);

    let x = mat_vars(2, "x");
    let r = lower_vars(2, "r");
    assert_eq!(is_psd_certified(&x, &r, &asgn, 1e-9, 1e-4), Ok(true));

    let asgn = asgn.var("r11", 0.00001).var("x11", 0.00001 * 0.00001);
    assert_eq!(is_psd_certified(&x, &r, &asgn, 1e-9, 1e-4), Ok(false));
    assert_eq!(
        psd_violations(&x, &r, &asgn, 1e-9, 1e-4).unwrap(),
        vec![Violation::PsdDiag { block: 0, index: 0, value: 0.00001, floor: 1e-4 }]
    );
}

#[test]
fn test_psd2()
{
    use float_eq::assert_float_eq;

    let r = MatBuild::new(MatType::General(3, 3)).iter_rowmaj(&[
        2.,  0.,  0.,
        1.,  3.,  0.,
       -1.,  0.5, 1.,
    ]);
    let x = factor_product(&r);

    assert!(x.is_sympack());
    let x_array: &[f64] = x.as_ref();
    assert_float_eq!(x_array, [
        4.,
        2., 10.,
       -2., 0.5, 2.25,
    ].as_ref(), abs_all <= 1e-12);
}

#[test]
fn test_psd3()
{
    use crate::LinExpr;

    let asgn = Assignment::new().var("r11", 1.).var("r12", 0.).var("r22", 1.).var("r21", 0.);
    let x = MatExpr::new(MatType::SymPack(2))
            .by_fn(|r, c| LinExpr::constant(if r == c {1.} else {0.}));

    let mut r = lower_vars(2, "r");
    r[(0, 1)] = LinExpr::var("r21");
    assert_eq!(
        is_psd_certified(&x, &r, &asgn, 1e-9, 1e-4),
        Err(VerifyError::MalformedProblem(Malformed::NonTriangularFactor { block: 0, row: 0, col: 1 }))
    );

    let r = lower_vars(3, "r");
    assert_eq!(
        is_psd_certified(&x, &r, &asgn, 1e-9, 1e-4),
        Err(VerifyError::MalformedProblem(Malformed::DimMismatch { block: 0, mat: (2, 2), factor: (3, 3) }))
    );

    let r = lower_vars(2, "r");
    assert_eq!(
        is_psd_certified(&x, &r, &asgn, 1e-9, 0.),
        Err(VerifyError::MalformedProblem(Malformed::InvalidTolerance))
    );
}

#[test]
fn test_psd4()
{
    // stored entries x12 != x21: not symmetric although the lower part matches
    let asgn = Assignment::new()
               .var("r11", 1.).var("r12", 0.).var("r22", 1.)
               .var("x11", 1.).var("x12", 0.5).var("x21", 0.).var("x22", 1.);

    let x = mat_vars(2, "x");
    let r = lower_vars(2, "r");
    assert_eq!(
        psd_violations(&x, &r, &asgn, 1e-9, 1e-4).unwrap().len(),
        1
    );
    assert_eq!(is_psd_certified(&x, &r, &asgn, 0.5, 1e-4), Ok(true));
}

#[test]
fn test_psd5()
{
    use crate::LinExpr;

    let _ = env_logger::builder().is_test(true).try_init();

    // x12 is a single stored entry of the packed matrix variable
    let asgn = Assignment::new()
               .var("r11", 1.).var("r12", 0.).var("r22", 1.)
               .var("x11", 1.).var("x12", 0.5).var("x22", 1.);

    let x = MatExpr::new(MatType::SymPack(2))
            .by_fn(|r, c| LinExpr::var(&format!("x{}{}", r + 1, c + 1)));
    let r = lower_vars(2, "r");

    let viols = psd_violations(&x, &r, &asgn, 1e-9, 1e-4).unwrap();
    assert_eq!(viols.len(), 1);
    match viols[0] {
        Violation::PsdEntry { block: 0, row: 1, col: 0, excess } => assert!(excess > 0.49),
        ref v => panic!("unexpected {:?}", v),
    }
}
