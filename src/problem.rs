use num_traits::Float;
use crate::{LinExpr, LinConstraint, Cmp, MatBuild, VerifyError};
use crate::check::{Side, PsdPair, validate_constraints, validate_objectives};

//

/// Primal-dual problem pair to be certified
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Holds a primal objective and constraints, a dual objective and constraints,
/// and optional PSD blocks \\( X = R R^T \\).
/// Constraint order is kept as given and used in diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbCert<F: Float>
{
    primal_obj: LinExpr<F>,
    primal_cons: Vec<LinConstraint<F>>,
    dual_obj: LinExpr<F>,
    dual_cons: Vec<LinConstraint<F>>,
    psd: Vec<PsdPair<F>>,
}

impl<F: Float> ProbCert<F>
{
    /// Creates an instance without PSD blocks.
    ///
    /// * `primal_obj` is the primal objective.
    /// * `primal_cons` are the primal constraints.
    /// * `dual_obj` is the dual objective.
    /// * `dual_cons` are the dual constraints.
    pub fn new(
        primal_obj: LinExpr<F>, primal_cons: Vec<LinConstraint<F>>,
        dual_obj: LinExpr<F>, dual_cons: Vec<LinConstraint<F>>) -> Self
    {
        ProbCert {
            primal_obj,
            primal_cons,
            dual_obj,
            dual_cons,
            psd: Vec::new(),
        }
    }

    /// Adds a PSD block.
    pub fn set_psd(&mut self, pair: PsdPair<F>)
    {
        self.psd.push(pair);
    }
    /// Builder pattern of [`ProbCert::set_psd`].
    pub fn psd(mut self, pair: PsdPair<F>) -> Self
    {
        self.set_psd(pair);
        self
    }

    pub fn primal_obj(&self) -> &LinExpr<F>
    {
        &self.primal_obj
    }

    pub fn dual_obj(&self) -> &LinExpr<F>
    {
        &self.dual_obj
    }

    /// Constraints of a side.
    pub fn cons(&self, side: Side) -> &[LinConstraint<F>]
    {
        match side {
            Side::Primal => &self.primal_cons,
            Side::Dual => &self.dual_cons,
        }
    }

    pub fn psd_blocks(&self) -> &[PsdPair<F>]
    {
        &self.psd
    }

    /// Structural validation of everything.
    ///
    /// Returns `Err` with [`VerifyError::MalformedProblem`] on the first non-finite number,
    /// mismatched sizes or non-triangular factor.
    pub fn validate(&self) -> Result<(), VerifyError>
    {
        validate_objectives(&self.primal_obj, &self.dual_obj)?;
        validate_constraints(Side::Primal, &self.primal_cons)?;
        validate_constraints(Side::Dual, &self.dual_cons)?;
        for (block, pair) in self.psd.iter().enumerate() {
            pair.validate(block)?;
        }
        Ok(())
    }

    /// Creates a certificate problem of an LP maximization and its dual.
    ///
    /// The primal is
    /// \\[
    /// \begin{array}{ll}
    /// {\rm maximize} & c^T x \\\\
    /// {\rm subject \ to} & A x \le b, \ x \ge 0,
    /// \end{array}
    /// \\]
    /// and the dual is
    /// \\[
    /// \begin{array}{ll}
    /// {\rm minimize} & b^T y \\\\
    /// {\rm subject \ to} & A^T y \ge c, \ y \ge 0.
    /// \end{array}
    /// \\]
    /// Variables are named `x1, x2, ...` and `y1, y2, ...` with the given prefixes.
    /// Primal constraints are \\(Ax \le b\\) then \\(x \ge 0\\); dual ones likewise.
    /// * `vec_c` is \\(c \in \mathbb{R}^n\\).
    /// * `mat_a` is \\(A \in \mathbb{R}^{m \times n}\\).
    /// * `vec_b` is \\(b \in \mathbb{R}^m\\).
    pub fn from_lp_max(
        vec_c: &MatBuild<F>, mat_a: &MatBuild<F>, vec_b: &MatBuild<F>,
        x_prefix: &str, y_prefix: &str) -> Self
    {
        Self::from_lp(vec_c, mat_a, vec_b, x_prefix, y_prefix, Cmp::Le)
    }

    /// Creates a certificate problem of an LP minimization and its dual.
    ///
    /// The primal is
    /// \\[
    /// \begin{array}{ll}
    /// {\rm minimize} & c^T x \\\\
    /// {\rm subject \ to} & G x \ge h, \ x \ge 0,
    /// \end{array}
    /// \\]
    /// and the dual is
    /// \\[
    /// \begin{array}{ll}
    /// {\rm maximize} & h^T y \\\\
    /// {\rm subject \ to} & G^T y \le c, \ y \ge 0.
    /// \end{array}
    /// \\]
    /// Naming and ordering are as [`ProbCert::from_lp_max`].
    pub fn from_lp_min(
        vec_c: &MatBuild<F>, mat_g: &MatBuild<F>, vec_h: &MatBuild<F>,
        x_prefix: &str, y_prefix: &str) -> Self
    {
        Self::from_lp(vec_c, mat_g, vec_h, x_prefix, y_prefix, Cmp::Ge)
    }

    fn from_lp(
        vec_c: &MatBuild<F>, mat_a: &MatBuild<F>, vec_b: &MatBuild<F>,
        x_prefix: &str, y_prefix: &str, row_cmp: Cmp) -> Self
    {
        let (m, n) = mat_a.size();
        let col_cmp = match row_cmp {
            Cmp::Le => Cmp::Ge,
            Cmp::Ge => Cmp::Le,
            Cmp::Eq => Cmp::Eq,
        };
        assert_eq!(vec_c.size(), (n, 1));
        assert_eq!(vec_b.size(), (m, 1));

        let x: Vec<String> = (1..= n).map(|j| format!("{}{}", x_prefix, j)).collect();
        let y: Vec<String> = (1..= m).map(|i| format!("{}{}", y_prefix, i)).collect();

        let primal_obj = dot(&x, |j| vec_c[(j, 0)]);
        let dual_obj = dot(&y, |i| vec_b[(i, 0)]);

        let mut primal_cons: Vec<_> = (0.. m).map(|i| {
            LinConstraint::new(dot(&x, |j| mat_a[(i, j)]), row_cmp, vec_b[(i, 0)])
        }).collect();
        primal_cons.extend(nonneg(&x));

        let mut dual_cons: Vec<_> = (0.. n).map(|j| {
            LinConstraint::new(dot(&y, |i| mat_a[(i, j)]), col_cmp, vec_c[(j, 0)])
        }).collect();
        dual_cons.extend(nonneg(&y));

        Self::new(primal_obj, primal_cons, dual_obj, dual_cons)
    }
}

// sum of coef(k) * names[k], skipping zeros
fn dot<F: Float, C: Fn(usize) -> F>(names: &[String], coef: C) -> LinExpr<F>
{
    let mut e = LinExpr::new();
    for (k, name) in names.iter().enumerate() {
        let a = coef(k);
        if !a.is_zero() {
            e.set_term(a, name);
        }
    }
    e
}

fn nonneg<F: Float>(names: &[String]) -> Vec<LinConstraint<F>>
{
    names.iter().map(|v| LinConstraint::ge(LinExpr::var(v), F::zero())).collect()
}

//

#[test]
fn test_probcert1()
{
    use crate::MatType;

    let vec_c = MatBuild::new(MatType::General(2, 1)).iter_colmaj(&[3., 4.]);
    let mat_a = MatBuild::new(MatType::General(3, 2)).iter_rowmaj(&[
         1.,  2.,
        -3.,  1.,
         1., -1.,
    ]);
    let vec_b = MatBuild::new(MatType::General(3, 1)).iter_colmaj(&[14., 0., 2.]);

    let prob = ProbCert::from_lp_max(&vec_c, &mat_a, &vec_b, "x", "y");

    assert_eq!(format!("{}", prob.primal_obj()), "3 x1 + 4 x2");
    assert_eq!(format!("{}", prob.dual_obj()), "14 y1 + 2 y3");
    assert_eq!(prob.cons(Side::Primal).len(), 3 + 2);
    assert_eq!(prob.cons(Side::Dual).len(), 2 + 3);
    assert_eq!(format!("{}", prob.cons(Side::Primal)[1]), "-3 x1 + 1 x2 <= 0");
    assert_eq!(format!("{}", prob.cons(Side::Dual)[0]), "1 y1 - 3 y2 + 1 y3 >= 3");
    assert_eq!(prob.cons(Side::Dual)[4].cmp, Cmp::Ge);
    assert!(prob.validate().is_ok());
}
