use num_traits::Float;
use crate::{Assignment, MatBuild, VerifyError};

//

/// Affine expression
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// \\( \sum_i a_i v_i + a_0 \\) over named scalar variables \\( v_i \\).
/// Terms keep the order they are added in; a variable may appear more than once.
#[derive(Debug, Clone, PartialEq)]
pub struct LinExpr<F: Float>
{
    terms: Vec<(String, F)>,
    offset: F,
}

/// Matrix of affine expressions, such as a matrix variable or its factor.
pub type MatExpr<F> = MatBuild<LinExpr<F>>;

impl<F: Float> LinExpr<F>
{
    /// Creates a zero expression.
    pub fn new() -> Self
    {
        LinExpr {
            terms: Vec::new(),
            offset: F::zero(),
        }
    }

    /// Creates an expression of a single variable with a unit coefficient.
    pub fn var(name: &str) -> Self
    {
        Self::new().term(F::one(), name)
    }

    /// Creates a constant expression.
    pub fn constant(offset: F) -> Self
    {
        Self::new().offset(offset)
    }

    /// Adds a term.
    ///
    /// * `coef` is a coefficient.
    /// * `name` is an identifier of the variable.
    pub fn set_term(&mut self, coef: F, name: &str)
    {
        self.terms.push((name.to_string(), coef));
    }
    /// Builder pattern of [`LinExpr::set_term`].
    pub fn term(mut self, coef: F, name: &str) -> Self
    {
        self.set_term(coef, name);
        self
    }

    /// Adds to the constant offset.
    pub fn set_offset(&mut self, offset: F)
    {
        self.offset = self.offset + offset;
    }
    /// Builder pattern of [`LinExpr::set_offset`].
    pub fn offset(mut self, offset: F) -> Self
    {
        self.set_offset(offset);
        self
    }

    /// Adds all terms and the offset of another expression scaled by `alpha`.
    pub fn set_add(&mut self, alpha: F, other: &LinExpr<F>)
    {
        for (name, coef) in other.terms.iter() {
            self.set_term(alpha * *coef, name);
        }
        self.set_offset(alpha * other.offset);
    }
    /// Builder pattern of [`LinExpr::set_add`].
    pub fn add(mut self, alpha: F, other: &LinExpr<F>) -> Self
    {
        self.set_add(alpha, other);
        self
    }

    /// Terms as pairs of a variable name and a coefficient.
    pub fn terms(&self) -> &[(String, F)]
    {
        &self.terms
    }

    /// Checks if identically zero, that is, every coefficient and the offset are zero.
    pub fn is_zero(&self) -> bool
    {
        self.offset.is_zero() && self.terms.iter().all(|(_, a)| a.is_zero())
    }

    /// Checks if every coefficient and the offset are finite.
    pub fn is_finite(&self) -> bool
    {
        self.offset.is_finite() && self.terms.iter().all(|(_, a)| a.is_finite())
    }

    /// Evaluates with an assignment.
    ///
    /// Returns the value or `Err` with [`VerifyError::UnboundVariable`]
    /// for the first term whose variable is not assigned.
    pub fn eval(&self, asgn: &Assignment<F>) -> Result<F, VerifyError>
    {
        let mut sum = F::zero();
        for (name, coef) in self.terms.iter() {
            sum = sum + *coef * asgn.value(name)?;
        }
        Ok(sum + self.offset)
    }

    /// Frobenius inner product \\( \langle A, X \rangle = \sum_{i,j} A_{ij} X_{ij} \\).
    ///
    /// Returns an expression of a coefficient matrix `coef` and a matrix of expressions `mat`,
    /// such as a trace constraint of SDP.
    /// Both shall have the same size; symmetric packed ones are expanded to full.
    pub fn frobenius(coef: &MatBuild<F>, mat: &MatExpr<F>) -> Self
    {
        assert_eq!(coef.size(), mat.size());
        let (nr, nc) = coef.size();

        let mut e = Self::new();
        for c in 0.. nc {
            for r in 0.. nr {
                let a = coef[(r, c)];
                if !a.is_zero() {
                    e.set_add(a, &mat[(r, c)]);
                }
            }
        }
        e
    }
}

impl<F: Float> Default for LinExpr<F>
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl<F: Float + core::fmt::Display> core::fmt::Display for LinExpr<F>
{
    fn fmt(&self, f: &mut core::fmt::Formatter) -> Result<(), core::fmt::Error>
    {
        let mut first = true;
        for (name, coef) in self.terms.iter() {
            if first {
                write!(f, "{} {}", coef, name)?;
                first = false;
            }
            else if coef.is_sign_negative() {
                write!(f, " - {} {}", coef.abs(), name)?;
            }
            else {
                write!(f, " + {} {}", coef, name)?;
            }
        }

        if first {
            write!(f, "{}", self.offset)?;
        }
        else if !self.offset.is_zero() {
            if self.offset.is_sign_negative() {
                write!(f, " - {}", self.offset.abs())?;
            }
            else {
                write!(f, " + {}", self.offset)?;
            }
        }

        Ok(())
    }
}

//

#[test]
fn test_linexpr1()
{
    use float_eq::assert_float_eq;

    let asgn = Assignment::new().var("x1", 2.).var("x2", 6.);

    let e = LinExpr::new().term(3., "x1").term(4., "x2").offset(-1.);
    assert_float_eq!(e.eval(&asgn).unwrap(), 29., abs <= 1e-12);
    assert_eq!(format!("{}", e), "3 x1 + 4 x2 - 1");

    let e = LinExpr::var("x1").term(-1., "x1");
    assert_float_eq!(e.eval(&asgn).unwrap(), 0., abs <= 1e-12);
    assert!(!e.is_zero());
    assert!(LinExpr::<f64>::new().is_zero());

    let e = LinExpr::var("x3");
    assert_eq!(e.eval(&asgn), Err(VerifyError::UnboundVariable("x3".into())));
}

#[test]
fn test_linexpr2()
{
    use float_eq::assert_float_eq;
    use crate::MatType;

    let x = MatExpr::<f64>::new(MatType::General(2, 2))
            .by_fn(|r, c| LinExpr::var(&format!("x{}{}", r + 1, c + 1)));
    let a = MatBuild::new(MatType::SymPack(2)).iter_rowmaj(&[
        -0.9989,  0.1441,
         0.1441, -0.7374,
    ]);

    let e = LinExpr::frobenius(&a, &x);
    assert_eq!(e.terms().len(), 4);

    let asgn = Assignment::new()
               .var("x11", 1.).var("x12", 0.5).var("x21", 0.5).var("x22", 2.);
    assert_float_eq!(e.eval(&asgn).unwrap(), -0.9989 + 0.1441 - 2. * 0.7374, abs <= 1e-12);
}
