/*!
Optcert verifies **optimality certificates of LP/SDP** given as primal-dual solution pairs.

<script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
<script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>

A pair of primal and dual points is a certificate of optimality of both when
1. the primal point satisfies all primal constraints,
1. the dual point satisfies all dual constraints,
   including positive semidefiniteness of matrix variables for SDP,
1. the primal and dual objective values coincide, that is, no duality gap.

This crate only checks; finding the points is a job of a solver such as `totsu`.
Every comparison uses one tolerance \\(\varepsilon\\).
Positive semidefiniteness of a matrix variable \\(X\\) is not checked by eigenvalues
but by a lower-triangular factor \\(R\\) supplied with the solution:
\\(X = R R^T\\) entry-wise and \\(R_{ii} \ge\\) `diag_floor`.

# General usage

1. Express the primal and dual problems with [`LinExpr`] objectives and [`LinConstraint`]s,
   or let [`ProbCert::from_lp_max`] / [`ProbCert::from_lp_min`] derive the dual of an LP.
1. For SDP, add [`check::PsdPair`]s of a matrix variable and its factor, built with [`MatBuild`].
1. Collect the values of all variables from a solver into an [`Assignment`].
1. Create a [`Verifier`] instance and optionally set its parameters.
1. Invoke [`Verifier::verify`] to get a [`Certificate`].

Invalid certificates are not errors: [`Certificate::is_valid`] tells,
and [`Certificate::violations`] shows which constraint failed and by how much.
Only structurally broken input ends up with [`VerifyError`].

# Examples

An LP and its dual:
\\[
\begin{array}{ll}
{\rm maximize} & 3 x_1 + 4 x_2 \\\\
{\rm subject \ to} & x_1 + 2 x_2 \le 14, \\\\
& -3 x_1 + x_2 \le 0, \\\\
& x_1 - x_2 \le 2,
\end{array}
\qquad
\begin{array}{ll}
{\rm minimize} & 14 y_1 + 2 y_3 \\\\
{\rm subject \ to} & y_1 - 3 y_2 + y_3 \ge 3, \\\\
& 2 y_1 + y_2 - y_3 \ge 4.
\end{array}
\\]

```
use optcert::prelude::*;
use optcert::*;

//env_logger::init(); // Use any logger crate as `optcert` uses `log` crate.

let prob = ProbCert::new(
    LinExpr::new().term(3., "x1").term(4., "x2"),
    vec![
        LinConstraint::le(LinExpr::new().term(1., "x1").term(2., "x2"), 14.),
        LinConstraint::le(LinExpr::new().term(-3., "x1").term(1., "x2"), 0.),
        LinConstraint::le(LinExpr::new().term(1., "x1").term(-1., "x2"), 2.),
    ],
    LinExpr::new().term(14., "y1").term(2., "y3"),
    vec![
        LinConstraint::ge(LinExpr::new().term(1., "y1").term(-3., "y2").term(1., "y3"), 3.),
        LinConstraint::ge(LinExpr::new().term(2., "y1").term(1., "y2").term(-1., "y3"), 4.),
    ],
);

let asgn = Assignment::new()
           .var("x1", 6.).var("x2", 4.)
           .var("y1", 7. / 3.).var("y2", 0.).var("y3", 2. / 3.);

let v = Verifier::new().par(|p| {
    p.eps = 1e-9;
});
let cert = v.verify(&prob, &asgn).unwrap();

assert!(cert.is_valid());
```
*/

mod verify_error;

pub use verify_error::*;

//

mod matbuild;

pub use matbuild::*;

//

mod assignment;
mod linexpr;
mod constraint;

pub use assignment::*;
pub use linexpr::*;
pub use constraint::*;

//

pub mod check;

mod problem;
mod verifier;

pub use problem::*;
pub use verifier::*;

//

/// Prelude
pub mod prelude
{
    pub use crate::verifier::{Verifier, VerifierParam, Certificate};
    pub use crate::check::{PsdPair, Side, Violation};
    pub use crate::MatType;
}
