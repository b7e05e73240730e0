use float_eq::assert_float_eq;
use optcert::prelude::*;
use optcert::*;

type AMatBuild = MatBuild<f64>;
type AMatExpr = MatExpr<f64>;
type AProbCert = ProbCert<f64>;
type AVerifier = Verifier<f64>;

//

// x11 x12
// x21 x22
fn mat_x() -> AMatExpr
{
    AMatExpr::new(MatType::General(2, 2))
    .by_fn(|r, c| LinExpr::var(&format!("x{}{}", r + 1, c + 1)))
}

// r11  0
// r12 r22
fn factor_r() -> AMatExpr
{
    AMatExpr::new(MatType::General(2, 2))
    .by_fn(|r, c| if r >= c {LinExpr::var(&format!("r{}{}", c + 1, r + 1))} else {LinExpr::new()})
}

fn prob_psd_only() -> AProbCert
{
    AProbCert::new(LinExpr::new(), Vec::new(), LinExpr::new(), Vec::new())
    .psd(PsdPair::new(mat_x(), factor_r()))
}

//

#[test]
fn test_sdp1()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let asgn = Assignment::new()
               .var("r11", 1.).var("r12", 0.).var("r22", 1.)
               .var("x11", 1.).var("x12", 0.).var("x21", 0.).var("x22", 1.);

    let v = AVerifier::new().par(|p| {
        p.eps = 1e-9;
        p.diag_floor = 1e-4;
    });
    let cert = v.verify(&prob_psd_only(), &asgn).unwrap();
    println!("{}", cert);

    assert_eq!(cert.psd_certified, Some(true));
    assert!(cert.is_valid());
}

//

#[test]
fn test_sdp2()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let r11 = 0.00001;
    let asgn = Assignment::new()
               .var("r11", r11).var("r12", 0.).var("r22", 1.)
               .var("x11", r11 * r11).var("x12", 0.).var("x21", 0.).var("x22", 1.);

    let v = AVerifier::new().par(|p| {
        p.eps = 1e-9;
        p.diag_floor = 0.0001;
    });
    let cert = v.verify(&prob_psd_only(), &asgn).unwrap();
    println!("{}", cert);

    assert_eq!(cert.psd_certified, Some(false));
    assert!(!cert.is_valid());
    assert_eq!(cert.violations, vec![
        Violation::PsdDiag { block: 0, index: 0, value: r11, floor: 0.0001 },
    ]);
}

//

#[test]
fn test_sdp3()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // minimize <I, X> s.t. X11 = 1, X22 = 1, X >= 0
    // maximize y1 + y2 s.t. I - y1 E11 - y2 E22 >= 0 (diagonal, so entry-wise)
    let vec_c = AMatBuild::new(MatType::SymPack(2)).iter_rowmaj(&[
        1., 0.,
        0., 1.,
    ]);
    let e11 = AMatBuild::new(MatType::SymPack(2)).iter_rowmaj(&[
        1., 0.,
        0., 0.,
    ]);
    let e22 = AMatBuild::new(MatType::SymPack(2)).iter_rowmaj(&[
        0., 0.,
        0., 1.,
    ]);

    let prob = AProbCert::new(
        LinExpr::frobenius(&vec_c, &mat_x()),
        vec![
            LinConstraint::equal(LinExpr::frobenius(&e11, &mat_x()), 1.),
            LinConstraint::equal(LinExpr::frobenius(&e22, &mat_x()), 1.),
        ],
        LinExpr::var("y1").term(1., "y2"),
        vec![
            LinConstraint::ge(LinExpr::constant(1.).term(-1., "y1"), 0.),
            LinConstraint::ge(LinExpr::constant(1.).term(-1., "y2"), 0.),
        ],
    ).psd(PsdPair::new(mat_x(), factor_r()));

    let asgn = Assignment::new()
               .var("x11", 1.).var("x12", 0.).var("x21", 0.).var("x22", 1.)
               .var("r11", 1.).var("r12", 0.).var("r22", 1.)
               .var("y1", 1.).var("y2", 1.);

    let v = AVerifier::new().par(|p| {p.eps = 1e-9});
    let cert = v.verify(&prob, &asgn).unwrap();
    println!("{}", cert);

    assert!(cert.is_valid());

    // off-diagonal moves keep the objective but the factor no longer matches
    let asgn = asgn.var("x12", 0.5).var("x21", 0.5);
    let cert = v.verify(&prob, &asgn).unwrap();
    println!("{}", cert);

    assert!(cert.primal_feasible && cert.dual_feasible && cert.zero_gap);
    assert_eq!(cert.psd_certified, Some(false));
    assert_eq!(cert.violations.len(), 2); // (1, 0) and (0, 1)
}

//

#[test]
fn test_sdp4()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // dual slack S = 2I - y1 E11 - y2 E22 written with affine entries
    let mat_s = AMatExpr::new(MatType::SymPack(2)).by_fn(|r, c| {
        if r == c {
            LinExpr::constant(2.).term(-1., &format!("y{}", r + 1))
        }
        else {
            LinExpr::new()
        }
    });
    let factor_l = AMatExpr::new(MatType::General(2, 2))
                   .by_fn(|r, c| if r >= c {LinExpr::var(&format!("l{}{}", c + 1, r + 1))} else {LinExpr::new()});

    let prob = AProbCert::new(
        LinExpr::new().term(2., "x11").term(2., "x22"),
        vec![
            LinConstraint::equal(LinExpr::var("x11"), 1.),
            LinConstraint::equal(LinExpr::var("x22"), 1.),
        ],
        LinExpr::var("y1").term(1., "y2"),
        Vec::new(),
    )
    .psd(PsdPair::new(mat_x(), factor_r()))
    .psd(PsdPair::new(mat_s, factor_l));

    let asgn = Assignment::new()
               .var("x11", 1.).var("x12", 0.).var("x21", 0.).var("x22", 1.)
               .var("r11", 1.).var("r12", 0.).var("r22", 1.)
               .var("y1", 1.).var("y2", 1.)
               .var("l11", 1.).var("l12", 0.).var("l22", 1.);

    let cert = AVerifier::new().verify(&prob, &asgn).unwrap();
    println!("{}", cert);

    // both blocks are strictly feasible, so the pair is not optimal
    assert_eq!(cert.psd_certified, Some(true));
    assert!(!cert.zero_gap);
    match cert.violations.as_slice() {
        [Violation::Gap { primal, dual, .. }] => {
            assert_float_eq!(*primal, 4., abs <= 1e-12);
            assert_float_eq!(*dual, 2., abs <= 1e-12);
        },
        v => panic!("unexpected {:?}", v),
    }
}

//

#[test]
fn test_sdp5()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // trace constraints with the coefficients of a 2x2 instance
    let sym_a1 = AMatBuild::new(MatType::SymPack(2)).iter_rowmaj(&[
        -0.9989,  0.1441,
         0.1441, -0.7374,
    ]);
    let sym_a2 = AMatBuild::new(MatType::SymPack(2)).iter_rowmaj(&[
         0.1405, -0.1771,
        -0.1771,  0.4986,
    ]);
    let sym_c = AMatBuild::new(MatType::SymPack(2)).iter_rowmaj(&[
        -0.1983, -0.5462,
        -0.5462,  0.2918,
    ]);
    let (b1, b2) = (-2.3831, 0.8521);

    // diagonal X solving both equalities by Cramer's rule
    let det = sym_a1[(0, 0)] * sym_a2[(1, 1)] - sym_a1[(1, 1)] * sym_a2[(0, 0)];
    let x11 = (b1 * sym_a2[(1, 1)] - sym_a1[(1, 1)] * b2) / det;
    let x22 = (sym_a1[(0, 0)] * b2 - b1 * sym_a2[(0, 0)]) / det;
    assert!(x11 > 0. && x22 > 0.);

    let prob = AProbCert::new(
        LinExpr::frobenius(&sym_c, &mat_x()),
        vec![
            LinConstraint::equal(LinExpr::frobenius(&sym_a1, &mat_x()), b1),
            LinConstraint::equal(LinExpr::frobenius(&sym_a2, &mat_x()), b2),
        ],
        LinExpr::new(),
        Vec::new(),
    ).psd(PsdPair::new(mat_x(), factor_r()));

    let asgn = Assignment::new()
               .var("x11", x11).var("x12", 0.).var("x21", 0.).var("x22", x22)
               .var("r11", x11.sqrt()).var("r12", 0.).var("r22", x22.sqrt());

    let cert = AVerifier::new().par(|p| {p.eps = 1e-9}).verify(&prob, &asgn).unwrap();
    println!("{}", cert);

    assert!(cert.primal_feasible);
    assert_eq!(cert.psd_certified, Some(true));
    // no dual point supplied
    assert!(!cert.zero_gap);
}

//

#[test]
fn test_sdp6()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let asgn = Assignment::new()
               .var("r11", 1.).var("r12", 0.).var("r22", 1.)
               .var("x11", 1.).var("x12", 0.).var("x21", 0.).var("x22", 1.);

    // upper entry of the factor
    let mut r = factor_r();
    r[(0, 1)] = LinExpr::var("r12");
    let prob = AProbCert::new(LinExpr::new(), Vec::new(), LinExpr::new(), Vec::new())
               .psd(PsdPair::new(mat_x(), factor_r()))
               .psd(PsdPair::new(mat_x(), r));

    let rslt = AVerifier::new().verify(&prob, &asgn).unwrap_err();
    println!("{}", rslt);

    assert_eq!(rslt, VerifyError::MalformedProblem(Malformed::NonTriangularFactor { block: 1, row: 0, col: 1 }));
}
