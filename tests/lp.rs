use optcert::prelude::*;
use optcert::*;

type AMatBuild = MatBuild<f64>;
type AProbCert = ProbCert<f64>;
type AVerifier = Verifier<f64>;

//

// maximize 3 x1 + 4 x2 with its dual, as written out by hand
fn prob_max() -> AProbCert
{
    AProbCert::new(
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
    )
}

fn dual_opt() -> Assignment<f64>
{
    Assignment::new().var("y1", 7. / 3.).var("y2", 0.).var("y3", 2. / 3.)
}

//

#[test]
fn test_lp1()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let asgn = dual_opt().var("x1", 6.).var("x2", 4.);

    let v = AVerifier::new().par(|p| {p.eps = 1e-9});
    let cert = v.verify(&prob_max(), &asgn).unwrap();
    println!("{}", cert);

    assert_eq!(cert, Certificate {
        primal_feasible: true,
        dual_feasible: true,
        zero_gap: true,
        psd_certified: None,
        violations: Vec::new(),
    });
}

//

#[test]
fn test_lp2()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let asgn = dual_opt().var("x1", 10.).var("x2", 10.);

    let v = AVerifier::new().par(|p| {p.eps = 1e-9});
    let cert = v.verify(&prob_max(), &asgn).unwrap();
    println!("{}", cert);

    assert!(!cert.primal_feasible);
    assert!(cert.dual_feasible);
    assert!(!cert.is_valid());
    // x1 + 2 x2 <= 14 is the first one
    match cert.violations[0] {
        Violation::Constraint { side: Side::Primal, index: 0, excess } => assert!(excess > 15.),
        ref v => panic!("unexpected {:?}", v),
    }
}

//

#[test]
fn test_lp3()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // feasible primal, but not a dual point nor an optimal pair
    let asgn = Assignment::new()
               .var("x1", 2.).var("x2", 6.)
               .var("y1", 3.).var("y2", 1.).var("y3", 4.);

    let cert = AVerifier::new().verify(&prob_max(), &asgn).unwrap();
    println!("{}", cert);

    assert!(cert.primal_feasible);
    assert!(!cert.dual_feasible); // 2 y1 + y2 - y3 = 3 < 4
    assert!(!cert.zero_gap);      // 30 vs 50
    assert!(!cert.is_valid());
}

//

#[test]
fn test_lp4()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let asgn = Assignment::new()
               .var("x1", 6.).var("x2", 4.)
               .var("y1", 7. / 3.).var("y2", 0.);

    let rslt = AVerifier::new().verify(&prob_max(), &asgn).unwrap_err();
    println!("{}", rslt);

    assert_eq!(rslt, VerifyError::UnboundVariable("y3".into()));
}

//

#[test]
fn test_lp5()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let vec_c = AMatBuild::new(MatType::General(2, 1)).iter_colmaj(&[
        3., 4.,
    ]);
    let mat_a = AMatBuild::new(MatType::General(3, 2)).iter_rowmaj(&[
         1.,  2.,
        -3.,  1.,
         1., -1.,
    ]);
    let vec_b = AMatBuild::new(MatType::General(3, 1)).iter_colmaj(&[
        14., 0., 2.,
    ]);

    let prob = AProbCert::from_lp_max(&vec_c, &mat_a, &vec_b, "x", "y");
    let v = AVerifier::new().par(|p| {p.eps = 1e-9});

    let asgn = dual_opt().var("x1", 6.).var("x2", 4.);
    assert!(v.verify(&prob, &asgn).unwrap().is_valid());

    // a negative multiplier breaks y >= 0 added by the builder
    let asgn = asgn.var("y2", -1.);
    let cert = v.verify(&prob, &asgn).unwrap();
    assert!(!cert.dual_feasible);
    assert!(cert.violations.iter().any(|v| matches!(v, Violation::Constraint { side: Side::Dual, index: 3, .. })));
}

//

#[test]
fn test_lp6()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // minimize x1 + 2 x2 s.t. diet constraints
    let vec_c = AMatBuild::new(MatType::General(2, 1)).iter_colmaj(&[
        1., 2.,
    ]);
    let mat_g = AMatBuild::new(MatType::General(3, 2)).iter_rowmaj(&[
         50., 250.,
        240.,  80.,
          1.,   1.,
    ]);
    let vec_h = AMatBuild::new(MatType::General(3, 1)).iter_colmaj(&[
        500., 960., 6.,
    ]);

    let prob = AProbCert::from_lp_min(&vec_c, &mat_g, &vec_h, "x", "y");
    let v = AVerifier::new().par(|p| {p.eps = 1e-9});

    let asgn = Assignment::new()
               .var("x1", 5.).var("x2", 1.)
               .var("y1", 0.005).var("y2", 0.).var("y3", 0.75);
    let cert = v.verify(&prob, &asgn).unwrap();
    println!("{}", cert);
    assert!(cert.is_valid());

    // feasible vertex, but not optimal: objective 9 while the dual still gives 7
    let asgn = asgn.var("x1", 3.).var("x2", 3.);
    let cert = v.verify(&prob, &asgn).unwrap();
    println!("{}", cert);
    assert!(cert.primal_feasible && cert.dual_feasible);
    assert!(!cert.zero_gap);
}
