//! Tests croisés : les cinq méthodes contre l’oracle (série), plus les bords.
//!
//! Invariant principal : pour tout p, n ≥ 0, les cinq formules et la série
//! donnent la même somme.

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use super::{somme_par_serie, Method, PowerSum};

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

fn rat(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

/* ------------------------ Accord entre méthodes ------------------------ */

#[test]
fn accord_toutes_methodes_0_a_50() {
    let t0 = Instant::now();
    let max = Duration::from_secs(60);

    for p in 0..=50 {
        for n in 0..=50 {
            let attendu = somme_par_serie(p, n);
            for m in Method::ALL {
                assert_eq!(m.compute_sum(p, n), attendu, "{} p={p} n={n}", m.title());
            }
        }
        budget(t0, max);
    }
}

#[test]
fn accord_grandes_puissances_petits_n() {
    // troncature Stirling / Euler / factorielles centrales
    for p in [60, 75, 100] {
        for n in 0..=4 {
            let attendu = somme_par_serie(p, n);
            for m in Method::ALL {
                assert_eq!(m.compute_sum(p, n), attendu, "{} p={p} n={n}", m.title());
            }
        }
    }
}

#[test]
fn accord_grand_n() {
    let n = 1000;
    for p in [0, 1, 2, 7, 12] {
        let attendu = somme_par_serie(p, n);
        for m in Method::ALL {
            assert_eq!(m.compute_sum(p, n), attendu, "{} p={p}", m.title());
        }
    }
}

/* ------------------------ Valeurs connues ------------------------ */

#[test]
fn valeurs_connues() {
    for m in Method::ALL {
        assert_eq!(m.compute_sum(2, 10), BigInt::from(385), "{}", m.title());
        assert_eq!(m.compute_sum(3, 4), BigInt::from(100), "{}", m.title());
        assert_eq!(m.compute_sum(1, 100), BigInt::from(5050), "{}", m.title());
    }
}

/* ------------------------ Bords ------------------------ */

#[test]
fn puissance_zero() {
    for m in Method::ALL {
        for n in 0..30 {
            assert_eq!(m.compute_sum(0, n), BigInt::from(n + 1), "{} n={n}", m.title());
        }
    }
}

#[test]
fn zero_terme() {
    for m in Method::ALL {
        assert_eq!(m.compute_sum(0, 0), BigInt::from(1), "{}", m.title());
        for p in 1..30 {
            assert!(m.compute_sum(p, 0).is_zero(), "{} p={p}", m.title());
        }
    }
}

#[test]
fn domaine_negatif() {
    for m in Method::ALL {
        assert!(m.compute_sum(-1, 10).is_zero(), "{}", m.title());
        assert!(m.compute_sum(3, -1).is_zero(), "{}", m.title());
        assert!(m.compute_sum(-2, -2).is_zero(), "{}", m.title());
        assert!(m.coefficients(-1).is_empty(), "{}", m.title());
        assert!(m.sum_formula(-1).is_empty(), "{}", m.title());
        assert!(m.compute_sum_using_series(-1, 4).is_zero(), "{}", m.title());

        let (s, stats) = m.compute_sum_with_stats(-3, 5);
        assert!(s.is_zero());
        assert_eq!(stats.total(), Duration::ZERO);
    }
}

/* ------------------------ Coefficients ------------------------ */

#[test]
fn coefficients_par_methode() {
    assert_eq!(
        Method::Bernoulli.coefficients(2),
        vec![rat(1, 1), rat(-1, 2), rat(1, 6)]
    );
    assert_eq!(
        Method::Faulhaber.coefficients(5),
        vec![rat(1, 3), rat(-1, 6)]
    );
    assert_eq!(
        Method::Stirling.coefficients(3),
        vec![rat(0, 1), rat(1, 1), rat(3, 1), rat(1, 1)]
    );
    assert_eq!(
        Method::Euler.coefficients(3),
        vec![rat(1, 1), rat(4, 1), rat(1, 1), rat(0, 1)]
    );
    assert_eq!(
        Method::CentralFactorial.coefficients(5),
        vec![rat(0, 1), rat(1, 1), rat(5, 1), rat(1, 1)]
    );
}

#[test]
fn coefficients_longueurs() {
    for p in 1..20i64 {
        assert_eq!(Method::Bernoulli.coefficients(p).len() as i64, p + 1);
        assert_eq!(Method::Stirling.coefficients(p).len() as i64, p + 1);
        assert_eq!(Method::Euler.coefficients(p).len() as i64, p + 1);
        let m = (p + 1) / 2;
        assert_eq!(Method::CentralFactorial.coefficients(p).len() as i64, m + 1);
    }
}

#[test]
fn coefficients_deterministes() {
    for m in Method::ALL {
        assert_eq!(m.coefficients(17), m.coefficients(17), "{}", m.title());
    }
}

/* ------------------------ Formules ------------------------ */

#[test]
fn formules_non_vides() {
    for m in Method::ALL {
        for p in 0..10 {
            assert!(!m.sum_formula(p).trim().is_empty(), "{} p={p}", m.title());
        }
    }
}

#[test]
fn ordre_et_titres() {
    let titres: Vec<&str> = Method::ALL.iter().map(|m| m.title()).collect();
    assert_eq!(
        titres,
        ["Faulhaber", "Bernoulli", "Stirling", "Euler", "Central Factorial"]
    );
}
