// src/noyau/binomial.rs
//
// Coefficients binomiaux exacts + petits utilitaires entiers partagés
// par les cinq méthodes.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

/// Division entière dont l’exactitude est garantie par construction
/// (récurrences, triangle de Pascal, factorielles descendantes).
/// Un reste non nul ici est un défaut d’algorithme, pas une erreur d’exécution.
pub fn div_exacte(a: BigInt, d: &BigInt) -> BigInt {
    debug_assert!(!d.is_zero(), "division exacte par zéro");
    debug_assert!((&a % d).is_zero(), "division non exacte: {a} / {d}");
    a / d
}

/// C(n, r) exact. 0 si r > n (ou si l’un des deux est négatif).
///
/// Symétrie : r = min(r, n - r), puis formule multiplicative
/// `res = res * (n - i + 1) / i` pour i = 2..=r ; chaque quotient
/// intermédiaire est lui-même un binomial C(n, i), donc entier.
pub fn n_cr(n: i64, r: i64) -> BigInt {
    if r < 0 || n < 0 || r > n {
        return BigInt::zero();
    }
    let r = r.min(n - r);
    if r == 0 {
        return BigInt::one();
    }

    let mut res = BigInt::from(n);
    let mut num = n;
    for i in 2..=r {
        num -= 1;
        res *= num;
        res = div_exacte(res, &BigInt::from(i));
    }
    res
}

/// Promotion entier -> rationnel, élément par élément.
pub fn vers_rationnels(coeffs: Vec<BigInt>) -> Vec<BigRational> {
    coeffs.into_iter().map(BigRational::from_integer).collect()
}
