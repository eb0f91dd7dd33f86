// src/noyau/bernoulli.rs
//
// Formule classique par les nombres de Bernoulli :
//   S(p, n) = (1/(p+1)) Σ_k C(p+1, k) B(k) (n+1)^(p+1-k)
//
// Récurrence :
//   B(0) = 1
//   B(m) = -(C(m+1,0)B(0) + C(m+1,1)B(1) + ... + C(m+1,m-1)B(m-1)) / C(m+1,m)
// Les B(m) impairs au-delà de B(1) = -1/2 sont nuls.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::binomial::div_exacte;
use super::format::format_rat_pretty;
use super::methode::{chronometre, PowerSum, SumStats};

pub struct Bernoulli;

/// Seuls B(0), B(1) et les indices pairs sont non nuls.
fn rang_utile(k: usize) -> bool {
    k & 1 == 0 || k == 1
}

impl PowerSum for Bernoulli {
    fn coefficients(&self, power: i64) -> Vec<BigRational> {
        coefficients_bernoulli(power)
    }

    fn sum_formula(&self, power: i64) -> String {
        if power < 0 {
            return String::new();
        }

        let coeffs = coefficients_bernoulli(power);
        let mut binom = BigInt::one();
        let mut binom_n = power + 1;
        let mut binom_r = 1;
        let mut exposant = power + 1;

        let mut s = String::from("{ ");
        for (i, c) in coeffs.iter().enumerate() {
            if rang_utile(i) {
                if i != 0 {
                    s.push_str(" + ");
                }
                if !c.is_one() {
                    s.push_str(&format!("({})", format_rat_pretty(c)));
                }
                if !binom.is_one() {
                    s.push_str(&binom.to_string());
                }
                s.push_str("(n + 1)");
                if exposant != 1 {
                    s.push_str(&format!("^{exposant}"));
                }
            }
            exposant -= 1;
            binom = div_exacte(binom * binom_n, &BigInt::from(binom_r));
            binom_n -= 1;
            binom_r += 1;
        }
        s.push_str(" }");
        if power > 0 {
            s.push_str(&format!("/{}", power + 1));
        }
        s
    }

    fn compute_sum_with_stats(&self, power: i64, n: i64) -> (BigInt, SumStats) {
        if power < 0 || n < 0 {
            return (BigInt::zero(), SumStats::default());
        }
        chronometre(
            || coefficients_bernoulli(power),
            |coeffs| somme_bernoulli(&coeffs, power, n),
        )
    }
}

/// B(0), B(1), ..., B(power).
pub fn coefficients_bernoulli(power: i64) -> Vec<BigRational> {
    let mut coeffs = Vec::new();
    if power < 0 {
        return coeffs;
    }

    coeffs.push(BigRational::one());
    if power > 0 {
        coeffs.push(BigRational::new(BigInt::from(-1), BigInt::from(2)));
        for m in 2..=power {
            if m & 1 == 1 {
                coeffs.push(BigRational::zero());
            } else {
                let b = coefficient_suivant(&coeffs, m);
                coeffs.push(b);
            }
        }
    }
    coeffs
}

/// B(m) à partir de B(0..m). C(m+1, k) est mis à jour au fil de la boucle
/// (× (m+1-k), ÷ (k+1)) : O(m) par coefficient, O(p²) au total.
fn coefficient_suivant(courants: &[BigRational], m: i64) -> BigRational {
    let mut binom = BigInt::one();
    let mut acc = BigRational::zero();

    for k in 0..m {
        if rang_utile(k as usize) {
            acc += &courants[k as usize] * BigRational::from_integer(binom.clone());
        }
        binom = div_exacte(binom * (m + 1 - k), &BigInt::from(k + 1));
    }
    // binom vaut maintenant C(m+1, m)
    -acc / BigRational::from_integer(binom)
}

/// Termes pris en ordre inverse : C(p+1, k) et (n+1)^(p+1-k) ne font alors
/// que croître, et la seule division est celle par (p+1), en fin de boucle.
fn somme_bernoulli(coeffs: &[BigRational], power: i64, n: i64) -> BigInt {
    let base = BigInt::from(n + 1);
    let mut puiss = base.clone();
    let mut binom_n = power + 1;
    let mut binom_r = 1;
    let mut binom = BigInt::from(binom_n);

    let mut somme = BigRational::zero();
    for (i, c) in coeffs.iter().enumerate().rev() {
        if rang_utile(i) {
            somme += c * BigRational::from_integer(&binom * &puiss);
        }
        puiss *= &base;
        binom_n -= 1;
        binom_r += 1;
        binom = div_exacte(binom * binom_n, &BigInt::from(binom_r));
    }

    let somme = somme / BigRational::from_integer(BigInt::from(power + 1));
    debug_assert!(somme.is_integer(), "somme de Bernoulli non entière: {somme}");
    somme.to_integer()
}
