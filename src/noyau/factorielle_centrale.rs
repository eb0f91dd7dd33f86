// src/noyau/factorielle_centrale.rs
//
// Nombres factoriels centraux de seconde espèce (indices pairs seulement) :
//   T(2m, 2m) = 1
//   T(2m, 2k) = k²·T(2m-2, 2k) + T(2m-2, 2k-2)
//
//   p impair : S(p, n) = Σ_k T(p+1, 2k) · (n+k)(n+k-1)...(n-k+1) / (2k)
//   p pair   : S(p, n) = Σ_k T(p, 2k) · (2n+1)(n+k)...(n-k+1) / (2(2k+1))

use log::debug;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::binomial::{div_exacte, vers_rationnels};
use super::format::{format_coeff_entier, produit_descendant};
use super::methode::{chronometre, PowerSum, SumStats};

pub struct CentralFactorial;

/// Diviseur du terme k.
fn diviseur(puissance_paire: bool, k: i64) -> i64 {
    if puissance_paire {
        2 * (2 * k + 1)
    } else {
        2 * k
    }
}

impl PowerSum for CentralFactorial {
    fn coefficients(&self, power: i64) -> Vec<BigRational> {
        vers_rationnels(coefficients_factorielle_centrale(power, power))
    }

    fn sum_formula(&self, power: i64) -> String {
        if power < 0 {
            return String::new();
        }
        if power == 0 {
            // cas particulier, hors formule générale
            return "(n + 1)".to_string();
        }

        let paire = power & 1 == 0;
        let coeffs = coefficients_factorielle_centrale(power, power);
        // le coefficient 0 est toujours nul
        let termes: Vec<String> = coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(k, c)| {
                let k = k as i64;
                let mut terme = format_coeff_entier(c);
                if paire {
                    terme.push_str("(2n + 1)");
                }
                terme.push_str(&produit_descendant(k, 2 * k));
                terme.push_str(&format!("/{}", diviseur(paire, k)));
                terme
            })
            .collect();
        termes.join(" + ")
    }

    fn compute_sum_with_stats(&self, power: i64, n: i64) -> (BigInt, SumStats) {
        if power < 0 || n < 0 {
            return (BigInt::zero(), SumStats::default());
        }
        if power == 0 {
            return (BigInt::from(n + 1), SumStats::default());
        }
        chronometre(
            || coefficients_factorielle_centrale(power, n),
            |coeffs| somme_factorielle_centrale(&coeffs, power, n),
        )
    }
}

/// T(2m, 0), T(2m, 2), ..., T(2m, 2m) avec m = ⌈power/2⌉.
///
/// Tronqué à max_n + 1 coefficients : pour k > n le produit
/// (n+k)...(n-k+1) contient le facteur 0.
pub fn coefficients_factorielle_centrale(power: i64, max_n: i64) -> Vec<BigInt> {
    if power < 0 {
        return Vec::new();
    }

    let m = (power >> 1) + (power & 1);
    let nb = (m + 1).min(max_n + 1).max(0) as usize;
    if (nb as i64) < m + 1 {
        debug!("factorielle centrale p={power}: {nb} coefficient(s) sur {}", m + 1);
    }

    let mut coeffs = vec![BigInt::zero(); nb];
    // T(2i-2, 2k-2) : ancienne valeur de la case précédente
    let mut t_2_2 = BigInt::zero();

    for i in 0..=m {
        for (k, case) in coeffs.iter_mut().enumerate() {
            let k = k as i64;
            let t = if i == k {
                BigInt::one()
            } else if i > 0 && k > 0 {
                BigInt::from(k * k) * &*case + &t_2_2
            } else {
                BigInt::zero()
            };
            t_2_2 = std::mem::replace(case, t);
        }
    }
    coeffs
}

fn somme_factorielle_centrale(coeffs: &[BigInt], power: i64, n: i64) -> BigInt {
    let paire = power & 1 == 0;
    let mut somme = BigInt::zero();
    let mut descendante = BigInt::one();

    for (k, c) in coeffs.iter().enumerate().skip(1) {
        let k = k as i64;
        descendante *= n + k;
        descendante *= n - k + 1;

        let mut terme = c * &descendante;
        if paire {
            terme *= 2 * n + 1;
        }
        somme += div_exacte(terme, &BigInt::from(diviseur(paire, k)));
    }
    somme
}
