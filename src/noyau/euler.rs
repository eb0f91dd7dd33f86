// src/noyau/euler.rs
//
// Nombres eulériens (première espèce) et identité de Worpitzky :
//   E(i, 0) = 1
//   E(i, j) = (j + 1)·E(i-1, j) + (i - j)·E(i-1, j-1)
//
//   S(p, n) = Σ_j E(p, j) · C(n + j + 1, p + 1)

use log::debug;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::binomial::{div_exacte, n_cr, vers_rationnels};
use super::format::{format_coeff_entier, produit_descendant};
use super::methode::{chronometre, PowerSum, SumStats};

pub struct Euler;

impl PowerSum for Euler {
    fn coefficients(&self, power: i64) -> Vec<BigRational> {
        vers_rationnels(coefficients_euler(power, power))
    }

    fn sum_formula(&self, power: i64) -> String {
        if power < 0 {
            return String::new();
        }

        let coeffs = coefficients_euler(power, power);
        let termes: Vec<String> = coeffs
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_positive())
            .map(|(j, c)| format_coeff_entier(c) + &produit_descendant(j as i64 + 1, power + 1))
            .collect();

        // (power + 1)!
        let factorielle: BigInt = (2..=power + 1).map(BigInt::from).product();

        let mut s = format!("{{ {} }}", termes.join(" + "));
        if !factorielle.is_one() {
            s.push_str(&format!("/{factorielle}"));
        }
        s
    }

    fn compute_sum_with_stats(&self, power: i64, n: i64) -> (BigInt, SumStats) {
        if power < 0 || n < 0 {
            return (BigInt::zero(), SumStats::default());
        }
        chronometre(
            || coefficients_euler(power, n),
            |coeffs| somme_euler(&coeffs, power, n),
        )
    }
}

/// E(power, 0..=power), E(power, power) = 0 (pour power > 0).
///
/// La ligne est symétrique par rapport à son centre : seule la première moitié
/// passe par la récurrence, le reste est recopié en miroir.
/// `max_n` borne la demi-ligne calculée ; les entrées miroir au-delà de la
/// borne ne sont alors pas significatives, mais ce sont exactement les termes
/// dont la factorielle descendante s’annule pour ce n.
pub fn coefficients_euler(power: i64, max_n: i64) -> Vec<BigInt> {
    if power < 0 {
        return Vec::new();
    }

    let mut coeffs = vec![BigInt::zero(); power as usize + 1];
    coeffs[0] = BigInt::one();

    // E(i-1, j-1) de la ligne précédente
    let mut e_i1_j1 = BigInt::one();

    for i in 1..=power {
        let impaire = i & 1 == 1;
        let demi = i >> 1;
        let demi_limite = if impaire { demi } else { demi - 1 };
        let limite = demi_limite.min(max_n);
        if limite < demi_limite {
            debug!("euler i={i}: demi-ligne tronquée à {limite} (n={max_n})");
        }

        // Gauche -> droite : l’ancienne valeur de coeffs[j] devient E(i-1, j-1)
        // pour la case suivante.
        for j in 0..=limite {
            let ju = j as usize;
            if j == 0 {
                e_i1_j1 = std::mem::replace(&mut coeffs[0], BigInt::one());
            } else {
                e_i1_j1 *= i - j;
                let e_ij = &coeffs[ju] * (j + 1) + &e_i1_j1;
                e_i1_j1 = std::mem::replace(&mut coeffs[ju], e_ij);
            }
        }

        // Recopie miroir autour du centre
        let centre = demi_limite as usize;
        let iu = i as usize;
        let mut k = 1usize;
        while centre + k < iu {
            let source = if impaire { centre - k } else { centre + 1 - k };
            coeffs[centre + k] = coeffs[source].clone();
            k += 1;
        }
        coeffs[iu] = BigInt::zero();
    }
    coeffs
}

/// Seuls les termes avec n + j ≥ p contribuent. Le premier utilise
/// C(n + j + 1, p + 1) directement, les suivants le mettent à jour
/// (× (n + j + 1), ÷ (n + j - p)).
fn somme_euler(coeffs: &[BigInt], power: i64, n: i64) -> BigInt {
    let mut somme = BigInt::zero();
    let mut binom: Option<BigInt> = None;

    for (j, c) in coeffs.iter().enumerate() {
        let j = j as i64;
        if n + j < power {
            continue;
        }
        let b = match binom.take() {
            None => n_cr(n + j + 1, power + 1),
            Some(b) => div_exacte(b * (n + j + 1), &BigInt::from(n + j - power)),
        };
        somme += c * &b;
        binom = Some(b);
    }
    somme
}
