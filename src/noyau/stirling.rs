// src/noyau/stirling.rs
//
// Nombres de Stirling de seconde espèce :
//   S(0, 0) = 1
//   S(m, 0) = 0            pour m > 0
//   S(m, j) = 0            pour j > m
//   S(m, j) = S(m-1, j-1) + j·S(m-1, j)
//
//   S(p, n) = Σ_t S(p, t) · (n+1)n(n-1)...(n-t+1) / (t+1)

use log::debug;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::binomial::{div_exacte, vers_rationnels};
use super::format::{format_coeff_entier, produit_descendant};
use super::methode::{chronometre, PowerSum, SumStats};

pub struct Stirling;

impl PowerSum for Stirling {
    fn coefficients(&self, power: i64) -> Vec<BigRational> {
        vers_rationnels(coefficients_stirling(power, power + 1))
    }

    fn sum_formula(&self, power: i64) -> String {
        if power < 0 {
            return String::new();
        }

        let coeffs = coefficients_stirling(power, power + 1);
        let termes: Vec<String> = coeffs
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .map(|(t, c)| {
                let t = t as i64;
                let mut terme = format_coeff_entier(c);
                terme.push_str(&produit_descendant(1, t + 1));
                if t > 0 {
                    terme.push_str(&format!("/{}", t + 1));
                }
                terme
            })
            .collect();
        termes.join(" + ")
    }

    fn compute_sum_with_stats(&self, power: i64, n: i64) -> (BigInt, SumStats) {
        if power < 0 || n < 0 {
            return (BigInt::zero(), SumStats::default());
        }
        chronometre(
            || coefficients_stirling(power, n + 1),
            |coeffs| somme_stirling(&coeffs, n),
        )
    }
}

/// S(power, 0..=power) dans un seul tableau roulant.
///
/// `max_coeffs` borne les termes calculés : au-delà de n + 1, la factorielle
/// descendante du terme est nulle, le coefficient ne sert à rien.
/// Les entrées au-delà de la borne restent à 0.
pub fn coefficients_stirling(power: i64, max_coeffs: i64) -> Vec<BigInt> {
    if power < 0 {
        return Vec::new();
    }
    if power == 0 {
        return vec![BigInt::one()];
    }

    let taille = power as usize + 1;
    let mut coeffs = vec![BigInt::zero(); taille];
    let borne = taille.min(max_coeffs.max(0) as usize + 1);
    if borne < taille {
        debug!("stirling p={power}: {} terme(s) sur {taille} calculés", borne - 1);
    }

    // S(m-1, j-1) de la ligne précédente ; au départ S(0, 0)
    let mut s_m1_j1 = BigInt::one();
    for _m in 1..=power {
        // Parcours gauche -> droite : coeffs[j] est lu avant d’être écrasé,
        // et sa valeur d’avant est gardée pour le terme j + 1.
        for (j, case) in coeffs.iter_mut().enumerate().take(borne).skip(1) {
            let s_mj = &s_m1_j1 + &*case * BigInt::from(j);
            s_m1_j1 = std::mem::replace(case, s_mj);
        }
        s_m1_j1 = coeffs[0].clone();
    }
    coeffs
}

/// La division par (t + 1) se fait avant la multiplication : elle est exacte
/// et garde les intermédiaires petits.
fn somme_stirling(coeffs: &[BigInt], n: i64) -> BigInt {
    let mut somme = BigInt::zero();
    let mut descendante = BigInt::from(n + 1);

    let nb_termes = coeffs.len().min(n as usize + 1);
    for (t, c) in coeffs.iter().enumerate().take(nb_termes) {
        let t = t as i64;
        let facteur = div_exacte(descendante.clone(), &BigInt::from(t + 1));
        somme += c * facteur;
        descendante *= n - t;
    }
    somme
}
