// src/noyau/faulhaber.rs
//
// Formule de Faulhaber : S(p, n) exprimée comme polynôme en N = n(n + 1),
// multiplié par (2n + 1) pour les puissances paires.
//
// Pas de récurrence simple pour les coefficients. D’après A. W. F. Edwards
// (« A quick route to sums of powers »), ils s’obtiennent par inversion d’une
// matrice dont les lignes sont des combinaisons de binomiaux. Ici :
// - on construit la matrice augmentée déjà sous forme échelonnée ;
// - on la réduit une ligne à la fois contre la première ligne ;
// - chaque étape livre un coefficient.
// Mémoire O(m), temps O(m²), m = nombre de colonnes.

use log::{debug, trace};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{pow, One, Zero};

use super::binomial::{div_exacte, n_cr};
use super::format::format_rat_pretty;
use super::methode::{chronometre, PowerSum, SumStats};

pub struct Faulhaber;

impl PowerSum for Faulhaber {
    fn coefficients(&self, power: i64) -> Vec<BigRational> {
        coefficients_faulhaber(power)
    }

    fn sum_formula(&self, power: i64) -> String {
        if power < 0 {
            return String::new();
        }
        if power == 0 {
            return "(n + 1)".to_string();
        }

        let coeffs = coefficients_faulhaber(power);
        let mut s = String::new();
        if power & 1 == 0 {
            s.push_str("(2n + 1)");
        }
        s.push('{');
        let mut exposant = (power + 1) / 2;
        for (i, c) in coeffs.iter().enumerate() {
            if i != 0 {
                s.push_str(" + ");
            }
            s.push_str(&format!("({})N", format_rat_pretty(c)));
            if exposant != 1 {
                s.push_str(&format!("^{exposant}"));
            }
            exposant -= 1;
        }
        s.push_str("}/2\nwhere N = n(n + 1)");
        s
    }

    fn compute_sum_with_stats(&self, power: i64, n: i64) -> (BigInt, SumStats) {
        if power < 0 || n < 0 {
            return (BigInt::zero(), SumStats::default());
        }
        if power == 0 {
            // (n + 1) : hors du cas général (pas de terme en N)
            return (BigInt::from(n + 1), SumStats::default());
        }
        chronometre(
            || coefficients_faulhaber(power),
            |coeffs| somme_faulhaber(&coeffs, power, n),
        )
    }
}

/* ------------------------ Coefficients (élimination) ------------------------ */

/// Nombre d’inconnues du système pour une puissance donnée.
fn nb_colonnes(power: i64) -> i64 {
    if power & 1 == 1 {
        (power + 1) / 2
    } else {
        power / 2 + 1
    }
}

/// Coefficients de N^e, N^(e-1), ... (e = ⌈p/2⌉ pour p impair, p/2 pour p pair).
///
/// La séquence s’arrête au premier pivot nul : tous les coefficients suivants
/// sont alors nuls et ne sont pas renvoyés.
pub fn coefficients_faulhaber(power: i64) -> Vec<BigRational> {
    let mut coeffs = Vec::new();
    if power < 0 {
        return coeffs;
    }

    let paire = power & 1 == 0;
    let n_limite = nb_colonnes(power);
    // colonne augmentée (second membre)
    let aug = n_limite as usize;

    let (mut premiere, mut echelle) = cree_ligne(n_limite, n_limite, paire);
    coeffs.push(BigRational::new(premiere[aug].clone(), echelle.clone()));

    let mut pivot_idx = 1usize;
    for rang in (1..n_limite).rev() {
        premiere[aug] = BigInt::zero();
        let pivot = premiere[pivot_idx].clone();
        if pivot.is_zero() {
            // Une fois un 0 atteint, toutes les colonnes restantes valent 0.
            debug!(
                "faulhaber p={power}: pivot nul colonne {pivot_idx}, {} coefficient(s) nul(s) omis",
                n_limite as usize - coeffs.len()
            );
            break;
        }

        let (suivante, echelle_suivante) = cree_ligne(n_limite, rang, paire);
        echelle *= echelle_suivante;

        // colonnes après le pivot : premiere = premiere·pivot_suivant - pivot·suivante
        let pivot_suivant = &suivante[pivot_idx];
        for (case, v) in premiere[pivot_idx + 1..]
            .iter_mut()
            .zip(&suivante[pivot_idx + 1..])
        {
            *case = &*case * pivot_suivant - &pivot * v;
        }
        trace!("faulhaber p={power}: ligne {rang} réduite, échelle {echelle}");

        coeffs.push(BigRational::new(premiere[aug].clone(), echelle.clone()));
        pivot_idx += 1;
    }

    coeffs
}

/// C(m, i) à partir de C(m, i + 2) (i décroît de 2 en 2).
/// Une valeur courante nulle signifie « pas encore initialisé » : calcul direct.
fn binomial_suivant(courant: BigInt, m: i64, i: i64) -> BigInt {
    if courant.is_zero() {
        return n_cr(m, i);
    }
    let num = BigInt::from((i + 2) * (i + 1));
    let den = BigInt::from((m - i) * (m - i - 1));
    div_exacte(courant * num, &den)
}

/// Ligne `rang` de la matrice (n_limite colonnes + colonne augmentée à 1).
///
/// Colonnes indexées par i = 2*rang - 1, 2*rang - 3, ..., 1 :
/// - puissance impaire : C(rang, i)
/// - puissance paire   : C(rang, i) + C(rang - 1, i)
/// (0 si i > rang). La ligne est ensuite inversée puis augmentée.
///
/// Renvoie (ligne, premier terme non nul).
fn cree_ligne(n_limite: i64, rang: i64, puissance_paire: bool) -> (Vec<BigInt>, BigInt) {
    let mut ligne: Vec<BigInt> = Vec::with_capacity(n_limite as usize + 1);
    let mut c1 = BigInt::zero();
    let mut c2 = BigInt::zero();

    let mut i = 2 * rang - 1;
    while i >= 1 {
        if i > rang {
            ligne.push(BigInt::zero());
        } else {
            c1 = binomial_suivant(c1, rang, i);
            if puissance_paire {
                c2 = binomial_suivant(c2, rang - 1, i);
                ligne.push(&c1 + &c2);
            } else {
                ligne.push(c1.clone());
            }
        }
        i -= 2;
    }
    ligne.resize(n_limite as usize, BigInt::zero());

    let echelle = post_traite_ligne(&mut ligne);
    (ligne, echelle)
}

fn post_traite_ligne(ligne: &mut Vec<BigInt>) -> BigInt {
    ligne.reverse();
    // coefficient de la puissance de N propre à la ligne
    ligne.push(BigInt::one());
    ligne
        .iter()
        .find(|v| !v.is_zero())
        .cloned()
        .unwrap_or_else(BigInt::one)
}

/* ------------------------ Somme ------------------------ */

fn somme_faulhaber(coeffs: &[BigRational], power: i64, n: i64) -> BigInt {
    if n == 0 {
        return BigInt::zero();
    }

    let grand_n = BigInt::from(n) * BigInt::from(n + 1);

    // Les coefficients omis (après un pivot nul) sont ceux des plus basses
    // puissances de N : on part de l’exposant du dernier coefficient renvoyé.
    let sommet = (power + 1) / 2;
    let exposant_bas = usize::try_from(sommet + 1 - coeffs.len() as i64).unwrap_or(0);
    let mut n_pow = pow(grand_n.clone(), exposant_bas);

    let mut somme = BigRational::zero();
    for c in coeffs.iter().rev() {
        somme += c * BigRational::from_integer(n_pow.clone());
        n_pow *= &grand_n;
    }
    if power & 1 == 0 {
        somme *= BigRational::from_integer(BigInt::from(2 * n + 1));
    }

    debug_assert!(somme.is_integer(), "somme de Faulhaber non entière: {somme}");
    div_exacte(somme.to_integer(), &BigInt::from(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn faulhaber_coefficients_connus() {
        assert_eq!(coefficients_faulhaber(0), vec![rat(1, 1)]);
        assert_eq!(coefficients_faulhaber(1), vec![rat(1, 1)]);
        assert_eq!(coefficients_faulhaber(2), vec![rat(1, 3)]);
        assert_eq!(coefficients_faulhaber(3), vec![rat(1, 2)]);
        assert_eq!(coefficients_faulhaber(4), vec![rat(1, 5), rat(-1, 15)]);
        assert_eq!(
            coefficients_faulhaber(7),
            vec![rat(1, 4), rat(-1, 3), rat(1, 6)]
        );
        assert_eq!(
            coefficients_faulhaber(10),
            vec![rat(1, 11), rat(-10, 33), rat(17, 33), rat(-5, 11), rat(5, 33)]
        );
    }

    #[test]
    fn faulhaber_arret_sur_pivot_nul() {
        // p = 4 : 3 colonnes, mais le coefficient de N^0 est nul
        assert_eq!(nb_colonnes(4), 3);
        assert_eq!(coefficients_faulhaber(4).len(), 2);
        // p = 9 : 5 colonnes, pas de terme en N
        assert_eq!(nb_colonnes(9), 5);
        assert_eq!(coefficients_faulhaber(9).len(), 4);
        for p in 2..40 {
            assert_eq!(
                coefficients_faulhaber(p).len() as i64,
                nb_colonnes(p) - 1,
                "p={p}"
            );
        }
    }

    #[test]
    fn faulhaber_puissance_un() {
        // un seul terme, en N (et non N²)
        assert_eq!(Faulhaber.compute_sum(1, 100), BigInt::from(5050));
        assert_eq!(Faulhaber.compute_sum(1, 1), BigInt::from(1));
    }

    #[test]
    fn faulhaber_formules() {
        assert_eq!(Faulhaber.sum_formula(0), "(n + 1)");
        assert_eq!(Faulhaber.sum_formula(1), "{(1)N}/2\nwhere N = n(n + 1)");
        assert_eq!(
            Faulhaber.sum_formula(4),
            "(2n + 1){(1/5)N^2 + (-1/15)N}/2\nwhere N = n(n + 1)"
        );
        assert_eq!(Faulhaber.sum_formula(-1), "");
    }

    #[test]
    fn faulhaber_lignes() {
        // p impair, rang 3 sur 3 colonnes : i = 5, 3, 1 -> [0, C(3,3), C(3,1)] inversé
        let (ligne, echelle) = cree_ligne(3, 3, false);
        assert_eq!(
            ligne,
            vec![BigInt::from(3), BigInt::from(1), BigInt::zero(), BigInt::one()]
        );
        assert_eq!(echelle, BigInt::from(3));
    }
}
