// src/noyau/methode.rs
//
// Façade commune aux cinq méthodes (Faulhaber, Bernoulli, Stirling, Euler,
// factorielles centrales).
//
// Contrats :
// - fonctions pures de (puissance, n) : aucun état partagé, aucun cache ;
// - domaine invalide (puissance < 0 ou n < 0) => coefficients vides / somme 0 ;
// - les durées de SumStats sont purement informatives.

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;

use super::bernoulli::Bernoulli;
use super::euler::Euler;
use super::factorielle_centrale::CentralFactorial;
use super::faulhaber::Faulhaber;
use super::serie::somme_par_serie;
use super::stirling::Stirling;

/// Temps passé dans chaque phase d’un calcul de somme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SumStats {
    pub coefficients: Duration,
    pub summation: Duration,
}

impl SumStats {
    pub fn total(&self) -> Duration {
        self.coefficients + self.summation
    }
}

/// Ensemble de capacités partagé par les cinq méthodes.
pub trait PowerSum {
    /// Coefficients de la formule fermée, en ordre significatif
    /// (le rang encode le rôle du terme dans la base de la méthode).
    fn coefficients(&self, power: i64) -> Vec<BigRational>;

    /// Formule lisible (lignes séparées par '\n'). Vide si power < 0.
    fn sum_formula(&self, power: i64) -> String;

    /// S(power, n) + temps coefficients / sommation.
    fn compute_sum_with_stats(&self, power: i64, n: i64) -> (BigInt, SumStats);

    fn compute_sum(&self, power: i64, n: i64) -> BigInt {
        self.compute_sum_with_stats(power, n).0
    }

    /// Oracle : Σ k^power, terme à terme.
    fn compute_sum_using_series(&self, power: i64, n: i64) -> BigInt {
        somme_par_serie(power, n)
    }
}

/// Chronomètre les deux phases d’un calcul : génération puis évaluation.
/// Les méthodes s’en servent pour remplir SumStats sans dupliquer la mesure.
pub(crate) fn chronometre<C, S>(
    generer: impl FnOnce() -> C,
    evaluer: impl FnOnce(C) -> S,
) -> (S, SumStats) {
    let t0 = Instant::now();
    let coeffs = generer();
    let t1 = Instant::now();
    let somme = evaluer(coeffs);
    let t2 = Instant::now();
    (
        somme,
        SumStats {
            coefficients: t1 - t0,
            summation: t2 - t1,
        },
    )
}

/// Variante étiquetée : permet d’itérer uniformément sur les méthodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Faulhaber,
    Bernoulli,
    Stirling,
    Euler,
    CentralFactorial,
}

impl Method {
    /// Ordre canonique d’affichage.
    pub const ALL: [Method; 5] = [
        Method::Faulhaber,
        Method::Bernoulli,
        Method::Stirling,
        Method::Euler,
        Method::CentralFactorial,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Method::Faulhaber => "Faulhaber",
            Method::Bernoulli => "Bernoulli",
            Method::Stirling => "Stirling",
            Method::Euler => "Euler",
            Method::CentralFactorial => "Central Factorial",
        }
    }

    fn strategie(self) -> &'static dyn PowerSum {
        match self {
            Method::Faulhaber => &Faulhaber,
            Method::Bernoulli => &Bernoulli,
            Method::Stirling => &Stirling,
            Method::Euler => &Euler,
            Method::CentralFactorial => &CentralFactorial,
        }
    }
}

impl PowerSum for Method {
    fn coefficients(&self, power: i64) -> Vec<BigRational> {
        self.strategie().coefficients(power)
    }

    fn sum_formula(&self, power: i64) -> String {
        self.strategie().sum_formula(power)
    }

    fn compute_sum_with_stats(&self, power: i64, n: i64) -> (BigInt, SumStats) {
        self.strategie().compute_sum_with_stats(power, n)
    }
}
