//! Noyau exact des sommes de puissances S(p, n) = Σ_{k=0}^{n} k^p
//!
//! Organisation interne :
//! - binomial.rs             : C(n, r) exact + division exacte
//! - methode.rs              : façade PowerSum + variante Method + SumStats
//! - faulhaber.rs            : polynôme en N = n(n+1), par élimination échelonnée
//! - bernoulli.rs            : nombres de Bernoulli
//! - stirling.rs             : Stirling de seconde espèce
//! - euler.rs                : nombres eulériens (Worpitzky)
//! - factorielle_centrale.rs : factorielles centrales
//! - serie.rs                : addition terme à terme (oracle)
//! - format.rs               : mise en forme texte des formules
//!
//! Tout est exact (BigInt / BigRational), sans flottant.

pub mod bernoulli;
pub mod binomial;
pub mod euler;
pub mod factorielle_centrale;
pub mod faulhaber;
pub mod format;
pub mod methode;
pub mod serie;
pub mod stirling;

#[cfg(test)]
mod tests_croisees;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use methode::{Method, PowerSum, SumStats};
pub use serie::somme_par_serie;
