// src/noyau/serie.rs
//
// Oracle de référence : Σ_{k=0}^{n} k^p par addition directe.
// Sert uniquement à recouper les cinq formules.

use num_bigint::BigInt;
use num_traits::{pow, Zero};

pub fn somme_par_serie(power: i64, n: i64) -> BigInt {
    let mut somme = BigInt::zero();
    if power < 0 || n < 0 {
        return somme;
    }
    let exposant = power as usize;
    for k in 0..=n {
        somme += pow(BigInt::from(k), exposant);
    }
    somme
}
