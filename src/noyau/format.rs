// src/noyau/format.rs
//
// Affichage texte des formules fermées (aucune logique numérique ici :
// on ne fait que mettre en forme des coefficients déjà calculés).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

/* ------------------------ Helpers rationnels ------------------------ */

/// a ou a/b (le rationnel est déjà réduit).
pub fn format_rat_pretty(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

/// Coefficient entier devant un produit : rien si 1.
pub fn format_coeff_entier(c: &BigInt) -> String {
    if c.is_one() {
        String::new()
    } else {
        format!("{c}")
    }
}

/// Liste de coefficients séparés par un espace (sortie « -c »).
pub fn format_liste_rat(coeffs: &[BigRational]) -> String {
    coeffs
        .iter()
        .map(format_rat_pretty)
        .collect::<Vec<_>>()
        .join(" ")
}

/* ------------------------ Facteurs en n ------------------------ */

/// (n + d), n, (n - d)
pub fn facteur_n(decalage: i64) -> String {
    match decalage {
        0 => "n".to_string(),
        d if d > 0 => format!("(n + {d})"),
        d => format!("(n - {})", -d),
    }
}

/// Produit de `nb` facteurs consécutifs décroissants, le premier étant (n + premier) :
/// (n + premier)(n + premier - 1)...(n + premier - nb + 1)
pub fn produit_descendant(premier: i64, nb: i64) -> String {
    (0..nb).map(|i| facteur_n(premier - i)).collect()
}
