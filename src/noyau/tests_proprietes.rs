//! Tests de propriétés (proptest) : (p, n) tirés au hasard, bornes modestes
//! pour garder la série de référence rapide.

use num_bigint::BigInt;
use num_traits::Zero;
use proptest::prelude::*;

use super::binomial::n_cr;
use super::{somme_par_serie, Method, PowerSum};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_accord_avec_la_serie(p in 0i64..70, n in 0i64..120) {
        let attendu = somme_par_serie(p, n);
        for m in Method::ALL {
            prop_assert_eq!(m.compute_sum(p, n), attendu.clone(), "{}", m.title());
        }
    }

    #[test]
    fn prop_recurrence_en_n(p in 0i64..40, n in 1i64..80) {
        // S(p, n) - S(p, n - 1) = n^p
        for m in Method::ALL {
            let diff = m.compute_sum(p, n) - m.compute_sum(p, n - 1);
            prop_assert_eq!(diff, num_traits::pow(BigInt::from(n), p as usize), "{}", m.title());
        }
    }

    #[test]
    fn prop_domaine_negatif(p in -50i64..50, n in -50i64..0) {
        for m in Method::ALL {
            prop_assert!(m.compute_sum(p, n).is_zero());
            prop_assert!(m.compute_sum(n, p.abs()).is_zero());
        }
    }

    #[test]
    fn prop_binomial_symetrie(n in 0i64..200, r in 0i64..200) {
        prop_assume!(r <= n);
        prop_assert_eq!(n_cr(n, r), n_cr(n, n - r));
    }

    #[test]
    fn prop_binomial_pascal(n in 1i64..150, r in 1i64..150) {
        prop_assume!(r <= n);
        prop_assert_eq!(n_cr(n, r), n_cr(n - 1, r - 1) + n_cr(n - 1, r));
    }
}
