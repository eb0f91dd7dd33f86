//! src/app/etat.rs
//!
//! Réglages d’une exécution (sans vue, sans noyau).
//!
//! Rôle : traduire les arguments en un état simple et validé
//! (mode + puissance + nombre de termes).
//!
//! Contrats :
//! - Aucun calcul ici.
//! - puissance ≥ 0 et termes ≥ 0 : le noyau accepte le négatif (somme 0),
//!   mais à la ligne de commande c’est une faute de l’utilisateur.

use anyhow::ensure;

use super::cli::{Cli, Commande};

/// Puissance par défaut si absente.
pub const PUISSANCE_DEFAUT: i64 = 1;

/// Nombre de termes par défaut si absent.
pub const TERMES_DEFAUT: i64 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Coefficients,
    Formule,
    Somme,
    Verification,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub mode: Mode,
    pub puissance: i64,
    pub termes: i64,
}

impl Reglages {
    pub fn nouveau(mode: Mode, puissance: i64, termes: i64) -> anyhow::Result<Self> {
        ensure!(puissance >= 0, "puissance invalide: {puissance} (attendu ≥ 0)");
        ensure!(termes >= 0, "nombre de termes invalide: {termes} (attendu ≥ 0)");
        Ok(Self {
            mode,
            puissance,
            termes,
        })
    }
}

impl TryFrom<Cli> for Reglages {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> anyhow::Result<Self> {
        match cli.cmd {
            Commande::Coefficients { power } => {
                Reglages::nouveau(Mode::Coefficients, power, TERMES_DEFAUT)
            }
            Commande::Formula { power } => Reglages::nouveau(Mode::Formule, power, TERMES_DEFAUT),
            Commande::Sum { power, num_terms } => Reglages::nouveau(Mode::Somme, power, num_terms),
            Commande::Verify { power, num_terms } => {
                Reglages::nouveau(Mode::Verification, power, num_terms)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> anyhow::Result<Reglages> {
        let cli = Cli::try_parse_from(args.iter().copied())?;
        Reglages::try_from(cli)
    }

    #[test]
    fn valeurs_par_defaut() {
        let r = parse(&["somme_puissances", "sum"]).unwrap();
        assert_eq!(r, Reglages::nouveau(Mode::Somme, 1, 20).unwrap());
    }

    #[test]
    fn alias_historiques() {
        let r = parse(&["somme_puissances", "sv", "6", "20"]).unwrap();
        assert_eq!(r.mode, Mode::Verification);
        assert_eq!((r.puissance, r.termes), (6, 20));

        let r = parse(&["somme_puissances", "c", "10"]).unwrap();
        assert_eq!(r.mode, Mode::Coefficients);
        assert_eq!(r.puissance, 10);
    }

    #[test]
    fn refus_du_negatif() {
        assert!(parse(&["somme_puissances", "sum", "--", "-3"]).is_err());
        assert!(Reglages::nouveau(Mode::Somme, 2, -1).is_err());
        assert!(Reglages::nouveau(Mode::Formule, -2, 0).is_err());
    }
}
