//! src/app/cli.rs
//!
//! Arguments de la ligne de commande (clap, API derive).
//! Aucune validation métier ici : voir etat.rs.

use clap::{Parser, Subcommand};

use super::etat::{PUISSANCE_DEFAUT, TERMES_DEFAUT};

#[derive(Debug, Parser)]
#[command(
    name = "somme_puissances",
    about = "Exact power sums S(p, n) = 0^p + 1^p + ... + n^p, five closed forms",
    version,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commande,
}

#[derive(Debug, Subcommand)]
pub enum Commande {
    /// Print the coefficients of each formula
    ///
    /// Example:
    ///   somme_puissances coefficients 10
    #[command(alias = "c")]
    Coefficients {
        #[arg(value_name = "POWER", default_value_t = PUISSANCE_DEFAUT,
              value_parser = clap::value_parser!(i64).range(0..))]
        power: i64,
    },

    /// Print the sum formula of each method
    #[command(alias = "f")]
    Formula {
        #[arg(value_name = "POWER", default_value_t = PUISSANCE_DEFAUT,
              value_parser = clap::value_parser!(i64).range(0..))]
        power: i64,
    },

    /// Compute S(POWER, NUM_TERMS) with each formula
    #[command(alias = "s")]
    Sum {
        #[arg(value_name = "POWER", default_value_t = PUISSANCE_DEFAUT,
              value_parser = clap::value_parser!(i64).range(0..))]
        power: i64,
        #[arg(value_name = "NUM_TERMS", default_value_t = TERMES_DEFAUT,
              value_parser = clap::value_parser!(i64).range(0..))]
        num_terms: i64,
    },

    /// As `sum`, then check every formula against plain series addition
    #[command(alias = "sv")]
    Verify {
        #[arg(value_name = "POWER", default_value_t = PUISSANCE_DEFAUT,
              value_parser = clap::value_parser!(i64).range(0..))]
        power: i64,
        #[arg(value_name = "NUM_TERMS", default_value_t = TERMES_DEFAUT,
              value_parser = clap::value_parser!(i64).range(0..))]
        num_terms: i64,
    },
}
