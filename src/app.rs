// src/app.rs
//
// Sommes de puissances — module App (racine)
// ------------------------------------------
// Rôle:
// - Déclarer les sous-modules (cli.rs + etat.rs + vue.rs)
// - Ré-exporter Cli (pour main.rs: use crate::app::Cli;)
// - Enchaîner arguments -> réglages validés -> vue texte sur stdout

pub mod cli;
pub mod etat;
pub mod vue;

pub use cli::Cli;

use std::io;

use anyhow::Context;
use log::info;

use etat::Reglages;

pub fn lancer(cli: Cli) -> anyhow::Result<()> {
    let reglages = Reglages::try_from(cli).context("arguments invalides")?;
    info!(
        "mode {:?}, puissance {}, termes {}",
        reglages.mode, reglages.puissance, reglages.termes
    );

    let mut sortie = io::stdout().lock();
    vue::execute(&reglages, &mut sortie)
}
