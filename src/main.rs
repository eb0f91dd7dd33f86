// src/main.rs
//
// Sommes de puissances — point d’entrée ligne de commande
// -------------------------------------------------------
// But:
// - S(p, n) = 0^p + 1^p + ... + n^p, exact, par cinq formules fermées
//   (Faulhaber, Bernoulli, Stirling, Euler, factorielles centrales)
// - Journalisation : RUST_LOG (warn par défaut)
//
// IMPORTANT (structure projet):
// - Noyau numérique dans src/noyau (aucune E/S)
// - Arguments / réglages / affichage dans src/app

mod app;
mod noyau;

use clap::Parser;

use app::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    app::lancer(cli)
}
