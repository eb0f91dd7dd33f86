// src/app/vue.rs
//
// Vue texte : rend les résultats du noyau sur un flux (stdout en pratique).
// -------------------------------------------------------------------------
// Objectifs :
// - une section par méthode, dans l’ordre Method::ALL ;
// - temps en nanosecondes, « total:coefficients:sommation » ;
// - vérification : chaque méthode comparée à la série.
//
// Aucune logique numérique ici : on appelle le noyau et on affiche.

use std::io::{self, Write};
use std::time::Instant;

use anyhow::{bail, Context};
use log::warn;
use num_bigint::BigInt;

use super::etat::{Mode, Reglages};
use crate::noyau::format::format_liste_rat;
use crate::noyau::{somme_par_serie, Method, PowerSum, SumStats};

/// Largeur des lignes de titre.
const LARGEUR_TITRE: usize = 48;

pub fn execute(reglages: &Reglages, out: &mut impl Write) -> anyhow::Result<()> {
    let p = reglages.puissance;
    let n = reglages.termes;

    match reglages.mode {
        Mode::Coefficients => affiche_coefficients(p, out).context("écriture des coefficients"),
        Mode::Formule => affiche_formules(p, out).context("écriture des formules"),
        Mode::Somme => affiche_sommes(p, n, out)
            .map(|_| ())
            .context("écriture des sommes"),
        Mode::Verification => verifie(p, n, out),
    }
}

/* ------------------------ Sections ------------------------ */

fn titre(out: &mut impl Write, libelle: &str) -> io::Result<()> {
    writeln!(
        out,
        "{:-<largeur$}",
        format!("{libelle}: "),
        largeur = LARGEUR_TITRE
    )
}

fn affiche_coefficients(p: i64, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Computing coefficients for power {p}")?;
    for m in Method::ALL {
        titre(out, m.title())?;
        let t0 = Instant::now();
        let coeffs = m.coefficients(p);
        let duree = t0.elapsed();
        writeln!(out, " {}", format_liste_rat(&coeffs))?;
        writeln!(out, "Time taken = {}", duree.as_nanos())?;
    }
    Ok(())
}

fn affiche_formules(p: i64, out: &mut impl Write) -> io::Result<()> {
    for m in Method::ALL {
        titre(out, m.title())?;
        writeln!(out, "{}", m.sum_formula(p))?;
    }
    Ok(())
}

fn affiche_stats(out: &mut impl Write, stats: &SumStats) -> io::Result<()> {
    writeln!(
        out,
        "Time taken = {}:{}:{}",
        stats.total().as_nanos(),
        stats.coefficients.as_nanos(),
        stats.summation.as_nanos()
    )
}

/// Calcule et affiche S(p, n) pour chaque méthode ; renvoie les sommes
/// dans l’ordre de Method::ALL.
fn affiche_sommes(
    p: i64,
    n: i64,
    out: &mut impl Write,
) -> io::Result<Vec<(Method, BigInt)>> {
    writeln!(out, "Computing S({p}, {n})")?;
    let mut sommes = Vec::with_capacity(Method::ALL.len());
    for m in Method::ALL {
        titre(out, m.title())?;
        let (somme, stats) = m.compute_sum_with_stats(p, n);
        writeln!(out, "Sum computed = {somme}")?;
        affiche_stats(out, &stats)?;
        sommes.push((m, somme));
    }
    Ok(sommes)
}

fn verifie(p: i64, n: i64, out: &mut impl Write) -> anyhow::Result<()> {
    let sommes = affiche_sommes(p, n, out).context("écriture des sommes")?;

    titre(out, "Series addition")?;
    let t0 = Instant::now();
    let reference = somme_par_serie(p, n);
    let duree = t0.elapsed();
    writeln!(out, "Sum computed = {reference}")?;
    writeln!(out, "Time taken = {}", duree.as_nanos())?;

    let mut en_echec = Vec::new();
    for (m, somme) in &sommes {
        if *somme == reference {
            writeln!(out, "The sum matches with {} formula :-)", m.title())?;
        } else {
            warn!("S({p}, {n}) : {} donne {somme}, série {reference}", m.title());
            writeln!(out, "The sums do not match for {} formula :-(", m.title())?;
            en_echec.push(m.title());
        }
    }
    out.flush()?;

    if !en_echec.is_empty() {
        bail!("S({p}, {n}) : désaccord avec la série pour {}", en_echec.join(", "));
    }
    Ok(())
}
