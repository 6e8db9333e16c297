//! Noyau — évaluation (pipeline réel)
//!
//! garde vide -> glyphes (× ÷) -> pourcentages -> liste blanche
//!        -> jetons -> RPN (grammaire) -> valeur -> garde finitude (appelant)
//!
//! Remarque : glyphes et pourcentages sont des passes TEXTUELLES, hors grammaire.
//! Le cœur arithmétique (jetons.rs + rpn.rs) ne connaît que + - * / ( ).

use lazy_static::lazy_static;
use regex::Regex;

use super::erreurs::{ErreurEval, ResultatEval};
use super::format::{formater_resultat, TEXTE_ERREUR};
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};

lazy_static! {
    /// Littéral décimal sans signe immédiatement suivi de '%'.
    static ref POURCENT: Regex = Regex::new(r"([0-9]+(\.[0-9]+)?)%").unwrap();

    /// Seuls caractères admis après normalisation.
    static ref LISTE_BLANCHE: Regex = Regex::new(r"^[0-9+\-*/().\s]+$").unwrap();
}

/// Remplace les glyphes d’affichage par les opérateurs arithmétiques.
pub fn normaliser_glyphes(s: &str) -> String {
    s.replace('×', "*").replace('÷', "/")
}

/// "50%+10%" -> "(50/100)+(10/100)" (passe globale unique).
pub fn developper_pourcentages(s: &str) -> String {
    POURCENT.replace_all(s, "($1/100)").into_owned()
}

/// Étapes textuelles 1 à 4 : garde, glyphes, pourcentages, liste blanche.
fn normaliser(expr: &str) -> ResultatEval<String> {
    if expr.is_empty() {
        return Err(ErreurEval::InvalidExpression);
    }

    let e = developper_pourcentages(&normaliser_glyphes(expr));
    if !LISTE_BLANCHE.is_match(&e) {
        return Err(ErreurEval::InvalidCharacters);
    }

    tracing::trace!(entree = expr, normalisee = %e, "expression normalisée");
    Ok(e)
}

/// API publique : évalue une expression du tampon.
///
/// Renvoie la valeur brute, éventuellement non finie (5/0 -> ∞, 0/0 -> NaN) :
/// c’est à l’appelant de traiter la finitude.
pub fn evaluer(expr: &str) -> ResultatEval<f64> {
    let e = normaliser(expr)?;

    let jetons = tokenize(&e)?;
    let rpn = to_rpn(&jetons)?;
    let v: f64 = eval_rpn(&rpn)?;

    tracing::trace!(expr, valeur = v, "expression évaluée");
    Ok(v)
}

/// Aperçu en direct :
/// - résultat formaté si l’expression s’évalue
/// - "" si elle n’est pas (encore) évaluable : pas une erreur, juste incomplète
/// - "Error" si le résultat est non fini
pub fn evaluate_preview(expr: &str) -> String {
    match evaluer(expr) {
        Ok(v) if !v.is_finite() => TEXTE_ERREUR.to_string(),
        Ok(v) => formater_resultat(v),
        Err(e) => {
            tracing::trace!(expr, code = e.code(), "aperçu indisponible");
            String::new()
        }
    }
}

/// Évaluation finale (touche "=") :
/// - Ok(texte) : nouveau contenu du tampon (calcul chaîné)
/// - Err(..)   : l’appelant affiche "Error" et garde le tampon intact
pub fn evaluate_final(expr: &str) -> ResultatEval<String> {
    let v = evaluer(expr).inspect_err(|e| {
        tracing::debug!(expr, code = e.code(), erreur = %e, "évaluation finale refusée");
    })?;

    if !v.is_finite() {
        tracing::debug!(expr, valeur = v, "résultat non fini");
        return Err(ErreurEval::NonFinite);
    }

    Ok(formater_resultat(v))
}

/* ------------------------ Démarche (panneau d’explication) ------------------------ */

#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    pub normalisee: String,
    pub jetons: String,
    pub rpn: String,
}

/// Trace des étapes jusqu’à la RPN. S’arrête à la première étape qui échoue.
pub fn demarche(expr: &str) -> ResultatEval<DemarcheNoyau> {
    let normalisee = normaliser(expr)?;
    let jetons = tokenize(&normalisee)?;
    let rpn = to_rpn(&jetons)?;

    Ok(DemarcheNoyau {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
        normalisee,
    })
}
