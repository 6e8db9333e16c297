//! Noyau de la calculatrice clavier
//!
//! Organisation interne :
//! - erreurs.rs  : taxonomie des échecs (codes stables)
//! - jetons.rs   : classes de symboles + tokenisation
//! - rpn.rs      : shunting-yard (grammaire) + évaluation RPN
//! - eval.rs     : pipeline complet (glyphes, %, liste blanche, aperçu, final)
//! - format.rs   : affichage d’un résultat
//! - editeur.rs  : tampon d’édition + collisions d’opérateurs

pub mod editeur;
pub mod erreurs;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use editeur::Editeur;
pub use erreurs::{ErreurEval, ResultatEval};
pub use eval::{evaluate_final, evaluate_preview, evaluer};
pub use format::formater_resultat;
