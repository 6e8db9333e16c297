// src/noyau/editeur.rs
//
// Tampon d’édition (sans rendu, sans UI).
//
// Contrats :
// - Un seul symbole à la fois, pris dans l’alphabet du clavier.
// - Collision d’opérateurs : regard arrière d’UN SEUL caractère.
//   op suivi d’op => remplacement, SAUF '-' après un opérateur autre que '-'
//   (moins unaire : "5×-3").
// - Les suites d’opérateurs plus profondes ne sont pas refusées ici :
//   la grammaire de l’évaluateur s’en charge.

use super::erreurs::ResultatEval;
use super::eval::evaluate_final;
use super::jetons::{classer, est_operateur};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Editeur {
    tampon: String,
}

impl Editeur {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute un symbole d’affichage. Vide ou hors alphabet : sans effet.
    pub fn append(&mut self, jeton: &str) {
        let mut it = jeton.chars();
        let c = match (it.next(), it.next()) {
            (Some(c), None) if classer(c).is_some() => c,
            (None, _) => return,
            _ => {
                tracing::debug!(jeton, "symbole refusé par l’éditeur");
                return;
            }
        };

        match self.tampon.chars().last() {
            Some(dernier) if est_operateur(dernier) && est_operateur(c) => {
                if c == '-' && dernier != '-' {
                    self.tampon.push(c);
                } else {
                    self.tampon.pop();
                    self.tampon.push(c);
                }
            }
            _ => self.tampon.push(c),
        }
    }

    /// Retire le dernier symbole (sans effet sur un tampon vide).
    pub fn backspace(&mut self) {
        self.tampon.pop();
    }

    pub fn clear(&mut self) {
        self.tampon.clear();
    }

    /// Instantané du tampon.
    pub fn expression(&self) -> &str {
        &self.tampon
    }

    pub fn est_vide(&self) -> bool {
        self.tampon.is_empty()
    }

    /// Remplace tout le tampon (ex: résultat d’un "=").
    pub fn remplacer(&mut self, texte: impl Into<String>) {
        self.tampon = texte.into();
    }

    /// "=" : évalue le tampon ; en cas de succès le résultat DEVIENT le tampon.
    /// En cas d’échec, le tampon est conservé pour correction.
    pub fn evaluer(&mut self) -> ResultatEval<&str> {
        let affichage = evaluate_final(&self.tampon)?;
        self.tampon = affichage;
        Ok(&self.tampon)
    }
}
