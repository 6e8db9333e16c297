//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’éditeur, la ligne de résultat et la démarche, et traduire
//! les actions (boutons, clavier) en opérations du noyau.
//!
//! Contrats :
//! - Tampon vide  => résultat "0".
//! - Sinon        => aperçu recalculé à chaque action ("" tant que c’est incomplet).
//! - "=" en échec => résultat "Error", tampon conservé pour correction.

use calculatrice_clavier::noyau::eval::{demarche, evaluate_preview};
use calculatrice_clavier::noyau::format::TEXTE_ERREUR;
use calculatrice_clavier::noyau::Editeur;

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Demarche {
    pub normalisee: String,
    pub jetons: String,
    pub rpn: String,
    pub erreur: String,
}

/// Ce qu’un bouton ou une touche demande.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Inserer(String),
    Backspace,
    Effacer,
    Egal,
}

/// Traduit un texte tapé au clavier en action.
/// `*` et `/` deviennent les glyphes d’affichage `×` et `÷`.
pub fn action_depuis_texte(texte: &str) -> Option<Action> {
    match texte {
        "*" => Some(Action::Inserer("×".to_string())),
        "/" => Some(Action::Inserer("÷".to_string())),
        "=" => Some(Action::Egal),
        "+" | "-" | "(" | ")" | "." | "%" => Some(Action::Inserer(texte.to_string())),
        _ if texte.len() == 1 && texte.chars().all(|c| c.is_ascii_digit()) => {
            Some(Action::Inserer(texte.to_string()))
        }
        _ => None,
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub editeur: Editeur,

    // --- sorties ---
    pub resultat: String,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,
}

impl Default for AppCalc {
    fn default() -> Self {
        let mut app = Self {
            editeur: Editeur::new(),
            resultat: String::new(),
            demarche: Demarche::default(),
        };
        app.rafraichir();
        app
    }
}

impl AppCalc {
    /// Point d’entrée unique des boutons et du clavier.
    pub fn appliquer(&mut self, action: Action) {
        match action {
            Action::Inserer(s) => {
                self.editeur.append(&s);
                self.rafraichir();
            }
            Action::Backspace => {
                self.editeur.backspace();
                self.rafraichir();
            }
            Action::Effacer => {
                self.editeur.clear();
                self.rafraichir();
            }
            Action::Egal => self.egal(),
        }
    }

    /// Recalcule la ligne de résultat et la démarche depuis le tampon.
    fn rafraichir(&mut self) {
        let expr = self.editeur.expression();
        self.resultat = if expr.is_empty() {
            "0".to_string()
        } else {
            evaluate_preview(expr)
        };
        self.demarche = demarche_ui(expr);
    }

    fn egal(&mut self) {
        let issue = self.editeur.evaluer().map(|_| ());
        match issue {
            Ok(()) => self.rafraichir(),
            Err(e) => {
                tracing::info!(expr = self.editeur.expression(), code = e.code(), "évaluation refusée");
                self.resultat = TEXTE_ERREUR.to_string();
                self.demarche.erreur = e.to_string();
            }
        }
    }
}

fn demarche_ui(expr: &str) -> Demarche {
    if expr.is_empty() {
        return Demarche::default();
    }
    match demarche(expr) {
        Ok(d) => Demarche {
            normalisee: d.normalisee,
            jetons: d.jetons,
            rpn: d.rpn,
            erreur: String::new(),
        },
        Err(e) => Demarche {
            erreur: e.to_string(),
            ..Demarche::default()
        },
    }
}
