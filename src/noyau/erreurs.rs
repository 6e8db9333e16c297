// src/noyau/erreurs.rs
//
// Taxonomie des échecs d’évaluation.
// Les codes texte (code()) font partie du contrat avec l’UI : ne pas les renommer.

/// Échec classé d’une évaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErreurEval {
    /// Entrée vide.
    #[error("expression invalide (entrée vide)")]
    InvalidExpression,

    /// Caractère hors liste blanche après normalisation (lettre, `%` orphelin, …).
    #[error("caractères invalides")]
    InvalidCharacters,

    /// Grammaire arithmétique violée (parenthèses, opérateur final, groupe vide…).
    #[error("syntaxe invalide : {0}")]
    MalformedSyntax(String),

    /// L’évaluation n’a pas produit exactement une valeur.
    #[error("le résultat n’est pas un nombre")]
    NotANumber,

    /// Infini ou NaN (division par zéro, débordement). Détecté par l’appelant.
    #[error("résultat non fini")]
    NonFinite,
}

impl ErreurEval {
    /// Code stable exposé aux interfaces.
    pub fn code(&self) -> &'static str {
        match self {
            ErreurEval::InvalidExpression => "invalid-expression",
            ErreurEval::InvalidCharacters => "invalid-characters",
            ErreurEval::MalformedSyntax(_) => "malformed-syntax",
            ErreurEval::NotANumber => "not-a-number",
            ErreurEval::NonFinite => "non-finite",
        }
    }

    pub(crate) fn syntaxe(msg: impl Into<String>) -> Self {
        ErreurEval::MalformedSyntax(msg.into())
    }
}

pub type ResultatEval<T> = Result<T, ErreurEval>;
