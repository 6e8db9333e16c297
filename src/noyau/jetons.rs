// src/noyau/jetons.rs

use super::erreurs::{ErreurEval, ResultatEval};

/* ------------------------ Classes de symboles (côté affichage) ------------------------ */

/// Classe d’un symbole d’affichage (alphabet du tampon).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClasseJeton {
    Chiffre,
    Point,
    Operateur,
    Pourcent,
    ParOuvrante,
    ParFermante,
}

/// Classe un symbole du tampon.
/// `*` et `/` (clavier) sont des opérateurs au même titre que `×` et `÷`.
pub fn classer(c: char) -> Option<ClasseJeton> {
    match c {
        '0'..='9' => Some(ClasseJeton::Chiffre),
        '.' => Some(ClasseJeton::Point),
        '+' | '-' | '×' | '÷' | '*' | '/' => Some(ClasseJeton::Operateur),
        '%' => Some(ClasseJeton::Pourcent),
        '(' => Some(ClasseJeton::ParOuvrante),
        ')' => Some(ClasseJeton::ParFermante),
        _ => None,
    }
}

pub fn est_operateur(c: char) -> bool {
    classer(c) == Some(ClasseJeton::Operateur)
}

/* ------------------------ Jetons arithmétiques ------------------------ */

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    // Signes unaires : jamais produits par tokenize(), c’est to_rpn() qui décide.
    Neg,
    Pos,

    LPar,
    RPar,
}

/// Tokenize une chaîne DÉJÀ normalisée (opérateurs ASCII, pourcentages développés).
/// Supporte:
/// - nombres décimaux sans signe : 12, 12.5, 12., .5
/// - opérateurs + - * /
/// - parenthèses ( )
/// - espaces ignorés
///
/// Un second point termine le nombre courant : "1.2.3" donne deux nombres collés,
/// que to_rpn() refusera.
pub fn tokenize(s: &str) -> ResultatEval<Vec<Tok>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut point_vu = false;
            while i < chars.len() {
                let d = chars[i];
                if d == '.' {
                    if point_vu {
                        break;
                    }
                    point_vu = true;
                } else if !d.is_ascii_digit() {
                    break;
                }
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();
            let v = texte
                .parse::<f64>()
                .map_err(|_| ErreurEval::syntaxe(format!("nombre invalide '{texte}'")))?;
            out.push(Tok::Num(v));
            continue;
        }

        tracing::debug!(caractere = %c, "caractère hors grammaire");
        return Err(ErreurEval::InvalidCharacters);
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),

            Tok::Neg => "neg".to_string(),
            Tok::Pos => "pos".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
