// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en VALIDANT la grammaire au passage
// - Puis évaluer la RPN sur une pile de flottants
//
// Règles:
// - Précédence : signes unaires (3) > * / (2) > + - (1)
// - Binaires associatifs à gauche ; signes unaires empilés sans dépiler (droite)
// - '-' ou '+' quand on attend une valeur => signe unaire (Neg / Pos)
// - Pas de multiplication implicite : "2(3)" et "(2)(3)" sont refusés
//
// Les erreurs de grammaire sortent ici (malformed-syntax).
// L’évaluation ne connaît qu’une seule erreur : pile finale != 1 valeur (not-a-number).

use num_traits::Float;

use super::erreurs::{ErreurEval, ResultatEval};
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg | Tok::Pos => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Star, Minus, Num(3)]
///   rpn:    [Num(2), Num(3), Neg, Star]
///
/// Une liste vide donne une RPN vide (c’est l’évaluation qui la refusera).
pub fn to_rpn(tokens: &[Tok]) -> ResultatEval<Vec<Tok>> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // true tant qu’une valeur (nombre, groupe, signe unaire) est attendue.
    let mut attend_valeur = true;
    let mut precedent: Option<&Tok> = None;

    for tok in tokens {
        match tok {
            Tok::Num(_) => {
                if !attend_valeur {
                    return Err(ErreurEval::syntaxe("nombre inattendu"));
                }
                out.push(tok.clone());
                attend_valeur = false;
            }

            Tok::LPar => {
                if !attend_valeur {
                    return Err(ErreurEval::syntaxe("parenthèse ouvrante inattendue"));
                }
                ops.push(Tok::LPar);
            }

            Tok::RPar => {
                if attend_valeur {
                    return Err(if matches!(precedent, Some(Tok::LPar)) {
                        ErreurEval::syntaxe("groupe vide")
                    } else {
                        ErreurEval::syntaxe("opérande manquant avant ')'")
                    });
                }

                // dépile jusqu’à '('
                let mut ouvrante = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante {
                    return Err(ErreurEval::syntaxe("parenthèse fermante sans ouvrante"));
                }
            }

            Tok::Minus | Tok::Plus if attend_valeur => {
                // signe unaire : rien à dépiler, il s’applique à ce qui suit
                ops.push(if matches!(tok, Tok::Minus) {
                    Tok::Neg
                } else {
                    Tok::Pos
                });
            }

            Tok::Neg | Tok::Pos => {
                if !attend_valeur {
                    return Err(ErreurEval::syntaxe("signe unaire inattendu"));
                }
                ops.push(tok.clone());
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if attend_valeur {
                    return Err(ErreurEval::syntaxe("opérateur inattendu"));
                }

                let p_tok = precedence(tok);
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || precedence(top) < p_tok {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }

                ops.push(tok.clone());
                attend_valeur = true;
            }
        }
        precedent = Some(tok);
    }

    if attend_valeur && !tokens.is_empty() {
        return Err(ErreurEval::syntaxe("expression incomplète"));
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::syntaxe("parenthèses non fermées"));
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN sur le type flottant `T`.
///
/// La division par zéro n’est PAS une erreur ici : elle donne ±∞ ou NaN,
/// à l’appelant de décider (aperçu / évaluation finale).
pub fn eval_rpn<T: Float>(rpn: &[Tok]) -> ResultatEval<T> {
    let mut st: Vec<T> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(v) => st.push(T::from(*v).ok_or(ErreurEval::NotANumber)?),

            Tok::Neg => {
                let x = st.pop().ok_or(ErreurEval::NotANumber)?;
                st.push(-x);
            }
            Tok::Pos => {
                if st.is_empty() {
                    return Err(ErreurEval::NotANumber);
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or(ErreurEval::NotANumber)?;
                let a = st.pop().ok_or(ErreurEval::NotANumber)?;
                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    _ => a / b,
                };
                st.push(v);
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurEval::syntaxe("parenthèse inattendue en RPN"))
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurEval::NotANumber),
    }
}
