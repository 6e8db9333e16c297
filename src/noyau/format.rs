// src/noyau/format.rs
//
// Affichage d’un résultat numérique.
// - entier mathématique  : pas de point, pas de zéros
// - sinon                : texte décimal le plus court (aller-retour exact)
// - texte trop long      : arrondi à CHIFFRES_SIGNIFICATIFS puis texte le plus court
// - ±∞ / NaN             : "Error"
//
// Le texte produit reste dans l’alphabet du tampon (jamais d’exposant),
// donc il peut servir directement de nouvelle entrée.

/// Au-delà de cette longueur, le texte décimal est arrondi.
pub const LONGUEUR_MAX: usize = 12;

/// Précision de l’arrondi pour les textes trop longs.
pub const CHIFFRES_SIGNIFICATIFS: usize = 10;

/// Texte affiché pour tout résultat non fini.
pub const TEXTE_ERREUR: &str = "Error";

pub fn formater_resultat(v: f64) -> String {
    if !v.is_finite() {
        return TEXTE_ERREUR.to_string();
    }

    // -0 s’affiche 0
    if v == 0.0 {
        return "0".to_string();
    }

    if v.fract() == 0.0 {
        return format!("{v}");
    }

    let court = format!("{v}");
    if court.chars().count() <= LONGUEUR_MAX {
        return court;
    }

    format!("{}", arrondi_significatif(v, CHIFFRES_SIGNIFICATIFS))
}

/// Écriture scientifique assez longue pour être EXACTE sur tout f64 (≤ 767 chiffres).
const DECIMALES_EXACTES: usize = 800;

/// Arrondit `v` à `chiffres` chiffres significatifs, égalités loin de zéro
/// (1234567890.5 -> 1234567891, -0.125 à 2 chiffres -> -0.13).
///
/// L’arrondi se fait à la main sur les chiffres décimaux exacts : le `{:e}` de Rust
/// arrondit les égalités au pair.
fn arrondi_significatif(v: f64, chiffres: usize) -> f64 {
    let chiffres = chiffres.max(1);

    let exact = format!("{:.*e}", DECIMALES_EXACTES, v.abs());
    let Some((mantisse, exposant)) = exact.split_once('e') else {
        return v;
    };
    let Ok(mut exposant) = exposant.parse::<i32>() else {
        return v;
    };

    let mut garde: Vec<u8> = mantisse
        .bytes()
        .filter(u8::is_ascii_digit)
        .take(chiffres + 1)
        .collect();
    let vers_le_haut = garde.len() > chiffres && garde[chiffres] >= b'5';
    garde.truncate(chiffres);

    if vers_le_haut {
        // retenue ; 99…9 + 1 => 10…0 et un cran d’exposant
        let mut i = garde.len();
        loop {
            if i == 0 {
                garde.insert(0, b'1');
                garde.pop();
                exposant += 1;
                break;
            }
            i -= 1;
            if garde[i] == b'9' {
                garde[i] = b'0';
            } else {
                garde[i] += 1;
                break;
            }
        }
    }

    // garde = entier de `chiffres` chiffres, valeur = garde × 10^(exposant - chiffres + 1)
    let signe = if v.is_sign_negative() { "-" } else { "" };
    let texte = format!(
        "{signe}{}e{}",
        String::from_utf8_lossy(&garde),
        exposant - (garde.len() as i32 - 1)
    );
    texte.parse::<f64>().unwrap_or(v)
}
