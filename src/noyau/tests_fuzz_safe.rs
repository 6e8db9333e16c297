//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l’éditeur et le pipeline avec des saisies clavier aléatoires.
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - invariant clé : aucune panique, et toute sortie est "", "Error" ou un nombre réutilisable

use std::time::{Duration, Instant};

use super::editeur::Editeur;
use super::eval::{evaluate_final, evaluate_preview};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de saisies ------------------------ */

const TOUCHES: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "×", "÷", "(", ")", "%",
];

/// Saisie pondérée vers les chiffres pour obtenir assez d’expressions complètes.
fn gen_touche(rng: &mut Rng) -> &'static str {
    if rng.pick(3) == 0 {
        TOUCHES[rng.pick(TOUCHES.len() as u32) as usize]
    } else {
        TOUCHES[rng.pick(10) as usize]
    }
}

fn est_nombre_affichable(s: &str) -> bool {
    !s.is_empty()
        && s.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '-')
        && s.parse::<f64>().is_ok()
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_saisies_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let mut ed = Editeur::new();
        let n = 1 + rng.pick(12);
        for _ in 0..n {
            ed.append(gen_touche(&mut rng));
            // aperçu recalculé à chaque touche, comme l’UI
            let apercu = evaluate_preview(ed.expression());
            assert!(
                apercu.is_empty() || apercu == "Error" || est_nombre_affichable(&apercu),
                "aperçu inattendu: expr={:?} apercu={apercu:?}",
                ed.expression()
            );
        }

        let avant = ed.expression().to_string();
        match ed.evaluer() {
            Ok(affichage) => {
                assert!(est_nombre_affichable(affichage), "affichage={affichage:?}");
                seen_ok += 1;
            }
            Err(_) => {
                assert_eq!(ed.expression(), avant, "tampon modifié après échec");
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 20, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 20, "trop peu d’échecs: {seen_err}");
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Rng::new(0xBADC0DE_u64);
    let mut b = Rng::new(0xBADC0DE_u64);

    for _ in 0..100 {
        let expr: String = (0..8).map(|_| gen_touche(&mut a)).collect();
        let meme: String = (0..8).map(|_| gen_touche(&mut b)).collect();
        assert_eq!(expr, meme);
        assert_eq!(evaluate_preview(&expr), evaluate_preview(&meme));
        assert_eq!(evaluate_final(&expr), evaluate_final(&meme));
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("0.5", 800);
    let out = evaluate_final(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    // 800*(1/2) = 400
    assert_eq!(out, "400");
}

#[test]
fn fuzz_safe_parentheses_profondes() {
    let expr = format!("{}7{}", "(".repeat(2000), ")".repeat(2000));
    assert_eq!(evaluate_final(&expr).as_deref(), Ok("7"));

    let ouvertes = format!("{}7", "(".repeat(2000));
    assert_eq!(evaluate_preview(&ouvertes), "");
}
