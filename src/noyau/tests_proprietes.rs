//! Propriétés (proptest) : invariants sur des entrées générées.

use proptest::prelude::*;

use super::editeur::Editeur;
use super::erreurs::ErreurEval;
use super::eval::{evaluate_final, evaluate_preview, evaluer};
use super::format::formater_resultat;
use super::jetons::est_operateur;

fn touche() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "×", "÷", "(", ")", "%",
    ])
    .prop_map(str::to_string)
}

fn operateur() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['+', '-', '×', '÷'])
}

proptest! {
    #[test]
    fn prop_entiers_comme_l_arithmetique(a in -1000i64..1000, b in -1000i64..1000, op in operateur()) {
        let expr = format!("{a}{op}{b}");
        let attendu = match op {
            '+' => (a + b) as f64,
            '-' => (a - b) as f64,
            '×' => (a * b) as f64,
            _ => a as f64 / b as f64,
        };

        match evaluate_final(&expr) {
            Ok(affichage) => {
                prop_assert!(attendu.is_finite());
                prop_assert_eq!(affichage, formater_resultat(attendu));
            }
            Err(e) => {
                prop_assert_eq!(e, ErreurEval::NonFinite);
                prop_assert!(!attendu.is_finite());
            }
        }
    }

    #[test]
    fn prop_collision_d_operateurs(touches in prop::collection::vec(touche(), 0..40)) {
        let mut ed = Editeur::new();
        for t in &touches {
            let avant = ed.expression().to_string();
            ed.append(t);

            let c = t.chars().next().unwrap();
            let dernier = avant.chars().last();
            let collision = dernier.is_some_and(est_operateur) && est_operateur(c);

            if collision && !(c == '-' && dernier != Some('-')) {
                // remplacement : même longueur, seul le dernier symbole change
                let mut attendu = avant.clone();
                attendu.pop();
                attendu.push(c);
                prop_assert_eq!(ed.expression(), attendu.as_str());
            } else {
                prop_assert_eq!(ed.expression(), format!("{avant}{c}"));
            }
        }
    }

    #[test]
    fn prop_lettre_refusee_avant_l_arithmetique(
        gauche in "[0-9+×÷()-]{0,8}",
        lettre in "[a-zA-Z]",
        droite in "[0-9+×÷()-]{0,8}",
    ) {
        let expr = format!("{gauche}{lettre}{droite}");
        prop_assert_eq!(evaluer(&expr), Err(ErreurEval::InvalidCharacters));
    }

    #[test]
    fn prop_resultat_final_reutilisable(a in 0u32..100_000, b in 1u32..1000, op in operateur()) {
        let expr = format!("{a}{op}{b}");
        let affichage = evaluate_final(&expr).unwrap();
        // le texte affiché est lui-même une entrée valide
        prop_assert_eq!(evaluate_final(&affichage), Ok(affichage.clone()));

        let mut ed = Editeur::new();
        ed.remplacer(affichage);
        ed.append("+");
        ed.append("1");
        prop_assert!(ed.evaluer().is_ok());
    }

    #[test]
    fn prop_apercu_coherent_avec_final(touches in prop::collection::vec(touche(), 1..16)) {
        let expr: String = touches.concat();
        let apercu = evaluate_preview(&expr);
        match evaluate_final(&expr) {
            Ok(affichage) => prop_assert_eq!(apercu, affichage),
            Err(ErreurEval::NonFinite) => prop_assert_eq!(apercu, "Error"),
            Err(_) => prop_assert_eq!(apercu, ""),
        }
    }

    #[test]
    fn prop_pourcentage_divise_par_cent(n in 0u32..10_000) {
        let expr = format!("{n}%");
        prop_assert_eq!(evaluer(&expr), Ok(n as f64 / 100.0));
    }
}
