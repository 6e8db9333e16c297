// src/app.rs
//
// Calculatrice clavier — module App (racine)
// -----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier global (pas de champ texte à focaliser) :
// - texte tapé   : chiffres, + - * / ( ) . % =   (via action_depuis_texte)
// - Enter        : "="
// - Backspace    : efface le dernier symbole
// - Escape       : efface tout

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::{action_depuis_texte, Action};

/// Actions clavier de la frame, dans l’ordre d’arrivée.
fn actions_clavier(ctx: &egui::Context) -> Vec<Action> {
    ctx.input(|i| {
        let mut out = Vec::new();
        for ev in &i.events {
            match ev {
                egui::Event::Text(t) => {
                    // un événement peut porter plusieurs caractères (collage, IME)
                    for c in t.chars() {
                        if let Some(a) = action_depuis_texte(c.encode_utf8(&mut [0; 4])) {
                            out.push(a);
                        }
                    }
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => out.push(Action::Egal),
                    egui::Key::Backspace => out.push(Action::Backspace),
                    egui::Key::Escape => out.push(Action::Effacer),
                    _ => {}
                },
                _ => {}
            }
        }
        out
    })
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for action in actions_clavier(ctx) {
            self.appliquer(action);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
