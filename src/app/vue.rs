// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : expression en haut, résultat (aperçu / "Error") en dessous
// - Pavé  : gros boutons 4 colonnes, "=" sur toute la largeur
// - Démarche repliable (normalisée / jetons / RPN / erreur)
//
// La vue ne touche jamais au tampon directement : tout passe par AppCalc::appliquer.

use eframe::egui;

use calculatrice_clavier::noyau::format::TEXTE_ERREUR;

use super::etat::{Action, AppCalc};

/// Pavé : (étiquette, touche), ligne par ligne.
const PAVE: [[(&str, Touche); 4]; 5] = [
    [
        ("C", Touche::Effacer),
        ("DEL", Touche::Backspace),
        ("%", Touche::Symbole("%")),
        ("÷", Touche::Symbole("÷")),
    ],
    [
        ("7", Touche::Symbole("7")),
        ("8", Touche::Symbole("8")),
        ("9", Touche::Symbole("9")),
        ("×", Touche::Symbole("×")),
    ],
    [
        ("4", Touche::Symbole("4")),
        ("5", Touche::Symbole("5")),
        ("6", Touche::Symbole("6")),
        ("-", Touche::Symbole("-")),
    ],
    [
        ("1", Touche::Symbole("1")),
        ("2", Touche::Symbole("2")),
        ("3", Touche::Symbole("3")),
        ("+", Touche::Symbole("+")),
    ],
    [
        ("0", Touche::Symbole("0")),
        (".", Touche::Symbole(".")),
        ("(", Touche::Symbole("(")),
        (")", Touche::Symbole(")")),
    ],
];

#[derive(Clone, Copy, Debug)]
enum Touche {
    Symbole(&'static str),
    Effacer,
    Backspace,
}

impl Touche {
    fn action(self) -> Action {
        match self {
            Touche::Symbole(s) => Action::Inserer(s.to_string()),
            Touche::Effacer => Action::Effacer,
            Touche::Backspace => Action::Backspace,
        }
    }
}

const TAILLE_BOUTON: [f32; 2] = [72.0, 52.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_ecran(ui);

                ui.add_space(10.0);

                self.ui_pave(ui);

                ui.add_space(10.0);
                ui.separator();

                self.ui_demarche(ui);
            });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(
                        egui::RichText::new(self.editeur.expression())
                            .monospace()
                            .size(20.0),
                    );

                    let texte = egui::RichText::new(&self.resultat).monospace().size(32.0);
                    if self.resultat == TEXTE_ERREUR {
                        ui.colored_label(ui.visuals().error_fg_color, texte);
                    } else {
                        ui.label(texte.strong());
                    }
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let mut clic: Option<Action> = None;

        egui::Grid::new("pave_clavier")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE.iter() {
                    for (etiquette, touche) in ligne.iter() {
                        let bouton = egui::Button::new(egui::RichText::new(*etiquette).size(20.0));
                        if ui.add_sized(TAILLE_BOUTON, bouton).clicked() {
                            clic = Some(touche.action());
                        }
                    }
                    ui.end_row();
                }
            });

        let largeur = 4.0 * TAILLE_BOUTON[0] + 3.0 * 6.0;
        let egal = egui::Button::new(egui::RichText::new("=").size(22.0));
        if ui.add_sized([largeur, TAILLE_BOUTON[1]], egal).clicked() {
            clic = Some(Action::Egal);
        }

        if let Some(a) = clic {
            self.appliquer(a);
        }
    }

    fn ui_demarche(&self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Normalisée", &self.demarche.normalisee);
                Self::champ_demarche(ui, "Jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", &self.demarche.rpn);
                if !self.demarche.erreur.is_empty() {
                    ui.colored_label(ui.visuals().error_fg_color, &self.demarche.erreur);
                }
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, contenu: &str) {
        ui.horizontal(|ui| {
            ui.label(format!("{titre} :"));
            ui.monospace(contenu);
        });
    }
}
