//! Calculatrice clavier : noyau sans UI (éditeur, évaluateur, format).
//!
//! Toute interface (pavé eframe, clavier, mode sans fenêtre) passe par `noyau`.

pub mod noyau;
