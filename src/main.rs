// src/main.rs
//
// Calculatrice clavier — point d’entrée NATIF + WEB (WASM)
// --------------------------------------------------------
// - NATIF (Linux/Windows/macOS) : eframe::run_native, ou mode sans fenêtre (--eval / --apercu)
// - WEB  (wasm32)              : eframe::WebRunner sur <canvas id="the_canvas_id">
//
// Journalisation : RUST_LOG (ex: RUST_LOG=calculatrice_clavier=debug), "warn" par défaut.

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice clavier";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use clap::Parser;
    use tracing_subscriber::EnvFilter;

    use calculatrice_clavier::noyau::{evaluate_final, evaluate_preview};

    #[derive(Parser, Debug)]
    #[command(name = "calculatrice_clavier", version, about = "Calculatrice à pavé numérique")]
    pub struct Args {
        /// Évalue l’expression (comme "=") et affiche le résultat, sans fenêtre.
        #[arg(long, value_name = "EXPR", conflicts_with = "apercu")]
        pub eval: Option<String>,

        /// Affiche l’aperçu en direct de l’expression, sans fenêtre.
        #[arg(long, value_name = "EXPR")]
        pub apercu: Option<String>,
    }

    pub fn init_journal() {
        let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(filtre)
            .with_writer(std::io::stderr)
            .init();
    }

    /// Mode sans fenêtre. `None` si aucune option : la fenêtre doit s’ouvrir.
    pub fn sans_fenetre(args: &Args) -> Option<std::process::ExitCode> {
        if let Some(expr) = &args.eval {
            return Some(match evaluate_final(expr) {
                Ok(affichage) => {
                    println!("{affichage}");
                    std::process::ExitCode::SUCCESS
                }
                Err(e) => {
                    tracing::warn!(code = e.code(), "{e}");
                    println!("Error");
                    std::process::ExitCode::FAILURE
                }
            });
        }

        if let Some(expr) = &args.apercu {
            println!("{}", evaluate_preview(expr));
            return Some(std::process::ExitCode::SUCCESS);
        }

        None
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<std::process::ExitCode, eframe::Error> {
    use clap::Parser;

    natif::init_journal();

    let args = natif::Args::parse();
    if let Some(code) = natif::sans_fenetre(&args) {
        return Ok(code);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([340.0, 560.0])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    tracing::info!("ouverture de la fenêtre");
    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )?;

    Ok(std::process::ExitCode::SUCCESS)
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or_else(|| js_err("document indisponible"))?;
        document.set_title(TITRE_APP);

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
