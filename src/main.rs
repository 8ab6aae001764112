// src/main.rs
//
// Point d'entrée natif + web.
// - natif : eframe::run_native ouvre la fenêtre
// - wasm32 : `web::start` (wasm_bindgen) accroche le WebRunner au
//   <canvas id="the_canvas_id"> de index.html ; main() reste vide

mod app;
mod noyau;

use app::AppCalc;

/// Titre unique, fenêtre native et onglet web.
const TITRE_APP: &str = "Calculatrice F64";

/* ------------------------ Entrée NATIF ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    // RUST_LOG=calculatrice_f64=debug pour suivre le noyau.
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([500.0, 720.0])
            .with_min_inner_size([400.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // Le démarrage réel passe par web::start, déclenché par
    // wasm_bindgen au chargement de la page.
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::prelude::wasm_bindgen;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::HtmlCanvasElement;

    /// Id du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    #[wasm_bindgen(start)]
    pub async fn start() -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("document indisponible"))?;

        document.set_title(TITRE_APP);

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("canvas introuvable dans index.html"))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("l'élément trouvé n'est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }
}
