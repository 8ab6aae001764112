// src/app.rs
//
// Racine du module application : déclare etat.rs + vue.rs et porte
// l'impl eframe::App, identique en natif et en web.
//
// Le clavier d'édition (Enter, saisie) vit dans vue.rs, là où le focus
// du champ est connu ; ici ne reste que le raccourci global ESC, sans
// risque de double déclenchement.

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = effacer l'entrée, comme le bouton "C".
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.effacer_entree();
        }

        egui::CentralPanel::default().show(ctx, |ui| self.ui(ui));
    }
}
