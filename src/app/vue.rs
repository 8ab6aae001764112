// src/app/vue.rs
//
// Vue egui, natif + web. La vue ne possède rien : elle lit et écrit
// l'état `AppCalc` et n'appelle le noyau qu'au moment d'évaluer.
//
// Clavier : Enter évalue quand le champ d'entrée a le focus (pas de
// déclenchement global quand un autre widget est manipulé) ; ESC est
// géré dans app.rs. PAS de Key::NumEnter, il n'existe pas en egui
// 0.33.x.

use eframe::egui;

use crate::noyau::{eval_expression, format_resultat, ModeAnalyse};

use super::etat::{AppCalc, DECIMALES_MAX};

/// Motifs que DEL retire d'un bloc, avant le repli caractère par
/// caractère.
const MOTIFS_DEL: [&str; 3] = ["sqrt(", "sin(", "cos("];

/// Pavé numérique, rangée par rangée ("" = case vide).
const PAVE: [[&str; 4]; 4] = [
    ["7", "8", "9", "DEL"],
    ["4", "5", "6", "/"],
    ["1", "2", "3", "*"],
    ["0", ".", "(", ")"],
];

impl AppCalc {
    /// UI principale, appelée depuis eframe::App::update(...).
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice F64");
                ui.add_space(6.0);

                self.ui_entree(ui);
                ui.add_space(6.0);
                self.ui_commandes(ui);
                ui.add_space(8.0);
                self.ui_touches(ui);

                ui.add_space(8.0);
                ui.separator();
                self.ui_sorties(ui);

                ui.separator();
                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        // Id stable : le focus est rendu au champ après chaque clic.
        let champ = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (2+3)*4, sqrt(16), 2^10")
                .id_source("champ_entree")
                .code_editor(),
        );

        if self.reprendre_focus {
            champ.request_focus();
            self.reprendre_focus = false;
        }

        if champ.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.evaluer();
        }
    }

    fn ui_commandes(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // Contrat : C = entrée seule ; CLR = sorties seules ; AC = tout.
            if ui.button("C").on_hover_text("Efface l'entrée").clicked() {
                self.effacer_entree();
            }
            if ui
                .button("CLR")
                .on_hover_text("Efface résultat, erreur et démarche")
                .clicked()
            {
                self.effacer_sorties();
            }
            if ui.button("AC").on_hover_text("Remise à zéro totale").clicked() {
                self.tout_remettre();
            }

            ui.separator();

            ui.label("Décimales :");
            let mut d = self.decimales as u32;
            let curseur = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=DECIMALES_MAX as u32)
                    .suffix(" chiffres"),
            );
            if curseur.changed() {
                self.regler_decimales(d as usize);
            }

            ui.separator();

            ui.checkbox(&mut self.mode_strict, "Strict")
                .on_hover_text("Valide les groupements et rejette les noms inconnus");
        });
    }

    fn ui_touches(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for touche in ["(", ")", "[", "]", "{", "}", "+", "-", "^"] {
                if ui.add_sized([40.0, 28.0], egui::Button::new(touche)).clicked() {
                    self.inserer(touche);
                }
            }

            ui.separator();

            for (etiquette, morceau) in [("sqrt", "sqrt("), ("sin", "sin("), ("cos", "cos(")] {
                if ui
                    .add_sized([46.0, 28.0], egui::Button::new(etiquette))
                    .clicked()
                {
                    self.inserer(morceau);
                }
            }

            ui.add_space(10.0);

            if ui.add_sized([64.0, 32.0], egui::Button::new("=")).clicked() {
                self.evaluer();
            }
        });

        ui.add_space(6.0);

        egui::Grid::new("pave_f64")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for touche in rangee {
                        if touche.is_empty() {
                            ui.label("");
                            continue;
                        }
                        let bouton = ui.add_sized([46.0, 30.0], egui::Button::new(touche));
                        if bouton.clicked() {
                            if touche == "DEL" {
                                self.retirer_bloc();
                            } else {
                                self.inserer(touche);
                            }
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_sorties(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::encadre(ui, "sortie_resultat", &self.resultat);

        if !self.erreur.is_empty() {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                for (titre, contenu) in [
                    ("Normalisé", &self.demarche.normalise),
                    ("Jetons", &self.demarche.jetons),
                    ("Note", &self.demarche.note),
                ] {
                    ui.add_space(4.0);
                    ui.label(format!("{titre} :"));
                    Self::encadre(ui, titre, contenu);
                }
            });
    }

    /// Zone monospace encadrée, en lecture seule. Un Label dans un
    /// Frame plutôt qu'un TextEdit : rien d'interactif à voler le
    /// focus du champ d'entrée.
    fn encadre(ui: &mut egui::Ui, id: &str, contenu: &str) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(2.0 * ui.text_style_height(&egui::TextStyle::Monospace));
                    ui.monospace(contenu);
                });
            });
    }

    /// Insère un morceau dans l'entrée, avec l'espacement d'usage : les
    /// opérateurs binaires sont entourés d'espaces, un ouvrant ou un
    /// nom de fonction se détache de l'opérande qui précède, tout le
    /// reste se colle. Purement cosmétique : le tampon retire les
    /// blancs à l'écriture.
    fn inserer(&mut self, morceau: &str) {
        let operateur = matches!(morceau, "+" | "-" | "*" | "/" | "^");
        let ouvrant = matches!(morceau, "(" | "[" | "{") || morceau.ends_with('(');
        let fermant = matches!(morceau, ")" | "]" | "}");

        if operateur {
            while self.entree.ends_with(' ') {
                self.entree.pop();
            }
            if !self.entree.is_empty() {
                self.entree.push(' ');
            }
            self.entree.push_str(morceau);
            self.entree.push(' ');
        } else if ouvrant {
            let dernier = self.entree.chars().rev().find(|c| !c.is_whitespace());
            if matches!(dernier, Some(c) if c.is_ascii_digit() || c == ')' || c == ']' || c == '}')
            {
                self.entree.push(' ');
            }
            self.entree.push_str(morceau);
        } else {
            if fermant {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
            }
            self.entree.push_str(morceau);
        }

        self.reprendre_focus = true;
    }

    /// DEL : retire un motif connu d'un bloc ("sqrt(", etc.), sinon le
    /// dernier caractère, en avalant les espaces de décor.
    fn retirer_bloc(&mut self) {
        let propre = self.entree.trim_end();
        let coupe = MOTIFS_DEL
            .iter()
            .find_map(|motif| propre.strip_suffix(motif))
            .unwrap_or_else(|| {
                let mut restant = propre.chars();
                restant.next_back();
                restant.as_str()
            });
        self.entree = coupe.trim_end().to_string();
        self.reprendre_focus = true;
    }

    /// Passe l'entrée au noyau et dépose le résultat (ou le rejet
    /// typé) dans l'état.
    fn evaluer(&mut self) {
        let mode = if self.mode_strict {
            ModeAnalyse::Strict
        } else {
            ModeAnalyse::Tolerant
        };

        match eval_expression(&self.entree, mode) {
            Ok((valeur, demarche)) => {
                self.poser_resultat(format_resultat(valeur, self.decimales), demarche);
            }
            Err(erreur) => self.poser_erreur(erreur.to_string()),
        }
    }
}
