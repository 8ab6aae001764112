//! src/app/etat.rs
//!
//! État de l'application, sans vue et sans évaluation.
//!
//! Tout ce que la fenêtre affiche vit ici ; la vue ne garde aucun état
//! propre et seule `vue.rs` appelle le noyau. Les actions C / CLR / AC
//! sont des transitions déterministes sur cet état, rien d'autre.

use crate::noyau::DemarcheNoyau;

/// Décimales affichées par défaut.
pub const DECIMALES_DEFAUT: usize = 6;

/// Garde-fou : au-delà, f64 n'apporte plus de chiffre utile.
pub const DECIMALES_MAX: usize = 17;

#[derive(Clone, Debug)]
pub struct AppCalc {
    /// Expression en cours de saisie.
    pub entree: String,

    /// Résultat formaté (peut être "indéfini" ou "infini").
    pub resultat: String,

    /// Message du dernier rejet typé du noyau, vide sinon.
    pub erreur: String,

    /// Contenu du panneau Démarche, tel que rendu par le noyau.
    pub demarche: DemarcheNoyau,

    /// Précision d'affichage, bornée par `DECIMALES_MAX`.
    pub decimales: usize,

    /// Strict : validation des groupements + rejet des noms inconnus.
    /// Décoché : lecture indulgente d'origine.
    pub mode_strict: bool,

    /// Levé par l'état après chaque action pour que la vue redonne le
    /// focus au champ d'entrée à la frame suivante.
    pub reprendre_focus: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: DemarcheNoyau::default(),
            decimales: DECIMALES_DEFAUT,
            mode_strict: true,
            reprendre_focus: true,
        }
    }
}

impl AppCalc {
    /// AC : retour complet à l'état de lancement.
    pub fn tout_remettre(&mut self) {
        *self = Self::default();
    }

    /// C : efface l'entrée seule, les sorties restent à l'écran.
    pub fn effacer_entree(&mut self) {
        self.entree.clear();
        self.reprendre_focus = true;
    }

    /// CLR : efface résultat, erreur et démarche, garde l'entrée.
    pub fn effacer_sorties(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = DemarcheNoyau::default();
        self.reprendre_focus = true;
    }

    /// Une erreur invalide la démarche mais conserve le dernier
    /// résultat affiché : une faute de frappe ne vide pas l'écran.
    pub fn poser_erreur(&mut self, message: impl Into<String>) {
        self.erreur = message.into();
        self.demarche = DemarcheNoyau::default();
        self.reprendre_focus = true;
    }

    /// Dépose une évaluation réussie : valeur formatée + démarche.
    pub fn poser_resultat(&mut self, resultat: impl Into<String>, demarche: DemarcheNoyau) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.reprendre_focus = true;
    }

    pub fn regler_decimales(&mut self, decimales: usize) {
        self.decimales = decimales.min(DECIMALES_MAX);
        self.reprendre_focus = true;
    }
}
