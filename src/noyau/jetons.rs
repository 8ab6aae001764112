// src/noyau/jetons.rs
//
// Classification des jetons : balayage direct du tampon, sans AST.
// Chaque jeton porte sa longueur en octets ; c'est elle qui sert de
// curseur d'avancement pour tout le balayage.

use log::{debug, trace};

use super::fonctions::IdFonction;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GenreJeton {
    Nombre(f64),
    Operateur(u8),
    Groupe,
    Fonction(IdFonction),
    Fin,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Jeton {
    pub genre: GenreJeton,
    pub longueur: usize,
}

impl Jeton {
    /// Valeur numérique portée par le jeton. `Fin` vaut 0 (opérande
    /// absent en fin de tampon) ; tout autre genre employé comme
    /// opérande se replie en NaN.
    pub fn valeur(&self) -> f64 {
        match self.genre {
            GenreJeton::Nombre(v) => v,
            GenreJeton::Fin => 0.0,
            _ => f64::NAN,
        }
    }
}

fn est_operateur(octet: u8) -> bool {
    matches!(octet, b'+' | b'-' | b'*' | b'/' | b'^')
}

fn est_groupe(octet: u8) -> bool {
    matches!(octet, b'(' | b')' | b'[' | b']' | b'{' | b'}')
}

/// Longueur du préfixe numérique : un `-` admis au tout premier octet,
/// des chiffres, au plus un point. S'arrête au premier octet interdit.
fn longueur_numerique(octets: &[u8]) -> usize {
    let mut point_vu = false;
    for (i, &octet) in octets.iter().enumerate() {
        if i == 0 && octet == b'-' {
            continue;
        }
        if !octet.is_ascii_digit() && (octet != b'.' || point_vu) {
            return i;
        }
        if octet == b'.' {
            point_vu = true;
        }
    }
    octets.len()
}

/// Position du premier symbole de groupement (ou fin de tranche) :
/// permet à un nom de fonction inconnu d'avancer quand même.
fn chercher_groupe(octets: &[u8]) -> usize {
    octets
        .iter()
        .position(|&octet| est_groupe(octet))
        .unwrap_or(octets.len())
}

/// Parse décimal du préfixe retenu. Les préfixes dégénérés (`-` seul,
/// `.` seul) se lisent 0.
fn parser_nombre(octets: &[u8]) -> f64 {
    std::str::from_utf8(octets)
        .ok()
        .and_then(|texte| texte.parse().ok())
        .unwrap_or(0.0)
}

/// Classifie le jeton qui commence à `indice`.
///
/// `attend_operateur` force la lecture d'un opérateur avant celle d'un
/// nombre : un `-` derrière un opérande est une soustraction, pas le
/// début d'un nombre négatif.
///
/// Aucun cas n'échoue à cette couche : une séquence inclassable
/// dégrade en `Fonction(Inconnue)` avec une longueur au mieux, pour
/// que le balayage avance toujours.
pub fn classer(octets: &[u8], indice: usize, attend_operateur: bool) -> Jeton {
    if indice >= octets.len() {
        return Jeton {
            genre: GenreJeton::Fin,
            longueur: 0,
        };
    }

    let octet = octets[indice];

    if attend_operateur && est_operateur(octet) {
        return Jeton {
            genre: GenreJeton::Operateur(octet),
            longueur: 1,
        };
    }

    let n = longueur_numerique(&octets[indice..]);
    if n > 0 {
        return Jeton {
            genre: GenreJeton::Nombre(parser_nombre(&octets[indice..indice + n])),
            longueur: n,
        };
    }

    if est_operateur(octet) {
        return Jeton {
            genre: GenreJeton::Operateur(octet),
            longueur: 1,
        };
    }

    if est_groupe(octet) {
        return Jeton {
            genre: GenreJeton::Groupe,
            longueur: 1,
        };
    }

    trace!("classement d'un jeton fonction à l'octet {indice}");

    let id = IdFonction::reconnaitre(&octets[indice..]);
    let longueur = match id {
        IdFonction::Inconnue => {
            let l = chercher_groupe(&octets[indice..]);
            debug!("fonction inconnue à l'octet {indice} (longueur {l})");
            l
        }
        _ => id.longueur_nom(),
    };

    Jeton {
        genre: GenreJeton::Fonction(id),
        longueur,
    }
}

/// Liste les jetons en texte (panneau “Démarche”).
pub fn lister_jetons(octets: &[u8]) -> String {
    let mut morceaux: Vec<String> = Vec::new();
    let mut indice = 0;
    let mut attend = false;

    while indice < octets.len() {
        let jeton = classer(octets, indice, attend);
        if jeton.longueur == 0 {
            break;
        }

        morceaux
            .push(String::from_utf8_lossy(&octets[indice..indice + jeton.longueur]).into_owned());

        attend = match jeton.genre {
            GenreJeton::Nombre(_) => true,
            GenreJeton::Groupe => matches!(octets[indice], b')' | b']' | b'}'),
            _ => false,
        };
        indice += jeton.longueur;
    }

    morceaux.join(" ")
}
