// src/noyau/arith.rs

use super::jetons::{GenreJeton, Jeton};

/// Priorité d'un jeton en position d'opérateur.
/// Tout ce qui n'est pas un opérateur vaut 0, ce qui garantit l'arrêt
/// du repli dès qu'aucun opérateur ne suit.
pub fn priorite(jeton: &Jeton) -> u8 {
    match jeton.genre {
        GenreJeton::Operateur(op) => match op {
            b'+' | b'-' => 1,
            b'*' | b'/' => 2,
            b'^' => 3,
            _ => 0,
        },
        _ => 0,
    }
}

/// Opération binaire f64. La division par zéro rend NaN au lieu de
/// dérouter ; `^` passe par `powf` et hérite de sa propagation
/// NaN/Infini pour les arguments hors domaine.
pub fn calculer(op: u8, gauche: f64, droite: f64) -> f64 {
    match op {
        b'+' => gauche + droite,
        b'-' => gauche - droite,
        b'*' => gauche * droite,
        b'/' => {
            if droite == 0.0 {
                f64::NAN
            } else {
                gauche / droite
            }
        }
        b'^' => gauche.powf(droite),
        _ => f64::NAN,
    }
}

/// Replie `gauche op droite` en un jeton Nombre dont la longueur est
/// la somme exacte des octets consommés par les trois jetons.
pub fn appliquer(op: &Jeton, gauche: &Jeton, droite: &Jeton) -> Jeton {
    let valeur = match op.genre {
        GenreJeton::Operateur(o) => calculer(o, gauche.valeur(), droite.valeur()),
        _ => f64::NAN,
    };

    Jeton {
        genre: GenreJeton::Nombre(valeur),
        longueur: gauche.longueur + op.longueur + droite.longueur,
    }
}
