// src/noyau/erreurs.rs

use thiserror::Error;

/// Rejets typés du noyau.
///
/// Le canal d'erreur ne transporte que des rejets structurels : les
/// anomalies arithmétiques (division par zéro, puissance hors domaine)
/// restent des sentinelles NaN/Infini dans le résultat, jamais des
/// erreurs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurNoyau {
    #[error("entrée vide")]
    EntreeVide,

    #[error("expression trop longue ({longueur} octets, capacité {capacite})")]
    CapaciteDepassee { longueur: usize, capacite: usize },

    #[error("jeton inconnu (balayage arrêté à l'octet {fin})")]
    JetonInconnu { fin: usize },

    #[error("groupement déséquilibré à l'octet {position}")]
    GroupeDesequilibre { position: usize },

    #[error("groupe vide à l'octet {position}")]
    GroupeVide { position: usize },

    #[error("expression trop profondément imbriquée (limite {0})")]
    ImbricationTropProfonde(usize),
}
