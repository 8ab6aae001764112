//! Noyau f64
//!
//! Organisation interne :
//! - tampon.rs    : tampon d'expression à capacité fixe (normalisation)
//! - jetons.rs    : classification des jetons (balayage direct)
//! - fonctions.rs : table des fonctions unaires (sqrt, sin, cos)
//! - arith.rs     : opérations binaires f64 + priorités
//! - groupes.rs   : validation structurelle des groupements (strict)
//! - eval.rs      : repli par priorité + pipeline complet
//! - format.rs    : affichage du résultat
//! - erreurs.rs   : rejets typés

pub mod arith;
pub mod erreurs;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod groupes;
pub mod jetons;
pub mod tampon;

#[cfg(test)]
mod tests_proprietes;


// API publique minimale
pub use erreurs::ErreurNoyau;
pub use eval::{eval_expression, Calculatrice, DemarcheNoyau, ModeAnalyse};
pub use format::format_resultat;
