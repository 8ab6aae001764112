//! Tests de propriétés (campagne) : invariants du noyau + limites
//! contrôlées.
//!
//! Notes importantes (alignées avec l'état actuel du noyau) :
//! - Le repli est gauche-droite à priorité égale ; après une montée en
//!   priorité, la droite absorbe aussi la suite de priorité égale
//!   (voir `montee_absorbe_la_suite`).
//! - Les anomalies arithmétiques ne passent JAMAIS par le canal
//!   d'erreur : division par zéro et puissances hors domaine sont des
//!   sentinelles NaN/Infini dans la valeur.
//! - Le mode tolérant ne rejette que capacité / profondeur / entrée
//!   vide ; tout le reste dégrade en valeur.

use super::erreurs::ErreurNoyau;
use super::eval::{eval_expression, Calculatrice, ModeAnalyse, MAX_PROFONDEUR};
use super::tampon::TAILLE_MAX_EXPR;

fn ok_strict(expression: &str) -> f64 {
    let (valeur, _demarche) = eval_expression(expression, ModeAnalyse::Strict)
        .unwrap_or_else(|e| panic!("expr={expression:?} err={e}"));
    valeur
}

fn ok_tolerant(expression: &str) -> f64 {
    let (valeur, _demarche) = eval_expression(expression, ModeAnalyse::Tolerant)
        .unwrap_or_else(|e| panic!("expr={expression:?} err={e}"));
    valeur
}

fn erreur_strict(expression: &str) -> ErreurNoyau {
    match eval_expression(expression, ModeAnalyse::Strict) {
        Ok((valeur, _)) => panic!("expr={expression:?} aurait dû échouer, valeur={valeur}"),
        Err(e) => e,
    }
}

/* ------------------------ Balayage numérique ------------------------ */

#[test]
fn prefixe_numerique_et_soustraction() {
    // "-3.5+2" : le `-` de tête appartient au nombre, le `+` est bien
    // un opérateur.
    assert_eq!(ok_strict("-3.5+2"), -1.5);

    // Derrière un opérande, `-` est une soustraction.
    assert_eq!(ok_strict("5-3"), 2.0);

    // Derrière un opérateur, `-` rouvre un nombre négatif.
    assert_eq!(ok_strict("5--3"), 8.0);
    assert_eq!(ok_strict("5*-3"), -15.0);
}

/* ------------------------ Priorités ------------------------ */

#[test]
fn priorites() {
    assert_eq!(ok_strict("2+3*4"), 14.0);
    assert_eq!(ok_strict("2*3+4"), 10.0);
    assert_eq!(ok_strict("2+3*4+5"), 19.0);
}

#[test]
fn repli_gauche_droite_a_priorite_egale() {
    assert_eq!(ok_strict("10-2-3"), 5.0);
    assert_eq!(ok_strict("100/10/5"), 2.0);
    assert_eq!(ok_strict("2^3^2"), 64.0);
}

#[test]
fn montee_absorbe_la_suite() {
    // Après une montée en priorité, la droite replie aussi la suite de
    // priorité égale avant que l'opérateur courant ne s'applique :
    // 2-3*4+5 se lit 2-(3*4+5).
    assert_eq!(ok_strict("2-3*4+5"), -15.0);
}

/* ------------------------ Groupements ------------------------ */

#[test]
fn groupement_prime_sur_la_priorite() {
    assert_eq!(ok_strict("(2+3)*4"), 20.0);
    assert_eq!(ok_strict("((1+2))"), 3.0);
    assert_eq!(ok_strict("1+(2+3)*4"), 21.0);
    assert_eq!(ok_strict("2*(3+4)"), 14.0);
}

#[test]
fn trois_familles_en_strict() {
    assert_eq!(ok_strict("[1+2]*3"), 9.0);
    assert_eq!(ok_strict("{2+3}*2"), 10.0);
    assert_eq!(ok_strict("{[(1+2)]}"), 3.0);
}

#[test]
fn seul_parenthese_ferme_en_tolerant() {
    // Lecture indulgente : `]` n'est pas une clôture, le repli dégrade
    // en NaN au lieu d'échouer.
    assert!(ok_tolerant("[1+2]*3").is_nan());

    // Ouvrant jamais refermé : la fin du tampon clôt le balayage.
    assert_eq!(ok_tolerant("(1+2"), 3.0);
}

#[test]
fn desequilibre_rejete_en_strict() {
    assert_eq!(
        erreur_strict("(1+2"),
        ErreurNoyau::GroupeDesequilibre { position: 0 }
    );
    assert_eq!(
        erreur_strict("1+2)"),
        ErreurNoyau::GroupeDesequilibre { position: 3 }
    );
    assert_eq!(
        erreur_strict("(1+2]"),
        ErreurNoyau::GroupeDesequilibre { position: 4 }
    );
}

#[test]
fn groupe_vide_rejete_en_strict() {
    assert_eq!(erreur_strict("()"), ErreurNoyau::GroupeVide { position: 0 });
    assert_eq!(
        erreur_strict("sqrt()"),
        ErreurNoyau::GroupeVide { position: 4 }
    );
}

/* ------------------------ Fonctions ------------------------ */

#[test]
fn fonctions_unaires() {
    assert_eq!(ok_strict("sqrt(16)"), 4.0);
    assert_eq!(ok_strict("sin(0)"), 0.0);
    assert_eq!(ok_strict("cos(0)"), 1.0);
}

#[test]
fn fonctions_imbriquees_et_composees() {
    assert_eq!(ok_strict("sqrt(sqrt(16))"), 2.0);
    assert_eq!(ok_strict("2*sqrt(16)"), 8.0);
    assert_eq!(ok_strict("sqrt(16)+sqrt(9)"), 7.0);
    assert_eq!(ok_strict("sqrt(9+7)"), 4.0);
    assert_eq!(ok_strict("cos(sin(0))"), 1.0);
}

#[test]
fn fonction_inconnue_selon_le_mode() {
    // Strict : rejet typé, avec la fin du balayage au mieux.
    assert_eq!(
        erreur_strict("foo(5)"),
        ErreurNoyau::JetonInconnu { fin: 3 }
    );

    // Tolérant : la valeur de repli est 0.
    assert_eq!(ok_tolerant("foo(5)"), 0.0);
    assert_eq!(ok_tolerant("1+foo(5)"), 1.0);
    assert_eq!(ok_tolerant("foo(5)*3"), 0.0);
}

#[test]
fn octet_inclassable_selon_le_mode() {
    // En position d'opérateur aussi : rejet typé en strict.
    assert_eq!(erreur_strict("1#2"), ErreurNoyau::JetonInconnu { fin: 3 });

    // Tolérant : le repli applique un non-opérateur et dégrade en NaN.
    assert!(ok_tolerant("1#2").is_nan());
}

/* ------------------------ Sentinelles arithmétiques ------------------------ */

#[test]
fn division_par_zero() {
    assert!(ok_strict("5/0").is_nan());
    assert!(ok_strict("1+5/0").is_nan());
}

#[test]
fn puissance_hors_domaine() {
    assert!(ok_strict("0-8").is_sign_negative());
    assert!(ok_strict("(0-8)^0.5").is_nan());
    assert_eq!(ok_strict("2^10"), 1024.0);
}

/* ------------------------ Pureté / idempotence ------------------------ */

#[test]
fn evaluation_pure_et_idempotente() {
    let mut calculatrice = Calculatrice::nouvelle(ModeAnalyse::Strict);
    calculatrice.ecrire(b"sqrt(2)/3+0.1").unwrap();

    let premiere = calculatrice.evaluer().unwrap();
    let seconde = calculatrice.evaluer().unwrap();
    assert_eq!(premiere.to_bits(), seconde.to_bits());

    // Même garantie quand le résultat est une sentinelle.
    let mut indefinie = Calculatrice::nouvelle(ModeAnalyse::Strict);
    indefinie.ecrire(b"5/0").unwrap();
    assert_eq!(
        indefinie.evaluer().unwrap().to_bits(),
        indefinie.evaluer().unwrap().to_bits()
    );
}

/* ------------------------ Capacité ------------------------ */

#[test]
fn capacite_et_contenu_preserve() {
    let mut calculatrice = Calculatrice::nouvelle(ModeAnalyse::Strict);
    calculatrice.ecrire(b"1+1").unwrap();

    let trop_long = "9".repeat(TAILLE_MAX_EXPR);
    let erreur = calculatrice.ecrire(trop_long.as_bytes()).unwrap_err();
    assert_eq!(
        erreur,
        ErreurNoyau::CapaciteDepassee {
            longueur: TAILLE_MAX_EXPR,
            capacite: TAILLE_MAX_EXPR,
        }
    );

    // L'expression précédente est intacte et toujours évaluable.
    assert_eq!(calculatrice.octets(), b"1+1");
    assert_eq!(calculatrice.evaluer().unwrap(), 2.0);
}

/* ------------------------ Normalisation ------------------------ */

#[test]
fn normalisation_blancs_et_casse() {
    assert_eq!(ok_strict("7 * 3 + 8 / 2"), 25.0);
    assert_eq!(ok_strict("SQRT(16)"), 4.0);
    assert_eq!(ok_strict("Sin( 0 ) + Cos(0)"), 1.0);
}

/* ------------------------ Profondeur bornée ------------------------ */

#[test]
fn profondeur_bornee() {
    let profonde = format!("{}5{}", "(".repeat(70), ")".repeat(70));
    assert_eq!(
        eval_expression(&profonde, ModeAnalyse::Strict).unwrap_err(),
        ErreurNoyau::ImbricationTropProfonde(MAX_PROFONDEUR)
    );
    // Même garde-fou en tolérant : ressource, pas indulgence.
    assert_eq!(
        eval_expression(&profonde, ModeAnalyse::Tolerant).unwrap_err(),
        ErreurNoyau::ImbricationTropProfonde(MAX_PROFONDEUR)
    );

    // Sous la limite, l'imbrication passe.
    let raisonnable = format!("{}5{}", "(".repeat(40), ")".repeat(40));
    assert_eq!(ok_strict(&raisonnable), 5.0);
}
