// src/noyau/format.rs

/// Prépare un résultat f64 pour l'affichage :
/// - NaN -> "indéfini", ±∞ -> "infini"/"-infini"
/// - sinon point fixe à `decimales`, zéros terminaux et point final
///   retirés, "-0" ramené à "0"
pub fn format_resultat(valeur: f64, decimales: usize) -> String {
    if valeur.is_nan() {
        return "indéfini".to_string();
    }
    if valeur.is_infinite() {
        return if valeur.is_sign_positive() {
            "infini".to_string()
        } else {
            "-infini".to_string()
        };
    }

    let mut texte = format!("{valeur:.decimales$}");

    if texte.contains('.') {
        while texte.ends_with('0') {
            texte.pop();
        }
        if texte.ends_with('.') {
            texte.pop();
        }
    }

    if texte == "-0" {
        texte = "0".to_string();
    }

    texte
}
