//! Tampon d'expression à capacité fixe.
//!
//! Le tampon possède seul les octets de l'expression normalisée :
//! - remplacement en bloc par `ecrire`, jamais de mutation partielle
//! - minuscules ASCII, blancs retirés, octet 0 terminal hors taille
//! - rejet AVANT copie si la longueur brute atteint la capacité

use super::erreurs::ErreurNoyau;

/// Garde-fou : capacité du tampon, terminateur compris.
pub const TAILLE_MAX_EXPR: usize = 1024;

#[derive(Clone)]
pub struct TamponExpression {
    octets: [u8; TAILLE_MAX_EXPR],
    taille: usize,
}

impl Default for TamponExpression {
    fn default() -> Self {
        Self {
            octets: [0; TAILLE_MAX_EXPR],
            taille: 0,
        }
    }
}

impl std::fmt::Debug for TamponExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TamponExpression")
            .field("taille", &self.taille)
            .field("octets", &String::from_utf8_lossy(self.octets()))
            .finish()
    }
}

impl TamponExpression {
    /// Remplace le contenu en bloc par `entree` normalisée (blancs
    /// retirés, `A..Z` rabattu sur `a..z`, terminateur posé).
    ///
    /// Échoue sans toucher au contenu si la longueur brute atteint la
    /// capacité.
    pub fn ecrire(&mut self, entree: &[u8]) -> Result<(), ErreurNoyau> {
        if entree.len() >= TAILLE_MAX_EXPR {
            return Err(ErreurNoyau::CapaciteDepassee {
                longueur: entree.len(),
                capacite: TAILLE_MAX_EXPR,
            });
        }

        let mut taille = 0;
        for &octet in entree {
            if octet.is_ascii_whitespace() {
                continue;
            }
            self.octets[taille] = octet.to_ascii_lowercase();
            taille += 1;
        }

        self.taille = taille;
        self.octets[self.taille] = 0;
        Ok(())
    }

    /// Octets valides de l'expression, terminateur exclu.
    pub fn octets(&self) -> &[u8] {
        &self.octets[..self.taille]
    }

    pub fn taille(&self) -> usize {
        self.taille
    }
}
