//! Noyau f64 — évaluation (pipeline réel)
//!
//! écriture normalisée -> validation des groupes (strict) -> balayage
//! par jetons -> repli gauche-droite par priorité, avec récursion sur
//! les sous-expressions groupées et les arguments de fonction.
//!
//! Idiome central : pas de curseur séparé. La longueur du jeton de
//! gauche cumule tous les octets consommés depuis le début du tampon ;
//! les appels récursifs reçoivent des longueurs absolues, et chaque
//! opérande de droite réduit est ramené à son empan propre (fin
//! absolue moins son point de départ) avant chaque somme, pour que
//! tout Nombre construit compte exactement ses octets.

use log::debug;

use super::arith::{appliquer, priorite};
use super::erreurs::ErreurNoyau;
use super::fonctions::IdFonction;
use super::groupes::valider_groupes;
use super::jetons::{classer, lister_jetons, GenreJeton, Jeton};
use super::tampon::TamponExpression;

/// Garde-fou : profondeur maximale d'imbrication (groupes, fonctions,
/// montées en priorité).
pub const MAX_PROFONDEUR: usize = 64;

/// `Strict` valide les groupements et rejette les jetons inconnus.
/// `Tolerant` garde la lecture indulgente : seul `)` ferme un groupe
/// et un nom de fonction inconnu vaut 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAnalyse {
    #[default]
    Strict,
    Tolerant,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DemarcheNoyau {
    pub normalise: String,
    pub jetons: String,
    pub note: String,
}

/// Calculatrice : un tampon d'expression + un mode d'analyse.
///
/// L'évaluation est une lecture pure du tampon (`&self`) ; seule
/// `ecrire` mutile le contenu, en bloc.
#[derive(Clone, Debug, Default)]
pub struct Calculatrice {
    tampon: TamponExpression,
    mode: ModeAnalyse,
}

impl Calculatrice {
    pub fn nouvelle(mode: ModeAnalyse) -> Self {
        Self {
            tampon: TamponExpression::default(),
            mode,
        }
    }

    /// Dépose une expression dans le tampon (normalisation + capacité).
    pub fn ecrire(&mut self, entree: &[u8]) -> Result<(), ErreurNoyau> {
        self.tampon.ecrire(entree)
    }

    /// Octets normalisés de l'expression courante.
    pub fn octets(&self) -> &[u8] {
        self.tampon.octets()
    }

    /// Évalue le tampon courant.
    ///
    /// Les `Ok` peuvent porter NaN/Infini ; le canal d'erreur ne sert
    /// qu'aux rejets structurels (groupements, jeton inconnu en
    /// strict, profondeur).
    pub fn evaluer(&self) -> Result<f64, ErreurNoyau> {
        if self.mode == ModeAnalyse::Strict {
            valider_groupes(self.tampon.octets())?;
        }

        let premier = classer(self.tampon.octets(), 0, false);
        let resultat = self.eval(premier, 0)?;
        Ok(resultat.valeur())
    }

    /// Condition de clôture d'un balayage : fin du tampon ou symbole
    /// fermant. En tolérant, seul `)` ferme ; en strict la validation
    /// garantit l'appariement et les trois familles ferment.
    fn cloture(&self, indice: usize) -> bool {
        if indice >= self.tampon.taille() {
            return true;
        }
        let octet = self.tampon.octets()[indice];
        match self.mode {
            ModeAnalyse::Strict => matches!(octet, b')' | b']' | b'}'),
            ModeAnalyse::Tolerant => octet == b')',
        }
    }

    /// Repli récursif. `lhs.longueur` est la fin absolue de tout ce
    /// qui est déjà replié.
    fn eval(&self, mut lhs: Jeton, profondeur: usize) -> Result<Jeton, ErreurNoyau> {
        if profondeur > MAX_PROFONDEUR {
            return Err(ErreurNoyau::ImbricationTropProfonde(MAX_PROFONDEUR));
        }

        let octets = self.tampon.octets();

        // Le balayage commence sur un groupe : réduire son intérieur.
        if lhs.genre == GenreJeton::Groupe {
            let mut interieur = classer(octets, lhs.longueur, false);
            interieur.longueur += lhs.longueur;
            lhs = self.eval(interieur, profondeur + 1)?;
        } else if let GenreJeton::Fonction(id) = lhs.genre {
            lhs = self.eval_fonction(lhs, id, profondeur + 1)?;
        }

        while !self.cloture(lhs.longueur) {
            let op = classer(octets, lhs.longueur, true);

            // En strict, une séquence inclassable est rejetée même en
            // position d'opérateur (en tolérant elle dégrade en NaN).
            if self.mode == ModeAnalyse::Strict
                && op.genre == GenreJeton::Fonction(IdFonction::Inconnue)
            {
                return Err(ErreurNoyau::JetonInconnu {
                    fin: lhs.longueur + op.longueur,
                });
            }

            let depart = lhs.longueur + op.longueur;
            let mut droite = classer(octets, depart, false);

            // Opérande de droite groupé ou fonction : le réduire en
            // nombre, puis ramener sa longueur à son empan propre.
            match droite.genre {
                GenreJeton::Groupe => {
                    let mut interieur = classer(octets, depart + droite.longueur, false);
                    interieur.longueur += depart + droite.longueur;
                    let reduit = self.eval(interieur, profondeur + 1)?;
                    droite = Jeton {
                        genre: reduit.genre,
                        longueur: reduit.longueur - depart,
                    };
                }
                GenreJeton::Fonction(id) => {
                    let absolu = Jeton {
                        genre: droite.genre,
                        longueur: depart + droite.longueur,
                    };
                    let reduit = self.eval_fonction(absolu, id, profondeur + 1)?;
                    droite = Jeton {
                        genre: reduit.genre,
                        longueur: reduit.longueur - depart,
                    };
                }
                _ => {}
            }

            // Un jeton d'avance : si l'opérateur suivant lie plus
            // fort, la droite l'absorbe d'abord (montée en priorité,
            // sans arbre).
            let op_suivant = classer(octets, depart + droite.longueur, true);
            if priorite(&op) < priorite(&op_suivant) {
                let absolu = Jeton {
                    genre: droite.genre,
                    longueur: depart + droite.longueur,
                };
                let reduit = self.eval(absolu, profondeur + 1)?;
                droite = Jeton {
                    genre: reduit.genre,
                    longueur: reduit.longueur - depart,
                };
            }

            lhs = appliquer(&op, &lhs, &droite);
        }

        // Compte le symbole fermant consommé (sans effet quand c'est
        // la vraie fin du tampon qui a clos le balayage).
        lhs.longueur += 1;
        Ok(lhs)
    }

    /// Évalue une fonction dont le nom se termine à l'octet absolu
    /// `jeton.longueur` ; le `+1` saute le délimiteur ouvrant. Le
    /// résultat couvre nom + délimiteurs + argument.
    fn eval_fonction(
        &self,
        jeton: Jeton,
        id: IdFonction,
        profondeur: usize,
    ) -> Result<Jeton, ErreurNoyau> {
        if id == IdFonction::Inconnue && self.mode == ModeAnalyse::Strict {
            return Err(ErreurNoyau::JetonInconnu {
                fin: jeton.longueur,
            });
        }

        debug!(
            "évaluation de la fonction {id:?} (fin du nom à l'octet {})",
            jeton.longueur
        );

        let octets = self.tampon.octets();
        let mut corps = classer(octets, jeton.longueur + 1, false);
        corps.longueur += jeton.longueur + 1;
        let corps = self.eval(corps, profondeur)?;

        Ok(Jeton {
            genre: GenreJeton::Nombre(id.appliquer(corps.valeur())),
            longueur: corps.longueur,
        })
    }
}

/// API publique : pipeline complet sur un texte.
/// Retourne la valeur et la démarche (texte normalisé, listing des
/// jetons, note de pipeline) pour le panneau d'explication.
pub fn eval_expression(
    texte: &str,
    mode: ModeAnalyse,
) -> Result<(f64, DemarcheNoyau), ErreurNoyau> {
    let propre = texte.trim();
    if propre.is_empty() {
        return Err(ErreurNoyau::EntreeVide);
    }

    let mut calculatrice = Calculatrice::nouvelle(mode);
    calculatrice.ecrire(propre.as_bytes())?;

    let valeur = calculatrice.evaluer()?;

    let demarche = DemarcheNoyau {
        normalise: String::from_utf8_lossy(calculatrice.octets()).into_owned(),
        jetons: lister_jetons(calculatrice.octets()),
        note: "Pipeline: écriture normalisée → validation des groupes → balayage par jetons → repli par priorité.".into(),
    };

    Ok((valeur, demarche))
}
