// src/noyau/groupes.rs
//
// Validation structurelle des groupements (mode strict) : paires
// appariées sur les trois familles, aucun symbole orphelin, aucun
// groupe vide. Le mode tolérant saute cette passe et garde la lecture
// indulgente (seul `)` ferme un groupe).

use super::erreurs::ErreurNoyau;

fn fermant_de(ouvrant: u8) -> u8 {
    match ouvrant {
        b'(' => b')',
        b'[' => b']',
        _ => b'}',
    }
}

pub fn valider_groupes(octets: &[u8]) -> Result<(), ErreurNoyau> {
    let mut pile: Vec<(u8, usize)> = Vec::new();

    for (position, &octet) in octets.iter().enumerate() {
        match octet {
            b'(' | b'[' | b'{' => pile.push((octet, position)),
            b')' | b']' | b'}' => {
                let Some((ouvrant, ouverture)) = pile.pop() else {
                    return Err(ErreurNoyau::GroupeDesequilibre { position });
                };
                if fermant_de(ouvrant) != octet {
                    return Err(ErreurNoyau::GroupeDesequilibre { position });
                }
                if position == ouverture + 1 {
                    return Err(ErreurNoyau::GroupeVide {
                        position: ouverture,
                    });
                }
            }
            _ => {}
        }
    }

    if let Some(&(_, ouverture)) = pile.first() {
        return Err(ErreurNoyau::GroupeDesequilibre {
            position: ouverture,
        });
    }

    Ok(())
}
