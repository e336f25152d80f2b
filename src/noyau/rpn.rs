// src/noyau/rpn.rs
//
// Shunting-yard -> Expr (construction directe)
// --------------------------------------------
// Deux piles:
// - sortie  : noeuds Expr déjà construits + marqueurs de séparation
//             (variante directe du RPN : on empile des arbres, pas des jetons)
// - attente : symboles d'opérateurs, noms de fonctions, marqueurs '('
//
// Règles:
// - tous les opérateurs sont associatifs à gauche : à précédence égale,
//   l'opérateur empilé le plus tôt est réduit d'abord
// - une fonction reste en attente jusqu'à la fermeture de sa liste
//   d'arguments ; le marqueur '(' retient la hauteur de sortie à son
//   ouverture, ce qui délimite sans ambiguïté les arguments de l'appel
//   (y compris un appel imbriqué en position d'argument quelconque)
// - ',' vide d'abord les opérateurs de l'argument qui s'achève, puis pose
//   un marqueur de séparation sur la sortie

use super::erreur::ErreurCalcul;
use super::expr::Expr;
use super::jetons::Jeton;
use super::registre::{Arite, Registre};

/// Entrée de la pile de sortie.
enum Sortie {
    Noeud(Expr),
    Separateur,
}

/// Entrée de la pile d'attente.
enum Attente {
    Operateur(char),
    Fonction(String),
    /// '(' ; `base` = hauteur de la sortie à l'ouverture.
    Ouvrante { base: usize },
}

/// Construit l'arbre d'une suite de jetons.
///
/// Retour:
/// - Ok(Some(racine)) : arbre complet
/// - Ok(None)         : suite vide (convention "pas de résultat", la
///                      signification est laissée à l'appelant)
/// - Err(...)         : parenthèses déséquilibrées, arité violée, symbole
///                      hors registre
pub fn construire_arbre(
    jetons: &[Jeton],
    registre: &Registre,
) -> Result<Option<Expr>, ErreurCalcul> {
    let mut sortie: Vec<Sortie> = Vec::new();
    let mut attente: Vec<Attente> = Vec::new();

    for jeton in jetons.iter().cloned() {
        match jeton {
            Jeton::Nombre(valeur) => {
                sortie.push(Sortie::Noeud(Expr::Litteral(valeur)));
            }

            Jeton::Fonction(nom) => {
                // réduction différée jusqu'à la fermeture de l'appel
                attente.push(Attente::Fonction(nom));
            }

            Jeton::ParenOuvrante => {
                attente.push(Attente::Ouvrante {
                    base: sortie.len(),
                });
            }

            Jeton::ParenFermante => {
                // dépile-et-réduit jusqu'à '('
                let base = loop {
                    match attente.pop() {
                        None => return Err(ErreurCalcul::ParenthesesDesequilibrees),
                        Some(Attente::Ouvrante { base }) => break base,
                        Some(entree) => reduire(entree, None, &mut sortie, registre)?,
                    }
                };

                // si une fonction attend juste derrière, elle se referme ici
                if let Some(Attente::Fonction(_)) = attente.last() {
                    if let Some(entree) = attente.pop() {
                        reduire(entree, Some(base), &mut sortie, registre)?;
                    }
                }
            }

            Jeton::Separateur => {
                // vide les opérateurs de l'argument qui s'achève
                while let Some(Attente::Operateur(_) | Attente::Fonction(_)) = attente.last() {
                    if let Some(entree) = attente.pop() {
                        reduire(entree, None, &mut sortie, registre)?;
                    }
                }
                sortie.push(Sortie::Separateur);
            }

            Jeton::Operateur(symbole) => {
                let precedence = match registre.operateur(symbole) {
                    Some(spec) => spec.precedence,
                    None => {
                        return Err(ErreurCalcul::SymboleInconnu {
                            etiquette: symbole.to_string(),
                        })
                    }
                };

                // réduit tant que le sommet est un opérateur de précédence >=
                while let Some(Attente::Operateur(haut)) = attente.last() {
                    let precedence_haut = match registre.operateur(*haut) {
                        Some(spec) => spec.precedence,
                        None => break,
                    };
                    if precedence_haut < precedence {
                        break;
                    }
                    if let Some(entree) = attente.pop() {
                        reduire(entree, None, &mut sortie, registre)?;
                    }
                }

                attente.push(Attente::Operateur(symbole));
            }
        }
    }

    // vide la pile d'attente
    while let Some(entree) = attente.pop() {
        if matches!(entree, Attente::Ouvrante { .. }) {
            return Err(ErreurCalcul::ParenthesesDesequilibrees);
        }
        reduire(entree, None, &mut sortie, registre)?;
    }

    // la racine est le seul noeud restant (une entrée vide n'en a aucun)
    let mut noeuds = sortie.into_iter().filter_map(|s| match s {
        Sortie::Noeud(n) => Some(n),
        Sortie::Separateur => None,
    });
    Ok(noeuds.next())
}

/// Réduction d'une entrée d'attente : construit un noeud Application et le
/// pousse sur la sortie.
///
/// - Opérateur : dépile exactement son arité de noeuds ; l'ordre de dépilement
///   est l'inverse de l'ordre syntaxique et doit être rétabli avant la
///   construction du noeud. Un marqueur ou une sortie épuisée à la place d'un
///   opérande -> AriteInvalide.
/// - Fonction avec '(' associée (`base`) : tout ce qui dépasse la hauteur
///   enregistrée appartient à l'appel ; les marqueurs de séparation sont
///   éliminés au passage ; le compte est vérifié contre l'arité déclarée.
/// - Fonction sans '(' associée (forme dégénérée, réduction forcée par ','
///   ou par la fin d'entrée) : dépile jusqu'à épuisement de la sortie ou
///   jusqu'à consommer un marqueur après au moins un argument.
fn reduire(
    entree: Attente,
    base: Option<usize>,
    sortie: &mut Vec<Sortie>,
    registre: &Registre,
) -> Result<(), ErreurCalcul> {
    match entree {
        // jamais passé par les appelants (le '(' est traité sur place)
        Attente::Ouvrante { .. } => Ok(()),

        Attente::Operateur(symbole) => {
            let spec = match registre.operateur(symbole) {
                Some(spec) => spec,
                None => {
                    return Err(ErreurCalcul::SymboleInconnu {
                        etiquette: symbole.to_string(),
                    })
                }
            };

            let mut operandes = Vec::with_capacity(spec.arite);
            for _ in 0..spec.arite {
                match sortie.pop() {
                    Some(Sortie::Noeud(noeud)) => operandes.push(noeud),
                    _ => {
                        return Err(ErreurCalcul::AriteInvalide {
                            etiquette: symbole.to_string(),
                            attendu: Arite::Exacte(spec.arite),
                            recu: operandes.len(),
                        })
                    }
                }
            }
            operandes.reverse();

            sortie.push(Sortie::Noeud(Expr::Application(
                symbole.to_string(),
                operandes,
            )));
            Ok(())
        }

        Attente::Fonction(nom) => {
            let spec = match registre.fonction(&nom) {
                Some(spec) => spec,
                None => return Err(ErreurCalcul::SymboleInconnu { etiquette: nom }),
            };

            let mut arguments = Vec::new();
            match base {
                Some(base) => {
                    while sortie.len() > base {
                        match sortie.pop() {
                            Some(Sortie::Noeud(noeud)) => arguments.push(noeud),
                            Some(Sortie::Separateur) | None => {}
                        }
                    }
                }
                None => {
                    while let Some(haut) = sortie.pop() {
                        match haut {
                            Sortie::Noeud(noeud) => arguments.push(noeud),
                            Sortie::Separateur => {
                                if !arguments.is_empty() {
                                    break;
                                }
                            }
                        }
                    }
                }
            }
            arguments.reverse();

            if !spec.arite.accepte(arguments.len()) {
                return Err(ErreurCalcul::AriteInvalide {
                    etiquette: nom,
                    attendu: spec.arite,
                    recu: arguments.len(),
                });
            }

            sortie.push(Sortie::Noeud(Expr::Application(nom, arguments)));
            Ok(())
        }
    }
}
