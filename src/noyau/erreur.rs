// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// - Les erreurs de découpe/analyse interrompent immédiatement le pipeline :
//   aucun arbre partiel n'est retourné, aucune relance automatique.
// - La division par un diviseur nul n'est PAS une erreur (politique numérique,
//   voir registre.rs : le quotient vaut +infini).

use thiserror::Error;

use super::registre::Arite;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurCalcul {
    /// Numéral mal formé (ex: deux points décimaux). Position en caractères.
    #[error("nombre invalide: '{fragment}' (position {position})")]
    NombreInvalide { fragment: String, position: usize },

    /// Identifiant qui n'est ni une fonction ni une constante du registre.
    #[error("identifiant inconnu: '{nom}' (position {position})")]
    IdentifiantInconnu { nom: String, position: usize },

    /// '(' sans ')' correspondante, ou ')' orpheline.
    #[error("parenthèses déséquilibrées")]
    ParenthesesDesequilibrees,

    /// Nombre d'arguments incompatible avec l'arité déclarée.
    #[error("arité invalide pour '{etiquette}': attendu {attendu}, reçu {recu}")]
    AriteInvalide {
        etiquette: String,
        attendu: Arite,
        recu: usize,
    },

    /// Étiquette d'un noeud absente du registre (garde-fou de l'évaluateur :
    /// ne devrait pas arriver sur un arbre construit par le parseur).
    #[error("symbole inconnu: '{etiquette}'")]
    SymboleInconnu { etiquette: String },

    /// Convention du pipeline pour une expression vide (le parseur, lui,
    /// retourne simplement "pas d'arbre").
    #[error("entrée vide")]
    EntreeVide,
}
