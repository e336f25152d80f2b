// src/lib.rs
//
// Calculatrice à table — noyau d'évaluation d'expressions
// -------------------------------------------------------
// chaîne -> jetons -> arbre (shunting-yard) -> valeur f64
//
// La table des opérateurs/fonctions/constantes (registre) est construite une
// fois puis injectée en lecture seule dans chaque étage. Le rendu graphique
// de l'arbre et tout harnais en ligne de commande sont des collaborateurs
// externes : le noyau leur expose l'arbre (`analyser_expression`) et son
// parcours aplati (`Expr::aplatir`), rien de plus.

//! Évaluation d'expressions arithmétiques en double précision.
//!
//! ```
//! use calculatrice_ast::calculer;
//!
//! assert_eq!(calculer("2*(3+4)").unwrap(), 14.0);
//! assert_eq!(calculer("max(1, 2, 3)").unwrap(), 3.0);
//! assert_eq!(calculer("1#").unwrap(), 2.0);
//! ```

pub mod noyau;

pub use noyau::erreur::ErreurCalcul;
pub use noyau::eval::{
    analyser_expression, calculer, evaluer_arbre, evaluer_expression, evaluer_expression_avec,
    DemarcheNoyau,
};
pub use noyau::expr::{Categorie, Expr, NoeudVisite};
pub use noyau::registre::{registre_standard, Arite, Fixite, Registre};
