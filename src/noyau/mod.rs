//! Noyau de la calculatrice à table
//!
//! Organisation interne :
//! - registre.rs : table opérateurs/fonctions/constantes (immuable, injectée)
//! - jetons.rs   : tokenisation
//! - rpn.rs      : shunting-yard + construction Expr
//! - expr.rs     : AST + parcours aplati (visualisation)
//! - format.rs   : rendu texte jetons/arbre
//! - erreur.rs   : taxonomie des erreurs
//! - eval.rs     : évaluation + pipeline complet

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod registre;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;


// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::{analyser_expression, calculer, evaluer_expression, evaluer_expression_avec};
pub use registre::{registre_standard, Registre};
