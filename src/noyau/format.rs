// src/noyau/format.rs

use super::expr::Expr;
use super::registre::{Fixite, Registre};

/// Texte d'un littéral f64.
///
/// L'affichage standard de Rust est la forme décimale la plus courte qui
/// re-parse à l'identique : re-découper puis ré-évaluer ce texte redonne
/// exactement la même valeur (propriété d'aller-retour).
pub fn format_nombre(valeur: f64) -> String {
    format!("{valeur}")
}

/// Rendu texte de l'arbre (démarche/debug, pas un rendu graphique).
///
/// - opérateur infixe  : (gauche symbole droite)
/// - opérateur postfixe: (opérande)symbole
/// - fonction          : nom(arg1, arg2, ...)
pub fn format_expr(expr: &Expr, registre: &Registre) -> String {
    match expr {
        Expr::Litteral(valeur) => format_nombre(*valeur),

        Expr::Application(etiquette, enfants) => {
            let mut it = etiquette.chars();
            if let (Some(symbole), None) = (it.next(), it.next()) {
                if let Some(spec) = registre.operateur(symbole) {
                    match spec.fixite {
                        Fixite::Infixe if enfants.len() == 2 => {
                            return format!(
                                "({}{}{})",
                                format_expr(&enfants[0], registre),
                                symbole,
                                format_expr(&enfants[1], registre)
                            );
                        }
                        Fixite::Postfixe if enfants.len() == 1 => {
                            return format!(
                                "({}){}",
                                format_expr(&enfants[0], registre),
                                symbole
                            );
                        }
                        _ => {}
                    }
                }
            }

            // notation fonction (et repli générique)
            let args: Vec<String> = enfants
                .iter()
                .map(|enfant| format_expr(enfant, registre))
                .collect();
            format!("{}({})", etiquette, args.join(", "))
        }
    }
}
