//! Noyau — évaluation (pipeline réel)
//!
//! chaîne -> jetons -> arbre (shunting-yard) -> valeur f64
//!
//! L'évaluation est un parcours en profondeur post-ordre : une feuille vaut
//! son littéral ; une application évalue d'abord ses enfants dans l'ordre,
//! puis invoque l'implémentation enregistrée. Tout est pur : le registre est
//! en lecture seule, l'état jetons/arbre est propre à chaque appel, donc des
//! expressions indépendantes s'évaluent en parallèle sans verrou.

use super::erreur::ErreurCalcul;
use super::expr::Expr;
use super::format::format_expr;
use super::jetons::{decouper, format_jetons};
use super::registre::{registre_standard, Arite, Registre};
use super::rpn::construire_arbre;

/// Trace du pipeline, à destination de l'appelant (affichage "démarche").
#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub arbre: String,
    pub note: String,
}

/// API publique : évalue une expression avec le registre standard et
/// retourne la valeur + la démarche (jetons, arbre).
pub fn evaluer_expression(expr_str: &str) -> Result<(f64, DemarcheNoyau), ErreurCalcul> {
    evaluer_expression_avec(expr_str, registre_standard())
}

/// Variante à registre injecté (tables personnalisées).
pub fn evaluer_expression_avec(
    expr_str: &str,
    registre: &Registre,
) -> Result<(f64, DemarcheNoyau), ErreurCalcul> {
    let s = expr_str.trim();

    // 1) Jetons
    let jetons = decouper(s, registre)?;
    let jetons_txt = format_jetons(&jetons);

    // 2) Arbre (shunting-yard)
    let Some(arbre) = construire_arbre(&jetons, registre)? else {
        return Err(ErreurCalcul::EntreeVide);
    };

    // 3) Évaluation
    let valeur = evaluer_arbre(&arbre, registre)?;

    // 4) Démarche
    let d = DemarcheNoyau {
        jetons: jetons_txt,
        arbre: format_expr(&arbre, registre),
        note: "Pipeline: jetons → arbre (shunting-yard) → évaluation.".into(),
    };

    Ok((valeur, d))
}

/// Raccourci : valeur seule.
pub fn calculer(expr_str: &str) -> Result<f64, ErreurCalcul> {
    evaluer_expression(expr_str).map(|(valeur, _d)| valeur)
}

/// Analyse sans évaluer : l'arbre (None pour une entrée vide), pour le
/// collaborateur de visualisation. Le noyau ne dépend jamais de lui.
pub fn analyser_expression(
    expr_str: &str,
    registre: &Registre,
) -> Result<Option<Expr>, ErreurCalcul> {
    let jetons = decouper(expr_str.trim(), registre)?;
    construire_arbre(&jetons, registre)
}

/// Évalue un arbre contre un registre.
///
/// L'arité est revérifiée avant chaque application : le parseur la garantit
/// déjà, mais un arbre peut aussi être bâti à la main. Une étiquette qui
/// n'est ni opérateur ni fonction du registre échoue avec SymboleInconnu.
pub fn evaluer_arbre(expr: &Expr, registre: &Registre) -> Result<f64, ErreurCalcul> {
    match expr {
        Expr::Litteral(valeur) => Ok(*valeur),

        Expr::Application(etiquette, enfants) => {
            let mut valeurs = Vec::with_capacity(enfants.len());
            for enfant in enfants {
                valeurs.push(evaluer_arbre(enfant, registre)?);
            }

            let (arite, implementation) = match operateur_de_l_etiquette(etiquette, registre) {
                Some(spec) => (Arite::Exacte(spec.arite), spec.implementation),
                None => match registre.fonction(etiquette) {
                    Some(spec) => (spec.arite, spec.implementation),
                    None => {
                        return Err(ErreurCalcul::SymboleInconnu {
                            etiquette: etiquette.clone(),
                        })
                    }
                },
            };

            if !arite.accepte(valeurs.len()) {
                return Err(ErreurCalcul::AriteInvalide {
                    etiquette: etiquette.clone(),
                    attendu: arite,
                    recu: valeurs.len(),
                });
            }

            Ok(implementation(&valeurs))
        }
    }
}

/// Une étiquette à un seul caractère peut désigner un opérateur.
fn operateur_de_l_etiquette<'r>(
    etiquette: &str,
    registre: &'r Registre,
) -> Option<&'r super::registre::SpecOperateur> {
    let mut it = etiquette.chars();
    match (it.next(), it.next()) {
        (Some(symbole), None) => registre.operateur(symbole),
        _ => None,
    }
}
