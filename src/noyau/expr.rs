// src/noyau/expr.rs
//
// AST : union étiquetée à deux formes.
// - Litteral     : feuille, valeur f64
// - Application  : étiquette (symbole d'opérateur ou nom de fonction)
//                  + enfants ordonnés
//
// IMPORTANT:
// - chaque noeud appartient exclusivement à son parent (arbre, pas de cycle)
// - construit de bas en haut par le parseur, jamais muté ensuite
// - l'invariant d'arité (nb d'enfants = arité déclarée) est garanti à la
//   construction ; l'évaluateur le revérifie sur les arbres bâtis à la main

use super::format::format_nombre;
use super::registre::Registre;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Litteral(f64),
    Application(String, Vec<Expr>),
}

/// Discriminant d'un noeud pour le collaborateur de visualisation
/// (il choisit une forme de noeud par discriminant).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Categorie {
    Litteral,
    Operateur,
    Fonction,
    /// Étiquette hors registre (arbre bâti à la main).
    Inconnu,
}

/// Un noeud aplati du parcours : identifiant séquentiel, parent, étiquette,
/// discriminant. Suffisant pour dessiner un noeud et une arête parent→enfant.
#[derive(Clone, Debug, PartialEq)]
pub struct NoeudVisite {
    pub id: usize,
    pub parent: Option<usize>,
    pub etiquette: String,
    pub categorie: Categorie,
}

impl Expr {
    /// Étiquette d'affichage : texte du numéral, ou symbole/nom appliqué.
    pub fn etiquette(&self) -> String {
        match self {
            Expr::Litteral(v) => format_nombre(*v),
            Expr::Application(etiquette, _) => etiquette.clone(),
        }
    }

    /// Enfants ordonnés (vide pour une feuille).
    pub fn enfants(&self) -> &[Expr] {
        match self {
            Expr::Litteral(_) => &[],
            Expr::Application(_, enfants) => enfants,
        }
    }

    /// Discriminant résolu contre le registre.
    pub fn categorie(&self, registre: &Registre) -> Categorie {
        match self {
            Expr::Litteral(_) => Categorie::Litteral,
            Expr::Application(etiquette, _) => {
                let mut it = etiquette.chars();
                if let (Some(symbole), None) = (it.next(), it.next()) {
                    if registre.est_operateur(symbole) {
                        return Categorie::Operateur;
                    }
                }
                if registre.est_fonction(etiquette) {
                    Categorie::Fonction
                } else {
                    Categorie::Inconnu
                }
            }
        }
    }

    /// Aplatit l'arbre en parcours profondeur (préfixe), compteur explicite :
    /// un identifiant séquentiel par noeud, une entrée par arête parent→enfant.
    /// C'est le flux que consomme le collaborateur de visualisation.
    pub fn aplatir(&self, registre: &Registre) -> Vec<NoeudVisite> {
        let mut visites = Vec::new();
        let mut compteur: usize = 0;

        let mut pile: Vec<(&Expr, Option<usize>)> = vec![(self, None)];

        while let Some((noeud, parent)) = pile.pop() {
            let id = compteur;
            compteur += 1;

            visites.push(NoeudVisite {
                id,
                parent,
                etiquette: noeud.etiquette(),
                categorie: noeud.categorie(registre),
            });

            // enfants empilés à l'envers pour ressortir de gauche à droite
            for enfant in noeud.enfants().iter().rev() {
                pile.push((enfant, Some(id)));
            }
        }

        visites
    }
}
