//! Campagne de propriétés : précédence, postfixe, variadiques, politique de
//! division, conversions, erreurs, aller-retour des littéraux.
//!
//! Notes :
//! - les conversions deg/rad s'appuient sur le π de la table
//!   (3.14159265359), pas sur le π machine : les comparaisons se font en
//!   tolérance absolue
//! - la division par un diviseur nul est une VALEUR (+infini), jamais une
//!   erreur, y compris 0/0 et -1/0

use pretty_assertions::assert_eq;

use super::erreur::ErreurCalcul;
use super::eval::{calculer, evaluer_expression_avec};
use super::format::format_nombre;
use super::registre::{Arite, Fixite, Registre, E, PI};

fn ok(expr: &str) -> f64 {
    calculer(expr).unwrap_or_else(|e| panic!("calculer({expr:?}) erreur: {e}"))
}

fn assert_proche(expr: &str, attendu: f64, tolerance: f64) {
    let valeur = ok(expr);
    assert!(
        (valeur - attendu).abs() <= tolerance,
        "expr={expr:?} valeur={valeur} attendu={attendu} (tolérance {tolerance})"
    );
}

/* ------------------------ Précédence et parenthèses ------------------------ */

#[test]
fn precedence_de_base() {
    assert_eq!(ok("2*(3+4)"), 14.0);
    assert_eq!(ok("10/2+3"), 8.0);
    assert_eq!(ok("(1+2)*(3+4)"), 21.0);
}

/* ------------------------ Postfixe ------------------------ */

#[test]
fn increment_postfixe() {
    assert_eq!(ok("1#"), 2.0);
    assert_eq!(ok("(1+2)#"), 4.0);
    assert_eq!(ok("1#+2"), 4.0);
    assert_eq!(ok("1+2#"), 4.0);
}

#[test]
fn postfixe_enchaine() {
    // à précédence égale, le postfixe déjà empilé se réduit d'abord
    assert_eq!(ok("1##"), 3.0);
}

/* ------------------------ Fonctions variadiques ------------------------ */

#[test]
fn variadiques_simples() {
    assert_eq!(ok("max(1,2,3)"), 3.0);
    assert_eq!(ok("min(1,2,3)"), 1.0);
    assert_eq!(ok("min(max(1,2),3)"), 2.0);
}

#[test]
fn variadique_a_un_argument() {
    assert_eq!(ok("max(7)"), 7.0);
    assert_eq!(ok("min(-7)"), -7.0);
}

#[test]
fn variadiques_imbriquees_avec_negatifs() {
    // min(10,-2,2) = -2 puis max(-1,-2,1,-2) = 1
    assert_eq!(ok("max(-1,-1-1,1,min(10,-1-1,2))"), 1.0);
}

#[test]
fn arguments_composes() {
    assert_eq!(ok("max(1+2, 2*3, 10/2)"), 6.0);
    assert_eq!(ok("1+max(2,3)"), 4.0);
}

/* ------------------------ Politique de division ------------------------ */

#[test]
fn division_par_zero_est_une_valeur() {
    let v = ok("1/0");
    assert!(v.is_infinite() && v.is_sign_positive(), "1/0 -> {v}");
    assert_eq!(ok("0/0"), f64::INFINITY);
    assert_eq!(ok("-1/0"), f64::INFINITY);
}

/* ------------------------ Constantes et conversions ------------------------ */

#[test]
fn constantes_de_la_table() {
    assert_eq!(ok("PI"), PI);
    assert_eq!(ok("e"), E);
    assert_eq!(ok("e#"), E + 1.0);
}

#[test]
fn conversions_deg_rad() {
    // 150·π/180 ≈ 2.6180
    assert_proche("deg(150)", 2.6180, 1e-3);
    assert_proche("rad(PI/2)", 90.0, 1e-9);

    // l'opérateur postfixe '°' partage l'implémentation de deg
    assert_eq!(ok("150°"), ok("deg(150)"));
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn parentheses_desequilibrees() {
    assert_eq!(
        calculer("(1+2"),
        Err(ErreurCalcul::ParenthesesDesequilibrees)
    );
    assert_eq!(
        calculer("max(1,2"),
        Err(ErreurCalcul::ParenthesesDesequilibrees)
    );
}

#[test]
fn arite_invalide() {
    assert_eq!(
        calculer("deg(1,2)"),
        Err(ErreurCalcul::AriteInvalide {
            etiquette: "deg".into(),
            attendu: Arite::Exacte(1),
            recu: 2
        })
    );
    assert_eq!(
        calculer("rad()"),
        Err(ErreurCalcul::AriteInvalide {
            etiquette: "rad".into(),
            attendu: Arite::Exacte(1),
            recu: 0
        })
    );
    assert_eq!(
        calculer("min()"),
        Err(ErreurCalcul::AriteInvalide {
            etiquette: "min".into(),
            attendu: Arite::Variadique { min: 1 },
            recu: 0
        })
    );
}

/* ------------------------ Aller-retour des littéraux ------------------------ */

#[test]
fn aller_retour_litteral() {
    // ré-injecter le texte d'un résultat comme littéral redonne la valeur
    for valeur in [14.0, 8.0, 2.5, -0.75, 0.001, 12345.678, E + 1.0] {
        let texte = format_nombre(valeur);
        assert_eq!(
            calculer(&texte),
            Ok(valeur),
            "aller-retour raté pour {texte:?}"
        );
    }

    // idem sur des résultats effectivement évalués
    for expr in ["10/2+3", "deg(150)", "max(-1,-1-1,1)"] {
        let valeur = ok(expr);
        assert_eq!(calculer(&format_nombre(valeur)), Ok(valeur), "expr={expr:?}");
    }
}

/* ------------------------ Extensibilité du registre ------------------------ */

#[test]
fn etendre_la_table_sans_toucher_au_noyau() {
    fn somme(operandes: &[f64]) -> f64 {
        operandes[0] + operandes[1]
    }
    fn produit(operandes: &[f64]) -> f64 {
        operandes[0] * operandes[1]
    }
    fn oppose(operandes: &[f64]) -> f64 {
        -operandes[0]
    }
    fn moyenne(operandes: &[f64]) -> f64 {
        operandes.iter().sum::<f64>() / operandes.len() as f64
    }

    // nouvel opérateur postfixe '!' (opposé) + fonction variadique "moy"
    let registre = Registre::nouveau()
        .definir_operateur('+', 1, 2, Fixite::Infixe, somme)
        .definir_operateur('*', 2, 2, Fixite::Infixe, produit)
        .definir_operateur('!', 3, 1, Fixite::Postfixe, oppose)
        .definir_fonction("moy", Arite::Variadique { min: 1 }, moyenne)
        .definir_constante("DOUZE", 12.0);

    let (valeur, _d) = evaluer_expression_avec("2*3!+DOUZE", &registre).unwrap();
    assert_eq!(valeur, 6.0); // 2*(-3) + 12

    let (valeur, _d) = evaluer_expression_avec("moy(1, 2, 3, 6)", &registre).unwrap();
    assert_eq!(valeur, 3.0);
}
