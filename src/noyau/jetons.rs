// src/noyau/jetons.rs

use super::erreur::ErreurCalcul;
use super::format::format_nombre;
use super::registre::Registre;

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),
    Fonction(String),
    Operateur(char),
    Separateur,
    ParenOuvrante,
    ParenFermante,
}

/// Découpe une chaîne en jetons, en consultant le registre.
/// Supporte:
/// - numéraux (ex: 12, 3.5, .5) -> Nombre
/// - moins "signe" replié dans le numéral qui suit (début d'expression,
///   après '(' ou après ',') -> Nombre négatif ; ailleurs '-' est un opérateur
/// - identifiants alphabétiques : fonction du registre -> Fonction,
///   constante du registre -> Nombre (valeur), sinon erreur
/// - symboles d'opérateurs du registre, parenthèses, ','
/// - blancs ignorés ; tout autre caractère est ignoré
///
/// Échoue avec NombreInvalide (numéral mal formé, ex: "1.2.3") ou
/// IdentifiantInconnu. Positions comptées en caractères.
pub fn decouper(s: &str, registre: &Registre) -> Result<Vec<Jeton>, ErreurCalcul> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses + séparateur
        if c == '(' {
            out.push(Jeton::ParenOuvrante);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Jeton::ParenFermante);
            i += 1;
            continue;
        }
        if c == ',' {
            out.push(Jeton::Separateur);
            i += 1;
            continue;
        }

        // Moins "signe" : replié dans le numéral qui suit.
        // Conditions: un numéral commence juste après, ET on est en début
        // d'expression, juste après '(' ou juste après ','.
        if c == '-' && debute_un_numeral(chars.get(i + 1)) && position_de_signe(&out) {
            let (valeur, fin) = lire_numeral(&chars, i + 1)?;
            out.push(Jeton::Nombre(-valeur));
            i = fin;
            continue;
        }

        // Numéral
        if c.is_ascii_digit() || c == '.' {
            let (valeur, fin) = lire_numeral(&chars, i)?;
            out.push(Jeton::Nombre(valeur));
            i = fin;
            continue;
        }

        // Identifiant alphabétique : fonction, constante, sinon erreur
        // (choix délibéré : rejeter plutôt qu'ignorer, voir DESIGN.md).
        if c.is_alphabetic() {
            let debut = i;
            while i < chars.len() && chars[i].is_alphabetic() {
                i += 1;
            }
            let nom: String = chars[debut..i].iter().collect();

            if registre.est_fonction(&nom) {
                out.push(Jeton::Fonction(nom));
            } else if let Some(valeur) = registre.constante(&nom) {
                out.push(Jeton::Nombre(valeur));
            } else {
                return Err(ErreurCalcul::IdentifiantInconnu {
                    nom,
                    position: debut,
                });
            }
            continue;
        }

        // Symbole d'opérateur connu du registre
        if registre.est_operateur(c) {
            out.push(Jeton::Operateur(c));
            i += 1;
            continue;
        }

        // Tout autre caractère est ignoré silencieusement.
        i += 1;
    }

    Ok(out)
}

/// Un numéral commence par un chiffre ou '.'.
fn debute_un_numeral(c: Option<&char>) -> bool {
    matches!(c, Some(c) if c.is_ascii_digit() || *c == '.')
}

/// Le '-' est un signe en début d'expression, après '(' ou après ','.
fn position_de_signe(jetons: &[Jeton]) -> bool {
    match jetons.last() {
        None => true,
        Some(Jeton::ParenOuvrante) | Some(Jeton::Separateur) => true,
        _ => false,
    }
}

/// Consomme chiffres et '.' contigus à partir de `debut`, parse en f64.
/// Retourne (valeur, index de fin). "1.2.3" ou "." -> NombreInvalide.
fn lire_numeral(chars: &[char], debut: usize) -> Result<(f64, usize), ErreurCalcul> {
    let mut fin = debut;
    while fin < chars.len() && (chars[fin].is_ascii_digit() || chars[fin] == '.') {
        fin += 1;
    }

    let fragment: String = chars[debut..fin].iter().collect();
    match fragment.parse::<f64>() {
        Ok(valeur) => Ok((valeur, fin)),
        Err(_) => Err(ErreurCalcul::NombreInvalide {
            fragment,
            position: debut,
        }),
    }
}

/// Format utilitaire (démarche/debug) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let mut out = Vec::new();
    for j in jetons {
        let s = match j {
            Jeton::Nombre(v) => format_nombre(*v),
            Jeton::Fonction(nom) => nom.clone(),
            Jeton::Operateur(symbole) => symbole.to_string(),
            Jeton::Separateur => ",".to_string(),
            Jeton::ParenOuvrante => "(".to_string(),
            Jeton::ParenFermante => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
