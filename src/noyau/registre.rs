// src/noyau/registre.rs
//
// Registre des opérateurs, fonctions et constantes.
// --------------------------------------------------
// But:
// - une seule table immuable, construite au démarrage, injectée partout
//   (jamais d'état global mutable dans le découpeur/parseur/évaluateur)
// - étendre la calculatrice = ajouter une entrée ici, rien d'autre
//
// NOTE: π est la valeur littérale de la table, PAS std::f64::consts::PI.
// Les conversions deg/rad (et l'opérateur '°') s'appuient dessus.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use num_traits::Zero;

/// π de la table.
pub const PI: f64 = 3.14159265359;

/// e de la table.
pub const E: f64 = 2.71828182846;

/// Implémentation pure d'un opérateur ou d'une fonction.
/// L'arité est vérifiée AVANT l'appel (parseur puis évaluateur).
pub type Implementation = fn(&[f64]) -> f64;

/// Position syntaxique d'un opérateur par rapport à son/ses opérande(s).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fixite {
    Infixe,
    Postfixe,
}

/// Arité d'une fonction : exacte, ou variadique avec un minimum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arite {
    Exacte(usize),
    Variadique { min: usize },
}

impl Arite {
    pub fn accepte(&self, n: usize) -> bool {
        match self {
            Arite::Exacte(k) => n == *k,
            Arite::Variadique { min } => n >= *min,
        }
    }
}

impl fmt::Display for Arite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arite::Exacte(k) => write!(f, "exactement {k}"),
            Arite::Variadique { min } => write!(f, "au moins {min}"),
        }
    }
}

/// Spécification d'un opérateur (symbole à un caractère).
#[derive(Clone)]
pub struct SpecOperateur {
    pub symbole: char,
    /// Plus grand = lie plus fort.
    pub precedence: u8,
    pub arite: usize,
    pub fixite: Fixite,
    pub implementation: Implementation,
}

/// Spécification d'une fonction nommée.
#[derive(Clone)]
pub struct SpecFonction {
    pub nom: String,
    pub arite: Arite,
    pub implementation: Implementation,
}

/// Table immuable opérateurs + fonctions + constantes.
///
/// Construction par appels chaînés puis gel :
/// `Registre::nouveau().definir_operateur(...).definir_constante(...)`.
/// Après construction, lecture seule (partageable entre threads).
pub struct Registre {
    operateurs: HashMap<char, SpecOperateur>,
    fonctions: HashMap<String, SpecFonction>,
    constantes: HashMap<String, f64>,
}

impl Registre {
    pub fn nouveau() -> Self {
        Self {
            operateurs: HashMap::new(),
            fonctions: HashMap::new(),
            constantes: HashMap::new(),
        }
    }

    pub fn definir_operateur(
        mut self,
        symbole: char,
        precedence: u8,
        arite: usize,
        fixite: Fixite,
        implementation: Implementation,
    ) -> Self {
        self.operateurs.insert(
            symbole,
            SpecOperateur {
                symbole,
                precedence,
                arite,
                fixite,
                implementation,
            },
        );
        self
    }

    pub fn definir_fonction(mut self, nom: &str, arite: Arite, implementation: Implementation) -> Self {
        self.fonctions.insert(
            nom.to_string(),
            SpecFonction {
                nom: nom.to_string(),
                arite,
                implementation,
            },
        );
        self
    }

    pub fn definir_constante(mut self, nom: &str, valeur: f64) -> Self {
        self.constantes.insert(nom.to_string(), valeur);
        self
    }

    /// Table canonique :
    ///
    /// | genre     | nom  | précédence | arité        | fixité   |
    /// |-----------|------|------------|--------------|----------|
    /// | opérateur | `+`  | 1          | 2            | infixe   |
    /// | opérateur | `-`  | 1          | 2            | infixe   |
    /// | opérateur | `*`  | 2          | 2            | infixe   |
    /// | opérateur | `/`  | 2          | 2            | infixe   |
    /// | opérateur | `#`  | 3          | 1            | postfixe |
    /// | opérateur | `°`  | 3          | 1            | postfixe |
    /// | fonction  | max  | —          | variadique≥1 | —        |
    /// | fonction  | min  | —          | variadique≥1 | —        |
    /// | fonction  | deg  | —          | exacte 1     | —        |
    /// | fonction  | rad  | —          | exacte 1     | —        |
    /// | constante | PI   | —          | —            | —        |
    /// | constante | e    | —          | —            | —        |
    pub fn standard() -> Self {
        Self::nouveau()
            .definir_operateur('+', 1, 2, Fixite::Infixe, somme)
            .definir_operateur('-', 1, 2, Fixite::Infixe, difference)
            .definir_operateur('*', 2, 2, Fixite::Infixe, produit)
            .definir_operateur('/', 2, 2, Fixite::Infixe, quotient)
            .definir_operateur('#', 3, 1, Fixite::Postfixe, increment)
            .definir_operateur('°', 3, 1, Fixite::Postfixe, degres_vers_radians)
            .definir_fonction("max", Arite::Variadique { min: 1 }, maximum)
            .definir_fonction("min", Arite::Variadique { min: 1 }, minimum)
            .definir_fonction("deg", Arite::Exacte(1), degres_vers_radians)
            .definir_fonction("rad", Arite::Exacte(1), radians_vers_degres)
            .definir_constante("PI", PI)
            .definir_constante("e", E)
    }

    pub fn operateur(&self, symbole: char) -> Option<&SpecOperateur> {
        self.operateurs.get(&symbole)
    }

    pub fn fonction(&self, nom: &str) -> Option<&SpecFonction> {
        self.fonctions.get(nom)
    }

    pub fn constante(&self, nom: &str) -> Option<f64> {
        self.constantes.get(nom).copied()
    }

    pub fn est_operateur(&self, symbole: char) -> bool {
        self.operateurs.contains_key(&symbole)
    }

    pub fn est_fonction(&self, nom: &str) -> bool {
        self.fonctions.contains_key(nom)
    }

    pub fn est_constante(&self, nom: &str) -> bool {
        self.constantes.contains_key(nom)
    }
}

/// Registre standard partagé (construit au premier accès, lecture seule ensuite).
pub fn registre_standard() -> &'static Registre {
    static REGISTRE: OnceLock<Registre> = OnceLock::new();
    REGISTRE.get_or_init(Registre::standard)
}

/* ------------------------ Implémentations de la table ------------------------ */

fn somme(operandes: &[f64]) -> f64 {
    operandes[0] + operandes[1]
}

fn difference(operandes: &[f64]) -> f64 {
    operandes[0] - operandes[1]
}

fn produit(operandes: &[f64]) -> f64 {
    operandes[0] * operandes[1]
}

/// Diviseur nul -> +infini, jamais d'erreur (politique de la table,
/// y compris pour 0/0 et -1/0).
fn quotient(operandes: &[f64]) -> f64 {
    if operandes[1].is_zero() {
        f64::INFINITY
    } else {
        operandes[0] / operandes[1]
    }
}

fn increment(operandes: &[f64]) -> f64 {
    operandes[0] + 1.0
}

fn degres_vers_radians(operandes: &[f64]) -> f64 {
    operandes[0] * PI / 180.0
}

fn radians_vers_degres(operandes: &[f64]) -> f64 {
    operandes[0] * 180.0 / PI
}

/// max/min : réductions pures sur la liste évaluée.
/// Un seul argument s'évalue à lui-même.
fn maximum(operandes: &[f64]) -> f64 {
    operandes.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

fn minimum(operandes: &[f64]) -> f64 {
    operandes.iter().copied().fold(f64::INFINITY, f64::min)
}
