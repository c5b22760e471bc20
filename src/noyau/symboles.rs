// src/noyau/symboles.rs
//
// Table de symboles de l’hôte (collaborateur externe, lecture seule pour le noyau).
//
// Le noyau ne voit que le trait TableSymboles : recherche par nom, “est-ce une fonction”,
// arité, application sur des f64. TableGlobale en est l’implémentation embarquée
// (celle de l’application et des tests).

use std::collections::HashMap;
use std::fmt;

/// Interface minimale exigée de l’hôte.
pub trait TableSymboles {
    /// Référence opaque vers un symbole résolu.
    type Poignee;

    fn cherche(&self, nom: &str) -> Option<Self::Poignee>;

    fn est_fonction(&self, poignee: &Self::Poignee) -> bool;

    /// Nombre d’arguments exigés (sens seulement si est_fonction).
    fn arite(&self, poignee: &Self::Poignee) -> usize;

    /// Arguments dans l’ordre d’appel (gauche -> droite).
    fn appliquer(&self, poignee: &Self::Poignee, args: &[f64]) -> Result<f64, String>;
}

pub type CorpsPrimitive = fn(&[f64]) -> Result<f64, String>;

#[derive(Clone, Copy)]
pub enum Symbole {
    /// Valeur liée (ex: CONSTANT) : résolvable mais pas appelable.
    Valeur(f64),
    Primitive { arite: usize, corps: CorpsPrimitive },
}

impl fmt::Debug for Symbole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbole::Valeur(v) => write!(f, "Valeur({v})"),
            Symbole::Primitive { arite, .. } => write!(f, "Primitive/{arite}"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct TableGlobale {
    symboles: HashMap<String, Symbole>,
}

impl TableGlobale {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table de l’application : quelques constantes + primitives numériques.
    pub fn standard() -> Self {
        let mut t = Self::new();

        t.lie_valeur("CONSTANT", 42.0);
        t.lie_valeur("pi", std::f64::consts::PI);

        t.lie_primitive("fact", 1, prim_fact);
        t.lie_primitive("sqrt", 1, prim_sqrt);
        t.lie_primitive("abs", 1, |a| Ok(a[0].abs()));
        t.lie_primitive("max", 2, |a| Ok(a[0].max(a[1])));
        t.lie_primitive("min", 2, |a| Ok(a[0].min(a[1])));

        t
    }

    pub fn lie_valeur(&mut self, nom: &str, v: f64) {
        self.symboles.insert(nom.to_string(), Symbole::Valeur(v));
    }

    pub fn lie_primitive(&mut self, nom: &str, arite: usize, corps: CorpsPrimitive) {
        self.symboles
            .insert(nom.to_string(), Symbole::Primitive { arite, corps });
    }

    /// Noms des fonctions appelables, triés (boutons de la vue).
    pub fn noms_fonctions(&self) -> Vec<String> {
        let mut noms: Vec<String> = self
            .symboles
            .iter()
            .filter(|(_, s)| matches!(s, Symbole::Primitive { .. }))
            .map(|(n, _)| n.clone())
            .collect();
        noms.sort();
        noms
    }
}

impl TableSymboles for TableGlobale {
    type Poignee = Symbole;

    fn cherche(&self, nom: &str) -> Option<Symbole> {
        self.symboles.get(nom).copied()
    }

    fn est_fonction(&self, poignee: &Symbole) -> bool {
        matches!(poignee, Symbole::Primitive { .. })
    }

    fn arite(&self, poignee: &Symbole) -> usize {
        match poignee {
            Symbole::Primitive { arite, .. } => *arite,
            Symbole::Valeur(_) => 0,
        }
    }

    fn appliquer(&self, poignee: &Symbole, args: &[f64]) -> Result<f64, String> {
        match poignee {
            Symbole::Primitive { arite, corps } => {
                if args.len() != *arite {
                    return Err(format!(
                        "{} argument(s) attendu(s), {} reçu(s)",
                        arite,
                        args.len()
                    ));
                }
                corps(args)
            }
            Symbole::Valeur(_) => Err("symbole non appelable".into()),
        }
    }
}

/* ------------------------ Primitives ------------------------ */

/// n! sur la partie entière de l’argument.
fn prim_fact(args: &[f64]) -> Result<f64, String> {
    let x = args[0];
    if !x.is_finite() || x < 0.0 {
        return Err("fact exige un argument positif et fini".into());
    }
    // 171! dépasse f64
    if x >= 171.0 {
        return Ok(f64::INFINITY);
    }
    let n = x.trunc() as u64;
    Ok((1..=n).fold(1.0, |acc, k| acc * k as f64))
}

fn prim_sqrt(args: &[f64]) -> Result<f64, String> {
    let x = args[0];
    if x < 0.0 {
        return Err("sqrt : argument négatif".into());
    }
    Ok(x.sqrt())
}
