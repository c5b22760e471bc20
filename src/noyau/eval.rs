//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> postfix (shunting-yard) -> machine à pile sur rationnels exacts
//!
//! Les fonctions viennent de la table de symboles de l’hôte (injectée) et ne parlent
//! qu’en f64 : chaque appel traverse la frontière rationnel -> f64 -> rationnel.
//! "**" passe aussi par f64 (pas de puissance exacte) : perte de précision assumée.

use num_rational::BigRational;
use num_traits::{One, Zero};

use super::conversion::{f64_vers_rationnel, parse_litteral, rationnel_vers_f64};
use super::erreurs::ErreurEval;
use super::jetons::{est_identifiant, est_operande, format_tokens, tokenize};
use super::rpn::{to_postfix, Operateur};
use super::symboles::TableSymboles;

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub postfixe: String,
    pub note: String,
}

/// API publique : évalue une expression infixe en rationnel exact.
///
/// Usage:
///   let r = eval_expression("1+2*3", &TableGlobale::standard())?; // 7/1
pub fn eval_expression<T: TableSymboles>(
    expr_str: &str,
    table: &T,
) -> Result<BigRational, ErreurEval> {
    eval_detaillee(expr_str, table).map(|(r, _d)| r)
}

/// Comme eval_expression, avec la démarche (jetons + postfix) pour la vue.
pub fn eval_detaillee<T: TableSymboles>(
    expr_str: &str,
    table: &T,
) -> Result<(BigRational, DemarcheNoyau), ErreurEval> {
    frontiere(expr_str, pipeline(expr_str, table))
}

/// Seul endroit où une faute interne devient “expression invalide”.
fn frontiere<V>(expr_str: &str, r: Result<V, ErreurEval>) -> Result<V, ErreurEval> {
    match r {
        Ok(v) => Ok(v),
        Err(ErreurEval::Interne(detail)) => {
            log::error!("faute interne pour {expr_str:?}: {detail}");
            Err(ErreurEval::ExpressionInvalide(expr_str.to_string()))
        }
        Err(e) => Err(e),
    }
}

fn pipeline<T: TableSymboles>(
    expr_str: &str,
    table: &T,
) -> Result<(BigRational, DemarcheNoyau), ErreurEval> {
    // 1) Jetons
    let jetons = tokenize(expr_str);
    log::debug!("jetons: {jetons:?}");

    // 2) Postfix
    let postfixe = to_postfix(&jetons, table)?;
    log::debug!("postfix: {postfixe:?}");

    // 3) Machine à pile
    let r = eval_postfix(&postfixe, table)?;

    let d = DemarcheNoyau {
        jetons: format_tokens(&jetons),
        postfixe: format_tokens(&postfixe),
        note: "Pipeline: jetons → postfix → pile de rationnels (fonctions et ** via f64).".into(),
    };

    Ok((r, d))
}

/* ------------------------ Machine à pile ------------------------ */

/// Pile d’opérandes : que des rationnels. Dépiler à vide est une erreur.
#[derive(Default)]
struct PileOperandes(Vec<BigRational>);

impl PileOperandes {
    fn empile(&mut self, v: BigRational) {
        self.0.push(v);
    }

    /// `jeton` : qui réclame l’opérande (pour le message d’erreur).
    fn depile(&mut self, jeton: &str) -> Result<BigRational, ErreurEval> {
        self.0
            .pop()
            .ok_or_else(|| ErreurEval::OperandesInsuffisants(jeton.to_string()))
    }
}

/// Évalue une suite postfix, de gauche à droite.
pub fn eval_postfix<T: TableSymboles>(
    postfix: &[String],
    table: &T,
) -> Result<BigRational, ErreurEval> {
    let mut pile = PileOperandes::default();

    for tok in postfix.iter().map(String::as_str) {
        log::trace!("jeton {tok:?}, profondeur {}", pile.0.len());

        if est_operande(tok) {
            pile.empile(parse_litteral(tok)?);
        } else if let Some(op) = Operateur::depuis_jeton(tok) {
            let op2 = pile.depile(tok)?;
            let op1 = pile.depile(tok)?;
            pile.empile(applique_operateur(op, op1, op2)?);
        } else if est_identifiant(tok) {
            let v = applique_fonction(tok, &mut pile, table)?;
            pile.empile(v);
        } else {
            return Err(ErreurEval::JetonInconnu(tok.to_string()));
        }
    }

    match pile.0.len() {
        0 => Err(ErreurEval::AucunResultat),
        1 => pile.depile("résultat"),
        n => Err(ErreurEval::ValeursResiduelles(n)),
    }
}

fn booleen(b: bool) -> BigRational {
    if b {
        BigRational::one()
    } else {
        BigRational::zero()
    }
}

/// op1 a été empilé en premier : op1 - op2, op1 / op2, etc.
fn applique_operateur(
    op: Operateur,
    op1: BigRational,
    op2: BigRational,
) -> Result<BigRational, ErreurEval> {
    match op {
        Operateur::Plus => Ok(op1 + op2),
        Operateur::Moins => Ok(op1 - op2),
        Operateur::Fois => Ok(op1 * op2),
        Operateur::Divise => {
            if op2.is_zero() {
                return Err(ErreurEval::Arithmetique(format!("division par zéro ({op1} / 0)")));
            }
            Ok(op1 / op2)
        }
        Operateur::Puissance => {
            let x = rationnel_vers_f64(&op1)?;
            let y = rationnel_vers_f64(&op2)?;
            f64_vers_rationnel(x.powf(y))
        }
        Operateur::Inferieur => Ok(booleen(op1 < op2)),
        Operateur::Superieur => Ok(booleen(op1 > op2)),
    }
}

/// Dépile l’arité, remet les arguments dans l’ordre d’appel, appelle l’hôte en f64.
fn applique_fonction<T: TableSymboles>(
    nom: &str,
    pile: &mut PileOperandes,
    table: &T,
) -> Result<BigRational, ErreurEval> {
    let poignee = table
        .cherche(nom)
        .ok_or_else(|| ErreurEval::SymboleInconnu(nom.to_string()))?;
    if !table.est_fonction(&poignee) {
        return Err(ErreurEval::PasUneFonction(nom.to_string()));
    }

    let k = table.arite(&poignee);
    let mut args = Vec::with_capacity(k);
    for _ in 0..k {
        let v = pile.depile(nom)?;
        args.push(rationnel_vers_f64(&v)?);
    }
    // dépilés du dernier au premier
    args.reverse();

    let r = table.appliquer(&poignee, &args).map_err(|message| {
        log::warn!("{nom}({args:?}) a échoué: {message}");
        ErreurEval::Application {
            nom: nom.to_string(),
            message,
        }
    })?;

    f64_vers_rationnel(r)
}
