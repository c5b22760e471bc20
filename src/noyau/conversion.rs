// src/noyau/conversion.rs
//
// Frontière numérique : rationnel exact <-> i64 / BigInt / f64.
//
// Règles:
// - vers entier : troncature (vers zéro), jamais d’arrondi
// - vers f64    : texte décimal à 10 chiffres après la virgule, puis parse
// - depuis f64  : forme scientifique la plus courte ({:e}), puis parse exact
// - NaN / ±∞ ne traversent jamais : NonFini

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::ToPrimitive;

use super::erreurs::ErreurEval;
use super::lecture::lecture_arrondie;

/// Précision du passage rationnel -> f64 (chiffres après la virgule).
pub const CHIFFRES_FLOTTANT: usize = 10;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Partie entière tronquée, bornée à i64.
pub fn rationnel_vers_i64(r: &BigRational) -> Result<i64, ErreurEval> {
    let entier = r.to_integer();
    entier
        .to_i64()
        .ok_or_else(|| ErreurEval::Debordement(entier.to_string()))
}

/// Partie entière tronquée, sans borne.
pub fn rationnel_vers_bigint(r: &BigRational) -> BigInt {
    r.to_integer()
}

/// Volontairement avec perte au-delà de CHIFFRES_FLOTTANT.
pub fn rationnel_vers_f64(r: &BigRational) -> Result<f64, ErreurEval> {
    let texte = lecture_arrondie(r, CHIFFRES_FLOTTANT);
    let f: f64 = texte
        .parse()
        .map_err(|e| ErreurEval::Interne(format!("lecture f64 de {texte:?}: {e}")))?;

    if !f.is_finite() {
        return Err(ErreurEval::NonFini(format!("{r} hors des bornes f64")));
    }
    Ok(f)
}

/// f64 -> rationnel via son texte le plus court (0.1 donne 1/10, pas l’écriture binaire).
pub fn f64_vers_rationnel(f: f64) -> Result<BigRational, ErreurEval> {
    if !f.is_finite() {
        return Err(ErreurEval::NonFini(format!("{f}")));
    }

    let texte = format!("{f:e}");
    let (mantisse, exposant) = texte
        .split_once('e')
        .ok_or_else(|| ErreurEval::Interne(format!("forme scientifique inattendue: {texte}")))?;
    let exposant: i64 = exposant
        .parse()
        .map_err(|e| ErreurEval::Interne(format!("exposant {exposant:?}: {e}")))?;

    let (neg, mantisse) = match mantisse.strip_prefix('-') {
        Some(m) => (true, m),
        None => (false, mantisse),
    };
    let (ent, frac) = mantisse.split_once('.').unwrap_or((mantisse, ""));

    let chiffres = format!("{ent}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)
        .ok_or_else(|| ErreurEval::Interne(format!("mantisse {mantisse:?}")))?;

    let puissance = exposant - frac.len() as i64;
    let echelle = BigRational::from_integer(pow10(puissance.unsigned_abs() as usize));

    let mut r = BigRational::from_integer(n);
    if puissance >= 0 {
        r *= echelle;
    } else {
        r /= echelle;
    }

    Ok(if neg { -r } else { r })
}

/// Littéral numérique exact : chiffres, optionnellement “.” + chiffres.
pub fn parse_litteral(jeton: &str) -> Result<BigRational, ErreurEval> {
    let malforme = || ErreurEval::OperandeMalforme(jeton.to_string());

    let (ent, frac) = match jeton.split_once('.') {
        Some((e, f)) if !f.is_empty() => (e, f),
        Some(_) => return Err(malforme()),
        None => (jeton, ""),
    };

    let que_des_chiffres = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if ent.is_empty() || !que_des_chiffres(ent) || !que_des_chiffres(frac) {
        return Err(malforme());
    }

    let chiffres = format!("{ent}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10).ok_or_else(malforme)?;

    Ok(BigRational::new(n, pow10(frac.len())))
}
