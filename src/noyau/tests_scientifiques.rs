//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : trouver les limites sans faire chauffer la machine.
//! - budget temps global
//! - tailles bornées (profondeur, longueur)
//!
//! Notes importantes (aligné avec l’état actuel du noyau) :
//! - "+ - * /" sont exacts : on compare des rationnels, jamais des f64.
//! - "**" et les fonctions passent par f64 : on compare à une tolérance près.
//! - "**" est associatif à gauche (choix du noyau) : on le vérifie explicitement.

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;

use super::conversion::{f64_vers_rationnel, rationnel_vers_f64};
use super::{eval_expression, ErreurEval, TableGlobale};

fn rat(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

fn eval_ok(expr: &str) -> BigRational {
    eval_expression(expr, &TableGlobale::standard())
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_exact_eq(expr: &str, attendu: BigRational) {
    assert_eq!(eval_ok(expr), attendu, "expr={expr:?}");
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Invariants arithmétiques ------------------------ */

#[test]
fn sci_identites_rationnelles() {
    // a/b * b == a pour b != 0
    for a in 1..=9 {
        for b in 1..=9 {
            assert_exact_eq(&format!("{a}/{b}*{b}"), rat(a, 1));
        }
    }
}

#[test]
fn sci_soustraction_gauche_droite() {
    // op1 - op2 : l’ordre de dépilement ne doit pas inverser
    assert_exact_eq("10-4", rat(6, 1));
    assert_exact_eq("4-10", rat(-6, 1));
    assert_exact_eq("1/4-1/2", rat(-1, 4));
    assert_exact_eq("10-4-3-2-1", rat(0, 1));
}

#[test]
fn sci_decimaux_sans_erreur_binaire() {
    // en f64 : 0.1+0.2 != 0.3 ; ici égalité exacte
    assert_eq!(eval_ok("0.1+0.2"), eval_ok("0.3"));
    assert_exact_eq("0.125*8", rat(1, 1));
    assert_exact_eq("1.5+2.25", rat(15, 4));
}

#[test]
fn sci_comparaisons_binaires_seulement() {
    let zero = rat(0, 1);
    let un = rat(1, 1);
    for (a, b) in [(1, 2), (2, 1), (3, 3), (0, 7)] {
        for op in ["<", ">"] {
            let r = eval_ok(&format!("{a}{op}{b}"));
            assert!(r == zero || r == un, "{a}{op}{b} -> {r}");
        }
    }
}

/* ------------------------ Puissance (via f64) ------------------------ */

#[test]
fn sci_puissance_gauche_pas_droite() {
    assert_exact_eq("2**3**2", rat(64, 1));
    assert_ne!(eval_ok("2**3**2"), rat(512, 1));
    assert_exact_eq("2**(3**2)", rat(512, 1));
}

#[test]
fn sci_puissances_entieres_exactes_en_pratique() {
    // petites puissances entières : f64 les représente exactement
    for b in 1..=6 {
        for e in 0..=6 {
            let attendu = BigInt::from(b).pow(e as u32);
            assert_exact_eq(&format!("{b}**{e}"), BigRational::from_integer(attendu));
        }
    }
}

/* ------------------------ Frontière f64 ------------------------ */

#[test]
fn sci_aller_retour_f64() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut f = 1.0e-6_f64;
    while f < 1.0e12 {
        budget(t0, max);
        for x in [f, -f, f * 3.7, -f / 7.0] {
            let r = f64_vers_rationnel(x).unwrap_or_else(|e| panic!("x={x} err={e}"));
            let y = rationnel_vers_f64(&r).unwrap_or_else(|e| panic!("x={x} err={e}"));
            // 10 décimales fixes : tolérance absolue 1e-10 + relative f64
            let tol = 1e-10 + x.abs() * 1e-15;
            assert!((x - y).abs() <= tol, "x={x} y={y}");
        }
        f *= 10.0;
    }
}

#[test]
fn sci_fonctions_hote_en_f64() {
    // sqrt(2)**2 ≈ 2, mais pas exactement (passage f64 assumé)
    let r = eval_ok("sqrt(2)**2");
    let f = rationnel_vers_f64(&r).unwrap();
    assert!((f - 2.0).abs() < 1e-9, "f={f}");

    assert_exact_eq("fact(10)", rat(3_628_800, 1));
    assert_exact_eq("abs(3-10)", rat(7, 1));
}

/* ------------------------ Erreurs ciblées ------------------------ */

#[test]
fn sci_division_par_zero_toujours_refusee() {
    for a in ["0", "1", "7/3", "fact(4)", "2**10"] {
        let expr = format!("({a})/0");
        match eval_expression(&expr, &TableGlobale::standard()) {
            Err(ErreurEval::Arithmetique(_)) => {}
            autre => panic!("expr={expr:?} -> {autre:?}"),
        }
    }
}

#[test]
fn sci_symbole_jamais_ignore() {
    for nom in ["foo", "Fact", "CONST", "x"] {
        let expr = format!("1+{nom}(2)");
        assert_eq!(
            eval_expression(&expr, &TableGlobale::standard()),
            Err(ErreurEval::SymboleInconnu(nom.to_string())),
            "expr={expr:?}"
        );
    }
}

/* ------------------------ Stress borné ------------------------ */

#[test]
fn sci_parentheses_profondes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let n = 500;
    let expr = format!("{}1{}", "(".repeat(n), "+1)".repeat(n));
    budget(t0, max);
    assert_exact_eq(&expr, rat(n as i64 + 1, 1));
    budget(t0, max);
}

#[test]
fn sci_grands_entiers_exacts() {
    // 10^30 en entier exact, au-delà de f64 et i64
    let dix_30 = format!("1{}", "0".repeat(30));
    let r = eval_ok(&format!("{dix_30}*{dix_30}+1"));
    let attendu = BigInt::from(10).pow(60) + 1;
    assert_eq!(r, BigRational::from_integer(attendu));
}
