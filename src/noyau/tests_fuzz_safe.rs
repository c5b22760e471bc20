//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : aucune entrée ne panique, toute erreur est une ErreurEval “publique”
//!   (jamais Interne, qui ne doit pas sortir du noyau)

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;

use super::{eval_expression, ErreurEval, TableGlobale};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn is_erreur_attendue(e: &ErreurEval) -> bool {
    // Liste blanche : erreurs *normales* pour un fuzz (domaine volontairement limité).
    matches!(
        e,
        ErreurEval::Arithmetique(_)
            | ErreurEval::NonFini(_)
            | ErreurEval::Application { .. }
            | ErreurEval::AucunResultat
    )
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // inclut 0 (utile pour les divisions par zéro)
    let a = rng.pick(10);
    if rng.coin() {
        format!("{a}.{}", rng.pick(100))
    } else {
        format!("{a}")
    }
}

fn gen_expr(rng: &mut Rng, profondeur: u32) -> String {
    if profondeur == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(6) {
        0 => gen_nombre(rng),
        1 => format!("({})", gen_expr(rng, profondeur - 1)),
        2 => {
            let f = match rng.pick(3) {
                0 => "fact",
                1 => "sqrt",
                _ => "abs",
            };
            format!("{f}({})", gen_expr(rng, profondeur - 1))
        }
        3 => {
            let f = if rng.coin() { "max" } else { "min" };
            format!(
                "{f}({}, {})",
                gen_expr(rng, profondeur - 1),
                gen_expr(rng, profondeur - 1)
            )
        }
        _ => {
            // "**" rare : évite les exposants géants en cascade
            let op = match rng.pick(13) {
                0 | 1 | 2 => "+",
                3 | 4 | 5 => "-",
                6 | 7 | 8 => "*",
                9 | 10 => "/",
                11 => {
                    if rng.coin() {
                        "<"
                    } else {
                        ">"
                    }
                }
                _ => "**",
            };
            format!(
                "{} {op} {}",
                gen_expr(rng, profondeur - 1),
                gen_expr(rng, profondeur - 1)
            )
        }
    }
}

/// Abîme une expression valide : coupe, ajoute, ou remplace un caractère.
fn abime(rng: &mut Rng, expr: &str) -> String {
    let chars: Vec<char> = expr.chars().collect();
    if chars.is_empty() {
        return ")".to_string();
    }
    let i = rng.pick(chars.len() as u32) as usize;
    let bruit = ['(', ')', ',', '*', '+', '$', '.', 'q', ' '];
    let c = bruit[rng.pick(bruit.len() as u32) as usize];

    let mut out: Vec<char> = chars.clone();
    match rng.pick(3) {
        0 => out.truncate(i),
        1 => out.insert(i, c),
        _ => out[i] = c,
    }
    out.into_iter().collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_erreurs_attendues() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);
    let table = TableGlobale::standard();

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..150 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        let a = eval_expression(&expr, &table);
        let b = eval_expression(&expr, &table);
        assert_eq!(a, b, "non déterministe: expr={expr:?}");

        match a {
            Ok(_) => seen_ok += 1,
            Err(e) => {
                // Expressions bien formées : seules les erreurs de domaine sont admises.
                assert!(
                    is_erreur_attendue(&e),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_entrees_abimees_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);
    let table = TableGlobale::standard();

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let propre = gen_expr(&mut rng, 3);
        let expr = abime(&mut rng, &propre);

        // Ok ou Err, peu importe : jamais de panique, jamais de faute interne.
        if let Err(e) = eval_expression(&expr, &table) {
            assert!(
                !matches!(e, ErreurEval::Interne(_)),
                "faute interne sortie: expr={expr:?}"
            );
        }
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let expr = somme_balancee("1/2", 800);
    budget(t0, max);

    let r = eval_expression(&expr, &TableGlobale::standard())
        .unwrap_or_else(|e| panic!("err: {e}"));

    // 800*(1/2) = 400
    assert_eq!(r, BigRational::from_integer(BigInt::from(400)));
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}
