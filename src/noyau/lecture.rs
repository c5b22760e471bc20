// src/noyau/lecture.rs
//
// Lecture décimale d’un rationnel exact (texte), tronquée ou arrondie.
// Sert à l’affichage et au passage vers f64 (conversion.rs).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal.
pub fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    if digits == 0 {
        return if neg {
            format!("-{int_part}")
        } else {
            format!("{int_part}")
        };
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    if neg {
        format!("-{int_part}.{frac}")
    } else {
        format!("{int_part}.{frac}")
    }
}

/// r -> entier “scalé” = trunc(r * 10^digits) (vers zéro)
pub fn rational_scaled(r: &BigRational, digits: usize) -> BigInt {
    let scale = pow10(digits);
    (r.numer() * scale) / r.denom()
}

/// r -> entier “scalé” arrondi au plus proche, moitiés loin de zéro.
pub fn rational_scaled_arrondi(r: &BigRational, digits: usize) -> BigInt {
    let num = r.numer() * pow10(digits);
    let d = r.denom();

    let q = &num / d;
    let reste = &num % d;

    if reste.abs() * 2u32 >= *d {
        if num.is_negative() {
            q - 1u32
        } else {
            q + 1u32
        }
    } else {
        q
    }
}

/// Lecture décimale tronquée (affichage).
pub fn lecture_tronquee(r: &BigRational, digits: usize) -> String {
    scaled_to_decimal(rational_scaled(r, digits), digits)
}

/// Lecture décimale arrondie (passage vers f64).
pub fn lecture_arrondie(r: &BigRational, digits: usize) -> String {
    scaled_to_decimal(rational_scaled_arrondi(r, digits), digits)
}
