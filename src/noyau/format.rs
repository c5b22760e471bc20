// src/noyau/format.rs

use num_rational::BigRational;

/// Forme EXACTE “n/d”, dénominateur toujours écrit (7 -> "7/1", 0 -> "0/1").
pub fn format_exact(r: &BigRational) -> String {
    format!("{}/{}", r.numer(), r.denom())
}
