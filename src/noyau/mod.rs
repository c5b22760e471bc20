//! Noyau exact : expressions infixes -> rationnel
//!
//! Organisation interne :
//! - erreurs.rs    : ErreurEval (une variante par cause)
//! - lecture.rs    : lecture décimale (tronquée / arrondie)
//! - conversion.rs : frontière rationnel <-> i64 / BigInt / f64
//! - jetons.rs     : tokenisation + prédicats de classement
//! - symboles.rs   : trait TableSymboles + table de l’hôte
//! - rpn.rs        : shunting-yard (infixe -> postfix)
//! - eval.rs       : machine à pile + pipeline complet
//! - format.rs     : affichage EXACT

pub mod conversion;
pub mod erreurs;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod lecture;
pub mod rpn;
pub mod symboles;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreurs::ErreurEval;
pub use eval::{eval_detaillee, eval_expression, DemarcheNoyau};
pub use symboles::{TableGlobale, TableSymboles};
