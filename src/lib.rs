//! Calculatrice infixe Q : évalue des expressions infixes en rationnels exacts,
//! avec appels vers les fonctions d’une table de symboles externe (hôte).
//!
//! ```ignore
//! use calculatrice_infixe::noyau::{eval_expression, TableGlobale};
//!
//! let r = eval_expression("max(1+2, 3) * 2", &TableGlobale::standard())?; // 6/1
//! ```

pub mod noyau;
