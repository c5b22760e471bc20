//! src/config.rs
//!
//! Configuration de l’application (variables d’environnement, valeurs par défaut sinon).
//!
//! - CALC_DIGITS : chiffres de la lecture décimale (borné à DIGITS_MAX)
//! - CALC_LOG    : filtre de journalisation (lu directement par env_logger dans main.rs)

use std::env;

/// Précision de la lecture décimale par défaut (tronquée).
pub const DIGITS_DEFAUT: usize = 20;

/// Garde-fou : on borne la précision (anti-abus / anti-gel).
pub const DIGITS_MAX: usize = 200;

pub const VAR_DIGITS: &str = "CALC_DIGITS";
pub const VAR_LOG: &str = "CALC_LOG";
pub const FILTRE_LOG_DEFAUT: &str = "info";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigCalc {
    pub digits: usize,
}

impl Default for ConfigCalc {
    fn default() -> Self {
        Self {
            digits: DIGITS_DEFAUT,
        }
    }
}

impl ConfigCalc {
    pub fn depuis_env() -> Self {
        Self::depuis(|cle| env::var(cle).ok())
    }

    /// `lire` : accès aux variables (injecté pour les tests).
    fn depuis(lire: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(brut) = lire(VAR_DIGITS) {
            match brut.trim().parse::<usize>() {
                Ok(d) if d <= DIGITS_MAX => config.digits = d,
                Ok(d) => {
                    log::warn!("{VAR_DIGITS}={d} ramené à {DIGITS_MAX}");
                    config.digits = DIGITS_MAX;
                }
                Err(e) => {
                    log::warn!("{VAR_DIGITS}={brut:?} ignoré ({e}), défaut {DIGITS_DEFAUT}");
                }
            }
        }

        log::debug!("configuration: {config:?}");
        config
    }
}
