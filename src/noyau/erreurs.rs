// src/noyau/erreurs.rs
//
// Erreurs du noyau : une seule enum, retournée (jamais paniquée) par chaque étape.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurEval {
    #[error("symbole inconnu: {0}")]
    SymboleInconnu(String),

    #[error("{0} n’est pas une fonction")]
    PasUneFonction(String),

    #[error("jeton inconnu: {0}")]
    JetonInconnu(String),

    #[error("opérande malformé: {0}")]
    OperandeMalforme(String),

    #[error("opérandes insuffisants pour {0}")]
    OperandesInsuffisants(String),

    #[error("erreur arithmétique: {0}")]
    Arithmetique(String),

    #[error("aucun résultat")]
    AucunResultat,

    #[error("débordement entier: {0}")]
    Debordement(String),

    #[error("expression invalide: {0}")]
    ExpressionInvalide(String),

    #[error("parenthèses: {0}")]
    Parentheses(String),

    #[error("{0} valeurs restent sur la pile (une seule attendue)")]
    ValeursResiduelles(usize),

    #[error("valeur non finie: {0}")]
    NonFini(String),

    #[error("{nom}: {message}")]
    Application { nom: String, message: String },

    #[error("{nom} attend {attendue} argument(s), {recue} fourni(s)")]
    Arite {
        nom: String,
        attendue: usize,
        recue: usize,
    },

    // Ne sort jamais de eval_detaillee : converti en ExpressionInvalide.
    #[error("faute interne: {0}")]
    Interne(String),
}
