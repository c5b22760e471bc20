//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultats, erreur, digits, démarche,
//! table de symboles de l’hôte) et offrir des opérations simples (C/CLR/AC).
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing) : c’est vue.rs qui appelle le noyau.
//! - Actions déterministes, sans effet de bord caché.
//! - Défense en profondeur : bornes sur la lecture décimale (digits).

use calculatrice_infixe::noyau::TableGlobale;

use crate::config::{ConfigCalc, DIGITS_MAX};

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub postfixe: String,
    pub note: String,
}

/// Sorties d’une évaluation réussie, déjà mises en texte.
#[derive(Clone, Default, Debug)]
pub struct Sorties {
    pub exact: String,
    pub lecture: String,
    pub entier: String,
    pub entier_machine: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub sorties: Sorties,
    pub erreur: String,      // message d’erreur (si parsing/éval échoue)
    pub resultat_dispo: bool, // false au démarrage / après erreur

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub digits: usize, // précision de la lecture décimale
    digits_defaut: usize,

    // --- hôte : table de symboles (lecture seule pour le noyau) ---
    pub table: TableGlobale,
    pub fonctions: Vec<String>, // noms appelables (boutons)

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(ConfigCalc::default())
    }
}

impl AppCalc {
    pub fn new(config: ConfigCalc) -> Self {
        let table = TableGlobale::standard();
        let fonctions = table.noms_fonctions();
        Self {
            entree: String::new(),
            sorties: Sorties::default(),
            erreur: String::new(),
            resultat_dispo: false, // au démarrage : rien à lire
            demarche: Demarche::default(),
            digits: config.digits.min(DIGITS_MAX),
            digits_defaut: config.digits.min(DIGITS_MAX),
            table,
            fonctions,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + digits de la configuration).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.digits = self.digits_defaut;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    fn clear_demarche(&mut self) {
        self.demarche = Demarche::default();
    }

    /// CLR : effacer résultats + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.sorties = Sorties::default();
        self.erreur.clear();
        self.resultat_dispo = false;
        self.clear_demarche();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE `sorties.exact` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    /// - On coupe les lectures dérivées + la démarche (non fiables si l’évaluation échoue).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();

        self.sorties.lecture.clear();
        self.sorties.entier.clear();
        self.sorties.entier_machine.clear();
        self.resultat_dispo = false;

        self.clear_demarche();

        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (sorties + démarche).
    pub fn set_resultats(&mut self, sorties: Sorties, demarche: Demarche) {
        self.erreur.clear();
        self.sorties = sorties;
        self.demarche = demarche;
        self.resultat_dispo = true;
        self.focus_entree = true;
    }

    /// Garde-fou : limite digits (évite abus / gel plus tard).
    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
        self.focus_entree = true;
    }
}
