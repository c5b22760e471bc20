// src/noyau/rpn.rs
//
// Shunting-yard : jetons infixes -> postfix (RPN), toujours en texte.
//
// Règles:
// - Ident(name) : doit exister dans la table ET être une fonction ; le nom attend
//   sur sa propre pile et sort juste après la parenthèse fermante de son appel.
// - Tous les opérateurs sont associatifs à gauche, "**" compris :
//   "2**3**2" == (2**3)**2. Choix assumé, pas la convention mathématique.
// - Virgule : sépare les arguments (vide les opérateurs jusqu’à la "(" de l’appel),
//   au lieu d’être ignorée : sinon "max(1+2,3)" passerait 1 et 5 à max.
// - Appel : le nombre d’arguments écrits doit égaler l’arité de la fonction.
// - Jeton inconnu : recopié tel quel, l’évaluation le refusera.
//
// Deux piles typées : contrôle (opérateurs / parenthèses) et noms de fonctions en attente.

use super::erreurs::ErreurEval;
use super::jetons::est_identifiant;
use super::symboles::TableSymboles;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
    Inferieur,
    Superieur,
}

impl Operateur {
    pub fn depuis_jeton(jeton: &str) -> Option<Self> {
        Some(match jeton {
            "+" => Operateur::Plus,
            "-" => Operateur::Moins,
            "*" => Operateur::Fois,
            "/" => Operateur::Divise,
            "**" => Operateur::Puissance,
            "<" => Operateur::Inferieur,
            ">" => Operateur::Superieur,
            _ => return None,
        })
    }

    /// Comparaisons au plus bas : "1+1 < 3" compare 2 et 3.
    pub fn precedence(self) -> i32 {
        match self {
            Operateur::Inferieur | Operateur::Superieur => 0,
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise => 2,
            Operateur::Puissance => 3,
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "*",
            Operateur::Divise => "/",
            Operateur::Puissance => "**",
            Operateur::Inferieur => "<",
            Operateur::Superieur => ">",
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Controle {
    Op(Operateur),
    /// `appel` : cette parenthèse ouvre la liste d’arguments d’une fonction.
    /// `virgules` : séparateurs vus à ce niveau.
    ParenG { appel: bool, virgules: usize },
}

/// Fonction en attente de sa ")" : nom + arité annoncée par la table.
struct Appel {
    nom: String,
    arite: usize,
}

/// Convertit une suite de jetons en postfix.
///
/// Exemple:
///   tokens: ["max", "(", "1", "+", "2", ",", "3", ")"]
///   rpn:    ["1", "2", "+", "3", "max"]
pub fn to_postfix<T: TableSymboles>(
    tokens: &[String],
    table: &T,
) -> Result<Vec<String>, ErreurEval> {
    let mut out: Vec<String> = Vec::new();
    let mut ops: Vec<Controle> = Vec::new();
    let mut fonctions: Vec<Appel> = Vec::new();

    // vrai juste après un nom de fonction : le jeton suivant doit être "("
    let mut attend_paren = false;
    let mut precedent: Option<&str> = None;

    for tok in tokens.iter().map(String::as_str) {
        if attend_paren && tok != "(" {
            return Err(appel_sans_parentheses(&fonctions));
        }

        if est_identifiant(tok) {
            let poignee = table
                .cherche(tok)
                .ok_or_else(|| ErreurEval::SymboleInconnu(tok.to_string()))?;
            if !table.est_fonction(&poignee) {
                return Err(ErreurEval::PasUneFonction(tok.to_string()));
            }
            fonctions.push(Appel {
                nom: tok.to_string(),
                arite: table.arite(&poignee),
            });
            attend_paren = true;
        } else if tok == "," {
            // vide jusqu’à la "(" courante, sans la retirer
            loop {
                match ops.last() {
                    Some(&Controle::Op(top)) => {
                        out.push(top.symbole().to_string());
                        ops.pop();
                    }
                    Some(Controle::ParenG { .. }) => break,
                    None => {
                        return Err(ErreurEval::Parentheses(
                            "virgule hors d’une liste d’arguments".into(),
                        ))
                    }
                }
            }
            if let Some(Controle::ParenG { virgules, .. }) = ops.last_mut() {
                *virgules += 1;
            }
        } else if let Some(op) = Operateur::depuis_jeton(tok) {
            while let Some(&Controle::Op(top)) = ops.last() {
                if top.precedence() >= op.precedence() {
                    out.push(top.symbole().to_string());
                    ops.pop();
                } else {
                    break;
                }
            }
            ops.push(Controle::Op(op));
        } else if tok == "(" {
            ops.push(Controle::ParenG {
                appel: attend_paren,
                virgules: 0,
            });
            attend_paren = false;
        } else if tok == ")" {
            // dépile jusqu’à '('
            let (appel, virgules) = loop {
                match ops.pop() {
                    Some(Controle::Op(op)) => out.push(op.symbole().to_string()),
                    Some(Controle::ParenG { appel, virgules }) => break (appel, virgules),
                    None => return Err(ErreurEval::Parentheses("“)” sans “(”".into())),
                }
            };

            // la fonction se colle à sa liste d’arguments
            if appel {
                let Some(f) = fonctions.pop() else {
                    return Err(ErreurEval::Interne("parenthèse d’appel sans fonction".into()));
                };
                // "f()" : zéro argument ; sinon un de plus que de virgules
                let recus = if precedent == Some("(") { 0 } else { virgules + 1 };
                if recus != f.arite {
                    return Err(ErreurEval::Arite {
                        nom: f.nom,
                        attendue: f.arite,
                        recue: recus,
                    });
                }
                out.push(f.nom);
            }
        } else {
            // nombre : sortie directe ; inconnu : recopié, refusé à l’évaluation
            out.push(tok.to_string());
        }
        precedent = Some(tok);
    }

    if attend_paren {
        return Err(appel_sans_parentheses(&fonctions));
    }

    // vide la pile ops
    while let Some(c) = ops.pop() {
        match c {
            Controle::Op(op) => out.push(op.symbole().to_string()),
            Controle::ParenG { .. } => {
                return Err(ErreurEval::Parentheses("parenthèses non fermées".into()))
            }
        }
    }

    Ok(out)
}

fn appel_sans_parentheses(fonctions: &[Appel]) -> ErreurEval {
    let nom = fonctions.last().map(|f| f.nom.as_str()).unwrap_or("?");
    ErreurEval::Parentheses(format!("appel de {nom} sans “(”"))
}
