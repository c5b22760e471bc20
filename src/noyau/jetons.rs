// src/noyau/jetons.rs
//
// Tokenisation : une chaîne -> une suite de jetons texte.
// Pas de type “étiqueté” : chaque étape reclasse le texte avec les prédicats ci-dessous.

/// Opérateurs reconnus. "**" avant "*" (le plus long d’abord).
pub const OPERATEURS: [&str; 7] = ["**", "+", "-", "*", "/", "<", ">"];

pub fn est_operateur(jeton: &str) -> bool {
    OPERATEURS.contains(&jeton)
}

/// Littéral numérique : chiffres, optionnellement “.” + chiffres.
pub fn est_operande(jeton: &str) -> bool {
    let (ent, frac) = match jeton.split_once('.') {
        Some((e, f)) => (e, Some(f)),
        None => (jeton, None),
    };
    let chiffres = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    chiffres(ent) && frac.map_or(true, chiffres)
}

/// Identifiant : [a-zA-Z_][a-zA-Z0-9_]* (candidat nom de fonction).
pub fn est_identifiant(jeton: &str) -> bool {
    let mut it = jeton.chars();
    match it.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            it.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn est_structure(c: char) -> bool {
    matches!(c, '(' | ')' | ',')
}

fn debut_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '<' | '>')
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres 12 ou 12.5
/// - parenthèses ( ) et virgule ,
/// - opérateurs + - * / ** < >
/// - identifiants (noms de fonctions de la table de symboles)
/// Tout le reste passe tel quel (un bloc jusqu’au prochain séparateur) :
/// c’est l’évaluation qui le refusera.
pub fn tokenize(s: &str) -> Vec<String> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // ( ) ,
        if est_structure(c) {
            out.push(c.to_string());
            i += 1;
            continue;
        }

        // ** avant *
        if c == '*' && i + 1 < chars.len() && chars[i + 1] == '*' {
            out.push("**".to_string());
            i += 2;
            continue;
        }
        if debut_operateur(c) {
            out.push(c.to_string());
            i += 1;
            continue;
        }

        // Nombre : 12 ou 12.5 (le “.” n’est pris que s’il est suivi d’un chiffre)
        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i + 1 < chars.len() && chars[i] == '.' && chars[i + 1].is_ascii_digit() {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            out.push(chars[start..i].iter().collect());
            continue;
        }

        // Identifiants ASCII (casse conservée : la table de symboles est sensible à la casse)
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            out.push(chars[start..i].iter().collect());
            continue;
        }

        // Inconnu : bloc brut jusqu’au prochain séparateur reconnu
        let start = i;
        i += 1;
        while i < chars.len() {
            let d = chars[i];
            if d.is_whitespace()
                || est_structure(d)
                || debut_operateur(d)
                || d.is_ascii_alphanumeric()
                || d == '_'
            {
                break;
            }
            i += 1;
        }
        out.push(chars[start..i].iter().collect());
    }

    out
}

/// Format utilitaire (“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[String]) -> String {
    tokens.join(" ")
}
