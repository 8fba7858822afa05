//! User-facing strings. The interface ships in French only.

pub const APP_NAME: &str = "MediSearch";
pub const TAGLINE: &str = "Recherchez parmi des milliers de médicaments";
pub const INPUT_PLACEHOLDER: &str =
    "Rechercher un médicament (ex: doliprane, antibiotique, ibuprofène...)";
pub const SEARCH_BUTTON: &str = "Rechercher";

pub const EMPTY_QUERY: &str = "Merci de saisir un terme afin de lancer la recherche.";
pub const CONNECTION_ERROR: &str =
    "Erreur de connexion au serveur. Assurez-vous que le backend est démarré.";

pub const LOADING: &str = "Recherche en cours...";

pub const NAME_PLACEHOLDER: &str = "Médicament";
pub const SNIPPET_FALLBACK: &str = "Aucune description disponible.";
pub const FALLBACK_HOSTNAME: &str = "medicaments.gouv.fr";

pub const NO_RESULTS_TITLE: &str = "Aucun médicament trouvé";
pub const SUGGESTIONS_TITLE: &str = "Suggestions :";
pub const SUGGESTIONS: [&str; 4] = [
    "Vérifiez l'orthographe",
    "Essayez un nom commercial (Doliprane, Advil...)",
    "Essayez une substance active (paracétamol, ibuprofène...)",
    "Essayez un symptôme (douleur, fièvre, toux...)",
];

pub const FOOTER_TITLE: &str = "Système de Recherche d'Information - Projet SRI";
pub const FOOTER_SOURCE: &str = "Données issues de la base publique des médicaments";

/// `Le médicament "<term>" n'existe pas dans notre base de données.`, split around the term.
pub const NOT_IN_DATABASE: (&str, &str) =
    ("Le médicament \"", "\" n'existe pas dans notre base de données.");

/// Result count line, e.g. `Environ 3 résultats`.
pub fn result_count(n: usize) -> String {
    let plural = if n > 1 { "s" } else { "" };
    format!("Environ {n} résultat{plural}")
}
