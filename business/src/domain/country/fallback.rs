use super::model::Country;

const FALLBACK: [(&str, &str, &str); 21] = [
    ("1", "Argentina", "AR"),
    ("2", "Bolivia", "BO"),
    ("3", "Brasil", "BR"),
    ("4", "Chile", "CL"),
    ("5", "Colombia", "CO"),
    ("6", "Costa Rica", "CR"),
    ("7", "Cuba", "CU"),
    ("8", "Ecuador", "EC"),
    ("9", "El Salvador", "SV"),
    ("10", "España", "ES"),
    ("11", "Estados Unidos", "US"),
    ("12", "Guatemala", "GT"),
    ("13", "Honduras", "HN"),
    ("14", "México", "MX"),
    ("15", "Nicaragua", "NI"),
    ("16", "Panamá", "PA"),
    ("17", "Paraguay", "PY"),
    ("18", "Perú", "PE"),
    ("19", "República Dominicana", "DO"),
    ("20", "Uruguay", "UY"),
    ("21", "Venezuela", "VE"),
];

/// Static country list used whenever the remote directory is unreachable.
pub fn fallback_countries() -> Vec<Country> {
    FALLBACK
        .iter()
        .map(|(id, name, code)| Country::new(*id, *name, *code))
        .collect()
}

pub fn fallback_country_by_id(id: &str) -> Option<Country> {
    fallback_countries().into_iter().find(|c| c.id == id)
}
