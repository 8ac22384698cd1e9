use crate::impl_record;

/// State of a published offer
pub const ONLINE_STATE: &str = "En ligne";

impl_record!(
    /// A job offer published by a company
    JobOffer {
        "id" => id: String,
        "offreNumero" => offre_numero: Option<i64>,
        "datePublication" => date_publication: Option<String>,
        "titre" => titre: String,
        "entreprise" => entreprise: Option<String>,
        "etat" => etat: Option<String>,
        "contenu" => contenu: Option<String>,
    }
);

impl JobOffer {
    pub const SEARCHABLE: &'static [&'static str] = &["titre", "entreprise", "etat"];

    /// Whether the offer is currently online
    pub fn is_online(&self) -> bool {
        self.etat.as_deref() == Some(ONLINE_STATE)
    }
}
