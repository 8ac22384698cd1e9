use crate::impl_record;

impl_record!(
    /// An aviation professional registered on the platform
    Professional {
        "id" => id: String,
        "dateInscription" => date_inscription: Option<String>,
        "nomComplet" => nom_complet: String,
        "email" => email: String,
        "poste" => poste: Option<String>,
        "entreprise" => entreprise: Option<String>,
        "domaine" => domaine: Option<String>,
        "telephone" => telephone: Option<String>,
        "pays" => pays: Option<String>,
    }
);

impl Professional {
    pub const SEARCHABLE: &'static [&'static str] = &[
        "nomComplet",
        "email",
        "poste",
        "entreprise",
        "domaine",
        "telephone",
        "pays",
    ];
}
