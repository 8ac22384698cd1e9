use crate::impl_record;

impl_record!(
    /// A candidate looking for an aviation position
    JobSeeker {
        "id" => id: String,
        "dateInscription" => date_inscription: Option<String>,
        "nomComplet" => nom_complet: String,
        "dateNaissance" => date_naissance: Option<String>,
        "email" => email: String,
        "telephone" => telephone: Option<String>,
        "numeroPasseport" => numero_passeport: Option<String>,
        "pays" => pays: Option<String>,
        "photo" => photo: Option<String>,
    }
);

impl JobSeeker {
    /// Columns the job seekers list searches by default
    pub const SEARCHABLE: &'static [&'static str] =
        &["nomComplet", "email", "telephone", "numeroPasseport", "pays"];
}
