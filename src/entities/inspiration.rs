use crate::core::field::FieldValue;
use crate::impl_record;
use serde::{Deserialize, Serialize};

/// Moderation status of an inspiration article
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InspirationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Archived,
}

impl InspirationStatus {
    /// All statuses, in dashboard display order
    pub const ALL: [InspirationStatus; 4] = [
        InspirationStatus::Approved,
        InspirationStatus::Pending,
        InspirationStatus::Rejected,
        InspirationStatus::Archived,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InspirationStatus::Pending => "pending",
            InspirationStatus::Approved => "approved",
            InspirationStatus::Rejected => "rejected",
            InspirationStatus::Archived => "archived",
        }
    }

    /// French label shown on the dashboard
    pub fn label(self) -> &'static str {
        match self {
            InspirationStatus::Pending => "En attente",
            InspirationStatus::Approved => "Approuvé",
            InspirationStatus::Rejected => "Refusé",
            InspirationStatus::Archived => "Archivé",
        }
    }
}

impl std::fmt::Display for InspirationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<InspirationStatus> for FieldValue {
    fn from(value: InspirationStatus) -> Self {
        FieldValue::String(value.as_str().to_string())
    }
}

impl_record!(
    /// An "inspiration" article shown to candidates
    Inspiration {
        "id" => id: String,
        "titre" => titre: String,
        "description" => description: Option<String>,
        "contenu" => contenu: Option<String>,
        "image" => image: Option<String>,
        "categorie" => categorie: Option<String>,
        "statut" => statut: InspirationStatus,
        "auteur" => auteur: Option<String>,
        "datePublication" => date_publication: Option<String>,
        "createdAt" => created_at: Option<String>,
        "updatedAt" => updated_at: Option<String>,
    }
);

impl Inspiration {
    pub const SEARCHABLE: &'static [&'static str] = &["titre", "description", "categorie", "auteur"];
}
