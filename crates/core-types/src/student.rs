use serde::{Deserialize, Serialize};

/// A student as supplied by a caller, before it is persisted.
///
/// The field names mirror the columns of the `Etudiant` table. No invariants
/// are enforced here: whatever the caller supplies is bound as-is, and the
/// database schema is the only judge of what is acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Last name.
    pub nom: String,
    /// First name.
    pub prenom: String,
    /// City of residence.
    pub ville: String,
    /// Sex code (e.g. "F", "M").
    pub sexe: String,
}

impl Student {
    pub fn new(
        nom: impl Into<String>,
        prenom: impl Into<String>,
        ville: impl Into<String>,
        sexe: impl Into<String>,
    ) -> Self {
        Self {
            nom: nom.into(),
            prenom: prenom.into(),
            ville: ville.into(),
            sexe: sexe.into(),
        }
    }

    pub fn nom(&self) -> &str {
        &self.nom
    }

    pub fn prenom(&self) -> &str {
        &self.prenom
    }

    pub fn ville(&self) -> &str {
        &self.ville
    }

    pub fn sexe(&self) -> &str {
        &self.sexe
    }
}
