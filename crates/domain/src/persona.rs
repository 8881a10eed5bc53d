use serde::{Deserialize, Serialize};

use debtcheck_core::Entity;

use crate::cuit::Cuit;

/// Natural or legal person identified by CUIT.
///
/// The CUIT is both the identity and a descriptive field; the descriptive copy
/// may be replaced, the identity may not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaFisicaJuridica {
    id: Cuit,
    pub name: String,
    pub cuit: Cuit,
}

impl PersonaFisicaJuridica {
    pub fn new(id: Cuit, name: impl Into<String>, cuit: Cuit) -> Self {
        Self {
            id,
            name: name.into(),
            cuit,
        }
    }

    /// Person whose identity and descriptive CUIT are the same value.
    pub fn for_cuit(cuit: Cuit, name: impl Into<String>) -> Self {
        Self::new(cuit.clone(), name, cuit)
    }
}

impl Entity for PersonaFisicaJuridica {
    type Id = Cuit;
    const KIND: &'static str = "persona_fisica_juridica";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl_identity_equality!(PersonaFisicaJuridica);
