use serde::Deserialize;

/// Payload del formulario de contacto. El frontend manda `selectedPlan`
/// en camelCase; `company` y el plan son opcionales.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "selectedPlan")]
    pub selected_plan: Option<String>,
}

impl ContactRequest {
    /// Replica la validación `required` del formulario: name, email y
    /// message no pueden ir vacíos. Devuelve todos los campos faltantes.
    pub fn validate(&self) -> Result<(), Vec<&'static str>> {
        let mut missing = Vec::new();

        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        } else if !self.email.contains('@') {
            // El input original es type="email"; aquí solo un chequeo mínimo
            missing.push("email");
        }
        if self.message.trim().is_empty() {
            missing.push("message");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }

    /// Plan seleccionado, ignorando strings en blanco.
    pub fn plan(&self) -> Option<&str> {
        self.selected_plan
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// Empresa, ignorando strings en blanco.
    pub fn company(&self) -> Option<&str> {
        self.company
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}
