use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Ingresa tu nombre completo")]
    MissingName,
    #[error("Ingresa el nombre de la empresa")]
    MissingCompany,
    #[error("Selecciona el número de usuarios estimado")]
    MissingTeamSize,
    #[error("No hay una ventana del navegador disponible")]
    NoWindow,
    #[error("El navegador bloqueó la ventana de WhatsApp")]
    PopupBlocked,
    #[error("Error del navegador: {0}")]
    Browser(String),
}

impl From<JsValue> for ContactError {
    fn from(value: JsValue) -> Self {
        ContactError::Browser(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
