//! Frontend Models
//!
//! Data structures matching the backend and IBGE payloads.

use serde::{Deserialize, Serialize};

/// Sentinel for "no UF / no city chosen yet"
pub const NO_SELECTION: &str = "0";

/// Map centre and marker used until geolocation resolves
pub const DEFAULT_POSITION: Coordinate = Coordinate {
    latitude: -22.8255629,
    longitude: -47.2723987,
};

/// Collectable waste category (matches backend `GET /items`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectableItem {
    pub id: u32,
    pub title: String,
    pub image_url: String,
}

/// IBGE state entry; only the abbreviation is used
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IbgeUf {
    pub sigla: String,
}

/// IBGE municipality entry; only the name is used
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IbgeCity {
    pub nome: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Text inputs of the entity data fieldset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Whatssap,
}

impl FormField {
    /// Map an `<input name=..>` to a field
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "whatssap" => Some(Self::Whatssap),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub whatssap: String,
}

impl FormFields {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Whatssap => self.whatssap = value,
        }
    }
}

/// Image picked in the drop zone, already read into memory
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
    pub preview_url: Option<String>,
}

impl From<leptos_filedrop::DroppedFile> for UploadedFile {
    fn from(file: leptos_filedrop::DroppedFile) -> Self {
        Self {
            name: file.name,
            content_type: file.content_type,
            bytes: file.bytes,
            preview_url: file.preview_url,
        }
    }
}

/// Multipart payload for `POST /points`
#[derive(Debug, Clone, PartialEq)]
pub struct PointSubmission {
    /// Text parts in wire order
    pub fields: Vec<(&'static str, String)>,
    /// Sent as the `image` part only when present
    pub image: Option<UploadedFile>,
}

impl PointSubmission {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_field_names() {
        assert_eq!(FormField::from_name("name"), Some(FormField::Name));
        assert_eq!(FormField::from_name("email"), Some(FormField::Email));
        assert_eq!(FormField::from_name("whatssap"), Some(FormField::Whatssap));
        assert_eq!(FormField::from_name("phone"), None);
    }

    #[test]
    fn test_decode_backend_items() {
        let json = r#"[{"id":1,"title":"Lâmpadas","image_url":"http://localhost:3333/uploads/lampadas.svg"}]"#;
        let items: Vec<SelectableItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[0].title, "Lâmpadas");
    }

    #[test]
    fn test_decode_ibge_ignores_extra_fields() {
        let json = r#"[{"id":35,"sigla":"SP","nome":"São Paulo","regiao":{"id":3,"sigla":"SE","nome":"Sudeste"}}]"#;
        let ufs: Vec<IbgeUf> = serde_json::from_str(json).unwrap();
        assert_eq!(ufs, vec![IbgeUf { sigla: "SP".to_string() }]);

        let json = r#"[{"id":3509502,"nome":"Campinas","microrregiao":{"id":35032}}]"#;
        let cities: Vec<IbgeCity> = serde_json::from_str(json).unwrap();
        assert_eq!(cities[0].nome, "Campinas");
    }
}
