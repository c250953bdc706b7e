use serde::{Deserialize, Serialize};

/// Usuário - mesmo formato no store, na API e no índice de busca
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, utoipa::ToSchema)]
pub struct User {
    /// Atribuído pelo store no primeiro save, imutável depois
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
}

impl User {
    pub fn new(name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Documento armazenado na collection `users` do MongoDB
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        Self {
            id: Some(doc.id),
            name: doc.name,
            last_name: doc.last_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_uses_last_name_camel_case() {
        let json = serde_json::to_value(User::new("Ann", "Lee")).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Ann", "lastName": "Lee" }));
    }

    #[test]
    fn test_id_is_optional_on_input() {
        let user: User = serde_json::from_str(r#"{"name":"Ann","lastName":"Lee"}"#).unwrap();
        assert_eq!(user.id, None);

        let user: User =
            serde_json::from_str(r#"{"id":"u-1","name":"Ann","lastName":"Lee"}"#).unwrap();
        assert_eq!(user.id.as_deref(), Some("u-1"));
    }
}
