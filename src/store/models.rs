use serde::{Deserialize, Serialize};

/// The caller-controlled part of a user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
}

impl UserFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            gender: gender.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User<Id> {
    pub id: Id,
    #[serde(flatten)]
    pub fields: UserFields,
}

/// Snapshot pair returned by an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate<Id> {
    pub old: UserFields,
    pub new: User<Id>,
}

pub fn sample_users() -> Vec<UserFields> {
    vec![
        UserFields::new("John", "john@example.com", "1234567890", "male"),
        UserFields::new("Jane", "jane@example.com", "0987654321", "female"),
        UserFields::new("Jim", "jim@example.com", "1111111111", "male"),
        UserFields::new("Jill", "jill@example.com", "2222222222", "female"),
        UserFields::new("Jack", "jack@example.com", "3333333333", "male"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_flat() {
        let user = User {
            id: 7u32,
            fields: UserFields::new("Ana", "ana@example.com", "555", "female"),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 7,
                "name": "Ana",
                "email": "ana@example.com",
                "phone": "555",
                "gender": "female",
            })
        );
    }

    #[test]
    fn test_fields_ignore_unknown_keys() {
        let fields: UserFields = serde_json::from_str(
            r#"{"name":"Bo","email":"bo@example.com","phone":"1","gender":"male","age":40}"#,
        )
        .unwrap();
        assert_eq!(fields.name, "Bo");
    }
}
