use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Customer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default = "default_role")]
    pub role: UserRole,
}

fn default_role() -> UserRole {
    UserRole::Customer
}

/// Add-user form state for the customer/admin variant.
#[derive(Debug, Clone, Default)]
pub struct CustomerDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub city: String,
    pub state: String,
}

impl CustomerDraft {
    pub fn validate(&self, role: UserRole) -> Result<CreateCustomerRequest, String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        if self.phone.trim().is_empty() {
            return Err("Phone number is required".into());
        }
        let pin = self.password.trim();
        if pin.len() < 4 || !pin.chars().all(|c| c.is_ascii_digit()) {
            return Err("PIN must be at least 4 digits".into());
        }
        Ok(CreateCustomerRequest {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: match self.email.trim() {
                "" => None,
                v => Some(v.to_string()),
            },
            password: pin.to_string(),
            city: match self.city.trim() {
                "" => None,
                v => Some(v.to_string()),
            },
            state: match self.state.trim() {
                "" => None,
                v => Some(v.to_string()),
            },
            role,
            is_supplier: false,
            supplier_id: None,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub password: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub role: UserRole,
    pub is_supplier: bool,
    pub supplier_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_must_be_digits() {
        let mut draft = CustomerDraft {
            name: "Asha".into(),
            phone: "9000000001".into(),
            password: "12a4".into(),
            ..CustomerDraft::default()
        };
        assert!(draft.validate(UserRole::Customer).is_err());
        draft.password = "123".into();
        assert!(draft.validate(UserRole::Customer).is_err());
        draft.password = "1234".into();
        let req = draft.validate(UserRole::Admin).unwrap();
        assert_eq!(req.role, UserRole::Admin);
        assert!(!req.is_supplier);
    }

    #[test]
    fn role_serializes_screaming_snake() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"ADMIN\"");
        assert_eq!(
            serde_json::to_string(&UserRole::Customer).unwrap(),
            "\"CUSTOMER\""
        );
    }
}
