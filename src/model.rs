//! Customer entity and wire types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Persisted customer row. Column names match field names.
#[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Customer {
    pub customer_id: i32,
    pub name_style: bool,
    pub title: Option<String>,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub suffix: Option<String>,
    pub company_name: Option<String>,
    pub sales_person: Option<String>,
    pub email_address: Option<String>,
    pub phone: Option<String>,
    pub password_hash: String,
    pub password_salt: String,
    pub row_guid: Uuid,
    pub modified_date: DateTime<Utc>,
}

/// Insert-ready customer: everything except the store-generated id.
#[derive(Clone, Debug)]
pub struct NewCustomer {
    pub name_style: bool,
    pub title: Option<String>,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub suffix: Option<String>,
    pub company_name: Option<String>,
    pub sales_person: Option<String>,
    pub email_address: Option<String>,
    pub phone: Option<String>,
    pub password_hash: String,
    pub password_salt: String,
    pub row_guid: Uuid,
    pub modified_date: DateTime<Utc>,
}

impl NewCustomer {
    /// Build an insert-ready row from a validated create payload.
    pub fn from_input(input: CreateCustomer, row_guid: Uuid, now: DateTime<Utc>) -> Self {
        NewCustomer {
            name_style: input.name_style,
            title: input.title,
            first_name: input.first_name.unwrap_or_default(),
            middle_name: input.middle_name,
            last_name: input.last_name.unwrap_or_default(),
            suffix: input.suffix,
            company_name: input.company_name,
            sales_person: input.sales_person,
            email_address: input.email_address,
            phone: input.phone,
            password_hash: input.password_hash.unwrap_or_default(),
            password_salt: input.password_salt.unwrap_or_default(),
            row_guid,
            modified_date: now,
        }
    }
}

impl Customer {
    /// New value with every field overwritten from the payload, except the
    /// password fields, which keep their prior value when the incoming one
    /// is empty or absent. `modified_date` is always refreshed.
    pub fn with_update(&self, input: &UpdateCustomer, now: DateTime<Utc>) -> Customer {
        Customer {
            customer_id: self.customer_id,
            name_style: input.name_style,
            title: input.title.clone(),
            first_name: input.first_name.clone().unwrap_or_default(),
            middle_name: input.middle_name.clone(),
            last_name: input.last_name.clone().unwrap_or_default(),
            suffix: input.suffix.clone(),
            company_name: input.company_name.clone(),
            sales_person: input.sales_person.clone(),
            email_address: input.email_address.clone(),
            phone: input.phone.clone(),
            password_hash: match &input.password_hash {
                Some(h) if !h.is_empty() => h.clone(),
                _ => self.password_hash.clone(),
            },
            password_salt: match &input.password_salt {
                Some(s) if !s.is_empty() => s.clone(),
                _ => self.password_salt.clone(),
            },
            row_guid: self.row_guid,
            modified_date: now,
        }
    }
}

/// Customer as returned to clients. Password fields are never serialized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: i32,
    pub name_style: bool,
    pub title: Option<String>,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub suffix: Option<String>,
    pub company_name: Option<String>,
    pub sales_person: Option<String>,
    pub email_address: Option<String>,
    pub phone: Option<String>,
    pub row_guid: Uuid,
    pub modified_date: DateTime<Utc>,
}

impl From<Customer> for CustomerDto {
    fn from(c: Customer) -> Self {
        CustomerDto {
            id: c.customer_id,
            name_style: c.name_style,
            title: c.title,
            first_name: c.first_name,
            middle_name: c.middle_name,
            last_name: c.last_name,
            suffix: c.suffix,
            company_name: c.company_name,
            sales_person: c.sales_person,
            email_address: c.email_address,
            phone: c.phone,
            row_guid: c.row_guid,
            modified_date: c.modified_date,
        }
    }
}

/// Create payload. Required fields are `Option` so missing ones surface as
/// validation errors with the wire field name rather than serde rejections.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomer {
    #[serde(default)]
    pub name_style: bool,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub sales_person: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub password_hash: Option<String>,
    #[serde(default)]
    pub password_salt: Option<String>,
}

/// Update payload: same shape as create, but password fields may be empty
/// or absent to keep the stored values.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomer {
    #[serde(default)]
    pub name_style: bool,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub sales_person: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub password_hash: Option<String>,
    #[serde(default)]
    pub password_salt: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn existing() -> Customer {
        Customer {
            customer_id: 7,
            name_style: false,
            title: Some("Mr.".into()),
            first_name: "Orlando".into(),
            middle_name: Some("N.".into()),
            last_name: "Gee".into(),
            suffix: None,
            company_name: Some("A Bike Store".into()),
            sales_person: Some("adventure-works\\pamela0".into()),
            email_address: Some("orlando0@adventure-works.com".into()),
            phone: Some("245-555-0173".into()),
            password_hash: "old-hash".into(),
            password_salt: "old-salt".into(),
            row_guid: Uuid::new_v4(),
            modified_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn update_overwrites_fields_and_keeps_id_and_guid() {
        let current = existing();
        let input = UpdateCustomer {
            first_name: Some("Keith".into()),
            last_name: Some("Harris".into()),
            email_address: Some("keith0@adventure-works.com".into()),
            ..UpdateCustomer::default()
        };
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let next = current.with_update(&input, now);

        assert_eq!(next.customer_id, current.customer_id);
        assert_eq!(next.row_guid, current.row_guid);
        assert_eq!(next.first_name, "Keith");
        assert_eq!(next.last_name, "Harris");
        assert_eq!(next.email_address.as_deref(), Some("keith0@adventure-works.com"));
        // Absent optional fields overwrite with absent.
        assert_eq!(next.title, None);
        assert_eq!(next.phone, None);
        assert_eq!(next.modified_date, now);
    }

    #[test]
    fn update_keeps_passwords_when_empty_or_absent() {
        let current = existing();
        let absent = UpdateCustomer {
            first_name: Some("Keith".into()),
            last_name: Some("Harris".into()),
            ..UpdateCustomer::default()
        };
        let next = current.with_update(&absent, Utc::now());
        assert_eq!(next.password_hash, "old-hash");
        assert_eq!(next.password_salt, "old-salt");

        let empty = UpdateCustomer {
            first_name: Some("Keith".into()),
            last_name: Some("Harris".into()),
            password_hash: Some(String::new()),
            password_salt: Some(String::new()),
            ..UpdateCustomer::default()
        };
        let next = current.with_update(&empty, Utc::now());
        assert_eq!(next.password_hash, "old-hash");
        assert_eq!(next.password_salt, "old-salt");
    }

    #[test]
    fn update_replaces_passwords_when_non_empty() {
        let current = existing();
        let input = UpdateCustomer {
            first_name: Some("Keith".into()),
            last_name: Some("Harris".into()),
            password_hash: Some("new-hash".into()),
            password_salt: Some("new-salt".into()),
            ..UpdateCustomer::default()
        };
        let next = current.with_update(&input, Utc::now());
        assert_eq!(next.password_hash, "new-hash");
        assert_eq!(next.password_salt, "new-salt");
    }

    #[test]
    fn dto_serializes_camel_case_without_passwords() {
        let dto = CustomerDto::from(existing());
        let value = serde_json::to_value(&dto).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("firstName"));
        assert!(obj.contains_key("nameStyle"));
        assert!(obj.contains_key("rowGuid"));
        assert!(obj.contains_key("modifiedDate"));
        assert!(!obj.contains_key("passwordHash"));
        assert!(!obj.contains_key("passwordSalt"));
        assert_eq!(obj.get("id").and_then(|v| v.as_i64()), Some(7));
    }

    #[test]
    fn create_payload_accepts_camel_case_keys() {
        let input: CreateCustomer = serde_json::from_value(serde_json::json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "passwordHash": "h",
            "passwordSalt": "s"
        }))
        .unwrap();
        assert_eq!(input.first_name.as_deref(), Some("Jane"));
        assert_eq!(input.last_name.as_deref(), Some("Doe"));
        assert!(!input.name_style);
        assert_eq!(input.title, None);
    }
}
