//! Request validation for customer payloads.
//! Field names in errors are the wire (camelCase) names.

use crate::error::AppError;
use crate::model::{CreateCustomer, UpdateCustomer};

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a create payload. All required fields must be present and
    /// non-empty; bounded fields must fit their column widths.
    pub fn validate_create(body: &CreateCustomer) -> Result<(), AppError> {
        required("firstName", body.first_name.as_deref())?;
        required("lastName", body.last_name.as_deref())?;
        required("passwordHash", body.password_hash.as_deref())?;
        required("passwordSalt", body.password_salt.as_deref())?;
        check_lengths(&[
            ("title", body.title.as_deref(), 8),
            ("firstName", body.first_name.as_deref(), 50),
            ("middleName", body.middle_name.as_deref(), 50),
            ("lastName", body.last_name.as_deref(), 50),
            ("suffix", body.suffix.as_deref(), 10),
            ("companyName", body.company_name.as_deref(), 128),
            ("salesPerson", body.sales_person.as_deref(), 256),
            ("emailAddress", body.email_address.as_deref(), 50),
            ("phone", body.phone.as_deref(), 25),
            ("passwordHash", body.password_hash.as_deref(), 128),
            ("passwordSalt", body.password_salt.as_deref(), 10),
        ])?;
        email("emailAddress", body.email_address.as_deref())?;
        Ok(())
    }

    /// Validate an update payload. Password fields are optional here; when
    /// present they are still bounded.
    pub fn validate_update(body: &UpdateCustomer) -> Result<(), AppError> {
        required("firstName", body.first_name.as_deref())?;
        required("lastName", body.last_name.as_deref())?;
        check_lengths(&[
            ("title", body.title.as_deref(), 8),
            ("firstName", body.first_name.as_deref(), 50),
            ("middleName", body.middle_name.as_deref(), 50),
            ("lastName", body.last_name.as_deref(), 50),
            ("suffix", body.suffix.as_deref(), 10),
            ("companyName", body.company_name.as_deref(), 128),
            ("salesPerson", body.sales_person.as_deref(), 256),
            ("emailAddress", body.email_address.as_deref(), 50),
            ("phone", body.phone.as_deref(), 25),
            ("passwordHash", body.password_hash.as_deref(), 128),
            ("passwordSalt", body.password_salt.as_deref(), 10),
        ])?;
        email("emailAddress", body.email_address.as_deref())?;
        Ok(())
    }
}

fn required(field: &'static str, value: Option<&str>) -> Result<(), AppError> {
    match value {
        Some(s) if !s.is_empty() => Ok(()),
        _ => Err(AppError::validation(field, format!("{} is required", field))),
    }
}

fn check_lengths(fields: &[(&'static str, Option<&str>, usize)]) -> Result<(), AppError> {
    for (field, value, max) in fields {
        if let Some(s) = value {
            if s.len() > *max {
                return Err(AppError::validation(
                    field,
                    format!("{} must be at most {} characters", field, max),
                ));
            }
        }
    }
    Ok(())
}

fn email(field: &'static str, value: Option<&str>) -> Result<(), AppError> {
    if let Some(s) = value {
        if !s.contains('@') || s.len() < 3 {
            return Err(AppError::validation(field, format!("{} must be a valid email", field)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateCustomer {
        CreateCustomer {
            first_name: Some("Jane".into()),
            last_name: Some("Doe".into()),
            password_hash: Some("h".into()),
            password_salt: Some("s".into()),
            ..CreateCustomer::default()
        }
    }

    #[test]
    fn valid_create_passes() {
        assert!(RequestValidator::validate_create(&valid_create()).is_ok());
    }

    #[test]
    fn missing_first_name_names_the_field() {
        let body = CreateCustomer {
            first_name: None,
            ..valid_create()
        };
        let err = RequestValidator::validate_create(&body).unwrap_err();
        assert!(err.to_string().contains("firstName"));
    }

    #[test]
    fn empty_required_field_is_rejected() {
        let body = CreateCustomer {
            password_salt: Some(String::new()),
            ..valid_create()
        };
        assert!(RequestValidator::validate_create(&body).is_err());
    }

    #[test]
    fn oversized_title_is_rejected() {
        let body = CreateCustomer {
            title: Some("Professor".into()), // 9 > 8
            ..valid_create()
        };
        let err = RequestValidator::validate_create(&body).unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn bad_email_syntax_is_rejected() {
        let body = CreateCustomer {
            email_address: Some("not-an-email".into()),
            ..valid_create()
        };
        let err = RequestValidator::validate_create(&body).unwrap_err();
        assert!(err.to_string().contains("emailAddress"));
    }

    #[test]
    fn update_allows_absent_and_empty_passwords() {
        let body = UpdateCustomer {
            first_name: Some("Jane".into()),
            last_name: Some("Doe".into()),
            ..UpdateCustomer::default()
        };
        assert!(RequestValidator::validate_update(&body).is_ok());

        let body = UpdateCustomer {
            first_name: Some("Jane".into()),
            last_name: Some("Doe".into()),
            password_hash: Some(String::new()),
            password_salt: Some(String::new()),
            ..UpdateCustomer::default()
        };
        assert!(RequestValidator::validate_update(&body).is_ok());
    }

    #[test]
    fn update_still_requires_names() {
        let body = UpdateCustomer {
            last_name: Some("Doe".into()),
            ..UpdateCustomer::default()
        };
        let err = RequestValidator::validate_update(&body).unwrap_err();
        assert!(err.to_string().contains("firstName"));
    }

    #[test]
    fn update_bounds_present_passwords() {
        let body = UpdateCustomer {
            first_name: Some("Jane".into()),
            last_name: Some("Doe".into()),
            password_salt: Some("longer-than-ten".into()),
            ..UpdateCustomer::default()
        };
        let err = RequestValidator::validate_update(&body).unwrap_err();
        assert!(err.to_string().contains("passwordSalt"));
    }
}
