use super::domain::{Address, BrokerProfile, ProfessionalProfile};

/// Reasons an admin edit is refused before it reaches the listing store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListingValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("département must be two characters, e.g. 69 or 2A")]
    InvalidDepartment,
    #[error("postal code must contain five digits")]
    InvalidPostalCode,
}

/// Trims the form fields and checks what the search pages rely on.
pub fn normalize_professional(
    profile: ProfessionalProfile,
) -> Result<ProfessionalProfile, ListingValidationError> {
    let name = required("name", &profile.name)?;
    let email = email(&profile.email)?;
    let phone = required("phone", &profile.phone)?;
    let department = required("department", &profile.department)?.to_uppercase();
    let region = required("region", &profile.region)?;

    if department.len() != 2 || !department.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ListingValidationError::InvalidDepartment);
    }

    Ok(ProfessionalProfile {
        name,
        email,
        phone,
        department,
        region,
        description: profile.description.trim().to_string(),
        experience: profile.experience,
        specialties: tags(profile.specialties),
        certifications: tags(profile.certifications),
        completed_projects: profile.completed_projects,
    })
}

pub fn normalize_broker(profile: BrokerProfile) -> Result<BrokerProfile, ListingValidationError> {
    let first_name = required("first_name", &profile.first_name)?;
    let last_name = required("last_name", &profile.last_name)?;
    let email = email(&profile.email)?;
    let phone = required("phone", &profile.phone)?;
    let license_number = required("license_number", &profile.license_number)?;

    let address = match profile.address {
        Some(address) => Some(normalize_address(address)?),
        None => None,
    };

    Ok(BrokerProfile {
        first_name,
        last_name,
        email,
        phone,
        license_number,
        experience_years: profile.experience_years,
        description: profile.description.trim().to_string(),
        address,
    })
}

fn normalize_address(address: Address) -> Result<Address, ListingValidationError> {
    let city = required("city", &address.city)?;
    let postal_code = address.postal_code.trim().to_string();
    if postal_code.len() != 5 || !postal_code.chars().all(|c| c.is_ascii_digit()) {
        return Err(ListingValidationError::InvalidPostalCode);
    }

    Ok(Address {
        street_number: address.street_number.trim().to_string(),
        street_name: address.street_name.trim().to_string(),
        city,
        postal_code,
    })
}

fn required(field: &'static str, value: &str) -> Result<String, ListingValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ListingValidationError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn email(value: &str) -> Result<String, ListingValidationError> {
    let email = required("email", value)?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(ListingValidationError::InvalidEmail),
    }
}

/// Drops blank entries and repeats, keeping the admin's order.
fn tags(values: Vec<String>) -> Vec<String> {
    let mut kept: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let value = value.trim();
        if !value.is_empty() && !kept.iter().any(|existing| existing == value) {
            kept.push(value.to_string());
        }
    }
    kept
}
