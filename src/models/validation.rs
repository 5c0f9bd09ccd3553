use anyhow::{Result, anyhow};

pub fn validate_email_address(address: &str) -> Result<()> {
    if address.is_empty() {
        return Err(anyhow!("Email address cannot be empty"));
    }

    if address.chars().any(char::is_whitespace) {
        return Err(anyhow!("Email address cannot contain whitespace"));
    }

    let (local, domain) = address
        .split_once('@')
        .ok_or_else(|| anyhow!("Email address is missing '@'"))?;

    if local.is_empty() {
        return Err(anyhow!("Email address has an empty local part"));
    }

    if domain.contains('@') {
        return Err(anyhow!("Email address contains more than one '@'"));
    }

    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(anyhow!("Email address has an invalid domain: {}", domain));
    }

    Ok(())
}

pub fn validate_phone_number(number: &str) -> Result<()> {
    if number.is_empty() {
        return Err(anyhow!("Phone number cannot be empty"));
    }

    let digits = number.strip_prefix('+').unwrap_or(number);

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(anyhow!("Phone number may only contain digits after an optional '+'"));
    }

    if digits.len() < 8 {
        return Err(anyhow!("Phone number too short (minimum 8 digits)"));
    }

    if digits.len() > 15 {
        return Err(anyhow!("Phone number too long (maximum 15 digits)"));
    }

    Ok(())
}

pub fn validate_device_token(token: &str) -> Result<()> {
    if token.is_empty() {
        return Err(anyhow!("Device token cannot be empty"));
    }

    if token.len() > 200 {
        return Err(anyhow!("Device token too long (maximum 200 characters)"));
    }

    let valid_chars = token
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-' || c == ':' || c == '.');

    if !valid_chars {
        return Err(anyhow!("Device token contains invalid characters"));
    }

    Ok(())
}
