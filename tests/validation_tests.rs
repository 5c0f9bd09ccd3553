use anyhow::Result;
use notifier::{
    channels::{email::Email, notifiable::Notifiable, push::PushNotification, sms::Sms},
    models::{
        message::{Message, MessageCategory},
        priority::Priority,
        validation::{validate_device_token, validate_email_address, validate_phone_number},
    },
};

/// Test: Well-formed email addresses pass
#[test]
fn test_valid_email_addresses() -> Result<()> {
    validate_email_address("a@b.com")?;
    validate_email_address("first.last+tag@mail.example.org")?;

    Ok(())
}

/// Test: Malformed email addresses are rejected
#[test]
fn test_invalid_email_addresses() -> Result<()> {
    for address in [
        "",
        "plainaddress",
        "@example.com",
        "user@",
        "user@localhost",
        "user@.com",
        "user@example.",
        "a@b@c.com",
        "user name@example.com",
    ] {
        assert!(
            validate_email_address(address).is_err(),
            "expected '{}' to be rejected",
            address
        );
    }

    Ok(())
}

/// Test: Phone numbers accept an optional plus and 8 to 15 digits
#[test]
fn test_phone_numbers() -> Result<()> {
    validate_phone_number("+5541988653982")?;
    validate_phone_number("12345678")?;
    validate_phone_number("+123456789012345")?;

    assert!(validate_phone_number("").is_err());
    assert!(validate_phone_number("+").is_err());
    assert!(validate_phone_number("1234567").is_err());
    assert!(validate_phone_number("1234567890123456").is_err());
    assert!(validate_phone_number("+55 41 98865").is_err());
    assert!(validate_phone_number("555-0100-22").is_err());

    Ok(())
}

/// Test: Device tokens allow short alphanumeric values and a few separators
#[test]
fn test_device_tokens() -> Result<()> {
    validate_device_token("abc123xyz")?;
    validate_device_token("fcm:APA91b_x-y.z")?;

    assert!(validate_device_token("").is_err());
    assert!(validate_device_token("has spaces").is_err());
    assert!(validate_device_token("bad/token").is_err());
    assert!(validate_device_token(&"a".repeat(201)).is_err());

    Ok(())
}

/// Test: Each channel validates with the rule for its destination type
#[test]
fn test_channels_validate_their_destination() -> Result<()> {
    let message = Message::new(MessageCategory::Reminder, "Check-in opens soon");

    Email::new(message.clone(), Priority::Low, "traveler@example.com").validate()?;
    Sms::new(message.clone(), Priority::Low, "+5541988653982").validate()?;
    PushNotification::new(message.clone(), Priority::Low, "abc123xyz").validate()?;

    assert!(Email::new(message.clone(), Priority::Low, "+5541988653982").validate().is_err());
    assert!(Sms::new(message.clone(), Priority::Low, "traveler@example.com").validate().is_err());
    assert!(PushNotification::new(message, Priority::Low, "").validate().is_err());

    Ok(())
}
