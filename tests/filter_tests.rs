use anyhow::Result;
use notifier::{
    channels::{email::Email, notifiable::Notifiable, push::PushNotification, sms::Sms},
    models::{
        message::{Message, MessageCategory},
        priority::Priority,
    },
    utils::filter_channels,
};

fn email(address: &str) -> Email {
    Email::new(
        Message::new(MessageCategory::Promotion, "Spring collection"),
        Priority::Medium,
        address,
    )
}

fn sms(number: &str) -> Sms {
    Sms::new(
        Message::new(MessageCategory::Reminder, "Your table is ready"),
        Priority::Low,
        number,
    )
}

fn push(token: &str) -> PushNotification {
    PushNotification::new(
        Message::new(MessageCategory::Alert, "Password changed"),
        Priority::High,
        token,
    )
}

/// Test: Filtering a mixed collection for Email keeps only the Email
#[test]
fn test_filter_mixed_collection_for_email() -> Result<()> {
    let original = email("a@b.com");
    let channels: Vec<Box<dyn Notifiable>> = vec![
        Box::new(original.clone()),
        Box::new(sms("+5541900000000")),
        Box::new(push("abc123xyz")),
    ];

    let emails = filter_channels::<Email>(&channels);

    assert_eq!(emails.len(), 1);
    assert_eq!(*emails[0], original);

    Ok(())
}

/// Test: Matching instances keep their original relative order
#[test]
fn test_filter_preserves_order() -> Result<()> {
    let channels: Vec<Box<dyn Notifiable>> = vec![
        Box::new(sms("+5541900000001")),
        Box::new(email("first@example.com")),
        Box::new(sms("+5541900000002")),
        Box::new(push("token-a")),
        Box::new(sms("+5541900000003")),
    ];

    let numbers: Vec<&str> = filter_channels::<Sms>(&channels)
        .into_iter()
        .map(|channel| channel.destination())
        .collect();

    assert_eq!(
        numbers,
        vec!["+5541900000001", "+5541900000002", "+5541900000003"]
    );

    Ok(())
}

/// Test: No matches yield an empty result
#[test]
fn test_filter_without_matches_is_empty() -> Result<()> {
    let channels: Vec<Box<dyn Notifiable>> =
        vec![Box::new(email("a@b.com")), Box::new(sms("+5541900000000"))];

    assert!(filter_channels::<PushNotification>(&channels).is_empty());
    assert!(filter_channels::<Email>(&[]).is_empty());

    Ok(())
}

/// Test: Several instances of the same variant are all returned
#[test]
fn test_filter_returns_every_instance() -> Result<()> {
    let channels: Vec<Box<dyn Notifiable>> =
        vec![Box::new(push("first-token")), Box::new(push("second-token"))];

    let tokens: Vec<&str> = filter_channels::<PushNotification>(&channels)
        .into_iter()
        .map(|channel| channel.destination())
        .collect();

    assert_eq!(tokens, vec!["first-token", "second-token"]);

    Ok(())
}
