use super::*;

fn filled() -> ContactRequest {
    ContactRequest {
        name: " Ana Petrović ".into(),
        email: "ana@example.com".into(),
        phone: "+387 61 000 000".into(),
        event_type: "Vjenčanje".into(),
        date: "2026-06-20".into(),
        location: "Sarajevo".into(),
        guests: "120".into(),
    }
}

fn configured() -> EmailSettings {
    EmailSettings {
        service_id: "service_venue".into(),
        template_id: "template_inquiry".into(),
        public_key: "pk_123".into(),
        ..EmailSettings::default()
    }
}

#[test]
fn complete_request_is_valid() {
    assert_eq!(filled().validate(), Ok(()));
}

#[test]
fn name_and_email_are_required() {
    let request = ContactRequest {
        name: "   ".into(),
        ..filled()
    };
    assert_eq!(
        request.validate(),
        Err(ContactError::MissingField { field: "name" })
    );

    let request = ContactRequest {
        email: String::new(),
        ..filled()
    };
    assert_eq!(
        request.validate(),
        Err(ContactError::MissingField { field: "email" })
    );
}

#[test]
fn email_shape_is_checked() {
    for email in ["ana", "ana@", "@example.com", "ana@example", "ana@.com", "a na@x.com"] {
        let request = ContactRequest {
            email: email.into(),
            ..filled()
        };
        assert!(
            matches!(request.validate(), Err(ContactError::InvalidEmail { .. })),
            "{email} should be rejected"
        );
    }
}

#[test]
fn guest_count_is_optional_but_positive() {
    let request = ContactRequest {
        guests: String::new(),
        ..filled()
    };
    assert_eq!(request.validate(), Ok(()));

    for guests in ["0", "-5", "many"] {
        let request = ContactRequest {
            guests: guests.into(),
            ..filled()
        };
        assert_eq!(
            request.validate(),
            Err(ContactError::InvalidGuestCount {
                value: guests.into()
            })
        );
    }
}

#[test]
fn email_request_shape() {
    let settings = configured();
    let request = EmailRequest::new(&settings, &filled()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&request.to_json()).unwrap();

    assert_eq!(json["service_id"], "service_venue");
    assert_eq!(json["template_id"], "template_inquiry");
    assert_eq!(json["user_id"], "pk_123");
    assert_eq!(json["template_params"]["name"], "Ana Petrović");
    assert_eq!(json["template_params"]["event_type"], "Vjenčanje");
    assert_eq!(json["template_params"]["guests"], "120");
}

#[test]
fn invalid_request_never_builds() {
    let settings = configured();
    let request = ContactRequest::default();
    assert!(EmailRequest::new(&settings, &request).is_err());
}

#[test]
fn settings_need_all_ids() {
    assert!(!EmailSettings::default().is_configured());
    assert!(configured().is_configured());
}

#[test]
fn outcome_classification() {
    assert_eq!(outcome(200, "OK"), Ok(()));
    assert_eq!(
        outcome(400, "The user ID is invalid"),
        Err(ContactError::Rejected {
            status: 400,
            body: "The user ID is invalid".into()
        })
    );
}

#[test]
fn messages_hide_service_failures() {
    let messages = ContactMessages::default();
    let rejected = ContactError::Rejected {
        status: 500,
        body: "boom".into(),
    };
    assert_eq!(messages.for_error(&rejected), messages.failure);

    let transport = ContactError::Transport {
        reason: "offline".into(),
    };
    assert_eq!(messages.for_error(&transport), messages.failure);
}

#[test]
fn validation_errors_use_the_configured_texts() {
    let messages = ContactMessages::default();
    let request = ContactRequest {
        name: "Ana".into(),
        email: "ana@".into(),
        ..Default::default()
    };
    let err = request.validate().unwrap_err();
    assert_eq!(messages.for_error(&err), messages.invalid_email);
    assert!(!messages.for_error(&err).contains("ana@"));

    let missing = ContactError::MissingField { field: "name" };
    assert_eq!(messages.for_error(&missing), "Molimo upišite svoje ime.");

    let custom: ContactMessages =
        serde_json::from_str(r#"{ "missing_email": "Email, please." }"#).unwrap();
    let missing = ContactError::MissingField { field: "email" };
    assert_eq!(custom.for_error(&missing), "Email, please.");
    assert_eq!(custom.invalid_guests, messages.invalid_guests);
}
