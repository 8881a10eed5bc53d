//! Cross-module behaviour of the debt-check domain model.

use std::collections::{HashMap, HashSet};

use chrono::{TimeZone, Utc};
use debtcheck_domain::{
    CheckNumber, Cuit, DebtCheckRequest, DebtCheckRequestId, DebtPeriod, DomainError,
    EmailAddress, Entity, EntityKey, PersonaFisicaJuridica, RequestStatus, RequestType, User,
    UserId,
};

fn persona() -> PersonaFisicaJuridica {
    PersonaFisicaJuridica::for_cuit(Cuit::new("30-51170725-7").unwrap(), "ACME SA")
}

fn user() -> User {
    User::new(
        UserId::new("30511707257").unwrap(),
        EmailAddress::new("usuario@dominio.com").unwrap(),
        "Usuario",
    )
}

fn request() -> DebtCheckRequest {
    DebtCheckRequest::new(
        DebtCheckRequestId::new(10).unwrap(),
        Cuit::new("30511707257").unwrap(),
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        RequestType::Monitoring,
        250,
        RequestStatus::Successful,
        "{}",
    )
}

#[test]
fn every_entity_rejects_id_reassignment() {
    let mut p = persona();
    let same = p.id().clone();
    assert!(matches!(p.reassign_id(same), Err(DomainError::ImmutableIdentity(_))));

    let mut u = user();
    assert!(matches!(
        u.reassign_id(UserId::generate()),
        Err(DomainError::ImmutableIdentity(_))
    ));

    let mut r = request();
    assert!(matches!(
        r.reassign_id(DebtCheckRequestId::new(11).unwrap()),
        Err(DomainError::ImmutableIdentity(_))
    ));

    assert_eq!(p.id().value(), "30511707257");
    assert_eq!(u.id().value(), "30511707257");
    assert_eq!(r.id().value(), 10);
}

#[test]
fn entities_of_different_variants_never_share_a_key() {
    // Persona and user carry the same rendered id.
    let keys: HashSet<EntityKey> = [persona().key(), user().key(), persona().key()]
        .into_iter()
        .collect();
    assert_eq!(keys.len(), 2);
    assert_ne!(persona().key(), user().key());
}

#[test]
fn entities_work_as_map_keys_by_identity() {
    let mut hits: HashMap<PersonaFisicaJuridica, u32> = HashMap::new();
    *hits.entry(persona()).or_default() += 1;

    let mut renamed = persona();
    renamed.name = "ACME Holding".to_string();
    *hits.entry(renamed).or_default() += 1;

    assert_eq!(hits.len(), 1);
    assert_eq!(hits.values().copied().sum::<u32>(), 2);
}

#[test]
fn value_objects_rebuild_from_their_canonical_value() {
    let cuit = Cuit::new("30-51170725-7").unwrap();
    assert_eq!(Cuit::new(cuit.value()).unwrap(), cuit);

    let check = CheckNumber::new("12345678").unwrap();
    assert_eq!(CheckNumber::new(check.value()).unwrap(), check);

    let period = DebtPeriod::new("202501").unwrap();
    assert_eq!(DebtPeriod::new(period.value()).unwrap(), period);

    let email = EmailAddress::new("usuario@dominio.com").unwrap();
    assert_eq!(EmailAddress::new(email.value()).unwrap(), email);

    let user_id = UserId::generate();
    assert_eq!(UserId::new(user_id.value()).unwrap(), user_id);

    let request_id = DebtCheckRequestId::new(10).unwrap();
    assert_eq!(DebtCheckRequestId::new(request_id.value()).unwrap(), request_id);
}

#[test]
fn rejections_carry_their_error_kind() {
    debtcheck_observability::init();

    let cases: Vec<(&str, DomainError)> = vec![
        ("cuit length", Cuit::new("20-1234567-3").unwrap_err()),
        ("cuit verifier", Cuit::new("20-12345678-0").unwrap_err()),
        ("period month", DebtPeriod::new("202513").unwrap_err()),
        ("period year", DebtPeriod::new("189912").unwrap_err()),
        ("email", EmailAddress::new("usuario@dominio").unwrap_err()),
        ("request id", DebtCheckRequestId::new(-1).unwrap_err()),
        ("check number", CheckNumber::new("abc123").unwrap_err()),
    ];

    let kinds: Vec<(&str, &str)> = cases.iter().map(|(name, e)| (*name, e.kind())).collect();
    assert_eq!(
        kinds,
        vec![
            ("cuit length", "invalid_format"),
            ("cuit verifier", "checksum_mismatch"),
            ("period month", "out_of_range"),
            ("period year", "out_of_range"),
            ("email", "invalid_format"),
            ("request id", "out_of_range"),
            ("check number", "invalid_format"),
        ]
    );
}

#[test]
fn user_payload_with_invalid_email_does_not_deserialize() {
    let json = serde_json::json!({
        "id": "u-1",
        "email": "not-an-email",
        "name": "Ana",
    });
    assert!(serde_json::from_value::<User>(json).is_err());

    let json = serde_json::json!({
        "id": "u-1",
        "email": "ana@example.com",
        "name": "Ana",
    });
    let user: User = serde_json::from_value(json).unwrap();
    assert_eq!(user.id().value(), "u-1");
}
