/// End-to-end order scenarios against the public library API
use ptero::catalog::{Catalog, PlanId};
use ptero::handoff::HandoffTarget;
use ptero::notify::Severity;
use ptero::ports::{RecordingNavigator, RecordingPresenter};
use ptero::validator::{OrderInput, Validator};
use ptero::workflow::{OrderController, WorkflowState, ORDER_SENT_MESSAGE};
use ptero::OrderError;

fn controller() -> OrderController<RecordingPresenter, RecordingNavigator> {
    OrderController::new(
        Validator::default(),
        HandoffTarget::new("https://wa.me", "6282133886418"),
        RecordingPresenter::default(),
        RecordingNavigator::default(),
    )
}

fn input(name: &str, email: &str, contact: &str) -> OrderInput {
    OrderInput {
        name: name.into(),
        email: email.into(),
        contact: contact.into(),
        ..Default::default()
    }
}

#[test]
fn test_premium_order_is_handed_off() {
    let mut c = controller();
    c.open("premium").unwrap();
    let handoff = c.submit(&input("Budi", "budi@mail.com", "081234567890")).unwrap();

    assert_eq!(c.state(), WorkflowState::Closed);
    assert_eq!(c.presenter().notifications.last().unwrap().1, Severity::Success);
    assert_eq!(c.presenter().notifications.last().unwrap().0, ORDER_SENT_MESSAGE);
    assert_eq!(c.navigator().opened.len(), 1);

    assert!(handoff.message.contains("Premium Plan"));
    assert!(handoff.message.contains("Rp 10.000/bulan"));
    assert!(handoff.message.contains("budi@mail.com"));
    for feature in &Catalog::builtin().get(PlanId::Premium).features {
        assert_eq!(handoff.message.matches(&format!("✓ {}\n", feature)).count(), 1);
    }

    let (_, text) = handoff.url.split_once("?text=").unwrap();
    assert_eq!(urlencoding::decode(text).unwrap(), handoff.message);
}

#[test]
fn test_missing_name_keeps_premium_open() {
    let mut c = controller();
    c.open("premium").unwrap();
    let err = c.submit(&input("", "x@y.com", "081234567890")).unwrap_err();

    assert_eq!(err, OrderError::MissingRequiredField);
    assert_eq!(c.state(), WorkflowState::Open(PlanId::Premium));
    assert!(c.navigator().opened.is_empty());
    assert_eq!(
        c.presenter().notifications,
        vec![("Mohon lengkapi semua field yang wajib diisi (*)".to_string(), Severity::Error)]
    );
}

#[test]
fn test_each_validation_failure_has_its_own_message() {
    let cases = [
        (input("Budi", "notanemail", "081234567890"), "Mohon masukkan alamat email yang valid"),
        (input("Budi", "a@b", "081234567890"), "Mohon masukkan alamat email yang valid"),
        (input("Budi", "a@b.co", "12345"), "Mohon masukkan nomor WhatsApp yang valid"),
        (input("Budi", "a@b.co", "abcdefghijk"), "Mohon masukkan nomor WhatsApp yang valid"),
    ];
    for (case, expected) in cases {
        let mut c = controller();
        c.open("basic").unwrap();
        let err = c.submit(&case).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(c.presenter().notifications[0].0, expected);
        assert_eq!(c.state(), WorkflowState::Open(PlanId::Basic));
    }
}

#[test]
fn test_cancel_from_every_plan() {
    for id in PlanId::ALL {
        let mut c = controller();
        c.open(id.as_str()).unwrap();
        assert!(c.cancel());
        assert_eq!(c.state(), WorkflowState::Closed);
        assert!(c.presenter().notifications.is_empty());
        assert!(c.navigator().opened.is_empty());
    }
}

#[test]
fn test_unknown_plan_never_opens() {
    let mut c = controller();
    for id in ["", "gold", "premium-plan", "basic;drop"] {
        assert!(matches!(c.open(id), Err(OrderError::PlanNotFound(_))));
        assert_eq!(c.state(), WorkflowState::Closed);
    }
    assert!(c.presenter().dialog.is_none());
}

#[test]
fn test_optional_fields_only_when_filled() {
    let mut c = controller();
    c.open("pro").unwrap();
    let mut order = input("Sari", "sari@mail.com", "+6281234567890");
    order.server_name = "  ".into();
    order.notes = "".into();
    let plain = c.submit(&order).unwrap();
    assert!(!plain.message.contains("Nama Server"));
    assert!(!plain.message.contains("Catatan Tambahan"));

    c.open("pro").unwrap();
    order.server_name = "sari-smp".into();
    order.notes = "Mohon pakai lokasi Singapura".into();
    let full = c.submit(&order).unwrap();
    assert!(full.message.contains("• Nama Server: sari-smp"));
    assert!(full.message.contains("📝 *Catatan Tambahan:*\nMohon pakai lokasi Singapura"));
}
