// Host-side tests for the contact form submit flow with a fake mailer.

use sponsor_core::contact::{
    submit, FormFields, FormView, Mailer, FAILURE_MESSAGE, SUCCESS_MESSAGE,
};
use sponsor_core::DeliveryError;
use std::cell::{Cell, RefCell};

struct FakeMailer {
    outcome: Result<(), DeliveryError>,
    sent: RefCell<Vec<FormFields>>,
}

impl Mailer for FakeMailer {
    async fn send(&self, fields: &FormFields) -> Result<(), DeliveryError> {
        self.sent.borrow_mut().push(fields.clone());
        self.outcome.clone()
    }
}

struct FakeForm {
    fields: RefCell<FormFields>,
    alerts: RefCell<Vec<String>>,
    resets: Cell<u32>,
}

impl FakeForm {
    fn filled() -> Self {
        Self {
            fields: RefCell::new(
                [
                    ("company", "Acme"),
                    ("email", "contact@acme.tn"),
                    ("package", "gold"),
                ]
                .into_iter()
                .collect(),
            ),
            alerts: RefCell::new(Vec::new()),
            resets: Cell::new(0),
        }
    }
}

impl FormView for FakeForm {
    fn fields(&self) -> FormFields {
        self.fields.borrow().clone()
    }

    fn reset(&self) {
        self.resets.set(self.resets.get() + 1);
        *self.fields.borrow_mut() = FormFields::new();
    }

    fn notify(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

fn mailer(outcome: Result<(), DeliveryError>) -> FakeMailer {
    FakeMailer {
        outcome,
        sent: RefCell::new(Vec::new()),
    }
}

#[test]
fn success_acknowledges_and_resets() {
    let m = mailer(Ok(()));
    let form = FakeForm::filled();
    assert!(pollster::block_on(submit(&m, &form)).is_ok());

    assert_eq!(m.sent.borrow().len(), 1);
    assert_eq!(m.sent.borrow()[0].get("company"), Some("Acme"));
    assert_eq!(*form.alerts.borrow(), vec![SUCCESS_MESSAGE.to_string()]);
    assert_eq!(form.resets.get(), 1);
    assert!(form.fields().is_empty());
}

#[test]
fn failure_alerts_and_keeps_fields() {
    let m = mailer(Err(DeliveryError::Rejected("network down".into())));
    let form = FakeForm::filled();
    let before = form.fields();

    let res = pollster::block_on(submit(&m, &form));
    assert_eq!(res, Err(DeliveryError::Rejected("network down".into())));
    assert_eq!(*form.alerts.borrow(), vec![FAILURE_MESSAGE.to_string()]);
    assert_eq!(form.resets.get(), 0);
    assert_eq!(form.fields(), before);
}

#[test]
fn no_retry_after_failure() {
    let m = mailer(Err(DeliveryError::Unavailable("sdk not loaded".into())));
    let form = FakeForm::filled();
    _ = pollster::block_on(submit(&m, &form));
    assert_eq!(m.sent.borrow().len(), 1);
}

#[test]
fn form_fields_collect_and_lookup() {
    let mut f = FormFields::new();
    assert!(f.is_empty());
    f.insert("name", "Sami");
    f.insert("name", "Sami B.");
    assert_eq!(f.len(), 1);
    assert_eq!(f.get("name"), Some("Sami B."));
    assert_eq!(f.get("phone"), None);
}
