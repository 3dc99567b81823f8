//! Contact form submission through an external mail collaborator.
//!
//! One best-effort attempt: success acknowledges and clears the form, failure
//! reports and keeps what the visitor typed so they can resend by hand.

use crate::error::DeliveryError;
use serde::Serialize;
use std::collections::BTreeMap;

pub const SUCCESS_MESSAGE: &str = "Merci pour votre demande ! Nous vous contacterons bientôt.";
pub const FAILURE_MESSAGE: &str = "Erreur lors de l'envoi de la demande. Veuillez réessayer.";

/// Field name -> value, as submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormFields(pub BTreeMap<String, String>);

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[allow(async_fn_in_trait)]
pub trait Mailer {
    async fn send(&self, fields: &FormFields) -> Result<(), DeliveryError>;
}

/// The form as the submit flow sees it.
pub trait FormView {
    fn fields(&self) -> FormFields;
    fn reset(&self);
    fn notify(&self, message: &str);
}

pub async fn submit<M: Mailer, V: FormView>(mailer: &M, view: &V) -> Result<(), DeliveryError> {
    let fields = view.fields();
    log::info!("[contact] sending {} field(s)", fields.len());
    match mailer.send(&fields).await {
        Ok(()) => {
            view.notify(SUCCESS_MESSAGE);
            view.reset();
            Ok(())
        }
        Err(e) => {
            log::error!("[contact] delivery failed: {}", e);
            view.notify(FAILURE_MESSAGE);
            Err(e)
        }
    }
}
