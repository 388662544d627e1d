//! The order dialog state machine.
//!
//! `Closed` ⇄ `Open(plan)`. Opening selects a plan and shows the dialog,
//! a valid submission hands the composed message to the messaging service
//! and closes it, cancelling closes it without a word.

use serde::Serialize;

use crate::catalog::{Catalog, Plan, PlanId};
use crate::composer::compose;
use crate::error::OrderError;
use crate::handoff::{Handoff, HandoffTarget};
use crate::notify::Severity;
use crate::ports::{NavigationPort, PresentationPort};
use crate::validator::{OrderInput, Validator};

pub const ORDER_SENT_MESSAGE: &str = "Pesanan berhasil dikirim! Anda akan dialihkan ke WhatsApp.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "plan", rename_all = "lowercase")]
pub enum WorkflowState {
    #[default]
    Closed,
    Open(PlanId),
}

impl WorkflowState {
    pub fn selected_plan(&self) -> Option<PlanId> {
        match self {
            WorkflowState::Closed => None,
            WorkflowState::Open(id) => Some(*id),
        }
    }
}

/// One visitor's order dialog, wired to the host through its ports.
pub struct OrderController<P, N> {
    catalog: &'static Catalog,
    validator: Validator,
    target: HandoffTarget,
    state: WorkflowState,
    presenter: P,
    navigator: N,
}

impl<P: PresentationPort, N: NavigationPort> OrderController<P, N> {
    pub fn new(validator: Validator, target: HandoffTarget, presenter: P, navigator: N) -> Self {
        Self {
            catalog: Catalog::builtin(),
            validator,
            target,
            state: WorkflowState::Closed,
            presenter,
            navigator,
        }
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn current_plan(&self) -> Option<&'static Plan> {
        let catalog = self.catalog;
        self.state.selected_plan().map(|id| catalog.get(id))
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    /// Select `plan_id` and show the dialog. An unknown id leaves everything untouched.
    pub fn open(&mut self, plan_id: &str) -> Result<&'static Plan, OrderError> {
        let catalog = self.catalog;
        let plan = match catalog.lookup(plan_id) {
            Ok(p) => p,
            Err(e) => {
                tracing::debug!(plan_id, "Ignoring order request for unknown plan");
                return Err(e);
            }
        };
        if let WorkflowState::Open(previous) = self.state {
            if previous != plan.id {
                tracing::debug!(%previous, plan = %plan.id, "Replacing selected plan");
            }
        }
        self.state = WorkflowState::Open(plan.id);
        self.presenter.reset_form();
        self.presenter.show_dialog(&plan.display_summary());
        tracing::info!(plan = %plan.id, "Order dialog opened");
        Ok(plan)
    }

    /// Validate and hand off the order. On a validation failure the dialog stays
    /// open and the customer is told what to fix.
    pub fn submit(&mut self, input: &OrderInput) -> Result<Handoff, OrderError> {
        let plan = self.current_plan().ok_or(OrderError::NoActivePlan)?;
        let order = match self.validator.validate(input) {
            Ok(o) => o,
            Err(e) => {
                tracing::warn!(plan = %plan.id, error = ?e, "Order rejected by validation");
                self.presenter.notify(&e.to_string(), Severity::Error);
                return Err(e);
            }
        };
        let handoff = Handoff::new(&self.target, compose(plan, &order));
        self.navigator.open_external(&handoff.url);
        tracing::info!(plan = %plan.id, recipient = self.target.recipient(), "Order handed off");
        self.close();
        self.presenter.notify(ORDER_SENT_MESSAGE, Severity::Success);
        Ok(handoff)
    }

    /// Close the dialog and drop whatever was typed. Returns whether a dialog was open.
    pub fn cancel(&mut self) -> bool {
        if self.state == WorkflowState::Closed {
            return false;
        }
        tracing::info!("Order dialog cancelled");
        self.close();
        true
    }

    fn close(&mut self) {
        self.state = WorkflowState::Closed;
        self.presenter.hide_dialog();
        self.presenter.reset_form();
    }
}
