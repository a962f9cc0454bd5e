//! Browser timeouts for the reservation status banner

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use bella_common::{PendingClear, ReservationForm, TimerHandle};
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;

use crate::utils::js_error_message;

/// `setTimeout` handle that can sit in a [`PendingClear`]
pub struct BrowserTimeout(TimeoutHandle);

impl TimerHandle for BrowserTimeout {
    fn cancel(self) {
        self.0.clear();
    }
}

pub type StatusClearSlot = Rc<RefCell<PendingClear<BrowserTimeout>>>;

pub fn status_clear_slot() -> StatusClearSlot {
    Rc::new(RefCell::new(PendingClear::new()))
}

/// Clear the form status after `delay`, tracking the timeout in `slot`
pub fn schedule_status_clear(
    form: RwSignal<ReservationForm>,
    slot: &StatusClearSlot,
    delay: Duration,
) {
    let fired = Rc::downgrade(slot);
    let scheduled = set_timeout_with_handle(
        move || {
            // no-op if the form was disposed in the meantime
            let _ = form.try_update(|form| form.clear_status());
            if let Some(slot) = fired.upgrade() {
                slot.borrow_mut().fired();
            }
        },
        delay,
    );

    match scheduled {
        Ok(handle) => slot.borrow_mut().arm(BrowserTimeout(handle)),
        Err(err) => {
            logging::warn!("Failed to schedule status clear: {}", js_error_message(&err));
        }
    }
}
