use bella_common::FormStatus;
use leptos::*;

/// Banner for the outcome of a reservation submission
#[component]
pub fn StatusMessage(
    /// Status to display; idle statuses render nothing
    status: FormStatus,
) -> impl IntoView {
    (!status.is_idle()).then(|| {
        let class = format!("form-message {}", status.class());
        let role = if status.is_error() { "alert" } else { "status" };

        view! {
            <div class=class role=role>
                {status.message}
            </div>
        }
    })
}
