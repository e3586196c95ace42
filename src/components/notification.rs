use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::debug;
use yew::prelude::*;

use crate::content::NOTIFICATIONS;

/// Time each entry stays on screen before the next swap starts.
pub const ROTATION_PERIOD_MS: u32 = 8_000;
/// Hide/show pause so the fade-out finishes before the content changes.
pub const SWAP_PAUSE_MS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationState {
    pub index: usize,
    pub visible: bool,
}

impl RotationState {
    pub fn new() -> Self {
        Self { index: 0, visible: true }
    }

    /// Start of a swap: fade the current entry out.
    pub fn begin_swap(mut self) -> Self {
        self.visible = false;
        self
    }

    /// End of a swap: advance to the next entry and fade back in.
    pub fn complete_swap(mut self, len: usize) -> Self {
        self.index = (self.index + 1) % len;
        self.visible = true;
        self
    }

    /// Manual close. Hides the current entry without touching the index or
    /// the schedule; the next regular tick shows the next entry again.
    pub fn dismiss(mut self) -> Self {
        self.visible = false;
        self
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::new()
    }
}

pub enum RotationAction {
    BeginSwap,
    CompleteSwap,
    Dismiss,
}

impl Reducible for RotationState {
    type Action = RotationAction;

    fn reduce(self: Rc<Self>, action: RotationAction) -> Rc<Self> {
        match action {
            RotationAction::BeginSwap => Rc::new(self.begin_swap()),
            RotationAction::CompleteSwap => Rc::new(self.complete_swap(NOTIFICATIONS.len())),
            RotationAction::Dismiss => Rc::new(self.dismiss()),
        }
    }
}

/// Rotating "someone just joined" toast, fixed to the top left corner.
#[function_component(SalesNotification)]
pub fn sales_notification() -> Html {
    let state = use_reducer(RotationState::new);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(ROTATION_PERIOD_MS, move || {
                    state.dispatch(RotationAction::BeginSwap);
                    let state = state.clone();
                    Timeout::new(SWAP_PAUSE_MS, move || {
                        state.dispatch(RotationAction::CompleteSwap);
                    })
                    .forget();
                });
                debug!("notification rotation started");
                move || drop(interval)
            },
            (),
        );
    }

    let dismiss = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.dispatch(RotationAction::Dismiss);
        })
    };

    let entry = &NOTIFICATIONS[state.index % NOTIFICATIONS.len()];

    html! {
        <div class={classes!("sales-toast", state.visible.then_some("visible"))}>
            <div class="toast-card">
                <div class="toast-icon">{"✝️"}</div>
                <div class="toast-body">
                    <div class="toast-badge">
                        <span class="toast-dot"></span>
                        <span>{"Agora"}</span>
                    </div>
                    <p class="toast-headline">
                        <strong>{ entry.name }</strong>{" "}{ entry.action }
                    </p>
                    <p class="toast-subtitle">{"\""}{ entry.subtitle }{"\""}</p>
                </div>
                <button class="toast-close" onclick={dismiss} aria-label="Fechar notificação">
                    {"×"}
                </button>
            </div>
            <style>
                {r#"
                .sales-toast {
                    position: fixed;
                    top: 1rem;
                    left: 1rem;
                    z-index: 40;
                    opacity: 0;
                    transform: translateY(-1rem);
                    transition: opacity 0.5s ease, transform 0.5s ease;
                    pointer-events: none;
                }
                .sales-toast.visible {
                    opacity: 1;
                    transform: translateY(0);
                    pointer-events: auto;
                }
                .toast-card {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    max-width: 22rem;
                    padding: 1rem;
                    background: linear-gradient(to right, rgba(124, 45, 18, 0.95), rgba(154, 52, 18, 0.95));
                    border: 1px solid rgba(249, 115, 22, 0.2);
                    border-radius: 1rem;
                    box-shadow: 0 16px 40px rgba(0, 0, 0, 0.45);
                    backdrop-filter: blur(6px);
                }
                .toast-icon {
                    flex-shrink: 0;
                    width: 2.5rem;
                    height: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #ea580c;
                    border-radius: 50%;
                    font-size: 1.1rem;
                }
                .toast-badge {
                    display: flex;
                    align-items: center;
                    gap: 0.4rem;
                    margin-bottom: 0.25rem;
                    color: #fed7aa;
                    font-size: 0.7rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }
                .toast-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    background: #fb923c;
                    border-radius: 50%;
                    animation: toast-pulse 1.5s ease-in-out infinite;
                }
                @keyframes toast-pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.4; }
                }
                .toast-headline {
                    margin: 0 0 0.25rem;
                    color: #fff;
                    font-size: 0.85rem;
                    font-weight: 700;
                    line-height: 1.3;
                }
                .toast-headline strong {
                    color: #fdba74;
                }
                .toast-subtitle {
                    margin: 0;
                    color: rgba(255, 237, 213, 0.8);
                    font-size: 0.75rem;
                    font-style: italic;
                }
                .toast-close {
                    flex-shrink: 0;
                    background: none;
                    border: none;
                    color: #fdba74;
                    font-size: 1.1rem;
                    line-height: 1;
                    cursor: pointer;
                    padding: 0.1rem 0.3rem;
                }
                .toast-close:hover {
                    color: #fff;
                }
                @media (max-width: 768px) {
                    .toast-subtitle { display: none; }
                    .toast-card { padding: 0.6rem; max-width: 18rem; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_hides_then_advances() {
        let state = RotationState::new();
        assert!(state.visible);

        let hidden = state.begin_swap();
        assert!(!hidden.visible);
        assert_eq!(hidden.index, 0, "hide must not advance the index");

        let shown = hidden.complete_swap(10);
        assert!(shown.visible);
        assert_eq!(shown.index, 1);
    }

    #[test]
    fn ten_advances_return_to_start() {
        let mut state = RotationState::new();
        let start = state.index;
        for _ in 0..10 {
            state = state.begin_swap().complete_swap(10);
        }
        assert_eq!(state.index, start);
    }

    #[test]
    fn index_never_leaves_range() {
        let mut state = RotationState::new();
        for _ in 0..25 {
            state = state.begin_swap().complete_swap(7);
            assert!(state.index < 7);
        }
    }

    #[test]
    fn dismiss_keeps_index_and_schedule_state() {
        let state = RotationState::new().begin_swap().complete_swap(10);
        let dismissed = state.dismiss();
        assert!(!dismissed.visible);
        assert_eq!(dismissed.index, state.index);
        // The next scheduled tick still moves on to the following entry.
        let next = dismissed.begin_swap().complete_swap(10);
        assert!(next.visible);
        assert_eq!(next.index, state.index + 1);
    }
}
