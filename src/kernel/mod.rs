//! Headless swipe-deck core (state/action/effect).

pub mod action;
pub mod card;
pub mod controller;
pub mod deck;
pub mod decision;
pub mod effect;
pub mod gesture;
pub mod services;
pub mod state;

pub use action::Action;
pub use card::{card_style, CardPhase, CardStyle, ExitMotion, SwipeCard, Transition};
pub use controller::{DispatchResult, Progress, SessionController};
pub use deck::DeckStack;
pub use decision::{Choice, Decision, DecisionLog, DecisionSummary, Direction, ShoppingStyle};
pub use effect::Effect;
pub use gesture::{DragState, DragVector, GestureThresholds, GestureTracker, Intent, SwipeOutcome};
pub use state::{SessionPhase, SessionState};
