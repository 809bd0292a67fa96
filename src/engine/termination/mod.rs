//! Conditions which decide when the search driver gives up.

mod indefinite;
mod time_budget;

pub use indefinite::Indefinite;
pub use time_budget::TimeBudget;

/// The search driver polls the condition before every decision. Once it returns `true` the search
/// stops and reports [`SatisfactionResult::Unknown`](crate::results::SatisfactionResult::Unknown).
pub trait TerminationCondition {
    fn should_stop(&mut self) -> bool;
}
