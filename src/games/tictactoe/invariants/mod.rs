//! First-class invariants for the board engine.
//!
//! Invariants are logical properties that hold after every accepted move.
//! The engine checks them in debug builds; they are testable on their own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two or three [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<InvariantViolation> = [$(
                    (!$inv::holds(state)).then(|| InvariantViolation::new($inv::description())),
                )+]
                .into_iter()
                .flatten()
                .collect();

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);

pub mod mark_balance;
pub mod state_consistent;
pub mod turn_order;

pub use mark_balance::MarkBalanceInvariant;
pub use state_consistent::StateConsistentInvariant;
pub use turn_order::TurnOrderInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    MarkBalanceInvariant,
    TurnOrderInvariant,
    StateConsistentInvariant,
);
