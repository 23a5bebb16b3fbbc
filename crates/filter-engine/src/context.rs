use crate::operator::OperatorKind;
use model::Value;

/// The seam to a concrete query backend (a criteria builder, an SQL
/// generator, the in-memory evaluator in this crate, ...).
///
/// A context instance serves exactly one composition pass: the composer
/// takes it by exclusive reference, which rules out sharing across
/// concurrent translations, and calls `reset` when the pass ends (success
/// or error) so accumulated builder state never leaks into the next pass.
pub trait QueryContext {
    /// Opaque predicate handle; the core assumes no internal structure.
    type Predicate;

    /// Build one elementary comparison predicate.
    fn predicate(&mut self, op: OperatorKind, property: &str, value: Value) -> Self::Predicate;

    /// Combine predicates with logical AND.
    fn and(&mut self, predicates: Vec<Self::Predicate>) -> Self::Predicate;

    /// Combine predicates with logical OR.
    fn or(&mut self, predicates: Vec<Self::Predicate>) -> Self::Predicate;

    /// The identity predicate for AND: matches everything.
    fn always_true(&mut self) -> Self::Predicate;

    /// Drop any state accumulated during the current pass.
    fn reset(&mut self) {}
}
