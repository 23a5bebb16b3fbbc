//! Top-level composition of a filter set into one predicate.

use crate::{context::QueryContext, error::Result, translate::RestrictionTranslator};
use filter_syntax::FilterEntry;
use tracing::trace;

/// Scopes a query context to one composition pass. Dropping the session
/// resets the context, on success and error paths alike.
struct ContextSession<'c, C: QueryContext> {
    ctx: &'c mut C,
}

impl<'c, C: QueryContext> ContextSession<'c, C> {
    fn new(ctx: &'c mut C) -> Self {
        Self { ctx }
    }

    fn ctx(&mut self) -> &mut C {
        self.ctx
    }
}

impl<C: QueryContext> Drop for ContextSession<'_, C> {
    fn drop(&mut self) {
        self.ctx.reset();
    }
}

impl RestrictionTranslator {
    /// Translate every entry and AND the results into one predicate.
    ///
    /// No entries yields the context's always-true predicate; a single
    /// entry yields its predicate without a one-armed AND wrapper.
    pub fn compose_all<C: QueryContext>(
        &self,
        entries: &[FilterEntry],
        ctx: &mut C,
    ) -> Result<C::Predicate> {
        let mut session = ContextSession::new(ctx);
        trace!("composing {} filter entries", entries.len());

        let mut predicates = Vec::with_capacity(entries.len());
        for entry in entries {
            predicates.push(self.translate(entry, session.ctx())?);
        }

        Ok(match predicates.len() {
            0 => session.ctx().always_true(),
            1 => predicates.remove(0),
            _ => session.ctx().and(predicates),
        })
    }
}
