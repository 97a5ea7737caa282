//! Shared state for the API layer.

use std::sync::Arc;

use crate::llm::DiagnosisModel;
use crate::store::DiagnosisStore;

/// Shared context for all API routes: the ephemeral request store and
/// the diagnosis model behind its trait object.
#[derive(Clone)]
pub struct ApiContext {
    pub store: Arc<DiagnosisStore>,
    pub model: Arc<dyn DiagnosisModel>,
}

impl ApiContext {
    pub fn new(model: Arc<dyn DiagnosisModel>) -> Self {
        Self {
            store: Arc::new(DiagnosisStore::new()),
            model,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockModel;

    #[test]
    fn context_is_cheaply_cloneable() {
        let ctx = ApiContext::new(Arc::new(MockModel::new("{}")));
        let clone = ctx.clone();
        // Both handles point at the same store.
        assert!(Arc::ptr_eq(&ctx.store, &clone.store));
    }
}
