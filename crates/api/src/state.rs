use std::sync::Arc;

use aethera_chain::{ChainConfig, MockChain};
use aethera_db::Store;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the store sits behind `Arc`, and the chain holds an
/// `Arc` to the same store.
#[derive(Clone)]
pub struct AppState {
    /// Platform state and its key-value persistence.
    pub store: Arc<Store>,
    /// Mock chain operating on `store`.
    pub chain: MockChain,
}

impl AppState {
    pub fn new(store: Arc<Store>, chain: ChainConfig) -> Self {
        let chain = MockChain::new(Arc::clone(&store), chain);
        Self { store, chain }
    }
}
