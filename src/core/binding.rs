//! Which store each ticket channel is ordering from.

use crate::models::Store;
use std::collections::HashMap;

/// The store a channel selected with `/menu`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelBinding {
    /// Discord channel id
    pub channel_id: u64,
    /// Selected store
    pub store_id: i64,
    /// Store name at selection time, for messages
    pub store_name: String,
}

/// At most one binding per channel. Not persisted.
#[derive(Debug, Default)]
pub struct ChannelBindings {
    bindings: HashMap<u64, ChannelBinding>,
}

impl ChannelBindings {
    /// Binds `channel_id` to `store`, returning the binding it replaced.
    pub fn bind(&mut self, channel_id: u64, store: &Store) -> Option<ChannelBinding> {
        self.bindings.insert(
            channel_id,
            ChannelBinding {
                channel_id,
                store_id: store.store_id,
                store_name: store.name.clone(),
            },
        )
    }

    /// The store `channel_id` is ordering from.
    #[must_use]
    pub fn resolve(&self, channel_id: u64) -> Option<&ChannelBinding> {
        self.bindings.get(&channel_id)
    }

    /// Drops the binding of a deleted channel.
    pub fn unbind(&mut self, channel_id: u64) -> Option<ChannelBinding> {
        self.bindings.remove(&channel_id)
    }

    /// Number of bound channels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True when no channel has a store.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
