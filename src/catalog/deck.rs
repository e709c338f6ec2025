//! Discovery deck — a swipe-through cursor over the catalog.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SessionError;
use crate::session::SessionStore;

use super::model::{Catalog, CatalogItem, ItemKind};

/// Which way a card was swiped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    /// Pass on the item.
    Left,
    /// Favorite the item.
    Right,
}

/// Result of a single swipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwipeOutcome {
    pub item_id: String,
    pub direction: SwipeDirection,
    pub favorited: bool,
}

/// Cursor over the catalog, optionally limited to one kind of item.
pub struct DiscoveryDeck {
    catalog: Arc<dyn Catalog>,
    order: Vec<usize>,
    cursor: usize,
}

impl DiscoveryDeck {
    pub fn new(catalog: Arc<dyn Catalog>, kind: Option<ItemKind>) -> Self {
        let order = catalog
            .items()
            .iter()
            .enumerate()
            .filter(|(_, item)| kind.is_none_or(|k| item.kind == k))
            .map(|(idx, _)| idx)
            .collect();
        Self {
            catalog,
            order,
            cursor: 0,
        }
    }

    /// The card on top of the deck, or `None` once every card was swiped.
    pub fn current(&self) -> Option<&CatalogItem> {
        let idx = *self.order.get(self.cursor)?;
        self.catalog.items().get(idx)
    }

    /// Cards not yet swiped, including the current one.
    pub fn remaining(&self) -> usize {
        self.order.len().saturating_sub(self.cursor)
    }

    /// Swipe the current card.
    ///
    /// A right swipe favorites the item through `session`. If that write
    /// fails the card stays on top so the swipe can be repeated.
    pub async fn swipe(
        &mut self,
        direction: SwipeDirection,
        session: &SessionStore,
    ) -> Result<Option<SwipeOutcome>, SessionError> {
        let Some(item_id) = self.current().map(|item| item.id.clone()) else {
            return Ok(None);
        };

        let favorited = match direction {
            SwipeDirection::Right => {
                session.add_favorite(&item_id).await?;
                true
            }
            SwipeDirection::Left => false,
        };

        self.cursor += 1;
        debug!(item_id = %item_id, ?direction, remaining = self.remaining(), "Card swiped");

        Ok(Some(SwipeOutcome {
            item_id,
            direction,
            favorited,
        }))
    }

    /// Put every card back on the deck.
    pub fn restart(&mut self) {
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::session::PlaceholderAuthProvider;
    use crate::store::LibSqlStore;

    async fn session() -> SessionStore {
        SessionStore::new(
            Arc::new(LibSqlStore::new_memory().await.unwrap()),
            Arc::new(PlaceholderAuthProvider),
        )
    }

    #[tokio::test]
    async fn right_swipe_favorites_and_advances() {
        let session = session().await;
        let mut deck = DiscoveryDeck::new(Arc::new(StaticCatalog::demo()), Some(ItemKind::Job));
        assert_eq!(deck.current().map(|i| i.id.as_str()), Some("j1"));

        let outcome = deck
            .swipe(SwipeDirection::Right, &session)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(outcome.item_id, "j1");
        assert!(outcome.favorited);
        assert!(session.is_favorite("j1").await);
        assert_eq!(deck.current().map(|i| i.id.as_str()), Some("j2"));
    }

    #[tokio::test]
    async fn left_swipe_only_advances() {
        let session = session().await;
        let mut deck = DiscoveryDeck::new(Arc::new(StaticCatalog::demo()), None);
        let before = deck.remaining();

        let outcome = deck
            .swipe(SwipeDirection::Left, &session)
            .await
            .unwrap()
            .unwrap();
        assert!(!outcome.favorited);
        assert!(session.favorite_ids().await.is_empty());
        assert_eq!(deck.remaining(), before - 1);
    }

    #[tokio::test]
    async fn exhausted_deck_returns_none_until_restart() {
        let session = session().await;
        let mut deck = DiscoveryDeck::new(Arc::new(StaticCatalog::demo()), Some(ItemKind::Job));
        while deck.current().is_some() {
            deck.swipe(SwipeDirection::Left, &session).await.unwrap();
        }

        assert_eq!(deck.remaining(), 0);
        assert!(
            deck.swipe(SwipeDirection::Right, &session)
                .await
                .unwrap()
                .is_none()
        );

        deck.restart();
        assert_eq!(deck.current().map(|i| i.id.as_str()), Some("j1"));
    }
}
