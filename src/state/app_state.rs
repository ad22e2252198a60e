//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::card::CardService;
use crate::collection::CollectionService;
use crate::pack::PackService;
use crate::profile::ProfileService;
use crate::quest::QuestService;
use crate::rarity::RarityService;
use crate::store::Database;
use crate::trade::TradeService;

/// Shared application state
#[derive(Clone)]
pub struct AppState<D> {
    pub db: D,
    pub rarity_service: Arc<RarityService<D>>,
    pub card_service: Arc<CardService<D>>,
    pub profile_service: Arc<ProfileService<D>>,
    pub collection_service: Arc<CollectionService<D>>,
    pub trade_service: Arc<TradeService<D>>,
    pub quest_service: Arc<QuestService<D>>,
    pub pack_service: Arc<PackService<D>>,
}

impl<D: Database> AppState<D> {
    /// Wire every service onto one database handle
    pub fn new(db: D, max_pack_size: i64) -> Self {
        Self {
            rarity_service: Arc::new(RarityService::new(db.clone())),
            card_service: Arc::new(CardService::new(db.clone())),
            profile_service: Arc::new(ProfileService::new(db.clone())),
            collection_service: Arc::new(CollectionService::new(db.clone())),
            trade_service: Arc::new(TradeService::new(db.clone())),
            quest_service: Arc::new(QuestService::new(db.clone())),
            pack_service: Arc::new(PackService::new(db.clone(), max_pack_size)),
            db,
        }
    }
}

macro_rules! service_from_ref {
    ($field:ident, $service:ident) => {
        impl<D: Clone> FromRef<AppState<D>> for Arc<$service<D>> {
            fn from_ref(app_state: &AppState<D>) -> Self {
                app_state.$field.clone()
            }
        }
    };
}

service_from_ref!(rarity_service, RarityService);
service_from_ref!(card_service, CardService);
service_from_ref!(profile_service, ProfileService);
service_from_ref!(collection_service, CollectionService);
service_from_ref!(trade_service, TradeService);
service_from_ref!(quest_service, QuestService);
service_from_ref!(pack_service, PackService);
