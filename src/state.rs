use crate::{
    config::AppConfig,
    db::DbPool,
    services::{planner::PlannerService, trips::TripStore},
};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: DbPool,
    pub planner: PlannerService,
    pub trips: TripStore,
}

impl AppState {
    pub fn new(config: AppConfig, db: DbPool, planner: PlannerService, trips: TripStore) -> Self {
        Self {
            config,
            db,
            planner,
            trips,
        }
    }
}
