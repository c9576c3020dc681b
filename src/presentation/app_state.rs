// Application state for HTTP handlers
use crate::application::content_tools_service::ContentToolsService;
use crate::application::landing_service::LandingService;

#[derive(Clone)]
pub struct AppState {
    pub tools_service: ContentToolsService,
    pub landing_service: LandingService,
}
