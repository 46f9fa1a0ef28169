use crate::modules::localtime::core::current_time::TimeZoneMode;
use crate::modules::localtime::use_cases::get_local_time::handler::GetLocalTimeHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_local_time: Arc<GetLocalTimeHandler>,
}

impl AppState {
    pub fn new(zone: TimeZoneMode) -> Self {
        Self {
            get_local_time: Arc::new(GetLocalTimeHandler::new(zone)),
        }
    }
}
