use crate::modules::localtime::core::current_time::{CurrentTime, TimeZoneMode};

pub struct GetLocalTimeHandler {
    zone: TimeZoneMode,
}

impl GetLocalTimeHandler {
    pub fn new(zone: TimeZoneMode) -> Self {
        Self { zone }
    }

    // Reads the clock on every call; nothing is cached between requests.
    pub fn handle(&self) -> CurrentTime {
        CurrentTime::now(self.zone)
    }
}
