use std::time::Duration;
use crate::config::structs::tracker_client_config::TrackerClientConfig;

impl TrackerClientConfig {
    pub fn receive_timeout(&self) -> Option<Duration> {
        match self.receive_timeout {
            0 => None,
            secs => Some(Duration::from_secs(secs))
        }
    }

    pub fn send_timeout(&self) -> Option<Duration> {
        match self.send_timeout {
            0 => None,
            secs => Some(Duration::from_secs(secs))
        }
    }

    pub fn connection_id_lifetime(&self) -> Duration {
        Duration::from_secs(self.connection_id_lifetime)
    }
}
