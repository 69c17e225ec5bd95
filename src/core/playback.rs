// Typed contract for the embedded player's state messages and the per-frame
// update behavior they select.

use glam::Vec3;
use serde::Deserialize;
use thiserror::Error;

/// Origin of the embedded player; outbound polls target it and inbound
/// messages from any other origin are rejected.
pub const PLAYER_ORIGIN: &str = "https://open.spotify.com";

/// Query sent to the player on every poll.
pub const STATE_QUERY: &str = r#"{"event":"command","func":"getCurrentState","args":""}"#;

/// Poll period for the state query.
pub const POLL_INTERVAL_MS: i32 = 1000;

/// Model rotation per rendered frame while playback is active (radians, z axis).
pub const ROTATION_PER_FRAME: f32 = -0.033_333_333;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    pub is_paused: bool,
    pub duration: f64,
    pub position: f64,
}

impl PlaybackState {
    /// Playing and not parked at the end of the track.
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.is_paused && self.duration != self.position
    }

    pub fn behavior(&self) -> UpdateBehavior {
        if self.is_active() {
            UpdateBehavior::Rotating {
                rate: ROTATION_PER_FRAME,
            }
        } else {
            UpdateBehavior::Idle
        }
    }
}

/// Envelope posted by the player. Only `payload` is required; the event
/// type is informational.
#[derive(Clone, Debug, Deserialize)]
pub struct PlayerMessage {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub payload: PlaybackState,
}

#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("message from untrusted origin {0:?}")]
    UntrustedOrigin(String),
    #[error("message data is neither a string nor a JSON-serialisable object")]
    Unreadable,
    #[error("malformed player message: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub fn check_origin(origin: &str, expected: &str) -> Result<(), PlaybackError> {
    if origin == expected {
        Ok(())
    } else {
        Err(PlaybackError::UntrustedOrigin(origin.to_string()))
    }
}

pub fn decode_body(body: &str) -> Result<PlayerMessage, PlaybackError> {
    Ok(serde_json::from_str::<PlayerMessage>(body)?)
}

/// Per-frame update applied to the model group. Exactly one is active.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum UpdateBehavior {
    #[default]
    Idle,
    Rotating { rate: f32 },
}

impl UpdateBehavior {
    #[inline]
    pub fn apply(self, rotation: &mut Vec3) {
        match self {
            UpdateBehavior::Idle => {}
            UpdateBehavior::Rotating { rate } => rotation.z += rate,
        }
    }

    /// Next behavior after a decode attempt; failures keep the current one.
    pub fn after<E>(self, decoded: &Result<PlayerMessage, E>) -> Self {
        match decoded {
            Ok(msg) => msg.payload.behavior(),
            Err(_) => self,
        }
    }
}
