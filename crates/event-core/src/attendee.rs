//! Attendee record and priority rank.
//!
//! An [`Attendee`] is immutable once created. The registry, the arrival
//! queue, and the priority tree all hold the same record via `Arc`, so a
//! registration is stored once and referenced three times.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dietary preference recorded when a registration does not supply one.
pub const DEFAULT_DIETARY_PREFERENCE: &str = "none";

/// Priority rank for speakers.
pub const RANK_SPEAKER: u8 = 2;

/// Priority rank for VIPs who are not speakers.
pub const RANK_VIP: u8 = 1;

/// Priority rank for general attendees.
pub const RANK_GENERAL: u8 = 0;

/// One registrant, immutable after creation.
///
/// Field names on the wire match the public API contract: `isVIP`,
/// `isSpeaker`, `dietaryPreference`, and `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendee {
    /// Attendee display name (non-empty, validated by the API layer).
    pub name: String,

    /// Contact email. Used as a lookup key but NOT enforced unique:
    /// duplicate emails are allowed and lookups return the first match.
    pub email: String,

    /// Whether the attendee is a VIP.
    #[serde(rename = "isVIP")]
    pub is_vip: bool,

    /// Whether the attendee is a speaker.
    #[serde(rename = "isSpeaker")]
    pub is_speaker: bool,

    /// Dietary preference, `"none"` when not supplied.
    #[serde(rename = "dietaryPreference")]
    pub dietary_preference: String,

    /// Registration creation time.
    #[serde(rename = "timestamp")]
    pub registered_at: DateTime<Utc>,
}

impl Attendee {
    /// Create an attendee from a registration, stamping the current time.
    pub fn new(registration: Registration) -> Self {
        Self {
            name: registration.name,
            email: registration.email,
            is_vip: registration.is_vip,
            is_speaker: registration.is_speaker,
            dietary_preference: registration.dietary_preference,
            registered_at: Utc::now(),
        }
    }

    /// Priority rank derived from role: speaker 2, VIP (non-speaker) 1,
    /// general 0.
    pub fn rank(&self) -> u8 {
        if self.is_speaker {
            RANK_SPEAKER
        } else if self.is_vip {
            RANK_VIP
        } else {
            RANK_GENERAL
        }
    }
}

/// Input for a registration, before a timestamp is assigned.
///
/// The API layer fills in defaults (`false` flags, `"none"` dietary
/// preference) before handing this to the registry.
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub is_vip: bool,
    pub is_speaker: bool,
    pub dietary_preference: String,
}
