//! State Reducers
//!
//! Pure transition functions shared by the live-update listener and the
//! panel focus interaction.

use std::collections::HashMap;

use super::global::{Appointment, Interview, PanelId};

/// Replace (or clear, when `interview` is `None`) the interview of the
/// appointment keyed by `id`. Every other entry is left untouched; an
/// unknown id is a no-op.
pub fn set_interview(
    appointments: &mut HashMap<u32, Appointment>,
    id: u32,
    interview: Option<Interview>,
) {
    if let Some(appointment) = appointments.get_mut(&id) {
        appointment.interview = interview;
    }
}

/// Focus transition for a panel click: any click while focused unfocuses,
/// regardless of which panel was hit.
pub fn toggle_focus(current: Option<PanelId>, clicked: PanelId) -> Option<PanelId> {
    match current {
        Some(_) => None,
        None => Some(clicked),
    }
}
