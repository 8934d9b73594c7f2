//! Statistic Selectors
//!
//! Pure read-side functions computing the four panel values from state.
//! All of them are deterministic: ties never depend on map iteration order.

use std::collections::HashMap;

use super::global::{Appointment, Day, PanelId};

/// Number of appointments with a booked interview.
pub fn total_interviews(appointments: &HashMap<u32, Appointment>) -> usize {
    appointments
        .values()
        .filter(|appointment| appointment.interview.is_some())
        .count()
}

/// Time slot with the fewest booked interviews. A slot every appointment of
/// which is free counts zero. Ties go to the slot holding the lowest
/// appointment id.
pub fn least_popular_time_slot(appointments: &HashMap<u32, Appointment>) -> Option<String> {
    // Per slot: booked count and the lowest appointment id seen in it.
    let mut slots: HashMap<&str, (usize, u32)> = HashMap::new();
    for appointment in appointments.values() {
        let entry = slots
            .entry(appointment.time.as_str())
            .or_insert((0, appointment.id));
        if appointment.interview.is_some() {
            entry.0 += 1;
        }
        entry.1 = entry.1.min(appointment.id);
    }

    slots
        .into_iter()
        .min_by_key(|&(_, (booked, lowest_id))| (booked, lowest_id))
        .map(|(time, _)| time.to_string())
}

/// Name of the day whose appointments hold the most booked interviews.
/// Dangling appointment references count zero; ties go to the first-listed
/// day.
pub fn most_popular_day(
    days: &[Day],
    appointments: &HashMap<u32, Appointment>,
) -> Option<String> {
    let mut best: Option<(&Day, usize)> = None;
    for day in days {
        let booked = day
            .appointments
            .iter()
            .filter_map(|id| appointments.get(id))
            .filter(|appointment| appointment.interview.is_some())
            .count();
        match best {
            Some((_, best_booked)) if booked <= best_booked => {}
            _ => best = Some((day, booked)),
        }
    }
    best.map(|(day, _)| day.name.clone())
}

/// Average booked interviews per day; 0.0 when there are no days.
pub fn interviews_per_day(days: &[Day], appointments: &HashMap<u32, Appointment>) -> f64 {
    if days.is_empty() {
        return 0.0;
    }
    total_interviews(appointments) as f64 / days.len() as f64
}

/// Panels to display: all four in declaration order, or just the focused one.
pub fn visible_panels(focused: Option<PanelId>) -> Vec<PanelId> {
    PanelId::ALL
        .into_iter()
        .filter(|panel| focused.is_none() || focused == Some(*panel))
        .collect()
}

/// Rendered value for a panel; an em-dash when there is nothing to show.
pub fn panel_value(
    panel: PanelId,
    days: &[Day],
    appointments: &HashMap<u32, Appointment>,
) -> String {
    match panel {
        PanelId::TotalInterviews => total_interviews(appointments).to_string(),
        PanelId::LeastPopularTimeSlot => {
            least_popular_time_slot(appointments).unwrap_or_else(|| "—".to_string())
        }
        PanelId::MostPopularDay => {
            most_popular_day(days, appointments).unwrap_or_else(|| "—".to_string())
        }
        PanelId::InterviewsPerDay => format!("{:.1}", interviews_per_day(days, appointments)),
    }
}
