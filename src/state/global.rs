//! Global Dashboard State
//!
//! Reactive state management using Leptos signals. The three collections are
//! populated once from the joined snapshot, then mutated only by the
//! live-update merge; the focus preference is written through to storage on
//! every transition.

use leptos::*;
use std::collections::HashMap;
use std::rc::Rc;

use super::preferences::PreferenceStore;
use super::reducers;
use crate::api::Snapshot;

/// Identifier of a statistic panel, in fixed display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelId {
    TotalInterviews = 1,
    LeastPopularTimeSlot = 2,
    MostPopularDay = 3,
    InterviewsPerDay = 4,
}

impl PanelId {
    /// All panels, in display order.
    pub const ALL: [PanelId; 4] = [
        PanelId::TotalInterviews,
        PanelId::LeastPopularTimeSlot,
        PanelId::MostPopularDay,
        PanelId::InterviewsPerDay,
    ];

    /// Numeric identifier, as persisted and as used by the original API.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Look up a panel by its numeric identifier.
    pub fn from_id(id: u8) -> Option<Self> {
        PanelId::ALL.into_iter().find(|panel| panel.id() == id)
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            PanelId::TotalInterviews => "Total Interviews",
            PanelId::LeastPopularTimeSlot => "Least Popular Time Slot",
            PanelId::MostPopularDay => "Most Popular Day",
            PanelId::InterviewsPerDay => "Interviews Per Day",
        }
    }
}

/// Day entry from the API. Days arrive as an array and keep calendar order.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Day {
    pub id: u32,
    pub name: String,
    /// Ids of the appointments scheduled on this day.
    #[serde(default)]
    pub appointments: Vec<u32>,
    /// Ids of the interviewers available on this day.
    #[serde(default)]
    pub interviewers: Vec<u32>,
    /// Remaining free appointment slots.
    #[serde(default)]
    pub spots: u32,
}

/// A booked interview.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Interview {
    pub student: String,
    pub interviewer: u32,
}

/// Appointment slot from the API, keyed by id in the appointments map.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Appointment {
    pub id: u32,
    pub time: String,
    #[serde(default)]
    pub interview: Option<Interview>,
}

/// Interviewer from the API, keyed by id in the interviewers map.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Interviewer {
    pub id: u32,
    pub name: String,
    pub avatar: String,
}

/// Global dashboard state provided to all components.
#[derive(Clone)]
pub struct DashboardState {
    /// True until the initial snapshot has been applied.
    pub loading: RwSignal<bool>,
    /// Currently focused panel, if any.
    pub focused: RwSignal<Option<PanelId>>,
    /// Days in calendar order.
    pub days: RwSignal<Vec<Day>>,
    /// Appointments keyed by their own id.
    pub appointments: RwSignal<HashMap<u32, Appointment>>,
    /// Interviewers keyed by their own id.
    pub interviewers: RwSignal<HashMap<u32, Interviewer>>,
    /// Push channel connection status.
    pub ws_connected: RwSignal<bool>,
    /// Timestamp of the last applied live update, millis since epoch.
    pub last_update: RwSignal<Option<i64>>,
    /// Failure message from the initial load, if it failed.
    pub error: RwSignal<Option<String>>,
    prefs: Rc<dyn PreferenceStore>,
}

impl DashboardState {
    pub fn new(prefs: Rc<dyn PreferenceStore>) -> Self {
        Self {
            loading: create_rw_signal(true),
            focused: create_rw_signal(None),
            days: create_rw_signal(Vec::new()),
            appointments: create_rw_signal(HashMap::new()),
            interviewers: create_rw_signal(HashMap::new()),
            ws_connected: create_rw_signal(false),
            last_update: create_rw_signal(None),
            error: create_rw_signal(None),
            prefs,
        }
    }

    /// Populate the three collections from the joined initial responses and
    /// leave the loading state. Applied as one unit; there is no
    /// partially-populated state.
    pub fn apply_snapshot(&self, snapshot: Snapshot) {
        debug_assert!(snapshot.appointments.iter().all(|(id, a)| *id == a.id));
        debug_assert!(snapshot.interviewers.iter().all(|(id, i)| *id == i.id));

        self.days.set(snapshot.days);
        self.appointments.set(snapshot.appointments);
        self.interviewers.set(snapshot.interviewers);
        self.loading.set(false);
    }

    /// Merge a live interview update into the appointments map.
    pub fn set_interview(&self, id: u32, interview: Option<Interview>) {
        self.appointments.update(|appointments| {
            reducers::set_interview(appointments, id, interview);
        });
        self.last_update
            .set(Some(chrono::Utc::now().timestamp_millis()));
    }

    /// Restore the persisted focus, if one was stored. Applied independently
    /// of the snapshot fetch.
    pub fn restore_focus(&self) {
        if let Some(panel) = self.prefs.load_focus() {
            self.focused.set(Some(panel));
        }
    }

    /// Toggle focus for a clicked panel and persist the transition.
    pub fn select_panel(&self, panel: PanelId) {
        let next = reducers::toggle_focus(self.focused.get_untracked(), panel);
        self.focused.set(next);
        self.prefs.store_focus(next);
    }
}

/// Provide dashboard state to the component tree.
pub fn provide_dashboard_state(prefs: Rc<dyn PreferenceStore>) {
    provide_context(DashboardState::new(prefs));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::preferences::MemoryPrefs;

    fn snapshot() -> Snapshot {
        Snapshot {
            days: vec![Day {
                id: 1,
                name: "Monday".to_string(),
                appointments: vec![1, 2],
                interviewers: vec![1],
                spots: 1,
            }],
            appointments: HashMap::from([
                (
                    1,
                    Appointment {
                        id: 1,
                        time: "12pm".to_string(),
                        interview: None,
                    },
                ),
                (
                    2,
                    Appointment {
                        id: 2,
                        time: "1pm".to_string(),
                        interview: Some(Interview {
                            student: "Archie Cohen".to_string(),
                            interviewer: 1,
                        }),
                    },
                ),
            ]),
            interviewers: HashMap::from([(
                1,
                Interviewer {
                    id: 1,
                    name: "Sylvia Palmer".to_string(),
                    avatar: "https://i.imgur.com/LpaY82x.png".to_string(),
                },
            )]),
        }
    }

    #[test]
    fn panel_ids_round_trip() {
        for panel in PanelId::ALL {
            assert_eq!(PanelId::from_id(panel.id()), Some(panel));
        }
        assert_eq!(PanelId::from_id(0), None);
        assert_eq!(PanelId::from_id(5), None);
    }

    #[test]
    fn applying_the_snapshot_leaves_the_loading_state() {
        let runtime = create_runtime();
        let state = DashboardState::new(Rc::new(MemoryPrefs::default()));
        assert!(state.loading.get_untracked());

        state.apply_snapshot(snapshot());

        assert!(!state.loading.get_untracked());
        assert_eq!(state.days.get_untracked(), snapshot().days);
        assert_eq!(state.appointments.get_untracked(), snapshot().appointments);
        assert_eq!(state.interviewers.get_untracked(), snapshot().interviewers);
        runtime.dispose();
    }

    #[test]
    fn live_update_touches_only_the_target_appointment() {
        let runtime = create_runtime();
        let state = DashboardState::new(Rc::new(MemoryPrefs::default()));
        state.apply_snapshot(snapshot());

        let interview = Interview {
            student: "Lydia Miller-Jones".to_string(),
            interviewer: 1,
        };
        state.set_interview(1, Some(interview.clone()));

        let appointments = state.appointments.get_untracked();
        assert_eq!(appointments[&1].interview, Some(interview));
        assert_eq!(appointments[&2], snapshot().appointments[&2]);
        assert_eq!(state.days.get_untracked(), snapshot().days);
        assert!(state.last_update.get_untracked().is_some());
        runtime.dispose();
    }

    #[test]
    fn select_panel_toggles_and_persists() {
        let runtime = create_runtime();
        let prefs = Rc::new(MemoryPrefs::default());
        let state = DashboardState::new(prefs.clone());

        state.select_panel(PanelId::LeastPopularTimeSlot);
        assert_eq!(
            state.focused.get_untracked(),
            Some(PanelId::LeastPopularTimeSlot)
        );
        assert_eq!(prefs.load_focus(), Some(PanelId::LeastPopularTimeSlot));

        // Any further click unfocuses, whichever panel it lands on.
        state.select_panel(PanelId::MostPopularDay);
        assert_eq!(state.focused.get_untracked(), None);
        assert_eq!(prefs.load_focus(), None);
        runtime.dispose();
    }

    #[test]
    fn restore_focus_reads_the_store() {
        let runtime = create_runtime();
        let prefs = Rc::new(MemoryPrefs::default());
        prefs.store_focus(Some(PanelId::MostPopularDay));

        let state = DashboardState::new(prefs);
        state.restore_focus();
        assert_eq!(state.focused.get_untracked(), Some(PanelId::MostPopularDay));
        runtime.dispose();
    }

    #[test]
    fn restore_focus_without_a_stored_value_stays_unfocused() {
        let runtime = create_runtime();
        let state = DashboardState::new(Rc::new(MemoryPrefs::default()));
        state.restore_focus();
        assert_eq!(state.focused.get_untracked(), None);
        runtime.dispose();
    }
}
