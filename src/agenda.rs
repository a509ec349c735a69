use crate::types::records::EventRecord;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedEvent {
    pub day: NaiveDate,
    pub event: EventRecord,
}

/// Events split around `today`: upcoming soonest first, past most recent
/// first. Events without a usable date are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Agenda {
    pub upcoming: Vec<DatedEvent>,
    pub past: Vec<DatedEvent>,
}

impl Agenda {
    pub fn build(events: &[EventRecord], today: NaiveDate) -> Self {
        let (mut upcoming, mut past): (Vec<_>, Vec<_>) = events
            .iter()
            .filter_map(|event| {
                event.day().map(|day| DatedEvent {
                    day,
                    event: event.clone(),
                })
            })
            .partition(|dated| dated.day >= today);

        upcoming.sort_by_key(|dated| dated.day);
        past.sort_by(|a, b| b.day.cmp(&a.day));
        Self { upcoming, past }
    }
}
