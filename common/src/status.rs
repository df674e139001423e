//! Machine status feed.
//!
//! Turns the public `/machinestatus` snapshot into a flat list of
//! [`MachineStatusView`] and derives what the status board shows for each
//! machine: progress, estimated completion, time remaining, display state. It
//! also holds the toolbar filter and the "up next" ordering.
//!
//! Usage durations are seconds everywhere: a usage that started at `start`
//! with duration `d` ends at `start + d * 1000 ms`.

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, Utc};

use crate::model::status::{MachineStatus, MachineStatusResponse};

/// How many machines the "up next" panel lists.
pub const UP_NEXT_LIMIT: usize = 3;

const NOT_AVAILABLE: &str = "N/A";

/// What a status card shows for a machine, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MachineState {
    Failed,
    Maintenance,
    Completed,
    InProgress,
    Available,
}

impl MachineState {
    /// Filterable states in toolbar order.
    pub const ALL: [MachineState; 5] = [
        MachineState::InProgress,
        MachineState::Completed,
        MachineState::Available,
        MachineState::Failed,
        MachineState::Maintenance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MachineState::Failed => "Failed",
            MachineState::Maintenance => "Maintenance",
            MachineState::Completed => "Completed",
            MachineState::InProgress => "In Progress",
            MachineState::Available => "Available",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.label() == label)
    }

    /// CSS modifier used by the card for this state.
    pub fn css_class(self) -> &'static str {
        match self {
            MachineState::Failed => "failed",
            MachineState::Maintenance => "maintenance",
            MachineState::Completed => "completed",
            MachineState::InProgress => "in-progress",
            MachineState::Available => "available",
        }
    }
}

/// One machine on the status board, with timestamps parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct MachineStatusView {
    pub id: String,
    pub name: String,
    /// Owning group name, `None` for machines outside any group.
    pub group: Option<String>,
    pub in_use: bool,
    pub failed: bool,
    pub failed_at: Option<DateTime<Utc>>,
    pub user: Option<String>,
    pub usage_start: Option<DateTime<Utc>>,
    /// Seconds.
    pub usage_duration: Option<u64>,
    pub maintenance_mode: bool,
    pub disabled: bool,
}

impl MachineStatusView {
    fn from_wire(status: MachineStatus, group: Option<&str>) -> Self {
        Self {
            usage_start: status.usage_start.as_deref().and_then(parse_timestamp),
            failed_at: status.failed_at.as_deref().and_then(parse_timestamp),
            id: status.id,
            name: status.name,
            group: group.map(str::to_string),
            in_use: status.in_use,
            failed: status.failed,
            user: status.user_name,
            usage_duration: status.usage_duration,
            maintenance_mode: status.maintenance_mode,
            disabled: status.disabled,
        }
    }

    /// Start and end of the current usage, when both are known and the
    /// duration is not zero.
    fn window(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let start = self.usage_start?;
        let seconds = self.usage_duration.filter(|seconds| *seconds > 0)?;
        let seconds = i64::try_from(seconds).ok()?;
        let end = start.checked_add_signed(Duration::try_seconds(seconds)?)?;
        Some((start, end))
    }

    pub fn estimated_end(&self) -> Option<DateTime<Utc>> {
        self.window().map(|(_, end)| end)
    }

    /// Elapsed share of the usage in percent, clamped to `0..=100`.
    pub fn progress(&self, now: DateTime<Utc>) -> f64 {
        let Some((start, end)) = self.window() else {
            return 0.0;
        };
        let elapsed = (now - start).num_milliseconds() as f64;
        let total = (end - start).num_milliseconds() as f64;
        (elapsed / total * 100.0).clamp(0.0, 100.0)
    }

    pub fn state(&self, now: DateTime<Utc>) -> MachineState {
        if self.failed {
            MachineState::Failed
        } else if self.maintenance_mode || self.disabled {
            MachineState::Maintenance
        } else if self.in_use {
            match self.estimated_end() {
                Some(end) if now >= end => MachineState::Completed,
                _ => MachineState::InProgress,
            }
        } else {
            MachineState::Available
        }
    }

    /// `"{h}h {m}m Remaining"` until the estimated end.
    pub fn time_remaining(&self, now: DateTime<Utc>) -> String {
        let seconds = self
            .estimated_end()
            .map(|end| (end - now).num_seconds().max(0))
            .unwrap_or(0);
        format!("{}h {}m Remaining", seconds / 3600, (seconds % 3600) / 60)
    }

    /// Estimated completion in the viewer's offset, or `"N/A"`.
    pub fn end_time_display(&self, offset: FixedOffset) -> String {
        self.estimated_end()
            .map(|end| format_end_time(end, offset))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn user_display(&self) -> &str {
        self.user.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

/// Formats like `"October 19, 3:04 PM"`.
pub fn format_end_time(end: DateTime<Utc>, offset: FixedOffset) -> String {
    end.with_timezone(&offset)
        .format("%B %-d, %-I:%M %p")
        .to_string()
}

/// Parses an API timestamp. Accepts RFC 3339 and naive ISO timestamps, the
/// latter taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    log::warn!("unparseable timestamp {:?}", raw);
    None
}

/// Flattens a status snapshot: loners first, then each group's machines in
/// response order.
pub fn normalize(response: MachineStatusResponse) -> Vec<MachineStatusView> {
    let MachineStatusResponse { groups, loners } = response;
    let mut machines: Vec<MachineStatusView> = loners
        .into_iter()
        .map(|status| MachineStatusView::from_wire(status, None))
        .collect();
    for group in groups {
        let name = group.name;
        machines.extend(
            group
                .machines
                .into_iter()
                .map(|status| MachineStatusView::from_wire(status, Some(&name))),
        );
    }
    machines
}

/// Machines in use, soonest to finish first, at most `limit` of them.
pub fn up_next(machines: &[MachineStatusView], limit: usize) -> Vec<&MachineStatusView> {
    let mut running: Vec<(&MachineStatusView, DateTime<Utc>)> = machines
        .iter()
        .filter(|machine| machine.in_use && !machine.failed)
        .filter_map(|machine| machine.estimated_end().map(|end| (machine, end)))
        .collect();
    running.sort_by_key(|(_, end)| *end);
    running
        .into_iter()
        .take(limit)
        .map(|(machine, _)| machine)
        .collect()
}

/// Distinct group names of a snapshot in response order, including groups
/// that currently have no machines.
pub fn group_names(response: &MachineStatusResponse) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for group in &response.groups {
        if !names.contains(&group.name) {
            names.push(group.name.clone());
        }
    }
    names
}

/// Which toolbar section a filter value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Group,
    State,
}

/// One titled group of values in the toolbar filter popover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSection {
    pub name: &'static str,
    pub kind: FilterKind,
    pub values: Vec<String>,
}

/// Filter sections: the snapshot's group names, then the state labels.
pub fn filter_sections(groups: &[String]) -> Vec<FilterSection> {
    vec![
        FilterSection {
            name: "Machine Group",
            kind: FilterKind::Group,
            values: groups.to_vec(),
        },
        FilterSection {
            name: "Status",
            kind: FilterKind::State,
            values: MachineState::ALL
                .iter()
                .map(|state| state.label().to_string())
                .collect(),
        },
    ]
}

/// Active toolbar filters. Groups and states are kept apart, so a group may
/// share its name with a state label. The two kinds combine with AND, values
/// of one kind with OR.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusFilter {
    groups: Vec<String>,
    states: Vec<MachineState>,
}

impl StatusFilter {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.states.is_empty()
    }

    pub fn is_active(&self, kind: FilterKind, value: &str) -> bool {
        match kind {
            FilterKind::Group => self.groups.iter().any(|group| group == value),
            FilterKind::State => MachineState::from_label(value)
                .is_some_and(|state| self.states.contains(&state)),
        }
    }

    pub fn add(&mut self, kind: FilterKind, value: &str) {
        if self.is_active(kind, value) {
            return;
        }
        match kind {
            FilterKind::Group => self.groups.push(value.to_string()),
            FilterKind::State => match MachineState::from_label(value) {
                Some(state) => self.states.push(state),
                None => log::warn!("ignoring unknown state filter {:?}", value),
            },
        }
    }

    pub fn remove(&mut self, kind: FilterKind, value: &str) {
        match kind {
            FilterKind::Group => self.groups.retain(|group| group != value),
            FilterKind::State => {
                if let Some(state) = MachineState::from_label(value) {
                    self.states.retain(|active| *active != state);
                }
            }
        }
    }

    pub fn toggle(&mut self, kind: FilterKind, value: &str) {
        if self.is_active(kind, value) {
            self.remove(kind, value);
        } else {
            self.add(kind, value);
        }
    }

    pub fn clear(&mut self) {
        self.groups.clear();
        self.states.clear();
    }

    pub fn matches(&self, machine: &MachineStatusView, now: DateTime<Utc>) -> bool {
        let group_ok = self.groups.is_empty()
            || machine
                .group
                .as_ref()
                .is_some_and(|group| self.groups.contains(group));
        let state_ok = self.states.is_empty() || self.states.contains(&machine.state(now));

        group_ok && state_ok
    }

    pub fn apply<'a>(
        &self,
        machines: &'a [MachineStatusView],
        now: DateTime<Utc>,
    ) -> Vec<&'a MachineStatusView> {
        machines
            .iter()
            .filter(|machine| self.matches(machine, now))
            .collect()
    }
}
