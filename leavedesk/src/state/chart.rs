use leave_api::endpoints::{leave::LeaveRequest, STATUS_APPROVED, STATUS_PENDING, STATUS_REJECTED};

/// Exact-match status tallies. Requests with any other status are not counted.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: u64,
    pub approved: u64,
    pub rejected: u64,
}

impl StatusCounts {
    pub fn tally<'a>(leaves: impl IntoIterator<Item = &'a LeaveRequest>) -> Self {
        let mut counts = Self::default();
        for leave in leaves {
            match leave.status.as_deref() {
                Some(STATUS_PENDING) => counts.pending += 1,
                Some(STATUS_APPROVED) => counts.approved += 1,
                Some(STATUS_REJECTED) => counts.rejected += 1,
                _ => {}
            }
        }
        counts
    }

    pub fn total(&self) -> u64 {
        self.pending + self.approved + self.rejected
    }

    /// Bars in display order
    pub fn bars(&self) -> [(&'static str, u64); 3] {
        [
            (STATUS_PENDING, self.pending),
            (STATUS_APPROVED, self.approved),
            (STATUS_REJECTED, self.rejected),
        ]
    }
}

/// A drawn chart. Replaced, never updated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartInstance {
    pub generation: u64,
    pub counts: StatusCounts,
}

/// Owner of the leaves panel's status chart.
///
/// Each redraw disposes the live instance before creating the next one, so at
/// most one instance exists at any time.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct StatusChart {
    instance: Option<ChartInstance>,
    created: u64,
    disposed: u64,
}

impl StatusChart {
    pub fn redraw<'a>(&mut self, source: impl IntoIterator<Item = &'a LeaveRequest>) {
        self.dispose();

        self.created += 1;
        let instance = ChartInstance {
            generation: self.created,
            counts: StatusCounts::tally(source),
        };
        tracing::debug!(
            generation = instance.generation,
            "Status chart redrawn: {:?}",
            instance.counts
        );
        self.instance = Some(instance);
    }

    pub fn dispose(&mut self) {
        if self.instance.take().is_some() {
            self.disposed += 1;
        }
    }

    pub fn instance(&self) -> Option<&ChartInstance> {
        self.instance.as_ref()
    }

    pub fn counts(&self) -> Option<StatusCounts> {
        self.instance.as_ref().map(|i| i.counts)
    }

    pub fn created(&self) -> u64 {
        self.created
    }

    pub fn disposed(&self) -> u64 {
        self.disposed
    }
}
