//! Plain data row types written by output backends.

use lift_sim::TickSnapshot;

/// One tick of simulation state, flattened for writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRow {
    pub tick: u64,
    pub floor: u8,
    /// Lowercase direction name (`idle`/`up`/`down`).
    pub direction: String,
    pub onboard: u64,
    pub waiting: u64,
    /// Pending destination floors, ascending, `;`-joined (e.g. `"3;8"`).
    pub destinations: String,
}

impl From<&TickSnapshot> for SnapshotRow {
    fn from(snapshot: &TickSnapshot) -> Self {
        let destinations = snapshot
            .destinations
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join(";");
        Self {
            tick: snapshot.tick.0,
            floor: snapshot.floor.0,
            direction: snapshot.direction.to_string(),
            onboard: snapshot.onboard as u64,
            waiting: snapshot.waiting as u64,
            destinations,
        }
    }
}
