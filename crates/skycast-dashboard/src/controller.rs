//! Fetch controller: runs issued requests and applies their outcome.

use parking_lot::Mutex;
use skycast_weather::OpenMeteoClient;

use crate::state::{Dashboard, FetchRequest};

/// Run one issued fetch and record its outcome.
///
/// The lock is taken only to record the result, never across the network
/// await, so overlapping refreshes interleave freely; the sequence number
/// carried by `request` decides which outcome lands.
pub async fn refresh(dashboard: &Mutex<Dashboard>, client: &OpenMeteoClient, request: FetchRequest) {
    let result = client.fetch_forecast(&request.coordinates).await;
    dashboard.lock().complete_fetch(request.seq, result);
}
