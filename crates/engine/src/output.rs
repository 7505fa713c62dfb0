// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use detectmate_core::EndpointUri;
use detectmate_transport::MessageSocket;
use tracing::warn;

/// One broadcast destination. Once a send fails the slot is marked
/// broken and skipped on every subsequent broadcast: a peer that has
/// gone away does not get retried into, but it also does not stop
/// delivery to the peers that are still healthy.
struct OutputSlot {
    uri: EndpointUri,
    socket: Box<dyn MessageSocket>,
    healthy: bool,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BroadcastReport {
    pub delivered: usize,
    pub skipped_broken: usize,
    pub newly_broken: usize,
}

/// The set of downstream peers a processor's output is fanned out to.
pub struct OutputRegistry {
    slots: Vec<OutputSlot>,
}

impl OutputRegistry {
    pub fn new(sockets: Vec<(EndpointUri, Box<dyn MessageSocket>)>) -> Self {
        let slots = sockets.into_iter().map(|(uri, socket)| OutputSlot { uri, socket, healthy: true }).collect();
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// How many slots are currently marked healthy.
    pub fn healthy_count(&self) -> usize {
        self.slots.iter().filter(|s| s.healthy).count()
    }

    pub fn slot_uris(&self) -> Vec<(EndpointUri, bool)> {
        self.slots.iter().map(|s| (s.uri.clone(), s.healthy)).collect()
    }

    /// Sends `payload` to every healthy slot, marking any slot whose send
    /// fails as broken instead of aborting the broadcast.
    pub async fn broadcast(&mut self, payload: &[u8]) -> BroadcastReport {
        let mut report = BroadcastReport::default();
        for slot in &mut self.slots {
            if !slot.healthy {
                report.skipped_broken += 1;
                continue;
            }
            match slot.socket.send(payload).await {
                Ok(()) => report.delivered += 1,
                Err(err) => {
                    warn!(uri = %slot.uri, error = %err, "output socket broadcast failed, marking slot broken");
                    slot.healthy = false;
                    report.newly_broken += 1;
                }
            }
        }
        report
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
