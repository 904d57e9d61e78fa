//! Presence sweeper
//!
//! Periodically evicts participants whose last heartbeat is older than the
//! inactivity timeout, appending a departure status message for each one.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chatroom_core::{DomainError, NewMessage, Participant};
use chrono::{DateTime, Utc};
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, instrument, warn};

use super::context::ServiceContext;

/// Counters for one completed sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Participants looked at
    pub scanned: usize,
    /// Participants removed, each with a departure message
    pub evicted: usize,
    /// Stale participants kept because they were touched during the sweep
    pub refreshed: usize,
    /// Stale participants whose eviction did not complete
    pub failed: usize,
}

/// Result of a sweep request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepOutcome {
    Completed(SweepReport),
    /// Another sweep was still running
    Skipped,
    /// Participants could not be listed; nothing was evicted
    Aborted,
}

impl SweepOutcome {
    pub fn report(&self) -> Option<SweepReport> {
        match self {
            Self::Completed(report) => Some(*report),
            Self::Skipped | Self::Aborted => None,
        }
    }
}

/// Clears the in-progress flag when a sweep ends, including on early return
struct SweepGuard<'a>(&'a AtomicBool);

impl Drop for SweepGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Inactivity sweeper
pub struct PresenceSweeper {
    ctx: ServiceContext,
    interval: Duration,
    /// A sweep is in progress
    sweeping: AtomicBool,
    /// The periodic task is running
    running: AtomicBool,
    shutdown: Notify,
}

impl PresenceSweeper {
    /// Create a sweeper using the context's configured interval
    pub fn new(ctx: ServiceContext) -> Self {
        let interval = ctx.presence().sweep_interval();
        Self::with_interval(ctx, interval)
    }

    /// Create a sweeper with an explicit tick interval
    pub fn with_interval(ctx: ServiceContext, interval: Duration) -> Self {
        Self {
            ctx,
            interval,
            sweeping: AtomicBool::new(false),
            running: AtomicBool::new(false),
            shutdown: Notify::new(),
        }
    }

    /// Whether the periodic task is running
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Run one sweep against the current time
    pub async fn sweep(&self) -> SweepOutcome {
        self.sweep_at(Utc::now()).await
    }

    /// Run one sweep treating `now` as the current time
    ///
    /// Returns `Skipped` immediately when another sweep is in progress.
    /// Stale participants are handled one at a time and a failure on one
    /// never stops the others.
    #[instrument(skip(self))]
    pub async fn sweep_at(&self, now: DateTime<Utc>) -> SweepOutcome {
        let Some(_guard) = self.try_begin() else {
            debug!("Sweep already in progress, skipping");
            return SweepOutcome::Skipped;
        };

        let participants = match self.ctx.participant_repo().find_all().await {
            Ok(participants) => participants,
            Err(e) => {
                warn!(error = %e, "Failed to list participants, skipping sweep");
                return SweepOutcome::Aborted;
            }
        };

        let timeout = self.ctx.inactivity_timeout();
        let mut report = SweepReport {
            scanned: participants.len(),
            ..SweepReport::default()
        };

        for participant in participants.iter().filter(|p| p.is_stale(now, timeout)) {
            match self.evict(participant, now).await {
                Ok(true) => report.evicted += 1,
                Ok(false) => report.refreshed += 1,
                Err(e) => {
                    report.failed += 1;
                    warn!(name = %participant.name, error = %e, "Failed to evict participant");
                }
            }
        }

        debug!(
            scanned = report.scanned,
            evicted = report.evicted,
            refreshed = report.refreshed,
            failed = report.failed,
            "Sweep finished"
        );

        SweepOutcome::Completed(report)
    }

    /// Append the departure, then remove the participant if it has not been
    /// touched since it was listed
    ///
    /// Returns `false` when the participant was refreshed, re-registered or
    /// already removed. The participant is kept when the departure cannot be
    /// appended, so the next sweep retries it.
    async fn evict(
        &self,
        participant: &Participant,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        self.ctx
            .message_repo()
            .append(NewMessage::departure(&participant.name, now))
            .await?;

        let removed = self
            .ctx
            .participant_repo()
            .delete_if_inactive(&participant.name, participant.last_active)
            .await?;

        if removed {
            info!(
                name = %participant.name,
                inactive_secs = participant.inactive_for(now).num_seconds(),
                "Participant evicted"
            );
        } else {
            info!(name = %participant.name, "Participant active again, kept");
        }
        Ok(removed)
    }

    fn try_begin(&self) -> Option<SweepGuard<'_>> {
        self.sweeping
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SweepGuard(&self.sweeping))
    }

    /// Start the periodic sweep
    ///
    /// The first sweep runs one interval after start. Returns `None` if the
    /// sweeper is already running.
    pub fn start(self: Arc<Self>) -> Option<JoinHandle<()>> {
        if self.running.swap(true, Ordering::SeqCst) {
            warn!("Presence sweeper is already running");
            return None;
        }

        let sweeper = self.clone();
        let handle = tokio::spawn(async move {
            sweeper.run().await;
        });

        info!(
            interval_secs = self.interval.as_secs_f64(),
            timeout_secs = self.ctx.presence().inactivity_timeout_secs,
            "Presence sweeper started"
        );
        Some(handle)
    }

    /// Stop the periodic sweep
    ///
    /// A sweep in progress finishes before the task exits.
    pub fn stop(&self) {
        if self.running.swap(false, Ordering::SeqCst) {
            self.shutdown.notify_one();
            info!("Presence sweeper stopped");
        }
    }

    async fn run(&self) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.sweep().await;
                }
                () = self.shutdown.notified() => break,
            }
        }

        debug!("Presence sweeper loop ended");
    }
}

impl std::fmt::Debug for PresenceSweeper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PresenceSweeper")
            .field("interval", &self.interval)
            .field("running", &self.is_running())
            .finish()
    }
}
