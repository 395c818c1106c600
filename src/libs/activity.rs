//! Keyboard and mouse activity detection.
//!
//! Input events (keys, mouse buttons, wheel, mouse movement) are captured with
//! `rdev` on a dedicated OS thread and stamp a shared "last activity" instant.
//! A one-second poll task flips the user to inactive once no input has been
//! seen for longer than the inactivity timeout. Any input flips the user back
//! to active immediately.
//!
//! The clock is injectable through [`ActivityDetector::record_activity_at`] and
//! [`ActivityDetector::poll_at`] so the timeout rules can be driven without
//! real input or sleeping.

use crate::libs::messages::Message;
use crate::{msg_info, msg_warning};
use parking_lot::Mutex;
use rdev::{listen, Event, EventType};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Duration, Instant, MissedTickBehavior};

/// Cadence of the inactivity poll.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy)]
pub struct ActivityState {
    pub last_activity: Instant,
    pub is_active: bool,
    pub inactivity_timeout: Duration,
}

pub struct ActivityDetector {
    state: Arc<Mutex<ActivityState>>,
    // Input callbacks are ignored while this is false.
    listening: Arc<AtomicBool>,
    listener_alive: Arc<AtomicBool>,
    poller: Option<(watch::Sender<bool>, JoinHandle<()>)>,
}

impl ActivityDetector {
    pub fn new(inactivity_timeout_secs: u64) -> Self {
        let state = ActivityState {
            last_activity: Instant::now(),
            is_active: true,
            inactivity_timeout: Duration::from_secs(inactivity_timeout_secs),
        };
        ActivityDetector {
            state: Arc::new(Mutex::new(state)),
            listening: Arc::new(AtomicBool::new(false)),
            listener_alive: Arc::new(AtomicBool::new(false)),
            poller: None,
        }
    }

    /// Marks input activity now.
    pub fn record_activity(&self) {
        self.record_activity_at(Instant::now());
    }

    /// Marks input activity at `now`, reactivating the user immediately.
    pub fn record_activity_at(&self, now: Instant) {
        record(&self.state, now);
    }

    pub fn is_user_active(&self) -> bool {
        self.state.lock().is_active
    }

    /// Changes the inactivity timeout; the next poll uses the new value.
    pub fn configure(&self, inactivity_timeout_secs: u64) {
        self.state.lock().inactivity_timeout = Duration::from_secs(inactivity_timeout_secs);
    }

    pub fn state(&self) -> ActivityState {
        *self.state.lock()
    }

    /// Runs one inactivity check now and returns the resulting flag.
    pub fn poll(&self) -> bool {
        self.poll_at(Instant::now())
    }

    /// Runs one inactivity check at `now` and returns the resulting flag.
    pub fn poll_at(&self, now: Instant) -> bool {
        poll(&self.state, now)
    }

    pub fn is_running(&self) -> bool {
        self.poller.is_some()
    }

    /// Starts detection: resets the user to active, attaches the global input
    /// listener and launches the poll task. Does nothing if already running.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        {
            let mut state = self.state.lock();
            state.last_activity = Instant::now();
            state.is_active = true;
        }
        self.listening.store(true, Ordering::SeqCst);
        self.install_listener();
        self.start_polling();
    }

    /// Launches only the poll task, without attaching to OS input events.
    pub fn start_polling(&mut self) {
        if self.is_running() {
            return;
        }
        let (stop_tx, mut stop_rx) = watch::channel(false);
        let state = self.state.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = time::interval(POLL_INTERVAL);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        poll(&state, Instant::now());
                    }
                    changed = stop_rx.changed() => {
                        if changed.is_err() || *stop_rx.borrow() {
                            break;
                        }
                    }
                }
            }
        });
        self.poller = Some((stop_tx, handle));
    }

    /// Stops the poll task and waits for it to finish, then detaches the input
    /// listener. Safe to call repeatedly or without a prior `start`.
    pub async fn stop(&mut self) {
        self.listening.store(false, Ordering::SeqCst);
        if let Some((stop_tx, handle)) = self.poller.take() {
            let _ = stop_tx.send(true);
            let _ = handle.await;
        }
    }

    // rdev cannot unhook a running listener, so the thread lives for the rest
    // of the process and is only muted through `listening`.
    fn install_listener(&self) {
        if self.listener_alive.swap(true, Ordering::SeqCst) {
            return;
        }
        let state = self.state.clone();
        let listening = self.listening.clone();
        let alive = self.listener_alive.clone();

        let spawned = std::thread::Builder::new().name("streakr-input".to_string()).spawn(move || {
            loop {
                let state_for_listener = state.clone();
                let listening_for_listener = listening.clone();
                let result = listen(move |event: Event| {
                    if !listening_for_listener.load(Ordering::Relaxed) {
                        return;
                    }
                    match event.event_type {
                        EventType::KeyPress(_) | EventType::ButtonPress(_) | EventType::Wheel { .. } | EventType::MouseMove { .. } => {
                            record(&state_for_listener, Instant::now());
                        }
                        _ => {}
                    }
                });
                match result {
                    Ok(()) => break,
                    Err(e) => {
                        if !listening.load(Ordering::SeqCst) {
                            break;
                        }
                        msg_warning!(Message::ActivityListenerFailed(format!("{:?}", e)));
                        std::thread::sleep(Duration::from_secs(1));
                    }
                }
            }
            alive.store(false, Ordering::SeqCst);
        });

        if let Err(e) = spawned {
            self.listener_alive.store(false, Ordering::SeqCst);
            msg_warning!(Message::ActivityListenerFailed(e.to_string()));
        }
    }
}

impl Drop for ActivityDetector {
    fn drop(&mut self) {
        self.listening.store(false, Ordering::SeqCst);
        if let Some((stop_tx, _)) = self.poller.take() {
            let _ = stop_tx.send(true);
        }
    }
}

fn record(state: &Mutex<ActivityState>, now: Instant) {
    let mut state = state.lock();
    if now > state.last_activity {
        state.last_activity = now;
    }
    if !state.is_active {
        state.is_active = true;
        msg_info!(Message::ActivityResumed);
    }
}

fn poll(state: &Mutex<ActivityState>, now: Instant) -> bool {
    let mut state = state.lock();
    if state.is_active && now.saturating_duration_since(state.last_activity) > state.inactivity_timeout {
        state.is_active = false;
        msg_info!(Message::ActivityBecameIdle);
    }
    state.is_active
}
