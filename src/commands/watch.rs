//! Foreground tracking with graceful shutdown.
//!
//! The tracker runs on its own task while this command waits for SIGTERM,
//! SIGINT or Ctrl-C. On a signal the tracker finishes its current tick, stops
//! the activity detector and returns; the streak data on disk is at most one
//! tick behind memory.

use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::probe::NativeProbe;
use crate::libs::tracker::Tracker;
use crate::{msg_bail_anyhow, msg_error, msg_info};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let storage = DataStorage::new();
    if Config::read_from(&storage)?.applications.is_empty() {
        msg_bail_anyhow!(Message::NoApplicationsTracked);
    }

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    spawn_signal_handler(shutdown_tx);

    let mut tracker = Tracker::new(storage, Box::new(NativeProbe::new()))?;
    let tracker_handle = tokio::spawn(async move {
        tracker
            .run(async {
                let _ = shutdown_rx.await;
            })
            .await
    });

    match tracker_handle.await {
        Ok(result) => result,
        Err(e) => {
            msg_error!(Message::TrackerTaskPanicked(e.to_string()));
            Err(e.into())
        }
    }
}

fn spawn_signal_handler(shutdown_tx: tokio::sync::oneshot::Sender<()>) {
    #[cfg(unix)]
    {
        tokio::spawn(async move {
            use tokio::signal::unix::{signal, SignalKind};

            let (mut sigterm, mut sigint) = match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
                (Ok(sigterm), Ok(sigint)) => (sigterm, sigint),
                (Err(_), _) => {
                    msg_error!(Message::FailedToCreateSigtermHandler);
                    return;
                }
                (_, Err(_)) => {
                    msg_error!(Message::FailedToCreateSigintHandler);
                    return;
                }
            };

            tokio::select! {
                _ = sigterm.recv() => {
                    msg_info!(Message::ReceivedSigterm);
                }
                _ = sigint.recv() => {
                    msg_info!(Message::ReceivedSigint);
                }
            }

            let _ = shutdown_tx.send(());
        });
    }

    #[cfg(windows)]
    {
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    msg_info!(Message::ReceivedCtrlC);
                }
                Err(e) => {
                    msg_error!(Message::CtrlCListenFailed(e.to_string()));
                }
            }

            let _ = shutdown_tx.send(());
        });
    }

    #[cfg(not(any(unix, windows)))]
    {
        crate::msg_warning!(Message::SignalHandlingNotSupported);
        tokio::spawn(async move {
            std::future::pending::<()>().await;
            let _ = shutdown_tx.send(());
        });
    }
}
