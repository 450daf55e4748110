use std::convert::Infallible;
use iced::subscription::{self, Subscription};
use futures::{StreamExt, SinkExt};
use futures::channel::mpsc::{channel, Receiver, Sender};
use log::info;
use tokio_util::sync::CancellationToken;
use tokio::time::{sleep, Duration};

use crate::device::constants::{SCAN_DELAY, CONNECT_DELAY, COMMAND_CHANNEL_SIZE, EVENT_CHANNEL_SIZE};
use crate::device::types::{DeviceEvent, PairingCommand, PairingStatus};

// The pairing is a deterministic simulation: scanning always finds the
// patient band, and connecting always succeeds.
#[derive(Debug)]
enum LinkState {
    Scanning,
    Found,
    Connecting,
    Paired,
}

async fn advance_state(state: LinkState, commands: &mut Receiver<PairingCommand>) -> LinkState {
    match state {
        LinkState::Scanning => {
            sleep(Duration::from_millis(SCAN_DELAY)).await;
            info!("Patient band found");
            LinkState::Found
        },
        LinkState::Found => {
            match commands.next().await {
                Some(PairingCommand::Confirm) => {
                    info!("Pairing confirmed, connecting...");
                    LinkState::Connecting
                },
                // The GUI dropped its command sender; nothing left to wait for.
                None => futures::future::pending::<LinkState>().await,
            }
        },
        LinkState::Connecting => {
            sleep(Duration::from_millis(CONNECT_DELAY)).await;
            info!("Link established");
            LinkState::Paired
        },
        // Terminal for this attempt; a new attempt starts a new link.
        LinkState::Paired => futures::future::pending::<LinkState>().await,
    }
}

async fn pair_device(cancel: CancellationToken, mut events: Sender<DeviceEvent>) -> Infallible {
    let (command_sender, mut command_receiver) = channel::<PairingCommand>(COMMAND_CHANNEL_SIZE);

    events.send(DeviceEvent::LinkReady(command_sender)).await
        .expect("Failed to send DeviceEvent");
    events.send(DeviceEvent::StateChange(PairingStatus::Scanning)).await
        .expect("Failed to send DeviceEvent");

    // note: subscription::channel expects the future to never resolve
    // (Infallible), so the loop idles once cancelled instead of returning.
    let mut link_state = Some(LinkState::Scanning);

    loop {
        let new_state = tokio::select! {
            _ = cancel.cancelled() => {
                futures::future::pending::<LinkState>().await
            }
            state = advance_state(link_state.take().expect("Missing link state"), &mut command_receiver) => state,
        };

        let event = match &new_state {
            LinkState::Scanning => DeviceEvent::StateChange(PairingStatus::Scanning),
            LinkState::Found => DeviceEvent::StateChange(PairingStatus::Found),
            LinkState::Connecting => DeviceEvent::StateChange(PairingStatus::Connecting),
            LinkState::Paired => DeviceEvent::Paired,
        };
        events.send(event).await.expect("Failed to send DeviceEvent");

        link_state = Some(new_state);
    }
}

pub fn pair_device_subscription(cancel: CancellationToken) -> Subscription<DeviceEvent> {
    struct Pair;

    subscription::channel(
        std::any::TypeId::of::<Pair>(),
        EVENT_CHANNEL_SIZE,
        move |subscription_sender| {
            let cancel2 = cancel.clone();

            async move {
                pair_device(cancel2, subscription_sender).await
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn pairing_follows_the_scripted_timeline() {
        let (mut commands_tx, mut commands_rx) = channel::<PairingCommand>(COMMAND_CHANNEL_SIZE);
        let start = tokio::time::Instant::now();

        let state = advance_state(LinkState::Scanning, &mut commands_rx).await;
        assert!(matches!(state, LinkState::Found));
        assert_eq!(start.elapsed(), Duration::from_millis(SCAN_DELAY));

        commands_tx.send(PairingCommand::Confirm).await.unwrap();
        let state = advance_state(state, &mut commands_rx).await;
        assert!(matches!(state, LinkState::Connecting));

        let confirmed_at = tokio::time::Instant::now();
        let state = advance_state(state, &mut commands_rx).await;
        assert!(matches!(state, LinkState::Paired));
        assert_eq!(confirmed_at.elapsed(), Duration::from_millis(CONNECT_DELAY));
    }

    #[tokio::test(start_paused = true)]
    async fn link_emits_the_full_pairing_sequence() {
        let (events_tx, mut events_rx) = channel::<DeviceEvent>(EVENT_CHANNEL_SIZE);
        let cancel = CancellationToken::new();
        tokio::spawn(pair_device(cancel, events_tx));

        let mut link = match events_rx.next().await {
            Some(DeviceEvent::LinkReady(sender)) => sender,
            other => panic!("Expected LinkReady, got {:?}", other),
        };
        assert!(matches!(events_rx.next().await, Some(DeviceEvent::StateChange(PairingStatus::Scanning))));
        assert!(matches!(events_rx.next().await, Some(DeviceEvent::StateChange(PairingStatus::Found))));

        link.send(PairingCommand::Confirm).await.unwrap();
        assert!(matches!(events_rx.next().await, Some(DeviceEvent::StateChange(PairingStatus::Connecting))));
        assert!(matches!(events_rx.next().await, Some(DeviceEvent::Paired)));
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_link_leaves_no_pending_events() {
        let (events_tx, mut events_rx) = channel::<DeviceEvent>(EVENT_CHANNEL_SIZE);
        let cancel = CancellationToken::new();
        let link = tokio::spawn(pair_device(cancel, events_tx));

        assert!(matches!(events_rx.next().await, Some(DeviceEvent::LinkReady(_))));
        assert!(matches!(events_rx.next().await, Some(DeviceEvent::StateChange(PairingStatus::Scanning))));

        // Tear the link down before the scan timer fires; the event stream
        // must end without a Found transition.
        link.abort();
        assert!(events_rx.next().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn app_cancellation_stops_the_timeline() {
        let (events_tx, mut events_rx) = channel::<DeviceEvent>(EVENT_CHANNEL_SIZE);
        let cancel = CancellationToken::new();
        cancel.cancel();
        tokio::spawn(pair_device(cancel, events_tx));

        assert!(matches!(events_rx.next().await, Some(DeviceEvent::LinkReady(_))));
        assert!(matches!(events_rx.next().await, Some(DeviceEvent::StateChange(PairingStatus::Scanning))));

        let found = tokio::time::timeout(Duration::from_millis(SCAN_DELAY * 4), events_rx.next()).await;
        assert!(found.is_err(), "no transitions may fire after shutdown");
    }
}
