use futures::channel::mpsc::Sender;
use futures::SinkExt;
use iced::{Application, Command, Element, Settings, Size, Subscription, window};
use iced::event::{self, Event};
use iced::time::{every as iced_time_every};
use iced::theme::{Theme};
use iced::window::icon;
use log::info;
use tokio_util::sync::{CancellationToken};

use crate::device::simulation::pair_device_subscription;
use crate::device::types::{DeviceEvent, PairingCommand, PairingStatus};
use crate::error::AppRunError;
use crate::gui::shell;
use crate::gui::types::Message;
use crate::nav::{Navigation, Screen};
use crate::waveform::{WaveformSweep, FRAME_INTERVAL};

pub struct WatchApplication {
    // this token is cancelled upon exit
    app_cancel: CancellationToken,

    pub(crate) nav: Navigation,

    // local to the pairing screen; reset whenever the screen is left
    pub(crate) pairing: PairingStatus,
    pairing_link: Option<Sender<PairingCommand>>,

    pub(crate) sweep: WaveformSweep,
}

impl WatchApplication {
    fn before_close(&mut self) {
        self.app_cancel.cancel();
    }

    fn confirm_pairing(&self) -> Command<Message> {
        let sender = match &self.pairing_link {
            Some(sender) => sender,
            None => return Command::none(),
        };
        let mut sender = sender.clone();

        let fut = async move {
            sender.send(PairingCommand::Confirm).await
                .expect("Failed to send PairingCommand");
        };

        Command::perform(fut, Message::ConfirmSent)
    }
}

impl Application for WatchApplication {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = ();

    fn new(_flags: ()) -> (WatchApplication, Command<Self::Message>) {
        let app = WatchApplication {
            app_cancel: CancellationToken::new(),
            nav: Navigation::new(),
            pairing: PairingStatus::Scanning,
            pairing_link: None,
            sweep: WaveformSweep::new(),
        };

        (app, Command::none())
    }

    fn title(&self) -> String {
        String::from(concat!("MediWatch Sim ", env!("CARGO_PKG_VERSION")))
    }

    fn update(&mut self, message: Message) -> Command<Self::Message> {
        match message {
            Message::EventOccurred(Event::Window(id, window::Event::CloseRequested)) => {
                info!("Close requested");
                self.before_close();
                return window::close(id);
            },
            Message::EventOccurred(_) => {},

            Message::Navigate(target) => {
                if target == Screen::Ecg {
                    // the trace restarts every time the ECG screen is entered
                    self.sweep.reset();
                }
                self.nav.navigate(target);
            },
            Message::GoBack => {
                self.nav.go_back();
            },
            Message::CrownPressed => {
                // A crown press while already on the pairing screen must not
                // restart the attempt that is still running.
                if self.nav.current() != Screen::Pairing {
                    info!("Crown pressed, back to pairing");
                    self.nav.reset();
                    self.pairing = PairingStatus::Scanning;
                    self.pairing_link = None;
                }
            },

            Message::ConfirmPairing => {
                return self.confirm_pairing();
            },
            Message::ConfirmSent(()) => {},

            Message::DeviceEvent(DeviceEvent::LinkReady(sender)) => {
                self.pairing_link = Some(sender);
            },
            Message::DeviceEvent(DeviceEvent::StateChange(status)) => {
                info!("Pairing status: {:?}", &status);
                self.pairing = status;
            },
            Message::DeviceEvent(DeviceEvent::Paired) => {
                info!("Band paired, showing dashboard");
                self.pairing = PairingStatus::Scanning;
                self.pairing_link = None;
                self.nav.navigate(Screen::Dashboard);
            },

            Message::WaveformTick => {
                if self.nav.current() == Screen::Ecg {
                    self.sweep.advance(&mut rand::thread_rng());
                }
            },
        }

        Command::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![event::listen().map(Message::EventOccurred)];

        // Both timed effects are scoped to their screen: once the screen is
        // left, the subscription is dropped and with it any pending timer.
        if self.nav.current() == Screen::Pairing {
            subscriptions.push(
                pair_device_subscription(self.app_cancel.clone()).map(Message::DeviceEvent)
            );
        }
        if self.nav.current() == Screen::Ecg {
            subscriptions.push(
                iced_time_every(FRAME_INTERVAL).map(|_| Message::WaveformTick)
            );
        }

        Subscription::batch(subscriptions)
    }

    fn view(&self) -> Element<Message> {
        shell::view(self)
    }
}

fn make_icon() -> icon::Icon {
    let bytes = include_bytes!(concat!(env!("OUT_DIR"), "/icon-32-rgba"));
    let bytes = bytes.to_vec();
    icon::from_rgba(bytes, 32, 32).expect("Failed to load window icon")
}

pub fn run_application() -> Result<(), AppRunError> {
    let mut settings = Settings::with_flags(());

    // handle exits ourselves (Event::CloseRequested)
    settings.id = Some("mediwatch-sim".to_string());
    settings.window.exit_on_close_request = false;
    settings.window.size = Size::new(420.0, 580.0);
    settings.window.resizable = false;
    settings.window.icon = Some(make_icon());

    // this function will call process::exit() unless there was a startup error
    WatchApplication::run(settings)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_app() -> WatchApplication {
        WatchApplication::new(()).0
    }

    #[test]
    fn starts_on_the_pairing_screen() {
        let app = new_app();
        assert_eq!(app.nav.current(), Screen::Pairing);
        assert_eq!(app.pairing, PairingStatus::Scanning);
    }

    #[test]
    fn paired_event_opens_the_dashboard() {
        let mut app = new_app();
        let _ = app.update(Message::DeviceEvent(DeviceEvent::StateChange(PairingStatus::Connecting)));
        let _ = app.update(Message::DeviceEvent(DeviceEvent::Paired));

        assert_eq!(app.nav.current(), Screen::Dashboard);
        // ready for the next pairing attempt
        assert_eq!(app.pairing, PairingStatus::Scanning);
    }

    #[test]
    fn crown_returns_to_pairing_from_every_screen() {
        for screen in Screen::all() {
            let mut app = new_app();
            let _ = app.update(Message::Navigate(screen));
            let _ = app.update(Message::CrownPressed);
            assert_eq!(app.nav.current(), Screen::Pairing);
        }
    }

    #[test]
    fn back_lands_on_the_dashboard_from_every_detail_screen() {
        for screen in Screen::all().into_iter().filter(|s| s.is_detail()) {
            let mut app = new_app();
            let _ = app.update(Message::Navigate(screen));
            let _ = app.update(Message::GoBack);
            assert_eq!(app.nav.current(), Screen::Dashboard);
        }
    }

    #[test]
    fn waveform_only_advances_on_the_ecg_screen() {
        let mut app = new_app();
        let _ = app.update(Message::DeviceEvent(DeviceEvent::Paired));

        let _ = app.update(Message::WaveformTick);
        assert!(app.sweep.trace().is_empty());

        let _ = app.update(Message::Navigate(Screen::Ecg));
        let _ = app.update(Message::WaveformTick);
        let _ = app.update(Message::WaveformTick);
        assert_eq!(app.sweep.trace().len(), 2);

        // leaving and re-entering restarts the trace
        let _ = app.update(Message::GoBack);
        let _ = app.update(Message::Navigate(Screen::Ecg));
        assert!(app.sweep.trace().is_empty());
    }
}
