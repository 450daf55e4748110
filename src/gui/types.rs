use iced::{Event};

use crate::device::types::{DeviceEvent};
use crate::nav::Screen;

#[derive(Debug, Clone)]
pub enum Message {
    EventOccurred(Event),
    Navigate(Screen),
    GoBack,
    CrownPressed,
    ConfirmPairing,
    ConfirmSent(()),
    DeviceEvent(DeviceEvent),
    WaveformTick,
}
