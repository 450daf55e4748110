use futures::channel::mpsc::Sender;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairingStatus {
    Scanning,
    Found,
    Connecting,
}

#[derive(Debug, Clone)]
pub enum PairingCommand {
    Confirm,
}

#[derive(Debug, Clone)]
pub enum DeviceEvent {
    // Sent once per link start; commands for this pairing attempt go here.
    LinkReady(Sender<PairingCommand>),
    StateChange(PairingStatus),
    Paired,
}
