/**
 * How long (milliseconds) the simulated scan runs before the patient band
 * is reported as found.
 */
pub const SCAN_DELAY: u64 = 2500;

/**
 * How long (milliseconds) the link takes to come up after the user confirms
 * the pairing.
 */
pub const CONNECT_DELAY: u64 = 1500;

/**
 * Capacity of the event channel from the simulated link to the GUI.
 */
pub const EVENT_CHANNEL_SIZE: usize = 64;

/**
 * Capacity of the command channel from the GUI to the simulated link.
 */
pub const COMMAND_CHANNEL_SIZE: usize = 8;
