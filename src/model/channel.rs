/// Number of ground (slider) channels.
pub const GROUND_CHANNELS: usize = 32;

/// Number of air (tower sensor) channels.
pub const AIR_CHANNELS: usize = 6;

/// Total channel count: ground channels first, then air channels.
pub const CHANNEL_COUNT: usize = GROUND_CHANNELS + AIR_CHANNELS;

/// One sample of every channel's hold state, in channel order
/// (0..31 ground, 32..37 air).
pub type ChannelFrame = [bool; CHANNEL_COUNT];

/// An all-released frame.
pub const EMPTY_FRAME: ChannelFrame = [false; CHANNEL_COUNT];
