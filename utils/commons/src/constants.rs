/// Tag for the custom SetBaseUrl event.
/// The five tags below this are taken by the standard CIS2 events.
pub const SET_BASE_URL_TAG: u8 = u8::MAX - 5;
