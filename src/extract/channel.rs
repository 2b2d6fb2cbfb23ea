use crate::record::Channel;

/// Case-insensitive substring checks in fixed priority. The IMPS → NEFT →
/// UPI → RTGS order is kept as-is for behavioral parity; it only matters
/// when several rail tokens co-occur, which is rare.
pub fn channel(text: &str) -> Channel {
    let upper = text.to_uppercase();

    if upper.contains("IMPS") {
        Channel::Imps
    } else if upper.contains("NEFT") {
        Channel::Neft
    } else if upper.contains("UPI") {
        Channel::Upi
    } else if upper.contains("RTGS") {
        Channel::Rtgs
    } else {
        Channel::Unknown
    }
}
