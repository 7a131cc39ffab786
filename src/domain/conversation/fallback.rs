//! Canned interviewer replies.
//!
//! Used verbatim when no completion credential is configured, and for the
//! degraded reply when a live call fails.

use super::completion::MAX_EXCHANGES;

/// Scripted replies for exchanges 1, 2 and 3. The last one carries the
/// completion marker, so a scripted interview always closes on turn 3.
pub const FALLBACK_REPLIES: [&str; 3] = [
    "เข้าใจความกังวลของคุณ คุณสามารถอธิบายเพิ่มเติมได้ไหมว่าอะไรที่ทำให้คุณรู้สึกแบบนี้?",
    "นั่นเป็นความกังวลที่เข้าใจได้ คุณคิดว่าจะส่งผลกระทบต่อการทำงานอย่างไร?",
    "ขอบคุณที่แบ่งปันความคิดเห็น มีอะไรอื่นที่คุณต้องการพูดคุยเพิ่มเติมหรือไม่? [COMPLETE]",
];

/// Asks the respondent to elaborate. Also stands in for an empty completion.
pub const CLARIFY_REPLY: &str = "เข้าใจ คุณสามารถอธิบายเพิ่มเติมได้ไหม?";

/// Closes the interview when a live call fails on the last exchange.
pub const THANKS_REPLY: &str = "ขอบคุณที่แบ่งปันความคิดเห็น";

/// Table slot for a 1-indexed exchange number.
///
/// Clamped at both ends: zero or negative numbers map to the first reply and
/// anything past the table maps to the last.
pub fn fallback_index(exchange: i64) -> usize {
    let last = FALLBACK_REPLIES.len() - 1;
    exchange.saturating_sub(1).clamp(0, last as i64) as usize
}

/// Scripted reply for an exchange, marker included.
pub fn fallback_reply(exchange: i64) -> &'static str {
    FALLBACK_REPLIES[fallback_index(exchange)]
}

/// Reply substituted when the live gateway fails mid-interview.
pub fn degraded_reply(exchange: i64) -> &'static str {
    if exchange >= MAX_EXCHANGES as i64 {
        THANKS_REPLY
    } else {
        CLARIFY_REPLY
    }
}
