//! Point award rules.
//!
//! Points are the engagement currency of cChat. Awards are small fixed
//! amounts with cumulative bonuses for longer conversations.

/// Flat award for starting a new chat session.
pub const NEW_SESSION_POINTS: i32 = 5;

/// Fixed award attached to every user-authored message row.
pub const USER_MESSAGE_POINTS: i32 = 1;

/// First bonus tier: conversations at or past this many messages.
const LONG_CONVERSATION_THRESHOLD: i32 = 10;
const LONG_CONVERSATION_BONUS: i32 = 2;

/// Second bonus tier, cumulative with the first.
const VERY_LONG_CONVERSATION_THRESHOLD: i32 = 20;
const VERY_LONG_CONVERSATION_BONUS: i32 = 3;

/// Computes the points earned for one completed exchange, given the
/// session's resulting message count.
///
/// Base award is 1. Conversations reaching 10 messages add 2, and
/// conversations reaching 20 messages add 3 more. Tiers are cumulative:
/// a 25-message conversation earns 1 + 2 + 3 = 6 for the round.
pub fn points_for_exchange(message_count: i32) -> i32 {
    let mut points = USER_MESSAGE_POINTS;
    if message_count >= LONG_CONVERSATION_THRESHOLD {
        points += LONG_CONVERSATION_BONUS;
    }
    if message_count >= VERY_LONG_CONVERSATION_THRESHOLD {
        points += VERY_LONG_CONVERSATION_BONUS;
    }
    points
}
