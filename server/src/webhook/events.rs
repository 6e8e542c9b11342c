//! Event Type Tags
//!
//! The `t` field of an `op = 0` delivery. The set is open-ended: tags this
//! build does not know are carried as [`EventType::Unknown`] and acknowledged.

use std::fmt;

/// Platform event types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventType {
    /// A member @-mentioned the bot in a group.
    GroupAtMessageCreate,
    /// A user sent the bot a private (C2C) message.
    C2cMessageCreate,
    /// A user added the bot as a friend.
    FriendAdd,
    /// A user removed the bot as a friend.
    FriendDel,
    /// The bot was added to a group.
    GroupAddRobot,
    /// The bot was removed from a group.
    GroupDelRobot,
    /// A message was posted in a guild channel.
    MessageCreate,
    /// A message was deleted in a guild channel.
    MessageDelete,
    /// A guild direct message was sent to the bot.
    DirectMessageCreate,
    /// The bot was @-mentioned in a guild channel.
    AtMessageCreate,
    /// The bot joined a guild.
    GuildCreate,
    /// A guild the bot is in was updated.
    GuildUpdate,
    /// The bot left a guild or it was deleted.
    GuildDelete,
    /// Any tag not listed above.
    Unknown(String),
}

impl EventType {
    /// Every known event type, in declaration order.
    pub const KNOWN: &'static [Self] = &[
        Self::GroupAtMessageCreate,
        Self::C2cMessageCreate,
        Self::FriendAdd,
        Self::FriendDel,
        Self::GroupAddRobot,
        Self::GroupDelRobot,
        Self::MessageCreate,
        Self::MessageDelete,
        Self::DirectMessageCreate,
        Self::AtMessageCreate,
        Self::GuildCreate,
        Self::GuildUpdate,
        Self::GuildDelete,
    ];

    /// Parse a tag (e.g., `"GROUP_AT_MESSAGE_CREATE"`). Never fails.
    pub fn parse_str(s: &str) -> Self {
        match s {
            "GROUP_AT_MESSAGE_CREATE" => Self::GroupAtMessageCreate,
            "C2C_MESSAGE_CREATE" => Self::C2cMessageCreate,
            "FRIEND_ADD" => Self::FriendAdd,
            "FRIEND_DEL" => Self::FriendDel,
            "GROUP_ADD_ROBOT" => Self::GroupAddRobot,
            "GROUP_DEL_ROBOT" => Self::GroupDelRobot,
            "MESSAGE_CREATE" => Self::MessageCreate,
            "MESSAGE_DELETE" => Self::MessageDelete,
            "DIRECT_MESSAGE_CREATE" => Self::DirectMessageCreate,
            "AT_MESSAGE_CREATE" => Self::AtMessageCreate,
            "GUILD_CREATE" => Self::GuildCreate,
            "GUILD_UPDATE" => Self::GuildUpdate,
            "GUILD_DELETE" => Self::GuildDelete,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The wire tag.
    pub fn as_str(&self) -> &str {
        match self {
            Self::GroupAtMessageCreate => "GROUP_AT_MESSAGE_CREATE",
            Self::C2cMessageCreate => "C2C_MESSAGE_CREATE",
            Self::FriendAdd => "FRIEND_ADD",
            Self::FriendDel => "FRIEND_DEL",
            Self::GroupAddRobot => "GROUP_ADD_ROBOT",
            Self::GroupDelRobot => "GROUP_DEL_ROBOT",
            Self::MessageCreate => "MESSAGE_CREATE",
            Self::MessageDelete => "MESSAGE_DELETE",
            Self::DirectMessageCreate => "DIRECT_MESSAGE_CREATE",
            Self::AtMessageCreate => "AT_MESSAGE_CREATE",
            Self::GuildCreate => "GUILD_CREATE",
            Self::GuildUpdate => "GUILD_UPDATE",
            Self::GuildDelete => "GUILD_DELETE",
            Self::Unknown(tag) => tag,
        }
    }

    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_round_trip() {
        for event_type in EventType::KNOWN {
            assert!(event_type.is_known());
            assert_eq!(&EventType::parse_str(event_type.as_str()), event_type);
        }
    }

    #[test]
    fn unknown_tag_is_preserved() {
        let event_type = EventType::parse_str("UNKNOWN_FUTURE_TYPE");
        assert_eq!(event_type, EventType::Unknown("UNKNOWN_FUTURE_TYPE".into()));
        assert!(!event_type.is_known());
        assert_eq!(event_type.to_string(), "UNKNOWN_FUTURE_TYPE");
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert!(!EventType::parse_str("friend_add").is_known());
    }
}
