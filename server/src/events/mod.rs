//! Default Event Handlers
//!
//! Log-only business handlers for the events a bot typically cares about.
//! Replying to messages needs the outbound API, which this server does not have.

use tracing::info;

use crate::webhook::events::EventType;
use crate::webhook::registry::{handler_fn, EventError, EventRegistry};
use crate::webhook::types::EventEnvelope;

/// Registry with a handler for every event this server reacts to.
#[must_use]
pub fn default_registry() -> EventRegistry {
    EventRegistry::new()
        .with(EventType::GroupAtMessageCreate, handler_fn(group_at_message))
        .with(EventType::C2cMessageCreate, handler_fn(c2c_message))
        .with(EventType::FriendAdd, handler_fn(friend_add))
        .with(EventType::FriendDel, handler_fn(friend_del))
        .with(EventType::GroupAddRobot, handler_fn(group_add_robot))
        .with(EventType::GroupDelRobot, handler_fn(group_del_robot))
        .with(EventType::DirectMessageCreate, handler_fn(direct_message))
        .with(EventType::MessageCreate, handler_fn(channel_message))
}

fn group_at_message(_: &EventType, event: &EventEnvelope) -> Result<(), EventError> {
    info!(
        group = event.group().unwrap_or_default(),
        author = event.author_id().unwrap_or_default(),
        message_id = event.id.as_deref().unwrap_or_default(),
        content = event.content.as_deref().unwrap_or_default(),
        "Group @ message"
    );
    Ok(())
}

fn c2c_message(_: &EventType, event: &EventEnvelope) -> Result<(), EventError> {
    info!(
        author = event.author_id().unwrap_or_default(),
        message_id = event.id.as_deref().unwrap_or_default(),
        content = event.content.as_deref().unwrap_or_default(),
        "C2C message"
    );
    Ok(())
}

fn friend_add(_: &EventType, event: &EventEnvelope) -> Result<(), EventError> {
    info!(
        author = event.author_id().unwrap_or_default(),
        "Friend added"
    );
    Ok(())
}

fn friend_del(_: &EventType, event: &EventEnvelope) -> Result<(), EventError> {
    info!(
        author = event.author_id().unwrap_or_default(),
        "Friend removed"
    );
    Ok(())
}

fn group_add_robot(_: &EventType, event: &EventEnvelope) -> Result<(), EventError> {
    info!(group = event.group().unwrap_or_default(), "Bot added to group");
    Ok(())
}

fn group_del_robot(_: &EventType, event: &EventEnvelope) -> Result<(), EventError> {
    info!(
        group = event.group().unwrap_or_default(),
        "Bot removed from group"
    );
    Ok(())
}

fn direct_message(_: &EventType, event: &EventEnvelope) -> Result<(), EventError> {
    info!(
        author = event.author_id().unwrap_or_default(),
        content = event.content.as_deref().unwrap_or_default(),
        "Guild direct message"
    );
    Ok(())
}

fn channel_message(_: &EventType, event: &EventEnvelope) -> Result<(), EventError> {
    info!(
        author = event.author_id().unwrap_or_default(),
        content = event.content.as_deref().unwrap_or_default(),
        "Channel message"
    );
    Ok(())
}
